//! NBA API boundary: wire types, HTTP client, and the cache-or-fetch gate.

pub mod fetch;
pub mod http;
pub mod types;

pub use fetch::Downloader;
pub use http::StatsClient;

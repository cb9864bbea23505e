//! Flat tabular data: flattening API payloads and CSV reading/writing.

use crate::cli::types::ids::GameId;
use crate::error::Result;
use crate::nba::types::{PlayByPlayGame, ResultSet};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::fs;
use std::io::{self, Write};
use std::mem::take;
use std::path::Path;

/// Column name added to play-by-play rows for the parent game.
pub const GAME_ID_COLUMN: &str = "GAME_ID";
/// Column name for the parsed `timeActual` timestamp.
pub const REALTIME_COLUMN: &str = "realtime_dt";

/// A header list plus a row matrix. Cells are plain strings; numbers and
/// nulls are stringified on the way in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Flatten result sets by zipping each set's headers onto its rows.
    ///
    /// Result sets with an empty row matrix are silently omitted, so the
    /// headers come from the first result set that actually has rows. An
    /// all-empty input yields a zero-row table (valid-but-empty, never an
    /// error) with the first set's headers, if any.
    pub fn from_result_sets(result_sets: &[ResultSet]) -> Table {
        let headers = result_sets
            .iter()
            .find(|rs| !rs.row_set.is_empty())
            .or_else(|| result_sets.first())
            .map(|rs| rs.headers.clone())
            .unwrap_or_default();
        let mut table = Table::new(headers);

        for results in result_sets {
            if results.row_set.is_empty() {
                continue;
            }
            for row in &results.row_set {
                table.rows.push(row.iter().map(value_to_cell).collect());
            }
        }

        table
    }

    /// Flatten a play-by-play payload, whose shape is a single nested
    /// `actions` list rather than the result-set structure.
    ///
    /// Columns are the union of action keys in first-seen order. Each row is
    /// enriched with the parent game ID and with `timeActual` parsed into a
    /// normalized UTC timestamp (empty cell when missing or unparseable).
    pub fn from_actions(game: &PlayByPlayGame) -> Table {
        let mut headers: Vec<String> = Vec::new();
        for action in &game.actions {
            for key in action.keys() {
                if !headers.iter().any(|h| h == key) {
                    headers.push(key.clone());
                }
            }
        }

        let mut table = Table::new(headers.clone());
        table.headers.push(GAME_ID_COLUMN.to_string());
        table.headers.push(REALTIME_COLUMN.to_string());

        let game_id = GameId::new(game.game_id.clone());
        for action in &game.actions {
            let mut row: Vec<String> = headers
                .iter()
                .map(|key| action.get(key).map(value_to_cell).unwrap_or_default())
                .collect();
            row.push(game_id.to_string());
            row.push(parse_realtime(action.get("timeActual")));
            table.rows.push(row);
        }

        table
    }

    /// Row-wise concatenation; headers come from the first table.
    pub fn concat(tables: impl IntoIterator<Item = Table>) -> Table {
        let mut iter = tables.into_iter();
        let mut combined = match iter.next() {
            Some(first) => first,
            None => return Table::default(),
        };
        for table in iter {
            combined.rows.extend(table.rows);
        }
        combined
    }

    /// Values of a named column, in row order.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.headers.iter().position(|h| h == name)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(idx).map(String::as_str).unwrap_or(""))
                .collect(),
        )
    }

    /// Write the table as CSV, creating parent directories as needed.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut buf: Vec<u8> = Vec::new();
        write_row(&mut buf, &self.headers)?;
        for row in &self.rows {
            write_row(&mut buf, row)?;
        }

        fs::write(path, buf)?;
        Ok(())
    }

    /// Read a CSV written by [`Table::write_csv`]; the first row is the
    /// header.
    pub fn read_csv(path: &Path) -> Result<Table> {
        let text = fs::read_to_string(path)?;
        let mut rows = parse_rows(&text);
        if rows.is_empty() {
            return Ok(Table::default());
        }
        let headers = rows.remove(0);
        Ok(Table { headers, rows })
    }
}

/// Stringify a JSON scalar for a table cell. Nulls become empty cells;
/// nested values fall back to compact JSON.
fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Parse an RFC 3339 `timeActual` value into a normalized UTC timestamp.
fn parse_realtime(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc).to_rfc3339())
        .unwrap_or_default()
}

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer.
fn write_row<W: Write>(mut w: W, row: &[String]) -> io::Result<()> {
    // A lone empty cell is quoted so the line does not read back as blank.
    if let [cell] = row {
        if cell.is_empty() {
            return writeln!(w, "\"\"");
        }
    }

    let mut first = true;
    for cell in row {
        if !first {
            write!(w, ",")?;
        } else {
            first = false;
        }
        if needs_quotes(cell) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Minimal CSV parser (quotes + CRLF tolerant). Blank lines are skipped,
/// but a line that carried any content, a quote or a separator included,
/// always produces a row.
fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = String::new();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut line_has_content = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                line_has_content = true;
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            ',' if !in_quotes => {
                line_has_content = true;
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) {
                    chars.next();
                }
                if line_has_content {
                    row.push(take(&mut field));
                    rows.push(take(&mut row));
                }
                line_has_content = false;
            }
            _ => {
                line_has_content = true;
                field.push(ch);
            }
        }
    }

    // Flush any trailing field/row even if quotes were unterminated.
    if line_has_content {
        row.push(field);
        rows.push(row);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn result_set(name: &str, headers: &[&str], row_set: Vec<Vec<Value>>) -> ResultSet {
        ResultSet {
            name: name.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            row_set,
        }
    }

    #[test]
    fn test_from_result_sets_zips_headers_onto_rows() {
        let rs = result_set(
            "TeamGameLogs",
            &["GAME_ID", "WL", "PTS"],
            vec![
                vec![json!("0022100001"), json!("W"), json!(120)],
                vec![json!("0022100002"), json!("L"), json!(97)],
            ],
        );

        let table = Table::from_result_sets(&[rs]);
        assert_eq!(table.headers, vec!["GAME_ID", "WL", "PTS"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], vec!["0022100001", "W", "120"]);
    }

    #[test]
    fn test_from_result_sets_omits_empty_sets() {
        let empty = result_set("Empty", &["A", "B"], vec![]);
        let full = result_set("Full", &["A", "B"], vec![vec![json!(1), json!(2)]]);

        let table = Table::from_result_sets(&[empty, full]);
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn test_from_result_sets_empty_first_set_takes_later_headers() {
        let empty = result_set("Empty", &["A"], vec![]);
        let full = result_set("Full", &["B", "C"], vec![vec![json!(1), json!(2)]]);

        let table = Table::from_result_sets(&[empty, full]);
        assert_eq!(table.headers, vec!["B", "C"]);
        assert_eq!(table.rows, vec![vec!["1", "2"]]);
    }

    #[test]
    fn test_from_result_sets_all_empty_yields_zero_rows() {
        let empty = result_set("Empty", &["A", "B"], vec![]);

        let table = Table::from_result_sets(&[empty]);
        assert_eq!(table.headers, vec!["A", "B"]);
        assert!(table.is_empty());
    }

    #[test]
    fn test_from_result_sets_stringifies_nulls_and_numbers() {
        let rs = result_set(
            "Mixed",
            &["A", "B", "C"],
            vec![vec![json!(null), json!(1.5), json!(true)]],
        );

        let table = Table::from_result_sets(&[rs]);
        assert_eq!(table.rows[0], vec!["", "1.5", "true"]);
    }

    #[test]
    fn test_from_actions_enriches_rows() {
        let game = PlayByPlayGame {
            game_id: "0022100001".to_string(),
            actions: vec![
                serde_json::from_value(json!({
                    "actionNumber": 2,
                    "timeActual": "2021-10-19T23:40:34.1Z",
                    "description": "Jump Ball"
                }))
                .unwrap(),
                serde_json::from_value(json!({
                    "actionNumber": 4,
                    "shotResult": "Made"
                }))
                .unwrap(),
            ],
        };

        let table = Table::from_actions(&game);
        assert!(table.headers.contains(&GAME_ID_COLUMN.to_string()));
        assert!(table.headers.contains(&REALTIME_COLUMN.to_string()));
        assert_eq!(table.rows.len(), 2);

        let game_ids = table.column(GAME_ID_COLUMN).unwrap();
        assert_eq!(game_ids, vec!["0022100001", "0022100001"]);

        // First action has a parseable timestamp, second has none.
        let times = table.column(REALTIME_COLUMN).unwrap();
        assert!(times[0].starts_with("2021-10-19T23:40:34"));
        assert_eq!(times[1], "");

        // Key missing from the second action yields an empty cell.
        let descriptions = table.column("description").unwrap();
        assert_eq!(descriptions[0], "Jump Ball");
        assert_eq!(descriptions[1], "");
    }

    #[test]
    fn test_concat() {
        let mut a = Table::new(vec!["X".to_string()]);
        a.rows.push(vec!["1".to_string()]);
        let mut b = Table::new(vec!["X".to_string()]);
        b.rows.push(vec!["2".to_string()]);

        let combined = Table::concat(vec![a, b]);
        assert_eq!(combined.rows.len(), 2);

        let none: Vec<Table> = vec![];
        assert!(Table::concat(none).is_empty());
    }

    #[test]
    fn test_column_missing() {
        let table = Table::new(vec!["A".to_string()]);
        assert!(table.column("B").is_none());
    }

    #[test]
    fn test_csv_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let mut table = Table::new(vec!["NAME".to_string(), "NOTE".to_string()]);
        table.rows.push(vec![
            "Boston, MA".to_string(),
            "said \"hi\"".to_string(),
        ]);
        table
            .rows
            .push(vec!["Plain".to_string(), String::new()]);

        table.write_csv(&path).unwrap();
        let read_back = Table::read_csv(&path).unwrap();
        assert_eq!(read_back, table);
    }

    #[test]
    fn test_csv_roundtrip_single_column_empty_cell() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("single.csv");

        let mut table = Table::new(vec!["NOTE".to_string()]);
        table.rows.push(vec![String::new()]);
        table.rows.push(vec!["x".to_string()]);

        table.write_csv(&path).unwrap();
        let read_back = Table::read_csv(&path).unwrap();
        assert_eq!(read_back, table);
    }

    #[test]
    fn test_write_csv_empty_table_keeps_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        let table = Table::new(vec!["A".to_string(), "B".to_string()]);
        table.write_csv(&path).unwrap();

        let read_back = Table::read_csv(&path).unwrap();
        assert_eq!(read_back.headers, vec!["A", "B"]);
        assert!(read_back.is_empty());
    }
}

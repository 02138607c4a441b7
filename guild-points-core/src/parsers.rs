//! Parser for `guild_item_points` SQL dump lines.

use crate::error::Result;
use crate::file_utils::open_text_file;
use crate::models::RawRecord;
use lazy_static::lazy_static;
use regex::Regex;
use std::io::BufRead;
use std::path::Path;

lazy_static! {
    // VALUES (guild, item, rank, points, max, pattern); -- Item Name (points / max)
    static ref ROW_RE: Regex = Regex::new(
        r"VALUES \(([0-9]+),([0-9]+),([0-9]+),([0-9]+),([0-9]+),([0-9]+)\); -- (.*) \("
    )
    .unwrap();
}

/// Parse one dump line into a record.
///
/// Returns `None` unless the line carries all six numbers and the commented
/// item name. The name runs up to the last ` (` on the line.
pub fn parse_line(line: &str) -> Option<RawRecord> {
    let caps = ROW_RE.captures(line)?;
    let num = |i: usize| -> Option<u64> { caps.get(i)?.as_str().parse().ok() };

    Some(RawRecord {
        guild_id: num(1)?,
        item_id: num(2)?,
        rank: num(3)?,
        points: num(4)?,
        max_points: num(5)?,
        pattern: num(6)?,
        item_name: caps.get(7)?.as_str().trim().to_string(),
    })
}

/// Parse every matching line from a reader, in input order.
pub fn parse_lines<R: BufRead>(reader: R) -> Result<Vec<RawRecord>> {
    let mut records = Vec::new();
    for line in reader.lines() {
        if let Some(record) = parse_line(&line?) {
            records.push(record);
        }
    }
    Ok(records)
}

/// Parse a SQL dump file.
pub fn parse_sql_dump(file_path: &Path) -> Result<Vec<RawRecord>> {
    let reader = open_text_file(file_path)?;
    let records = parse_lines(reader)?;
    tracing::debug!("Matched {} rows in {}", records.len(), file_path.display());
    Ok(records)
}

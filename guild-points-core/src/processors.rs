//! Grouping and rendering of parsed guild item point records.

use crate::error::Result;
use crate::models::{GuildData, GuildSummary, ItemEntry, RawRecord, guild_name};
use crate::parsers::parse_sql_dump;
use std::path::Path;

/// Return the item list for `guild_id -> pattern -> rank`, creating any
/// missing level on the way.
pub fn ensure_path(
    data: &mut GuildData,
    guild_id: u64,
    pattern: u64,
    rank: u64,
) -> &mut Vec<ItemEntry> {
    data.entry(guild_id)
        .or_default()
        .entry(pattern)
        .or_default()
        .entry(rank)
        .or_default()
}

/// Group records by guild, pattern and rank. Items within a rank keep the
/// order they were given in.
pub fn aggregate<I>(records: I) -> GuildData
where
    I: IntoIterator<Item = RawRecord>,
{
    records.into_iter().fold(GuildData::new(), |mut data, record| {
        ensure_path(&mut data, record.guild_id, record.pattern, record.rank)
            .push(ItemEntry::from(record));
        data
    })
}

/// Render guild data as pretty-printed JSON with 2-space indentation.
pub fn render_json(data: &GuildData) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Convert a SQL dump file into guild data JSON.
pub fn run(input_path: &Path) -> Result<String> {
    let records = parse_sql_dump(input_path)?;
    tracing::info!("Parsed {} item rows from {:?}", records.len(), input_path);

    let data = aggregate(records);
    tracing::info!("Grouped items into {} guilds", data.len());

    render_json(&data)
}

/// Count the leaf item entries across all guilds.
pub fn total_items(data: &GuildData) -> usize {
    data.values()
        .flat_map(|patterns| patterns.values())
        .flat_map(|ranks| ranks.values())
        .map(Vec::len)
        .sum()
}

/// Per-guild pattern, rank and item counts in first-seen guild order.
pub fn summarize(data: &GuildData) -> Vec<GuildSummary> {
    data.iter()
        .map(|(&guild_id, patterns)| GuildSummary {
            guild_id,
            name: guild_name(guild_id),
            patterns: patterns.len(),
            ranks: patterns.values().map(|ranks| ranks.len()).sum(),
            items: patterns
                .values()
                .flat_map(|ranks| ranks.values())
                .map(Vec::len)
                .sum(),
        })
        .collect()
}

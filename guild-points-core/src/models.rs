//! Data models for guild item point data.

use indexmap::IndexMap;
use serde::Serialize;

/// One `guild_item_points` row parsed from the SQL dump
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub guild_id: u64,
    pub item_id: u64,
    pub rank: u64,
    pub points: u64,
    pub max_points: u64,
    pub pattern: u64,
    pub item_name: String,
}

/// Item entry as consumed by the web UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemEntry {
    pub name: String,
    pub id: u64,
    pub points: u64,
    pub max: u64,
}

impl From<RawRecord> for ItemEntry {
    fn from(record: RawRecord) -> Self {
        ItemEntry {
            name: record.item_name,
            id: record.item_id,
            points: record.points,
            max: record.max_points,
        }
    }
}

/// Items available at each rank, keyed by rank
pub type RankData = IndexMap<u64, Vec<ItemEntry>>;

/// Rank data keyed by pattern id
pub type PatternData = IndexMap<u64, RankData>;

/// Full output structure: guild id -> pattern -> rank -> items.
///
/// Keys keep first-seen order. serde_json writes integer map keys as
/// strings, so the rendered document is text-keyed at every level.
pub type GuildData = IndexMap<u64, PatternData>;

/// Display names for crafting guilds, indexed by guild id
const GUILD_NAMES: [&str; 9] = [
    "Fishing",
    "Woodworking",
    "Smithing",
    "Goldsmithing",
    "Clothcraft",
    "Leathercraft",
    "Bonecraft",
    "Alchemy",
    "Cooking",
];

pub fn guild_name(guild_id: u64) -> Option<&'static str> {
    usize::try_from(guild_id)
        .ok()
        .and_then(|idx| GUILD_NAMES.get(idx))
        .copied()
}

/// Per-guild counts reported by the summary command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildSummary {
    pub guild_id: u64,
    pub name: Option<&'static str>,
    pub patterns: usize,
    pub ranks: usize,
    pub items: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_entry_from_record() {
        let record = RawRecord {
            guild_id: 1,
            item_id: 1001,
            rank: 1,
            points: 50,
            max_points: 100,
            pattern: 2,
            item_name: "Sword of Testing".to_string(),
        };
        let entry = ItemEntry::from(record);
        assert_eq!(entry.name, "Sword of Testing");
        assert_eq!(entry.id, 1001);
        assert_eq!(entry.points, 50);
        assert_eq!(entry.max, 100);
    }

    #[test]
    fn test_item_entry_field_order() {
        let entry = ItemEntry {
            name: "Bronze Ingot".to_string(),
            id: 649,
            points: 10,
            max: 20,
        };
        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r#"{"name":"Bronze Ingot","id":649,"points":10,"max":20}"#
        );
    }

    #[test]
    fn test_names() {
        assert_eq!(guild_name(0), Some("Fishing"));
        assert_eq!(guild_name(8), Some("Cooking"));
        assert_eq!(guild_name(9), None);
        assert_eq!(guild_name(u64::MAX), None);
    }
}

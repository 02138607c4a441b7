//! Core library for converting guild item point SQL dumps into guild data JSON.

pub mod error;
pub mod file_utils;
pub mod models;
pub mod parsers;
pub mod processors;

pub use error::{GuildPointsError, Result};
pub use models::{GuildData, ItemEntry, RawRecord};
pub use parsers::{parse_line, parse_lines, parse_sql_dump};
pub use processors::{aggregate, ensure_path, render_json, run};

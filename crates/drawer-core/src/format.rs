use chrono::{DateTime, Datelike, Local};

use crate::config::Config;
use crate::listing::{Entry, EntryKind};

/// Semantic style of one formatted segment. Renderers map these to
/// whatever colors or attributes they have; the engine never emits
/// escape codes itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentStyle {
    Id,
    Permissions,
    LinkCount,
    Owner,
    SizeValue,
    SizeUnit,
    Timestamp,
    Directory,
    Dotfile,
    File,
    Plain,
}

/// One styled piece of a formatted listing line.
#[derive(Debug, Clone)]
pub struct StyledSegment {
    pub text: String,
    pub style: SegmentStyle,
}

/// A listing line as an ordered run of styled segments, plus the column
/// (in characters) where the name field starts. Every pre-name field is
/// fixed width, so the column is identical for all entries of a listing.
#[derive(Debug, Clone)]
pub struct FormattedEntry {
    pub segments: Vec<StyledSegment>,
    pub name_column: usize,
}

impl FormattedEntry {
    /// Concatenated plain text of the line.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Render one entry into the fixed-column listing layout:
/// id, permissions, link count, owner, human size, month, day,
/// time-or-year, name. Directories get the configured separator glyph
/// appended to their name.
pub fn format_entry(config: &Config, entry: &Entry) -> FormattedEntry {
    let mtime: DateTime<Local> = entry.modified_at.into();
    let (size_value, size_unit) = human_size(entry.size_bytes);
    // keep the owner column fixed even when the name overflows it
    let owner: String = entry.owner_name.chars().take(10).collect();

    let mut segments = vec![
        seg(format!("{:<4}", entry.id), SegmentStyle::Id),
        seg(" ", SegmentStyle::Plain),
        seg(entry.permission_string(), SegmentStyle::Permissions),
        seg(" ", SegmentStyle::Plain),
        seg(format!("{:>5}", entry.link_count), SegmentStyle::LinkCount),
        seg(" ", SegmentStyle::Plain),
        seg(format!("{owner:>10}"), SegmentStyle::Owner),
        seg(" ", SegmentStyle::Plain),
        seg(size_value, SegmentStyle::SizeValue),
        seg(size_unit.to_string(), SegmentStyle::SizeUnit),
        seg(" ", SegmentStyle::Plain),
        seg(mtime.format("%b").to_string(), SegmentStyle::Timestamp),
        seg(" ", SegmentStyle::Plain),
        seg(mtime.format("%d").to_string(), SegmentStyle::Timestamp),
        seg(" ", SegmentStyle::Plain),
        seg(clock_field(&mtime), SegmentStyle::Timestamp),
        seg(" ", SegmentStyle::Plain),
    ];
    let name_column = segments
        .iter()
        .map(|s| s.text.chars().count())
        .sum();

    let (name, style) = if entry.kind == EntryKind::Directory {
        (format!("{}{}", entry.name, config.path_separator), SegmentStyle::Directory)
    } else if entry.is_hidden() {
        (entry.name.clone(), SegmentStyle::Dotfile)
    } else {
        (entry.name.clone(), SegmentStyle::File)
    };
    segments.push(seg(name, style));

    FormattedEntry { segments, name_column }
}

fn seg(text: impl Into<String>, style: SegmentStyle) -> StyledSegment {
    StyledSegment {
        text: text.into(),
        style,
    }
}

/// Scale a byte count to a six-wide value and a one-char 1024-based unit.
/// Below 1 KiB the value is the exact integer, above it one decimal.
fn human_size(bytes: u64) -> (String, char) {
    const UNITS: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];
    if bytes < 1024 {
        return (format!("{bytes:>6}"), 'B');
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    (format!("{value:>6.1}"), UNITS[unit])
}

/// Eleven-wide trailing time field: entries from earlier calendar years
/// show the year and clock, everything else month-year and clock.
fn clock_field(mtime: &DateTime<Local>) -> String {
    if mtime.year() < Local::now().year() {
        mtime.format("%Y  %H:%M").to_string()
    } else {
        mtime.format("%m-%y %H:%M").to_string()
    }
}

pub mod config;
pub mod error;
pub mod format;
pub mod listing;
pub mod ops;

pub use config::{Config, ConfigBuilder};
pub use error::{DrawerError, Result};
pub use format::{format_entry, FormattedEntry, SegmentStyle, StyledSegment};
pub use listing::scanner::scan;
pub use listing::{find_by_id, Entry, EntryKind, Mode};
pub use ops::{create, delete, rename};

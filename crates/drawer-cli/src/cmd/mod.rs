pub mod ls;
pub mod mv;
pub mod new;
pub mod rm;
pub mod stat;

use std::path::Path;

use anyhow::Context;
use drawer_core::{scan, Config, Entry};
use tracing::debug;

/// Look a path up as an entry of its containing directory.
///
/// The final component is matched by name against a hidden-inclusive scan
/// of the parent, so symlinks are found as themselves rather than as
/// their targets. Paths without a final component (`/`, `.`, `..`) fall
/// back to the scanned directory's own `.` entry, which the engine
/// refuses to mutate.
pub fn resolve_entry(path: &Path) -> anyhow::Result<Entry> {
    let cfg = Config::builder().show_hidden(true).build();
    let entry = match path.file_name() {
        Some(name) => {
            let parent = match path.parent() {
                Some(p) if !p.as_os_str().is_empty() => p,
                _ => Path::new("."),
            };
            let name = name.to_string_lossy();
            let entries = scan(&cfg, parent)?;
            entries
                .iter()
                .find(|e| e.id >= 2 && e.name == name.as_ref())
                .cloned()
                .with_context(|| format!("no entry `{name}` in {}", parent.display()))?
        }
        None => {
            let entries = scan(&cfg, path)?;
            entries
                .into_iter()
                .next()
                .context("scan returned no entries")?
        }
    };
    debug!(path = %entry.full_path.display(), id = entry.id, "resolved entry");
    Ok(entry)
}

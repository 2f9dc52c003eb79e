use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use super::decode::EntryMeta;
use super::identity::IdentityCache;
use super::{Entry, EntryKind};
use crate::config::Config;
use crate::error::{DrawerError, Result};

/// Scan one directory and return its entries in discovery order.
///
/// The first two entries are always the directory itself (`.`, id 0) and
/// its parent (`..`, id 1); children follow with ids from 2 in the order
/// the OS yields them, unsorted. Ids are only meaningful within the
/// returned vector. A directory that cannot be opened fails the whole
/// call; a child that cannot be decoded is logged and omitted.
pub fn scan(config: &Config, dir: &Path) -> Result<Vec<Entry>> {
    let dir = fs::canonicalize(dir).map_err(|e| DrawerError::from_io("scan", dir, e))?;
    let reader = fs::read_dir(&dir).map_err(|e| DrawerError::from_io("scan", &dir, e))?;

    let mut ids = IdentityCache::new();

    // The parent of the filesystem root is the root itself.
    let parent = dir.parent().unwrap_or(&dir).to_path_buf();
    let grandparent = parent.parent().unwrap_or(&parent).to_path_buf();

    let mut entries = vec![
        synthetic_dir_entry(0, ".", dir.clone(), parent.clone(), &mut ids),
        synthetic_dir_entry(1, "..", parent, grandparent, &mut ids),
    ];

    let mut next_id = 2u32;
    for item in reader {
        let item = match item {
            Ok(item) => item,
            Err(err) => {
                warn!(dir = %dir.display(), error = %err, "skipping unreadable directory item");
                continue;
            }
        };
        let name = item.file_name().to_string_lossy().into_owned();
        if !config.show_hidden && name.starts_with('.') {
            continue;
        }
        let full_path = dir.join(item.file_name());
        let meta = match EntryMeta::read(&full_path, &mut ids) {
            Ok(meta) => meta,
            Err(err) => {
                warn!(path = %full_path.display(), error = %err, "skipping entry, metadata unreadable");
                continue;
            }
        };
        entries.push(assemble(next_id, name, full_path, dir.clone(), meta));
        next_id += 1;
    }

    Ok(entries)
}

/// Build one of the `.`/`..` entries. These exist in every listing no
/// matter what: a stat failure downgrades to placeholder metadata so
/// navigation upward keeps working.
fn synthetic_dir_entry(
    id: u32,
    name: &str,
    full_path: PathBuf,
    parent_path: PathBuf,
    ids: &mut IdentityCache,
) -> Entry {
    let mut meta = match EntryMeta::read(&full_path, ids) {
        Ok(meta) => meta,
        Err(err) => {
            warn!(path = %full_path.display(), error = %err, "stat failed, listing entry with placeholder metadata");
            EntryMeta::empty(EntryKind::Directory)
        }
    };
    meta.kind = EntryKind::Directory;
    assemble(id, name.to_string(), full_path, parent_path, meta)
}

fn assemble(id: u32, name: String, full_path: PathBuf, parent_path: PathBuf, meta: EntryMeta) -> Entry {
    Entry {
        id,
        name,
        full_path,
        parent_path,
        kind: meta.kind,
        mode: meta.mode,
        link_count: meta.link_count,
        owner_id: meta.owner_id,
        owner_name: meta.owner_name,
        group_id: meta.group_id,
        group_name: meta.group_name,
        size_bytes: meta.size_bytes,
        modified_at: meta.modified_at,
    }
}

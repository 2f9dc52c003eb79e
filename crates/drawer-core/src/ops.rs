use std::fs;
use std::os::unix::fs::{DirBuilderExt, OpenOptionsExt, PermissionsExt};
use std::path::Path;

use tracing::debug;

use crate::config::Config;
use crate::error::{DrawerError, Result};
use crate::listing::{Entry, EntryKind};

/// Create a file or directory called `name` inside `directory`.
///
/// A name ending with the configured path separator makes a directory,
/// anything else an empty regular file. Creation is single level: the
/// parent must already exist. The configured mode is applied explicitly
/// after creation, so the process umask cannot skew it.
pub fn create(config: &Config, directory: &Path, name: &str) -> Result<()> {
    let trimmed = name.trim_end_matches(config.path_separator);
    let target = directory.join(trimmed);
    if name.ends_with(config.path_separator) {
        fs::DirBuilder::new()
            .mode(config.dir_mode)
            .create(&target)
            .map_err(|e| DrawerError::from_io("create", &target, e))?;
        fs::set_permissions(&target, fs::Permissions::from_mode(config.dir_mode))
            .map_err(|e| DrawerError::from_io("create", &target, e))?;
        debug!(path = %target.display(), mode = config.dir_mode, "created directory");
    } else {
        fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .mode(config.file_mode)
            .open(&target)
            .map_err(|e| DrawerError::from_io("create", &target, e))?;
        fs::set_permissions(&target, fs::Permissions::from_mode(config.file_mode))
            .map_err(|e| DrawerError::from_io("create", &target, e))?;
        debug!(path = %target.display(), mode = config.file_mode, "created file");
    }
    Ok(())
}

/// Rename the object behind `entry` within its directory.
///
/// The synthetic `.`/`..` entries are refused before any filesystem
/// contact. An occupied destination fails with `AlreadyExists`; nothing
/// is ever replaced.
pub fn rename(entry: &Entry, new_name: &str) -> Result<()> {
    if entry.name == "." || entry.name == ".." {
        return Err(DrawerError::InvalidOperation {
            op: "rename",
            name: entry.name.clone(),
        });
    }
    let to = entry.parent_path.join(new_name);
    if fs::symlink_metadata(&to).is_ok() {
        return Err(DrawerError::AlreadyExists { path: to });
    }
    fs::rename(&entry.full_path, &to)
        .map_err(|e| DrawerError::from_io("rename", &entry.full_path, e))?;
    debug!(from = %entry.full_path.display(), to = %to.display(), "renamed");
    Ok(())
}

/// Delete the object behind `entry`; directories are removed recursively.
///
/// The synthetic `.`/`..` entries are refused before any filesystem
/// contact. There is no confirmation here and no rollback: the first
/// failure inside a recursive delete aborts the walk, and whatever was
/// already removed stays removed.
pub fn delete(entry: &Entry) -> Result<()> {
    if entry.name == "." || entry.name == ".." {
        return Err(DrawerError::InvalidOperation {
            op: "delete",
            name: entry.name.clone(),
        });
    }
    if entry.kind == EntryKind::Directory {
        delete_tree(&entry.full_path)?;
    } else {
        fs::remove_file(&entry.full_path)
            .map_err(|e| DrawerError::from_io("delete", &entry.full_path, e))?;
    }
    debug!(path = %entry.full_path.display(), "deleted");
    Ok(())
}

/// Depth-first removal: children go before their directory, child
/// directories are recursed into as encountered. Classification does not
/// follow symlinks, so a link (even one pointing at a directory) is
/// unlinked, never entered.
fn delete_tree(path: &Path) -> Result<()> {
    let reader = fs::read_dir(path).map_err(|e| DrawerError::from_io("delete", path, e))?;
    for item in reader {
        let item = item.map_err(|e| DrawerError::from_io("delete", path, e))?;
        let child = item.path();
        let ft = item
            .file_type()
            .map_err(|e| DrawerError::from_io("delete", &child, e))?;
        if ft.is_dir() {
            delete_tree(&child)?;
        } else {
            fs::remove_file(&child).map_err(|e| DrawerError::from_io("delete", &child, e))?;
        }
    }
    fs::remove_dir(path).map_err(|e| DrawerError::from_io("delete", path, e))
}

use std::fs::{self, FileType, Metadata};
use std::os::unix::fs::{FileTypeExt, MetadataExt};
use std::path::Path;
use std::time::SystemTime;

use super::identity::IdentityCache;
use super::{EntryKind, Mode};
use crate::error::{DrawerError, Result};

/// Decoded metadata of one filesystem object, before it is joined with a
/// name and an id to form an [`Entry`](super::Entry).
#[derive(Debug, Clone)]
pub struct EntryMeta {
    pub kind: EntryKind,
    pub mode: Mode,
    pub link_count: u64,
    pub owner_id: u32,
    pub owner_name: String,
    pub group_id: u32,
    pub group_name: String,
    pub size_bytes: u64,
    pub modified_at: SystemTime,
}

impl EntryMeta {
    /// Stat `path` and decode the result.
    ///
    /// Symlinks are followed, so a link to a directory reads as a
    /// directory. A link whose target cannot be resolved (dangling,
    /// looping) is decoded from the link itself and comes back as
    /// [`EntryKind::Symlink`].
    pub fn read(path: &Path, ids: &mut IdentityCache) -> Result<Self> {
        match fs::metadata(path) {
            Ok(meta) => Ok(Self::from_metadata(&meta, ids)),
            Err(err) => match fs::symlink_metadata(path) {
                Ok(meta) if meta.file_type().is_symlink() => {
                    Ok(Self::from_metadata(&meta, ids))
                }
                _ => Err(DrawerError::from_io("stat", path, err)),
            },
        }
    }

    fn from_metadata(meta: &Metadata, ids: &mut IdentityCache) -> Self {
        let uid = meta.uid();
        let gid = meta.gid();
        Self {
            kind: kind_of(meta.file_type()),
            mode: Mode::new(meta.mode()),
            link_count: meta.nlink(),
            owner_id: uid,
            owner_name: ids.user_name(uid),
            group_id: gid,
            group_name: ids.group_name(gid),
            size_bytes: meta.len(),
            modified_at: meta.modified().unwrap_or(SystemTime::UNIX_EPOCH),
        }
    }

    /// Placeholder metadata for an entry whose stat failed but which must
    /// still appear in the listing (the synthetic `.`/`..` entries).
    pub(crate) fn empty(kind: EntryKind) -> Self {
        Self {
            kind,
            mode: Mode::new(0),
            link_count: 0,
            owner_id: 0,
            owner_name: String::new(),
            group_id: 0,
            group_name: String::new(),
            size_bytes: 0,
            modified_at: SystemTime::UNIX_EPOCH,
        }
    }
}

fn kind_of(ft: FileType) -> EntryKind {
    if ft.is_dir() {
        EntryKind::Directory
    } else if ft.is_file() {
        EntryKind::Regular
    } else if ft.is_symlink() {
        EntryKind::Symlink
    } else if ft.is_char_device() {
        EntryKind::CharDevice
    } else if ft.is_block_device() {
        EntryKind::BlockDevice
    } else if ft.is_fifo() {
        EntryKind::Fifo
    } else if ft.is_socket() {
        EntryKind::Socket
    } else {
        EntryKind::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    #[test]
    fn decodes_a_regular_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, b"hello").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

        let mut ids = IdentityCache::new();
        let meta = EntryMeta::read(&path, &mut ids).unwrap();
        assert_eq!(meta.kind, EntryKind::Regular);
        assert_eq!(meta.mode.bits(), 0o640);
        assert_eq!(meta.size_bytes, 5);
        assert_eq!(meta.link_count, 1);
    }

    #[test]
    fn decodes_a_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut ids = IdentityCache::new();
        let meta = EntryMeta::read(dir.path(), &mut ids).unwrap();
        assert_eq!(meta.kind, EntryKind::Directory);
    }

    #[test]
    fn follows_symlinks_to_their_target_kind() {
        let dir = tempfile::TempDir::new().unwrap();
        let target = dir.path().join("real");
        fs::create_dir(&target).unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let mut ids = IdentityCache::new();
        let meta = EntryMeta::read(&link, &mut ids).unwrap();
        assert_eq!(meta.kind, EntryKind::Directory);
    }

    #[test]
    fn dangling_symlink_decodes_as_symlink() {
        let dir = tempfile::TempDir::new().unwrap();
        let link = dir.path().join("dangling");
        std::os::unix::fs::symlink(dir.path().join("gone"), &link).unwrap();

        let mut ids = IdentityCache::new();
        let meta = EntryMeta::read(&link, &mut ids).unwrap();
        assert_eq!(meta.kind, EntryKind::Symlink);
    }

    #[test]
    fn looping_symlink_decodes_as_symlink() {
        let dir = tempfile::TempDir::new().unwrap();
        let link = dir.path().join("ouroboros");
        std::os::unix::fs::symlink(&link, &link).unwrap();

        let mut ids = IdentityCache::new();
        let meta = EntryMeta::read(&link, &mut ids).unwrap();
        assert_eq!(meta.kind, EntryKind::Symlink);
    }

    #[test]
    fn missing_path_is_not_found() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut ids = IdentityCache::new();
        let err = EntryMeta::read(&dir.path().join("absent"), &mut ids).unwrap_err();
        assert!(matches!(err, DrawerError::NotFound { .. }));
    }
}

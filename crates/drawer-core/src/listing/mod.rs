pub mod decode;
pub mod identity;
pub mod scanner;

use std::path::PathBuf;
use std::time::SystemTime;

use serde::Serialize;

/// Type classification of a filesystem object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntryKind {
    Regular,
    Directory,
    Symlink,
    CharDevice,
    BlockDevice,
    Fifo,
    Socket,
    Unknown,
}

impl EntryKind {
    /// Leading glyph of the symbolic permission string.
    pub fn glyph(self) -> char {
        match self {
            Self::Directory => 'd',
            Self::Symlink => 'l',
            Self::CharDevice => 'c',
            Self::BlockDevice => 'b',
            Self::Fifo => 'p',
            Self::Socket => 's',
            Self::Regular | Self::Unknown => '-',
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Regular => write!(f, "file"),
            Self::Directory => write!(f, "directory"),
            Self::Symlink => write!(f, "symlink"),
            Self::CharDevice => write!(f, "char device"),
            Self::BlockDevice => write!(f, "block device"),
            Self::Fifo => write!(f, "fifo"),
            Self::Socket => write!(f, "socket"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Permission bits of an entry: the rwx triads plus the special bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Mode(u32);

impl Mode {
    const STICKY: u32 = 0o1000;

    /// Keep the permission and special bits of a raw `st_mode`.
    pub fn new(raw: u32) -> Self {
        Self(raw & 0o7777)
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn owner_can_read(self) -> bool {
        self.0 & 0o400 != 0
    }

    pub fn owner_can_write(self) -> bool {
        self.0 & 0o200 != 0
    }

    pub fn owner_can_execute(self) -> bool {
        self.0 & 0o100 != 0
    }

    pub fn group_can_read(self) -> bool {
        self.0 & 0o040 != 0
    }

    pub fn group_can_write(self) -> bool {
        self.0 & 0o020 != 0
    }

    pub fn group_can_execute(self) -> bool {
        self.0 & 0o010 != 0
    }

    pub fn other_can_read(self) -> bool {
        self.0 & 0o004 != 0
    }

    pub fn other_can_write(self) -> bool {
        self.0 & 0o002 != 0
    }

    pub fn other_can_execute(self) -> bool {
        self.0 & 0o001 != 0
    }

    pub fn is_sticky(self) -> bool {
        self.0 & Self::STICKY != 0
    }
}

/// One filesystem object as observed by a single scan.
///
/// A pure snapshot: mutations take paths from it but never change it.
/// Ids are unique and increasing within one scan result only; id 0 is
/// the scanned directory itself and id 1 its parent.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    pub id: u32,
    pub name: String,
    pub full_path: PathBuf,
    pub parent_path: PathBuf,
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

impl Entry {
    /// Name starts with a dot (includes the `.`/`..` entries).
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    /// Symbolic permission string, always 10 characters: kind glyph then
    /// rwx triads for owner, group and other. The final position shows
    /// `t` whenever the sticky bit is set, regardless of other-execute.
    pub fn permission_string(&self) -> String {
        let m = self.mode;
        let mut s = String::with_capacity(10);
        s.push(self.kind.glyph());
        for (r, w, x) in [
            (m.owner_can_read(), m.owner_can_write(), m.owner_can_execute()),
            (m.group_can_read(), m.group_can_write(), m.group_can_execute()),
            (m.other_can_read(), m.other_can_write(), m.other_can_execute()),
        ] {
            s.push(if r { 'r' } else { '-' });
            s.push(if w { 'w' } else { '-' });
            s.push(if x { 'x' } else { '-' });
        }
        if m.is_sticky() {
            s.pop();
            s.push('t');
        }
        s
    }
}

/// Locate an entry by its per-scan id.
pub fn find_by_id(entries: &[Entry], id: u32) -> Option<&Entry> {
    entries.iter().find(|e| e.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(kind: EntryKind, mode: u32) -> Entry {
        Entry {
            id: 2,
            name: "sample".to_string(),
            full_path: PathBuf::from("/tmp/sample"),
            parent_path: PathBuf::from("/tmp"),
            kind,
            mode: Mode::new(mode),
            link_count: 1,
            owner_id: 0,
            owner_name: "root".to_string(),
            group_id: 0,
            group_name: "root".to_string(),
            size_bytes: 0,
            modified_at: SystemTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn permission_string_regular_file() {
        assert_eq!(
            sample(EntryKind::Regular, 0o644).permission_string(),
            "-rw-r--r--"
        );
    }

    #[test]
    fn permission_string_sticky_directory() {
        assert_eq!(
            sample(EntryKind::Directory, 0o1777).permission_string(),
            "drwxrwxrwt"
        );
        // sticky wins over a cleared other-execute bit
        assert_eq!(
            sample(EntryKind::Directory, 0o1770).permission_string(),
            "drwxrwx--t"
        );
    }

    #[test]
    fn permission_string_plain_directory() {
        assert_eq!(
            sample(EntryKind::Directory, 0o777).permission_string(),
            "drwxrwxrwx"
        );
    }

    #[test]
    fn kind_glyphs() {
        assert_eq!(sample(EntryKind::Symlink, 0o777).permission_string(), "lrwxrwxrwx");
        assert_eq!(EntryKind::Fifo.glyph(), 'p');
        assert_eq!(EntryKind::Socket.glyph(), 's');
        assert_eq!(EntryKind::CharDevice.glyph(), 'c');
        assert_eq!(EntryKind::BlockDevice.glyph(), 'b');
        assert_eq!(EntryKind::Unknown.glyph(), '-');
    }

    #[test]
    fn mode_predicates() {
        let m = Mode::new(0o1644);
        assert!(m.owner_can_read());
        assert!(m.owner_can_write());
        assert!(!m.owner_can_execute());
        assert!(m.group_can_read());
        assert!(!m.group_can_write());
        assert!(m.other_can_read());
        assert!(!m.other_can_execute());
        assert!(m.is_sticky());
        // file-type bits never leak into Mode
        assert_eq!(Mode::new(0o100644).bits(), 0o644);
    }

    #[test]
    fn find_entry_by_id() {
        let entries = vec![sample(EntryKind::Regular, 0o644)];
        assert!(find_by_id(&entries, 2).is_some());
        assert!(find_by_id(&entries, 7).is_none());
    }
}

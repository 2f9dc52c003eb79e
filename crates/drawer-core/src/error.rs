use std::path::{Path, PathBuf};

/// All errors produced by drawer-core.
#[derive(Debug, thiserror::Error)]
pub enum DrawerError {
    #[error("not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("already exists: {}", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("cannot {op} `{name}`")]
    InvalidOperation { op: &'static str, name: String },

    #[error("{op} {}: {source}", path.display())]
    Other {
        op: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
}

impl DrawerError {
    /// Classify an I/O failure on `path` into the engine's error kinds.
    pub fn from_io(op: &'static str, path: &Path, err: std::io::Error) -> Self {
        use std::io::ErrorKind;
        match err.kind() {
            ErrorKind::NotFound => Self::NotFound {
                path: path.to_path_buf(),
            },
            ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
            },
            ErrorKind::AlreadyExists => Self::AlreadyExists {
                path: path.to_path_buf(),
            },
            _ => Self::Other {
                op,
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, DrawerError>;

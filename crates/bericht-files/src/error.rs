use std::path::PathBuf;

use thiserror::Error;

use bericht_model::{ErrorKind, UserFacing};

#[derive(Debug, Error)]
pub enum FilesError {
    #[error("directory not found: {path}")]
    DirectoryMissing { path: PathBuf },
    #[error("{op} failed for {path}: {source}")]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("replacement file missing: {path}")]
    ReplacementMissing { path: PathBuf },
}

impl FilesError {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            op,
            path: path.into(),
            source,
        }
    }
}

impl UserFacing for FilesError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::DirectoryMissing { .. } => ErrorKind::NotFound,
            Self::Io { .. } | Self::ReplacementMissing { .. } => ErrorKind::IoFailure,
        }
    }

    fn user_message(&self) -> String {
        match self {
            Self::DirectoryMissing { path } => {
                format!("Der Ordner {} wurde nicht gefunden.", path.display())
            }
            Self::Io { path, .. } => format!(
                "Die Datei {} konnte nicht kopiert oder umbenannt werden.",
                path.display()
            ),
            Self::ReplacementMissing { path } => format!(
                "Die neue Fassung von {} wurde nicht geschrieben; die alte Datei bleibt unverändert.",
                path.display()
            ),
        }
    }
}

use std::path::PathBuf;

use thiserror::Error;

use bericht_files::FilesError;
use bericht_model::{ErrorKind, UserFacing};

#[derive(Debug, Error)]
pub enum FormError {
    #[error("document has no form fields")]
    NoFormFields,
    #[error("form field not found: {name}")]
    FieldMissing { name: String },
    #[error("form field {name} is not a button field")]
    NotAButton { name: String },
    #[error("pdf error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("write failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Swap(#[from] FilesError),
}

impl UserFacing for FormError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::NoFormFields | Self::FieldMissing { .. } => ErrorKind::NotFound,
            Self::NotAButton { .. } | Self::Pdf(_) => ErrorKind::Unexpected,
            Self::Io { .. } => ErrorKind::IoFailure,
            Self::Swap(inner) => inner.kind(),
        }
    }

    fn user_message(&self) -> String {
        match self {
            Self::NoFormFields => {
                "Das Dokument enthält keine ausfüllbaren Formularfelder.".to_string()
            }
            Self::FieldMissing { name } => {
                format!("Das Formularfeld \"{name}\" fehlt im Dokument.")
            }
            Self::NotAButton { name } => {
                format!("Das Formularfeld \"{name}\" hat nicht den erwarteten Typ.")
            }
            Self::Pdf(_) => "Das Dokument konnte nicht gelesen werden.".to_string(),
            Self::Io { path, .. } => format!(
                "Das ausgefüllte Dokument {} konnte nicht gespeichert werden.",
                path.display()
            ),
            Self::Swap(inner) => inner.user_message(),
        }
    }
}

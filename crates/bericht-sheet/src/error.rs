use std::path::PathBuf;

use thiserror::Error;

use bericht_model::{ErrorKind, PersonName, UserFacing};

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("workbook not found: {path}")]
    WorkbookMissing { path: PathBuf },
    #[error("workbook locked by another process: {path}")]
    WorkbookLocked { path: PathBuf },
    #[error("worksheet not found: {name}")]
    WorksheetMissing { name: String },
    #[error("name mismatch: sheet row has {found}, queried {queried}")]
    NameMismatch {
        found: PersonName,
        queried: PersonName,
    },
    #[error("no age value for {kid} after scanning the row window")]
    NoAgeValue { kid: String },
    #[error("row {row}: cannot parse age value {value:?}")]
    InvalidAge { row: u32, value: String },
    #[error("row {row}: cannot parse birth date {value:?}")]
    InvalidBirthDate { row: u32, value: String },
    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::XlsxError),
}

impl UserFacing for SheetError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::WorkbookMissing { .. } | Self::WorksheetMissing { .. } => ErrorKind::NotFound,
            Self::WorkbookLocked { .. } => ErrorKind::ResourceBusy,
            Self::NameMismatch { .. } => ErrorKind::NameMismatch,
            Self::NoAgeValue { .. } => ErrorKind::NotFound,
            Self::InvalidAge { .. } | Self::InvalidBirthDate { .. } | Self::Spreadsheet(_) => {
                ErrorKind::Unexpected
            }
        }
    }

    fn user_message(&self) -> String {
        match self {
            Self::WorkbookMissing { path } => format!(
                "Die Monatsrechner-Datei wurde nicht gefunden: {}.",
                path.display()
            ),
            Self::WorkbookLocked { .. } => {
                "Die Monatsrechner-Datei ist gerade geöffnet. Bitte Excel schließen und erneut versuchen."
                    .to_string()
            }
            Self::WorksheetMissing { name } => {
                format!("Das Tabellenblatt \"{name}\" fehlt in der Monatsrechner-Datei.")
            }
            Self::NameMismatch { found, queried } => format!(
                "Der Name im Monatsrechner (\"{found}\") weicht vom eingegebenen Namen (\"{queried}\") ab. Bitte die Schreibweise prüfen."
            ),
            Self::NoAgeValue { kid } => {
                format!("Für \"{kid}\" wurde kein Alterswert im Monatsrechner gefunden.")
            }
            Self::InvalidAge { row, .. } | Self::InvalidBirthDate { row, .. } => {
                format!("Der Monatsrechner enthält in Zeile {row} einen ungültigen Wert.")
            }
            Self::Spreadsheet(_) => {
                "Die Monatsrechner-Datei konnte nicht gelesen werden.".to_string()
            }
        }
    }
}

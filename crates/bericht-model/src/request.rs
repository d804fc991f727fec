use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{ErrorKind, UserFacing};
use crate::name::PersonName;

/// Report years accepted by the workbook layout.
pub const YEAR_FLOOR: u16 = 2023;
pub const YEAR_CEILING: u16 = 2099;

/// Which optional documents the run should produce.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DocumentFlags {
    pub allgemein: bool,
    pub vorschul: bool,
    pub elterngespraech: bool,
    pub uebergang: bool,
}

/// Validated inputs for one generate run.
///
/// Construction enforces the input contract; downstream stages can rely on
/// the fields without re-checking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    pub group: String,
    pub kid: PersonName,
    pub month: String,
    pub year: u16,
    pub include: DocumentFlags,
}

impl ReportRequest {
    pub fn new(
        group: &str,
        kid_name: &str,
        month: &str,
        year: &str,
        include: DocumentFlags,
    ) -> Result<Self, RequestError> {
        let group = group.trim();
        if group.is_empty() {
            return Err(RequestError::EmptyGroup);
        }
        let kid = PersonName::from_full_name(kid_name).ok_or_else(|| {
            RequestError::InvalidKidName {
                value: kid_name.to_string(),
            }
        })?;
        let month = month.trim();
        if month.is_empty() {
            return Err(RequestError::EmptyMonth);
        }
        let parsed_year: u16 = year
            .trim()
            .parse()
            .map_err(|_| RequestError::InvalidYear {
                value: year.to_string(),
            })?;
        if !(YEAR_FLOOR..=YEAR_CEILING).contains(&parsed_year) {
            return Err(RequestError::YearOutOfRange { year: parsed_year });
        }
        Ok(Self {
            group: group.to_string(),
            kid,
            month: month.to_string(),
            year: parsed_year,
            include,
        })
    }
}

/// Input contract violations. All of these halt the run before any I/O.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("group name is empty")]
    EmptyGroup,
    #[error("unknown group: {name}")]
    UnknownGroup { name: String },
    #[error("kid name needs first and last name, got: {value:?}")]
    InvalidKidName { value: String },
    #[error("report month is empty")]
    EmptyMonth,
    #[error("unknown report month: {value}")]
    UnknownMonth { value: String },
    #[error("report year does not parse as an integer: {value:?}")]
    InvalidYear { value: String },
    #[error("report year {year} outside [{YEAR_FLOOR}, {YEAR_CEILING}]")]
    YearOutOfRange { year: u16 },
    #[error("child {name} not found in the folder listing of group {group}")]
    ChildNotListed { name: String, group: String },
}

impl UserFacing for RequestError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::ValidationFailure
    }

    fn user_message(&self) -> String {
        match self {
            Self::EmptyGroup => "Bitte eine Gruppe auswählen.".to_string(),
            Self::UnknownGroup { name } => {
                format!("Die Gruppe \"{name}\" ist nicht bekannt.")
            }
            Self::InvalidKidName { value } => format!(
                "Bitte Vor- und Nachname des Kindes angeben (eingegeben: \"{value}\")."
            ),
            Self::EmptyMonth => "Bitte einen Berichtsmonat auswählen.".to_string(),
            Self::UnknownMonth { value } => {
                format!("\"{value}\" ist kein gültiger Berichtsmonat.")
            }
            Self::InvalidYear { value } => {
                format!("\"{value}\" ist kein gültiges Berichtsjahr.")
            }
            Self::YearOutOfRange { year } => format!(
                "Das Berichtsjahr {year} liegt außerhalb von {YEAR_FLOOR}–{YEAR_CEILING}."
            ),
            Self::ChildNotListed { name, group } => format!(
                "Für \"{name}\" gibt es noch keinen Ordner in der Gruppe \"{group}\"."
            ),
        }
    }
}

use serde::{Deserialize, Serialize};

/// Gender as recorded in the NAMES-BIRTHDAYS-FILL-IN worksheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unknown,
}

impl Gender {
    /// Interprets a worksheet cell. The sheet historically holds either a
    /// single letter ("m"/"w"/"j") or a word ("männlich", "weiblich",
    /// "Junge", "Mädchen").
    pub fn from_cell(value: &str) -> Self {
        let value = value.trim().to_lowercase();
        if value.starts_with("mädchen") || value.starts_with("maedchen") {
            return Self::Female;
        }
        match value.chars().next() {
            Some('m' | 'j') => Self::Male,
            Some('w') => Self::Female,
            _ => Self::Unknown,
        }
    }
}

/// The result of one spreadsheet lookup. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeRecord {
    /// Age in months-and-days decimal form, rounded to 2 places
    /// (e.g. 24.50 = 24 months, 15 days on the sheet's scale).
    pub age_months: f64,
    /// Birth date reformatted to dd.MM.yyyy.
    pub birth_date: String,
    pub gender: Gender,
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// A child's name as entered in the UI or read from a worksheet row.
///
/// The display convention is "First Last"; the first whitespace-delimited
/// token is the first name, the remainder joined by single spaces is the
/// last name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    pub first: String,
    pub last: String,
}

impl PersonName {
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            last: last.into(),
        }
    }

    /// Splits a "First Last" string. Returns `None` unless there are at
    /// least two whitespace-delimited tokens.
    pub fn from_full_name(full: &str) -> Option<Self> {
        let mut tokens = full.split_whitespace();
        let first = tokens.next()?.to_string();
        let rest: Vec<&str> = tokens.collect();
        if rest.is_empty() {
            return None;
        }
        Some(Self {
            first,
            last: rest.join(" "),
        })
    }

    /// "First Last" form used in filenames and form fields.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::PersonName;

    #[test]
    fn splits_first_token_and_joins_rest() {
        let name = PersonName::from_full_name("Anna Maria Müller").expect("valid name");
        assert_eq!(name.first, "Anna");
        assert_eq!(name.last, "Maria Müller");
    }

    #[test]
    fn rejects_single_token() {
        assert!(PersonName::from_full_name("Anna").is_none());
        assert!(PersonName::from_full_name("   ").is_none());
    }

    #[test]
    fn display_round_trip() {
        let name = PersonName::new("Anna", "Müller");
        assert_eq!(name.display_name(), "Anna Müller");
    }
}

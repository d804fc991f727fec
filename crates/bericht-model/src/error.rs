use serde::{Deserialize, Serialize};

/// Failure categories the orchestrator decides halt-vs-continue on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Home folder or another required path is not configured.
    PrerequisiteMissing,
    /// File, worksheet, or form field absent.
    NotFound,
    /// File locked by another process.
    ResourceBusy,
    /// Malformed year, invalid name, unknown group, unlisted child.
    ValidationFailure,
    /// Fuzzy-match ambiguity requiring human correction.
    NameMismatch,
    /// Age value outside the supported band table.
    BandNotFound,
    /// Copy, rename, or save failure.
    IoFailure,
    /// Catch-all; the original message is always logged.
    Unexpected,
}

/// Errors shown to the end user carry two distinct texts: the technical
/// `Display` form that goes to the log, and a localized German message
/// for the summary. They are never the same string.
pub trait UserFacing {
    fn kind(&self) -> ErrorKind;
    fn user_message(&self) -> String;
}

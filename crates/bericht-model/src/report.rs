use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ErrorKind;

/// What happened to a single file during the copy stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CopyOutcome {
    Copied,
    BackedUpAndCopied,
    SkippedByUser,
    Failed,
}

/// One source → destination copy attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopyReport {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub outcome: CopyOutcome,
    /// Technical detail for failed copies; the log line, not the user text.
    pub detail: Option<String>,
}

impl CopyReport {
    pub fn new(
        source: impl AsRef<Path>,
        dest: impl AsRef<Path>,
        outcome: CopyOutcome,
        detail: Option<String>,
    ) -> Self {
        Self {
            source: source.as_ref().to_path_buf(),
            dest: dest.as_ref().to_path_buf(),
            outcome,
            detail,
        }
    }
}

/// A user-visible error collected during a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserError {
    pub kind: ErrorKind,
    /// Localized German message shown in the summary.
    pub message: String,
}

/// Result accumulator threaded through the pipeline.
///
/// Replaces cross-cutting success flags: every stage records its outcomes
/// here and the final status is derived, never shared mutable state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunReport {
    pub copies: Vec<CopyReport>,
    pub renamed: Vec<(PathBuf, PathBuf)>,
    pub filled: Vec<PathBuf>,
    pub warnings: Vec<String>,
    pub errors: Vec<UserError>,
}

impl RunReport {
    pub fn add_warning(&mut self, message: String) {
        self.warnings.push(message);
    }

    pub fn add_error(&mut self, kind: ErrorKind, message: String) {
        self.errors.push(UserError { kind, message });
    }

    pub fn record_copy(&mut self, copy: CopyReport) {
        self.copies.push(copy);
    }

    pub fn record_rename(&mut self, from: PathBuf, to: PathBuf) {
        self.renamed.push((from, to));
    }

    pub fn record_filled(&mut self, path: PathBuf) {
        self.filled.push(path);
    }

    /// True when a mandatory stage (lookup, path resolution) failed and the
    /// run was halted.
    pub fn mandatory_failed(&self) -> bool {
        self.errors.iter().any(|e| {
            matches!(
                e.kind,
                ErrorKind::PrerequisiteMissing
                    | ErrorKind::ValidationFailure
                    | ErrorKind::NameMismatch
                    | ErrorKind::NotFound
                    | ErrorKind::ResourceBusy
            )
        })
    }

    /// A run with warnings only still counts as successful; any collected
    /// error (including per-file failures) degrades it.
    pub fn fully_successful(&self) -> bool {
        self.errors.is_empty()
            && !self
                .copies
                .iter()
                .any(|c| matches!(c.outcome, CopyOutcome::Failed))
    }
}

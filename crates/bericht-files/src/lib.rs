//! Filesystem side of a report run: where files go, what they are called,
//! and how existing files survive a re-run.

pub mod copy;
pub mod error;
pub mod paths;
pub mod rename;
pub mod swap;

pub use copy::{AlwaysOverwrite, NeverOverwrite, OverwritePrompt, copy_directory, safe_copy};
pub use error::FilesError;
pub use paths::{TargetParts, build_target_path, list_children, parse_target_path, title_case};
pub use rename::{
    RenameContext, RenameFlags, RenameOutcome, RenamedFile, classify_base_name,
    rename_known_files,
};
pub use swap::atomic_swap;

//! Atomic replacement of a document by its freshly written sibling.

use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::error::FilesError;

/// Replaces `original` with `temp`.
///
/// The original is parked under a `.old` name while the replacement
/// moves into place, so whatever happens the target path always holds
/// either the old or the new complete file, never a half-written one.
/// On failure the temp file is removed and the original restored.
pub fn atomic_swap(original: &Path, temp: &Path) -> Result<(), FilesError> {
    if !temp.is_file() {
        return Err(FilesError::ReplacementMissing {
            path: temp.to_path_buf(),
        });
    }

    let retired = retired_path(original);
    let had_original = original.exists();
    if had_original {
        std::fs::rename(original, &retired).map_err(|e| {
            let _ = std::fs::remove_file(temp);
            FilesError::io("retire original", original, e)
        })?;
    }

    match std::fs::rename(temp, original) {
        Ok(()) => {
            if had_original {
                let _ = std::fs::remove_file(&retired);
            }
            info!(path = %original.display(), "replaced");
            Ok(())
        }
        Err(e) => {
            error!(path = %original.display(), %e, "swap failed, restoring original");
            let _ = std::fs::remove_file(temp);
            if had_original {
                let _ = std::fs::rename(&retired, original);
            }
            Err(FilesError::io("swap replacement", original, e))
        }
    }
}

fn retired_path(original: &Path) -> PathBuf {
    let name = original
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("datei");
    original.with_file_name(format!("{name}.old"))
}

//! Collision-safe copying. An existing destination is never silently
//! destroyed: the user is asked, and on overwrite the old file is moved
//! to a timestamped `.bak` first.

use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{error, info, warn};

use bericht_model::{CopyOutcome, CopyReport};

use crate::error::FilesError;

/// Asks whether an existing destination may be overwritten. The console
/// prompt lives in the CLI crate; these two policies cover non-interactive
/// runs.
pub trait OverwritePrompt {
    fn confirm_overwrite(&mut self, dest: &Path) -> bool;
}

pub struct AlwaysOverwrite;

impl OverwritePrompt for AlwaysOverwrite {
    fn confirm_overwrite(&mut self, _dest: &Path) -> bool {
        true
    }
}

pub struct NeverOverwrite;

impl OverwritePrompt for NeverOverwrite {
    fn confirm_overwrite(&mut self, _dest: &Path) -> bool {
        false
    }
}

/// Copies `source` to `dest`, backing up an existing destination after
/// the prompt confirms. Failures land in the report, never in a panic or
/// an early return: one bad file must not stop the remaining files.
pub fn safe_copy(source: &Path, dest: &Path, prompt: &mut dyn OverwritePrompt) -> CopyReport {
    if !source.is_file() {
        error!(source = %source.display(), "copy source missing");
        return CopyReport::new(
            source,
            dest,
            CopyOutcome::Failed,
            Some(format!("source is not a file: {}", source.display())),
        );
    }

    let mut backed_up = false;
    if dest.exists() {
        if !prompt.confirm_overwrite(dest) {
            info!(dest = %dest.display(), "overwrite declined, skipping");
            return CopyReport::new(source, dest, CopyOutcome::SkippedByUser, None);
        }
        let backup = backup_path(dest);
        if let Err(e) = std::fs::rename(dest, &backup) {
            error!(dest = %dest.display(), backup = %backup.display(), %e, "backup rename failed");
            return CopyReport::new(
                source,
                dest,
                CopyOutcome::Failed,
                Some(format!("backup to {} failed: {e}", backup.display())),
            );
        }
        info!(dest = %dest.display(), backup = %backup.display(), "existing file backed up");
        backed_up = true;
    }

    match std::fs::copy(source, dest) {
        Ok(_) => {
            let outcome = if backed_up {
                CopyOutcome::BackedUpAndCopied
            } else {
                CopyOutcome::Copied
            };
            info!(source = %source.display(), dest = %dest.display(), ?outcome, "copied");
            CopyReport::new(source, dest, outcome, None)
        }
        Err(e) => {
            error!(source = %source.display(), dest = %dest.display(), %e, "copy failed");
            CopyReport::new(source, dest, CopyOutcome::Failed, Some(e.to_string()))
        }
    }
}

/// Copies every regular file of `source_dir` into `target_dir`
/// (non-recursive), creating `target_dir` first. Per-file outcomes are
/// collected; only an unreadable source directory aborts.
pub fn copy_directory(
    source_dir: &Path,
    target_dir: &Path,
    prompt: &mut dyn OverwritePrompt,
) -> Result<Vec<CopyReport>, FilesError> {
    if !source_dir.is_dir() {
        return Err(FilesError::DirectoryMissing {
            path: source_dir.to_path_buf(),
        });
    }
    std::fs::create_dir_all(target_dir)
        .map_err(|e| FilesError::io("create dir", target_dir, e))?;

    let entries =
        std::fs::read_dir(source_dir).map_err(|e| FilesError::io("read dir", source_dir, e))?;
    let mut reports = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| FilesError::io("read dir", source_dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let dest = target_dir.join(entry.file_name());
        reports.push(safe_copy(&path, &dest, prompt));
    }
    Ok(reports)
}

/// `yyyyMMddHHmmss_<originalname>.bak` next to the original. When two
/// overwrites land in the same second the name would collide, so a
/// numeric suffix keeps one backup per overwrite.
fn backup_path(dest: &Path) -> PathBuf {
    let stamp = Local::now().format("%Y%m%d%H%M%S");
    let name = dest
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("datei");
    let mut candidate = dest.with_file_name(format!("{stamp}_{name}.bak"));
    let mut counter = 2u32;
    while candidate.exists() {
        candidate = dest.with_file_name(format!("{stamp}_{name}_{counter}.bak"));
        counter += 1;
        if counter > 1000 {
            warn!(dest = %dest.display(), "backup name space exhausted");
            break;
        }
    }
    candidate
}

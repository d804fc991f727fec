//! Filesystem tests for copying, renaming, and the atomic swap.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use bericht_files::{
    AlwaysOverwrite, NeverOverwrite, RenameContext, RenameFlags, atomic_swap, copy_directory,
    rename_known_files, safe_copy,
};
use bericht_model::CopyOutcome;
use bericht_standards::TemplateKind;

fn bak_count(dir: &Path) -> usize {
    fs::read_dir(dir)
        .unwrap()
        .flatten()
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "bak"))
        .count()
}

#[test]
fn safe_copy_plain_copy() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("quelle.pdf");
    let dest = dir.path().join("ziel.pdf");
    fs::write(&source, b"v1").unwrap();

    let report = safe_copy(&source, &dest, &mut AlwaysOverwrite);
    assert_eq!(report.outcome, CopyOutcome::Copied);
    assert_eq!(fs::read(&dest).unwrap(), b"v1");
    assert_eq!(bak_count(dir.path()), 0);
}

#[test]
fn safe_copy_backs_up_then_overwrites() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("quelle.pdf");
    let dest = dir.path().join("ziel.pdf");
    fs::write(&source, b"v2").unwrap();
    fs::write(&dest, b"v1").unwrap();

    let report = safe_copy(&source, &dest, &mut AlwaysOverwrite);
    assert_eq!(report.outcome, CopyOutcome::BackedUpAndCopied);
    assert_eq!(fs::read(&dest).unwrap(), b"v2");
    assert_eq!(bak_count(dir.path()), 1);

    // The backup carries the old content under the timestamped name.
    let backup = fs::read_dir(dir.path())
        .unwrap()
        .flatten()
        .find(|e| e.path().extension().is_some_and(|ext| ext == "bak"))
        .unwrap();
    assert_eq!(fs::read(backup.path()).unwrap(), b"v1");
    let name = backup.file_name().to_str().unwrap().to_string();
    assert!(name.ends_with("_ziel.pdf.bak"), "unexpected name {name}");
}

#[test]
fn safe_copy_twice_keeps_one_backup_per_overwrite() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("quelle.pdf");
    let dest = dir.path().join("ziel.pdf");
    fs::write(&source, b"v1").unwrap();

    let first = safe_copy(&source, &dest, &mut AlwaysOverwrite);
    assert_eq!(first.outcome, CopyOutcome::Copied);

    fs::write(&source, b"v2").unwrap();
    let second = safe_copy(&source, &dest, &mut AlwaysOverwrite);
    assert_eq!(second.outcome, CopyOutcome::BackedUpAndCopied);
    assert_eq!(bak_count(dir.path()), 1);

    fs::write(&source, b"v3").unwrap();
    let third = safe_copy(&source, &dest, &mut AlwaysOverwrite);
    assert_eq!(third.outcome, CopyOutcome::BackedUpAndCopied);
    assert_eq!(bak_count(dir.path()), 2);

    // Destination always ends up as the latest source content.
    assert_eq!(fs::read(&dest).unwrap(), b"v3");
}

#[test]
fn safe_copy_declined_overwrite_skips() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("quelle.pdf");
    let dest = dir.path().join("ziel.pdf");
    fs::write(&source, b"neu").unwrap();
    fs::write(&dest, b"alt").unwrap();

    let report = safe_copy(&source, &dest, &mut NeverOverwrite);
    assert_eq!(report.outcome, CopyOutcome::SkippedByUser);
    assert_eq!(fs::read(&dest).unwrap(), b"alt");
    assert_eq!(bak_count(dir.path()), 0);
}

#[test]
fn safe_copy_missing_source_is_a_reported_failure() {
    let dir = TempDir::new().unwrap();
    let report = safe_copy(
        &dir.path().join("fehlt.pdf"),
        &dir.path().join("ziel.pdf"),
        &mut AlwaysOverwrite,
    );
    assert_eq!(report.outcome, CopyOutcome::Failed);
    assert!(report.detail.is_some());
}

#[test]
fn copy_directory_creates_target_and_skips_subdirs() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("vorlagen");
    let target = dir.path().join("ziel");
    fs::create_dir(&source).unwrap();
    fs::write(source.join("a.pdf"), b"a").unwrap();
    fs::write(source.join("b.pdf"), b"b").unwrap();
    fs::create_dir(source.join("unterordner")).unwrap();

    let reports = copy_directory(&source, &target, &mut AlwaysOverwrite).unwrap();
    assert_eq!(reports.len(), 2);
    assert!(reports
        .iter()
        .all(|r| r.outcome == CopyOutcome::Copied));
    assert!(target.join("a.pdf").is_file());
    assert!(target.join("b.pdf").is_file());
    assert!(!target.join("unterordner").exists());
}

#[test]
fn copy_directory_missing_source_errors() {
    let dir = TempDir::new().unwrap();
    let result = copy_directory(
        &dir.path().join("fehlt"),
        &dir.path().join("ziel"),
        &mut AlwaysOverwrite,
    );
    assert!(result.is_err());
}

fn rename_ctx() -> RenameContext {
    RenameContext {
        kid: "Anna Müller".to_string(),
        month: "Januar".to_string(),
        year: 2026,
        months_tag: Some(24),
    }
}

#[test]
fn rename_applies_convention_and_preserves_extension() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Kind_Protokollbogen_24_Monate.pdf"), b"p").unwrap();
    fs::write(dir.path().join("Allgemeiner-Entwicklungsbericht.pdf"), b"a").unwrap();
    fs::write(dir.path().join("Notizen.txt"), b"n").unwrap();

    let flags = RenameFlags {
        protokoll: true,
        allgemein: true,
        vorschul: true,
    };
    let outcome = rename_known_files(dir.path(), &rename_ctx(), flags);
    assert!(outcome.failures.is_empty(), "{:?}", outcome.failures);
    assert_eq!(outcome.renamed.len(), 2);

    assert!(dir
        .path()
        .join("Protokollbogen 24 Monate Anna Müller Januar 2026.pdf")
        .is_file());
    assert!(dir
        .path()
        .join("Allgemeiner Entwicklungsbericht Anna Müller Januar 2026.pdf")
        .is_file());
    // Unknown files stay untouched.
    assert!(dir.path().join("Notizen.txt").is_file());

    let protokoll = outcome
        .renamed
        .iter()
        .find(|r| r.kind == TemplateKind::Protokollbogen)
        .unwrap();
    assert!(protokoll.to.to_string_lossy().ends_with(".pdf"));
}

#[test]
fn rename_respects_disabled_flags() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Vorschul-Entwicklungsbericht.pdf"), b"v").unwrap();

    let flags = RenameFlags {
        protokoll: true,
        allgemein: true,
        vorschul: false,
    };
    let outcome = rename_known_files(dir.path(), &rename_ctx(), flags);
    assert!(outcome.renamed.is_empty());
    assert!(dir.path().join("Vorschul-Entwicklungsbericht.pdf").is_file());
}

#[test]
fn rename_is_idempotent_across_runs() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Kind_Protokollbogen_24_Monate.pdf"), b"p").unwrap();
    fs::write(dir.path().join("Allgemeiner-Entwicklungsbericht.pdf"), b"a").unwrap();
    let flags = RenameFlags {
        protokoll: true,
        allgemein: true,
        vorschul: false,
    };

    let first = rename_known_files(dir.path(), &rename_ctx(), flags);
    assert_eq!(first.renamed.len(), 2);
    // The renamed outputs either no longer classify or already carry
    // their destination name; a second run changes nothing.
    let second = rename_known_files(dir.path(), &rename_ctx(), flags);
    assert!(second.renamed.is_empty());
    assert!(second.failures.is_empty());
}

#[test]
fn rename_failure_does_not_abort_remaining_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Kind_Protokollbogen_24_Monate.pdf"), b"p").unwrap();
    fs::write(dir.path().join("Allgemeiner-Entwicklungsbericht.pdf"), b"a").unwrap();
    // Occupy the protokoll destination so that rename cannot proceed.
    fs::write(
        dir.path()
            .join("Protokollbogen 24 Monate Anna Müller Januar 2026.pdf"),
        b"bestehend",
    )
    .unwrap();

    let flags = RenameFlags {
        protokoll: true,
        allgemein: true,
        vorschul: false,
    };
    let outcome = rename_known_files(dir.path(), &rename_ctx(), flags);
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.renamed.len(), 1);
    assert!(dir
        .path()
        .join("Allgemeiner Entwicklungsbericht Anna Müller Januar 2026.pdf")
        .is_file());
}

#[test]
fn atomic_swap_replaces_the_original() {
    let dir = TempDir::new().unwrap();
    let original = dir.path().join("bericht.pdf");
    let temp = dir.path().join("bericht.pdf.tmp");
    fs::write(&original, b"alt").unwrap();
    fs::write(&temp, b"neu").unwrap();

    atomic_swap(&original, &temp).unwrap();
    assert_eq!(fs::read(&original).unwrap(), b"neu");
    assert!(!temp.exists());
    assert!(!dir.path().join("bericht.pdf.old").exists());
}

#[test]
fn atomic_swap_missing_replacement_keeps_the_original() {
    let dir = TempDir::new().unwrap();
    let original = dir.path().join("bericht.pdf");
    let temp = dir.path().join("bericht.pdf.tmp");
    fs::write(&original, b"alt").unwrap();

    let result = atomic_swap(&original, &temp);
    assert!(result.is_err());
    assert_eq!(fs::read(&original).unwrap(), b"alt");
}

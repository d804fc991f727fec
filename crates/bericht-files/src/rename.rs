//! Renaming copied templates to the destination naming convention.
//!
//! Only the three known template families are touched; everything else in
//! the target directory stays as it is. The destination name is a pure
//! function of (kid, month, year, months tag), so re-running a generate
//! never produces a second copy under a different name.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use bericht_standards::TemplateKind;

/// Which template families may be renamed in this run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenameFlags {
    pub protokoll: bool,
    pub allgemein: bool,
    pub vorschul: bool,
}

/// Naming inputs shared by all destination names.
#[derive(Debug, Clone)]
pub struct RenameContext {
    /// "First Last" display name.
    pub kid: String,
    pub month: String,
    pub year: u16,
    /// Band months tag for the Protokollbogen name; absent when no band
    /// was resolved.
    pub months_tag: Option<u8>,
}

/// One successful rename.
#[derive(Debug, Clone)]
pub struct RenamedFile {
    pub from: PathBuf,
    pub to: PathBuf,
    pub kind: TemplateKind,
}

/// Per-directory rename result. Failures are per file; one failed rename
/// never aborts the rest.
#[derive(Debug, Default)]
pub struct RenameOutcome {
    pub renamed: Vec<RenamedFile>,
    pub failures: Vec<(PathBuf, String)>,
}

/// Classifies a file stem against the known template base names.
/// Hyphens and underscores both read as word separators, so the source
/// template "Allgemeiner-Entwicklungsbericht" and a hand-renamed
/// "Allgemeiner Entwicklungsbericht" classify the same.
pub fn classify_base_name(stem: &str) -> Option<TemplateKind> {
    let normalized = stem
        .to_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if normalized.starts_with("kind protokollbogen") {
        return Some(TemplateKind::Protokollbogen);
    }
    if normalized.contains("allgemeiner entwicklungsbericht") {
        return Some(TemplateKind::AllgemeinerEntwicklungsbericht);
    }
    if normalized.contains("vorschulentwicklungsbericht")
        || normalized.contains("vorschul entwicklungsbericht")
    {
        return Some(TemplateKind::VorschulEntwicklungsbericht);
    }
    None
}

/// Destination file name (without extension) for a renameable template.
fn dest_stem(kind: TemplateKind, ctx: &RenameContext) -> Option<String> {
    match kind {
        TemplateKind::Protokollbogen => {
            let months = ctx.months_tag?;
            Some(format!(
                "Protokollbogen {months} Monate {} {} {}",
                ctx.kid, ctx.month, ctx.year
            ))
        }
        TemplateKind::AllgemeinerEntwicklungsbericht => Some(format!(
            "Allgemeiner Entwicklungsbericht {} {} {}",
            ctx.kid, ctx.month, ctx.year
        )),
        TemplateKind::VorschulEntwicklungsbericht => Some(format!(
            "Vorschulentwicklungsbericht {} {} {}",
            ctx.kid, ctx.month, ctx.year
        )),
        TemplateKind::ProtokollElterngespraech | TemplateKind::KrippeUebergangsbericht => None,
    }
}

fn flag_enabled(kind: TemplateKind, flags: RenameFlags) -> bool {
    match kind {
        TemplateKind::Protokollbogen => flags.protokoll,
        TemplateKind::AllgemeinerEntwicklungsbericht => flags.allgemein,
        TemplateKind::VorschulEntwicklungsbericht => flags.vorschul,
        TemplateKind::ProtokollElterngespraech | TemplateKind::KrippeUebergangsbericht => false,
    }
}

/// Renames every known, flag-enabled template file in `dir` to the
/// destination convention, preserving the original extension. Returns
/// the renamed files with their template kinds plus per-file failures.
pub fn rename_known_files(dir: &Path, ctx: &RenameContext, flags: RenameFlags) -> RenameOutcome {
    let mut outcome = RenameOutcome::default();

    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            outcome
                .failures
                .push((dir.to_path_buf(), format!("read dir failed: {e}")));
            return outcome;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let Some(kind) = classify_base_name(stem) else {
            debug!(file = %path.display(), "not a known template, left untouched");
            continue;
        };
        if !flag_enabled(kind, flags) {
            debug!(file = %path.display(), ?kind, "rename flag disabled");
            continue;
        }
        let Some(new_stem) = dest_stem(kind, ctx) else {
            warn!(file = %path.display(), ?kind, "no months tag, cannot derive name");
            continue;
        };
        let new_name = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => format!("{new_stem}.{ext}"),
            None => new_stem,
        };
        let dest = path.with_file_name(&new_name);
        if dest == path {
            continue;
        }
        if dest.exists() {
            outcome.failures.push((
                path.clone(),
                format!("destination already exists: {}", dest.display()),
            ));
            continue;
        }
        match std::fs::rename(&path, &dest) {
            Ok(()) => {
                info!(from = %path.display(), to = %dest.display(), "renamed");
                outcome.renamed.push(RenamedFile {
                    from: path,
                    to: dest,
                    kind,
                });
            }
            Err(e) => {
                outcome.failures.push((path, format!("rename failed: {e}")));
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::{RenameContext, TemplateKind, classify_base_name, dest_stem};

    #[test]
    fn classifies_the_three_known_families() {
        assert_eq!(
            classify_base_name("Kind_Protokollbogen_24_Monate"),
            Some(TemplateKind::Protokollbogen)
        );
        assert_eq!(
            classify_base_name("Allgemeiner-Entwicklungsbericht"),
            Some(TemplateKind::AllgemeinerEntwicklungsbericht)
        );
        assert_eq!(
            classify_base_name("Allgemeiner Entwicklungsbericht"),
            Some(TemplateKind::AllgemeinerEntwicklungsbericht)
        );
        assert_eq!(
            classify_base_name("Vorschulentwicklungsbericht"),
            Some(TemplateKind::VorschulEntwicklungsbericht)
        );
        assert_eq!(
            classify_base_name("Vorschul-Entwicklungsbericht"),
            Some(TemplateKind::VorschulEntwicklungsbericht)
        );
        assert_eq!(classify_base_name("Notizen"), None);
        // Already-renamed outputs no longer classify.
        assert_eq!(
            classify_base_name("Protokollbogen 24 Monate Anna Müller Januar 2026"),
            None
        );
    }

    #[test]
    fn destination_names_are_deterministic() {
        let ctx = RenameContext {
            kid: "Anna Müller".to_string(),
            month: "Januar".to_string(),
            year: 2026,
            months_tag: Some(24),
        };
        assert_eq!(
            dest_stem(TemplateKind::Protokollbogen, &ctx).as_deref(),
            Some("Protokollbogen 24 Monate Anna Müller Januar 2026")
        );
        assert_eq!(
            dest_stem(TemplateKind::AllgemeinerEntwicklungsbericht, &ctx).as_deref(),
            Some("Allgemeiner Entwicklungsbericht Anna Müller Januar 2026")
        );
        assert_eq!(
            dest_stem(TemplateKind::VorschulEntwicklungsbericht, &ctx).as_deref(),
            Some("Vorschulentwicklungsbericht Anna Müller Januar 2026")
        );
    }

    #[test]
    fn protokoll_name_needs_the_months_tag() {
        let ctx = RenameContext {
            kid: "Anna Müller".to_string(),
            month: "Januar".to_string(),
            year: 2026,
            months_tag: None,
        };
        assert_eq!(dest_stem(TemplateKind::Protokollbogen, &ctx), None);
    }
}

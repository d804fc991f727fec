//! The generate pipeline with explicit stages.
//!
//! Stage order: validate → lookup → resolve band → build target path →
//! copy templates → rename → fill forms. Validation and lookup failures
//! halt the run; a missing band or a per-file copy/rename/fill failure
//! degrades it and the remaining independent steps continue.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, error, info, info_span, warn};

use bericht_files::{
    FilesError, OverwritePrompt, RenameContext, RenameFlags, build_target_path, copy_directory,
    list_children, rename_known_files, safe_copy, title_case,
};
use bericht_forms::{FormValues, fill_pdf_file};
use bericht_model::{
    AgeRecord, CopyOutcome, DocumentFlags, ErrorKind, ReportRequest, RequestError, RunReport,
    UserFacing,
};
use bericht_sheet::{WorkbookSource, lookup};
use bericht_standards::{TemplateKind, find_group, find_month, resolve_band};

use crate::logging::redact_value;

/// Outcome of one generate run.
#[derive(Debug, Serialize)]
pub struct GenerateResult {
    pub target_dir: Option<PathBuf>,
    pub record: Option<AgeRecord>,
    pub band_months: Option<u8>,
    pub report: RunReport,
}

/// Checks the input contract and canonicalizes group and month spellings.
pub fn validate_request(
    group: &str,
    kid: &str,
    month: &str,
    year: &str,
    include: DocumentFlags,
) -> Result<ReportRequest, RequestError> {
    let group = find_group(group).ok_or_else(|| RequestError::UnknownGroup {
        name: group.trim().to_string(),
    })?;
    let month = find_month(month).ok_or_else(|| RequestError::UnknownMonth {
        value: month.trim().to_string(),
    })?;
    ReportRequest::new(group, kid, month, year, include)
}

/// Runs the pipeline after validation. The workbook source and the
/// overwrite prompt arrive as capabilities so the stages stay testable
/// without real spreadsheets or a console.
pub fn run_generate(
    home: &Path,
    request: &ReportRequest,
    source: &mut dyn WorkbookSource,
    prompt: &mut dyn OverwritePrompt,
) -> GenerateResult {
    let mut report = RunReport::default();

    if let Some(halt) = check_child_listing(home, request, &mut report) {
        return halt;
    }

    // Lookup is mandatory: without an age record nothing downstream makes
    // sense.
    let lookup_span = info_span!("lookup", group = %request.group);
    let record = match lookup_span.in_scope(|| lookup(source, &request.kid)) {
        Ok(record) => record,
        Err(e) => {
            error!(error = %e, "lookup failed");
            report.add_error(e.kind(), e.user_message());
            return halted(report);
        }
    };
    info!(
        age_months = record.age_months,
        kid = redact_value(&request.kid.display_name()),
        "lookup complete"
    );

    let band = resolve_band(record.age_months);
    if band.is_none() {
        error!(age_months = record.age_months, "no age band for value");
        report.add_error(
            ErrorKind::BandNotFound,
            format!(
                "Für den Monatswert {:.2} gibt es keinen Protokollbogen; der Wert liegt außerhalb der Tabelle.",
                record.age_months
            ),
        );
    }

    // Path resolution is the second mandatory stage.
    let target = build_target_path(home, &request.group, &request.kid, request.year, &request.month);
    if let Err(e) = std::fs::create_dir_all(&target) {
        let error = FilesError::Io {
            op: "create target dir",
            path: target.clone(),
            source: e,
        };
        error!(error = %error, "target path creation failed");
        report.add_error(error.kind(), error.user_message());
        return GenerateResult {
            target_dir: None,
            record: Some(record),
            band_months: band.map(|b| b.months),
            report,
        };
    }

    let copy_span = info_span!("copy", target = %target.display());
    let extra_fill =
        copy_span.in_scope(|| copy_templates(home, request, band, &target, prompt, &mut report));

    let ctx = RenameContext {
        kid: title_case(&request.kid.display_name()),
        month: request.month.clone(),
        year: request.year,
        months_tag: band.map(|b| b.months),
    };
    let flags = RenameFlags {
        protokoll: true,
        allgemein: request.include.allgemein,
        vorschul: request.include.vorschul,
    };
    let outcome = rename_known_files(&target, &ctx, flags);
    for (path, reason) in &outcome.failures {
        error!(path = %path.display(), reason = %reason, "rename failed");
        report.add_error(
            ErrorKind::IoFailure,
            format!(
                "Die Datei {} konnte nicht umbenannt werden.",
                file_name(path)
            ),
        );
    }
    let mut fill_targets: Vec<(PathBuf, TemplateKind)> = outcome
        .renamed
        .iter()
        .map(|r| (r.to.clone(), r.kind))
        .collect();
    for renamed in outcome.renamed {
        report.record_rename(renamed.from, renamed.to);
    }
    fill_targets.extend(extra_fill);

    let values = FormValues::dated_today(
        ctx.kid.clone(),
        request.group.clone(),
        record.birth_date.clone(),
        record.gender,
    );
    let fill_span = info_span!("fill", count = fill_targets.len());
    fill_span.in_scope(|| {
        for (path, kind) in fill_targets {
            match fill_pdf_file(&path, kind, &values) {
                Ok(warnings) => {
                    report.record_filled(path);
                    for warning in warnings {
                        report.add_warning(warning);
                    }
                }
                Err(e) => {
                    error!(path = %path.display(), error = %e, "fill failed");
                    report.add_error(e.kind(), e.user_message());
                }
            }
        }
    });

    GenerateResult {
        target_dir: Some(target),
        record: Some(record),
        band_months: band.map(|b| b.months),
        report,
    }
}

/// A child folder must already exist under the group before reports are
/// generated into it; a missing group tree only means this is the first
/// run for the group.
fn check_child_listing(
    home: &Path,
    request: &ReportRequest,
    report: &mut RunReport,
) -> Option<GenerateResult> {
    match list_children(home, &request.group) {
        Ok(children) => {
            let kid_folder = title_case(&request.kid.display_name());
            if !children.contains(&kid_folder) {
                let e = RequestError::ChildNotListed {
                    name: kid_folder,
                    group: request.group.clone(),
                };
                error!(error = %e, "child not in group listing");
                report.add_error(e.kind(), e.user_message());
                return Some(halted(std::mem::take(report)));
            }
            None
        }
        Err(FilesError::DirectoryMissing { path }) => {
            debug!(path = %path.display(), "group folder missing, child check skipped");
            None
        }
        Err(e) => {
            warn!(error = %e, "child listing unreadable");
            report.add_warning(e.user_message());
            None
        }
    }
}

/// Copies the band template directory plus the enabled general templates.
/// Returns the copied files that are filled without renaming.
fn copy_templates(
    home: &Path,
    request: &ReportRequest,
    band: Option<&bericht_standards::AgeBand>,
    target: &Path,
    prompt: &mut dyn OverwritePrompt,
    report: &mut RunReport,
) -> Vec<(PathBuf, TemplateKind)> {
    if let Some(band) = band {
        let band_dir = home.join(band.template_dir());
        match copy_directory(&band_dir, target, prompt) {
            Ok(copies) => {
                for copy in copies {
                    report.record_copy(copy);
                }
            }
            Err(e) => {
                error!(error = %e, dir = %band_dir.display(), "band template copy failed");
                report.add_error(e.kind(), e.user_message());
            }
        }
    }

    let mut extra_fill = Vec::new();
    let optional = [
        (
            request.include.allgemein,
            TemplateKind::AllgemeinerEntwicklungsbericht,
        ),
        (
            request.include.vorschul,
            TemplateKind::VorschulEntwicklungsbericht,
        ),
        (
            request.include.elterngespraech,
            TemplateKind::ProtokollElterngespraech,
        ),
        (
            request.include.uebergang,
            TemplateKind::KrippeUebergangsbericht,
        ),
    ];
    for (enabled, kind) in optional {
        if !enabled {
            continue;
        }
        let Some(file_name) = kind.source_file_name() else {
            continue;
        };
        let source_path = home.join("Entwicklungsboegen").join(file_name);
        if !source_path.is_file() {
            warn!(template = file_name, "optional template missing, skipped");
            report.add_warning(format!(
                "Die Vorlage {file_name} wurde nicht gefunden und übersprungen."
            ));
            continue;
        }
        let dest = target.join(file_name);
        let copy = safe_copy(&source_path, &dest, prompt);
        let copied = matches!(
            copy.outcome,
            CopyOutcome::Copied | CopyOutcome::BackedUpAndCopied
        );
        report.record_copy(copy);
        // These two kinds keep their source names; the other kinds pass
        // through the rename stage and are filled under their new names.
        if copied
            && matches!(
                kind,
                TemplateKind::ProtokollElterngespraech | TemplateKind::KrippeUebergangsbericht
            )
        {
            extra_fill.push((dest, kind));
        }
    }
    extra_fill
}

fn halted(report: RunReport) -> GenerateResult {
    GenerateResult {
        target_dir: None,
        record: None,
        band_months: None,
        report,
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("Datei")
        .to_string()
}

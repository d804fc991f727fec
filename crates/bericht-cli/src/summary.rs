//! Console summary of a generate run.

use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use bericht_model::CopyOutcome;

use bericht_cli::pipeline::GenerateResult;

pub fn print_summary(result: &GenerateResult) {
    if let Some(target) = &result.target_dir {
        println!("Zielordner: {}", target.display());
    }
    if let Some(record) = &result.record {
        println!(
            "Alter: {:.2} Monate (geboren {})",
            record.age_months,
            if record.birth_date.is_empty() {
                "unbekannt"
            } else {
                &record.birth_date
            }
        );
    }
    if let Some(months) = result.band_months {
        println!("Protokollbogen: {months} Monate");
    }

    if !result.report.copies.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Datei"), header_cell("Ergebnis")]);
        apply_table_style(&mut table);
        align_column(&mut table, 1, CellAlignment::Center);
        for copy in &result.report.copies {
            table.add_row(vec![Cell::new(file_name(&copy.dest)), outcome_cell(copy.outcome)]);
        }
        println!("{table}");
    }

    for (from, to) in &result.report.renamed {
        println!("Umbenannt: {} -> {}", file_name(from), file_name(to));
    }
    if !result.report.filled.is_empty() {
        println!("Ausgefüllt: {} Formular(e)", result.report.filled.len());
    }

    for warning in &result.report.warnings {
        eprintln!("Hinweis: {warning}");
    }
    if !result.report.errors.is_empty() {
        eprintln!("Fehler:");
        for error in &result.report.errors {
            eprintln!("- {}", error.message);
        }
    }

    if result.report.fully_successful() {
        println!("Alle Schritte erfolgreich abgeschlossen.");
    } else {
        println!("Der Lauf war nicht vollständig erfolgreich.");
    }
}

fn outcome_cell(outcome: CopyOutcome) -> Cell {
    match outcome {
        CopyOutcome::Copied => Cell::new("kopiert")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        CopyOutcome::BackedUpAndCopied => Cell::new("gesichert + kopiert").fg(Color::Green),
        CopyOutcome::SkippedByUser => Cell::new("übersprungen").fg(Color::Yellow),
        CopyOutcome::Failed => Cell::new("fehlgeschlagen")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("?")
        .to_string()
}

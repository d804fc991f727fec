use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::error;

use bericht_files::{AlwaysOverwrite, NeverOverwrite, OverwritePrompt, list_children};
use bericht_model::{DocumentFlags, UserFacing};
use bericht_sheet::{XlsmWorkbook, workbook_path};
use bericht_standards::{BAND_TABLE, GROUPS, short_group_code, validate_band_table};

use bericht_cli::config::resolve_home;
use bericht_cli::pipeline::{GenerateResult, run_generate, validate_request};

use crate::cli::{ChildrenArgs, GenerateArgs, OverwriteArg};
use crate::console::ConsolePrompt;
use crate::summary::{apply_table_style, header_cell, print_summary};

/// Runs the whole generate pipeline. Halting failures (missing home,
/// invalid input, lookup errors) are surfaced with their localized
/// message; everything later degrades the run instead of aborting it.
pub fn run_generate_command(args: &GenerateArgs, cli_home: Option<std::path::PathBuf>) -> i32 {
    if let Err(e) = validate_band_table() {
        error!(error = %e, "band table invalid");
        eprintln!("Interner Fehler: die Alterstabelle ist ungültig.");
        return 1;
    }

    let home = match resolve_home(cli_home) {
        Ok(home) => home,
        Err(e) => return halt(&e),
    };

    let include = DocumentFlags {
        allgemein: args.allgemein,
        vorschul: args.vorschul,
        elterngespraech: args.elterngespraech,
        uebergang: args.uebergang,
    };
    let request = match validate_request(&args.group, &args.kid, &args.month, &args.year, include) {
        Ok(request) => request,
        Err(e) => return halt(&e),
    };

    let path = workbook_path(&home, &request.group);
    let mut workbook = match XlsmWorkbook::open(&path) {
        Ok(workbook) => workbook,
        Err(e) => return halt(&e),
    };

    let mut prompt = make_prompt(args.overwrite);
    let result = run_generate(&home, &request, &mut workbook, prompt.as_mut());
    report_result(&result, args.json)
}

fn report_result(result: &GenerateResult, json: bool) -> i32 {
    if json {
        match serde_json::to_string_pretty(result) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("error: {e}");
                return 1;
            }
        }
    } else {
        print_summary(result);
    }
    i32::from(!result.report.fully_successful())
}

fn halt(e: &(impl UserFacing + std::fmt::Display)) -> i32 {
    error!(error = %e, "run halted");
    eprintln!("{}", e.user_message());
    1
}

fn make_prompt(choice: OverwriteArg) -> Box<dyn OverwritePrompt> {
    match choice {
        OverwriteArg::Ask => Box::new(ConsolePrompt),
        OverwriteArg::Always => Box::new(AlwaysOverwrite),
        OverwriteArg::Never => Box::new(NeverOverwrite),
    }
}

pub fn run_groups() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Gruppe"),
        header_cell("Kürzel"),
        header_cell("Monatsrechner"),
    ]);
    apply_table_style(&mut table);
    for group in GROUPS {
        let code = short_group_code(group);
        table.add_row(vec![
            (*group).to_string(),
            code.clone(),
            format!("Monatsrechner-Kinder-Zielsetzung-{code}.xlsm"),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_bands() -> Result<()> {
    validate_band_table().context("age band table invariants")?;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Von"),
        header_cell("Bis"),
        header_cell("Bogen"),
        header_cell("Bereich"),
    ]);
    apply_table_style(&mut table);
    for band in BAND_TABLE {
        table.add_row(vec![
            format!("{:.2}", band.start),
            format!("{:.2}", band.end),
            format!("{} Monate", band.months),
            band.stage.dir_name().to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_children(args: &ChildrenArgs, cli_home: Option<std::path::PathBuf>) -> i32 {
    let home = match resolve_home(cli_home) {
        Ok(home) => home,
        Err(e) => return halt(&e),
    };
    let Some(group) = bericht_standards::find_group(&args.group) else {
        eprintln!("Die Gruppe \"{}\" ist nicht bekannt.", args.group.trim());
        return 1;
    };
    match list_children(&home, group) {
        Ok(children) => {
            for child in children {
                println!("{child}");
            }
            0
        }
        Err(e) => halt(&e),
    }
}

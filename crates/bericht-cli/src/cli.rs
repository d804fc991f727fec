//! CLI argument definitions for berichtwerk.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "berichtwerk",
    version,
    about = "berichtwerk - Entwicklungsberichte erzeugen und ablegen",
    long_about = "Erzeugt die Entwicklungsbericht-Mappe eines Kindes:\n\
                  Alter aus dem Monatsrechner nachschlagen, den passenden\n\
                  Protokollbogen auswählen, Dateien in den Monatsordner\n\
                  kopieren, umbenennen und die Formularfelder ausfüllen."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow child names in log lines (off by default).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Home folder holding the report and template trees
    /// (fallback: BERICHTWERK_HOME).
    #[arg(long = "home", value_name = "DIR", global = true)]
    pub home: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate the report folder for one child and month.
    Generate(GenerateArgs),

    /// List the known groups with their workbook file names.
    Groups,

    /// List the age-band table.
    Bands,

    /// List the child folders of a group.
    Children(ChildrenArgs),
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Group name, e.g. "Bären".
    #[arg(long)]
    pub group: String,

    /// Child name as "Vorname Nachname".
    #[arg(long, value_name = "NAME")]
    pub kid: String,

    /// Report month, e.g. "Januar".
    #[arg(long)]
    pub month: String,

    /// Report year (2023-2099).
    #[arg(long)]
    pub year: String,

    /// Also copy and fill the Allgemeiner Entwicklungsbericht.
    #[arg(long)]
    pub allgemein: bool,

    /// Also copy and fill the Vorschulentwicklungsbericht.
    #[arg(long)]
    pub vorschul: bool,

    /// Also copy and fill the Protokoll Elterngespräch.
    #[arg(long)]
    pub elterngespraech: bool,

    /// Also copy and fill the Krippe Übergangsbericht.
    #[arg(long)]
    pub uebergang: bool,

    /// What to do when a destination file already exists.
    #[arg(long, value_enum, default_value = "ask")]
    pub overwrite: OverwriteArg,

    /// Print the run report as JSON instead of tables.
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct ChildrenArgs {
    /// Group name, e.g. "Bären".
    #[arg(long)]
    pub group: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OverwriteArg {
    /// Ask per file on the console.
    Ask,
    /// Overwrite everything (backups are still written).
    Always,
    /// Skip every existing file.
    Never,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

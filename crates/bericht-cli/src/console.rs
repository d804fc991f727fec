//! Interactive overwrite prompt.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;

use tracing::warn;

use bericht_files::OverwritePrompt;

/// Asks per file on stdin. Without a terminal the answer defaults to
/// "no" so an unattended run never destroys files.
pub struct ConsolePrompt;

impl OverwritePrompt for ConsolePrompt {
    fn confirm_overwrite(&mut self, dest: &Path) -> bool {
        if !io::stdin().is_terminal() {
            warn!(dest = %dest.display(), "no terminal, declining overwrite");
            return false;
        }
        print!(
            "Die Datei {} existiert bereits. Überschreiben? [j/N] ",
            dest.display()
        );
        let _ = io::stdout().flush();
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "j" | "ja")
    }
}

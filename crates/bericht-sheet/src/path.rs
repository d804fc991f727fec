use std::path::{Path, PathBuf};

use bericht_standards::{short_group_code, transliterate};

/// Workbook location for a group, derived from the home folder and the
/// group's display name. Umlauts are transliterated in the folder name;
/// the file name carries the short group code.
pub fn workbook_path(home: &Path, group: &str) -> PathBuf {
    let folder = format!("{} Entwicklungsberichte", transliterate(group));
    let file = format!(
        "Monatsrechner-Kinder-Zielsetzung-{}.xlsm",
        short_group_code(group)
    );
    home.join("Entwicklungsberichte").join(folder).join(file)
}

#[cfg(test)]
mod tests {
    use super::workbook_path;
    use std::path::Path;

    #[test]
    fn builds_transliterated_workbook_path() {
        let path = workbook_path(Path::new("/home/kita"), "Bären");
        assert_eq!(
            path,
            Path::new(
                "/home/kita/Entwicklungsberichte/Baeren Entwicklungsberichte/Monatsrechner-Kinder-Zielsetzung-Baeren.xlsm"
            )
        );
    }

    #[test]
    fn short_code_drops_second_token() {
        let path = workbook_path(Path::new("/h"), "Schmetterlinge Gelb");
        assert!(
            path.ends_with(
                "Entwicklungsberichte/Schmetterlinge Gelb Entwicklungsberichte/Monatsrechner-Kinder-Zielsetzung-Schmetterlinge.xlsm"
            )
        );
    }
}

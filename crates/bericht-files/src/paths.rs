//! Target directory convention:
//! `<home>/Entwicklungsberichte/<Group>/<Kid>/<Year>/<Month>`.

use std::path::{Path, PathBuf};

use bericht_model::PersonName;

use crate::error::FilesError;

/// Word-wise title case: first letter upper, rest lower.
/// "anna MÜLLER" → "Anna Müller". Extra whitespace collapses.
pub fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let mut out: String = first.to_uppercase().collect();
                    out.push_str(&chars.as_str().to_lowercase());
                    out
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The dated report directory for one child and month.
pub fn build_target_path(
    home: &Path,
    group: &str,
    kid: &PersonName,
    year: u16,
    month: &str,
) -> PathBuf {
    home.join("Entwicklungsberichte")
        .join(title_case(group))
        .join(title_case(&kid.display_name()))
        .join(year.to_string())
        .join(title_case(month))
}

/// Components re-read from a target path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetParts {
    pub group: String,
    pub kid: String,
    pub year: u16,
    pub month: String,
}

/// Inverse of [`build_target_path`]; `None` when the path does not follow
/// the convention under the given home folder.
pub fn parse_target_path(home: &Path, path: &Path) -> Option<TargetParts> {
    let relative = path.strip_prefix(home.join("Entwicklungsberichte")).ok()?;
    let mut parts = relative
        .components()
        .map(|c| c.as_os_str().to_str().map(str::to_string));
    let group = parts.next()??;
    let kid = parts.next()??;
    let year: u16 = parts.next()??.parse().ok()?;
    let month = parts.next()??;
    if parts.next().is_some() {
        return None;
    }
    Some(TargetParts {
        group,
        kid,
        year,
        month,
    })
}

/// Child folder names under the group's report tree, sorted. Feeds the
/// name autocomplete and the unlisted-child validation.
pub fn list_children(home: &Path, group: &str) -> Result<Vec<String>, FilesError> {
    let dir = home.join("Entwicklungsberichte").join(title_case(group));
    if !dir.is_dir() {
        return Err(FilesError::DirectoryMissing { path: dir });
    }
    let entries = std::fs::read_dir(&dir).map_err(|e| FilesError::io("read dir", &dir, e))?;
    let mut children = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| FilesError::io("read dir", &dir, e))?;
        if entry.path().is_dir() {
            if let Some(name) = entry.file_name().to_str() {
                children.push(name.to_string());
            }
        }
    }
    children.sort();
    Ok(children)
}

#[cfg(test)]
mod tests {
    use super::{build_target_path, parse_target_path, title_case};
    use bericht_model::PersonName;
    use std::path::Path;

    #[test]
    fn title_cases_words() {
        assert_eq!(title_case("bären"), "Bären");
        assert_eq!(title_case("anna MÜLLER"), "Anna Müller");
        assert_eq!(title_case("  schmetterlinge   gelb "), "Schmetterlinge Gelb");
    }

    #[test]
    fn builds_the_four_level_tree() {
        let path = build_target_path(
            Path::new("/home/kita"),
            "bären",
            &PersonName::new("anna", "müller"),
            2026,
            "januar",
        );
        assert_eq!(
            path,
            Path::new("/home/kita/Entwicklungsberichte/Bären/Anna Müller/2026/Januar")
        );
    }

    #[test]
    fn parse_inverts_build() {
        let home = Path::new("/home/kita");
        let kid = PersonName::new("Anna", "Müller");
        let path = build_target_path(home, "Bären", &kid, 2026, "Januar");
        let parts = parse_target_path(home, &path).expect("parses");
        assert_eq!(parts.group, "Bären");
        assert_eq!(parts.kid, "Anna Müller");
        assert_eq!(parts.year, 2026);
        assert_eq!(parts.month, "Januar");
    }

    #[test]
    fn parse_rejects_foreign_paths() {
        let home = Path::new("/home/kita");
        assert!(parse_target_path(home, Path::new("/elsewhere/x")).is_none());
        assert!(
            parse_target_path(home, Path::new("/home/kita/Entwicklungsberichte/Bären")).is_none()
        );
        assert!(
            parse_target_path(
                home,
                Path::new("/home/kita/Entwicklungsberichte/Bären/Anna/keinjahr/Januar")
            )
            .is_none()
        );
    }
}

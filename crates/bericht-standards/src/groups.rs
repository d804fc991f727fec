//! The fixed group roster and German month names.
//!
//! Group names appear in three places with different spellings: as display
//! names (with umlauts), transliterated inside the workbook folder name,
//! and shortened to the first token inside the workbook file name.

/// All groups the kindergarten currently runs.
pub const GROUPS: &[&str] = &[
    "Bären",
    "Igel",
    "Füchse",
    "Schmetterlinge Gelb",
    "Schmetterlinge Blau",
];

/// German month names as they appear in the report folder tree.
pub const MONTHS: &[&str] = &[
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

/// Resolves a user-entered group to its canonical display name.
pub fn find_group(name: &str) -> Option<&'static str> {
    let name = name.trim();
    GROUPS
        .iter()
        .find(|g| g.eq_ignore_ascii_case(name) || transliterate(g).eq_ignore_ascii_case(name))
        .copied()
}

/// Resolves a user-entered month to its canonical form.
pub fn find_month(name: &str) -> Option<&'static str> {
    let name = name.trim();
    MONTHS
        .iter()
        .find(|m| m.eq_ignore_ascii_case(name) || transliterate(m).eq_ignore_ascii_case(name))
        .copied()
}

/// German umlaut transliteration used in workbook folder and file names.
pub fn transliterate(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            'ä' => out.push_str("ae"),
            'ö' => out.push_str("oe"),
            'ü' => out.push_str("ue"),
            'Ä' => out.push_str("Ae"),
            'Ö' => out.push_str("Oe"),
            'Ü' => out.push_str("Ue"),
            'ß' => out.push_str("ss"),
            other => out.push(other),
        }
    }
    out
}

/// First whitespace-delimited token of the transliterated group name.
///
/// "Schmetterlinge Gelb" → "Schmetterlinge", "Bären" → "Baeren".
pub fn short_group_code(group: &str) -> String {
    transliterate(group)
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string()
}

//! The row-window scan over the Monatsrechner workbook.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, warn};

use bericht_match::{DEFAULT_THRESHOLD, NameMatch, classify};
use bericht_model::{AgeRecord, Gender, PersonName};

use crate::error::SheetError;
use crate::grid::{CellGrid, WorkbookSource};

pub const MAIN_SHEET: &str = "Monatsrechner";
pub const GENDER_SHEET: &str = "NAMES-BIRTHDAYS-FILL-IN";

/// Fixed row window of the main sheet. Group lists never exceed 25 rows.
const MAIN_FIRST_ROW: u32 = 7;
const MAIN_LAST_ROW: u32 = 31;
const GENDER_FIRST_ROW: u32 = 4;
const GENDER_LAST_ROW: u32 = 28;

const COL_LAST_NAME: u32 = 3;
const COL_FIRST_NAME: u32 = 4;
const COL_BIRTH_DATE: u32 = 5;
const COL_AGE_MONTHS: u32 = 6;
const COL_GENDER: u32 = 8;

/// Scans the workbook for the queried child and produces its
/// [`AgeRecord`].
///
/// The main scan keeps going after an exact hit: when the sheet carries
/// the same child twice inside the window, the last row with a usable
/// age value wins. A row whose name is within edit distance
/// [`DEFAULT_THRESHOLD`] but not equal aborts the scan immediately so a
/// human can fix the spelling on one of the two sides.
pub fn lookup(
    source: &mut dyn WorkbookSource,
    query: &PersonName,
) -> Result<AgeRecord, SheetError> {
    let main = source.grid(MAIN_SHEET)?;
    let mut hit: Option<(f64, String)> = None;

    for row in MAIN_FIRST_ROW..=MAIN_LAST_ROW {
        let last = cell_trimmed(main.as_ref(), row, COL_LAST_NAME);
        let first = cell_trimmed(main.as_ref(), row, COL_FIRST_NAME);
        let (Some(last), Some(first)) = (last, first) else {
            continue;
        };

        let last_match = classify(&last, &query.last, DEFAULT_THRESHOLD);
        let first_match = classify(&first, &query.first, DEFAULT_THRESHOLD);

        if last_match == NameMatch::Exact && first_match == NameMatch::Exact {
            match read_age_row(main.as_ref(), row) {
                Ok(Some(found)) => {
                    debug!(row, age_months = found.0, "exact name match");
                    hit = Some(found);
                }
                Ok(None) => {
                    debug!(row, "exact name match without age value");
                }
                Err(error) => return Err(error),
            }
            continue;
        }

        if last_match != NameMatch::Distinct && first_match != NameMatch::Distinct {
            let found = PersonName::new(first, last);
            warn!(row, %found, %query, "similar but not equal name in sheet");
            return Err(SheetError::NameMismatch {
                found,
                queried: query.clone(),
            });
        }
    }

    let Some((age_months, birth_date)) = hit else {
        return Err(SheetError::NoAgeValue {
            kid: query.display_name(),
        });
    };

    let gender = scan_gender(source, query)?;

    Ok(AgeRecord {
        age_months,
        birth_date,
        gender,
    })
}

/// Reads age and birth date off an exact-match row. A blank age cell
/// yields `Ok(None)` so an earlier hit is not overwritten by an empty
/// duplicate row.
fn read_age_row(grid: &dyn CellGrid, row: u32) -> Result<Option<(f64, String)>, SheetError> {
    let Some(age_text) = cell_trimmed(grid, row, COL_AGE_MONTHS) else {
        return Ok(None);
    };
    let age_months = parse_age(&age_text).ok_or_else(|| SheetError::InvalidAge {
        row,
        value: age_text.clone(),
    })?;
    let birth_text = cell_trimmed(grid, row, COL_BIRTH_DATE).unwrap_or_default();
    let birth_date = if birth_text.is_empty() {
        String::new()
    } else {
        parse_birth_date(&birth_text)
            .ok_or_else(|| SheetError::InvalidBirthDate {
                row,
                value: birth_text.clone(),
            })?
            .format("%d.%m.%Y")
            .to_string()
    };
    Ok(Some((age_months, birth_date)))
}

/// First exact match in the second sheet wins; the scan stops there.
fn scan_gender(
    source: &mut dyn WorkbookSource,
    query: &PersonName,
) -> Result<Gender, SheetError> {
    let grid = source.grid(GENDER_SHEET)?;
    for row in GENDER_FIRST_ROW..=GENDER_LAST_ROW {
        let last = cell_trimmed(grid.as_ref(), row, COL_LAST_NAME);
        let first = cell_trimmed(grid.as_ref(), row, COL_FIRST_NAME);
        let (Some(last), Some(first)) = (last, first) else {
            continue;
        };
        if classify(&last, &query.last, DEFAULT_THRESHOLD) == NameMatch::Exact
            && classify(&first, &query.first, DEFAULT_THRESHOLD) == NameMatch::Exact
        {
            let gender = grid
                .text(row, COL_GENDER)
                .map(|value| Gender::from_cell(&value))
                .unwrap_or_default();
            return Ok(gender);
        }
    }
    Ok(Gender::Unknown)
}

fn cell_trimmed(grid: &dyn CellGrid, row: u32, col: u32) -> Option<String> {
    let value = grid.text(row, col)?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parses an age cell, accepting ',' as the decimal separator, rounded
/// to 2 places.
fn parse_age(value: &str) -> Option<f64> {
    let normalized = value.trim().replace(',', ".");
    let parsed: f64 = normalized.parse().ok()?;
    Some((parsed * 100.0).round() / 100.0)
}

/// Accepts the date spellings seen in real workbooks.
fn parse_birth_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    for format in ["%d.%m.%Y", "%Y-%m-%d", "%d.%m.%y"] {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}

//! The age-band table mapping a months-and-days value to a form template.
//!
//! Values come from the Monatsrechner worksheet as decimals where the
//! integer part is whole months and the fraction encodes days (24.50 =
//! 24 months, 15 days on the sheet's scale). Boundaries are inclusive on
//! both ends; the table is gap-free over the supported domain.

use std::path::PathBuf;

use thiserror::Error;

/// Lowest supported months value.
pub const DOMAIN_START: f64 = 10.15;
/// Highest supported months value.
pub const DOMAIN_END: f64 = 84.00;

/// Which template tree a band belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Infant group forms (bands up to 36 months).
    Krippe,
    /// Elementary group forms (42 months and up).
    Ele,
}

impl Stage {
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Krippe => "Krippe",
            Self::Ele => "Ele",
        }
    }
}

/// One inclusive interval of the banding table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgeBand {
    pub start: f64,
    pub end: f64,
    /// Numeric tag of the form ("24" in "Protokollbogen 24 Monate").
    pub months: u8,
    pub stage: Stage,
}

impl AgeBand {
    /// Template directory relative to the home folder.
    pub fn template_dir(&self) -> PathBuf {
        PathBuf::from("Entwicklungsboegen")
            .join(self.stage.dir_name())
            .join(format!("Protokollbogen {} Monate", self.months))
    }

    /// Base name of the age-banded form file inside [`Self::template_dir`].
    pub fn template_file_name(&self) -> String {
        format!("Kind_Protokollbogen_{}_Monate.pdf", self.months)
    }

    fn contains(&self, centi_months: i64) -> bool {
        (to_centi(self.start)..=to_centi(self.end)).contains(&centi_months)
    }
}

/// The banding table, ascending, inclusive, gap-free over
/// [`DOMAIN_START`, `DOMAIN_END`].
pub const BAND_TABLE: &[AgeBand] = &[
    AgeBand { start: 10.15, end: 16.14, months: 12, stage: Stage::Krippe },
    AgeBand { start: 16.15, end: 22.14, months: 18, stage: Stage::Krippe },
    AgeBand { start: 22.15, end: 27.14, months: 24, stage: Stage::Krippe },
    AgeBand { start: 27.15, end: 33.14, months: 30, stage: Stage::Krippe },
    AgeBand { start: 33.15, end: 39.14, months: 36, stage: Stage::Krippe },
    AgeBand { start: 39.15, end: 45.14, months: 42, stage: Stage::Ele },
    AgeBand { start: 45.15, end: 51.14, months: 48, stage: Stage::Ele },
    AgeBand { start: 51.15, end: 57.14, months: 54, stage: Stage::Ele },
    AgeBand { start: 57.15, end: 63.14, months: 60, stage: Stage::Ele },
    AgeBand { start: 63.15, end: 69.14, months: 66, stage: Stage::Ele },
    AgeBand { start: 69.15, end: 84.00, months: 72, stage: Stage::Ele },
];

/// Two-decimal value → whole centi-months. Comparisons happen on integers
/// so the inclusive boundaries stay exact.
fn to_centi(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

/// Finds the band containing `age_months`, or `None` for values outside
/// the supported domain. A `None` never aborts the pipeline; the caller
/// degrades the run and reports the numeric value.
pub fn resolve_band(age_months: f64) -> Option<&'static AgeBand> {
    let centi = to_centi(age_months);
    BAND_TABLE.iter().find(|band| band.contains(centi))
}

/// Band table defects. Only reachable when the table itself is edited.
#[derive(Debug, Error, PartialEq)]
pub enum BandTableError {
    #[error("band table does not start at {DOMAIN_START}")]
    WrongDomainStart,
    #[error("band table does not end at {DOMAIN_END}")]
    WrongDomainEnd,
    #[error("gap or overlap between {previous} and {next} months bands")]
    Discontinuity { previous: u8, next: u8 },
    #[error("band {months} months has start after end")]
    InvertedBand { months: u8 },
}

/// Checks the table invariants: full coverage of the domain, ascending,
/// no gaps, no overlaps. Run once at startup and from tests.
pub fn validate_band_table() -> Result<(), BandTableError> {
    let first = BAND_TABLE.first().ok_or(BandTableError::WrongDomainStart)?;
    if to_centi(first.start) != to_centi(DOMAIN_START) {
        return Err(BandTableError::WrongDomainStart);
    }
    let last = BAND_TABLE.last().ok_or(BandTableError::WrongDomainEnd)?;
    if to_centi(last.end) != to_centi(DOMAIN_END) {
        return Err(BandTableError::WrongDomainEnd);
    }
    for band in BAND_TABLE {
        if to_centi(band.start) > to_centi(band.end) {
            return Err(BandTableError::InvertedBand {
                months: band.months,
            });
        }
    }
    for pair in BAND_TABLE.windows(2) {
        // Adjacent bands must meet at exactly one centi-month step.
        if to_centi(pair[1].start) != to_centi(pair[0].end) + 1 {
            return Err(BandTableError::Discontinuity {
                previous: pair[0].months,
                next: pair[1].months,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        BAND_TABLE, DOMAIN_END, DOMAIN_START, Stage, resolve_band, to_centi, validate_band_table,
    };

    #[test]
    fn table_is_valid() {
        validate_band_table().expect("band table invariants");
    }

    #[test]
    fn every_domain_value_hits_exactly_one_band() {
        for centi in to_centi(DOMAIN_START)..=to_centi(DOMAIN_END) {
            let value = centi as f64 / 100.0;
            let hits = BAND_TABLE
                .iter()
                .filter(|band| band.contains(centi))
                .count();
            assert_eq!(hits, 1, "value {value} matched {hits} bands");
        }
    }

    #[test]
    fn out_of_domain_values_have_no_band() {
        assert!(resolve_band(10.14).is_none());
        assert!(resolve_band(84.01).is_none());
        assert!(resolve_band(-1.0).is_none());
    }

    #[test]
    fn boundaries_are_inclusive_on_both_sides() {
        assert_eq!(resolve_band(16.14).expect("upper boundary").months, 12);
        assert_eq!(resolve_band(16.15).expect("lower boundary").months, 18);
        assert_eq!(resolve_band(10.15).expect("domain start").months, 12);
        assert_eq!(resolve_band(84.00).expect("domain end").months, 72);
    }

    #[test]
    fn stage_split_at_39_15() {
        assert_eq!(resolve_band(39.14).expect("krippe side").stage, Stage::Krippe);
        assert_eq!(resolve_band(39.15).expect("ele side").stage, Stage::Ele);
    }

    #[test]
    fn example_value_maps_to_24_months_krippe() {
        let band = resolve_band(24.50).expect("in domain");
        assert_eq!(band.months, 24);
        assert_eq!(band.stage, Stage::Krippe);
        assert!(
            band.template_dir()
                .to_string_lossy()
                .contains("Krippe")
        );
        assert_eq!(band.template_file_name(), "Kind_Protokollbogen_24_Monate.pdf");
    }
}

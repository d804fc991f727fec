//! Static reference data, loaded once and never mutated at runtime.

pub mod bands;
pub mod groups;
pub mod templates;

pub use bands::{AgeBand, BAND_TABLE, BandTableError, Stage, resolve_band, validate_band_table};
pub use groups::{GROUPS, MONTHS, find_group, find_month, short_group_code, transliterate};
pub use templates::{FieldRole, FieldSpec, TemplateKind, field_schema};

//! Writes the template-specific field set into a document and swaps the
//! filled copy into place atomically.
//!
//! The filling logic targets the [`FormDocument`] capability; [`PdfForm`]
//! is the lopdf-backed production implementation.

pub mod error;
pub mod fill;
pub mod pdf;

pub use error::FormError;
pub use fill::{FormDocument, FormValues, fill, fill_pdf_file};
pub use pdf::PdfForm;

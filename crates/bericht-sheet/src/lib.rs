//! Spreadsheet lookup against the group's Monatsrechner workbook.
//!
//! The lookup logic is written against the [`CellGrid`]/[`WorkbookSource`]
//! capability interfaces; the calamine-backed [`XlsmWorkbook`] is the
//! production implementation and [`MemoryWorkbook`] the in-memory one.

pub mod error;
pub mod grid;
pub mod lookup;
pub mod path;
pub mod workbook;

pub use error::SheetError;
pub use grid::{CellGrid, MemoryGrid, MemoryWorkbook, WorkbookSource};
pub use lookup::{GENDER_SHEET, MAIN_SHEET, lookup};
pub use path::workbook_path;
pub use workbook::XlsmWorkbook;

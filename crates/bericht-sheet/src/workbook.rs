//! Calamine-backed workbook adapter.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use calamine::{Data, Range, Reader, Xlsx, XlsxError, open_workbook};

use crate::error::SheetError;
use crate::grid::{CellGrid, WorkbookSource};

/// An opened `.xlsm`/`.xlsx` workbook. Read-only; the lookup never writes.
pub struct XlsmWorkbook {
    inner: Xlsx<BufReader<File>>,
}

impl XlsmWorkbook {
    /// Opens the workbook, mapping the usual failure modes: a missing
    /// file, and a file currently open in Excel (detected through the
    /// `~$` owner file Excel drops next to an open workbook, or a
    /// permission error on open).
    pub fn open(path: &Path) -> Result<Self, SheetError> {
        if !path.is_file() {
            return Err(SheetError::WorkbookMissing {
                path: path.to_path_buf(),
            });
        }
        if excel_lock_file(path).is_some_and(|lock| lock.exists()) {
            return Err(SheetError::WorkbookLocked {
                path: path.to_path_buf(),
            });
        }
        match open_workbook::<Xlsx<_>, _>(path) {
            Ok(inner) => Ok(Self { inner }),
            Err(XlsxError::Io(error)) if error.kind() == std::io::ErrorKind::PermissionDenied => {
                Err(SheetError::WorkbookLocked {
                    path: path.to_path_buf(),
                })
            }
            Err(XlsxError::Io(error)) if error.kind() == std::io::ErrorKind::NotFound => {
                Err(SheetError::WorkbookMissing {
                    path: path.to_path_buf(),
                })
            }
            Err(other) => Err(SheetError::Spreadsheet(other)),
        }
    }
}

impl WorkbookSource for XlsmWorkbook {
    fn grid(&mut self, sheet: &str) -> Result<Box<dyn CellGrid>, SheetError> {
        match self.inner.worksheet_range(sheet) {
            Ok(range) => Ok(Box::new(RangeGrid { range })),
            Err(XlsxError::WorksheetNotFound(name)) => {
                Err(SheetError::WorksheetMissing { name })
            }
            Err(other) => Err(SheetError::Spreadsheet(other)),
        }
    }
}

/// Excel's sibling owner file, e.g. `~$Monatsrechner-....xlsm`.
fn excel_lock_file(path: &Path) -> Option<PathBuf> {
    let name = path.file_name()?.to_str()?;
    Some(path.with_file_name(format!("~${name}")))
}

struct RangeGrid {
    range: Range<Data>,
}

impl CellGrid for RangeGrid {
    fn text(&self, row: u32, col: u32) -> Option<String> {
        if row == 0 || col == 0 {
            return None;
        }
        self.range
            .get_value((row - 1, col - 1))
            .and_then(data_to_text)
    }
}

/// Text view of a cell. Dates become dd.MM.yyyy; error cells and blanks
/// read as absent.
fn data_to_text(data: &Data) -> Option<String> {
    match data {
        Data::String(s) => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                Some(format!("{}", *f as i64))
            } else {
                Some(f.to_string())
            }
        }
        Data::Bool(b) => Some(b.to_string()),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|naive| naive.format("%d.%m.%Y").to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
        Data::Error(_) | Data::Empty => None,
    }
}

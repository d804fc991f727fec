//! Read-only cell access, decoupled from the spreadsheet format.

use std::collections::BTreeMap;

use crate::error::SheetError;

/// Read-only access to one worksheet.
pub trait CellGrid {
    /// Cell content as text at 1-based Excel coordinates, `None` for
    /// blank or unreadable cells. No trimming.
    fn text(&self, row: u32, col: u32) -> Option<String>;
}

/// A workbook that can hand out worksheets by name.
pub trait WorkbookSource {
    fn grid(&mut self, sheet: &str) -> Result<Box<dyn CellGrid>, SheetError>;
}

/// In-memory grid, used by tests and the pipeline tests of the CLI crate.
#[derive(Debug, Clone, Default)]
pub struct MemoryGrid {
    cells: BTreeMap<(u32, u32), String>,
}

impl MemoryGrid {
    pub fn set(&mut self, row: u32, col: u32, value: impl Into<String>) -> &mut Self {
        self.cells.insert((row, col), value.into());
        self
    }
}

impl CellGrid for MemoryGrid {
    fn text(&self, row: u32, col: u32) -> Option<String> {
        self.cells.get(&(row, col)).cloned()
    }
}

/// In-memory workbook of named [`MemoryGrid`] sheets.
#[derive(Debug, Clone, Default)]
pub struct MemoryWorkbook {
    sheets: BTreeMap<String, MemoryGrid>,
}

impl MemoryWorkbook {
    pub fn insert_sheet(&mut self, name: impl Into<String>, grid: MemoryGrid) -> &mut Self {
        self.sheets.insert(name.into(), grid);
        self
    }
}

impl WorkbookSource for MemoryWorkbook {
    fn grid(&mut self, sheet: &str) -> Result<Box<dyn CellGrid>, SheetError> {
        self.sheets
            .get(sheet)
            .cloned()
            .map(|grid| Box::new(grid) as Box<dyn CellGrid>)
            .ok_or_else(|| SheetError::WorksheetMissing {
                name: sheet.to_string(),
            })
    }
}

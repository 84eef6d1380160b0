// Excel workbook backend built on umya-spreadsheet.
//
// A write opens the current file, rewrites the cells of the affected sheets
// in place, and saves to a sibling temp file that is then renamed over the
// target. Other sheets, column widths and the styles of rewritten cells are
// kept, and a reader never sees a half-written workbook.

use std::path::{Path, PathBuf};

use tracing::debug;
use umya_spreadsheet::{new_file_empty_worksheet, reader, writer, Cell, Spreadsheet, Worksheet};

use crate::error::StoreError;
use crate::sheet::{CellValue, Table, Workbook};

use super::SheetBackend;

/// A `.xlsx` file on local disk.
#[derive(Debug, Clone)]
pub struct XlsxBackend {
    path: PathBuf,
}

impl XlsxBackend {
    /// Open an existing workbook file.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if !path.is_file() {
            return Err(StoreError::Read {
                path,
                message: "file not found".into(),
            });
        }
        Ok(XlsxBackend { path })
    }

    /// Create a new workbook file with the given contents, replacing any
    /// existing file at `path`.
    pub fn create(path: impl Into<PathBuf>, workbook: &Workbook) -> Result<Self, StoreError> {
        let backend = XlsxBackend { path: path.into() };
        backend.save(workbook)?;
        Ok(backend)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_error(&self, message: impl Into<String>) -> StoreError {
        StoreError::Read {
            path: self.path.clone(),
            message: message.into(),
        }
    }

    fn write_error(&self, message: impl Into<String>) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            message: message.into(),
        }
    }

    /// Write a brand new workbook holding exactly `workbook`.
    fn save(&self, workbook: &Workbook) -> Result<(), StoreError> {
        let mut book = new_file_empty_worksheet();
        for (name, table) in workbook.sheets() {
            let sheet = book
                .new_sheet(name)
                .map_err(|e| self.write_error(format!("failed to add sheet `{name}`: {e}")))?;
            write_table(sheet, table);
        }
        self.commit(&book)
    }

    fn read_book(&self) -> Result<Spreadsheet, StoreError> {
        if !self.path.is_file() {
            return Err(self.read_error("file not found"));
        }
        reader::xlsx::read(&self.path)
            .map_err(|e| self.read_error(format!("failed to open workbook: {e}")))
    }

    /// Save `book` to a temp file and rename it over the target.
    fn commit(&self, book: &Spreadsheet) -> Result<(), StoreError> {
        let tmp_path = temp_path(&self.path);
        writer::xlsx::write(book, &tmp_path)
            .map_err(|e| self.write_error(format!("failed to save workbook: {e}")))?;
        std::fs::rename(&tmp_path, &self.path).map_err(|e| {
            let _ = std::fs::remove_file(&tmp_path);
            self.write_error(format!("failed to replace workbook: {e}"))
        })?;

        debug!("saved workbook {}", self.path.display());
        Ok(())
    }
}

impl SheetBackend for XlsxBackend {
    fn load(&self) -> Result<Workbook, StoreError> {
        let book = self.read_book()?;
        let mut workbook = Workbook::new();
        for sheet in book.get_sheet_collection() {
            workbook.set_sheet(sheet.get_name(), read_table(sheet));
        }
        Ok(workbook)
    }

    fn write_sheet(&mut self, name: &str, table: &Table) -> Result<(), StoreError> {
        self.write_sheets(&[(name, table)])
    }

    fn write_sheets(&mut self, sheets: &[(&str, &Table)]) -> Result<(), StoreError> {
        let mut book = self.read_book()?;
        for (name, table) in sheets {
            if book.get_sheet_by_name(name).is_none() {
                book.new_sheet(*name)
                    .map_err(|e| self.write_error(format!("failed to add sheet `{name}`: {e}")))?;
            }
            let sheet = book
                .get_sheet_by_name_mut(name)
                .ok_or_else(|| self.write_error(format!("sheet `{name}` vanished")))?;
            clear_cells(sheet);
            write_table(sheet, table);
        }
        self.commit(&book)
    }

    fn location(&self) -> Option<&Path> {
        Some(&self.path)
    }
}

// ---------------------------------------------------------------------------
// Sheet <-> Table conversion
// ---------------------------------------------------------------------------

/// Row 1 is the header; trailing blank header cells are dropped and blank
/// data rows are skipped. umya coordinates are 1-based `(column, row)`.
fn read_table(sheet: &Worksheet) -> Table {
    let (max_col, max_row) = sheet.get_highest_column_and_row();

    let mut columns: Vec<String> = (1..=max_col)
        .map(|col| sheet.get_value((col, 1)).trim().to_string())
        .collect();
    while columns.last().is_some_and(|c| c.is_empty()) {
        columns.pop();
    }
    if columns.is_empty() {
        return Table::default();
    }

    let width = columns.len() as u32;
    let mut rows = Vec::new();
    for row in 2..=max_row {
        let cells: Vec<CellValue> = (1..=width)
            .map(|col| sheet.get_cell((col, row)).map(read_cell).unwrap_or_default())
            .collect();
        if cells.iter().all(CellValue::is_empty) {
            continue;
        }
        rows.push(cells);
    }

    Table { columns, rows }
}

/// Numeric cells read as numbers; every other type reads as its text, so a
/// text cell holding "007" stays text.
fn read_cell(cell: &Cell) -> CellValue {
    if let Some(n) = cell.get_value_number() {
        return CellValue::Number(n);
    }
    let value = cell.get_value();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        CellValue::Empty
    } else {
        CellValue::text(trimmed)
    }
}

/// Drop every cell value in the sheet's used range. Column widths and row
/// heights stay; cells rewritten afterwards keep their style.
fn clear_cells(sheet: &mut Worksheet) {
    let (max_col, max_row) = sheet.get_highest_column_and_row();
    for row in 1..=max_row {
        for col in 1..=max_col {
            if let Some(cell) = sheet.get_cell((col, row)) {
                if !cell.get_value().is_empty() {
                    sheet.get_cell_mut((col, row)).set_value_string(String::new());
                }
            }
        }
    }
}

fn write_table(sheet: &mut Worksheet, table: &Table) {
    for (idx, column) in table.columns.iter().enumerate() {
        sheet
            .get_cell_mut((idx as u32 + 1, 1))
            .set_value_string(column.clone());
    }
    for (row_idx, row) in table.rows.iter().enumerate() {
        let row_num = row_idx as u32 + 2;
        for (col_idx, cell) in row.iter().enumerate() {
            let coord = (col_idx as u32 + 1, row_num);
            match cell {
                CellValue::Empty => {}
                CellValue::Number(n) => {
                    sheet.get_cell_mut(coord).set_value_number(*n);
                }
                CellValue::Text(s) => {
                    sheet.get_cell_mut(coord).set_value_string(s.clone());
                }
            }
        }
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

use crate::error::StoreError;
use crate::sheet::{Table, Workbook};

use super::SheetBackend;

/// A workbook held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    workbook: Workbook,
}

impl MemoryBackend {
    pub fn new(workbook: Workbook) -> Self {
        MemoryBackend { workbook }
    }

    /// The current persisted contents.
    pub fn workbook(&self) -> &Workbook {
        &self.workbook
    }

    /// Simulate an out-of-band edit to a sheet.
    pub fn edit_sheet(&mut self, name: &str, table: Table) {
        self.workbook.set_sheet(name, table);
    }
}

impl SheetBackend for MemoryBackend {
    fn load(&self) -> Result<Workbook, StoreError> {
        Ok(self.workbook.clone())
    }

    fn write_sheet(&mut self, name: &str, table: &Table) -> Result<(), StoreError> {
        self.workbook.set_sheet(name, table.clone());
        Ok(())
    }
}

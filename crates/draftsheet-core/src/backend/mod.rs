// Storage backends for the roster workbook.
//
// A backend persists whole sheets. The roster store decides what each sheet
// should contain; the backend only loads and writes tables.

mod memory;
mod xlsx;

pub use memory::MemoryBackend;
pub use xlsx::XlsxBackend;

use std::path::Path;

use crate::error::StoreError;
use crate::sheet::{Table, Workbook};

/// A sheet-partitioned store the roster store can read and write.
pub trait SheetBackend: Send {
    /// Load every sheet, in tab order.
    fn load(&self) -> Result<Workbook, StoreError>;

    /// Replace (or create) a single sheet. Must be durable on return.
    fn write_sheet(&mut self, name: &str, table: &Table) -> Result<(), StoreError>;

    /// Replace several sheets. Backends that can commit them together should
    /// override this; the default writes them one by one.
    fn write_sheets(&mut self, sheets: &[(&str, &Table)]) -> Result<(), StoreError> {
        for (name, table) in sheets {
            self.write_sheet(name, table)?;
        }
        Ok(())
    }

    /// The file this backend persists to, if any. Used as the watch target.
    fn location(&self) -> Option<&Path> {
        None
    }
}

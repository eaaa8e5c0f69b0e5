use std::fmt::Debug;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::errors::DescriptorError;

/// Column catalog of a physical result set, as reported by the driver.
///
/// Column indexes are 1-based.
pub trait ResultSetMetaData: Debug + Sync + Send {
    fn column_count(&self) -> Result<usize, DescriptorError>;

    fn column_label(&self, index: usize) -> Result<String, DescriptorError>;

    fn column_name(&self, index: usize) -> Result<String, DescriptorError>;

    /// Physical table the column belongs to.
    fn table_name(&self, index: usize) -> Result<String, DescriptorError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// Label the column is exposed under, e.g. the alias in `SELECT a AS b`.
    pub label: String,
    pub name: String,
    pub table: String,
}

impl ColumnDescriptor {
    pub fn new(label: impl Into<String>, name: impl Into<String>, table: impl Into<String>) -> Self {
        ColumnDescriptor {
            label: label.into(),
            name: name.into(),
            table: table.into(),
        }
    }

    /// A column exposed under its own name.
    pub fn unaliased(name: impl Into<String>, table: impl Into<String>) -> Self {
        let name = name.into();
        ColumnDescriptor {
            label: name.clone(),
            name,
            table: table.into(),
        }
    }
}

/// Owned snapshot of a result set's column catalog.
///
/// Once closed, every accessor fails like a driver would for a closed result
/// set.
#[derive(Debug, Default)]
pub struct MemoryResultSetMetaData {
    columns: Vec<ColumnDescriptor>,
    closed: AtomicBool,
}

impl MemoryResultSetMetaData {
    pub fn new(columns: impl IntoIterator<Item = ColumnDescriptor>) -> Self {
        MemoryResultSetMetaData {
            columns: columns.into_iter().collect(),
            closed: AtomicBool::new(false),
        }
    }

    pub fn close(&self) {
        self.closed.store(true, Ordering::Release);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    fn column(&self, index: usize) -> Result<&ColumnDescriptor, DescriptorError> {
        if self.is_closed() {
            return Err(DescriptorError::Closed);
        }
        index
            .checked_sub(1)
            .and_then(|idx| self.columns.get(idx))
            .ok_or(DescriptorError::InvalidColumnIndex {
                index,
                column_count: self.columns.len(),
            })
    }
}

impl ResultSetMetaData for MemoryResultSetMetaData {
    fn column_count(&self) -> Result<usize, DescriptorError> {
        if self.is_closed() {
            return Err(DescriptorError::Closed);
        }
        Ok(self.columns.len())
    }

    fn column_label(&self, index: usize) -> Result<String, DescriptorError> {
        self.column(index).map(|c| c.label.clone())
    }

    fn column_name(&self, index: usize) -> Result<String, DescriptorError> {
        self.column(index).map(|c| c.name.clone())
    }

    fn table_name(&self, index: usize) -> Result<String, DescriptorError> {
        self.column(index).map(|c| c.table.clone())
    }
}

/// Errors from reading a physical result descriptor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DescriptorError {
    #[error("Result set is closed")]
    Closed,

    #[error("Invalid column index {index}, result has {column_count} columns")]
    InvalidColumnIndex { index: usize, column_count: usize },

    #[error("Driver error: {0}")]
    Driver(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ExecuteError {
    #[error("Column index out of range: {index}, result has {column_count} columns")]
    ColumnIndexOutOfRange { index: usize, column_count: usize },

    #[error("Unknown column label '{0}'")]
    UnknownColumnLabel(String),

    #[error("Failed to access result metadata: {0}")]
    MetadataAccess(#[from] DescriptorError),
}

pub type Result<T, E = ExecuteError> = std::result::Result<T, E>;

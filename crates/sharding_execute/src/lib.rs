//! Resolution of physical result set metadata against the logic schema.
pub mod descriptor;
pub mod errors;
pub mod metadata;

pub use descriptor::{ColumnDescriptor, MemoryResultSetMetaData, ResultSetMetaData};
pub use metadata::QueryResultMetaData;

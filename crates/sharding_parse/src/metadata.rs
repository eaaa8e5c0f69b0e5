//! Logic table catalog available to fillers.
use std::collections::HashMap;

use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMetaData {
    pub name: String,
    pub data_type: String,
    pub primary_key: bool,
}

impl ColumnMetaData {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>, primary_key: bool) -> Self {
        ColumnMetaData {
            name: name.into(),
            data_type: data_type.into(),
            primary_key,
        }
    }
}

/// Columns of a single logic table in definition order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableMetaData {
    /// Lowercased column name -> column.
    columns: IndexMap<String, ColumnMetaData>,
}

impl TableMetaData {
    pub fn new(columns: impl IntoIterator<Item = ColumnMetaData>) -> Self {
        let columns = columns
            .into_iter()
            .map(|c| (c.name.to_lowercase(), c))
            .collect();
        TableMetaData { columns }
    }

    pub fn columns(&self) -> impl Iterator<Item = &ColumnMetaData> {
        self.columns.values()
    }

    pub fn contains_column(&self, column: &str) -> bool {
        self.columns.contains_key(&column.to_lowercase())
    }
}

/// Catalog of logic tables, keyed case insensitively.
#[derive(Debug, Clone, Default)]
pub struct ShardingTableMetaData {
    tables: HashMap<String, TableMetaData>,
}

impl ShardingTableMetaData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, logic_table: &str, meta: TableMetaData) {
        self.tables.insert(logic_table.to_lowercase(), meta);
    }

    pub fn get(&self, logic_table: &str) -> Option<&TableMetaData> {
        self.tables.get(&logic_table.to_lowercase())
    }

    pub fn contains_table(&self, logic_table: &str) -> bool {
        self.get(logic_table).is_some()
    }

    pub fn contains_column(&self, logic_table: &str, column: &str) -> bool {
        self.get(logic_table)
            .is_some_and(|meta| meta.contains_column(column))
    }

    /// Column names of a table in definition order, empty if the table is
    /// unknown.
    pub fn get_all_column_names(&self, logic_table: &str) -> Vec<&str> {
        match self.get(logic_table) {
            Some(meta) => meta.columns().map(|c| c.name.as_str()).collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups() {
        let mut meta = ShardingTableMetaData::new();
        meta.insert(
            "t_order",
            TableMetaData::new([
                ColumnMetaData::new("order_id", "BIGINT", true),
                ColumnMetaData::new("Status", "VARCHAR", false),
            ]),
        );

        assert!(meta.contains_table("T_ORDER"));
        assert!(meta.contains_column("t_order", "status"));
        assert!(!meta.contains_column("t_order", "amount"));
        assert!(!meta.contains_column("t_user", "status"));
        assert_eq!(vec!["order_id", "Status"], meta.get_all_column_names("t_order"));
        assert!(meta.get_all_column_names("t_user").is_empty());
    }
}

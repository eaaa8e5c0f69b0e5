use std::sync::Arc;

use indexmap::IndexMap;
use sharding_encrypt::{ShardingEncryptor, ShardingEncryptorEngine};
use sharding_rule::ShardingRuleOracle;
use tracing::trace;

use crate::descriptor::ResultSetMetaData;
use crate::errors::{ExecuteError, Result};

/// Logic view over the metadata of one physical result set.
///
/// Built once when the result set is opened and immutable afterwards, so it
/// can be read from multiple threads while decoding rows.
#[derive(Debug)]
pub struct QueryResultMetaData {
    /// Column label -> 1-based column indexes sharing that label, in physical
    /// column order.
    ///
    /// Labels repeat when joins or unions expose same-named columns.
    column_label_indexes: IndexMap<String, Vec<usize>>,
    result_set_meta: Arc<dyn ResultSetMetaData>,
    /// None when not running in sharding mode.
    sharding_rule: Option<Arc<dyn ShardingRuleOracle>>,
    encryptor_engine: Arc<ShardingEncryptorEngine>,
}

impl QueryResultMetaData {
    /// Create metadata for a result set.
    ///
    /// Reads every column label from the descriptor. Fails as a whole if any
    /// read fails.
    pub fn new(
        result_set_meta: Arc<dyn ResultSetMetaData>,
        sharding_rule: Option<Arc<dyn ShardingRuleOracle>>,
        encryptor_engine: Arc<ShardingEncryptorEngine>,
    ) -> Result<Self> {
        let column_label_indexes = Self::column_label_indexes(result_set_meta.as_ref())?;
        trace!(
            columns = column_label_indexes.values().map(Vec::len).sum::<usize>(),
            labels = column_label_indexes.len(),
            "built query result metadata"
        );

        Ok(QueryResultMetaData {
            column_label_indexes,
            result_set_meta,
            sharding_rule,
            encryptor_engine,
        })
    }

    /// Create metadata without a sharding rule or any encrypted columns.
    pub fn without_rule(result_set_meta: Arc<dyn ResultSetMetaData>) -> Result<Self> {
        Self::new(result_set_meta, None, Arc::new(ShardingEncryptorEngine::empty()))
    }

    fn column_label_indexes(
        result_set_meta: &dyn ResultSetMetaData,
    ) -> Result<IndexMap<String, Vec<usize>>> {
        let mut labels: IndexMap<String, Vec<usize>> = IndexMap::new();
        for index in 1..=result_set_meta.column_count()? {
            let label = result_set_meta.column_label(index)?;
            labels.entry(label).or_default().push(index);
        }
        Ok(labels)
    }

    /// Total number of columns, counting every duplicate label.
    pub fn column_count(&self) -> usize {
        self.column_label_indexes.values().map(Vec::len).sum()
    }

    /// Get the label of the column at a 1-based index.
    pub fn column_label(&self, index: usize) -> Result<&str> {
        self.column_label_indexes
            .iter()
            .find(|(_, indexes)| indexes.contains(&index))
            .map(|(label, _)| label.as_str())
            .ok_or(ExecuteError::ColumnIndexOutOfRange {
                index,
                column_count: self.column_count(),
            })
    }

    /// Get the physical name of the column at a 1-based index.
    pub fn column_name(&self, index: usize) -> Result<String> {
        Ok(self.result_set_meta.column_name(index)?)
    }

    /// Get the index of the column with the given label.
    ///
    /// When several columns share the label, the first in physical column
    /// order is returned.
    pub fn column_index(&self, label: &str) -> Result<usize> {
        self.column_label_indexes
            .get(label)
            .and_then(|indexes| indexes.first().copied())
            .ok_or_else(|| ExecuteError::UnknownColumnLabel(label.to_string()))
    }

    /// Get every index sharing the given label, in physical column order.
    pub fn column_indexes(&self, label: &str) -> &[usize] {
        self.column_label_indexes
            .get(label)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Get the encryptor for the column at a 1-based index.
    ///
    /// Returns None if the column isn't encrypted.
    pub fn sharding_encryptor(&self, index: usize) -> Result<Option<Arc<dyn ShardingEncryptor>>> {
        let logic_table = self.logic_table_name(index)?;
        let column = self.result_set_meta.column_name(index)?;

        Ok(self
            .encryptor_engine
            .get_sharding_encryptor(&logic_table, &column))
    }

    /// Resolve the logic table owning the column, falling back to the physical
    /// table name.
    fn logic_table_name(&self, index: usize) -> Result<String> {
        let actual_table = self.result_set_meta.table_name(index)?;
        match &self.sharding_rule {
            Some(rule) => Ok(rule.logic_table_name(&actual_table).to_string()),
            None => Ok(actual_table),
        }
    }
}

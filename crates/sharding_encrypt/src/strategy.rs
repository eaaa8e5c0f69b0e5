use std::sync::Arc;

use crate::config::EncryptTableConfig;
use crate::encryptor::{self, ShardingEncryptor};
use crate::errors::Result;

/// Encryption applied to a set of columns in one logic table.
#[derive(Debug, Clone)]
pub struct ShardingEncryptorStrategy {
    columns: Vec<String>,
    assisted_query_columns: Vec<String>,
    encryptor: Arc<dyn ShardingEncryptor>,
}

impl ShardingEncryptorStrategy {
    pub fn new<S>(columns: S, encryptor: Arc<dyn ShardingEncryptor>) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
    {
        ShardingEncryptorStrategy {
            columns: columns.into_iter().map(Into::into).collect(),
            assisted_query_columns: Vec::new(),
            encryptor,
        }
    }

    pub fn with_assisted_query_columns<S>(mut self, columns: S) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
    {
        self.assisted_query_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn try_from_config(config: &EncryptTableConfig) -> Result<Self> {
        let encryptor = encryptor::create_encryptor(&config.encryptor_type, &config.props)?;
        Ok(Self::new(config.columns.iter().map(String::as_str), encryptor)
            .with_assisted_query_columns(config.assisted_query_columns.iter().map(String::as_str)))
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn assisted_query_columns(&self) -> &[String] {
        &self.assisted_query_columns
    }

    pub fn encryptor(&self) -> &Arc<dyn ShardingEncryptor> {
        &self.encryptor
    }

    pub fn contains_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c.eq_ignore_ascii_case(column))
    }

    /// Get the assisted query column paired with an encrypted column.
    pub fn assisted_query_column(&self, column: &str) -> Option<&str> {
        let idx = self
            .columns
            .iter()
            .position(|c| c.eq_ignore_ascii_case(column))?;
        self.assisted_query_columns.get(idx).map(String::as_str)
    }
}

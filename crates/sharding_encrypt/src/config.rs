//! Serializable encryption configuration.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncryptRuleConfig {
    /// Logic table name -> encryption for that table.
    pub tables: BTreeMap<String, EncryptTableConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptTableConfig {
    pub columns: Vec<String>,
    /// Columns holding a queryable digest of the matching entry in `columns`.
    ///
    /// Either empty or the same length as `columns`.
    #[serde(default)]
    pub assisted_query_columns: Vec<String>,
    /// Encryptor type, e.g. "MD5".
    #[serde(rename = "type")]
    pub encryptor_type: String,
    #[serde(default)]
    pub props: BTreeMap<String, String>,
}

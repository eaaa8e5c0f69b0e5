//! Serializable sharding rule configuration.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShardingRuleConfig {
    /// Sharded tables.
    pub tables: Vec<TableRuleConfig>,
    /// Comma separated logic table names, one string per group.
    pub binding_table_groups: Vec<String>,
    pub broadcast_tables: Vec<String>,
    pub default_data_source_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRuleConfig {
    pub logic_table: String,
    /// Inline expression for the physical tables, e.g.
    /// `ds_${0..1}.t_order_${0..1}`.
    ///
    /// When omitted the logic table is expected in every data source.
    #[serde(default)]
    pub actual_data_nodes: Option<String>,
}

impl TableRuleConfig {
    pub fn new(logic_table: impl Into<String>, actual_data_nodes: Option<&str>) -> Self {
        TableRuleConfig {
            logic_table: logic_table.into(),
            actual_data_nodes: actual_data_nodes.map(|s| s.to_string()),
        }
    }
}

use std::fmt::Debug;

use crate::binding::BindingTableRule;
use crate::data_source::ShardingDataSourceNames;
use crate::table_rule::TableRule;

/// Read-only view of the sharding configuration.
///
/// Loaded once and shared between all connections, implementations must be
/// safe for concurrent reads without locking.
pub trait ShardingRuleOracle: Debug + Sync + Send {
    /// Returns true if the logic table has a table rule.
    fn contains(&self, logic_table: &str) -> bool;

    fn is_broadcast_table(&self, logic_table: &str) -> bool;

    /// Find the binding group the logic table participates in.
    fn find_binding_table_rule(&self, logic_table: &str) -> Option<&BindingTableRule>;

    fn sharding_data_source_names(&self) -> &ShardingDataSourceNames;

    /// Find the table rule owning a physical table.
    ///
    /// Returns None for physical tables the rule doesn't know about, callers
    /// should then treat the physical name as the logic name.
    fn find_table_rule_by_actual_table(&self, actual_table: &str) -> Option<&TableRule>;

    /// Resolve a physical table name to its logic table name.
    fn logic_table_name<'a>(&'a self, actual_table: &'a str) -> &'a str {
        match self.find_table_rule_by_actual_table(actual_table) {
            Some(rule) => rule.logic_table(),
            None => actual_table,
        }
    }
}

//! Sharding rule configuration and the read-only oracle consulted while
//! building statement models and resolving result metadata.
pub mod binding;
pub mod config;
pub mod data_node;
pub mod data_source;
pub mod errors;
pub mod inline;
pub mod oracle;
pub mod rule;
pub mod table_rule;

pub use binding::BindingTableRule;
pub use data_node::DataNode;
pub use data_source::ShardingDataSourceNames;
pub use oracle::ShardingRuleOracle;
pub use rule::ShardingRule;
pub use table_rule::TableRule;

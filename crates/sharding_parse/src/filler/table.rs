use std::sync::Arc;

use sharding_rule::ShardingRuleOracle;
use tracing::trace;

use super::{SegmentFiller, ShardingRuleAware};
use crate::errors::{ParseError, Result};
use crate::metadata::ShardingTableMetaData;
use crate::segment::TableSegment;
use crate::statement::SqlStatement;
use crate::table::Table;

/// Registers table references that routing needs to know about.
#[derive(Debug, Default)]
pub struct TableFiller {
    sharding_rule: Option<Arc<dyn ShardingRuleOracle>>,
}

impl TableFiller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sharding_rule(rule: Arc<dyn ShardingRuleOracle>) -> Self {
        TableFiller {
            sharding_rule: Some(rule),
        }
    }

    /// Decide if a table should be registered into the statement.
    ///
    /// Tables known to the rule are always registered, as is everything when
    /// the default data source is one of the configured data sources. Any
    /// other table is only registered as the first table of a non-select
    /// statement.
    fn should_fill(rule: &dyn ShardingRuleOracle, name: &str, statement: &SqlStatement) -> bool {
        if rule.contains(name)
            || rule.is_broadcast_table(name)
            || rule.find_binding_table_rule(name).is_some()
            || rule
                .sharding_data_source_names()
                .is_default_data_source_configured()
        {
            return true;
        }

        !statement.is_select() && statement.tables().is_empty()
    }
}

impl SegmentFiller for TableFiller {
    type Segment = TableSegment;

    fn fill(
        &self,
        segment: &TableSegment,
        statement: &mut SqlStatement,
        _table_meta: &ShardingTableMetaData,
    ) -> Result<()> {
        let rule = self
            .sharding_rule
            .as_deref()
            .ok_or(ParseError::MissingShardingRule("table"))?;

        if !Self::should_fill(rule, &segment.name, statement) {
            trace!(table = %segment.name, kind = ?statement.kind(), "skipping table");
            return Ok(());
        }

        trace!(table = %segment.name, alias = ?segment.alias, "registering table");
        statement.add_table(
            Table::new(segment.name.clone(), segment.alias.clone()),
            segment.token.clone(),
        );

        Ok(())
    }

    fn as_rule_aware(&mut self) -> Option<&mut dyn ShardingRuleAware> {
        Some(self)
    }
}

impl ShardingRuleAware for TableFiller {
    fn set_sharding_rule(&mut self, rule: Arc<dyn ShardingRuleOracle>) {
        self.sharding_rule = Some(rule);
    }
}

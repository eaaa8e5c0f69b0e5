use std::sync::Arc;

use sharding_rule::ShardingRuleOracle;
use tracing::trace;

use super::registry::SegmentFillerRegistry;
use crate::errors::Result;
use crate::metadata::ShardingTableMetaData;
use crate::segment::SqlSegment;
use crate::statement::{SqlStatement, SqlStatementKind};

/// Drives a single fill pass over the segments of one parsed statement.
///
/// Shared across connections. Each call to `fill` owns its statement.
#[derive(Debug)]
pub struct SqlSegmentsFillerEngine {
    registry: SegmentFillerRegistry,
    table_meta: Arc<ShardingTableMetaData>,
}

impl SqlSegmentsFillerEngine {
    /// Create an engine using the built-in fillers.
    pub fn new(rule: Arc<dyn ShardingRuleOracle>, table_meta: Arc<ShardingTableMetaData>) -> Self {
        let mut registry = SegmentFillerRegistry::with_default_fillers();
        registry.inject_sharding_rule(rule);
        Self::with_registry(registry, table_meta)
    }

    /// Create an engine with a registry that already has its rule injected.
    pub fn with_registry(
        registry: SegmentFillerRegistry,
        table_meta: Arc<ShardingTableMetaData>,
    ) -> Self {
        SqlSegmentsFillerEngine {
            registry,
            table_meta,
        }
    }

    pub fn registry(&self) -> &SegmentFillerRegistry {
        &self.registry
    }

    /// Fill a new statement from segments in the order they were discovered
    /// in the parse tree.
    ///
    /// Segments without a registered filler are skipped. If any filler
    /// errors, the partially filled statement is dropped.
    pub fn fill<'a, I>(&self, segments: I, kind: SqlStatementKind) -> Result<SqlStatement>
    where
        I: IntoIterator<Item = &'a SqlSegment>,
    {
        let mut statement = SqlStatement::new(kind);

        for segment in segments {
            let Some(filler) = self.registry.get(segment.kind()) else {
                trace!(kind = %segment.kind(), "no filler registered for segment");
                continue;
            };
            filler.fill_segment(segment, &mut statement, &self.table_meta)?;
        }

        Ok(statement)
    }
}

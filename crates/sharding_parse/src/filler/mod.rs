//! Fillers fold parsed segments into a `SqlStatement`.
//!
//! Fillers are implemented against a concrete segment type through
//! `SegmentFiller`. The registry stores them type erased as
//! `DynSegmentFiller`, keyed by the segment kind they consume.
pub mod engine;
pub mod registry;
pub mod table;

use std::fmt::Debug;
use std::sync::Arc;

use sharding_rule::ShardingRuleOracle;

use crate::errors::Result;
use crate::metadata::ShardingTableMetaData;
use crate::segment::{SegmentKind, SegmentVariant, SqlSegment};
use crate::statement::SqlStatement;

pub use engine::SqlSegmentsFillerEngine;
pub use registry::SegmentFillerRegistry;
pub use table::TableFiller;

pub trait SegmentFiller: Debug + Sync + Send {
    type Segment: SegmentVariant;

    /// Fold the segment into the statement.
    ///
    /// Must not mutate anything other than `statement`.
    fn fill(
        &self,
        segment: &Self::Segment,
        statement: &mut SqlStatement,
        table_meta: &ShardingTableMetaData,
    ) -> Result<()>;

    /// Fillers that need the sharding rule return themselves here.
    fn as_rule_aware(&mut self) -> Option<&mut dyn ShardingRuleAware> {
        None
    }
}

/// Fillers that consult the sharding rule.
///
/// The rule is set once, after configuration is loaded and before any
/// filling.
pub trait ShardingRuleAware {
    fn set_sharding_rule(&mut self, rule: Arc<dyn ShardingRuleOracle>);
}

/// Object safe form of `SegmentFiller`.
pub trait DynSegmentFiller: Debug + Sync + Send {
    fn segment_kind(&self) -> SegmentKind;

    fn fill_segment(
        &self,
        segment: &SqlSegment,
        statement: &mut SqlStatement,
        table_meta: &ShardingTableMetaData,
    ) -> Result<()>;

    fn rule_aware_mut(&mut self) -> Option<&mut dyn ShardingRuleAware>;
}

impl<F> DynSegmentFiller for F
where
    F: SegmentFiller,
{
    fn segment_kind(&self) -> SegmentKind {
        F::Segment::KIND
    }

    fn fill_segment(
        &self,
        segment: &SqlSegment,
        statement: &mut SqlStatement,
        table_meta: &ShardingTableMetaData,
    ) -> Result<()> {
        // Segments of other kinds belong to other fillers.
        let Some(typed) = F::Segment::from_segment(segment) else {
            return Ok(());
        };
        self.fill(typed, statement, table_meta)
    }

    fn rule_aware_mut(&mut self) -> Option<&mut dyn ShardingRuleAware> {
        self.as_rule_aware()
    }
}

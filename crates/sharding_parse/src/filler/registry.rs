use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use sharding_rule::ShardingRuleOracle;
use tracing::debug;

use super::table::TableFiller;
use super::{DynSegmentFiller, SegmentFiller};
use crate::errors::{ParseError, Result};
use crate::segment::{SegmentKind, SegmentVariant};

/// Dispatch table from segment kind to the filler for that kind.
#[derive(Debug, Default)]
pub struct SegmentFillerRegistry {
    fillers: HashMap<SegmentKind, Box<dyn DynSegmentFiller>>,
}

impl SegmentFillerRegistry {
    /// A registry without any fillers.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A registry containing the built-in fillers.
    pub fn with_default_fillers() -> Self {
        let mut fillers: HashMap<SegmentKind, Box<dyn DynSegmentFiller>> = HashMap::new();
        fillers.insert(SegmentKind::Table, Box::new(TableFiller::new()));

        SegmentFillerRegistry { fillers }
    }

    /// Register a filler for the segment kind it consumes.
    ///
    /// Errors if a filler is already registered for that kind.
    pub fn register<F>(&mut self, filler: F) -> Result<()>
    where
        F: SegmentFiller + 'static,
    {
        let kind = F::Segment::KIND;
        match self.fillers.entry(kind) {
            Entry::Occupied(_) => Err(ParseError::DuplicateFiller(kind)),
            Entry::Vacant(ent) => {
                ent.insert(Box::new(filler));
                Ok(())
            }
        }
    }

    /// Hand the sharding rule to every rule aware filler.
    pub fn inject_sharding_rule(&mut self, rule: Arc<dyn ShardingRuleOracle>) {
        for (kind, filler) in self.fillers.iter_mut() {
            if let Some(aware) = filler.rule_aware_mut() {
                debug!(%kind, "injecting sharding rule into filler");
                aware.set_sharding_rule(rule.clone());
            }
        }
    }

    pub fn get(&self, kind: SegmentKind) -> Option<&dyn DynSegmentFiller> {
        self.fillers.get(&kind).map(|filler| filler.as_ref())
    }

    pub fn len(&self) -> usize {
        self.fillers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fillers.is_empty()
    }
}

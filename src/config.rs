//! Configuration for comparisons and reports.
//!
//! Everything defaults to the strictest comparison and the default report
//! layout, so an empty JSON object is a valid configuration:
//!
//! ```json
//! {
//!   "comparison": {
//!     "node": { "ignore_id": true, "ignored_properties": ["updated_at"] },
//!     "relationship": { "ignore_type": true }
//!   },
//!   "report": { "collection_mode": "abbreviate", "item_mode": "full" }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::compare::{CompositeStrategy, NodeComparisonStrategy, RelationshipComparisonStrategy};
use crate::repr::Mode;
use crate::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub comparison: ComparisonConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonConfig {
    pub node: NodeComparisonConfig,
    pub relationship: RelationshipComparisonConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeComparisonConfig {
    pub ignore_id: bool,
    pub ignored_properties: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelationshipComparisonConfig {
    pub ignore_id: bool,
    pub ignore_type: bool,
    pub ignored_properties: Vec<String>,
}

/// Rendering modes of a grouped report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Mode for the actual collection and the failing subset in the header.
    pub collection_mode: Mode,
    /// Mode for each numbered item.
    pub item_mode: Mode,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            collection_mode: Mode::Abbreviate,
            item_mode: Mode::Full,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn node_strategy(&self) -> NodeComparisonStrategy {
        let cfg = &self.comparison.node;
        let strategy = NodeComparisonStrategy::new().ignoring_properties(cfg.ignored_properties.iter().cloned());
        if cfg.ignore_id { strategy.ignoring_id() } else { strategy }
    }

    pub fn relationship_strategy(&self) -> RelationshipComparisonStrategy {
        let cfg = &self.comparison.relationship;
        let mut strategy = RelationshipComparisonStrategy::new()
            .ignoring_properties(cfg.ignored_properties.iter().cloned());
        if cfg.ignore_id {
            strategy = strategy.ignoring_id();
        }
        if cfg.ignore_type {
            strategy = strategy.ignoring_type();
        }
        strategy
    }

    pub fn composite_strategy(&self) -> CompositeStrategy {
        CompositeStrategy::new(self.node_strategy(), self.relationship_strategy())
    }
}

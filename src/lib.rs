//! # neo4j-testkit: Assertion Core for Neo4j Graph Data
//!
//! Canonical values, graph entities, comparison strategies and grouped
//! failure reports for writing assertions over Neo4j query results.
//!
//! ## Design Principles
//!
//! 1. **One canonical form**: every native driver value converts to a `DbValue`
//!    tagged with exactly one `ValueType`, never failing
//! 2. **Immutable entities**: `DbNode` / `DbRelationship` are built once and compared
//!    through pluggable `Strategy` values
//! 3. **Reports, not panics**: a failed check produces an `ErrorMessage` that
//!    groups every offending entity, ordered by id
//!
//! ## Quick Start
//!
//! ```rust
//! use neo4j_testkit::{Checks, DbNode};
//!
//! let nodes = vec![
//!     DbNode::builder().id(1).labels(["Person", "Admin"]).build(),
//!     DbNode::builder().id(2).label("Person").build(),
//! ];
//!
//! let report = Checks::default().nodes_have_labels(&nodes, ["Person", "Admin"])?;
//! let message = report.expect("node 2 lacks a label");
//! assert!(message.text().contains("1) NODE{id=2"));
//! # Ok::<(), neo4j_testkit::Error>(())
//! ```
//!
//! ## Layers
//!
//! | Module | Role |
//! |--------|------|
//! | `model` | Native values and records as a driver hands them over |
//! | `types` | `ValueType` catalog, `DbValue`, classification |
//! | `entity` | `DbNode`, `DbRelationship`, `DbPath`, `Missing` |
//! | `compare` | Equality strategies for entities and values |
//! | `repr` | Abbreviated and full text renderings |
//! | `report` | Grouped error messages |
//! | `check` | Ready-made bulk checks |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod types;
pub mod entity;
pub mod compare;
pub mod repr;
pub mod report;
pub mod check;
pub mod config;

// ============================================================================
// Re-exports: Model (native values)
// ============================================================================

pub use model::{
    Node, Relationship, Path, Value, PropertyMap,
    NodeId, RelId, IsoDuration, OffsetTime,
};

// ============================================================================
// Re-exports: Canonical values and entities
// ============================================================================

pub use types::{classify, convert, DbValue, ValueType};
pub use entity::{
    DbEntity, DbNode, DbPath, DbProperties, DbRelationship,
    EntityId, EntityKind, Identified, Missing,
};

// ============================================================================
// Re-exports: Comparison and reporting
// ============================================================================

pub use compare::{
    CompositeStrategy, NodeComparisonStrategy, RelationshipComparisonStrategy,
    StandardEquality, Strategy,
};
pub use repr::{Mode, Represent, Representation};
pub use report::{Detail, ErrorMessage, GroupingErrorFactory, Header, Noun};
pub use check::Checks;
pub use config::Config;

// ============================================================================
// Error Types
// ============================================================================

/// Misuse of the API. Failed assertions are never errors; they come back
/// as [`ErrorMessage`]s.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown property '{key}' on {entity}")]
    UnknownProperty { key: String, entity: String },

    #[error("Type error: expected {expected}, got {got}")]
    TypeError { expected: String, got: String },

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

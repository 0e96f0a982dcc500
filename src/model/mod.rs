//! # Native Record Model
//!
//! The values a driver adapter materializes out of query results. This is
//! the input side of the classifier in [`crate::types`]; nothing here is
//! normalized yet.
//!
//! Design rule: NO driver types, NO session handles here.
//! This module is pure data: no I/O, no state.

pub mod record;
pub mod value;
pub mod property_map;

pub use record::{Node, NodeId, Path, Relationship, RelId};
pub use value::{IsoDuration, OffsetTime, Value};
pub use property_map::{PropertyMap, map_of};

//! # Canonical Value Model
//!
//! Classifies native values into the closed [`ValueType`] catalog and
//! normalizes them into [`DbValue`]s, the atomic unit of comparison and
//! display.

pub mod value_type;
pub mod db_value;
pub mod convert;

pub use value_type::ValueType;
pub use db_value::{Content, DbDuration, DbPoint, DbValue};
pub use convert::{classify, convert, element_types, list_violation};

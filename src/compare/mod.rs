//! # Comparison Strategies
//!
//! Pluggable equivalence rules between two values of the same type. The
//! entity strategies relax identifier, type and named properties; the
//! composite strategy dispatches on the runtime kind of two [`DbValue`]s.
//!
//! Strategies never fail. Where no structural rule applies they fall back
//! to plain `PartialEq`.

pub mod node;
pub mod relationship;
pub mod composite;
pub mod collections;

pub use node::NodeComparisonStrategy;
pub use relationship::RelationshipComparisonStrategy;
pub use composite::CompositeStrategy;
pub use collections::{find_missing, find_unexpected, same_elements};

/// An equivalence rule over `T`.
pub trait Strategy<T: ?Sized> {
    fn are_equal(&self, a: &T, b: &T) -> bool;
}

/// Plain `PartialEq`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardEquality;

impl<T: PartialEq + ?Sized> Strategy<T> for StandardEquality {
    fn are_equal(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

impl<T: ?Sized, S: Strategy<T> + ?Sized> Strategy<T> for &S {
    fn are_equal(&self, a: &T, b: &T) -> bool {
        (**self).are_equal(a, b)
    }
}

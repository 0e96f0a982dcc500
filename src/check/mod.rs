//! # Bulk Checks
//!
//! Ready-made checks over a whole collection of entities. Each one finds
//! the entities that fail, and when there are any, hands them with their
//! explanation to the [`GroupingErrorFactory`](crate::report::GroupingErrorFactory).
//!
//! Every check returns `Ok(None)` when all entities pass (an empty
//! collection passes vacuously) and `Ok(Some(message))` otherwise. `Err`
//! is reserved for misuse, such as an empty list of expectations.

mod labels;
mod properties;
mod types;

use crate::config::ReportConfig;
use crate::entity::{DbEntity, Identified};
use crate::report::{Detail, ErrorMessage, GroupingErrorFactory, Header};
use crate::repr::Represent;
use crate::{Error, Result};

/// Shown in place of a value when the property does not exist.
pub const ABSENT: &str = "<absent>";

/// Entry point for the bulk checks, carrying the report layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Checks {
    report: ReportConfig,
}

impl Checks {
    pub fn new(report: ReportConfig) -> Self {
        Self { report }
    }

    pub fn report_config(&self) -> &ReportConfig {
        &self.report
    }

    fn report<E, T, F, I>(
        &self,
        actual: &[E],
        failing: &[T],
        detail_mapper: F,
        header: &Header,
        args: &[String],
    ) -> Result<Option<ErrorMessage>>
    where
        E: DbEntity + Identified + Represent,
        T: Identified + Represent,
        F: Fn(&T) -> I,
        I: IntoIterator<Item = Detail>,
    {
        if failing.is_empty() {
            return Ok(None);
        }
        let factory = GroupingErrorFactory::new(actual, E::KIND)?.with_config(&self.report);
        factory.build(failing, detail_mapper, header, args).map(Some)
    }
}

/// Collect an expectation list, rejecting an empty one.
fn non_empty(items: impl IntoIterator<Item = impl Into<String>>, what: &str) -> Result<Vec<String>> {
    let items: Vec<String> = items.into_iter().map(Into::into).collect();
    if items.is_empty() {
        return Err(Error::InvalidArgument(format!("expected {what} must not be empty")));
    }
    Ok(items)
}

fn non_blank(value: &str, what: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::InvalidArgument(format!("{what} must not be empty")));
    }
    Ok(())
}

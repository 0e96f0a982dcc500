//! # Grouped Failure Reports
//!
//! Turns "these entities failed a check" into one deterministic message:
//! a header describing the expectation, then one numbered block per
//! failing entity explaining why it failed.
//!
//! ```text
//! Expecting nodes:
//!   [NODE{id=1}, NODE{id=3}, NODE{id=5}]
//! to have labels:
//!   [Person]
//! 1) NODE{id=3, labels=[], properties={}}
//!   - missing labels: [Person]
//!
//! 2) NODE{id=5, labels=[Robot], properties={}}
//!   - missing labels: [Person]
//! ```
//!
//! The message is structured ([`ErrorMessage`], [`Header`], [`Detail`])
//! and only becomes text through [`ErrorMessage::text`].

pub mod detail;
pub mod header;
pub mod message;
pub mod noun;
pub mod grouping;

pub use detail::{Detail, Visibility};
pub use header::{Header, Segment};
pub use message::{ErrorMessage, MessageItem};
pub use noun::Noun;
pub use grouping::GroupingErrorFactory;

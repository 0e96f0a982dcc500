//! Label checks on nodes.

use crate::entity::{DbNode, Missing};
use crate::report::{Detail, ErrorMessage, Header};
use crate::repr::{Mode, Represent};
use crate::Result;
use super::{non_empty, Checks};

impl Checks {
    /// Every node carries all of `labels`.
    pub fn nodes_have_labels(
        &self,
        nodes: &[DbNode],
        labels: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Option<ErrorMessage>> {
        let expected = non_empty(labels, "labels")?;
        let missing = Missing::collect(nodes, &expected, |node, label| node.has_label(label));

        let header = Header::new()
            .text("Expecting ")
            .noun()
            .text(":\n  ")
            .actual()
            .text("\nto have all the following labels:\n  ")
            .arg(0)
            .text("\nbut some labels were missing on:\n  ")
            .failing();

        self.report(
            nodes,
            &missing,
            |m| [Detail::included("missing labels", m.items().represent(Mode::Abbreviate))],
            &header,
            &[expected.represent(Mode::Abbreviate)],
        )
    }
}

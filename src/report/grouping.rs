//! The grouping error factory.

use hashbrown::HashSet;
use tracing::debug;

use crate::config::ReportConfig;
use crate::entity::Identified;
use crate::repr::{Mode, Represent, Representation};
use crate::{Error, Result};
use super::{Detail, ErrorMessage, Header, MessageItem, Noun, Segment};

/// Builds one [`ErrorMessage`] covering every item that failed a check.
///
/// The actual collection is fixed at construction and must not be empty.
/// Both it and the failing subset are ordered by ascending id, items
/// without an id first, ties kept in input order. The same sets in any
/// input order therefore give the same text.
#[derive(Debug, Clone)]
pub struct GroupingErrorFactory<'a, E> {
    actual: Vec<&'a E>,
    noun: Noun,
    collection: Representation,
    item: Representation,
}

impl<'a, E> GroupingErrorFactory<'a, E>
where
    E: Identified + Represent,
{
    pub fn new(actual: &'a [E], noun: impl Into<Noun>) -> Result<Self> {
        if actual.is_empty() {
            return Err(Error::InvalidArgument(
                "the actual collection of a grouped report must not be empty".into(),
            ));
        }
        Ok(Self {
            actual: sorted(actual),
            noun: noun.into(),
            collection: Representation::abbreviated(),
            item: Representation::full(),
        })
    }

    /// Modes for the `%1`/`%2` collections and for the numbered items.
    #[must_use]
    pub fn with_modes(mut self, collection: Mode, item: Mode) -> Self {
        self.collection = Representation::new(collection);
        self.item = Representation::new(item);
        self
    }

    #[must_use]
    pub fn with_config(self, config: &ReportConfig) -> Self {
        self.with_modes(config.collection_mode, config.item_mode)
    }

    /// The actual collection in report order.
    pub fn actual(&self) -> &[&'a E] {
        &self.actual
    }

    pub fn noun(&self) -> &Noun {
        &self.noun
    }

    /// Render the report for `not_satisfying`.
    ///
    /// `detail_mapper` explains each failing item. An empty
    /// `not_satisfying` gives a header-only report. Fails only when the
    /// header references an argument missing from `args`.
    pub fn build<T, F, I>(
        &self,
        not_satisfying: &[T],
        detail_mapper: F,
        header: &Header,
        args: &[String],
    ) -> Result<ErrorMessage>
    where
        T: Identified + Represent,
        F: Fn(&T) -> I,
        I: IntoIterator<Item = Detail>,
    {
        debug!(
            actual = self.actual.len(),
            failing = not_satisfying.len(),
            noun = self.noun.for_count(2),
            "building grouped error message"
        );

        let failing = sorted(not_satisfying);
        let items: Vec<MessageItem> = failing
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let details = detail_mapper(*item).into_iter().collect();
                MessageItem::new(i + 1, self.item.render(*item), details)
            })
            .collect();

        let header = self.render_header(header, &failing, &items, args)?;
        Ok(ErrorMessage::new(header, items))
    }

    fn render_header<T: Represent>(
        &self,
        header: &Header,
        failing: &[&T],
        items: &[MessageItem],
        args: &[String],
    ) -> Result<String> {
        let mut out = String::new();
        for segment in header.segments() {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Actual => out.push_str(&self.collection.render(&self.actual)),
                Segment::Failing => out.push_str(&self.collection.render(failing)),
                Segment::Noun => out.push_str(self.noun.for_count(self.actual.len())),
                Segment::FailingNoun => out.push_str(self.noun.for_count(failing.len())),
                Segment::Arg(index) => {
                    let arg = args.get(*index).ok_or_else(|| {
                        Error::InvalidArgument(format!(
                            "header references argument {index} but only {} were given",
                            args.len()
                        ))
                    })?;
                    out.push_str(arg);
                }
                Segment::Details(title) => out.push_str(&detail_values(items, title)),
            }
        }
        Ok(out)
    }
}

fn sorted<T: Identified>(items: &[T]) -> Vec<&T> {
    let mut refs: Vec<&T> = items.iter().collect();
    // Stable, and `None < Some(_)`: absent ids first, ties in input order.
    refs.sort_by_key(|item| item.sort_id());
    refs
}

fn detail_values(items: &[MessageItem], title: &str) -> String {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut values: Vec<&str> = Vec::new();
    for detail in items.iter().flat_map(MessageItem::details) {
        if detail.title() == title && seen.insert(detail.value()) {
            values.push(detail.value());
        }
    }
    values.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{DbNode, EntityKind};
    use pretty_assertions::assert_eq;

    fn nodes(ids: &[u64]) -> Vec<DbNode> {
        ids.iter().map(|id| DbNode::builder().id(*id).label("A").build()).collect()
    }

    fn labels_header() -> Header {
        Header::new()
            .text("Expecting ")
            .noun()
            .text(":\n  ")
            .actual()
            .text("\nto have labels:\n  ")
            .arg(0)
            .text("\nbut some ")
            .failing_noun()
            .text(" did not:")
    }

    #[test]
    fn test_empty_actual_is_rejected() {
        let err = GroupingErrorFactory::new(&Vec::<DbNode>::new(), EntityKind::Node).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_items_are_ordered_by_id() {
        let actual = nodes(&[5, 1, 3]);
        let failing = nodes(&[5, 3]);
        let factory = GroupingErrorFactory::new(&actual, EntityKind::Node)
            .unwrap()
            .with_modes(Mode::Abbreviate, Mode::Abbreviate);

        let message = factory
            .build(&failing, |_| [Detail::included("missing labels", "[B]")], &labels_header(), &["[B]".into()])
            .unwrap();

        assert_eq!(
            message.text(),
            "Expecting nodes:\n  [NODE{id=1}, NODE{id=3}, NODE{id=5}]\nto have labels:\n  [B]\nbut some nodes did not:\n\
             1) NODE{id=3}\n  - missing labels: [B]\n\n\
             2) NODE{id=5}\n  - missing labels: [B]"
        );
    }

    #[test]
    fn test_absent_ids_sort_first_in_input_order() {
        let anonymous_b = DbNode::builder().label("B").build();
        let anonymous_c = DbNode::builder().label("C").build();
        let actual = vec![nodes(&[2])[0].clone(), anonymous_b.clone(), anonymous_c.clone()];
        let factory = GroupingErrorFactory::new(&actual, EntityKind::Node).unwrap();

        let order: Vec<Option<u64>> = factory.actual().iter().map(|n| n.id()).collect();
        assert_eq!(order, vec![None, None, Some(2)]);
        assert!(factory.actual()[0].has_label("B"));
        assert!(factory.actual()[1].has_label("C"));
    }

    #[test]
    fn test_singular_noun() {
        let actual = nodes(&[1]);
        let factory = GroupingErrorFactory::new(&actual, EntityKind::Node).unwrap();
        let message = factory
            .build(&actual, |_| Vec::new(), &Header::from_template("Expecting %3 %1"), &[])
            .unwrap();
        assert_eq!(message.header(), "Expecting node [NODE{id=1}]");
    }

    #[test]
    fn test_excluded_details_only_reach_the_header() {
        let actual = nodes(&[1, 2]);
        let factory = GroupingErrorFactory::new(&actual, EntityKind::Node)
            .unwrap()
            .with_modes(Mode::Abbreviate, Mode::Abbreviate);
        let header = Header::new().text("found types: ").details("type");

        let message = factory
            .build(
                &actual,
                |n| {
                    let kind = if n.id() == Some(1) { "STRING" } else { "FLOAT" };
                    vec![Detail::excluded("type", kind), Detail::included("id", format!("{:?}", n.id()))]
                },
                &header,
                &[],
            )
            .unwrap();

        assert_eq!(
            message.text(),
            "found types: STRING, FLOAT\n1) NODE{id=1}\n  - id: Some(1)\n\n2) NODE{id=2}\n  - id: Some(2)"
        );
    }

    #[test]
    fn test_header_details_are_distinct_in_report_order() {
        let actual: Vec<DbNode> = (0..2_000).map(|id| DbNode::builder().id(id).build()).collect();
        let factory = GroupingErrorFactory::new(&actual, EntityKind::Node).unwrap();
        let header = Header::new().text("kinds: ").details("kind");

        let message = factory
            .build(
                &actual,
                |n| {
                    let kind = match n.id().unwrap_or(0) % 3 { 0 => "C", 1 => "A", _ => "B" };
                    [Detail::excluded("kind", kind)]
                },
                &header,
                &[],
            )
            .unwrap();

        assert_eq!(message.header(), "kinds: C, A, B");
        assert_eq!(message.items().len(), 2_000);
    }

    #[test]
    fn test_vacuous_report() {
        let actual = nodes(&[1]);
        let factory = GroupingErrorFactory::new(&actual, EntityKind::Node).unwrap();
        let message = factory
            .build(&Vec::<DbNode>::new(), |_| Vec::new(), &Header::from_template("Expecting %2"), &[])
            .unwrap();
        assert_eq!(message.text(), "Expecting []");
        assert!(message.items().is_empty());
    }

    #[test]
    fn test_duplicates_are_reported_twice() {
        let actual = nodes(&[4]);
        let failing = nodes(&[4, 4]);
        let factory = GroupingErrorFactory::new(&actual, EntityKind::Node).unwrap();
        let message = factory.build(&failing, |_| Vec::new(), &Header::new(), &[]).unwrap();
        assert_eq!(message.items().len(), 2);
        assert_eq!(message.items()[1].index(), 2);
    }

    #[test]
    fn test_missing_argument_is_usage_error() {
        let actual = nodes(&[1]);
        let factory = GroupingErrorFactory::new(&actual, EntityKind::Node).unwrap();
        let err = factory
            .build(&actual, |_| Vec::new(), &Header::from_template("%5"), &["only one".into()])
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid argument: header references argument 1 but only 1 were given");
    }
}

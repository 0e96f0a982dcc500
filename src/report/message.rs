//! The structured failure message and its text form.

use std::fmt;

use super::Detail;

/// One numbered block of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageItem {
    index: usize,
    representation: String,
    details: Vec<Detail>,
}

impl MessageItem {
    pub(crate) fn new(index: usize, representation: String, details: Vec<Detail>) -> Self {
        Self { index, representation, details }
    }

    /// 1-based position in the report.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn representation(&self) -> &str {
        &self.representation
    }

    /// Every detail, excluded ones included.
    pub fn details(&self) -> &[Detail] {
        &self.details
    }

    pub fn included_details(&self) -> impl Iterator<Item = &Detail> {
        self.details.iter().filter(|d| d.is_included())
    }

    pub fn render(&self) -> String {
        let mut lines = vec![format!("{}) {}", self.index, self.representation)];
        lines.extend(self.included_details().map(Detail::line));
        lines.join("\n")
    }
}

/// Header plus numbered items. What the assertion layer raises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMessage {
    header: String,
    items: Vec<MessageItem>,
}

impl ErrorMessage {
    pub(crate) fn new(header: String, items: Vec<MessageItem>) -> Self {
        Self { header, items }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn items(&self) -> &[MessageItem] {
        &self.items
    }

    /// Header, then the blocks separated by blank lines.
    pub fn text(&self) -> String {
        if self.items.is_empty() {
            return self.header.clone();
        }
        let blocks: Vec<String> = self.items.iter().map(MessageItem::render).collect();
        format!("{}\n{}", self.header, blocks.join("\n\n"))
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_layout() {
        let message = ErrorMessage::new(
            "Expecting nodes:".into(),
            vec![
                MessageItem::new(1, "NODE{id=1}".into(), vec![
                    Detail::included("missing", "[A]"),
                    Detail::excluded("hidden", "x"),
                ]),
                MessageItem::new(2, "NODE{id=2}".into(), Vec::new()),
            ],
        );
        assert_eq!(
            message.text(),
            "Expecting nodes:\n1) NODE{id=1}\n  - missing: [A]\n\n2) NODE{id=2}"
        );
        assert_eq!(message.to_string(), message.text());
        assert_eq!(message.items()[0].details().len(), 2);
    }

    #[test]
    fn test_vacuous_message_is_header_only() {
        let message = ErrorMessage::new("Expecting nothing".into(), Vec::new());
        assert_eq!(message.text(), "Expecting nothing");
    }
}

//! Structured report headers.

/// One piece of a header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    /// The whole actual collection.
    Actual,
    /// The failing subset.
    Failing,
    /// Domain noun, pluralized by the size of the actual collection.
    Noun,
    /// Domain noun, pluralized by the number of failing items.
    FailingNoun,
    /// Caller argument, 0-based.
    Arg(usize),
    /// Distinct values of every detail with this title, in report order.
    Details(String),
}

/// A header as an ordered list of segments, rendered by
/// [`GroupingErrorFactory`](super::GroupingErrorFactory).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct Header {
    segments: Vec<Segment>,
}

impl Header {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        match self.segments.last_mut() {
            Some(Segment::Text(prev)) => prev.push_str(&text),
            _ => self.segments.push(Segment::Text(text)),
        }
        self
    }

    pub fn actual(self) -> Self {
        self.push(Segment::Actual)
    }

    pub fn failing(self) -> Self {
        self.push(Segment::Failing)
    }

    pub fn noun(self) -> Self {
        self.push(Segment::Noun)
    }

    pub fn failing_noun(self) -> Self {
        self.push(Segment::FailingNoun)
    }

    pub fn arg(self, index: usize) -> Self {
        self.push(Segment::Arg(index))
    }

    pub fn details(self, title: impl Into<String>) -> Self {
        self.push(Segment::Details(title.into()))
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Parse the positional form: `%1` actual, `%2` failing, `%3` noun,
    /// `%4` onwards caller arguments (`%4` is argument 0). `%%` is a
    /// literal percent sign; a `%` not followed by a digit stays as is.
    pub fn from_template(template: &str) -> Self {
        let mut header = Header::new();
        let mut chars = template.chars().peekable();
        let mut text = String::new();
        while let Some(c) = chars.next() {
            if c != '%' {
                text.push(c);
                continue;
            }
            if chars.peek() == Some(&'%') {
                chars.next();
                text.push('%');
                continue;
            }
            let mut digits = String::new();
            while let Some(d) = chars.peek().copied().filter(char::is_ascii_digit) {
                digits.push(d);
                chars.next();
            }
            let segment = match digits.parse::<usize>() {
                Ok(1) => Segment::Actual,
                Ok(2) => Segment::Failing,
                Ok(3) => Segment::Noun,
                Ok(n) if n >= 4 => Segment::Arg(n - 4),
                _ => {
                    text.push('%');
                    text.push_str(&digits);
                    continue;
                }
            };
            if !text.is_empty() {
                header = header.text(std::mem::take(&mut text));
            }
            header = header.push(segment);
        }
        if !text.is_empty() {
            header = header.text(text);
        }
        header
    }

    fn push(mut self, segment: Segment) -> Self {
        self.segments.push(segment);
        self
    }
}

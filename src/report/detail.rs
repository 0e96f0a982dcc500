//! Per-item explanation lines.

/// Whether a detail shows up in the item's numbered block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Listed as `  - <title>: <value>` under the item.
    Included,
    /// Only reachable from the header via [`Segment::Details`](super::Segment::Details).
    Excluded,
}

/// One titled, already-rendered fact about a failing item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detail {
    title: String,
    value: String,
    visibility: Visibility,
}

impl Detail {
    pub fn included(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self { title: title.into(), value: value.into(), visibility: Visibility::Included }
    }

    pub fn excluded(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self { title: title.into(), value: value.into(), visibility: Visibility::Excluded }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_included(&self) -> bool {
        self.visibility == Visibility::Included
    }

    pub(crate) fn line(&self) -> String {
        format!("  - {}: {}", self.title, self.value)
    }
}

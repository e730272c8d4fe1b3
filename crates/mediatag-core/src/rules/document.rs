use tracing::trace;

use super::rule::Rule;

/// Working state of one tag extraction.
///
/// Holds the progressively blanked working text, the raw snapshot taken
/// when the document was created, and every tag emitted so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub(crate) working: String,
    raw: String,
    tags: Vec<String>,
}

impl Document {
    /// Creates a document whose working text and raw snapshot are `text`.
    pub fn new(text: impl Into<String>) -> Self {
        let working = text.into();
        Self {
            raw: working.clone(),
            working,
            tags: Vec::new(),
        }
    }

    /// Current, progressively blanked text.
    #[must_use]
    pub fn working(&self) -> &str {
        &self.working
    }

    /// Snapshot of the text as it was when the document was created.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Tags emitted so far, in firing order.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Applies `rule` to the working text and commits the result if it
    /// produced at least one tag. Returns whether it did.
    pub fn try_apply(&mut self, rule: &Rule) -> bool {
        let (out, tags) = rule.apply(&self.working);
        if tags.is_empty() {
            return false;
        }

        let out = out.into_owned();
        trace!(pattern = rule.pattern().as_str(), ?tags, "rule matched");
        self.working = out;
        self.tags.extend(tags);
        true
    }

    /// Consumes the document, returning the working text and the tags.
    #[must_use]
    pub fn into_parts(self) -> (String, Vec<String>) {
        (self.working, self.tags)
    }
}

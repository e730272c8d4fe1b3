use tracing::debug;

use super::document::Document;
use super::rule::Rule;

/// An ordered set of rules sharing three composition flags.
///
/// - `continue_after_match`: try every rule instead of stopping at the
///   first one that fires.
/// - `use_raw_text`: detect against the document's raw snapshot rather than
///   the blanked working text. A rule that fires is then re-applied to the
///   group's accumulated text so the real document is still blanked.
/// - `keep_working_text`: after every rule, reset the working text to the
///   group's accumulated text.
#[derive(Debug, Clone)]
pub struct GroupRule {
    name: String,
    rules: Vec<Rule>,
    continue_after_match: bool,
    use_raw_text: bool,
    keep_working_text: bool,
}

impl GroupRule {
    /// Creates a group that stops at the first matching rule and works on
    /// the blanked text.
    pub fn new(name: impl Into<String>, rules: Vec<Rule>) -> Self {
        Self {
            name: name.into(),
            rules,
            continue_after_match: false,
            use_raw_text: false,
            keep_working_text: false,
        }
    }

    /// Keep trying the remaining rules after one matches.
    #[must_use]
    pub fn continue_after_match(mut self, enabled: bool) -> Self {
        self.continue_after_match = enabled;
        self
    }

    /// Detect against the raw snapshot instead of the working text.
    #[must_use]
    pub fn use_raw_text(mut self, enabled: bool) -> Self {
        self.use_raw_text = enabled;
        self
    }

    /// Reset the working text to the accumulated text after every rule.
    #[must_use]
    pub fn keep_working_text(mut self, enabled: bool) -> Self {
        self.keep_working_text = enabled;
        self
    }

    /// Group name, used for configuration and logging.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rules in declaration order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Runs the group against `doc`. Returns `true` if any rule fired.
    pub fn apply(&self, doc: &mut Document) -> bool {
        let tags_before = doc.tags().len();
        let mut accumulated = doc.working.clone();
        let mut fired = false;

        for rule in &self.rules {
            if self.use_raw_text {
                doc.working = doc.raw().to_owned();
            }

            if doc.try_apply(rule) {
                fired = true;
                if self.use_raw_text {
                    // Tags already come from the raw pass; this pass only
                    // blanks the match in the accumulated text.
                    let (reblanked, _) = rule.apply(&accumulated);
                    accumulated = reblanked.into_owned();
                    doc.working = accumulated.clone();
                }
                if !self.continue_after_match {
                    break;
                }
            }

            if self.keep_working_text {
                doc.working = accumulated.clone();
            }
        }

        if self.use_raw_text {
            doc.working = accumulated;
        }

        if fired {
            debug!(group = %self.name, tags = ?&doc.tags()[tags_before..], "rule group fired");
        }
        fired
    }
}

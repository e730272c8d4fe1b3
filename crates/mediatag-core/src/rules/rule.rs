use std::borrow::Cow;

use regex::Regex;

use crate::error::Result;
use crate::matcher::{mask_all, mask_any};

/// Maps the captures of one match (full match first) to zero or more tags.
pub type Transform = fn(&[String]) -> Vec<String>;

/// A single pattern plus the tags it produces.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Emits `label` once when the pattern matches anywhere.
    Label {
        /// Pattern blanked wherever it matches.
        pattern: Regex,
        /// Fixed tag.
        label: String,
    },

    /// Runs `transform` over every match and emits whatever it returns.
    Extract {
        /// Pattern blanked wherever it matches.
        pattern: Regex,
        /// Per-match tag producer.
        transform: Transform,
    },
}

impl Rule {
    /// Compiles a fixed-label rule.
    ///
    /// # Errors
    ///
    /// Returns `MediatagError::RegexError` if `pattern` does not compile.
    pub fn label(pattern: &str, label: impl Into<String>) -> Result<Self> {
        Ok(Self::Label {
            pattern: Regex::new(pattern)?,
            label: label.into(),
        })
    }

    /// Compiles a capture-transform rule.
    ///
    /// # Errors
    ///
    /// Returns `MediatagError::RegexError` if `pattern` does not compile.
    pub fn extract(pattern: &str, transform: Transform) -> Result<Self> {
        Ok(Self::Extract {
            pattern: Regex::new(pattern)?,
            transform,
        })
    }

    /// The rule's pattern.
    #[must_use]
    pub fn pattern(&self) -> &Regex {
        match self {
            Self::Label { pattern, .. } | Self::Extract { pattern, .. } => pattern,
        }
    }

    /// Applies the rule to `text`, returning the blanked text and the tags
    /// produced.
    ///
    /// If no tag is produced the text comes back untouched, even when the
    /// pattern matched but the transform returned nothing.
    pub fn apply<'a>(&self, text: &'a str) -> (Cow<'a, str>, Vec<String>) {
        let (out, tags) = match self {
            Self::Label { pattern, label } => {
                let (out, matched) = mask_any(pattern, text);
                let tags = if matched { vec![label.clone()] } else { Vec::new() };
                (out, tags)
            }
            Self::Extract { pattern, transform } => {
                let (out, matches) = mask_all(pattern, text);
                let tags: Vec<String> = matches
                    .iter()
                    .flat_map(|caps| transform(caps.as_slice()))
                    .collect();
                (out, tags)
            }
        };

        if tags.is_empty() {
            (Cow::Borrowed(text), tags)
        } else {
            (out, tags)
        }
    }
}

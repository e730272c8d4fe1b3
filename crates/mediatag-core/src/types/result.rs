use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::episode::Episode;

/// The primary output of the Mediatag extraction engine.
///
/// `tags` keeps the order in which rules fired, but two results compare
/// equal whenever their tags are the same set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractInfo {
    /// Input text with every recognized fragment blanked to spaces.
    pub residual: String,

    /// Labels emitted by the tag pipeline.
    pub tags: Vec<String>,

    /// Season and episode numbers.
    pub episode: Episode,
}

impl ExtractInfo {
    /// Returns `true` if `tag` was emitted.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Returns the tags as an ordered set.
    #[must_use]
    pub fn tag_set(&self) -> BTreeSet<&str> {
        self.tags.iter().map(String::as_str).collect()
    }

    /// Returns the residual with surrounding blanks trimmed, or `None` if
    /// nothing but blanks and separators is left.
    #[must_use]
    pub fn unclassified(&self) -> Option<&str> {
        let rest = self.residual.trim();
        if rest.chars().all(|c| c.is_whitespace() || c.is_ascii_punctuation()) {
            None
        } else {
            Some(rest)
        }
    }
}

impl PartialEq for ExtractInfo {
    fn eq(&self, other: &Self) -> bool {
        self.residual == other.residual
            && self.episode == other.episode
            && self.tag_set() == other.tag_set()
    }
}

impl Eq for ExtractInfo {}

impl std::fmt::Display for ExtractInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ExtractInfo(")?;
        write!(f, "episode={}", self.episode)?;
        write!(f, ", tags=[{}]", self.tags.join(", "))?;
        write!(f, ", residual={:?}", self.residual)?;
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(tags: &[&str]) -> ExtractInfo {
        ExtractInfo {
            residual: "show  ".into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            episode: Episode::new(1, 2),
        }
    }

    #[test]
    fn equality_ignores_tag_order() {
        assert_eq!(info(&["1080P", "HDTV"]), info(&["HDTV", "1080P"]));
        assert_ne!(info(&["1080P"]), info(&["1080P", "HDTV"]));
    }

    #[test]
    fn equality_checks_residual_and_episode() {
        let mut other = info(&["1080P"]);
        other.residual = "other".into();
        assert_ne!(info(&["1080P"]), other);

        let mut other = info(&["1080P"]);
        other.episode = Episode::new(1, 3);
        assert_ne!(info(&["1080P"]), other);
    }

    #[test]
    fn has_tag_and_tag_set() {
        let i = info(&["H264", "720P", "H264"]);
        assert!(i.has_tag("720P"));
        assert!(!i.has_tag("720p"));
        assert_eq!(i.tag_set().into_iter().collect::<Vec<_>>(), vec!["720P", "H264"]);
    }

    #[test]
    fn unclassified_ignores_blanks_and_separators() {
        let mut i = info(&[]);
        i.residual = "  .   [   ] ".into();
        assert_eq!(i.unclassified(), None);

        i.residual = "[      ][ONE PIECE]   ".into();
        assert_eq!(i.unclassified(), Some("[      ][ONE PIECE]"));
    }

    #[test]
    fn display_lists_tags() {
        let display = info(&["1080P", "HDTV"]).to_string();
        assert!(display.contains("S01E02"));
        assert!(display.contains("1080P, HDTV"));
    }

    #[test]
    fn serialization_roundtrip() {
        let i = info(&["简体中文字幕", "MP4"]);
        let json = serde_json::to_string_pretty(&i).unwrap();
        let back: ExtractInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(i, back);
        assert_eq!(i.tags, back.tags);
    }
}

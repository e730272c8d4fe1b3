//! # Masked Matcher
//!
//! Regex primitives that blank every matched span with spaces instead of
//! removing it. The returned text always has the same byte length as the
//! input, so offsets found by one pattern stay valid for the next.

use std::borrow::Cow;
use std::ops::Range;

use regex::Regex;

/// Character written over every byte of a matched span.
pub const BLANK: char = ' ';

/// Captured groups of a single match: index 0 is the full match, followed by
/// every capture group (empty for groups that did not participate).
pub type Captures = Vec<String>;

/// Blanks the first match of `pattern` and returns its captures.
///
/// When nothing matches, the input is returned borrowed and untouched.
pub fn mask_first<'a>(pattern: &Regex, text: &'a str) -> (Cow<'a, str>, Option<Captures>) {
    match pattern.captures(text) {
        Some(caps) => {
            let span = caps.get(0).map_or(0..0, |m| m.range());
            let groups = collect_groups(&caps);
            (Cow::Owned(blank_spans(text, [span])), Some(groups))
        }
        None => (Cow::Borrowed(text), None),
    }
}

/// Blanks every non-overlapping match of `pattern`, returning the captures
/// of each match in left-to-right order.
pub fn mask_all<'a>(pattern: &Regex, text: &'a str) -> (Cow<'a, str>, Vec<Captures>) {
    let mut spans = Vec::new();
    let mut matches = Vec::new();
    for caps in pattern.captures_iter(text) {
        if let Some(m) = caps.get(0) {
            spans.push(m.range());
        }
        matches.push(collect_groups(&caps));
    }

    if matches.is_empty() {
        return (Cow::Borrowed(text), matches);
    }
    (Cow::Owned(blank_spans(text, spans)), matches)
}

/// Blanks every match of `pattern` and reports whether there was at least one.
pub fn mask_any<'a>(pattern: &Regex, text: &'a str) -> (Cow<'a, str>, bool) {
    let spans: Vec<Range<usize>> = pattern.find_iter(text).map(|m| m.range()).collect();
    if spans.is_empty() {
        return (Cow::Borrowed(text), false);
    }
    (Cow::Owned(blank_spans(text, spans)), true)
}

fn collect_groups(caps: &regex::Captures<'_>) -> Captures {
    caps.iter()
        .map(|group| group.map_or_else(String::new, |m| m.as_str().to_string()))
        .collect()
}

/// Rebuilds `text` with each byte inside `spans` replaced by [`BLANK`].
///
/// Spans come from the regex engine, so they are ordered, non-overlapping
/// and aligned on char boundaries.
fn blank_spans(text: &str, spans: impl IntoIterator<Item = Range<usize>>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for span in spans {
        out.push_str(&text[last..span.start]);
        out.extend(std::iter::repeat_n(BLANK, span.len()));
        last = span.end;
    }
    out.push_str(&text[last..]);
    out
}

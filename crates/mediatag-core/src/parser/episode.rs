use regex::Regex;
use tracing::trace;

use super::numeral::parse_chinese_number;
use crate::error::Result;
use crate::matcher::mask_first;
use crate::types::Episode;

/// Season/episode extraction cascade.
///
/// A combined `S03E03` token wins outright. Otherwise four independent
/// attempts run on the progressively blanked text: `第N季` for the season,
/// `第N集` (or 话/卷/回) for the episode, then `[N]` and `.N.` as episode
/// fallbacks while the episode is still unknown.
#[derive(Debug, Clone)]
pub struct EpisodeParser {
    re_season_episode: Regex,
    re_season_cn: Regex,
    re_episode_cn: Regex,
    re_episode_bracket: Regex,
    re_episode_dotted: Regex,
}

impl EpisodeParser {
    /// Constructs a new `EpisodeParser` with pre-compiled regex patterns.
    ///
    /// # Errors
    ///
    /// Returns `MediatagError::RegexError` if any pattern fails to compile
    /// (should never happen with the static patterns defined here).
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_season_episode: Regex::new(r"(?i)((?-u:\b)|_)s([0-9]+)(e([0-9]+))((?-u:\b)|_)")?,
            re_season_cn: Regex::new(r"第([0-9零〇一二三四五六七八九十百千]+)[季]")?,
            re_episode_cn: Regex::new(r"第([0-9零〇一二三四五六七八九十百千]+)[集话卷回]")?,
            re_episode_bracket: Regex::new(r"\[([0-9]+)]")?,
            re_episode_dotted: Regex::new(r"[.]([0-9]+)[.]")?,
        })
    }

    /// Extracts season and episode numbers from `input`, returning the text
    /// with every consumed token blanked.
    pub fn parse(&self, input: &str) -> (String, Episode) {
        let mut episode = Episode::default();

        let (out, caps) = mask_first(&self.re_season_episode, input);
        if let Some(caps) = caps {
            episode.season = parse_decimal(caps.get(2));
            episode.episode = parse_decimal(caps.get(4));
            trace!(%episode, "matched season+episode token");
            return (out.into_owned(), episode);
        }

        let mut text = input.to_string();

        if let Some(season) = Self::take_numeral(&self.re_season_cn, &mut text) {
            trace!(season, "matched chinese season");
            episode.season = season;
        }

        if let Some(ep) = Self::take_numeral(&self.re_episode_cn, &mut text) {
            trace!(episode = ep, "matched chinese episode");
            episode.episode = ep;
        }

        for fallback in [&self.re_episode_bracket, &self.re_episode_dotted] {
            if episode.episode != 0 {
                break;
            }
            if let Some(ep) = Self::take_numeral(fallback, &mut text) {
                trace!(episode = ep, pattern = fallback.as_str(), "matched episode fallback");
                episode.episode = ep;
            }
        }

        (text, episode)
    }

    /// Blanks the first match of `pattern` in `text` and parses its first
    /// capture group as a numeral.
    ///
    /// The match is blanked even when the numeral does not parse.
    fn take_numeral(pattern: &Regex, text: &mut String) -> Option<u32> {
        let (out, caps) = mask_first(pattern, text.as_str());
        let caps = caps?;
        let out = out.into_owned();
        *text = out;
        caps.get(1).and_then(|numeral| parse_chinese_number(numeral))
    }
}

/// Parses an ASCII digit run; values that overflow `u32` count as unknown.
fn parse_decimal(digits: Option<&String>) -> u32 {
    digits.and_then(|d| d.parse().ok()).unwrap_or_default()
}

//! # Extractor
//!
//! Runs the episode cascade and then the tag pipeline over one release name,
//! with configuration for skipping either stage or individual rule groups.

use once_cell::sync::OnceCell;

use crate::error::Result;
use crate::parser::episode::EpisodeParser;
use crate::rules::TagPipeline;
use crate::types::{Episode, ExtractInfo};

/// Configuration for the extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Whether to run the season/episode cascade.
    pub parse_episodes: bool,
    /// Whether to run the tag pipeline.
    pub extract_tags: bool,
    /// Rule groups removed from the pipeline.
    pub disabled_groups: Vec<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            parse_episodes: true,
            extract_tags: true,
            disabled_groups: Vec::new(),
        }
    }
}

impl ExtractorConfig {
    /// Create a new extractor configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the season/episode cascade.
    pub fn with_episodes(mut self, enabled: bool) -> Self {
        self.parse_episodes = enabled;
        self
    }

    /// Enable or disable the tag pipeline.
    pub fn with_tags(mut self, enabled: bool) -> Self {
        self.extract_tags = enabled;
        self
    }

    /// Remove a rule group from the pipeline.
    pub fn without_group(mut self, name: impl Into<String>) -> Self {
        self.disabled_groups.push(name.into());
        self
    }
}

/// Release-name extractor combining the episode cascade and tag pipeline.
///
/// Built once and shared freely: extraction borrows it immutably and keeps
/// all per-call state in a private document.
#[derive(Debug, Clone)]
pub struct Extractor {
    config: ExtractorConfig,
    episodes: EpisodeParser,
    pipeline: TagPipeline,
}

impl Extractor {
    /// Create an extractor over the standard pipeline.
    ///
    /// # Errors
    ///
    /// Returns `MediatagError::RegexError` if a pattern fails to compile, or
    /// `MediatagError::UnknownGroup` if the config disables a group the
    /// standard pipeline does not have.
    pub fn new(config: ExtractorConfig) -> Result<Self> {
        Self::with_pipeline(config, TagPipeline::standard()?)
    }

    /// Create an extractor with default configuration.
    ///
    /// # Errors
    ///
    /// Returns `MediatagError::RegexError` if a pattern fails to compile.
    pub fn standard() -> Result<Self> {
        Self::new(ExtractorConfig::default())
    }

    /// Create an extractor over a custom pipeline.
    ///
    /// # Errors
    ///
    /// Returns `MediatagError::UnknownGroup` if the config disables a group
    /// that `pipeline` does not have.
    pub fn with_pipeline(config: ExtractorConfig, mut pipeline: TagPipeline) -> Result<Self> {
        pipeline.disable(&config.disabled_groups)?;
        Ok(Self {
            episodes: EpisodeParser::new()?,
            config,
            pipeline,
        })
    }

    /// Extracts tags and season/episode numbers from `input`.
    ///
    /// # Examples
    /// ```
    /// use mediatag_core::Extractor;
    ///
    /// let extractor = Extractor::standard().unwrap();
    /// let info = extractor.extract("test-s03e3.[1080p]");
    ///
    /// assert_eq!(info.residual, "test-     .[     ]");
    /// assert_eq!(info.tags, vec!["1080P"]);
    /// assert_eq!((info.episode.season, info.episode.episode), (3, 3));
    /// ```
    #[must_use]
    pub fn extract(&self, input: &str) -> ExtractInfo {
        let (rest, episode) = if self.config.parse_episodes {
            self.extract_episode(input)
        } else {
            (input.to_string(), Episode::default())
        };

        let (residual, tags) = if self.config.extract_tags {
            self.extract_tags(&rest)
        } else {
            (rest, Vec::new())
        };

        ExtractInfo {
            residual,
            tags,
            episode,
        }
    }

    /// Runs only the season/episode cascade.
    #[must_use]
    pub fn extract_episode(&self, input: &str) -> (String, Episode) {
        self.episodes.parse(input)
    }

    /// Runs only the tag pipeline.
    #[must_use]
    pub fn extract_tags(&self, input: &str) -> (String, Vec<String>) {
        self.pipeline.run(input)
    }

    /// Get the extractor configuration.
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Get the tag pipeline.
    pub fn pipeline(&self) -> &TagPipeline {
        &self.pipeline
    }
}

static STANDARD: OnceCell<Extractor> = OnceCell::new();

/// Convenience function to extract with the standard configuration.
///
/// The extractor is built on first use and shared afterwards.
///
/// # Errors
///
/// Returns `MediatagError::RegexError` if the standard patterns fail to
/// compile on first use.
pub fn extract(input: &str) -> Result<ExtractInfo> {
    let extractor = STANDARD.get_or_try_init(Extractor::standard)?;
    Ok(extractor.extract(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MediatagError;

    fn extractor() -> Extractor {
        Extractor::standard().unwrap()
    }

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn scenario_season_episode_and_resolution() {
        let info = extractor().extract("test-s03e3.[1080p]");
        assert_eq!(
            info,
            ExtractInfo {
                residual: "test-     .[     ]".into(),
                tags: tags(&["1080P"]),
                episode: Episode::new(3, 3),
            }
        );
    }

    #[test]
    fn scenario_fansub_bracketed() {
        let info = extractor().extract(
            "[天空树字幕组][ONE PIECE 海贼王].第一季.[971][X264][720P][GB_JP][MP4][CRRIP][中日双语字幕]",
        );
        assert_eq!(
            info,
            ExtractInfo {
                residual: "[                  ][ONE PIECE 海贼王].         .     [    ][    ][     ][   ][CRRIP][                  ]".into(),
                tags: tags(&["720P", "天空树字幕组", "H264", "MP4", "日语字幕", "简体中文字幕"]),
                episode: Episode::new(1, 971),
            }
        );
    }

    #[test]
    fn scenario_fansub_dotted() {
        let info = extractor().extract("海贼王女.第一季.06.中日双语.HDTV.1080P.甜饼字幕组");
        assert_eq!(
            info,
            ExtractInfo {
                residual: "海贼王女.                         .    .     .               ".into(),
                tags: tags(&["1080P", "甜饼字幕组", "HDTV", "日语字幕", "简体中文字幕"]),
                episode: Episode::new(1, 6),
            }
        );
    }

    #[test]
    fn tags_fire_in_pipeline_order() {
        let info = extractor().extract("海贼王女.第一季.06.中日双语.HDTV.1080P.甜饼字幕组");
        assert_eq!(
            info.tags,
            tags(&["1080P", "HDTV", "简体中文字幕", "日语字幕", "甜饼字幕组"])
        );
    }

    #[test]
    fn residual_keeps_byte_length() {
        for input in [
            "",
            "test-s03e3.[1080p]",
            "[天空树字幕组][ONE PIECE 海贼王].第一季.[971][X264][720P][GB_JP][MP4][CRRIP][中日双语字幕]",
            "海贼王女.第一季.06.中日双语.HDTV.1080P.甜饼字幕组",
            "The.Show.S01E02.EXTENDED.1080p.AMZN.WEB-DL.DDP5.1.H.264-GROUP.mkv",
            "[Lilith-Raws] Show - 05 [1080p].mkv",
            "Show.S01E02.1080p.WEB-DL.x264.mkv",
            "Show.x264web.mkv",
            "Show.[03].05.mkv",
            "[简繁英字幕] 第十二集 FIX\u{3000}字幕侠",
        ] {
            assert_eq!(extractor().extract(input).residual.len(), input.len(), "failed for input: {input}");
        }
    }

    #[test]
    fn rerunning_on_residual_finds_nothing_new() {
        let e = extractor();
        for input in [
            "test-s03e3.[1080p]",
            "[天空树字幕组][ONE PIECE 海贼王].第一季.[971][X264][720P][GB_JP][MP4][CRRIP][中日双语字幕]",
            "海贼王女.第一季.06.中日双语.HDTV.1080P.甜饼字幕组",
            "[Lilith-Raws] Show - 05 [1080p].mkv",
            "Show.S01E02.1080p.WEB-DL.x264.mkv",
            "Just A Title",
        ] {
            let first = e.extract(input);
            let second = e.extract(&first.residual);
            assert!(second.tags.is_empty(), "new tags for input: {input}");
            assert_eq!(second.residual, first.residual);
        }
    }

    #[test]
    fn blanking_can_expose_a_new_word_boundary() {
        let e = extractor();
        let first = e.extract("Show.x264web.mkv");
        assert_eq!(first.tags, tags(&["H264", "MKV"]));
        assert_eq!(first.residual, "Show.    web.   ");

        // "web" only has a boundary once "x264" is blanked.
        let second = e.extract(&first.residual);
        assert_eq!(second.tags, tags(&["Web"]));
        assert_eq!(second.residual, "Show.       .   ");
    }

    #[test]
    fn bracket_episode_leaves_dotted_number_for_a_rerun() {
        let e = extractor();
        let first = e.extract("Show.[03].05.mkv");
        assert_eq!(first.episode, Episode::new(0, 3));
        assert_eq!(first.tags, tags(&["MKV"]));
        assert_eq!(first.residual, "Show.    .05.   ");

        let second = e.extract(&first.residual);
        assert_eq!(second.episode, Episode::new(0, 5));
        assert!(second.tags.is_empty());
        assert_eq!(second.residual, format!("Show.{}", " ".repeat(11)));
    }

    #[test]
    fn extraction_is_deterministic() {
        let e = extractor();
        let input = "[GB_JP][MP4] Show 第二季 第十集";
        assert_eq!(e.extract(input), e.extract(input));
        assert_eq!(e.extract(input).tag_set(), e.extract(input).tag_set());
    }

    #[test]
    fn empty_and_unrecognized_input() {
        let info = extractor().extract("");
        assert_eq!(info, ExtractInfo::default());

        let info = extractor().extract("Just A Title");
        assert_eq!(info.residual, "Just A Title");
        assert!(info.tags.is_empty());
        assert!(!info.episode.is_known());
    }

    #[test]
    fn western_scene_release() {
        let info = extractor().extract("The.Show.S01E02.EXTENDED.1080p.AMZN.WEB-DL.DDP5.1.H.264-GROUP.mkv");
        assert_eq!(info.episode, Episode::new(1, 2));
        for tag in ["1080P", "Web", "H264", "DDP5.1", "EXTENDED", "MKV", "Amazon"] {
            assert!(info.has_tag(tag), "missing tag {tag}: {info}");
        }
    }

    #[test]
    fn episodes_can_be_disabled() {
        let e = Extractor::new(ExtractorConfig::new().with_episodes(false)).unwrap();
        let info = e.extract("test-s03e3.[1080p]");
        assert_eq!(info.episode, Episode::default());
        assert_eq!(info.residual, "test-s03e3.[     ]");
        assert_eq!(info.tags, tags(&["1080P"]));
    }

    #[test]
    fn tags_can_be_disabled() {
        let e = Extractor::new(ExtractorConfig::new().with_tags(false)).unwrap();
        let info = e.extract("test-s03e3.[1080p]");
        assert_eq!(info.episode, Episode::new(3, 3));
        assert_eq!(info.residual, "test-     .[1080p]");
        assert!(info.tags.is_empty());
    }

    #[test]
    fn groups_can_be_disabled() {
        let e = Extractor::new(ExtractorConfig::new().without_group("group")).unwrap();
        let info = e.extract("海贼王女.第一季.06.中日双语.HDTV.1080P.甜饼字幕组");
        assert!(!info.has_tag("甜饼字幕组"));
        assert!(info.residual.ends_with(".甜饼字幕组"));
    }

    #[test]
    fn unknown_disabled_group_is_rejected() {
        let err = Extractor::new(ExtractorConfig::new().without_group("codec")).unwrap_err();
        assert!(matches!(err, MediatagError::UnknownGroup(name) if name == "codec"));
    }

    #[test]
    fn stages_run_separately() {
        let e = extractor();
        let (rest, episode) = e.extract_episode("Show.第二季.[05].720p");
        assert_eq!(episode, Episode::new(2, 5));

        let (residual, found) = e.extract_tags(&rest);
        assert_eq!(found, tags(&["720P"]));
        assert_eq!(residual.len(), "Show.第二季.[05].720p".len());
    }

    #[test]
    fn config_builder() {
        let config = ExtractorConfig::new()
            .with_episodes(false)
            .with_tags(true)
            .without_group("source");
        assert!(!config.parse_episodes);
        assert!(config.extract_tags);
        assert_eq!(config.disabled_groups, vec!["source"]);

        let e = Extractor::new(config.clone()).unwrap();
        assert_eq!(e.config(), &config);
        assert_eq!(e.pipeline().group_names().count(), 7);
    }

    #[test]
    fn convenience_function_shares_one_extractor() {
        let info = extract("test-s03e3.[1080p]").unwrap();
        assert_eq!(info.episode, Episode::new(3, 3));
        let again = extract("test-s03e3.[1080p]").unwrap();
        assert_eq!(info, again);
    }

    #[test]
    fn extractor_is_shareable_across_threads() {
        let e = std::sync::Arc::new(extractor());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let e = std::sync::Arc::clone(&e);
                std::thread::spawn(move || e.extract("test-s03e3.[1080p]"))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().tags, tags(&["1080P"]));
        }
    }
}

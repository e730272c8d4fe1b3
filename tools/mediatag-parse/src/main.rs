//! Mediatag command-line parser
//!
//! Extracts tags and season/episode numbers from release names given as
//! arguments, or one per line on stdin, and prints one JSON object each.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use mediatag_core::{ExtractInfo, Extractor, ExtractorConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "mediatag-parse")]
#[command(about = "Extract tags and season/episode numbers from release names")]
#[command(version)]
struct Cli {
    /// Release names to parse (reads stdin, one per line, when empty)
    inputs: Vec<String>,

    /// Skip the season/episode cascade
    #[arg(long)]
    no_episode: bool,

    /// Skip the tag pipeline
    #[arg(long)]
    no_tags: bool,

    /// Rule group to skip (repeatable, or comma separated)
    #[arg(
        short = 'd',
        long = "disable-group",
        value_name = "NAME",
        env = "MEDIATAG_DISABLE_GROUPS",
        value_delimiter = ','
    )]
    disabled_groups: Vec<String>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pretty: bool,
}

impl Cli {
    fn extractor_config(&self) -> ExtractorConfig {
        let config = ExtractorConfig::new()
            .with_episodes(!self.no_episode)
            .with_tags(!self.no_tags);
        self.disabled_groups
            .iter()
            .fold(config, |config, name| config.without_group(name.trim()))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ParseOutput {
    pub input: String,
    pub residual: String,
    pub unclassified: Option<String>,
    pub season: u32,
    pub episode: u32,
    pub episode_start: u32,
    pub episode_end: u32,
    pub tags: Vec<String>,
}

impl ParseOutput {
    fn new(input: &str, info: ExtractInfo) -> Self {
        Self {
            input: input.to_string(),
            unclassified: info.unclassified().map(str::to_string),
            season: info.episode.season,
            episode: info.episode.episode,
            episode_start: info.episode.episode_start,
            episode_end: info.episode.episode_end,
            tags: info.tags,
            residual: info.residual,
        }
    }
}

fn render(output: &ParseOutput, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(output)
    } else {
        serde_json::to_string(output)
    };
    json.context("Failed to serialize parse output")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let extractor =
        Extractor::new(cli.extractor_config()).context("Failed to build extractor")?;
    debug!(groups = ?extractor.pipeline().group_names().collect::<Vec<_>>(), "extractor ready");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut parsed = 0usize;

    let mut emit = |line: &str| -> Result<()> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }
        let output = ParseOutput::new(line, extractor.extract(line));
        writeln!(out, "{}", render(&output, cli.pretty)?).context("Failed to write output")?;
        parsed += 1;
        Ok(())
    };

    if cli.inputs.is_empty() {
        for line in io::stdin().lock().lines() {
            emit(&line.context("Failed to read stdin")?)?;
        }
    } else {
        for input in &cli.inputs {
            emit(input)?;
        }
    }

    info!(parsed, "done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_build_default_config() {
        let cli = Cli::parse_from(["mediatag-parse", "name"]);
        assert_eq!(cli.inputs, vec!["name"]);
        assert_eq!(cli.extractor_config(), ExtractorConfig::default());
    }

    #[test]
    fn flags_map_onto_config() {
        let cli = Cli::parse_from([
            "mediatag-parse",
            "--no-episode",
            "--no-tags",
            "-d",
            "group,source",
            "--disable-group",
            "info",
        ]);
        let config = cli.extractor_config();
        assert!(!config.parse_episodes);
        assert!(!config.extract_tags);
        assert_eq!(config.disabled_groups, vec!["group", "source", "info"]);
    }

    #[test]
    fn output_flattens_extract_info() {
        let extractor = Extractor::standard().unwrap();
        let input = "test-s03e3.[1080p]";
        let output = ParseOutput::new(input, extractor.extract(input));

        assert_eq!(output.season, 3);
        assert_eq!(output.episode, 3);
        assert_eq!(output.tags, vec!["1080P"]);
        assert_eq!(output.unclassified.as_deref(), Some("test-     .[     ]"));

        let json = render(&output, false).unwrap();
        assert!(json.contains("\"tags\":[\"1080P\"]"));
        assert!(!json.contains('\n'));
        assert!(render(&output, true).unwrap().contains('\n'));
    }
}

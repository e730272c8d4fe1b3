//! # Mediatag Core
//!
//! Tag and season/episode extraction for media release names. Every
//! recognized fragment is blanked in place, so callers get both the
//! structured metadata and the text that is left unclassified.
//!
//! ## Quick Start
//!
//! ```rust
//! use mediatag_core::Extractor;
//!
//! let extractor = Extractor::standard().unwrap();
//! let info = extractor.extract("海贼王女.第一季.06.中日双语.HDTV.1080P.甜饼字幕组");
//!
//! assert_eq!((info.episode.season, info.episode.episode), (1, 6));
//! assert!(info.has_tag("HDTV"));
//! assert!(info.has_tag("甜饼字幕组"));
//! ```
pub mod error;
pub mod matcher;
pub mod parser;
pub mod rules;
pub mod types;

// Re-export primary API
pub use error::{MediatagError, Result};
pub use parser::{extract, parse_chinese_number, EpisodeParser, Extractor, ExtractorConfig};
pub use rules::{Document, GroupRule, Rule, TagPipeline};
pub use types::{Episode, ExtractInfo};

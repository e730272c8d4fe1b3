pub mod episode;
pub mod extractor;
pub mod numeral;

pub use episode::EpisodeParser;
pub use extractor::{extract, Extractor, ExtractorConfig};
pub use numeral::parse_chinese_number;

pub mod episode;
pub mod result;

pub use episode::Episode;
pub use result::ExtractInfo;

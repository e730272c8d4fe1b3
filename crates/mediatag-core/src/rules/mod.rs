pub mod catalog;
pub mod document;
pub mod group;
pub mod pipeline;
pub mod rule;

pub use document::Document;
pub use group::GroupRule;
pub use pipeline::TagPipeline;
pub use rule::{Rule, Transform};

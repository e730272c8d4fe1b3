use super::catalog;
use super::document::Document;
use super::group::GroupRule;
use crate::error::{MediatagError, Result};

/// Ordered list of rule groups run once per extraction.
#[derive(Debug, Clone)]
pub struct TagPipeline {
    groups: Vec<GroupRule>,
}

impl TagPipeline {
    /// Creates a pipeline from custom groups.
    #[must_use]
    pub fn new(groups: Vec<GroupRule>) -> Self {
        Self { groups }
    }

    /// Builds the standard pipeline: resolution, quality, video codec,
    /// audio codec, subtitle, info, source, group.
    ///
    /// # Errors
    ///
    /// Returns `MediatagError::RegexError` if a pattern fails to compile.
    pub fn standard() -> Result<Self> {
        Ok(Self::new(catalog::standard_groups()?))
    }

    /// Group names in execution order.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(GroupRule::name)
    }

    /// Removes the named groups.
    ///
    /// # Errors
    ///
    /// Returns `MediatagError::UnknownGroup` for the first name that is not
    /// in the pipeline; the pipeline is left unchanged in that case.
    pub fn disable<S: AsRef<str>>(&mut self, names: &[S]) -> Result<()> {
        let names: Vec<&str> = names.iter().map(|name| name.as_ref()).collect();
        if let Some(unknown) = names
            .iter()
            .find(|name| !self.groups.iter().any(|g| g.name() == **name))
        {
            return Err(MediatagError::UnknownGroup(unknown.to_string()));
        }

        self.groups.retain(|g| !names.iter().any(|name| *name == g.name()));
        Ok(())
    }

    /// Runs every group in order against `doc`.
    pub fn apply(&self, doc: &mut Document) {
        for group in &self.groups {
            group.apply(doc);
        }
    }

    /// Tags `text`, returning the blanked text and the emitted tags.
    #[must_use]
    pub fn run(&self, text: &str) -> (String, Vec<String>) {
        let mut doc = Document::new(text);
        self.apply(&mut doc);
        doc.into_parts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Rule;

    #[test]
    fn standard_pipeline_tags_and_blanks() {
        let pipeline = TagPipeline::standard().unwrap();
        let (rest, tags) = pipeline.run("Show.1080p.WEB-DL.AMZN.x264.mkv");

        assert_eq!(rest, "Show.     .      .    .    .   ");
        assert_eq!(tags, vec!["1080P", "Web", "H264", "MKV", "Amazon"]);
    }

    #[test]
    fn every_group_runs_even_after_misses() {
        let pipeline = TagPipeline::standard().unwrap();
        let (_, tags) = pipeline.run("Show.甜饼字幕组");
        assert_eq!(tags, vec!["甜饼字幕组"]);
    }

    #[test]
    fn disable_removes_groups() {
        let mut pipeline = TagPipeline::standard().unwrap();
        pipeline.disable(&["resolution", "info"]).unwrap();

        let names: Vec<&str> = pipeline.group_names().collect();
        assert!(!names.contains(&"resolution"));
        assert!(!names.contains(&"info"));
        assert_eq!(names.len(), 6);

        let (rest, tags) = pipeline.run("Show.1080p.mkv");
        assert_eq!(rest, "Show.1080p.mkv");
        assert!(tags.is_empty());
    }

    #[test]
    fn disable_rejects_unknown_group() {
        let mut pipeline = TagPipeline::standard().unwrap();
        let err = pipeline.disable(&["resolution", "subtitles"]).unwrap_err();
        assert!(matches!(err, MediatagError::UnknownGroup(name) if name == "subtitles"));
        assert_eq!(pipeline.group_names().count(), 8);
    }

    #[test]
    fn custom_pipeline() {
        let pipeline = TagPipeline::new(vec![GroupRule::new(
            "custom",
            vec![Rule::label("(?i)remux", "REMUX").unwrap()],
        )]);
        let (rest, tags) = pipeline.run("Show.REMUX");
        assert_eq!(rest, "Show.     ");
        assert_eq!(tags, vec!["REMUX"]);
    }

    #[test]
    fn pipeline_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TagPipeline>();
    }
}

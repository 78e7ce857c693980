//! Shared structs: the textbook hierarchy and the generated artifacts.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableOfContents {
    pub title: String,
    pub description: String,
    pub target_audience: String,
    pub prerequisites: Vec<String>,
    pub chapters: Vec<Chapter>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub chapter_number: u32,
    pub title: String,
    pub description: String,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// `"C.S"`, e.g. `"2.1"`.
    pub section_number: String,
    pub title: String,
    pub description: String,
    pub learning_outcomes: Vec<String>,
    pub subsections: Vec<Subsection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subsection {
    /// `"C.S.X"`, e.g. `"2.1.3"`.
    pub subsection_number: String,
    pub title: String,
    pub description: String,
}

/// Titles locating one subsection inside a textbook on `topic`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubsectionRequest {
    pub topic: String,
    pub chapter_title: String,
    pub section_title: String,
    pub subsection_title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentMetadata {
    pub topic: String,
    pub chapter: String,
    pub section: String,
    pub subsection: String,
}

impl From<&SubsectionRequest> for ContentMetadata {
    fn from(req: &SubsectionRequest) -> Self {
        Self {
            topic: req.topic.clone(),
            chapter: req.chapter_title.clone(),
            section: req.section_title.clone(),
            subsection: req.subsection_title.clone(),
        }
    }
}

/// Markdown body of one subsection. The first non-empty line of `content`
/// is always a level-1 heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub content: String,
    pub metadata: ContentMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedContent {
    pub html: String,
    pub metadata: ContentMetadata,
}

/// One section as persisted by the batch driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedSectionFile {
    pub section_info: Section,
    pub subsections: Vec<CachedSubsection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedSubsection {
    pub subsection_info: Subsection,
    pub content: String,
}

//! Offline generation of a whole book into the on-disk cache layout:
//!
//! ```text
//! <cache_dir>/<toc_file>
//! <cache_dir>/chapter_<N>/<section_number>_<slug>.json
//! ```
//!
//! Runs strictly in order, one model call at a time. The first failure stops
//! the run; files already written are left in place.

use crate::config::BatchConfig;
use crate::engine::types::{
    CachedSectionFile, CachedSubsection, Chapter, Section, SubsectionRequest,
};
use crate::engine::{GenerationError, Orchestrator};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub chapters: usize,
    pub sections_written: usize,
    pub subsections_generated: usize,
}

pub struct BatchDriver {
    orchestrator: Arc<Orchestrator>,
    config: BatchConfig,
}

impl BatchDriver {
    pub fn new(orchestrator: Arc<Orchestrator>, config: BatchConfig) -> Self {
        Self {
            orchestrator,
            config,
        }
    }

    #[instrument(skip(self), fields(topic = %self.config.topic, cache_dir = %self.config.cache_dir.display()))]
    pub async fn run(&self) -> Result<BatchSummary, BatchError> {
        let cache_dir = &self.config.cache_dir;
        create_dir(cache_dir).await?;

        let toc = self.orchestrator.generate_toc(&self.config.topic).await?;
        write_json(&cache_dir.join(&self.config.toc_file), &toc).await?;
        info!("Saved table of contents");

        let mut summary = BatchSummary::default();
        for chapter in &toc.chapters {
            let chapter_dir = cache_dir.join(format!("chapter_{}", chapter.chapter_number));
            create_dir(&chapter_dir).await?;

            for section in &chapter.sections {
                let file = self.generate_section(chapter, section).await?;
                summary.subsections_generated += file.subsections.len();

                write_json(&chapter_dir.join(section_file_name(section)), &file).await?;
                summary.sections_written += 1;
                info!(section = %section.title, "Saved section content");
            }
            summary.chapters += 1;
        }

        info!(?summary, "Generated and cached all content");
        Ok(summary)
    }

    async fn generate_section(
        &self,
        chapter: &Chapter,
        section: &Section,
    ) -> Result<CachedSectionFile, BatchError> {
        let mut subsections = Vec::with_capacity(section.subsections.len());

        for subsection in &section.subsections {
            info!(
                chapter = chapter.chapter_number,
                section = %section.title,
                subsection = %subsection.title,
                "Processing subsection"
            );

            let request = SubsectionRequest {
                topic: self.config.topic.clone(),
                chapter_title: chapter.title.clone(),
                section_title: section.title.clone(),
                subsection_title: subsection.title.clone(),
            };
            let generated = self.orchestrator.generate_subsection(&request).await?;

            subsections.push(CachedSubsection {
                subsection_info: subsection.clone(),
                content: generated.content,
            });
        }

        Ok(CachedSectionFile {
            section_info: section.clone(),
            subsections,
        })
    }
}

/// `<section_number>_<title_slug>.json`, e.g. `1.2_lists_and_tuples.json`.
pub fn section_file_name(section: &Section) -> String {
    let number: String = section
        .section_number
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '.')
        .collect();
    let title = slug::slugify(&section.title).replace('-', "_");
    format!("{}_{}.json", number, title)
}

async fn create_dir(path: &Path) -> Result<(), BatchError> {
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|source| BatchError::Io {
            path: path.to_path_buf(),
            source,
        })
}

async fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), BatchError> {
    let json = serde_json::to_string_pretty(value)?;
    tokio::fs::write(path, json)
        .await
        .map_err(|source| BatchError::Io {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(number: &str, title: &str) -> Section {
        Section {
            section_number: number.into(),
            title: title.into(),
            description: String::new(),
            learning_outcomes: vec![],
            subsections: vec![],
        }
    }

    #[test]
    fn file_names_are_filesystem_safe() {
        assert_eq!(
            section_file_name(&section("1.2", "Lists and Tuples")),
            "1.2_lists_and_tuples.json"
        );
        assert_eq!(
            section_file_name(&section("3.1", "I/O: Files & Streams")),
            "3.1_i_o_files_streams.json"
        );
        assert_eq!(
            section_file_name(&section("../2.1", "Basics")),
            "..2.1_basics.json"
        );
    }
}

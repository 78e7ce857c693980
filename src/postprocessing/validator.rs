//! Structural checks on a generated table of contents.

use crate::engine::types::TableOfContents;
use std::ops::RangeInclusive;

pub const CHAPTERS: RangeInclusive<usize> = 3..=4;
pub const SECTIONS_PER_CHAPTER: RangeInclusive<usize> = 2..=3;
pub const SUBSECTIONS_PER_SECTION: RangeInclusive<usize> = 2..=3;

/// Returns every violation found, in document order. An empty list means the
/// counts are in range and all numbering runs `1, 2, ...` at each level.
pub fn validate_toc(toc: &TableOfContents) -> Vec<String> {
    let mut problems = Vec::new();

    if !CHAPTERS.contains(&toc.chapters.len()) {
        problems.push(format!(
            "expected 3-4 chapters, found {}",
            toc.chapters.len()
        ));
    }

    for (ci, chapter) in toc.chapters.iter().enumerate() {
        let chapter_no = ci + 1;
        if chapter.chapter_number as usize != chapter_no {
            problems.push(format!(
                "chapter {} is numbered {}",
                chapter_no, chapter.chapter_number
            ));
        }

        if !SECTIONS_PER_CHAPTER.contains(&chapter.sections.len()) {
            problems.push(format!(
                "chapter {} has {} sections, expected 2-3",
                chapter_no,
                chapter.sections.len()
            ));
        }

        for (si, section) in chapter.sections.iter().enumerate() {
            let expected = format!("{}.{}", chapter_no, si + 1);
            if section.section_number != expected {
                problems.push(format!(
                    "section {} is numbered {:?}",
                    expected, section.section_number
                ));
            }

            if !SUBSECTIONS_PER_SECTION.contains(&section.subsections.len()) {
                problems.push(format!(
                    "section {} has {} subsections, expected 2-3",
                    expected,
                    section.subsections.len()
                ));
            }

            for (xi, subsection) in section.subsections.iter().enumerate() {
                let expected_sub = format!("{}.{}", expected, xi + 1);
                if subsection.subsection_number != expected_sub {
                    problems.push(format!(
                        "subsection {} is numbered {:?}",
                        expected_sub, subsection.subsection_number
                    ));
                }
            }
        }
    }

    problems
}

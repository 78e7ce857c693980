//! The example table-of-contents skeleton embedded in the TOC prompt.

use serde_json::{json, Value};

pub fn toc_skeleton() -> Value {
    json!({
        "title": "Example Book Title",
        "description": "A brief overview of what this book covers",
        "target_audience": "Who this book is for",
        "prerequisites": ["prerequisite 1", "prerequisite 2"],
        "chapters": [
            {
                "chapter_number": 1,
                "title": "Chapter Title",
                "description": "Brief chapter overview",
                "sections": [
                    {
                        "section_number": "1.1",
                        "title": "Section Title",
                        "description": "Brief section overview",
                        "learning_outcomes": [
                            "After completing this section, you will be able to...",
                            "Another specific learning outcome"
                        ],
                        "subsections": [
                            {
                                "subsection_number": "1.1.1",
                                "title": "Subsection Title",
                                "description": "What this subsection covers"
                            }
                        ]
                    }
                ]
            }
        ]
    })
}

/// Pretty-printed with two-space indentation.
pub fn toc_skeleton_text() -> String {
    format!("{:#}", toc_skeleton())
}

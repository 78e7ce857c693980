#![allow(dead_code)]

use async_trait::async_trait;
use primer_lib::config::GenerationSettings;
use primer_lib::engine::Orchestrator;
use primer_lib::llm::{ChatClient, ChatRequest, LlmError};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

pub const LESSON: &str = "Intro   paragraph.\n\n\n\n## Examples and Implementation\n\n```python\ndef square(x):\n    return  x * x\n```\n";

/// Answers JSON-mode calls with `toc` and everything else with `lesson`.
pub struct FakeClient {
    pub toc: Value,
    pub lesson: String,
    pub fail_with: Option<u16>,
    pub requests: Mutex<Vec<ChatRequest>>,
}

impl FakeClient {
    pub fn new() -> Self {
        Self {
            toc: toc_value(3, 2, 2),
            lesson: LESSON.to_string(),
            fail_with: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            fail_with: Some(status),
            ..Self::new()
        }
    }

    pub fn with_toc(toc: Value) -> Self {
        Self { toc, ..Self::new() }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatClient for FakeClient {
    async fn complete(&self, request: ChatRequest) -> Result<String, LlmError> {
        let json_mode = request.json_mode;
        self.requests.lock().unwrap().push(request);

        if let Some(status) = self.fail_with {
            return Err(LlmError::Status {
                status,
                message: format!("API error ({}): upstream failure", status),
            });
        }
        if json_mode {
            Ok(self.toc.to_string())
        } else {
            Ok(self.lesson.clone())
        }
    }
}

pub fn toc_value(chapters: u32, sections: u32, subsections: u32) -> Value {
    let chapters: Vec<Value> = (1..=chapters)
        .map(|c| {
            let sections: Vec<Value> = (1..=sections)
                .map(|s| {
                    let subsections: Vec<Value> = (1..=subsections)
                        .map(|x| {
                            json!({
                                "subsection_number": format!("{}.{}.{}", c, s, x),
                                "title": format!("Topic {}.{}.{}", c, s, x),
                                "description": "What this covers"
                            })
                        })
                        .collect();
                    json!({
                        "section_number": format!("{}.{}", c, s),
                        "title": format!("Section {} {}", c, s),
                        "description": "Overview",
                        "learning_outcomes": ["Write a loop"],
                        "subsections": subsections
                    })
                })
                .collect();
            json!({
                "chapter_number": c,
                "title": format!("Chapter {}", c),
                "description": "Overview",
                "sections": sections
            })
        })
        .collect();

    json!({
        "title": "Python Programming",
        "description": "From zero to scripts",
        "target_audience": "Beginners",
        "prerequisites": ["A computer"],
        "chapters": chapters
    })
}

pub fn orchestrator(client: Arc<FakeClient>) -> Orchestrator {
    Orchestrator::new(client, GenerationSettings::default())
}

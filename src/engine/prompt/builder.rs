//! Turns a topic (and subsection titles) into the message pair sent to the model.

use crate::engine::prompt::{schema::toc_skeleton_text, templates};
use crate::engine::types::SubsectionRequest;
use crate::llm::Message;

/// A `(system, user)` prompt pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

impl Prompt {
    pub fn into_messages(self) -> Vec<Message> {
        vec![Message::system(self.system), Message::user(self.user)]
    }
}

/// Inputs are interpolated as given; nothing is rejected or trimmed here.
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn table_of_contents(topic: &str) -> Prompt {
        Prompt {
            system: templates::TOC_SYSTEM.to_string(),
            user: templates::toc_user(topic, &toc_skeleton_text()),
        }
    }

    pub fn subsection(req: &SubsectionRequest) -> Prompt {
        Prompt {
            system: templates::SUBSECTION_SYSTEM.to_string(),
            user: templates::subsection_user(
                &req.topic,
                &req.chapter_title,
                &req.section_title,
                &req.subsection_title,
            ),
        }
    }

    pub fn explain(context: &str) -> String {
        templates::explain_system(context)
    }
}

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Renderer-neutral report document. The assembler builds one of these and
/// each output format walks it, so section order is fixed in a single place.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub generated_at: DateTime<Utc>,
    pub sections: Vec<Section>,
}

/// One headed span of the report. Level 1 marks the top-level sections;
/// deeper levels nest under the preceding shallower section.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub level: u8,
    pub heading: String,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Paragraph { text: String },
    List { items: Vec<String> },
}

impl Section {
    pub fn new(level: u8, heading: impl Into<String>) -> Self {
        Self {
            level,
            heading: heading.into(),
            blocks: Vec::new(),
        }
    }

    pub fn paragraph(mut self, text: impl Into<String>) -> Self {
        self.blocks.push(Block::Paragraph { text: text.into() });
        self
    }

    pub fn list(mut self, items: Vec<String>) -> Self {
        self.blocks.push(Block::List { items });
        self
    }
}

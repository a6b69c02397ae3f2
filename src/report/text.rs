use crate::types::document::{Block, Document};

/// Plain-text rendering: the title and top-level headings are underlined,
/// deeper headings are indented, list items get a leading dash.
pub fn to_text(document: &Document) -> String {
    let mut output = String::new();
    output.push_str(&document.title);
    output.push('\n');
    output.push_str(&"=".repeat(document.title.chars().count()));
    output.push_str("\n\n");
    if let Some(subject) = &document.subject {
        output.push_str(&format!("Subject: {subject}\n"));
    }
    output.push_str(&format!(
        "Generated: {}\n\n",
        document.generated_at.to_rfc3339()
    ));

    for section in &document.sections {
        let indent = "  ".repeat(usize::from(section.level.saturating_sub(1)));
        output.push_str(&format!("{indent}{}\n", section.heading));
        if section.level == 1 {
            output.push_str(&format!(
                "{}\n",
                "-".repeat(section.heading.chars().count())
            ));
        }
        if !section.blocks.is_empty() {
            output.push('\n');
        }
        for block in &section.blocks {
            match block {
                Block::Paragraph { text } => {
                    output.push_str(&format!("{indent}{text}\n\n"));
                }
                Block::List { items } => {
                    for item in items {
                        output.push_str(&format!("{indent}- {item}\n"));
                    }
                    output.push('\n');
                }
            }
        }
        if section.blocks.is_empty() {
            output.push('\n');
        }
    }

    output
}

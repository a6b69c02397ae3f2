use crate::types::document::{Block, Document};

pub fn to_markdown(document: &Document) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {}\n\n", document.title));
    if let Some(subject) = &document.subject {
        output.push_str(&format!("Subject: {subject}\n\n"));
    }
    output.push_str(&format!(
        "Generated: {}\n\n",
        document.generated_at.to_rfc3339()
    ));

    for section in &document.sections {
        // Top-level sections render as H2 under the document title.
        let marks = "#".repeat(usize::from(section.level) + 1);
        output.push_str(&format!("{marks} {}\n\n", section.heading));
        for block in &section.blocks {
            match block {
                Block::Paragraph { text } => {
                    output.push_str(text);
                    output.push_str("\n\n");
                }
                Block::List { items } => {
                    for item in items {
                        output.push_str(&format!("- {item}\n"));
                    }
                    output.push('\n');
                }
            }
        }
    }

    output
}

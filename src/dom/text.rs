use crate::dom::{parse, table::TextTable};
use scraper::{ElementRef, Node};

/// Elements whose text is not page content
const SKIPPED_ELEMENTS: [&str; 4] = ["script", "style", "template", "noscript"];

/// Convert HTML to plain text, rendering every table as a pipe table
///
/// Each non-empty text segment (and each rendered table) ends up on its own
/// line, in document order. Tables without rows contribute nothing.
pub fn render(html: &str) -> String {
    let fragment = parse(html);
    let mut segments = Vec::new();
    collect_segments(fragment.root_element(), &mut segments);

    log::debug!("Rendered {} text segments", segments.len());
    segments.join("\n").trim().to_string()
}

fn collect_segments(root: ElementRef<'_>, segments: &mut Vec<String>) {
    // Explicit stack: nesting depth of real pages is unbounded
    let mut pending: Vec<_> = root.children().rev().collect();

    while let Some(node) = pending.pop() {
        match node.value() {
            Node::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    segments.push(trimmed.to_string());
                }
            }
            Node::Element(element) => {
                let name = element.name();

                if name == "table" {
                    if let Some(block) = ElementRef::wrap(node).and_then(|t| TextTable::from_element(t).to_text()) {
                        segments.push(block);
                    }
                } else if !SKIPPED_ELEMENTS.contains(&name) {
                    pending.extend(node.children().rev());
                }
            }
            _ => {}
        }
    }
}

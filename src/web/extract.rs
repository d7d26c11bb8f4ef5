// HTML to plain text via `scraper`

use scraper::{ElementRef, Html, Node};

/// Subtrees whose text never renders on the page
const SKIP_TAGS: &[&str] = &["script", "style", "noscript", "template"];

/// Extract the visible text of an HTML document.
///
/// Every text node is trimmed, empty nodes are dropped and the rest are
/// joined with a single space, so `<p>Hello <b>world</b></p>` becomes
/// `"Hello world"`.
pub fn html_to_text(html: &str) -> String {
    let doc = Html::parse_document(html);
    let mut parts: Vec<&str> = Vec::new();
    collect_text(doc.root_element(), &mut parts);
    parts.join(" ")
}

fn collect_text<'a>(el: ElementRef<'a>, parts: &mut Vec<&'a str>) {
    for child in el.children() {
        match child.value() {
            Node::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    parts.push(trimmed);
                }
            }
            Node::Element(element) => {
                if SKIP_TAGS.contains(&element.name()) {
                    continue;
                }
                if let Some(child_ref) = ElementRef::wrap(child) {
                    collect_text(child_ref, parts);
                }
            }
            _ => {}
        }
    }
}

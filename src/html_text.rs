//! Visible text of an HTML page, one block element per line, in the shape
//! a user would get by selecting the page and copying it.

use scraper::{ElementRef, Html, Node};

enum Chunk {
    Text(String),
    Break,
}

/// Extracts the visible text of `html`, one line per block element.
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    extract_blocks(&document).join("\n")
}

pub fn extract_blocks(document: &Html) -> Vec<String> {
    let mut chunks = Vec::new();
    collect_chunks(&document.root_element(), &mut chunks);

    let mut blocks = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for chunk in chunks {
        match chunk {
            Chunk::Text(text) => current.push(text),
            Chunk::Break => flush(&mut current, &mut blocks),
        }
    }
    flush(&mut current, &mut blocks);

    blocks
}

fn flush(current: &mut Vec<String>, blocks: &mut Vec<String>) {
    if current.is_empty() {
        return;
    }
    let merged = current.join(" ").trim().to_string();
    if !merged.is_empty() {
        blocks.push(merged);
    }
    current.clear();
}

fn collect_chunks(element: &ElementRef, chunks: &mut Vec<Chunk>) {
    if is_hidden(element) || should_skip_element(element) {
        return;
    }

    let tag_name = element.value().name().to_lowercase();

    if tag_name == "br" {
        chunks.push(Chunk::Break);
        return;
    }

    if is_block_element(&tag_name) {
        chunks.push(Chunk::Break);
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let normalized = normalize_whitespace(text);
                if !normalized.is_empty() {
                    chunks.push(Chunk::Text(normalized));
                }
            }
            Node::Element(_) => {
                if let Some(child_ref) = ElementRef::wrap(child) {
                    collect_chunks(&child_ref, chunks);
                }
            }
            _ => {}
        }
    }

    if is_block_element(&tag_name) {
        chunks.push(Chunk::Break);
    }
}

fn is_hidden(element: &ElementRef) -> bool {
    element.value().attr("hidden").is_some()
        || element
            .value()
            .attr("style")
            .map(|s| s.contains("display: none") || s.contains("visibility: hidden"))
            .unwrap_or(false)
}

fn is_block_element(tag: &str) -> bool {
    matches!(
        tag,
        "address"
            | "article"
            | "aside"
            | "blockquote"
            | "dd"
            | "div"
            | "dl"
            | "dt"
            | "figcaption"
            | "figure"
            | "footer"
            | "form"
            | "h1"
            | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
            | "header"
            | "hr"
            | "li"
            | "main"
            | "nav"
            | "ol"
            | "p"
            | "pre"
            | "section"
            | "table"
            | "td"
            | "th"
            | "tr"
            | "ul"
    )
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn should_skip_element(element: &ElementRef) -> bool {
    matches!(
        element.value().name().to_lowercase().as_str(),
        "head" | "script" | "style" | "noscript" | "iframe" | "canvas" | "svg" | "template"
    )
}

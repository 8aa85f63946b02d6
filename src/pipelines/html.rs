use log::debug;

use crate::html_text::html_to_text;
use crate::importer::{self, ParsedRecipeDraft};

/// Reduces HTML to its visible text, one block per line, then parses it.
pub fn process(html: &str) -> ParsedRecipeDraft {
    let text = html_to_text(html);
    debug!("Extracted {} lines of text from HTML", text.lines().count());
    importer::parse(&text)
}

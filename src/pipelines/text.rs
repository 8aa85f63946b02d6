use log::debug;

use crate::importer::{self, ParsedRecipeDraft};

/// Parses pasted plain text.
pub fn process(text: &str) -> ParsedRecipeDraft {
    debug!("Importing {} bytes of plain text", text.len());
    importer::parse(text)
}

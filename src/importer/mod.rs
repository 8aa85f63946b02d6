//! Heuristic importer for pasted recipe text.
//!
//! Turns an arbitrary block of text, typically copied from a cooking website
//! together with its navigation chrome, into a [`ParsedRecipeDraft`]. The
//! importer is total: it never fails and always hands back usable text.
//!
//! The work happens in four passes over the trimmed lines:
//!
//! 1. web page noise (bylines, dates, share counters, ...) is dropped,
//! 2. [`strict_parse`] walks the lines through the section state machine,
//! 3. [`loose_fallback_parse`] runs when the structured pass found neither
//!    ingredients nor instructions,
//! 4. the draft is assembled, falling back to the raw input for the
//!    instructions so pasted text is never lost.

mod loose;
pub(crate) mod rules;
mod section;
mod strict;

use log::debug;
use serde::{Deserialize, Serialize};

pub use self::loose::{loose_fallback_parse, LooseOutcome};
pub use self::section::Section;
pub use self::strict::{strict_parse, StrictOutcome};

/// Title used when nothing in the text looks like one.
pub const DEFAULT_TITLE: &str = "Nový recept";

/// Structured result of importing pasted text, before any user edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRecipeDraft {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// One "• "-prefixed line per ingredient, may be empty.
    pub ingredients: String,
    pub instructions: String,
}

/// Splits the input into trimmed lines and drops blank lines and web page
/// noise. The result feeds both parsing passes.
pub fn clean_lines(raw_text: &str) -> Vec<&str> {
    raw_text
        .split('\n')
        // a byte order mark sticks to the first line of pasted files
        .map(|line| line.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}'))
        .filter(|line| !rules::is_noise(line))
        .collect()
}

/// Parses pasted recipe text into a draft.
///
/// # Example
/// ```
/// use recipe_box::importer::parse;
///
/// let draft = parse("Palacinky\n\nIngrediencie:\n- 3 vajcia\n\nPostup:\n1. Zmiešaj");
/// assert_eq!(draft.title, "Palacinky");
/// assert_eq!(draft.ingredients, "• 3 vajcia");
/// assert_eq!(draft.instructions, "1. Zmiešaj");
/// ```
pub fn parse(raw_text: &str) -> ParsedRecipeDraft {
    let lines = clean_lines(raw_text);
    let strict = strict_parse(&lines);

    let (ingredients, instructions) = if strict.is_empty() {
        debug!("No sections detected, falling back to loose parsing");
        let loose = loose_fallback_parse(&lines);
        (loose.ingredients, loose.instructions)
    } else {
        (strict.ingredients, strict.instructions)
    };

    let title = strict
        .title
        .or(strict.title_candidate)
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let instructions = if instructions.is_empty() {
        debug!("No instructions detected, keeping the raw text");
        raw_text.to_string()
    } else {
        instructions.join("\n")
    };

    debug!("Recipe title: {}", title);
    debug!("Ingredients count: {}", ingredients.len());

    ParsedRecipeDraft {
        title,
        description: strict.description,
        ingredients: ingredients.join("\n"),
        instructions,
    }
}

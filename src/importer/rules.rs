//! Vocabularies and compiled patterns used by the recipe text importer.
//!
//! Every table is a plain constant so a locale can be extended by adding
//! entries; the regexes below are compiled once from these tables.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder, RegexSet, RegexSetBuilder};

use super::section::Section;

/// Canonical bullet prefix of an ingredient line.
pub const BULLET: &str = "• ";

/// Checkbox glyph used by recipe card plugins in front of each ingredient.
pub const CHECKBOX: &str = "▢";

/// Leading glyphs that mark a list item. Longer entries come first so
/// "▪︎" loses its variation selector together with the square.
pub const BULLET_GLYPHS: &[&str] = &["▪\u{FE0E}", "-", "•", "*", "▪", "◦", "▢"];

/// Lines that are web page chrome rather than recipe content.
pub const NOISE_PATTERNS: &[&str] = &[
    r"^(?:by|published|updated|share|jump to(?: recipe)?|recipe|video|print(?: recipe)?|cook mode|tap or hover to scale|cups?|metric)$",
    // bylines and date stamps: "By Jane Doe", "Published March 3, 2021"
    r"^(?:by|published|updated)(?:\s|:)",
    r"^(?:prevent screen|author:|prep:|cook:|servings:)",
    r"^[0-9]+\s+(?:comments?|shares?)$",
    DATE_TOKEN_PATTERN,
];

/// "12 Mar", "3 october 2021", ...
pub const DATE_TOKEN_PATTERN: &str = r"^[0-9]{1,2}\s+(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)";

/// Whole-line headings that open the ingredient list.
pub const INGREDIENT_HEADINGS: &[&str] = &["ingredients", "ingrediencie", "suroviny", "potrebujeme"];

/// Phrases that open the ingredient list wherever they occur in a line.
pub const INGREDIENT_HEADING_PHRASES: &[&str] = &["ingredients:", "suroviny:"];

/// Whole-line headings that open the instructions.
pub const INSTRUCTION_HEADINGS: &[&str] = &[
    "instructions",
    "postup",
    "príprava",
    "návod",
    "directions",
    "method",
];

/// Phrases that open the instructions wherever they occur in a line.
pub const INSTRUCTION_HEADING_PHRASES: &[&str] = &["instructions:", "postup:"];

/// Words that keep a line out of the ingredient fallback rule.
pub const INSTRUCTION_KEYWORDS: &[&str] = &["postup", "príprava", "instructions"];

/// Units recognised after a quantity inside the ingredient section.
pub const UNIT_TOKENS: &[&str] = &[
    "g", "kg", "ml", "l", "ks", "cup", "cups", "tbsp", "tsp", "oz", "lb", "lyžic", "lyžíc",
    "hrnček", "hrnčeky", "špetk",
];

/// Units recognised by the loose fallback pass.
pub const LOOSE_UNIT_TOKENS: &[&str] = &[
    "g", "kg", "ml", "l", "ks", "cup", "cups", "tbsp", "tsp", "oz", "lb", "lyžic", "hrnček",
];

static NOISE: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSetBuilder::new(NOISE_PATTERNS)
        .case_insensitive(true)
        .build()
        .expect("invalid noise pattern")
});

static DATE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(DATE_TOKEN_PATTERN)
        .case_insensitive(true)
        .build()
        .expect("invalid date pattern")
});

static UNIT_QUANTITY: LazyLock<Regex> = LazyLock::new(|| unit_quantity_regex(UNIT_TOKENS));

static LOOSE_UNIT_QUANTITY: LazyLock<Regex> =
    LazyLock::new(|| unit_quantity_regex(LOOSE_UNIT_TOKENS));

static NUMBERED_STEP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+[.)]\s*[A-Z]").expect("invalid step pattern"));

static STEP_NUMBER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.\s*").expect("invalid step prefix pattern"));

fn unit_quantity_regex(units: &[&str]) -> Regex {
    let alternation = units
        .iter()
        .map(|unit| regex::escape(unit))
        .collect::<Vec<_>>()
        .join("|");
    RegexBuilder::new(&format!(r"[0-9]+\s*(?:{alternation})"))
        .case_insensitive(true)
        .build()
        .expect("invalid unit pattern")
}

/// Blank lines and web page chrome.
pub fn is_noise(line: &str) -> bool {
    line.is_empty() || NOISE.is_match(line)
}

pub fn is_date_token(line: &str) -> bool {
    DATE_TOKEN.is_match(line)
}

/// Section opened by a heading line, if `lower` (a lowercased line) is one.
pub fn heading_section(lower: &str) -> Option<Section> {
    let word = lower.strip_suffix(':').unwrap_or(lower).trim_end();

    if INGREDIENT_HEADINGS.contains(&word)
        || INGREDIENT_HEADING_PHRASES.iter().any(|p| lower.contains(p))
    {
        return Some(Section::Ingredients);
    }

    if INSTRUCTION_HEADINGS.contains(&word)
        || INSTRUCTION_HEADING_PHRASES.iter().any(|p| lower.contains(p))
    {
        return Some(Section::Instructions);
    }

    None
}

pub fn mentions_instruction_keyword(lower: &str) -> bool {
    INSTRUCTION_KEYWORDS.iter().any(|k| lower.contains(k))
}

pub fn has_unit_quantity(line: &str) -> bool {
    UNIT_QUANTITY.is_match(line)
}

pub fn has_loose_unit_quantity(line: &str) -> bool {
    LOOSE_UNIT_QUANTITY.is_match(line)
}

pub fn starts_with_bullet(line: &str) -> bool {
    BULLET_GLYPHS.iter().any(|g| line.starts_with(g))
}

pub fn starts_with_digit(line: &str) -> bool {
    line.starts_with(|c: char| c.is_ascii_digit())
}

/// Removes one leading list glyph and the whitespace after it.
pub fn strip_bullet(line: &str) -> &str {
    BULLET_GLYPHS
        .iter()
        .find_map(|g| line.strip_prefix(g))
        .map(str::trim_start)
        .unwrap_or(line)
}

/// "3. Bake" -> "Bake". Only the dotted form is stripped.
pub fn strip_step_number(line: &str) -> &str {
    match STEP_NUMBER_PREFIX.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

/// A numbered step that starts with a capital letter: "1. Preheat", "2) Mix".
pub fn is_numbered_step(line: &str) -> bool {
    NUMBERED_STEP.is_match(line)
}

pub fn bullet(text: &str) -> String {
    format!("{BULLET}{text}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noise_exact_labels() {
        for line in [
            "By", "published", "Share", "Jump to", "Jump to Recipe", "Recipe", "Print", "CUPS",
            "Metric",
        ] {
            assert!(is_noise(line), "{line} should be noise");
        }
        assert!(is_noise(""));
        assert!(!is_noise("Recipe notes for the weekend"));
    }

    #[test]
    fn test_noise_prefixes() {
        assert!(is_noise("By Jane Doe"));
        assert!(is_noise("Published March 3, 2021"));
        assert!(is_noise("Updated: 2024-01-01"));
        assert!(is_noise("Prevent screen from going dark"));
        assert!(is_noise("Author: Jane"));
        assert!(is_noise("Prep: 10 mins"));
        assert!(is_noise("Servings: 4"));
        assert!(!is_noise("Bypass the oven and grill instead"));
    }

    #[test]
    fn test_noise_counts_and_dates() {
        assert!(is_noise("12 comments"));
        assert!(is_noise("1 share"));
        assert!(is_noise("3 March 2021"));
        assert!(!is_noise("14 okt"));
        assert!(!is_noise("12 comments on this"));
    }

    #[test]
    fn test_heading_section() {
        assert_eq!(heading_section("ingredients"), Some(Section::Ingredients));
        assert_eq!(heading_section("ingrediencie:"), Some(Section::Ingredients));
        assert_eq!(heading_section("main ingredients:"), Some(Section::Ingredients));
        assert_eq!(heading_section("suroviny:"), Some(Section::Ingredients));
        assert_eq!(heading_section("postup:"), Some(Section::Instructions));
        assert_eq!(heading_section("príprava"), Some(Section::Instructions));
        assert_eq!(heading_section("method"), Some(Section::Instructions));
        assert_eq!(heading_section("methods of cooking"), None);
        assert_eq!(heading_section("2 cups flour"), None);
    }

    #[test]
    fn test_unit_quantity() {
        assert!(has_unit_quantity("200g cukru"));
        assert!(has_unit_quantity("2 hrnčeky múky"));
        assert!(has_unit_quantity("1 TBSP butter"));
        assert!(has_unit_quantity("2 lyžíce oleja"));
        assert!(has_unit_quantity("štipka soli, 1 špetka"));
        assert!(!has_unit_quantity("3 vajcia"));
        assert!(!has_unit_quantity("Bake at 180C"));

        assert!(has_loose_unit_quantity("250ml milk"));
        assert!(!has_loose_unit_quantity("3 vajcia"));
    }

    #[test]
    fn test_strip_bullet() {
        assert_eq!(strip_bullet("- 2 eggs"), "2 eggs");
        assert_eq!(strip_bullet("• 2 eggs"), "2 eggs");
        assert_eq!(strip_bullet("▪\u{FE0E} salt"), "salt");
        assert_eq!(strip_bullet("▢ 200g cukru"), "200g cukru");
        assert_eq!(strip_bullet("2 eggs"), "2 eggs");
    }

    #[test]
    fn test_numbered_steps() {
        assert!(is_numbered_step("1. Preheat oven"));
        assert!(is_numbered_step("12) Serve"));
        assert!(!is_numbered_step("1. preheat oven"));
        assert!(!is_numbered_step("250ml milk"));
        assert_eq!(strip_step_number("3. Add 200g flour"), "Add 200g flour");
        assert_eq!(strip_step_number("3) Add"), "3) Add");
    }
}

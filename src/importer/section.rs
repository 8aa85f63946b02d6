//! Section state machine of the structured pass.
//!
//! The scan starts in [`Section::None`]. The first heading (or checkbox
//! line) moves it into a content section and it never returns to `None`;
//! later headings only switch between ingredients and instructions.

use serde::Serialize;

use super::rules;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    #[default]
    None,
    Ingredients,
    Instructions,
}

/// What a single line contributes to the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emission {
    /// A section heading, consumed as a control signal.
    Heading,
    Title(String),
    /// A short line that becomes the title only if no proper title shows up.
    TitleCandidate(String),
    Description(String),
    /// A bullet-normalized ingredient line.
    Ingredient(String),
    Instruction(String),
    Skip,
}

/// What the scan has seen so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanState {
    pub section: Section,
    pub has_title: bool,
    pub has_description: bool,
    /// Lines seen before the first heading or checkbox line.
    pub preamble_lines: usize,
}

impl ScanState {
    /// Folds an emission produced by [`step`] back into the state.
    pub fn advance(&mut self, section: Section, emission: &Emission) {
        if self.section == Section::None && section == Section::None {
            self.preamble_lines += 1;
        }
        self.section = section;
        match emission {
            Emission::Title(_) => self.has_title = true,
            Emission::Description(_) => self.has_description = true,
            _ => {}
        }
    }
}

/// Transition function: classifies one cleaned line given the scan state.
pub fn step(state: &ScanState, line: &str) -> (Section, Emission) {
    let lower = line.to_lowercase();

    if let Some(next) = rules::heading_section(&lower) {
        return (next, Emission::Heading);
    }

    if line.contains(rules::CHECKBOX) {
        let rest = line
            .strip_prefix(rules::CHECKBOX)
            .unwrap_or(line)
            .trim();
        let emission = if rest.is_empty() {
            Emission::Skip
        } else {
            Emission::Ingredient(rules::bullet(rest))
        };
        return (Section::Ingredients, emission);
    }

    let emission = match state.section {
        Section::None => preamble_line(state, line, &lower),
        Section::Ingredients => ingredient_line(line, &lower),
        Section::Instructions => instruction_line(line, &lower),
    };
    (state.section, emission)
}

/// Title, short title candidate and description live before any heading.
/// Only the very first line can be a short title candidate.
fn preamble_line(state: &ScanState, line: &str, lower: &str) -> Emission {
    if !state.has_title {
        if looks_like_title(line, lower) {
            return Emission::Title(line.to_string());
        }
        if state.preamble_lines == 0 && is_short_title_candidate(line, lower) {
            return Emission::TitleCandidate(line.to_string());
        }
        return Emission::Skip;
    }

    if !state.has_description && looks_like_description(line, lower) {
        return Emission::Description(line.to_string());
    }

    Emission::Skip
}

fn ingredient_line(line: &str, lower: &str) -> Emission {
    if rules::starts_with_digit(line)
        || rules::starts_with_bullet(line)
        || rules::has_unit_quantity(line)
    {
        let rest = rules::strip_bullet(line).trim();
        if rest.chars().count() > 2 {
            return Emission::Ingredient(rules::bullet(rest));
        }
        return Emission::Skip;
    }

    // Anything substantial inside the ingredient section is kept. This
    // over-captures prose between the list and a missing heading.
    if line.chars().count() > 3 && !rules::mentions_instruction_keyword(lower) {
        return Emission::Ingredient(rules::bullet(line));
    }

    Emission::Skip
}

fn instruction_line(line: &str, lower: &str) -> Emission {
    if lower.contains("cook mode") || lower.contains("prevent screen") {
        return Emission::Skip;
    }
    Emission::Instruction(line.to_string())
}

fn is_byline(lower: &str) -> bool {
    lower.starts_with("by ") || lower.starts_with("author:")
}

pub fn looks_like_title(line: &str, lower: &str) -> bool {
    let len = line.chars().count();
    len > 10 && len < 150 && !is_byline(lower) && !rules::is_date_token(line)
}

fn is_short_title_candidate(line: &str, lower: &str) -> bool {
    let len = line.chars().count();
    (3..=10).contains(&len)
        && !rules::starts_with_digit(line)
        && !rules::starts_with_bullet(line)
        && !is_byline(lower)
        && !rules::is_date_token(line)
}

fn looks_like_description(line: &str, lower: &str) -> bool {
    let len = line.chars().count();
    len > 30 && len < 500 && !lower.contains("author") && !lower.contains("published")
}

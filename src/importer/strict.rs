use log::debug;

use super::section::{step, Emission, ScanState, Section};

/// Everything the structured pass recovered from the cleaned lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrictOutcome {
    pub title: Option<String>,
    /// Short first line, kept only when a heading follows it directly.
    pub title_candidate: Option<String>,
    pub description: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    /// Section the scan ended in.
    pub section: Section,
}

impl StrictOutcome {
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty() && self.instructions.is_empty()
    }
}

/// Heading-driven pass: a single left-to-right scan through the section
/// state machine.
pub fn strict_parse(lines: &[&str]) -> StrictOutcome {
    let mut state = ScanState::default();
    let mut outcome = StrictOutcome::default();
    let mut candidate = None;

    for line in lines {
        let (section, emission) = step(&state, line);
        if section != state.section {
            debug!("Section {:?} -> {:?} at {:?}", state.section, section, line);
        }
        if state.section == Section::None
            && emission == Emission::Heading
            && state.preamble_lines == 1
        {
            outcome.title_candidate = candidate.take();
        }
        state.advance(section, &emission);

        match emission {
            Emission::Title(title) => outcome.title = Some(title),
            Emission::TitleCandidate(title) => candidate = Some(title),
            Emission::Description(description) => outcome.description = Some(description),
            Emission::Ingredient(ingredient) => outcome.ingredients.push(ingredient),
            Emission::Instruction(instruction) => outcome.instructions.push(instruction),
            Emission::Heading | Emission::Skip => {}
        }
    }

    outcome.section = state.section;
    outcome
}

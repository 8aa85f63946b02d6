use super::rules;

/// Signal recovered from text that has no usable headings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LooseOutcome {
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

/// Pattern-matching pass over the same cleaned lines as the structured
/// pass: numbered steps become instructions; lines carrying a quantity with
/// a unit, or a list glyph, become ingredients.
pub fn loose_fallback_parse(lines: &[&str]) -> LooseOutcome {
    let mut outcome = LooseOutcome::default();

    outcome.instructions = lines
        .iter()
        .filter(|line| rules::is_numbered_step(line))
        .map(|line| line.to_string())
        .collect();

    for line in lines {
        let candidate = rules::has_loose_unit_quantity(line)
            || rules::starts_with_bullet(line)
            || line.contains(rules::CHECKBOX);
        if !candidate {
            continue;
        }

        let cleaned = rules::strip_step_number(rules::strip_bullet(line)).trim();
        if cleaned.chars().count() <= 2 {
            continue;
        }

        let ingredient = rules::bullet(cleaned);
        if !outcome.ingredients.contains(&ingredient) {
            outcome.ingredients.push(ingredient);
        }
    }

    outcome
}

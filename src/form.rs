//! Editable recipe fields and the glue between the importer and the store.
//!
//! A form is filled either by hand, from an existing [`Recipe`] or from a
//! [`ParsedRecipeDraft`] produced by pasting text; on submit the ingredient
//! block is normalized and the form becomes a store payload.

use std::sync::LazyLock;

use log::info;
use regex::Regex;
use thiserror::Error;

use crate::importer::{self, ParsedRecipeDraft};
use crate::model::{NewRecipe, Recipe, RecipeUpdate};

/// Longest accepted recipe title, in characters.
pub const MAX_TITLE_LEN: usize = 100;

static LEADING_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*-\s*").expect("invalid dash pattern"));

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Pasted text is empty")]
    EmptyPaste,

    #[error("Recipe title is required")]
    MissingTitle,

    #[error("Recipe title is too long ({0} characters, at most 100)")]
    TitleTooLong(usize),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeForm {
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: Vec<String>,
    pub tags: Vec<String>,
    pub ingredients: String,
    pub instructions: String,
}

impl RecipeForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefills the form for editing a stored recipe.
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            title: recipe.title.clone(),
            description: recipe.description.clone().unwrap_or_default(),
            image: recipe.image.clone().unwrap_or_default(),
            category: recipe.category.clone(),
            tags: recipe.tags.clone(),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
        }
    }

    /// Copies the parts of a draft that carry content over the current fields.
    pub fn apply_draft(&mut self, draft: &ParsedRecipeDraft) {
        if !draft.title.is_empty() {
            self.title = draft.title.clone();
        }
        if let Some(description) = &draft.description {
            self.description = description.clone();
        }
        if !draft.ingredients.is_empty() {
            self.ingredients = draft.ingredients.clone();
        }
        if !draft.instructions.is_empty() {
            self.instructions = draft.instructions.clone();
        }
    }

    /// Runs the importer on pasted text and merges the result.
    pub fn apply_pasted_text(&mut self, text: &str) -> Result<ParsedRecipeDraft, FormError> {
        if text.trim().is_empty() {
            return Err(FormError::EmptyPaste);
        }

        let draft = importer::parse(text);
        info!("Imported pasted text as \"{}\"", draft.title);
        self.apply_draft(&draft);
        Ok(draft)
    }

    pub fn validate(&self) -> Result<(), FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::MissingTitle);
        }
        let len = title.chars().count();
        if len > MAX_TITLE_LEN {
            return Err(FormError::TitleTooLong(len));
        }
        Ok(())
    }

    /// Adds a category unless blank or already present.
    pub fn add_category(&mut self, category: &str) -> bool {
        push_unique(&mut self.category, category.trim().to_string())
    }

    /// Adds a tag (lowercased) unless blank or already present.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        push_unique(&mut self.tags, tag.trim().to_lowercase())
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    pub fn toggle_category(&mut self, category: &str) {
        if self.category.iter().any(|c| c == category) {
            self.category.retain(|c| c != category);
        } else {
            self.add_category(category);
        }
    }

    pub fn into_new_recipe(self) -> Result<NewRecipe, FormError> {
        self.validate()?;
        Ok(NewRecipe {
            title: self.title.trim().to_string(),
            description: non_empty(self.description),
            image: non_empty(self.image),
            category: self.category,
            tags: self.tags,
            ingredients: normalize_ingredient_bullets(&self.ingredients),
            instructions: self.instructions,
        })
    }

    /// Full update of every field, as saving an edited form does.
    pub fn into_update(self) -> Result<RecipeUpdate, FormError> {
        let recipe = self.into_new_recipe()?;
        Ok(RecipeUpdate {
            title: Some(recipe.title),
            description: Some(recipe.description),
            image: Some(recipe.image),
            category: Some(recipe.category),
            tags: Some(recipe.tags),
            ingredients: Some(recipe.ingredients),
            instructions: Some(recipe.instructions),
        })
    }
}

/// Rewrites a dash at the start of each line (after optional whitespace)
/// to the bullet marker.
pub fn normalize_ingredient_bullets(text: &str) -> String {
    text.split('\n')
        .map(|line| LEADING_DASH.replace(line, importer::rules::BULLET))
        .collect::<Vec<_>>()
        .join("\n")
}

fn push_unique(values: &mut Vec<String>, value: String) -> bool {
    if value.is_empty() || values.contains(&value) {
        return false;
    }
    values.push(value);
    true
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

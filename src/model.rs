use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::RecipeBoxError;

/// Tags offered by default when tagging a recipe.
pub const DEFAULT_TAGS: &[&str] = &[
    "vegan",
    "veggie",
    "meat",
    "fish",
    "gluten-free",
    "dairy-free",
    "quick",
    "healthy",
    "traditional",
    "dessert",
];

/// A stored recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Older data files store a single category string.
    #[serde(default, deserialize_with = "deserialize_categories")]
    pub category: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Bullet lines. Older data files store a list of structured ingredients.
    #[serde(default, deserialize_with = "deserialize_ingredients")]
    pub ingredients: String,
    #[serde(default)]
    pub instructions: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    /// Ingredient lines without their list glyph, blank lines skipped.
    pub fn ingredient_items(&self) -> impl Iterator<Item = &str> {
        self.ingredients
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.strip_prefix(['•', '-', '*'])
                    .map(str::trim_start)
                    .unwrap_or(line)
            })
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.category.iter().any(|c| c == category)
    }
}

/// Payload for creating a recipe; the store assigns id and timestamps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewRecipe {
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category: Vec<String>,
    pub tags: Vec<String>,
    pub ingredients: String,
    pub instructions: String,
}

/// Partial update; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeUpdate {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub image: Option<Option<String>>,
    pub category: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
}

impl RecipeUpdate {
    pub fn apply_to(self, recipe: &mut Recipe) {
        if let Some(title) = self.title {
            recipe.title = title;
        }
        if let Some(description) = self.description {
            recipe.description = description;
        }
        if let Some(image) = self.image {
            recipe.image = image;
        }
        if let Some(category) = self.category {
            recipe.category = category;
        }
        if let Some(tags) = self.tags {
            recipe.tags = tags;
        }
        if let Some(ingredients) = self.ingredients {
            recipe.ingredients = ingredients;
        }
        if let Some(instructions) = self.instructions {
            recipe.instructions = instructions;
        }
    }
}

/// Criteria for listing recipes. All given criteria must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilters {
    pub category: Option<String>,
    /// Matches recipes carrying any of these tags.
    pub tags: Vec<String>,
    /// Case-insensitive text searched in title, description and ingredients.
    pub search: Option<String>,
}

impl RecipeFilters {
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if let Some(category) = &self.category {
            if !recipe.has_category(category) {
                return false;
            }
        }

        if !self.tags.is_empty() && !self.tags.iter().any(|t| recipe.tags.contains(t)) {
            return false;
        }

        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let in_title = recipe.title.to_lowercase().contains(&needle);
            let in_description = recipe
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(&needle));
            let in_ingredients = recipe.ingredients.to_lowercase().contains(&needle);
            if !(in_title || in_description || in_ingredients) {
                return false;
            }
        }

        true
    }
}

/// Built-in recipe categories. Custom categories are plain strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeCategory {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    Dessert,
}

impl RecipeCategory {
    pub const ALL: [RecipeCategory; 5] = [
        RecipeCategory::Breakfast,
        RecipeCategory::Lunch,
        RecipeCategory::Dinner,
        RecipeCategory::Snack,
        RecipeCategory::Dessert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeCategory::Breakfast => "breakfast",
            RecipeCategory::Lunch => "lunch",
            RecipeCategory::Dinner => "dinner",
            RecipeCategory::Snack => "snack",
            RecipeCategory::Dessert => "dessert",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            RecipeCategory::Breakfast => "Raňajky",
            RecipeCategory::Lunch => "Obed",
            RecipeCategory::Dinner => "Večera",
            RecipeCategory::Snack => "Desiata",
            RecipeCategory::Dessert => "Dezert",
        }
    }
}

impl fmt::Display for RecipeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecipeCategory {
    type Err = RecipeBoxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecipeCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RecipeBoxError::InvalidArgument(format!("unknown category: {s}")))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CategoryField {
    One(String),
    Many(Vec<String>),
}

fn deserialize_categories<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match CategoryField::deserialize(deserializer)? {
        CategoryField::One(category) if category.is_empty() => Vec::new(),
        CategoryField::One(category) => vec![category],
        CategoryField::Many(categories) => categories,
    })
}

/// Structured ingredient of older data files.
#[derive(Debug, Deserialize)]
struct LegacyIngredient {
    name: String,
    #[serde(default)]
    amount: Option<f64>,
    #[serde(default)]
    unit: Option<String>,
    #[serde(default)]
    note: Option<String>,
}

impl LegacyIngredient {
    fn to_bullet_line(&self) -> String {
        let mut parts = Vec::new();
        match (self.amount, self.unit.as_deref()) {
            (Some(amount), Some(unit)) if amount != 0.0 && !unit.is_empty() => {
                parts.push(format!("{amount} {unit}"));
            }
            _ => {}
        }
        parts.push(self.name.clone());
        if let Some(note) = self.note.as_deref().filter(|n| !n.is_empty()) {
            parts.push(format!("({note})"));
        }
        format!("• {}", parts.join(" "))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IngredientsField {
    Text(String),
    Legacy(Vec<LegacyIngredient>),
}

fn deserialize_ingredients<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match IngredientsField::deserialize(deserializer)? {
        IngredientsField::Text(text) => text,
        IngredientsField::Legacy(items) => items
            .iter()
            .map(LegacyIngredient::to_bullet_line)
            .collect::<Vec<_>>()
            .join("\n"),
    })
}

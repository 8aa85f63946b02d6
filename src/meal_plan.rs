//! Weekly meal plan: seven days with four meal slots each, a shopping list
//! derived from the planned recipes and a plain-text export.

use std::fmt;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::str::FromStr;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::error::{RecipeBoxError, Result};
use crate::model::Recipe;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Monday => "Pondelok",
            Weekday::Tuesday => "Utorok",
            Weekday::Wednesday => "Streda",
            Weekday::Thursday => "Štvrtok",
            Weekday::Friday => "Piatok",
            Weekday::Saturday => "Sobota",
            Weekday::Sunday => "Nedeľa",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = RecipeBoxError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Weekday::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RecipeBoxError::InvalidArgument(format!("unknown day: {s}")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Raňajky",
            MealType::Lunch => "Obed",
            MealType::Dinner => "Večera",
            MealType::Snack => "Desiata",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            MealType::Breakfast => "🌅",
            MealType::Lunch => "🍽️",
            MealType::Dinner => "🌙",
            MealType::Snack => "🍪",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = RecipeBoxError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        MealType::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RecipeBoxError::InvalidArgument(format!("unknown meal: {s}")))
    }
}

/// A recipe planned into a slot. The name is kept so the plan stays
/// readable after the recipe is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub recipe_id: String,
    pub recipe_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<Meal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch: Option<Meal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dinner: Option<Meal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snack: Option<Meal>,
}

impl DayPlan {
    pub fn slot(&self, meal_type: MealType) -> Option<&Meal> {
        match meal_type {
            MealType::Breakfast => self.breakfast.as_ref(),
            MealType::Lunch => self.lunch.as_ref(),
            MealType::Dinner => self.dinner.as_ref(),
            MealType::Snack => self.snack.as_ref(),
        }
    }

    fn slot_mut(&mut self, meal_type: MealType) -> &mut Option<Meal> {
        match meal_type {
            MealType::Breakfast => &mut self.breakfast,
            MealType::Lunch => &mut self.lunch,
            MealType::Dinner => &mut self.dinner,
            MealType::Snack => &mut self.snack,
        }
    }

    pub fn is_empty(&self) -> bool {
        MealType::ALL.iter().all(|m| self.slot(*m).is_none())
    }

    /// Filled slots in breakfast, lunch, dinner, snack order.
    pub fn meals(&self) -> impl Iterator<Item = (MealType, &Meal)> {
        MealType::ALL
            .into_iter()
            .filter_map(move |m| self.slot(m).map(|meal| (m, meal)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPlan {
    #[serde(default)]
    pub monday: DayPlan,
    #[serde(default)]
    pub tuesday: DayPlan,
    #[serde(default)]
    pub wednesday: DayPlan,
    #[serde(default)]
    pub thursday: DayPlan,
    #[serde(default)]
    pub friday: DayPlan,
    #[serde(default)]
    pub saturday: DayPlan,
    #[serde(default)]
    pub sunday: DayPlan,
}

impl WeekPlan {
    pub fn day(&self, day: Weekday) -> &DayPlan {
        match day {
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
            Weekday::Saturday => &self.saturday,
            Weekday::Sunday => &self.sunday,
        }
    }

    fn day_mut(&mut self, day: Weekday) -> &mut DayPlan {
        match day {
            Weekday::Monday => &mut self.monday,
            Weekday::Tuesday => &mut self.tuesday,
            Weekday::Wednesday => &mut self.wednesday,
            Weekday::Thursday => &mut self.thursday,
            Weekday::Friday => &mut self.friday,
            Weekday::Saturday => &mut self.saturday,
            Weekday::Sunday => &mut self.sunday,
        }
    }

    pub fn assign(&mut self, day: Weekday, meal_type: MealType, recipe: &Recipe) {
        *self.day_mut(day).slot_mut(meal_type) = Some(Meal {
            recipe_id: recipe.id.clone(),
            recipe_name: recipe.title.clone(),
        });
    }

    /// Empties a slot, returning what was planned there.
    pub fn remove(&mut self, day: Weekday, meal_type: MealType) -> Option<Meal> {
        self.day_mut(day).slot_mut(meal_type).take()
    }

    pub fn clear(&mut self) {
        *self = WeekPlan::default();
    }

    /// Every filled slot in day and meal order.
    pub fn meals(&self) -> impl Iterator<Item = (Weekday, MealType, &Meal)> {
        Weekday::ALL.into_iter().flat_map(move |day| {
            self.day(day)
                .meals()
                .map(move |(meal_type, meal)| (day, meal_type, meal))
        })
    }

    /// Ingredients of all planned recipes, without list glyphs, in plan
    /// order, each listed once. Recipes that no longer exist are skipped.
    pub fn shopping_list(&self, recipes: &[Recipe]) -> Vec<String> {
        let mut items: Vec<String> = Vec::new();

        for (_, _, meal) in self.meals() {
            let Some(recipe) = recipes.iter().find(|r| r.id == meal.recipe_id) else {
                debug!("Planned recipe {} no longer exists", meal.recipe_id);
                continue;
            };
            for item in recipe.ingredient_items() {
                if !items.iter().any(|i| i == item) {
                    items.push(item.to_string());
                }
            }
        }

        items
    }

    /// Plain-text rendering of the plan and its shopping list, ready to be
    /// pasted into a notes app.
    pub fn export_text(&self, recipes: &[Recipe]) -> String {
        let mut text = String::from("📅 TÝŽDENNÝ PLÁN JEDÁL\n\n");

        for day in Weekday::ALL {
            let plan = self.day(day);
            if plan.is_empty() {
                continue;
            }
            text.push_str(&format!("{}\n", day.label().to_uppercase()));
            for (meal_type, meal) in plan.meals() {
                text.push_str(&format!(
                    "  {} {}: {}\n",
                    meal_type.icon(),
                    meal_type.label(),
                    meal.recipe_name
                ));
            }
            text.push('\n');
        }

        let shopping_list = self.shopping_list(recipes);
        if !shopping_list.is_empty() {
            text.push_str("\n🛒 NÁKUPNÝ ZOZNAM\n\n");
            for item in &shopping_list {
                text.push_str(&format!("☐ {}\n", item));
            }
        }

        text.push_str("\n---\nVygenerované v Recipe Box");
        text
    }
}

/// Persists the week plan in a JSON file.
pub struct MealPlanStore {
    path: PathBuf,
}

impl MealPlanStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A missing file is an empty plan. A file that does not parse is an
    /// error and is left as it is.
    pub async fn load(&self) -> Result<WeekPlan> {
        let data = match fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(WeekPlan::default()),
            Err(e) => return Err(e.into()),
        };
        serde_json::from_str(&data).map_err(|e| {
            warn!("Unreadable meal plan {}: {}", self.path.display(), e);
            e.into()
        })
    }

    pub async fn save(&self, plan: &WeekPlan) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(plan)?).await?;
        info!("Saved meal plan to {}", self.path.display());
        Ok(())
    }
}

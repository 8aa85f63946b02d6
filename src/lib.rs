pub mod config;
pub mod error;
pub mod fetch;
pub mod form;
pub mod html_text;
pub mod importer;
pub mod meal_plan;
pub mod model;
pub mod pipelines;
pub mod store;

pub use config::{load_config, AppConfig, FetchConfig};
pub use error::{RecipeBoxError, Result};
pub use form::{FormError, RecipeForm};
pub use importer::{ParsedRecipeDraft, DEFAULT_TITLE};
pub use meal_plan::{MealPlanStore, MealType, WeekPlan, Weekday};
pub use model::{NewRecipe, Recipe, RecipeCategory, RecipeFilters, RecipeUpdate};
pub use pipelines::InputSource;
pub use store::RecipeStore;

/// Parses pasted recipe text into a draft. Never fails.
pub fn parse_recipe_text(text: &str) -> ParsedRecipeDraft {
    pipelines::text::process(text)
}

/// Imports a recipe draft from any supported source.
///
/// Only [`InputSource::Url`] touches the network; text and HTML are parsed
/// in place and cannot fail.
pub async fn import_draft(source: &InputSource, fetch: &FetchConfig) -> Result<ParsedRecipeDraft> {
    match source {
        InputSource::Text(text) => Ok(pipelines::text::process(text)),
        InputSource::Html(html) => Ok(pipelines::html::process(html)),
        InputSource::Url(url) => pipelines::url::process(url, fetch).await,
    }
}

/// Imports a draft, turns it into a form with the given categories and
/// tags, and saves it to the store.
pub async fn import_and_save(
    store: &RecipeStore,
    source: &InputSource,
    fetch: &FetchConfig,
    categories: &[String],
    tags: &[String],
) -> Result<Recipe> {
    let draft = import_draft(source, fetch).await?;

    let mut form = RecipeForm::new();
    form.apply_draft(&draft);
    for category in categories {
        form.add_category(category);
    }
    for tag in tags {
        form.add_tag(tag);
    }

    store.create(form.into_new_recipe()?).await
}

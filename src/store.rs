//! Recipe store persisted as a single pretty-printed JSON array.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Utc;
use log::{debug, info, warn};
use rand::seq::SliceRandom;
use tokio::fs;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::Result;
use crate::model::{NewRecipe, Recipe, RecipeFilters, RecipeUpdate};

pub struct RecipeStore {
    path: PathBuf,
    // serializes read-modify-write cycles on the data file
    lock: Mutex<()>,
}

impl RecipeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file is an empty store. A file that exists but does not
    /// parse is an error, so writers never replace data they could not read.
    async fn read_all(&self) -> Result<Vec<Recipe>> {
        let data = match fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No recipes at {}", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_str(&data)?)
    }

    /// Lenient variant for readers: an unreadable file lists as empty.
    async fn read_lenient(&self) -> Vec<Recipe> {
        self.read_all().await.unwrap_or_else(|e| {
            warn!("Ignoring unreadable recipe file {}: {}", self.path.display(), e);
            Vec::new()
        })
    }

    async fn write_all(&self, recipes: &[Recipe]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(recipes)?;
        fs::write(&self.path, json).await?;
        Ok(())
    }

    pub async fn list(&self, filters: &RecipeFilters) -> Vec<Recipe> {
        let _guard = self.lock.lock().await;
        self.read_lenient()
            .await
            .into_iter()
            .filter(|r| filters.matches(r))
            .collect()
    }

    pub async fn get(&self, id: &str) -> Option<Recipe> {
        let _guard = self.lock.lock().await;
        self.read_lenient().await.into_iter().find(|r| r.id == id)
    }

    pub async fn create(&self, new_recipe: NewRecipe) -> Result<Recipe> {
        let _guard = self.lock.lock().await;
        let mut recipes = self.read_all().await?;

        let now = Utc::now();
        let recipe = Recipe {
            id: Uuid::new_v4().to_string(),
            title: new_recipe.title,
            description: new_recipe.description,
            image: new_recipe.image,
            category: new_recipe.category,
            tags: new_recipe.tags,
            ingredients: new_recipe.ingredients,
            instructions: new_recipe.instructions,
            created_at: now,
            updated_at: now,
        };

        recipes.push(recipe.clone());
        self.write_all(&recipes).await?;
        info!("Created recipe {} ({})", recipe.id, recipe.title);
        Ok(recipe)
    }

    /// Merges `update` into the stored recipe. `Ok(None)` if there is none.
    pub async fn update(&self, id: &str, update: RecipeUpdate) -> Result<Option<Recipe>> {
        let _guard = self.lock.lock().await;
        let mut recipes = self.read_all().await?;

        let Some(recipe) = recipes.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        update.apply_to(recipe);
        recipe.updated_at = Utc::now();
        let updated = recipe.clone();

        self.write_all(&recipes).await?;
        info!("Updated recipe {}", id);
        Ok(Some(updated))
    }

    /// Returns whether a recipe was removed.
    pub async fn delete(&self, id: &str) -> Result<bool> {
        let _guard = self.lock.lock().await;
        let mut recipes = self.read_all().await?;

        let before = recipes.len();
        recipes.retain(|r| r.id != id);
        if recipes.len() == before {
            return Ok(false);
        }

        self.write_all(&recipes).await?;
        info!("Deleted recipe {}", id);
        Ok(true)
    }

    /// Picks a random recipe, avoiding `exclude` whenever another one exists.
    pub async fn random(&self, exclude: Option<&str>) -> Option<Recipe> {
        let recipes = self.list(&RecipeFilters::default()).await;
        let candidates: Vec<&Recipe> = recipes
            .iter()
            .filter(|r| Some(r.id.as_str()) != exclude)
            .collect();

        let mut rng = rand::thread_rng();
        match candidates.choose(&mut rng) {
            Some(recipe) => Some((*recipe).clone()),
            None => recipes.first().cloned(),
        }
    }
}

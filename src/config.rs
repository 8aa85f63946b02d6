use std::path::PathBuf;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Default configuration file name (without extension)
pub const DEFAULT_CONFIG_NAME: &str = "recipe-box";

/// Main application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Recipe store settings
    #[serde(default)]
    pub store: StoreConfig,
    /// Meal plan settings
    #[serde(default)]
    pub meal_plan: MealPlanConfig,
    /// Settings for fetching recipe pages
    #[serde(default)]
    pub fetch: FetchConfig,
}

/// Where recipes are persisted
#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// JSON file holding all recipes
    #[serde(default = "default_store_file")]
    pub data_file: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_file: default_store_file(),
        }
    }
}

/// Where the weekly meal plan is persisted
#[derive(Debug, Deserialize, Clone)]
pub struct MealPlanConfig {
    /// JSON file holding the week plan
    #[serde(default = "default_meal_plan_file")]
    pub data_file: PathBuf,
}

impl Default for MealPlanConfig {
    fn default() -> Self {
        Self {
            data_file: default_meal_plan_file(),
        }
    }
}

/// HTTP settings for importing from a URL
#[derive(Debug, Deserialize, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

// Default value functions
fn default_store_file() -> PathBuf {
    PathBuf::from("data/recipes.json")
}

fn default_meal_plan_file() -> PathBuf {
    PathBuf::from("data/meal_plan.json")
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; RecipeBox/0.3)".to_string()
}

impl AppConfig {
    /// Load configuration from `recipe-box.toml` and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        load_config(DEFAULT_CONFIG_NAME)
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with RECIPE_BOX__ prefix
/// 2. `<name>.toml` file (optional)
/// 3. Default values
///
/// Environment variable format: RECIPE_BOX__STORE__DATA_FILE
pub fn load_config(name: &str) -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name(name).required(false))
        // Use double underscore for nested: RECIPE_BOX__FETCH__TIMEOUT_SECS
        .add_source(
            Environment::with_prefix("RECIPE_BOX")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

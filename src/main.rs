use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{debug, error};

use recipe_box::config::{load_config, DEFAULT_CONFIG_NAME};
use recipe_box::{
    import_and_save, import_draft, AppConfig, InputSource, MealPlanStore, MealType, Recipe,
    RecipeBoxError, RecipeFilters, RecipeStore, Weekday,
};

#[derive(Parser)]
#[command(name = "recipe-box")]
#[command(version, about = "Personal recipe manager", long_about = None)]
struct Cli {
    /// Configuration file name, without the .toml extension
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_NAME)]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse pasted recipe text and print the draft as JSON
    Import {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Import a recipe and save it
    Add {
        #[command(flatten)]
        source: SourceArgs,
        /// Category to file the recipe under (repeatable)
        #[arg(long = "category")]
        categories: Vec<String>,
        /// Tag to attach (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// List saved recipes
    List {
        #[arg(long)]
        category: Option<String>,
        /// Show recipes with any of these tags (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Search title, description and ingredients
        #[arg(long)]
        search: Option<String>,
    },
    /// Print one recipe as JSON
    Show { id: String },
    /// Delete a recipe
    Delete { id: String },
    /// Suggest a random recipe
    Random {
        /// Recipe to avoid, e.g. the one suggested last time
        #[arg(long)]
        exclude: Option<String>,
    },
    /// Weekly meal plan
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Read the recipe from a file instead of stdin
    #[arg(long, conflicts_with = "url")]
    file: Option<PathBuf>,
    /// Fetch the recipe page from a URL
    #[arg(long)]
    url: Option<String>,
    /// Treat the input as HTML
    #[arg(long)]
    html: bool,
}

#[derive(Subcommand)]
enum PlanCommands {
    /// Print the plan as JSON
    Show,
    /// Put a recipe into a slot
    Set {
        day: String,
        meal: String,
        recipe_id: String,
    },
    /// Empty a slot
    Remove { day: String, meal: String },
    /// Empty the whole week
    Clear,
    /// Print the plan with its shopping list as plain text
    Export,
}

impl SourceArgs {
    fn into_source(self) -> Result<InputSource> {
        if let Some(url) = self.url {
            return Ok(InputSource::Url(url));
        }

        let content = match self.file {
            Some(path) => std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
            None => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read stdin")?;
                buffer
            }
        };

        Ok(if self.html {
            InputSource::Html(content)
        } else {
            InputSource::Text(content)
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(&cli.config).context("Failed to load configuration")?;
    debug!("{:#?}", config);

    if let Err(e) = run(cli.command, &config).await {
        error!("{e:#}");
        return Err(e);
    }

    Ok(())
}

async fn run(command: Commands, config: &AppConfig) -> Result<()> {
    let store = RecipeStore::new(&config.store.data_file);

    match command {
        Commands::Import { source } => {
            let draft = import_draft(&source.into_source()?, &config.fetch).await?;
            println!("{}", serde_json::to_string_pretty(&draft)?);
        }
        Commands::Add {
            source,
            categories,
            tags,
        } => {
            let source = source.into_source()?;
            let recipe = import_and_save(&store, &source, &config.fetch, &categories, &tags).await?;
            println!("{}", serde_json::to_string_pretty(&recipe)?);
        }
        Commands::List {
            category,
            tags,
            search,
        } => {
            let filters = RecipeFilters {
                category,
                tags,
                search,
            };
            for recipe in store.list(&filters).await {
                println!("{}\t{}", recipe.id, recipe.title);
            }
        }
        Commands::Show { id } => {
            let recipe = find_recipe(&store, &id).await?;
            println!("{}", serde_json::to_string_pretty(&recipe)?);
        }
        Commands::Delete { id } => {
            if !store.delete(&id).await? {
                return Err(RecipeBoxError::NotFound(id).into());
            }
        }
        Commands::Random { exclude } => match store.random(exclude.as_deref()).await {
            Some(recipe) => println!("{}\t{}", recipe.id, recipe.title),
            None => bail!("No recipes saved yet"),
        },
        Commands::Plan { command } => run_plan(command, config, &store).await?,
    }

    Ok(())
}

async fn run_plan(command: PlanCommands, config: &AppConfig, store: &RecipeStore) -> Result<()> {
    let plans = MealPlanStore::new(&config.meal_plan.data_file);
    let mut plan = plans.load().await?;

    match command {
        PlanCommands::Show => {
            println!("{}", serde_json::to_string_pretty(&plan)?);
            return Ok(());
        }
        PlanCommands::Export => {
            let recipes = store.list(&RecipeFilters::default()).await;
            println!("{}", plan.export_text(&recipes));
            return Ok(());
        }
        PlanCommands::Set {
            day,
            meal,
            recipe_id,
        } => {
            let day: Weekday = day.parse()?;
            let meal: MealType = meal.parse()?;
            let recipe = find_recipe(store, &recipe_id).await?;
            plan.assign(day, meal, &recipe);
            println!("{} added to {} {}", recipe.title, day.label(), meal.label());
        }
        PlanCommands::Remove { day, meal } => {
            plan.remove(day.parse()?, meal.parse()?);
        }
        PlanCommands::Clear => plan.clear(),
    }

    plans.save(&plan).await?;
    Ok(())
}

async fn find_recipe(store: &RecipeStore, id: &str) -> Result<Recipe> {
    let recipe = store
        .get(id)
        .await
        .ok_or_else(|| RecipeBoxError::NotFound(id.to_string()))?;
    Ok(recipe)
}

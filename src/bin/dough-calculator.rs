// ABOUTME: Dough calculator CLI for computing recipe details and scaling stored recipes
// ABOUTME: Loads JSON inputs into in-memory storage and prints results as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Compute baker's percentages and total weight for a new recipe
//! dough-calculator details request.json
//!
//! # Scale a recipe from a JSON catalog to 985 g of dough
//! dough-calculator scale recipes.json --id 3f1c... --weight 985
//!
//! # Report component health
//! dough-calculator health
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dough_calculator::cache::factory::Cache;
use dough_calculator::config::ServerConfig;
use dough_calculator::database::{InMemoryDatabase, RecipeRepository};
use dough_calculator::health::HealthChecker;
use dough_calculator::logging::LoggingConfig;
use dough_calculator::models::{CreateSourdoughRecipeRequest, SourdoughRecipe};
use dough_calculator::services::{RecipeScaleService, SourdoughRecipeService};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "dough-calculator",
    about = "Sourdough recipe calculator",
    long_about = "Computes baker's-percentage details for new recipes and scales stored recipes to a target dough weight."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Build a recipe from a creation request and print it with computed details
    Details {
        /// Path to a JSON recipe creation request
        request: PathBuf,
    },

    /// Scale a recipe from a JSON catalog to a new total dough weight
    Scale {
        /// Path to a JSON array of stored recipes
        catalog: PathBuf,

        /// Recipe id to scale
        #[arg(long)]
        id: Uuid,

        /// Target total dough weight in grams
        #[arg(long)]
        weight: u32,
    },

    /// Report cache and storage health
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ServerConfig::from_env()?;

    let mut logging = LoggingConfig::for_server(&config);
    if cli.verbose {
        logging.level = "debug".to_owned();
    }
    logging.init()?;
    info!("{}", config.summary());

    let database = Arc::new(InMemoryDatabase::new());
    let cache = Arc::new(Cache::new(&config.cache));
    let recipes = Arc::new(SourdoughRecipeService::new(
        database.clone(),
        config.catalog,
    ));

    match cli.command {
        Command::Details { request } => {
            let request: CreateSourdoughRecipeRequest = read_json(&request)?;
            let recipe = recipes.create(request).await?;
            print_json(&recipe)?;
        }
        Command::Scale {
            catalog,
            id,
            weight,
        } => {
            let stored: Vec<SourdoughRecipe> = read_json(&catalog)?;
            for recipe in stored {
                database.create_recipe(recipe).await?;
            }

            let engine = RecipeScaleService::new(recipes, cache);
            let scaled = engine.scale(id, weight).await?;
            print_json(&scaled)?;
        }
        Command::Health => {
            let checker = HealthChecker::new(config.environment, cache, database);
            print_json(&checker.check().await)?;
        }
    }

    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("invalid JSON in {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use inquire::{InquireError, Select, Text};
use weathernow_core::{Config, Dashboard, FileStorage, RecentSearches, provider_from_config};

use crate::render;

const SEARCH_CHOICE: &str = "Search for a city...";
const QUIT_CHOICE: &str = "Quit";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weathernow", version, about = "Terminal weather dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the interactive dashboard (the default).
    Dashboard,

    /// Show weather for a city once and exit.
    Show {
        /// City name, free text.
        city: String,

        /// Print the reading as JSON instead of panels.
        #[arg(long)]
        json: bool,
    },

    /// List remembered recent searches.
    Recent,

    /// Set the city the dashboard opens with.
    Configure {
        /// Start city, e.g. "Oslo".
        city: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command.unwrap_or(Command::Dashboard) {
            Command::Dashboard => run_dashboard().await,
            Command::Show { city, json } => run_show(&city, json).await,
            Command::Recent => run_recent(),
            Command::Configure { city } => run_configure(&city),
        }
    }
}

fn open_dashboard(config: &Config) -> Result<Dashboard> {
    let provider = provider_from_config(config)?;
    let storage = FileStorage::open()?;
    Ok(Dashboard::new(provider, Box::new(storage)))
}

async fn run_dashboard() -> Result<()> {
    let config = Config::load()?;
    let mut dashboard = open_dashboard(&config)?;

    println!("{}", render::title_banner());

    log::info!("starting dashboard with {}", config.start_city());
    dashboard.refresh(config.start_city()).await?;

    loop {
        println!("{}", render::render(dashboard.state()));

        let mut choices = vec![SEARCH_CHOICE.to_string()];
        choices.extend(dashboard.recent().iter().cloned());
        choices.push(QUIT_CHOICE.to_string());

        let picked = match Select::new("Search again or pick a recent city", choices).prompt() {
            Ok(picked) => picked,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(error) => return Err(error.into()),
        };

        if picked == QUIT_CHOICE {
            break;
        }

        if picked == SEARCH_CHOICE {
            match Text::new("Search for a city...").prompt() {
                // Free-text input goes through the trim/empty checks.
                Ok(input) => {
                    dashboard.submit(&input).await?;
                }
                Err(InquireError::OperationCanceled) => {}
                Err(InquireError::OperationInterrupted) => break,
                Err(error) => return Err(error.into()),
            }
        } else {
            // A chip carries a known-valid name; refresh directly.
            dashboard.refresh(&picked).await?;
        }
    }

    Ok(())
}

async fn run_show(city: &str, json: bool) -> Result<()> {
    let config = Config::load()?;
    let mut dashboard = open_dashboard(&config)?;

    if !dashboard.submit(city).await? {
        anyhow::bail!("City name must not be empty");
    }

    if json {
        let reading = dashboard
            .reading()
            .context("No weather reading available")?;
        println!("{}", serde_json::to_string_pretty(reading)?);
        return Ok(());
    }

    println!("{}", render::render(dashboard.state()));
    if let Some(chips) = render::recent_chips(dashboard.recent()) {
        println!("{chips}");
    }

    Ok(())
}

fn run_recent() -> Result<()> {
    let storage = FileStorage::open()?;
    let recent = RecentSearches::load(&storage);

    match render::recent_chips(recent.cities()) {
        Some(chips) => println!("{chips}"),
        None => println!("No recent searches yet."),
    }

    Ok(())
}

fn run_configure(city: &str) -> Result<()> {
    let city = city.trim();
    if city.is_empty() {
        anyhow::bail!("City name must not be empty");
    }

    let mut config = Config::load()?;
    config.set_default_city(city.to_string());
    config.save()?;

    println!("Start city set to {city}");
    Ok(())
}

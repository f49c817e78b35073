use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::Select;
use std::process::ExitCode;
use weather_core::{
    Config, ForecastRecord, WeatherError, WeatherProvider, create_message, fetch,
    provider_from_config, region,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "指定地域の天気と天気概況を表示します.")]
pub struct Cli {
    /// Place name, e.g. "Hokkaido". Defaults to the configured place, then "Tokyo".
    #[arg(short, long)]
    pub place: Option<String>,

    /// Print the forecast record as JSON instead of the text report.
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the supported places and their region codes.
    Places,

    /// Choose the default place interactively and save it to the config file.
    Configure,
}

/// Result of a forecast lookup as the user sees it.
#[derive(Debug)]
pub enum Outcome {
    Report(ForecastRecord),
    UnknownPlace(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Report(_))
    }

    fn exit_code(&self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        }
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match &self.command {
            Some(Command::Places) => {
                for r in region::REGIONS {
                    println!("{:<10} {}", r.place, r.code);
                }
                Ok(ExitCode::SUCCESS)
            }
            Some(Command::Configure) => {
                let mut config = config_or_default(Config::load());
                configure(&mut config)?;
                Ok(ExitCode::SUCCESS)
            }
            None => {
                let config = config_or_default(Config::load());
                let provider = provider_from_config(&config)?;
                let outcome = self.lookup(provider.as_ref(), &config).await?;
                println!("{}", self.render(&outcome)?);
                Ok(outcome.exit_code())
            }
        }
    }

    /// Place requested on the command line, else the configured default.
    pub fn place<'a>(&'a self, config: &'a Config) -> &'a str {
        self.place.as_deref().unwrap_or_else(|| config.default_place())
    }

    /// Fetch the forecast; an unknown place is an outcome, every other failure an error.
    pub async fn lookup(
        &self,
        provider: &dyn WeatherProvider,
        config: &Config,
    ) -> anyhow::Result<Outcome> {
        let place = self.place(config);

        match fetch(provider, place).await {
            Ok(record) => Ok(Outcome::Report(record)),
            Err(WeatherError::UnknownPlace(p)) => Ok(Outcome::UnknownPlace(p)),
            Err(e) => {
                Err(e).with_context(|| format!("Failed to fetch the forecast for {place}"))
            }
        }
    }

    pub fn render(&self, outcome: &Outcome) -> anyhow::Result<String> {
        match outcome {
            Outcome::Report(record) if self.json => {
                serde_json::to_string_pretty(record).context("Failed to serialize forecast")
            }
            Outcome::Report(record) => Ok(create_message(record)),
            Outcome::UnknownPlace(place) => Ok(format!("地名エラー: {place}")),
        }
    }
}

/// A broken config file must not block lookups or `configure`, which rewrites it.
fn config_or_default(loaded: anyhow::Result<Config>) -> Config {
    loaded.unwrap_or_else(|err| {
        tracing::warn!("ignoring unreadable config file: {err:#}");
        Config::default()
    })
}

fn configure(config: &mut Config) -> anyhow::Result<()> {
    let places: Vec<&str> = region::places().collect();
    let current = places
        .iter()
        .position(|p| *p == config.default_place())
        .unwrap_or(0);

    let place = Select::new("Default place:", places)
        .with_starting_cursor(current)
        .prompt()?;

    config.set_default_place(place)?;
    let path = config.save()?;
    println!("Default place set to {place} ({})", path.display());

    Ok(())
}

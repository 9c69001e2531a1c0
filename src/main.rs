//! Football Match Outcome Predictor
//!
//! Terminal front-end for the prediction service.

use clap::{Parser, Subcommand};
use footy_predictor::{
    config::Config,
    service::{Health, PredictorService},
    types::PredictionRequest,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "footy-predictor")]
#[command(about = "Football match outcome prediction service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict the outcome of a match
    Predict {
        /// Home team name (fuzzily matched)
        home_team: String,
        /// Away team name (fuzzily matched)
        away_team: String,
        /// Market odds for a home win
        #[arg(long, default_value_t = 0.0)]
        odds_home: f64,
        /// Market odds for a draw
        #[arg(long, default_value_t = 0.0)]
        odds_draw: f64,
        /// Market odds for an away win
        #[arg(long, default_value_t = 0.0)]
        odds_away: f64,
    },
    /// List known teams
    Teams {
        /// Number of team names to show
        #[arg(short, long, default_value = "50")]
        limit: usize,
    },
    /// Show service status
    Status,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // Load configuration and perform the one-time startup load
    let config = Config::load(&cli.config)?;
    let service = PredictorService::load(&config);

    match cli.command {
        Commands::Predict {
            home_team,
            away_team,
            odds_home,
            odds_draw,
            odds_away,
        } => {
            let request = PredictionRequest {
                home_team,
                away_team,
                odds_home,
                odds_draw,
                odds_away,
            };
            match service.predict(&request) {
                Ok(response) => {
                    println!("{}", serde_json::to_string_pretty(&response)?);
                    Ok(())
                }
                Err(e) => anyhow::bail!("{} (status {})", e, e.status_code()),
            }
        }
        Commands::Teams { limit } => {
            let roster = service
                .roster()
                .map_err(|e| anyhow::anyhow!("{} (status {})", e, e.status_code()))?;
            for name in roster.iter().take(limit) {
                println!("{name}");
            }
            Ok(())
        }
        Commands::Status => {
            match service.health() {
                Health::Ready => println!("ready"),
                Health::Unavailable { reason } => println!("unavailable: {reason}"),
            }
            Ok(())
        }
    }
}

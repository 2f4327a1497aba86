use crate::demo::{run_compare, run_demo, CompareArgs, DemoArgs};
use crate::score::{run_score, ScoreArgs};
use clap::{Parser, Subcommand};
use trustlayer::config::AppConfig;
use trustlayer::error::AppError;
use trustlayer::reputation::ReputationEngine;
use trustlayer::telemetry;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "TrustLayer",
    about = "Score demo wallets and preview the lending terms their reputation unlocks",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the full reputation demo for one selected wallet (default command)
    Demo(DemoArgs),
    /// Score a single metrics record supplied by flags or a JSON file
    Score(ScoreArgs),
    /// Print the quick comparison table for every wallet in the catalog
    Compare(CompareArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(?config.environment, ?config.risk, "configuration loaded");

    let engine = ReputationEngine::new(config.risk);
    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Demo(args) => run_demo(args, &engine),
        Command::Score(args) => run_score(args, &engine),
        Command::Compare(args) => run_compare(args, &engine),
    }
}

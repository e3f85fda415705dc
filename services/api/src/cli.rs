use crate::commands::{run_items, run_scope, run_score, ItemsArgs, ScopeArgs, ScoreArgs};
use crate::demo::{run_demo, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use epq_engine::config::AppConfig;
use epq_engine::error::AppError;
use epq_engine::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "EPQ Assessment Engine",
    about = "Serve and exercise the EPQ construct scoring engine from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the items of one bank, optionally shuffled and capped
    Items(ItemsArgs),
    /// Score an applicant response file and print the session report
    Score(ScoreArgs),
    /// Compute the applicant scope from an employer answer file
    Scope(ScopeArgs),
    /// Run an end-to-end demo: employer scope, applicant session, report
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match command {
        Command::Serve(args) => server::run(config, args).await,
        Command::Items(args) => run_items(&config, args),
        Command::Score(args) => run_score(&config, args),
        Command::Scope(args) => run_scope(&config, args),
        Command::Demo(args) => run_demo(&config, args),
    }
}

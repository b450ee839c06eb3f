use crate::console::{run_catalog, run_quiz, run_recommend};
use crate::infra::parse_answer;
use crate::server;
use anju::recommender::QuestionNumber;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use anju::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Anju Recommender",
    about = "Match a drinking-snack flavor profile and rank dishes from quiz answers",
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
    /// Score a completed answer set and print the recommendation
    Recommend(RecommendArgs),
    /// Take the quiz interactively on the terminal
    Quiz(QuizArgs),
    /// Summarise the loaded reference tables
    Catalog(CatalogArgs),
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

/// Overrides for the reference data locations and scoring constants.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct CatalogArgs {
    /// Profile catalog CSV (keyword, core_combo, description)
    #[arg(long)]
    pub(crate) profiles: Option<PathBuf>,
    /// Dish catalog CSV (name, spicy_level, category)
    #[arg(long)]
    pub(crate) dishes: Option<PathBuf>,
    /// Question set CSV (q_no, question, option_1..option_4)
    #[arg(long)]
    pub(crate) questions: Option<PathBuf>,
    /// JSON document overriding the scoring constants
    #[arg(long)]
    pub(crate) scoring_config: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    #[command(flatten)]
    pub(crate) catalog: CatalogArgs,
    /// Answer for one question as N=TEXT; repeat once per question
    #[arg(long = "answer", value_parser = parse_answer, required = true)]
    pub(crate) answers: Vec<(QuestionNumber, String)>,
    /// Fix the jitter seed for a reproducible result
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Print the full recommendation as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct QuizArgs {
    #[command(flatten)]
    pub(crate) catalog: CatalogArgs,
    /// Fix the jitter seed for a reproducible result
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Recommend(args) => run_recommend(args),
        Command::Quiz(args) => run_quiz(args),
        Command::Catalog(args) => run_catalog(args),
    }
}

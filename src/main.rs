//! Faqbot - knowledge-grounded chatbot simulator
//!
//! Command-line entry point: manage the knowledge base and persona, inspect
//! the grounding instruction, and run simulated conversations with a live
//! evaluation report.

use clap::{Parser, Subcommand};
use faqbot_core::error::Result;
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::{self, EnvFilter};

mod cli;

#[derive(Parser)]
#[command(name = "faqbot")]
#[command(about = "Knowledge-grounded chatbot simulator and evaluator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Set log level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Simulator config file (TOML)
    #[arg(long, env = "FAQBOT_CONFIG")]
    config: Option<PathBuf>,

    /// Knowledge store path (overrides FAQBOT_STORE_PATH env var and default)
    #[arg(long)]
    store: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive chat simulation with evaluation report
    Chat,

    /// Ask a single question and print the classified reply
    Ask {
        /// Question to send
        question: String,
    },

    /// Manage knowledge base entries
    Kb {
        #[command(subcommand)]
        action: KbAction,
    },

    /// Show or change the bot persona
    Persona {
        #[command(subcommand)]
        action: PersonaAction,
    },

    /// Print the grounding instruction the next dispatch would send
    Prompt,
}

#[derive(Subcommand)]
enum KbAction {
    /// List entries grouped by category
    List,

    /// Add an entry
    Add {
        #[arg(short, long)]
        question: String,

        #[arg(short, long)]
        answer: String,

        #[arg(short, long)]
        category: String,
    },

    /// Remove an entry by id
    Remove {
        id: String,
    },
}

#[derive(Subcommand)]
enum PersonaAction {
    /// Show the current persona
    Show,

    /// Replace the persona
    Set {
        #[arg(short, long)]
        name: String,

        /// Tone of voice description
        #[arg(short, long)]
        tone: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = match cli.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // Keep HTTP client internals quiet unless something goes wrong
    let filter = EnvFilter::new(format!(
        "faqbot={lvl},faqbot_core={lvl},reqwest=warn,hyper=warn",
        lvl = level.as_str().to_lowercase()
    ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr) // Write logs to stderr, not stdout
        .init();

    debug!("Faqbot v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = cli::helpers::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Chat => cli::chat::handle(config, cli.store).await,
        Commands::Ask { question } => cli::ask::handle(question, config, cli.store).await,
        Commands::Kb { action } => match action {
            KbAction::List => cli::kb::list(&config, cli.store),
            KbAction::Add {
                question,
                answer,
                category,
            } => cli::kb::add(question, answer, category, &config, cli.store),
            KbAction::Remove { id } => cli::kb::remove(id, &config, cli.store),
        },
        Commands::Persona { action } => match action {
            PersonaAction::Show => cli::persona::show(&config, cli.store),
            PersonaAction::Set { name, tone } => cli::persona::set(name, tone, &config, cli.store),
        },
        Commands::Prompt => cli::prompt::handle(&config, cli.store),
    }
}

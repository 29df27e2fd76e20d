//! CLI Adapter.

use std::io::{BufRead, ErrorKind, IsTerminal};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dialoguer::{Error as DialoguerError, Input};

use crate::app::api;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "hope")]
#[command(version)]
#[command(about = "Answer visitor questions about the church", long_about = None)]
struct Cli {
    /// Path to a hope.toml configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a single question
    #[clap(visible_alias = "a")]
    Ask {
        /// The question, as one or more words
        #[arg(required = true, trailing_var_arg = true)]
        question: Vec<String>,
    },
    /// Start an interactive chat session
    #[clap(visible_alias = "c")]
    Chat,
    /// Show whether the AI service is configured
    #[clap(visible_alias = "s")]
    Status,
    /// Print the system prompt sent with each question
    Prompt,
    /// Show the About page content
    About,
    /// Show the elders and deacons
    Leadership,
    /// Show the statement of faith and detailed beliefs
    Beliefs,
    /// Show contact details and service times
    Contact,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let config = cli.config.as_deref();

    let result: Result<(), AppError> = match cli.command {
        Commands::Ask { question } => api::ask(config, &question.join(" ")).map(|answer| {
            println!("{}", answer);
        }),
        Commands::Chat => run_chat(config),
        Commands::Status => api::status(config).map(|report| println!("{}", report)),
        Commands::Prompt => api::system_prompt(config).map(|prompt| println!("{}", prompt)),
        Commands::About => api::about(config).map(|about| println!("{}", api::render_about(&about))),
        Commands::Leadership => {
            println!("{}", api::render_leadership());
            Ok(())
        }
        Commands::Beliefs => {
            api::beliefs(config).map(|knowledge| println!("{}", api::render_beliefs(&knowledge)))
        }
        Commands::Contact => {
            api::contact(config).map(|contact| println!("{}", api::render_contact(&contact)))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_chat(config: Option<&std::path::Path>) -> Result<(), AppError> {
    let mut stdout = std::io::stdout();
    let outcome = if std::io::stdin().is_terminal() && std::io::stdout().is_terminal() {
        api::chat(config, prompt_question, &mut stdout)?
    } else {
        let mut lines = std::io::stdin().lock().lines();
        api::chat(config, move || lines.next().transpose().map_err(AppError::from), &mut stdout)?
    };

    tracing::debug!(answered = outcome.answered, "Chat session ended");
    Ok(())
}

fn prompt_question() -> Result<Option<String>, AppError> {
    match Input::<String>::new().with_prompt("You").allow_empty(true).interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Interactive(format!("Failed to read question: {}", err))),
    }
}

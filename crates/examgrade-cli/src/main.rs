//! examgrade CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "examgrade", version, about = "Offline multiple-choice exam administration and grading")]
struct Cli {
    /// Config file path (defaults to examgrade.toml in the working directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade submissions against an answer key
    Grade {
        /// Exam id whose key to load from the answer-keys directory
        #[arg(long, conflicts_with = "answer_key")]
        exam_id: Option<String>,

        /// Explicit answer key file (alternative to --exam-id)
        #[arg(long)]
        answer_key: Option<PathBuf>,

        /// Submissions directory (default from config)
        #[arg(long)]
        submissions: Option<PathBuf>,

        /// Output directory for result artifacts (default from config)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: json, csv, html, all
        #[arg(long, default_value = "json")]
        format: String,
    },

    /// Sit an exam interactively and record a submission
    Take {
        /// Exam id to look up in the exam catalog
        #[arg(long)]
        exam_id: String,

        /// Student name (prompted for when omitted)
        #[arg(long)]
        name: Option<String>,

        /// Roll number (prompted for when omitted)
        #[arg(long)]
        roll: Option<String>,
    },

    /// Validate exam definitions and answer keys
    Validate {
        /// Exams directory (default from config)
        #[arg(long)]
        exams: Option<PathBuf>,

        /// Answer keys directory (default from config)
        #[arg(long)]
        answer_keys: Option<PathBuf>,
    },

    /// List the exam catalog
    List,

    /// Create starter config, a sample exam, and its answer key
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("examgrade=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Grade {
            exam_id,
            answer_key,
            submissions,
            output,
            format,
        } => commands::grade::execute(
            cli.config,
            exam_id,
            answer_key,
            submissions,
            output,
            format,
        ),
        Commands::Take {
            exam_id,
            name,
            roll,
        } => commands::take::execute(cli.config, exam_id, name, roll),
        Commands::Validate { exams, answer_keys } => {
            commands::validate::execute(cli.config, exams, answer_keys)
        }
        Commands::List => commands::list::execute(cli.config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

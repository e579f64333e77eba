//! gradebook CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "gradebook", version, about = "Student grade tracker")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding student files (overrides config)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (the default)
    Menu,

    /// Add a student
    Add {
        /// Student ID (generated when omitted)
        #[arg(long)]
        id: Option<String>,

        /// Student name
        #[arg(long)]
        name: String,

        /// Courses (comma-separated)
        #[arg(long, default_value = "")]
        courses: String,
    },

    /// Replace a student's scores
    Scores {
        /// Student ID
        #[arg(long)]
        id: String,

        /// Scores (comma-separated integers)
        #[arg(long, allow_hyphen_values = true)]
        scores: String,
    },

    /// Show a student's average score
    Average {
        /// Student ID
        #[arg(long)]
        id: String,
    },

    /// Show a student's GPA (0-5)
    Gpa {
        /// Student ID
        #[arg(long)]
        id: String,
    },

    /// Print a student's stored record
    Show {
        /// Student ID
        #[arg(long)]
        id: String,
    },

    /// Create a starter gradebook.toml
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gradebook=warn".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let paths = commands::StorePaths {
        config: cli.config,
        data_dir: cli.data_dir,
    };

    let result = match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => commands::menu::execute(&paths),
        Commands::Add { id, name, courses } => commands::add::execute(&paths, id, name, courses),
        Commands::Scores { id, scores } => commands::scores::execute(&paths, id, scores),
        Commands::Average { id } => commands::average::execute(&paths, id),
        Commands::Gpa { id } => commands::gpa::execute(&paths, id),
        Commands::Show { id } => commands::show::execute(&paths, id),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

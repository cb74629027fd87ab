mod commands;

use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "retriever-site")]
#[command(version, about = "Static site renderer for the Retriever Robotics website", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Initialize a new site directory with the default site.toml
    Init {
        /// Path to the site directory
        path: PathBuf,

        /// Site title (defaults to "Retriever Robotics")
        #[arg(long)]
        title: Option<String>,
    },

    /// Validate site configuration
    Validate {
        /// Path to the site directory
        path: PathBuf,
    },

    /// Render every page into an output directory
    Build {
        /// Path to the site directory
        path: PathBuf,

        /// Output directory for generated site
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Print the rendered document for a single route
    Render {
        /// Path to the site directory
        path: PathBuf,

        /// Route to render, e.g. /sponsor
        #[arg(default_value = "/")]
        route: String,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Command::Init { path, title } => commands::init::run(path, title).await,
        Command::Validate { path } => commands::validate::run(path).await,
        Command::Build { path, output } => commands::build::run(path, output).await,
        Command::Render { path, route } => commands::render::run(path, route).await,
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "retriever-site", &mut io::stdout());
            Ok(())
        }
    }
}

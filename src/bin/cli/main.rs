mod app;
mod commands;
mod render;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "vocab-diff",
    about = "Compare the vocabulary of an Anki deck against a Genki reference deck",
    version
)]
struct Cli {
    /// Config file (default: <config dir>/vocab-diff/config.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Report reference words missing from the primary deck, and the extras
    Compare {
        /// Primary study deck (.apkg)
        primary: PathBuf,
        /// Reference curriculum deck (.apkg)
        reference: PathBuf,
        /// Results file (overrides the configured path)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Words shown per lesson in the summary
        #[arg(long)]
        preview: Option<usize>,
        /// Print the summary without writing the results file
        #[arg(long)]
        no_save: bool,
    },

    /// Show note, card and deck counts of one package
    Inspect {
        /// Package to read (.apkg)
        package: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && std::io::stdout().is_terminal();
    let mut app = app::App::new(cli.config.as_deref())?;

    match cli.command {
        Command::Compare { primary, reference, output, preview, no_save } => {
            app.apply_overrides(output, preview);
            commands::compare::run(&app, &primary, &reference, !no_save, &cli.format, use_color)?;
        }
        Command::Inspect { package } => {
            commands::inspect::run(&app, &package, &cli.format, use_color)?;
        }
    }

    Ok(())
}

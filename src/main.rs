use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use keyga::geometry::Geometry;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON key position catalog; defaults to the built-in 10/9/7 staggered rows.
    #[arg(global = true, short = 'k', long)]
    keyboard: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Search(cmd::search::SearchArgs),
    Evaluate(cmd::evaluate::EvaluateArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    if cli.debug {
        tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();
    } else {
        tracing_subscriber::fmt::init();
    }

    let geometry = match &cli.keyboard {
        Some(path) => {
            info!("📂 Loading Keyboard: {}", path);
            Geometry::load_from_file(path)
        }
        None => Ok(Geometry::standard()),
    };
    let geometry = geometry.unwrap_or_else(|e| {
        error!("❌ FATAL ERROR LOADING KEYBOARD: {}", e);
        process::exit(1);
    });

    let outcome = match &cli.command {
        Commands::Search(args) => {
            let sub_matches = matches
                .subcommand_matches("search")
                .unwrap_or(&matches);
            cmd::search::run(args, geometry, sub_matches)
        }
        Commands::Evaluate(args) => cmd::evaluate::run(args, geometry),
    };

    if let Err(e) = outcome {
        error!("❌ {}", e);
        process::exit(1);
    }
}

// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Tangible Contributors

//! Tangible CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tangible::cli::{RenderOutcome, Reporter, Runner};
use tangible::{Orientation, TangibleConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "tangible")]
#[command(about = "Tangible - turn numeric data into OpenSCAD solids", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON AST file to OpenSCAD source
    Render {
        /// Input JSON file holding a node or a list of nodes
        input: PathBuf,

        /// Output file (prints to stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Stack 2D layers from a JSON file into a solid
    Connect {
        /// Input JSON file holding the list of layers
        input: PathBuf,

        /// Distance between consecutive layers
        #[arg(short = 'd', long)]
        layer_distance: Option<f64>,

        /// Stacking direction (vertical, horizontal)
        #[arg(long)]
        orientation: Option<Orientation>,

        /// Output file (prints to stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the connected AST as JSON instead of OpenSCAD source
        #[arg(long)]
        ast: bool,
    },

    /// Show version information
    Version,
}

/// Initialize the tracing subscriber based on verbosity level.
fn init_tracing(verbose: u8) {
    // RUST_LOG wins over -v flags
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "tangible=info",
            2 => "tangible=debug",
            _ => "trace",
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(filter)
        .init();
}

fn main() {
    if let Err(err) = run() {
        Reporter::report_error(&format!("{err:#}"));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = TangibleConfig::load().context("Failed to load configuration")?;

    let verbose = if config.verbose { cli.verbose.max(1) } else { cli.verbose };
    init_tracing(verbose);

    let runner = Runner::new(config);

    match cli.command {
        Commands::Render { input, output } => {
            let outcome = runner.render(&input)?;
            emit(&runner, &input, &outcome, &outcome.source, output.as_deref())?;
        }
        Commands::Connect {
            input,
            layer_distance,
            orientation,
            output,
            ast,
        } => {
            let outcome = runner.connect(&input, layer_distance, orientation)?;
            if ast {
                let solid = outcome.roots.first().context("No connected solid")?;
                let json = serde_json::to_string_pretty(solid)
                    .context("Failed to serialize connected AST")?;
                emit(&runner, &input, &outcome, &json, output.as_deref())?;
            } else {
                emit(&runner, &input, &outcome, &outcome.source, output.as_deref())?;
            }
        }
        Commands::Version => {
            println!("Tangible v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

/// Print `text` or write it to `output` and report the render
fn emit(
    runner: &Runner,
    input: &Path,
    outcome: &RenderOutcome,
    text: &str,
    output: Option<&Path>,
) -> Result<()> {
    match output {
        Some(output) => {
            let path = runner.write(output, text)?;
            Reporter::report_render(
                &input.display().to_string(),
                outcome,
                Some(&path.display().to_string()),
            );
            Reporter::success("Done");
        }
        None => println!("{text}"),
    }
    Ok(())
}

//! `curve-study` CLI: record the study script of a curve as JSON.

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::info;

use curve_study::curves;
use curve_study::error::RenderError;
use curve_study::scene::Script;
use curve_study::sequencer::{CurveSequencer, SequencerSettings};
use curve_study::{CurveStudyError, Result};

#[derive(Parser)]
#[command(version, about = "Narrated study scripts for parametric curves")]
struct Cli {
    /// Curve to study, see --list
    curve: Option<String>,

    /// JSON settings file
    #[arg(short, long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Write the script there instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Only place the axes and draw the curve
    #[arg(long)]
    skip_study: bool,

    /// List the known curves and exit
    #[arg(long)]
    list: bool,
}

fn main() {
    // WARN by default, override with RUST_LOG (e.g. RUST_LOG=curve_study=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.list {
        for name in curves::NAMES {
            println!("{name}");
        }
        return;
    }
    let Some(name) = cli.curve.as_deref() else {
        eprintln!("No curve specified, see --list");
        process::exit(2);
    };

    if let Err(e) = run(name, &cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(name: &str, cli: &Cli) -> Result<()> {
    let mut settings = match &cli.settings {
        Some(path) => SequencerSettings::load(path)?,
        None => SequencerSettings::default(),
    };
    settings.skip_study |= cli.skip_study;

    let definition = curves::by_name(name)?;
    let mut script = Script::new();
    CurveSequencer::new(settings).run(&definition, &mut script)?;
    info!(curve = name, actions = script.actions().len(), "script recorded");

    let json = script
        .to_json()
        .map_err(|e| RenderError::Backend(e.to_string()))?;
    match &cli.output {
        Some(path) => fs::write(path, json).map_err(|source| CurveStudyError::Output {
            path: path.clone(),
            source,
        }),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

//! Interactive toy robot on the terminal.
//!
//! Usage:
//!   toy-robot                    # 5x5 table
//!   toy-robot --grid-size 8
//!   toy-robot --config table.toml

use clap::Parser;
use std::io;
use std::path::PathBuf;
use toy_robot::{CommandInterpreter, ConfigError, ReaderSource, Session, TableConfig, WriterSink};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Toy robot simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Side length of the square table, overrides the config file
    #[arg(short, long)]
    grid_size: Option<u32>,
}

fn main() -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("toy_robot=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            TableConfig::load(path)?
        }
        None => TableConfig::default(),
    };
    if let Some(grid_size) = args.grid_size {
        config.grid_size = grid_size;
    }
    config.validate()?;

    let mut session = Session::new(CommandInterpreter::new(config.build_robot()));
    let mut input = ReaderSource::new(io::stdin().lock());
    let mut output = WriterSink::new(io::stdout().lock());
    session.run(&mut input, &mut output);

    Ok(())
}

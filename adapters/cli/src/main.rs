#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that prints Ricochet Worlds boards.

mod render;
mod report;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, LevelFilter};
use ricochet_worlds_core::WorldId;
use ricochet_worlds_system_assembler::Assembler;

use crate::report::WorldReport;

/// Output encodings supported by the adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// ASCII drawing of the walls.
    Text,
    /// Machine-readable JSON document.
    Json,
}

/// Print the board and goal cell decoded from a world id.
#[derive(Debug, Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// World id to decode
    world_id: u64,

    /// Output format
    #[arg(value_enum, short, long, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// List every goal candidate
    #[arg(short, long, default_value_t = false)]
    candidates: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Entry point for the Ricochet Worlds command-line interface.
fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let id = WorldId::new(args.world_id);
    let world = Assembler::new().assemble(id);
    debug!("rendering world {} as {:?}", id.get(), args.format);

    let output = match args.format {
        OutputFormat::Text => render::render_text(&world, args.candidates),
        OutputFormat::Json => WorldReport::capture(id, &world, args.candidates)
            .to_json()
            .with_context(|| format!("could not serialise world {}", id.get()))?,
    };
    println!("{output}");
    Ok(())
}

fn init_logging(debug: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if debug {
        let _ = builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

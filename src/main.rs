//! # Bestiary Main Entry Point
//!
//! Loads the default content (falling back to built-ins), merges any content
//! packs, then generates, imports, or exports monster statblocks.

use bestiary::{load_default_content, load_pack_file, render_statblock, BestiaryResult, Session};
use clap::Parser;
use log::{error, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

/// Command line arguments for the bestiary generator.
#[derive(Parser, Debug)]
#[command(name = "bestiary")]
#[command(about = "A themed random monster statblock generator")]
#[command(version)]
struct Args {
    /// Random seed for reproducible generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Directory holding the default content files
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Content pack files to merge before generating (repeatable)
    #[arg(long = "pack")]
    packs: Vec<PathBuf>,

    /// Number of monsters to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    count: u32,

    /// Import a monster record from this file instead of generating
    #[arg(long)]
    import: Option<PathBuf>,

    /// Write the current monster record to this file
    #[arg(long)]
    export: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> BestiaryResult<()> {
    info!("Starting bestiary v{}", bestiary::VERSION);

    let mut session = Session::new(load_default_content(&args.data_dir));

    // Pack failures skip the file but never abort the rest.
    for path in &args.packs {
        match load_pack_file(session.store_mut(), path) {
            Ok(()) => info!("Loaded content pack {}", path.display()),
            Err(e) => warn!("Skipping pack {}: {e}", path.display()),
        }
    }

    if let Some(path) = &args.import {
        let bytes = fs::read(path)?;
        let monster = session.import(&bytes)?;
        println!("{}", render_statblock(monster));
    } else {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        for _ in 0..args.count {
            let monster = session.generate(&mut rng)?;
            println!("{}", render_statblock(monster));
        }
    }

    if let Some(path) = &args.export {
        fs::write(path, session.export_current()?)?;
        info!("Exported monster to {}", path.display());
    }

    Ok(())
}

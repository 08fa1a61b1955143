//! loadout_cli - Headless runner for character loadout scripts
//!
//! Reads one command per line from a script file (or stdin) and applies it
//! to a character built from the catalog and character configs.

mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use commands::Session;
use loadout_core::config::{default_catalog, default_character, load_catalog, load_character};
use loadout_core::{Character, StatKind};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

/// Run loadout commands against a character
#[derive(Parser)]
#[command(name = "loadout")]
#[command(about = "Equip, unequip and inspect a character from a script", long_about = None)]
#[command(version)]
struct Cli {
    /// Item catalog (TOML, or JSON by extension). Defaults to the bundled catalog
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Character config (TOML). Defaults to the bundled character
    #[arg(long, value_name = "PATH")]
    character: Option<PathBuf>,

    /// Script to run; reads stdin when omitted
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    log::info!("Starting loadout v{}", env!("CARGO_PKG_VERSION"));

    let catalog = match &cli.catalog {
        Some(path) => load_catalog(path)
            .with_context(|| format!("failed to load catalog {}", path.display()))?,
        None => default_catalog(),
    };
    let config = match &cli.character {
        Some(path) => load_character(path)
            .with_context(|| format!("failed to load character {}", path.display()))?,
        None => default_character(),
    };
    log::info!(
        "{} catalog items, inventory of {}",
        catalog.len(),
        config.inventory_size
    );

    let mut character = Character::from_config(&catalog, &config);
    character.subscribe(|kind: StatKind, value: f64| {
        if kind == StatKind::Health {
            log::info!("health is now {}", value);
        }
    });

    let mut session = Session::new(catalog, character);
    let mut stdout = io::stdout().lock();
    match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            session.run(BufReader::new(file), &mut stdout)
        }
        None => session.run(io::stdin().lock(), &mut stdout),
    }
}

//! Command-line tool that generates a Seabound world and dumps the
//! client-facing data files the game mod consumes.
use anyhow::{Context, Result, ensure};
use clap::Parser;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use seabound_logic::{Options, World, export};

#[derive(Debug, Parser)]
#[command(name = "seabound-export", version)]
#[command(about = "Dump the Seabound randomizer export files for the game client")]
struct Args {
    /// Generation seed
    #[arg(long, default_value_t = 1337)]
    seed: u64,

    /// Player slot number
    #[arg(long, default_value_t = 1)]
    player: u16,

    /// Path to an options snapshot in JSON; defaults apply when omitted
    #[arg(long)]
    options: Option<PathBuf>,

    /// Output directory for the export files
    #[arg(long, default_value = "seabound-export-out")]
    out: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let options: Options = match &args.options {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading options from {}", path.display()))?;
            serde_json::from_str(&raw).context("parsing options snapshot")?
        }
        None => Options::default(),
    };

    let world =
        World::generate(args.player, options, args.seed).context("generation aborted")?;
    info!(
        "generated world for player {} with seed {} ({:?} regime)",
        args.player,
        args.seed,
        world.regime()
    );

    // Client-side assumption the dump must uphold: one catalog copy per
    // static location, scan slots covered by extras.
    let placements = world.pool().total_placements();
    let expected = export::location_positions().len() + world.scan_targets().slots();
    ensure!(
        placements == expected,
        "pool accounts for {placements} of {expected} slots"
    );

    fs::create_dir_all(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;

    write_json(&args.out, "locations.json", &export::location_positions())?;
    write_json(&args.out, "logic.json", &export::tool_gated_locations())?;
    write_json(&args.out, "items.json", &export::item_tech_types())?;
    write_json(&args.out, "group_items.json", &export::group_memberships())?;
    write_json(&args.out, "item_kinds.json", &export::items_by_kind())?;
    write_json(&args.out, "slot_data.json", &export::slot_data(&world))?;

    info!("exports dumped to {}", args.out.display());
    Ok(())
}

fn write_json<T: serde::Serialize>(dir: &Path, name: &str, payload: &T) -> Result<()> {
    let path = dir.join(name);
    let data = serde_json::to_string_pretty(payload).context("serializing payload")?;
    fs::write(&path, data).with_context(|| format!("writing {}", path.display()))?;
    info!("wrote {}", path.display());
    Ok(())
}

//! junction_demo: smallest example for the track_router framework.
//!
//! Builds a short line with a 3-way fork and a 4-way crossing, sends a few
//! vehicles along it, then runs a rail search from the station.
//!
//! ```text
//! cargo run -p junction_demo [config.json]
//! RUST_LOG=debug cargo run -p junction_demo
//! ```
//!
//! The optional JSON file overrides any `RouterConfig` field, e.g.
//! `{ "cells_per_slice": 4 }`.

mod layout;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use tr_core::{Cell, Direction, EntityId, RouterConfig};
use tr_routing::{
    destination_from_sign, next_direction, DestinationStore, JunctionRouter, RoutingOutcome,
    Vehicle, VehicleKind,
};
use tr_search::{MessageLog, SearchRunner};
use tr_world::{GridWorld, WorldView};

use layout::{build_layout, CROSSING, DEST_SIGN, FORK, STATION};

// ── Constants ─────────────────────────────────────────────────────────────────

const RIDER:     EntityId = EntityId(1);
const CART:      EntityId = EntityId(2);
const MAX_STEPS: usize    = 64;

// ── Config ────────────────────────────────────────────────────────────────────

fn load_config(path: Option<&Path>) -> Result<RouterConfig> {
    let config = match path {
        None => RouterConfig::default(),
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
    };
    config.validate()?;
    Ok(config)
}

// ── Riding ────────────────────────────────────────────────────────────────────

/// Drive `vehicle` from `start` heading `heading` until the track ends,
/// letting the router set every junction ahead.  Returns the last cell.
fn ride(
    world:   &mut GridWorld,
    router:  &JunctionRouter,
    store:   &DestinationStore,
    vehicle: &Vehicle,
    start:   Cell,
    heading: Direction,
) -> Result<Cell> {
    let mut at = start;
    let mut heading = heading;
    for _ in 0..MAX_STEPS {
        let Some(next) = next_direction(&*world, at, heading) else {
            break;
        };
        let to = at.relative(next);
        if !world.is_rail(to) {
            break;
        }
        match router.on_vehicle_moved(world, store, vehicle, at, to)? {
            RoutingOutcome::NoJunction => {}
            RoutingOutcome::Switched { junction, target, .. } => {
                println!("  {junction}: switched toward {}", target.compass_name());
            }
            RoutingOutcome::Unchanged { junction, target } => {
                println!("  {junction}: already set toward {}", target.compass_name());
            }
            RoutingOutcome::Refused { junction, target } => {
                println!("  {junction}: cannot go {}, left as is", target.compass_name());
            }
        }
        heading = next;
        at = to;
    }
    Ok(at)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let config_path = std::env::args().nth(1);
    let config = load_config(config_path.as_deref().map(Path::new))?;

    println!("=== junction_demo: track_router ===");
    println!("Fork at {FORK}, crossing at {CROSSING}, station at {STATION}");
    println!();

    let mut world = build_layout();
    let router = JunctionRouter::new(&config);
    let mut store = DestinationStore::new();

    // 1. A rider reads the destination sign, boards and rides north.
    let sign = world.sign_lines_at(DEST_SIGN).context("destination sign missing")?;
    let destination =
        destination_from_sign(&sign, &config).context("destination sign has no destination")?;
    println!("Rider picks destination '{}'", store.set(RIDER, &destination));

    let ridden = Vehicle::new(CART, VehicleKind::Ridden { rider: RIDER });
    let end = ride(&mut world, &router, &store, &ridden, STATION, Direction::North)?;
    println!("Rider arrived at {end}");
    router.on_rider_exit(&mut store, RIDER);
    println!();

    // 2. An unridden storage vehicle follows the main line.
    let storage = Vehicle::new(EntityId(3), VehicleKind::Storage);
    println!("Storage vehicle routes as '{}'", storage.destination(&store));
    let end = ride(&mut world, &router, &store, &storage, STATION, Direction::North)?;
    println!("Storage vehicle arrived at {end}");
    println!();

    // 3. A rider hands the `mine` preference to an empty vehicle.
    store.set(RIDER, "Mine");
    let kept = store.transfer(RIDER, CART);
    router.on_rider_exit(&mut store, RIDER);
    let plain = Vehicle::new(CART, VehicleKind::Plain);
    println!("Empty vehicle routes as '{}' (transferred: {kept})", plain.destination(&store));
    let end = ride(&mut world, &router, &store, &plain, STATION, Direction::North)?;
    println!("Empty vehicle arrived at {end}");
    println!();

    // 4. Which destinations can be reached from the station?
    let mut runner = SearchRunner::new(config);
    let mut log = MessageLog::new();
    let id = runner.start(&world, STATION, &mut log);
    let done_at = runner.run_until_idle(&world, &mut log);
    info!("search finished at {done_at}");
    for message in log.for_search(id) {
        println!("{message}");
    }

    Ok(())
}

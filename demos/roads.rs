//! Generate a terrain, scatter settlements and connect them with roads.
//!
//! Run: cargo run --bin roads [seed] [settlements]
//! Set RUST_LOG=debug to see per-route search statistics.

use rand::SeedableRng;
use rand::rngs::StdRng;
use ridgeway_demos::{HEIGHT, WIDTH, render, ridged_terrain};
use ridgeway_paths::SearchConfig;
use ridgeway_world::RoadPlanner;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(7);
    let count: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(6);

    let terrain = ridged_terrain(WIDTH, HEIGHT, (seed % 628) as f32 / 100.0);
    let mut planner = RoadPlanner::new(StdRng::seed_from_u64(seed), SearchConfig::default());
    let (sites, roads, map) = planner.build_network(&terrain, count);

    print!("{}", render(&terrain, &map, &sites));
    for road in &roads {
        println!(
            "{} -> {}: {} steps, cost {}",
            road.from,
            road.to,
            road.steps(),
            road.cost
        );
    }
    if roads.len() + 1 < sites.len() {
        log::warn!("{} of {} legs had no route", sites.len() - 1 - roads.len(), sites.len() - 1);
    }
}

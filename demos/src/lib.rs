//! Shared helpers for the ridgeway demos: a closed-form ridge-and-valley
//! terrain and an ASCII renderer for road networks.

use ridgeway_core::{HeightMap, Point};
use ridgeway_world::RoadMap;

pub const WIDTH: i32 = 72;
pub const HEIGHT: i32 = 28;

/// Glyphs for elevation bands, lowest first.
const BANDS: &[char] = &[' ', '.', ',', '-', '~', ':', ';', '=', '^'];

/// Rolling hills crossed by a diagonal ridge. `phase` shifts the pattern so
/// different seeds give different maps.
pub fn ridged_terrain(width: i32, height: i32, phase: f32) -> HeightMap {
    HeightMap::from_fn(width, height, |p| {
        let x = p.x as f32;
        let y = p.y as f32;
        let hills = 1.5 * ((x * 0.21 + phase).sin() + (y * 0.33 - phase).cos());
        let ridge = 4.0 * (-((x - 1.8 * y - 10.0 * phase.cos()) / 6.0).powi(2)).exp();
        (hills + ridge + 3.0).max(0.0)
    })
}

/// Render the terrain with roads (`#`) and settlements (`@`).
pub fn render(terrain: &HeightMap, roads: &RoadMap, settlements: &[Point]) -> String {
    let (lo, hi) = terrain.extent().unwrap_or((0.0, 0.0));
    let span = (hi - lo).max(f32::EPSILON);
    let mut out = String::with_capacity(terrain.bounds().len() + terrain.height() as usize);
    for (p, h) in terrain.iter() {
        let glyph = if settlements.contains(&p) {
            '@'
        } else if roads.is_road(p) {
            '#'
        } else {
            let band = ((h - lo) / span * (BANDS.len() - 1) as f32).round() as usize;
            BANDS[band.min(BANDS.len() - 1)]
        };
        out.push(glyph);
        if p.x == terrain.bounds().max.x - 1 {
            out.push('\n');
        }
    }
    out
}

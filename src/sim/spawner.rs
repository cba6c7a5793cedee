//! Wall spawning
//!
//! At most one wall per tick: once the clock passes the watermark a single wall
//! is emitted and the watermark moves forward from the *current* clock, so a
//! long frame never produces a burst of catch-up walls.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::difficulty::Tier;
use super::wall::{Wall, WallColor};
use crate::consts::{MIN_SPAWN_INTERVAL, SPAWN_SPACING};

/// Source of gap start angles, injectable for deterministic tests
pub trait AngleSource {
    /// Next gap start, uniform in [0, 2π)
    fn next_gap_angle(&mut self) -> f32;
}

/// Seeded PCG angle source
#[derive(Debug, Clone)]
pub struct SeededAngles {
    rng: Pcg32,
}

impl SeededAngles {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl AngleSource for SeededAngles {
    fn next_gap_angle(&mut self) -> f32 {
        self.rng.random_range(0.0..std::f32::consts::TAU)
    }
}

/// Spawn timer and per-run spawn counter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Spawner {
    /// Clock value the next spawn waits for (strictly exceeded)
    pub next_spawn_at: f64,
    /// Walls spawned this run (drives color alternation)
    pub spawn_count: u64,
}

impl Spawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds until the following spawn at the given speed
    pub fn interval_for(speed: f32) -> f32 {
        (SPAWN_SPACING / speed).max(MIN_SPAWN_INTERVAL)
    }

    /// Emit one wall if `clock` has passed the watermark
    pub fn poll(
        &mut self,
        clock: f64,
        survival_time: f32,
        speed: f32,
        angles: &mut impl AngleSource,
        next_id: &mut u64,
    ) -> Option<Wall> {
        if clock <= self.next_spawn_at {
            return None;
        }

        let gap_start = angles.next_gap_angle();
        let (color_a, color_b) = WallColor::pair_for(Tier::for_time(survival_time));
        self.spawn_count += 1;
        let color = if self.spawn_count % 2 == 0 { color_a } else { color_b };

        let id = *next_id;
        *next_id += 1;

        self.next_spawn_at = clock + Self::interval_for(speed) as f64;

        log::debug!(
            "Spawned wall {} gap={:.2} color={:?} next_spawn_at={:.2}",
            id,
            gap_start,
            color,
            self.next_spawn_at
        );

        Some(Wall::new(id, gap_start, color))
    }
}

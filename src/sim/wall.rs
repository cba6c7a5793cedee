//! Walls and their gaps
//!
//! A wall is a hexagonal ring closing in on the center. The ring is solid except
//! for one gap, given in the wall's own (pre-rotation) frame:
//! - gap_start: angle where the gap begins
//! - gap_size: angular width of the gap
//!
//! The passable window is the gap inset by `GAP_PADDING` on both edges.

use serde::{Deserialize, Serialize};

use super::difficulty::Tier;
use crate::consts::{GAP_PADDING, GAP_SIZE, SPAWN_DISTANCE};
use crate::normalize_angle;

/// Display tag picked at spawn time. No gameplay effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallColor {
    Rose,
    Blue,
    Green,
    Yellow,
    Red900,
    Red800,
    Purple600,
    Purple300,
}

impl WallColor {
    /// The two colors alternated within a tier
    pub fn pair_for(tier: Tier) -> (WallColor, WallColor) {
        match tier {
            Tier::Warmup => (WallColor::Rose, WallColor::Blue),
            Tier::Rising => (WallColor::Green, WallColor::Yellow),
            // Dark reds only: telegraphs the danger phase
            Tier::Danger => (WallColor::Red900, WallColor::Red800),
            Tier::Final => (WallColor::Purple600, WallColor::Purple300),
        }
    }
}

/// One obstacle ring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub id: u64,
    /// Remaining distance to the center
    pub distance: f32,
    /// Gap start (radians, wall-local frame)
    pub gap_start: f32,
    /// Gap width (radians)
    pub gap_size: f32,
    pub color: WallColor,
    /// Resolved: can no longer register a hit
    pub passed: bool,
}

impl Wall {
    /// A fresh wall at the spawn distance
    pub fn new(id: u64, gap_start: f32, color: WallColor) -> Self {
        Self {
            id,
            distance: SPAWN_DISTANCE,
            gap_start,
            gap_size: GAP_SIZE,
            color,
            passed: false,
        }
    }

    /// Angle of `local_angle` measured from the gap start, in [0, 2π)
    #[inline]
    pub fn relative_angle(&self, local_angle: f32) -> f32 {
        normalize_angle(local_angle - normalize_angle(self.gap_start))
    }

    /// Safe arc bounds (exclusive), relative to the gap start
    #[inline]
    pub fn safe_arc(&self) -> (f32, f32) {
        (GAP_PADDING, self.gap_size - GAP_PADDING)
    }

    /// Whether a relative angle clears the wall. Edges are unsafe.
    pub fn is_safe(&self, relative: f32) -> bool {
        let (start, end) = self.safe_arc();
        relative > start && relative < end
    }

    /// Whether a wall-local player angle clears the wall
    pub fn clears(&self, local_angle: f32) -> bool {
        self.is_safe(self.relative_angle(local_angle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, TAU};

    fn wall_at(gap_start: f32) -> Wall {
        Wall::new(1, gap_start, WallColor::Rose)
    }

    #[test]
    fn test_safe_arc_inside_padding_and_beyond() {
        let wall = wall_at(0.0);
        assert_eq!(wall.gap_size, FRAC_PI_2);
        assert!(wall.is_safe(0.3));
        assert!(!wall.is_safe(0.1));
        assert!(!wall.is_safe(1.6));
    }

    #[test]
    fn test_safe_arc_edges_are_unsafe() {
        let wall = wall_at(0.0);
        let (start, end) = wall.safe_arc();
        assert!(!wall.is_safe(start));
        assert!(!wall.is_safe(end));
    }

    #[test]
    fn test_clears_handles_wraparound() {
        // Gap straddles 0: [TAU - 0.5, TAU - 0.5 + π/2)
        let wall = wall_at(-0.5);
        assert!(wall.clears(0.2));
        assert!(wall.clears(TAU - 0.2));
        assert!(!wall.clears(1.5));
        assert!(!wall.clears(TAU - 0.4));
    }

    #[test]
    fn test_relative_angle_unnormalized_gap() {
        let wall = wall_at(TAU + 1.0);
        assert!((wall.relative_angle(1.5) - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_color_pairs_per_tier() {
        assert_eq!(WallColor::pair_for(Tier::Warmup), (WallColor::Rose, WallColor::Blue));
        assert_eq!(WallColor::pair_for(Tier::Danger).0, WallColor::Red900);
    }
}

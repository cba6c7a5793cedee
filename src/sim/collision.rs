//! Wall lifecycle and gap collision
//!
//! One pass per tick over every live wall (plus the wall spawned this tick).
//! The pass consumes the current wall set and returns the next one, so no wall
//! is ever observed half-updated.
//!
//! Per wall:
//! 1. Move inward at the global speed
//! 2. Inside the collision band and unresolved: test the player against the safe arc
//! 3. Below the band: resolve unconditionally
//! 4. Below the retirement distance: drop

use super::wall::Wall;
use crate::consts::{COLLISION_INNER, COLLISION_OUTER, RETIRE_DISTANCE};
use crate::normalize_angle;

/// Inputs shared by every wall in a pass
#[derive(Debug, Clone, Copy)]
pub struct CollisionFrame {
    /// Seconds since the previous tick
    pub dt: f32,
    /// Global wall speed for this tick
    pub speed: f32,
    /// Player angle in screen space (unnormalized)
    pub player_angle: f32,
    /// Accumulated world rotation
    pub world_rotation: f32,
}

impl CollisionFrame {
    /// Player angle in the walls' pre-rotation frame, in [0, 2π)
    #[inline]
    pub fn local_player_angle(&self) -> f32 {
        normalize_angle(self.player_angle - self.world_rotation)
    }
}

/// Result of one lifecycle pass
#[derive(Debug, Clone, Default)]
pub struct WallPass {
    /// Surviving walls, in spawn order
    pub walls: Vec<Wall>,
    /// Ids of walls that hit the player this pass, in order
    pub hits: Vec<u64>,
    /// Number of walls dropped this pass
    pub retired: usize,
}

/// Whether a distance lies strictly inside the collision band
#[inline]
pub fn in_collision_band(distance: f32) -> bool {
    distance < COLLISION_OUTER && distance > COLLISION_INNER
}

/// Advance a single wall. Returns true if it hit the player.
pub fn step_wall(wall: &mut Wall, frame: &CollisionFrame) -> bool {
    wall.distance -= frame.dt * frame.speed;

    let mut hit = false;
    if !wall.passed
        && in_collision_band(wall.distance)
        && !wall.clears(frame.local_player_angle())
    {
        wall.passed = true;
        hit = true;
    }

    // Already past the ring: never test again
    if wall.distance < COLLISION_INNER {
        wall.passed = true;
    }

    hit
}

/// Advance every wall and build the next active set
pub fn advance_walls(walls: Vec<Wall>, spawned: Option<Wall>, frame: &CollisionFrame) -> WallPass {
    let mut pass = WallPass {
        walls: Vec::with_capacity(walls.len() + 1),
        ..Default::default()
    };

    for mut wall in walls.into_iter().chain(spawned) {
        if step_wall(&mut wall, frame) {
            log::debug!("Wall {} hit at distance {:.2}", wall.id, wall.distance);
            pass.hits.push(wall.id);
        }

        if wall.distance > RETIRE_DISTANCE {
            pass.walls.push(wall);
        } else {
            pass.retired += 1;
        }
    }

    pass
}

//! Per-frame scene parameters that are not per-wall
//!
//! The host draws the center hexagon, the pivot and the cursor from this,
//! and sizes every wall ring with `ring_sides`.

use serde::Serialize;

use super::instance::{colors, cursor_position, cursor_rotation};
use crate::consts::WALL_SIDES;
use crate::sim::FrameSnapshot;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneView {
    /// Polygon sides for the center and every wall ring
    pub ring_sides: u32,
    /// Cursor position in the wall field's frame
    pub cursor: [f32; 2],
    pub cursor_rotation: f32,
    /// World rotation applied to the whole wall field
    pub world_rotation: f32,
    /// Camera shake amount (already scaled by preferences)
    pub shake: f32,
    pub player_color: [f32; 4],
    pub cursor_color: [f32; 4],
    pub pivot_color: [f32; 4],
    pub background: [f32; 4],
}

impl SceneView {
    pub fn from_snapshot(snapshot: &FrameSnapshot) -> Self {
        Self {
            ring_sides: WALL_SIDES,
            cursor: cursor_position(snapshot).to_array(),
            cursor_rotation: cursor_rotation(snapshot),
            world_rotation: snapshot.world_rotation,
            shake: snapshot.shake,
            player_color: colors::PLAYER,
            cursor_color: colors::CURSOR,
            pivot_color: colors::PIVOT,
            background: colors::BACKGROUND,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

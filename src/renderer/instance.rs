//! Instance types for wall rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, TAU};

use crate::consts::PLAYER_RADIUS;
use crate::polar_to_cartesian;
use crate::sim::{FrameSnapshot, Wall, WallColor};

/// Wall instance: one gapped hexagon ring scaled by its distance
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct WallInstance {
    pub color: [f32; 4],
    /// Ring scale (the wall's distance)
    pub scale: f32,
    /// Ring rotation so the solid arc ends where the gap starts
    pub rotation: f32,
    /// Angular length of the solid arc
    pub arc_length: f32,
    /// Bit 0: passed
    pub flags: u32,
}

impl WallInstance {
    pub const FLAG_PASSED: u32 = 1;

    pub fn from_wall(wall: &Wall) -> Self {
        Self {
            color: colors::wall(wall.color),
            scale: wall.distance,
            // Solid arc drawn from 0 to arc_length; the gap fills the rest
            rotation: wall.gap_start + wall.gap_size,
            arc_length: TAU - wall.gap_size,
            flags: if wall.passed { Self::FLAG_PASSED } else { 0 },
        }
    }
}

/// Instances for every wall in a snapshot, in spawn order
pub fn build_instances(snapshot: &FrameSnapshot) -> Vec<WallInstance> {
    snapshot.walls.iter().map(WallInstance::from_wall).collect()
}

/// Cursor position in the wall field's frame
pub fn cursor_position(snapshot: &FrameSnapshot) -> Vec2 {
    polar_to_cartesian(PLAYER_RADIUS, snapshot.cursor_angle())
}

/// Cursor rotation so the triangle sits tangent to its ring
pub fn cursor_rotation(snapshot: &FrameSnapshot) -> f32 {
    snapshot.cursor_angle() - FRAC_PI_2
}

/// Colors for game elements
pub mod colors {
    use super::WallColor;

    pub const PLAYER: [f32; 4] = [0.886, 0.910, 0.941, 1.0];
    pub const CURSOR: [f32; 4] = [0.984, 0.749, 0.141, 1.0];
    pub const PIVOT: [f32; 4] = [0.2, 0.2, 0.2, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.067, 0.067, 0.067, 1.0];

    /// RGBA for a wall color tag
    pub fn wall(color: WallColor) -> [f32; 4] {
        match color {
            WallColor::Rose => [0.957, 0.247, 0.369, 1.0],
            WallColor::Blue => [0.231, 0.510, 0.965, 1.0],
            WallColor::Green => [0.133, 0.773, 0.369, 1.0],
            WallColor::Yellow => [0.918, 0.702, 0.031, 1.0],
            WallColor::Red900 => [0.498, 0.114, 0.114, 1.0],
            WallColor::Red800 => [0.600, 0.106, 0.106, 1.0],
            WallColor::Purple600 => [0.576, 0.200, 0.918, 1.0],
            WallColor::Purple300 => [0.847, 0.706, 0.996, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;

    #[test]
    fn test_instance_layout() {
        assert_eq!(std::mem::size_of::<WallInstance>(), 32);
        let walls = [WallInstance::zeroed(); 3];
        let bytes: &[u8] = bytemuck::cast_slice(&walls);
        assert_eq!(bytes.len(), 96);
    }

    #[test]
    fn test_instance_from_wall() {
        let mut wall = Wall::new(1, 1.0, WallColor::Purple600);
        wall.passed = true;
        let inst = WallInstance::from_wall(&wall);
        assert!((inst.rotation - (1.0 + FRAC_PI_2)).abs() < 1e-6);
        assert!((inst.arc_length - 1.5 * std::f32::consts::PI).abs() < 1e-5);
        assert_eq!(inst.flags & WallInstance::FLAG_PASSED, 1);
        assert_eq!(inst.scale, wall.distance);
    }

    #[test]
    fn test_cursor_on_player_ring() {
        let mut state = GameState::new();
        state.player_angle = 1.0;
        state.run.world_rotation = 1.0;
        let snapshot = FrameSnapshot::capture(&state);
        let pos = cursor_position(&snapshot);
        assert!((pos.x - PLAYER_RADIUS).abs() < 1e-5);
        assert!(pos.y.abs() < 1e-5);
        assert!((pos.length() - PLAYER_RADIUS).abs() < 1e-5);
    }

    #[test]
    fn test_build_instances_keeps_order() {
        let mut state = GameState::new();
        state.run.walls.push(Wall::new(4, 0.0, WallColor::Rose));
        state.run.walls.push(Wall::new(5, 0.0, WallColor::Blue));
        let instances = build_instances(&FrameSnapshot::capture(&state));
        assert_eq!(instances.len(), 2);
        assert_eq!(instances[1].color, colors::wall(WallColor::Blue));
    }
}

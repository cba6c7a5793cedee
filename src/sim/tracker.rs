//! Hand position → player angle
//!
//! The hand tracker reports up to two hand positions. The right hand wins when
//! both are present; with neither, the player angle holds its last value.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::consts::{TRACKING_CENTER_X, TRACKING_CENTER_Y};

/// Latest hand positions from the tracking collaborator (tracking space)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HandSample {
    pub left: Option<Vec3>,
    pub right: Option<Vec3>,
}

impl HandSample {
    pub fn right(pos: Vec3) -> Self {
        Self {
            left: None,
            right: Some(pos),
        }
    }

    pub fn left(pos: Vec3) -> Self {
        Self {
            left: Some(pos),
            right: None,
        }
    }

    /// One tracker frame from raw `[x, y, z]` coordinates. A hand that is
    /// missing (or has fewer than three values) is absent from the sample.
    pub fn from_coords(left: Option<&[f32]>, right: Option<&[f32]>) -> Self {
        fn point(coords: &[f32]) -> Option<Vec3> {
            match coords {
                [x, y, z, ..] => Some(Vec3::new(*x, *y, *z)),
                _ => None,
            }
        }
        Self {
            left: left.and_then(point),
            right: right.and_then(point),
        }
    }

    /// The hand that steers: right if present, else left
    pub fn active(&self) -> Option<Vec3> {
        self.right.or(self.left)
    }
}

/// Angle of a tracked position around the tracking center.
/// Not normalized: keeps the pointer rotation continuous.
#[inline]
pub fn angle_of(pos: Vec3) -> f32 {
    let offset = Vec2::new(pos.x - TRACKING_CENTER_X, pos.y - TRACKING_CENTER_Y);
    offset.y.atan2(offset.x)
}

/// Next player angle given the previous one and the latest sample
pub fn track(previous: f32, sample: Option<&HandSample>) -> f32 {
    sample
        .and_then(HandSample::active)
        .map(angle_of)
        .unwrap_or(previous)
}

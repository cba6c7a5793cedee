//! Difficulty ramp
//!
//! Survival time is split into tiers. Each tier fixes how long a wall takes to
//! travel from the spawn distance to the center, and also picks the wall palette.
//! Speed is derived from the tier on every tick and applies to every live wall.

use serde::{Deserialize, Serialize};

use crate::consts::SPAWN_DISTANCE;

/// Player-selected difficulty (only decides starting lives)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    /// Lives granted at the start of a run
    pub fn starting_lives(&self) -> u8 {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Normal => 2,
            Difficulty::Hard => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Normal => "NORMAL",
            Difficulty::Hard => "HARD",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// Survival-time bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    /// [0, 20)
    Warmup,
    /// [20, 40)
    Rising,
    /// [40, 60)
    Danger,
    /// [60, ∞)
    Final,
}

impl Tier {
    /// Tier for a survival time (seconds). Tier starts are inclusive.
    pub fn for_time(survival_time: f32) -> Self {
        if survival_time >= 60.0 {
            Tier::Final
        } else if survival_time >= 40.0 {
            Tier::Danger
        } else if survival_time >= 20.0 {
            Tier::Rising
        } else {
            Tier::Warmup
        }
    }

    /// Seconds a wall needs to cover the spawn distance
    pub fn travel_duration(&self) -> f32 {
        match self {
            Tier::Warmup => 5.0,
            Tier::Rising => 4.0,
            Tier::Danger => 3.0,
            Tier::Final => 2.0,
        }
    }
}

/// Travel duration for a survival time
#[inline]
pub fn travel_duration(survival_time: f32) -> f32 {
    Tier::for_time(survival_time).travel_duration()
}

/// Global wall speed (distance/sec) for a survival time
#[inline]
pub fn travel_speed(survival_time: f32) -> f32 {
    SPAWN_DISTANCE / travel_duration(survival_time)
}

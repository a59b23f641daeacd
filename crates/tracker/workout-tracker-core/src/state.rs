#![allow(dead_code)]
//! Widget state: animation phase, barbell, counters and transient highlights.
//!
//! All of this is owned exclusively by the engine and mutated only from its
//! `update` path.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::exercise::{Exercise, ExerciseProgress};
use crate::scene::Color;

pub const HEAVY_PLATE_LBS: u32 = 45;
pub const LIGHT_PLATE_LBS: u32 = 25;
pub const HEAVY_PLATE_COLOR: Color = Color::rgb(0xe9, 0x45, 0x60);
pub const LIGHT_PLATE_COLOR: Color = Color::rgb(0xff, 0x6b, 0x81);

/// Animation phases of the widget: Idle → Running ⇄ Paused, back to Idle via
/// reset.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Paused,
}

impl Phase {
    pub fn is_idle(self) -> bool {
        matches!(self, Phase::Idle)
    }

    pub fn is_running(self) -> bool {
        matches!(self, Phase::Running)
    }

    pub fn is_paused(self) -> bool {
        matches!(self, Phase::Paused)
    }
}

/// Travel direction of the lift phase.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiftDirection {
    Up,
    Down,
}

impl LiftDirection {
    pub fn signum(self) -> f32 {
        match self {
            LiftDirection::Up => 1.0,
            LiftDirection::Down => -1.0,
        }
    }
}

/// One visual weight disc on the bar. Plates only affect the displayed
/// total weight, never the simulation.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plate {
    pub weight: u32,
    pub color: Color,
}

impl Plate {
    pub fn heavy() -> Self {
        Plate {
            weight: HEAVY_PLATE_LBS,
            color: HEAVY_PLATE_COLOR,
        }
    }

    pub fn light() -> Self {
        Plate {
            weight: LIGHT_PLATE_LBS,
            color: LIGHT_PLATE_COLOR,
        }
    }
}

/// Barbell display state. `lift_phase` stays in [0, 1]; the direction flips
/// exactly at the two boundaries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Barbell {
    pub plates: Vec<Plate>,
    pub lift_phase: f32,
    pub direction: LiftDirection,
}

impl Barbell {
    /// Bar as loaded at page start: two heavy plates, at the bottom of the
    /// lift.
    pub fn stock() -> Self {
        Barbell {
            plates: vec![Plate::heavy(), Plate::heavy()],
            lift_phase: 0.0,
            direction: LiftDirection::Up,
        }
    }
}

impl Default for Barbell {
    fn default() -> Self {
        Barbell::stock()
    }
}

/// Countdown timers for the transient highlights. A timer above zero means
/// the matching sink is lit; timers decay with frame time and reset clears
/// them outright.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Flashes {
    pub reps: f32,
    pub weight: f32,
    pub sets: [f32; 4],
}

impl Flashes {
    pub fn pulse(&mut self, exercise: Exercise, secs: f32) {
        self.sets[exercise.index()] = secs;
    }

    pub fn pulsing(&self, exercise: Exercise) -> bool {
        self.sets[exercise.index()] > 0.0
    }

    pub fn decay(&mut self, dt: f32) {
        self.reps = (self.reps - dt).max(0.0);
        self.weight = (self.weight - dt).max(0.0);
        for slot in &mut self.sets {
            *slot = (*slot - dt).max(0.0);
        }
    }

    pub fn clear(&mut self) {
        *self = Flashes::default();
    }
}

/// The widget's complete mutable state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkoutState {
    pub phase: Phase,
    pub elapsed_seconds: f32,
    pub total_reps: u32,
    pub current_weight: u32,
    pub calories_burned: u32,
    pub barbell: Barbell,
    pub exercises: ExerciseProgress,
    pub flashes: Flashes,
}

impl WorkoutState {
    pub fn new(cfg: &Config) -> Self {
        WorkoutState {
            phase: Phase::Idle,
            elapsed_seconds: 0.0,
            total_reps: 0,
            current_weight: cfg.starting_weight,
            calories_burned: 0,
            barbell: Barbell::stock(),
            exercises: ExerciseProgress::default(),
            flashes: Flashes::default(),
        }
    }

    /// Return every field to its initial value.
    pub fn reset(&mut self, cfg: &Config) {
        *self = WorkoutState::new(cfg);
    }

    /// Progress toward the rep target, in percent, capped at 100.
    pub fn progress_percent(&self, cfg: &Config) -> f32 {
        (self.total_reps as f32 / cfg.rep_target as f32 * 100.0).min(100.0)
    }
}

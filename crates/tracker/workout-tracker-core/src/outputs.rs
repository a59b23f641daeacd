#![allow(dead_code)]
//! Output contracts from the widget engine.
//!
//! `Outputs` carries the per-tick display snapshot for the text/progress
//! sinks and a separate list of semantic events. Adapters apply the
//! snapshot to the host and transport events.

use serde::{Deserialize, Serialize};

use crate::exercise::Exercise;

/// Discrete semantic signals emitted during stepping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum WidgetEvent {
    WorkoutStarted,
    WorkoutPaused,
    WorkoutResumed,
    WorkoutReset,
    RepCompleted {
        total: u32,
    },
    SetCredited {
        exercise: Exercise,
        completed: u8,
    },
    WeightAdded {
        plate_lbs: u32,
        total_lbs: u32,
    },
}

/// One per-exercise display line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExerciseLine {
    pub exercise: Exercise,
    pub name: String,
    pub completed: u8,
    pub cap: u8,
    /// "<n>/<max> sets completed"
    pub summary: String,
    pub pulsing: bool,
}

/// Mirror of the control-button wiring: which triggers are live and what the
/// pause toggle should read.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ControlHints {
    pub start_enabled: bool,
    pub pause_enabled: bool,
    /// "Pause" while running, "Resume" while paused.
    pub pause_label: String,
}

impl Default for ControlHints {
    fn default() -> Self {
        ControlHints {
            start_enabled: true,
            pause_enabled: false,
            pause_label: "Pause".to_string(),
        }
    }
}

/// Values for the plain-text and progress-bar sinks, rebuilt every tick.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub weight_lbs: u32,
    pub total_reps: u32,
    pub elapsed_seconds: f32,
    /// "mm:ss"
    pub clock: String,
    pub calories_burned: u32,
    pub progress_percent: f32,
    /// Rounded percent, e.g. "42%".
    pub progress_label: String,
    pub exercises: Vec<ExerciseLine>,
    pub reps_flashing: bool,
    pub weight_flashing: bool,
    pub controls: ControlHints,
}

/// Outputs returned by `Engine::update()`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Outputs {
    pub snapshot: StatsSnapshot,
    #[serde(default)]
    pub events: Vec<WidgetEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.events.clear();
    }

    #[inline]
    pub fn push_event(&mut self, event: WidgetEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }
}

/// Format seconds as the "mm:ss" wall clock shown by the widget.
pub fn format_clock(elapsed_seconds: f32) -> String {
    let total = elapsed_seconds.max(0.0) as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// it should format whole minutes and pad single digits
    #[test]
    fn clock_formatting() {
        assert_eq!(format_clock(0.0), "00:00");
        assert_eq!(format_clock(59.9), "00:59");
        assert_eq!(format_clock(60.0), "01:00");
        assert_eq!(format_clock(65.2), "01:05");
        assert_eq!(format_clock(3599.0), "59:59");
        assert_eq!(format_clock(-3.0), "00:00");
    }
}

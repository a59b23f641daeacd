#![allow(dead_code)]
//! Core configuration for workout-tracker-core.

use serde::{Deserialize, Serialize};

use crate::error::WidgetError;

/// Tuning knobs for the simulated workout.
/// Defaults reproduce the stock widget; hosts override fields via JSON.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Lift-phase advance per frame, in (0, 1].
    pub lift_step: f32,
    /// Rep count at which progress reads 100%.
    pub rep_target: u32,
    /// Calories credited per rep (floored for display).
    pub calories_per_rep: f32,
    /// Chance that a completed rep credits a set to a random exercise.
    pub set_credit_probability: f64,
    /// Bar plus starting plates, in lbs.
    pub starting_weight: u32,
    /// Above this total weight, Add Weight switches to the small plate.
    pub heavy_plate_cutoff: u32,
    /// Seconds the rep/weight highlight stays lit.
    pub flash_secs: f32,
    /// Seconds an exercise pulse stays lit after a credited set.
    pub pulse_secs: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lift_step: 0.02,
            rep_target: 50,
            calories_per_rep: 0.5,
            set_credit_probability: 0.3,
            starting_weight: 135,
            heavy_plate_cutoff: 315,
            flash_secs: 1.0,
            pulse_secs: 2.0,
        }
    }
}

impl Config {
    /// Check the ranges the engine assumes. Untrusted configs (e.g. JSON from
    /// a host page) go through here before reaching `Engine::new`.
    pub fn validate(&self) -> Result<(), WidgetError> {
        if !self.lift_step.is_finite() || self.lift_step <= 0.0 || self.lift_step > 1.0 {
            return Err(WidgetError::invalid_config(format!(
                "lift_step must be in (0, 1], got {}",
                self.lift_step
            )));
        }
        if !(0.0..=1.0).contains(&self.set_credit_probability) {
            return Err(WidgetError::invalid_config(format!(
                "set_credit_probability must be in [0, 1], got {}",
                self.set_credit_probability
            )));
        }
        if self.rep_target == 0 {
            return Err(WidgetError::invalid_config("rep_target must be at least 1"));
        }
        if !self.calories_per_rep.is_finite() || self.calories_per_rep < 0.0 {
            return Err(WidgetError::invalid_config(format!(
                "calories_per_rep must be non-negative, got {}",
                self.calories_per_rep
            )));
        }
        if self.flash_secs < 0.0 || self.pulse_secs < 0.0 {
            return Err(WidgetError::invalid_config(
                "highlight durations must be non-negative",
            ));
        }
        Ok(())
    }
}

#![allow(dead_code)]
//! Input contracts for the widget engine.
//!
//! Adapters collect the user-triggered control actions and pass them into
//! `Engine::update()` each frame; commands apply in order before stepping.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Inputs {
    /// Control commands applied before stepping.
    #[serde(default)]
    pub commands: Vec<Command>,
}

impl Inputs {
    /// A single-command input batch.
    pub fn one(command: Command) -> Self {
        Inputs {
            commands: vec![command],
        }
    }
}

/// The widget's four zero-argument control actions.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Begin animating. Valid only while idle.
    Start,
    /// Flip between running and paused. Ignored while idle.
    TogglePause,
    /// Return to the initial idle state from any phase.
    Reset,
    /// Append a plate and raise the displayed weight. No phase transition.
    AddWeight,
}

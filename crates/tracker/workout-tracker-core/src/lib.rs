#![allow(dead_code)]
//! Workout tracker widget core (host-agnostic).
//!
//! This crate owns the animation state machine (Idle → Running ⇄ Paused),
//! the per-frame lift-cycle update, the scene renderer that turns state into
//! ordered draw primitives, and the display-sink snapshot. Hosts (the web
//! page through the wasm adapter, tests through [`Runtime`]) drive one
//! `update` + `render` per frame and inject time and randomness.

pub mod config;
pub mod engine;
pub mod error;
pub mod exercise;
pub mod inputs;
pub mod outputs;
pub mod scene;
pub mod schedule;
pub mod state;

// Re-exports for consumers (adapters)
pub use config::Config;
pub use engine::Engine;
pub use error::WidgetError;
pub use exercise::{Exercise, ExerciseProgress};
pub use inputs::{Command, Inputs};
pub use outputs::{
    format_clock, ControlHints, ExerciseLine, Outputs, StatsSnapshot, WidgetEvent,
};
pub use scene::{render, Color, DrawCmd, DrawList, TextAlign, SCENE_HEIGHT, SCENE_WIDTH};
pub use schedule::{FrameScheduler, Runtime};
pub use state::{Barbell, Flashes, LiftDirection, Phase, Plate, WorkoutState};

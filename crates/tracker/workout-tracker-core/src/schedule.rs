#![allow(dead_code)]
//! Frame scheduling seam.
//!
//! The browser drives the widget through a per-frame callback chain; tests
//! drive it directly. `FrameScheduler` abstracts that chain so the
//! update/draw logic never touches the host's timing machinery.

use crate::engine::Engine;
use crate::inputs::Inputs;
use crate::outputs::Outputs;
use crate::scene::{self, DrawList};

/// Host hook for the per-frame callback chain.
pub trait FrameScheduler {
    /// Ask the host to run one more frame.
    fn request_frame(&mut self);
    /// Drop any pending frame request.
    fn cancel_frame(&mut self);
}

/// Engine plus scheduler: one `tick` is one full frame.
pub struct Runtime<S: FrameScheduler> {
    engine: Engine,
    scheduler: S,
}

impl<S: FrameScheduler> Runtime<S> {
    pub fn new(engine: Engine, scheduler: S) -> Self {
        Runtime { engine, scheduler }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Outputs of the most recent tick.
    pub fn outputs(&self) -> &Outputs {
        self.engine.outputs()
    }

    /// Run one frame: step the engine, render the scene unconditionally,
    /// then keep the callback chain alive only while animating. A reset
    /// lands here as a tick whose scene is the idle redraw and which cancels
    /// any pending frame.
    pub fn tick(&mut self, dt: f32, inputs: Inputs) -> DrawList {
        self.engine.update(dt, inputs);
        let scene = scene::render(self.engine.state());

        if self.engine.is_animating() {
            self.scheduler.request_frame();
        } else {
            self.scheduler.cancel_frame();
        }
        scene
    }
}

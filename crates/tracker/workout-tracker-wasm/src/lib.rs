//! wasm-bindgen interface for the workout tracker widget.
//!
//! The host page owns the canvas element and the requestAnimationFrame
//! chain; this crate wraps the core runtime, applies the control triggers
//! and paints the core's draw list onto a provided 2d context.

use js_sys::Function;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use workout_tracker_core::{Command, Config, DrawList, Engine, FrameScheduler, Inputs, Runtime};

mod canvas;

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

/// Bumped when the JS-visible surface changes shape.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}

/// Bridges the core scheduler seam to host callbacks, typically thin
/// wrappers around requestAnimationFrame / cancelAnimationFrame. Without
/// hooks the host polls `wants_frame` instead.
struct JsScheduler {
    request: Option<Function>,
    cancel: Option<Function>,
}

impl JsScheduler {
    fn unhooked() -> Self {
        JsScheduler {
            request: None,
            cancel: None,
        }
    }
}

impl FrameScheduler for JsScheduler {
    fn request_frame(&mut self) {
        if let Some(f) = &self.request {
            let _ = f.call0(&JsValue::UNDEFINED);
        }
    }

    fn cancel_frame(&mut self) {
        if let Some(f) = &self.cancel {
            let _ = f.call0(&JsValue::UNDEFINED);
        }
    }
}

#[wasm_bindgen]
pub struct WorkoutWidget {
    core: Runtime<JsScheduler>,
    scene: DrawList,
}

#[wasm_bindgen]
impl WorkoutWidget {
    /// Create a widget. Pass a JSON config object or undefined/null for
    /// defaults.
    /// Example:
    ///   new WorkoutWidget({ rep_target: 30 })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<WorkoutWidget, JsError> {
        console_error_panic_hook::set_once();

        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        cfg.validate().map_err(|e| JsError::new(&e.to_string()))?;

        let mut core = Runtime::new(Engine::new(cfg), JsScheduler::unhooked());
        // Initial idle draw so `render` has a scene before the first update.
        let scene = core.tick(0.0, Inputs::default());
        Ok(WorkoutWidget { core, scene })
    }

    /// Install the host's frame callbacks. After this, the widget keeps the
    /// callback chain alive on its own while running.
    #[wasm_bindgen(js_name = set_frame_hooks)]
    pub fn set_frame_hooks(&mut self, request_frame: Function, cancel_frame: Function) {
        *self.core.scheduler_mut() = JsScheduler {
            request: Some(request_frame),
            cancel: Some(cancel_frame),
        };
    }

    /// Step one frame. `dt` is the frame duration in seconds. Returns this
    /// tick's outputs (display snapshot + events) as a JS object.
    pub fn update(&mut self, dt: f32) -> Result<JsValue, JsError> {
        self.tick(dt, Inputs::default())
    }

    /// Begin the workout. Valid only while idle.
    pub fn start(&mut self) -> Result<JsValue, JsError> {
        self.tick(0.0, Inputs::one(Command::Start))
    }

    /// Flip between running and paused.
    #[wasm_bindgen(js_name = toggle_pause)]
    pub fn toggle_pause(&mut self) -> Result<JsValue, JsError> {
        self.tick(0.0, Inputs::one(Command::TogglePause))
    }

    /// Return to the initial idle state and redraw the idle scene.
    pub fn reset(&mut self) -> Result<JsValue, JsError> {
        self.tick(0.0, Inputs::one(Command::Reset))
    }

    /// Append a plate and raise the displayed weight.
    #[wasm_bindgen(js_name = add_weight)]
    pub fn add_weight(&mut self) -> Result<JsValue, JsError> {
        self.tick(0.0, Inputs::one(Command::AddWeight))
    }

    /// True while the widget wants another animation frame.
    #[wasm_bindgen(js_name = wants_frame)]
    pub fn wants_frame(&self) -> bool {
        self.core.engine().is_animating()
    }

    /// Current display-sink snapshot, without stepping a frame.
    pub fn snapshot(&self) -> Result<JsValue, JsError> {
        swb::to_value(&self.core.outputs().snapshot)
            .map_err(|e| JsError::new(&format!("snapshot error: {e}")))
    }

    /// Paint the most recent scene onto a canvas 2d context.
    pub fn render(&self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        canvas::paint(ctx, &self.scene)
    }

    /// The most recent scene as a draw-list object, for hosts with their own
    /// drawing surface.
    #[wasm_bindgen(js_name = draw_list)]
    pub fn draw_list(&self) -> Result<JsValue, JsError> {
        swb::to_value(&self.scene).map_err(|e| JsError::new(&format!("draw list error: {e}")))
    }

    fn tick(&mut self, dt: f32, inputs: Inputs) -> Result<JsValue, JsError> {
        self.scene = self.core.tick(dt, inputs);
        swb::to_value(self.core.outputs())
            .map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }
}

#![allow(dead_code)]
//! Engine: data ownership and the per-frame update.
//!
//! One `update(dt, inputs)` call is one frame: commands apply first, then the
//! lift cycle advances a fixed step, then the display snapshot is rebuilt.
//! Time and randomness come in from outside so hosts and tests control both.

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::config::Config;
use crate::exercise::Exercise;
use crate::inputs::{Command, Inputs};
use crate::outputs::{format_clock, ControlHints, ExerciseLine, Outputs, StatsSnapshot, WidgetEvent};
use crate::state::{LiftDirection, Phase, Plate, WorkoutState};

pub struct Engine {
    cfg: Config,
    state: WorkoutState,
    rng: Box<dyn RngCore>,

    // Per-tick outputs
    outputs: Outputs,
}

impl Engine {
    /// Create an engine with entropy-seeded randomness.
    ///
    /// The config is taken as-is; run untrusted configs through
    /// [`Config::validate`] first.
    pub fn new(cfg: Config) -> Self {
        Self::with_rng(cfg, SmallRng::from_entropy())
    }

    /// Create an engine with an injected random source, so tests can pin the
    /// set-credit outcomes.
    pub fn with_rng(cfg: Config, rng: impl RngCore + 'static) -> Self {
        let state = WorkoutState::new(&cfg);
        Self {
            cfg,
            state,
            rng: Box::new(rng),
            outputs: Outputs::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn state(&self) -> &WorkoutState {
        &self.state
    }

    /// Outputs of the most recent `update`.
    pub fn outputs(&self) -> &Outputs {
        &self.outputs
    }

    /// True while frames should keep being scheduled.
    pub fn is_animating(&self) -> bool {
        self.state.phase.is_running()
    }

    /// Step one frame with the given inputs, producing outputs. `dt` is the
    /// frame duration in seconds and feeds only the clock and the highlight
    /// timers; the lift phase advances by the configured fixed step.
    pub fn update(&mut self, dt: f32, inputs: Inputs) -> &Outputs {
        self.outputs.clear();

        self.apply_inputs(inputs);
        self.advance(dt.max(0.0));
        self.refresh_snapshot();

        &self.outputs
    }

    fn apply_inputs(&mut self, inputs: Inputs) {
        for command in inputs.commands {
            match command {
                Command::Start => {
                    if self.state.phase.is_idle() {
                        self.state.phase = Phase::Running;
                        log::debug!("workout started");
                        self.outputs.push_event(WidgetEvent::WorkoutStarted);
                    }
                }
                Command::TogglePause => match self.state.phase {
                    Phase::Running => {
                        self.state.phase = Phase::Paused;
                        log::debug!("workout paused at {:.1}s", self.state.elapsed_seconds);
                        self.outputs.push_event(WidgetEvent::WorkoutPaused);
                    }
                    Phase::Paused => {
                        self.state.phase = Phase::Running;
                        log::debug!("workout resumed");
                        self.outputs.push_event(WidgetEvent::WorkoutResumed);
                    }
                    Phase::Idle => {}
                },
                Command::Reset => {
                    self.state.reset(&self.cfg);
                    log::debug!("workout reset");
                    self.outputs.push_event(WidgetEvent::WorkoutReset);
                }
                Command::AddWeight => self.add_weight(),
            }
        }
    }

    fn add_weight(&mut self) {
        let plate = if self.state.current_weight <= self.cfg.heavy_plate_cutoff {
            Plate::heavy()
        } else {
            Plate::light()
        };
        self.state.current_weight += plate.weight;
        self.state.barbell.plates.push(plate);
        self.state.flashes.weight = self.cfg.flash_secs;

        log::debug!(
            "added {} lb plate, total {} lbs",
            plate.weight,
            self.state.current_weight
        );
        self.outputs.push_event(WidgetEvent::WeightAdded {
            plate_lbs: plate.weight,
            total_lbs: self.state.current_weight,
        });
    }

    fn advance(&mut self, dt: f32) {
        // Highlights fade in wall time whatever the phase.
        self.state.flashes.decay(dt);

        if !self.state.phase.is_running() {
            return;
        }
        self.state.elapsed_seconds += dt;

        let step = self.cfg.lift_step * self.state.barbell.direction.signum();
        let phase = self.state.barbell.lift_phase + step;
        if phase >= 1.0 {
            self.state.barbell.lift_phase = 1.0;
            self.state.barbell.direction = LiftDirection::Down;
            self.complete_rep();
        } else if phase <= 0.0 {
            self.state.barbell.lift_phase = 0.0;
            self.state.barbell.direction = LiftDirection::Up;
        } else {
            self.state.barbell.lift_phase = phase;
        }
    }

    /// The top of the lift marks one full repetition.
    fn complete_rep(&mut self) {
        self.state.total_reps += 1;
        self.state.calories_burned =
            (self.state.total_reps as f32 * self.cfg.calories_per_rep).floor() as u32;
        self.state.flashes.reps = self.cfg.flash_secs;

        log::trace!("rep {} completed", self.state.total_reps);
        self.outputs.push_event(WidgetEvent::RepCompleted {
            total: self.state.total_reps,
        });

        if self.rng.gen_bool(self.cfg.set_credit_probability) {
            let exercise = Exercise::ALL[self.rng.gen_range(0..Exercise::ALL.len())];
            let completed = self.state.exercises.credit(exercise);
            self.state.flashes.pulse(exercise, self.cfg.pulse_secs);

            log::trace!("set credited to {:?} ({completed})", exercise);
            self.outputs
                .push_event(WidgetEvent::SetCredited { exercise, completed });
        }
    }

    fn refresh_snapshot(&mut self) {
        let state = &self.state;
        let progress = state.progress_percent(&self.cfg);

        let exercises = Exercise::ALL
            .iter()
            .map(|&exercise| ExerciseLine {
                exercise,
                name: exercise.label().to_string(),
                completed: state.exercises.completed(exercise),
                cap: exercise.max_sets(),
                summary: state.exercises.summary(exercise),
                pulsing: state.flashes.pulsing(exercise),
            })
            .collect();

        self.outputs.snapshot = StatsSnapshot {
            weight_lbs: state.current_weight,
            total_reps: state.total_reps,
            elapsed_seconds: state.elapsed_seconds,
            clock: format_clock(state.elapsed_seconds),
            calories_burned: state.calories_burned,
            progress_percent: progress,
            progress_label: format!("{}%", progress.round() as u32),
            exercises,
            reps_flashing: state.flashes.reps > 0.0,
            weight_flashing: state.flashes.weight > 0.0,
            controls: ControlHints {
                start_enabled: state.phase.is_idle(),
                pause_enabled: !state.phase.is_idle(),
                pause_label: if state.phase.is_paused() {
                    "Resume".to_string()
                } else {
                    "Pause".to_string()
                },
            },
        };
    }
}

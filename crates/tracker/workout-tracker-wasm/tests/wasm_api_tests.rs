#![cfg(target_arch = "wasm32")]
use serde_wasm_bindgen as swb;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use workout_tracker_core::{Config, DrawList, Outputs, StatsSnapshot, WidgetEvent};
use workout_tracker_wasm::{abi_version, WorkoutWidget};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn abi_is_1() {
    assert_eq!(abi_version(), 1);
}

#[wasm_bindgen_test]
fn construct_with_defaults() {
    let widget = WorkoutWidget::new(JsValue::UNDEFINED).unwrap();
    assert!(!widget.wants_frame());

    let snapshot: StatsSnapshot = swb::from_value(widget.snapshot().unwrap()).unwrap();
    assert_eq!(snapshot.weight_lbs, 135);
    assert_eq!(snapshot.clock, "00:00");
}

#[wasm_bindgen_test]
fn construct_rejects_bad_config() {
    let mut cfg = Config::default();
    cfg.lift_step = 0.0;
    let js_cfg = swb::to_value(&cfg).unwrap();
    assert!(WorkoutWidget::new(js_cfg).is_err());
}

#[wasm_bindgen_test]
fn start_update_and_reset_flow() {
    let mut widget = WorkoutWidget::new(JsValue::NULL).unwrap();

    let out: Outputs = swb::from_value(widget.start().unwrap()).unwrap();
    assert!(matches!(
        out.events.as_slice(),
        [WidgetEvent::WorkoutStarted]
    ));
    assert!(widget.wants_frame());

    for _ in 0..100 {
        widget.update(1.0 / 60.0).unwrap();
    }
    let snapshot: StatsSnapshot = swb::from_value(widget.snapshot().unwrap()).unwrap();
    assert!(snapshot.total_reps >= 1);

    widget.reset().unwrap();
    assert!(!widget.wants_frame());
    let snapshot: StatsSnapshot = swb::from_value(widget.snapshot().unwrap()).unwrap();
    assert_eq!(snapshot.total_reps, 0);
    assert_eq!(snapshot.weight_lbs, 135);
}

#[wasm_bindgen_test]
fn add_weight_updates_snapshot() {
    let mut widget = WorkoutWidget::new(JsValue::NULL).unwrap();
    widget.add_weight().unwrap();
    widget.add_weight().unwrap();

    let snapshot: StatsSnapshot = swb::from_value(widget.snapshot().unwrap()).unwrap();
    assert_eq!(snapshot.weight_lbs, 225);
    assert!(snapshot.weight_flashing);
}

#[wasm_bindgen_test]
fn draw_list_is_nonempty() {
    let widget = WorkoutWidget::new(JsValue::NULL).unwrap();
    let scene: DrawList = swb::from_value(widget.draw_list().unwrap()).unwrap();
    assert!(!scene.is_empty());
}

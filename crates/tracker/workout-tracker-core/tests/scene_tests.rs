use workout_tracker_core::{
    render, Color, Command, Config, DrawCmd, Engine, Inputs, WorkoutState, SCENE_HEIGHT,
    SCENE_WIDTH,
};

use rand::rngs::mock::StepRng;

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn idle_state() -> WorkoutState {
    WorkoutState::new(&Config::default())
}

/// it should order the scene: background first, stats overlay last
#[test]
fn scene_ordering() {
    let scene = render(&idle_state());
    let cmds: Vec<_> = scene.iter().collect();

    assert!(matches!(
        cmds[0],
        DrawCmd::GradientRect { x, y, w, h, .. }
            if *x == 0.0 && *y == 0.0 && *w == SCENE_WIDTH && *h == SCENE_HEIGHT
    ));
    assert!(matches!(
        cmds.last().unwrap(),
        DrawCmd::Text { text, .. } if text == "Sets: 0"
    ));
}

/// it should cover the floor band and draw one slat line per 40 px
#[test]
fn background_floor_and_slats() {
    let scene = render(&idle_state());

    assert!(scene.iter().any(|cmd| matches!(
        cmd,
        DrawCmd::Rect { x, y, w, h, .. }
            if *x == 0.0 && *y == 350.0 && *w == SCENE_WIDTH && *h == 50.0
    )));
    let slats = scene
        .iter()
        .filter(|cmd| matches!(cmd, DrawCmd::Line { y1, y2, .. } if *y1 == 350.0 && *y2 == 400.0))
        .count();
    assert_eq!(slats, 20);
}

/// it should bob the lifter by the sine of the lift phase
#[test]
fn lifter_bobs_with_phase() {
    let head_cy = |state: &WorkoutState| -> f32 {
        render(state)
            .iter()
            .find_map(|cmd| match cmd {
                DrawCmd::Circle { cy, .. } => Some(*cy),
                _ => None,
            })
            .expect("scene has a head circle")
    };

    let mut state = idle_state();
    approx(head_cy(&state), 230.0, 1e-4);

    state.barbell.lift_phase = 0.5;
    approx(head_cy(&state), 180.0, 1e-4);

    state.barbell.lift_phase = 1.0;
    approx(head_cy(&state), 230.0, 1e-3);
}

/// it should draw one labeled plate per barbell plate, alternating sides
#[test]
fn plates_alternate_and_carry_labels() {
    let scene = render(&idle_state());

    // Two stock plates: first on the left end, second on the right, one
    // spacing step further in.
    assert!(scene.iter().any(|cmd| matches!(
        cmd,
        DrawCmd::Rect { x, y, w, h, .. }
            if *x == 245.0 && *y == 240.0 && *w == 30.0 && *h == 60.0
    )));
    assert!(scene
        .iter()
        .any(|cmd| matches!(cmd, DrawCmd::Rect { x, .. } if *x == 490.0)));

    let labels = scene
        .iter()
        .filter(|cmd| matches!(cmd, DrawCmd::Text { text, .. } if text == "45lbs"))
        .count();
    assert_eq!(labels, 2);
}

/// it should render the small plate with its own color after a heavy bar
#[test]
fn light_plate_rendering() {
    let mut eng = Engine::with_rng(Config::default(), StepRng::new(u64::MAX, 0));
    for _ in 0..6 {
        eng.update(0.0, Inputs::one(Command::AddWeight));
    }

    let scene = render(eng.state());
    assert!(scene.iter().any(|cmd| matches!(
        cmd,
        DrawCmd::Rect { color, .. } if *color == Color::rgb(0xff, 0x6b, 0x81)
    )));
    assert!(scene
        .iter()
        .any(|cmd| matches!(cmd, DrawCmd::Text { text, .. } if text == "25lbs")));
}

/// it should reflect live stats in the overlay text
#[test]
fn stats_overlay_text() {
    let mut state = idle_state();
    state.current_weight = 225;
    state.total_reps = 12;

    let texts: Vec<String> = render(&state)
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCmd::Text { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect();
    assert!(texts.contains(&"Workout Stats".to_string()));
    assert!(texts.contains(&"Weight: 225 lbs".to_string()));
    assert!(texts.contains(&"Reps: 12".to_string()));
}

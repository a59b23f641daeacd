#![allow(dead_code)]
//! Scene renderer: pure state → ordered draw primitives.
//!
//! The widget draws on a fixed 800×400 logical surface. `render` emits the
//! background, the barbell with its plates, the lifting figure and the stats
//! overlay, in that order; hosts replay the list onto their drawing surface.

use serde::{Deserialize, Serialize};

use crate::state::WorkoutState;

pub const SCENE_WIDTH: f32 = 800.0;
pub const SCENE_HEIGHT: f32 = 400.0;

const FLOOR_TOP: f32 = 350.0;
const FLOOR_LINE_SPACING: f32 = 40.0;

const BAR_CENTER_X: f32 = SCENE_WIDTH / 2.0;
const BAR_Y: f32 = 300.0;
const BAR_WIDTH: f32 = 300.0;
const BAR_HEIGHT: f32 = 10.0;

const PLATE_WIDTH: f32 = 30.0;
const PLATE_HEIGHT: f32 = 60.0;
const PLATE_SPACING: f32 = 35.0;

const LIFT_AMPLITUDE: f32 = 50.0;

/// sRGB color with straight alpha, rendered as a CSS color string for
/// canvas-style hosts.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Color { r, g, b, a }
    }

    /// CSS color string: `#rrggbb` when opaque, `rgba(...)` otherwise.
    pub fn css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

mod palette {
    use super::Color;

    pub const BACKDROP_TOP: Color = Color::rgb(0x0d, 0x0d, 0x1a);
    pub const BACKDROP_BOTTOM: Color = Color::rgb(0x1a, 0x1a, 0x2e);
    pub const FLOOR: Color = Color::rgb(0x2a, 0x2a, 0x4a);
    pub const FLOOR_LINES: Color = Color::rgb(0x0f, 0x34, 0x60);
    pub const BAR: Color = Color::rgb(0xcc, 0xcc, 0xcc);
    pub const SKIN: Color = Color::rgb(0xff, 0xcc, 0x99);
    pub const TORSO: Color = Color::rgb(0x0f, 0x34, 0x60);
    pub const LEGS: Color = Color::rgb(0x16, 0x21, 0x3e);
    pub const PANEL: Color = Color::rgba(0xff, 0xff, 0xff, 0.2);
    pub const TEXT: Color = Color::rgb(0xff, 0xff, 0xff);
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
}

/// One drawing primitive. A frame's scene is an ordered list of these.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCmd {
    /// Vertical linear gradient fill.
    GradientRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        top: Color,
        bottom: Color,
    },
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    },
    Circle {
        cx: f32,
        cy: f32,
        r: f32,
        color: Color,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
        color: Color,
    },
    Text {
        x: f32,
        y: f32,
        text: String,
        size: f32,
        bold: bool,
        align: TextAlign,
        color: Color,
    },
}

/// Ordered draw primitives for one frame.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawList {
    cmds: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.cmds.push(cmd);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCmd> {
        self.cmds.iter()
    }
}

/// Render the full scene for the current state. Called once per frame,
/// regardless of phase.
pub fn render(state: &WorkoutState) -> DrawList {
    let mut list = DrawList::default();
    draw_background(&mut list);
    draw_barbell(state, &mut list);
    draw_lifter(state, &mut list);
    draw_stats_panel(state, &mut list);
    list
}

fn draw_background(list: &mut DrawList) {
    list.push(DrawCmd::GradientRect {
        x: 0.0,
        y: 0.0,
        w: SCENE_WIDTH,
        h: SCENE_HEIGHT,
        top: palette::BACKDROP_TOP,
        bottom: palette::BACKDROP_BOTTOM,
    });

    // Gym floor with its vertical slat pattern.
    list.push(DrawCmd::Rect {
        x: 0.0,
        y: FLOOR_TOP,
        w: SCENE_WIDTH,
        h: SCENE_HEIGHT - FLOOR_TOP,
        color: palette::FLOOR,
    });
    let mut x = 0.0;
    while x < SCENE_WIDTH {
        list.push(DrawCmd::Line {
            x1: x,
            y1: FLOOR_TOP,
            x2: x,
            y2: SCENE_HEIGHT,
            width: 2.0,
            color: palette::FLOOR_LINES,
        });
        x += FLOOR_LINE_SPACING;
    }
}

fn draw_barbell(state: &WorkoutState, list: &mut DrawList) {
    list.push(DrawCmd::Rect {
        x: BAR_CENTER_X - BAR_WIDTH / 2.0,
        y: BAR_Y,
        w: BAR_WIDTH,
        h: BAR_HEIGHT,
        color: palette::BAR,
    });

    // Plates alternate sides from the bar ends inward. The offset decrement
    // is fixed; very long plate lists overlap, which is cosmetic.
    let mut offset = BAR_WIDTH / 2.0 - 10.0;
    for (idx, plate) in state.barbell.plates.iter().enumerate() {
        let side = if idx % 2 == 0 { -1.0 } else { 1.0 };
        let x = BAR_CENTER_X + side * offset;

        list.push(DrawCmd::Rect {
            x: x - PLATE_WIDTH / 2.0,
            y: BAR_Y - PLATE_HEIGHT,
            w: PLATE_WIDTH,
            h: PLATE_HEIGHT,
            color: plate.color,
        });
        list.push(DrawCmd::Text {
            x,
            y: BAR_Y - PLATE_HEIGHT / 2.0,
            text: format!("{}lbs", plate.weight),
            size: 14.0,
            bold: true,
            align: TextAlign::Center,
            color: palette::TEXT,
        });

        offset -= PLATE_SPACING;
    }
}

fn draw_lifter(state: &WorkoutState, list: &mut DrawList) {
    let lift = LIFT_AMPLITUDE * (state.barbell.lift_phase * std::f32::consts::PI).sin();
    let y = BAR_Y - 50.0 - lift;

    // Head
    list.push(DrawCmd::Circle {
        cx: BAR_CENTER_X,
        cy: y - 20.0,
        r: 15.0,
        color: palette::SKIN,
    });
    // Body
    list.push(DrawCmd::Rect {
        x: BAR_CENTER_X - 10.0,
        y,
        w: 20.0,
        h: 60.0,
        color: palette::TORSO,
    });
    // Arms holding the bar
    list.push(DrawCmd::Rect {
        x: BAR_CENTER_X - BAR_WIDTH / 2.0,
        y: y + 15.0,
        w: BAR_WIDTH,
        h: 10.0,
        color: palette::SKIN,
    });
    // Legs
    list.push(DrawCmd::Rect {
        x: BAR_CENTER_X - 8.0,
        y: y + 60.0,
        w: 8.0,
        h: 40.0,
        color: palette::LEGS,
    });
    list.push(DrawCmd::Rect {
        x: BAR_CENTER_X,
        y: y + 60.0,
        w: 8.0,
        h: 40.0,
        color: palette::LEGS,
    });
}

fn draw_stats_panel(state: &WorkoutState, list: &mut DrawList) {
    list.push(DrawCmd::Rect {
        x: 20.0,
        y: 20.0,
        w: 200.0,
        h: 100.0,
        color: palette::PANEL,
    });
    list.push(DrawCmd::Text {
        x: 30.0,
        y: 40.0,
        text: "Workout Stats".to_string(),
        size: 16.0,
        bold: false,
        align: TextAlign::Left,
        color: palette::TEXT,
    });

    let lines = [
        (65.0, format!("Weight: {} lbs", state.current_weight)),
        (85.0, format!("Reps: {}", state.total_reps)),
        (105.0, format!("Sets: {}", state.exercises.total())),
    ];
    for (y, text) in lines {
        list.push(DrawCmd::Text {
            x: 30.0,
            y,
            text,
            size: 14.0,
            bold: false,
            align: TextAlign::Left,
            color: palette::TEXT,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// it should print opaque colors as hex and translucent ones as rgba()
    #[test]
    fn css_color_strings() {
        assert_eq!(Color::rgb(0xe9, 0x45, 0x60).css(), "#e94560");
        assert_eq!(Color::rgb(0xff, 0xff, 0xff).css(), "#ffffff");
        assert_eq!(
            Color::rgba(0xff, 0xff, 0xff, 0.2).css(),
            "rgba(255, 255, 255, 0.2)"
        );
    }
}

//! Replays a core draw list onto a canvas 2d context.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use workout_tracker_core::{DrawCmd, DrawList, TextAlign};

pub(crate) fn paint(ctx: &CanvasRenderingContext2d, list: &DrawList) -> Result<(), JsValue> {
    for cmd in list.iter() {
        match cmd {
            DrawCmd::GradientRect {
                x,
                y,
                w,
                h,
                top,
                bottom,
            } => {
                let gradient = ctx.create_linear_gradient(
                    f64::from(*x),
                    f64::from(*y),
                    f64::from(*x),
                    f64::from(y + h),
                );
                gradient.add_color_stop(0.0, &top.css())?;
                gradient.add_color_stop(1.0, &bottom.css())?;
                ctx.set_fill_style_canvas_gradient(&gradient);
                ctx.fill_rect(
                    f64::from(*x),
                    f64::from(*y),
                    f64::from(*w),
                    f64::from(*h),
                );
            }
            DrawCmd::Rect { x, y, w, h, color } => {
                ctx.set_fill_style_str(&color.css());
                ctx.fill_rect(
                    f64::from(*x),
                    f64::from(*y),
                    f64::from(*w),
                    f64::from(*h),
                );
            }
            DrawCmd::Circle { cx, cy, r, color } => {
                ctx.set_fill_style_str(&color.css());
                ctx.begin_path();
                ctx.arc(
                    f64::from(*cx),
                    f64::from(*cy),
                    f64::from(*r),
                    0.0,
                    std::f64::consts::TAU,
                )?;
                ctx.fill();
            }
            DrawCmd::Line {
                x1,
                y1,
                x2,
                y2,
                width,
                color,
            } => {
                ctx.set_stroke_style_str(&color.css());
                ctx.set_line_width(f64::from(*width));
                ctx.begin_path();
                ctx.move_to(f64::from(*x1), f64::from(*y1));
                ctx.line_to(f64::from(*x2), f64::from(*y2));
                ctx.stroke();
            }
            DrawCmd::Text {
                x,
                y,
                text,
                size,
                bold,
                align,
                color,
            } => {
                ctx.set_fill_style_str(&color.css());
                ctx.set_font(&font(*size, *bold));
                ctx.set_text_align(match align {
                    TextAlign::Left => "left",
                    TextAlign::Center => "center",
                });
                ctx.fill_text(text, f64::from(*x), f64::from(*y))?;
            }
        }
    }
    Ok(())
}

fn font(size: f32, bold: bool) -> String {
    if bold {
        format!("bold {size}px Arial")
    } else {
        format!("{size}px Arial")
    }
}

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::scene::{DrawCmd, DrawList, Stroke};

/// Replays a recorded frame onto a 2D canvas context.
pub fn paint(list: &DrawList, ctx: &CanvasRenderingContext2d) {
	for cmd in list.cmds() {
		match cmd {
			DrawCmd::Clear { width, height } => ctx.clear_rect(0.0, 0.0, *width, *height),
			DrawCmd::Line { from, to, stroke } => {
				apply_stroke(ctx, stroke);
				ctx.begin_path();
				ctx.move_to(from.0, from.1);
				ctx.line_to(to.0, to.1);
				ctx.stroke();
			}
			DrawCmd::Circle {
				center,
				radius,
				fill,
				stroke,
			} => {
				ctx.begin_path();
				let _ = ctx.arc(center.0, center.1, *radius, 0.0, 2.0 * PI);
				fill_and_stroke(ctx, *fill, stroke.as_ref());
			}
			DrawCmd::Polygon {
				points,
				fill,
				stroke,
			} => {
				let Some((first, rest)) = points.split_first() else {
					continue;
				};
				ctx.begin_path();
				ctx.move_to(first.0, first.1);
				for p in rest {
					ctx.line_to(p.0, p.1);
				}
				ctx.close_path();
				fill_and_stroke(ctx, *fill, stroke.as_ref());
			}
			DrawCmd::Text {
				pos,
				text,
				font,
				color,
			} => {
				ctx.set_font(font);
				ctx.set_fill_style_str(color);
				let _ = ctx.fill_text(text, pos.0, pos.1);
			}
		}
	}
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn fill_and_stroke(ctx: &CanvasRenderingContext2d, fill: Option<&str>, stroke: Option<&Stroke>) {
	if let Some(color) = fill {
		ctx.set_fill_style_str(color);
		ctx.fill();
	}
	if let Some(stroke) = stroke {
		apply_stroke(ctx, stroke);
		ctx.stroke();
	}
}

fn apply_stroke(ctx: &CanvasRenderingContext2d, stroke: &Stroke) {
	ctx.set_stroke_style_str(stroke.color);
	ctx.set_line_width(stroke.width);
	let dash = match stroke.dash {
		Some((dash, gap)) => js_sys::Array::of2(&JsValue::from_f64(dash), &JsValue::from_f64(gap)),
		None => js_sys::Array::new(),
	};
	let _ = ctx.set_line_dash(&dash);
}

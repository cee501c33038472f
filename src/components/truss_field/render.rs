use std::f64::consts::PI;

use super::scene::{DrawCmd, DrawList, Stroke};
use super::state::TrussFieldState;
use super::theme::Palette;
use super::types::{Load, Node, ScreenPoint};

const GLYPHS: [&str; 6] = ["σ = Eε", "ΣF = 0", "M = EIκ", "τ = VQ/Ib", "δ = PL³/3EI", "ΣM = 0"];
const GLYPH_FONT: &str = "italic 14px Georgia, serif";

/// Records one frame of the truss field into `list`.
///
/// `points` are the node screen positions from [`TrussFieldState::project`].
pub fn build_frame(
	state: &TrussFieldState,
	points: &[ScreenPoint],
	palette: &Palette,
	list: &mut DrawList,
) {
	list.clear();
	list.push(DrawCmd::Clear {
		width: state.viewport.width,
		height: state.viewport.height,
	});
	draw_grid(state, palette, list);
	draw_beams(state, points, palette, list);
	draw_nodes(state, points, palette, list);
	draw_loads(state, palette, list);
	draw_glyphs(state, palette, list);
}

fn draw_grid(state: &TrussFieldState, palette: &Palette, list: &mut DrawList) {
	let (w, h, spacing) = (
		state.viewport.width,
		state.viewport.height,
		state.params.grid_spacing,
	);
	if spacing <= 0.0 {
		return;
	}
	let stroke = Stroke::solid(palette.grid, 1.0);

	let mut x = -(state.scroll_y * 0.05).rem_euclid(spacing);
	while x <= w {
		list.line((x, 0.0), (x, h), stroke.clone());
		x += spacing;
	}
	let mut y = -(state.scroll_y * 0.1).rem_euclid(spacing);
	while y <= h {
		list.line((0.0, y), (w, y), stroke.clone());
		y += spacing;
	}
}

fn draw_beams(
	state: &TrussFieldState,
	points: &[ScreenPoint],
	palette: &Palette,
	list: &mut DrawList,
) {
	let p = &state.params;
	for beam in &state.beams {
		let (a, b) = (points[beam.a], points[beam.b]);
		if !(a.visible || b.visible) {
			continue;
		}
		let stroke = if beam.stress > p.stress_threshold {
			Stroke::solid(palette.beam_stressed, 1.4)
		} else {
			Stroke::solid(palette.beam, 0.8)
		};
		list.line((a.x, a.y), (b.x, b.y), stroke);

		if beam.stress > p.dash_threshold {
			list.line(
				(a.x, a.y),
				(b.x, b.y),
				Stroke::dashed(palette.centerline, 0.6, 4.0, 4.0),
			);
		}
	}
}

fn draw_nodes(
	state: &TrussFieldState,
	points: &[ScreenPoint],
	palette: &Palette,
	list: &mut DrawList,
) {
	for (node, point) in state.nodes.iter().zip(points) {
		if !point.visible {
			continue;
		}
		if node.pinned {
			draw_support(node, point, palette, list);
		}
		list.push(DrawCmd::Circle {
			center: (point.x, point.y),
			radius: node.radius,
			fill: Some(palette.node),
			stroke: None,
		});
		if node.radius > state.params.ring_radius {
			list.push(DrawCmd::Circle {
				center: (point.x, point.y),
				radius: node.radius + 4.0,
				fill: None,
				stroke: Some(Stroke::solid(palette.node_ring, 0.8)),
			});
		}
	}
}

/// Pin support: a triangle under the node with ground hatching below it.
fn draw_support(node: &Node, point: &ScreenPoint, palette: &Palette, list: &mut DrawList) {
	let (x, top) = (point.x, point.y + node.radius);
	let base = top + 9.0;
	let stroke = Stroke::solid(palette.support, 1.0);

	list.push(DrawCmd::Polygon {
		points: vec![(x, top), (x - 7.0, base), (x + 7.0, base)],
		fill: None,
		stroke: Some(stroke.clone()),
	});
	for k in 0..4 {
		let hx = x - 7.0 + k as f64 * 4.5;
		list.line((hx, base), (hx - 3.0, base + 4.0), stroke.clone());
	}
}

fn draw_loads(state: &TrussFieldState, palette: &Palette, list: &mut DrawList) {
	let (h, margin, t) = (
		state.viewport.height,
		state.params.load_margin,
		state.time,
	);
	let stroke = Stroke::solid(palette.load, 1.2);

	for load in &state.loads {
		let sy = load.y - state.scroll_y;
		if sy < -margin || sy > h + margin {
			continue;
		}
		let bob = (t * load.speed + load.phase).sin() * 4.0;
		draw_arrow(load, (load.x, sy + bob), &stroke, list);
	}
}

fn draw_arrow(load: &Load, start: (f64, f64), stroke: &Stroke, list: &mut DrawList) {
	let a = load.angle;
	let tip = (
		start.0 + a.cos() * load.length,
		start.1 + a.sin() * load.length,
	);
	list.line(start, tip, stroke.clone());
	for side in [-1.0, 1.0] {
		let back = a + PI + side * 0.45;
		list.line(
			tip,
			(tip.0 + back.cos() * 7.0, tip.1 + back.sin() * 7.0),
			stroke.clone(),
		);
	}
}

fn draw_glyphs(state: &TrussFieldState, palette: &Palette, list: &mut DrawList) {
	let (w, h, t, scroll) = (
		state.viewport.width,
		state.viewport.height,
		state.time,
		state.scroll_y,
	);
	if w <= 0.0 || h <= 0.0 {
		return;
	}
	for (i, &text) in GLYPHS.iter().enumerate() {
		let fi = i as f64;
		let x = (fi * w / GLYPHS.len() as f64 + t * 6.0 + scroll * 0.05).rem_euclid(w);
		let y = (80.0 + fi * 140.0 - scroll * 0.15 + (t * 0.3 + fi).sin() * 20.0).rem_euclid(h);
		list.push(DrawCmd::Text {
			pos: (x, y),
			text,
			font: GLYPH_FONT,
			color: palette.glyph,
		});
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;
	use crate::components::truss_field::params::TrussParams;
	use crate::components::truss_field::theme::Theme;
	use crate::components::truss_field::types::{Beam, Viewport};

	fn state() -> TrussFieldState {
		TrussFieldState::new(
			TrussParams::default(),
			Viewport::new(1000.0, 800.0, 4000.0),
			StdRng::seed_from_u64(2024),
		)
	}

	fn node(x: f64, y: f64, radius: f64, pinned: bool) -> Node {
		Node {
			x,
			y,
			base_x: x,
			base_y: y,
			vx: 0.0,
			vy: 0.0,
			radius,
			pinned,
			displaced: 0.0,
		}
	}

	fn frame(state: &mut TrussFieldState, theme: Theme) -> DrawList {
		let points = state.project();
		let mut list = DrawList::new();
		build_frame(state, &points, theme.palette(), &mut list);
		list
	}

	fn filled_circles(list: &DrawList) -> Vec<(f64, f64)> {
		list.cmds()
			.iter()
			.filter_map(|c| match c {
				DrawCmd::Circle {
					center,
					fill: Some(_),
					..
				} => Some(*center),
				_ => None,
			})
			.collect()
	}

	fn colors(list: &DrawList) -> Vec<&'static str> {
		list.cmds()
			.iter()
			.filter_map(|c| match c {
				DrawCmd::Line { stroke, .. } => Some(stroke.color),
				DrawCmd::Circle { fill: Some(f), .. } => Some(*f),
				DrawCmd::Text { color, .. } => Some(*color),
				_ => None,
			})
			.collect()
	}

	#[test]
	fn frame_starts_with_clear() {
		let mut s = state();
		let list = frame(&mut s, Theme::Light);
		assert_eq!(
			list.cmds()[0],
			DrawCmd::Clear {
				width: 1000.0,
				height: 800.0
			}
		);
	}

	#[test]
	fn grid_phase_follows_scroll_on_both_axes() {
		let mut s = state();
		let grid_lines = |list: &DrawList| -> Vec<((f64, f64), (f64, f64))> {
			let grid = Theme::Light.palette().grid;
			list.cmds()
				.iter()
				.filter_map(|c| match c {
					DrawCmd::Line { from, to, stroke } if stroke.color == grid => Some((*from, *to)),
					_ => None,
				})
				.collect()
		};

		let top = grid_lines(&frame(&mut s, Theme::Light));
		assert_eq!(top[0], ((0.0, 0.0), (0.0, 800.0)));

		s.set_scroll(200.0);
		let scrolled = grid_lines(&frame(&mut s, Theme::Light));
		let first_vertical = scrolled.iter().find(|(from, to)| from.0 == to.0).unwrap();
		let first_horizontal = scrolled.iter().find(|(from, to)| from.1 == to.1).unwrap();
		assert!((first_vertical.0.0 + 10.0).abs() < 1e-9);
		assert!((first_horizontal.0.1 + 20.0).abs() < 1e-9);
	}

	#[test]
	fn offscreen_nodes_are_not_drawn() {
		let mut s = state();
		s.nodes = vec![node(100.0, 100.0, 3.0, false), node(200.0, 900.0, 3.0, false)];
		s.beams.clear();
		let list = frame(&mut s, Theme::Light);
		assert_eq!(filled_circles(&list), vec![(100.0, 100.0)]);
	}

	#[test]
	fn beam_with_both_ends_hidden_is_skipped() {
		let mut s = state();
		s.loads.clear();
		s.nodes = vec![node(0.0, 2000.0, 3.0, false), node(100.0, 2000.0, 3.0, false)];
		s.beams = vec![Beam {
			a: 0,
			b: 1,
			rest_len: 100.0,
			stress: 0.0,
		}];
		let list = frame(&mut s, Theme::Light);
		let palette = Theme::Light.palette();
		assert!(!colors(&list).contains(&palette.beam));
	}

	#[test]
	fn stretched_beam_gets_stressed_style_and_centerline() {
		let mut s = state();
		s.loads.clear();
		s.nodes = vec![node(0.0, 100.0, 3.0, false), node(200.0, 100.0, 3.0, false)];
		s.beams = vec![Beam {
			a: 0,
			b: 1,
			rest_len: 100.0,
			stress: 0.0,
		}];
		let list = frame(&mut s, Theme::Dark);
		let palette = Theme::Dark.palette();
		let beam_lines: Vec<&Stroke> = list
			.cmds()
			.iter()
			.filter_map(|c| match c {
				DrawCmd::Line { from, stroke, .. } if *from == (0.0, 100.0) => Some(stroke),
				_ => None,
			})
			.collect();
		assert_eq!(beam_lines.len(), 2);
		assert_eq!(beam_lines[0].color, palette.beam_stressed);
		assert_eq!(beam_lines[1].color, palette.centerline);
		assert!(beam_lines[1].dash.is_some());
	}

	#[test]
	fn mildly_stressed_beam_has_no_centerline() {
		let mut s = state();
		s.loads.clear();
		s.nodes = vec![node(0.0, 100.0, 3.0, false), node(112.0, 100.0, 3.0, false)];
		s.beams = vec![Beam {
			a: 0,
			b: 1,
			rest_len: 100.0,
			stress: 0.0,
		}];
		let list = frame(&mut s, Theme::Light);
		let palette = Theme::Light.palette();
		let cs = colors(&list);
		assert!(cs.contains(&palette.beam_stressed));
		assert!(!cs.contains(&palette.centerline));
	}

	#[test]
	fn pinned_node_draws_support() {
		let mut s = state();
		s.beams.clear();
		s.nodes = vec![node(300.0, 300.0, 4.0, true)];
		let list = frame(&mut s, Theme::Light);
		let polygons = list
			.cmds()
			.iter()
			.filter(|c| matches!(c, DrawCmd::Polygon { .. }))
			.count();
		assert_eq!(polygons, 1);
		let rings = list
			.cmds()
			.iter()
			.filter(|c| matches!(c, DrawCmd::Circle { fill: None, .. }))
			.count();
		assert_eq!(rings, 1);
	}

	#[test]
	fn theme_switch_changes_next_frame_colors() {
		let mut s = state();
		let nodes_before = s.nodes.clone();
		let light = colors(&frame(&mut s, Theme::Light));
		let dark = colors(&frame(&mut s, Theme::Dark));
		assert_eq!(s.nodes, nodes_before);
		assert!(light.contains(&Theme::Light.palette().grid));
		assert!(dark.contains(&Theme::Dark.palette().grid));
		assert!(!dark.contains(&Theme::Light.palette().grid));
	}

	#[test]
	fn glyphs_wrap_inside_viewport() {
		let mut s = state();
		s.set_scroll(123456.0);
		s.time = 987.0;
		let list = frame(&mut s, Theme::Light);
		let glyphs: Vec<(f64, f64)> = list
			.cmds()
			.iter()
			.filter_map(|c| match c {
				DrawCmd::Text { pos, .. } => Some(*pos),
				_ => None,
			})
			.collect();
		assert_eq!(glyphs.len(), GLYPHS.len());
		for (x, y) in glyphs {
			assert!((0.0..1000.0).contains(&x));
			assert!((0.0..800.0).contains(&y));
		}
	}

	#[test]
	fn loads_outside_band_are_skipped() {
		let mut s = state();
		s.nodes.clear();
		s.beams.clear();
		s.loads = vec![
			Load {
				x: 100.0,
				y: 400.0,
				angle: PI / 2.0,
				length: 30.0,
				phase: 0.0,
				speed: 1.0,
			},
			Load {
				x: 100.0,
				y: 3000.0,
				angle: PI / 2.0,
				length: 30.0,
				phase: 0.0,
				speed: 1.0,
			},
		];
		let list = frame(&mut s, Theme::Light);
		let load_color = Theme::Light.palette().load;
		let strokes = colors(&list).into_iter().filter(|c| *c == load_color).count();
		assert_eq!(strokes, 3);
	}
}

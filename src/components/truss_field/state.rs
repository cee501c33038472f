use std::f64::consts::{FRAC_PI_2, TAU};

use log::debug;
use rand::Rng;
use rand::rngs::StdRng;

use super::params::TrussParams;
use super::types::{Beam, Load, Node, ScreenPoint, Viewport, distance};

/// Owned simulation state of the truss field.
///
/// Node and load positions live in page space. Screen positions are derived
/// per frame by [`TrussFieldState::project`] and never written back.
pub struct TrussFieldState {
	/// Tuning constants.
	pub params: TrussParams,
	/// Viewport the field was generated for.
	pub viewport: Viewport,
	/// Truss joints.
	pub nodes: Vec<Node>,
	/// Connections between `nodes`.
	pub beams: Vec<Beam>,
	/// Decorative load arrows.
	pub loads: Vec<Load>,
	/// Fixed-step animation clock.
	pub time: f64,
	/// Vertical scroll offset of the page.
	pub scroll_y: f64,
	/// Cursor in screen coordinates; `None` once it leaves the page.
	pub pointer: Option<(f64, f64)>,
	rng: StdRng,
}

impl TrussFieldState {
	/// Builds and initializes a field drawing randomness from `rng`.
	pub fn new(params: TrussParams, viewport: Viewport, rng: StdRng) -> Self {
		let mut state = Self {
			params,
			viewport,
			nodes: Vec::new(),
			beams: Vec::new(),
			loads: Vec::new(),
			time: 0.0,
			scroll_y: 0.0,
			pointer: None,
			rng,
		};
		state.init();
		state
	}

	/// Regenerates nodes, beams and loads for the current viewport.
	pub fn init(&mut self) {
		self.nodes = self.generate_nodes();
		self.beams = connect_beams(
			&self.nodes,
			self.params.max_beam_length,
			self.params.max_links_per_node,
		);
		self.loads = self.generate_loads();
		debug!(
			"truss field initialized: {} nodes, {} beams, {} loads ({}x{})",
			self.nodes.len(),
			self.beams.len(),
			self.loads.len(),
			self.viewport.width,
			self.viewport.height
		);
	}

	/// Adopts a new viewport and regenerates the field.
	pub fn resize(&mut self, viewport: Viewport) {
		self.viewport = viewport;
		self.init();
	}

	fn generate_nodes(&mut self) -> Vec<Node> {
		let p = &self.params;
		let (width, page_h) = (
			self.viewport.width,
			self.viewport.page_height(p.page_height_factor),
		);
		let rng = &mut self.rng;

		(0..p.node_count)
			.map(|_| {
				let (x, y) = (rng.r#gen::<f64>() * width, rng.r#gen::<f64>() * page_h);
				Node {
					x,
					y,
					base_x: x,
					base_y: y,
					vx: (rng.r#gen::<f64>() - 0.5) * 2.0 * p.drift_speed,
					vy: (rng.r#gen::<f64>() - 0.5) * 2.0 * p.drift_speed,
					radius: p.radius_min + rng.r#gen::<f64>() * (p.radius_max - p.radius_min),
					pinned: rng.r#gen::<f64>() < p.pinned_chance,
					displaced: 0.0,
				}
			})
			.collect()
	}

	fn generate_loads(&mut self) -> Vec<Load> {
		let (width, page_h) = (
			self.viewport.width,
			self.viewport.page_height(self.params.page_height_factor),
		);
		let rng = &mut self.rng;

		(0..self.params.load_count)
			.map(|_| Load {
				x: rng.r#gen::<f64>() * width,
				y: rng.r#gen::<f64>() * page_h,
				angle: FRAC_PI_2 + (rng.r#gen::<f64>() - 0.5) * 0.6,
				length: 20.0 + rng.r#gen::<f64>() * 25.0,
				phase: rng.r#gen::<f64>() * TAU,
				speed: 0.5 + rng.r#gen::<f64>(),
			})
			.collect()
	}

	/// Slow drift step. Nodes bounce off the horizontal margins only.
	pub fn drift_tick(&mut self) {
		let (lo, hi) = (
			-self.params.drift_margin,
			self.viewport.width + self.params.drift_margin,
		);
		for node in &mut self.nodes {
			node.x += node.vx;
			node.y += node.vy;
			if node.x < lo || node.x > hi {
				node.vx = -node.vx;
			}
		}
	}

	/// Records the page scroll offset.
	pub fn set_scroll(&mut self, scroll_y: f64) {
		self.scroll_y = scroll_y;
	}

	/// Records the cursor position.
	pub fn set_pointer(&mut self, x: f64, y: f64) {
		self.pointer = Some((x, y));
	}

	/// Forgets the cursor; repulsion stops.
	pub fn clear_pointer(&mut self) {
		self.pointer = None;
	}

	/// Zero at the top of the page, growing with scroll depth up to a cap.
	pub fn deform_amplitude(&self) -> f64 {
		(self.scroll_y.max(0.0) * self.params.deform_per_scroll).min(self.params.deform_max)
	}

	/// Screen position of `node` for the current scroll, time and cursor.
	pub fn project_node(&self, node: &Node) -> ScreenPoint {
		let (amp, t) = (self.deform_amplitude(), self.time);
		let deform_x = (t * 0.8 + node.base_y * 0.01).sin() * amp;
		let deform_y = (t * 0.6 + node.base_x * 0.01).cos() * amp * 0.6;
		let (sx, sy) = (node.x + deform_x, node.y - self.scroll_y + deform_y);
		let (rx, ry) = match self.pointer {
			Some(pointer) => repulsion(
				(sx, sy),
				pointer,
				self.params.repel_radius,
				self.params.repel_strength,
			),
			None => (0.0, 0.0),
		};
		let (x, y) = (sx + rx, sy + ry);
		let margin = self.params.visibility_margin;

		ScreenPoint {
			x,
			y,
			visible: y >= -margin && y <= self.viewport.height + margin,
		}
	}

	/// Screen positions for every node, refreshing the stress of every beam
	/// with at least one visible endpoint.
	pub fn project(&mut self) -> Vec<ScreenPoint> {
		let points: Vec<ScreenPoint> = self.nodes.iter().map(|n| self.project_node(n)).collect();

		for beam in &mut self.beams {
			let (pa, pb) = (points[beam.a], points[beam.b]);
			if !(pa.visible || pb.visible) {
				continue;
			}
			beam.stress = beam_stress(distance(pa.x, pa.y, pb.x, pb.y), beam.rest_len);
		}
		points
	}

	/// Advances the fixed-step clock and projects the frame.
	pub fn advance_frame(&mut self) -> Vec<ScreenPoint> {
		self.time += self.params.frame_step;
		self.project()
	}
}

/// Links each node to later nodes within `max_len`, at most `max_links` each.
pub fn connect_beams(nodes: &[Node], max_len: f64, max_links: usize) -> Vec<Beam> {
	let mut beams = Vec::new();
	for (i, a) in nodes.iter().enumerate() {
		let mut links = 0;
		for (j, b) in nodes.iter().enumerate().skip(i + 1) {
			if links >= max_links {
				break;
			}
			let d = distance(a.base_x, a.base_y, b.base_x, b.base_y);
			if d <= max_len {
				beams.push(Beam {
					a: i,
					b: j,
					rest_len: d,
					stress: 0.0,
				});
				links += 1;
			}
		}
	}
	beams
}

/// Displacement pushing `point` radially away from `pointer`, falling off
/// linearly from `strength` at the pointer to zero at `radius`.
pub fn repulsion(point: (f64, f64), pointer: (f64, f64), radius: f64, strength: f64) -> (f64, f64) {
	let (dx, dy) = (point.0 - pointer.0, point.1 - pointer.1);
	let d = dx.hypot(dy);
	if d <= 0.0 || d >= radius {
		return (0.0, 0.0);
	}
	let force = (1.0 - d / radius) * strength;
	(dx / d * force, dy / d * force)
}

pub fn beam_stress(len: f64, rest_len: f64) -> f64 {
	if rest_len <= 0.0 {
		return 0.0;
	}
	(len - rest_len).abs() / rest_len
}

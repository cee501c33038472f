/// Tunable constants for the truss field.
///
/// Distances are in CSS pixels, times in simulation seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct TrussParams {
	/// Nodes per initialization.
	pub node_count: usize,
	/// Load arrows per initialization.
	pub load_count: usize,
	/// Page height is at least this many viewport heights.
	pub page_height_factor: f64,
	/// Longest beam created between two nodes.
	pub max_beam_length: f64,
	/// Beams a node may start towards higher-indexed nodes.
	pub max_links_per_node: usize,
	/// Probability a node is drawn as a support.
	pub pinned_chance: f64,
	/// Largest drift velocity component per tick.
	pub drift_speed: f64,
	/// Smallest node radius.
	pub radius_min: f64,
	/// Upper bound (exclusive) of node radius.
	pub radius_max: f64,
	/// Horizontal overshoot before a drifting node bounces back.
	pub drift_margin: f64,
	/// Drift timer period.
	pub drift_interval_ms: i32,
	/// Clock advance per rendered frame.
	pub frame_step: f64,
	/// Cursor repulsion reach.
	pub repel_radius: f64,
	/// Repulsion displacement with the cursor on top of a node.
	pub repel_strength: f64,
	/// Nodes this far outside the viewport are still drawn.
	pub visibility_margin: f64,
	/// Loads this far outside the viewport are still drawn.
	pub load_margin: f64,
	/// Deformation amplitude gained per scrolled pixel.
	pub deform_per_scroll: f64,
	/// Cap on deformation amplitude.
	pub deform_max: f64,
	/// Background grid cell size.
	pub grid_spacing: f64,
	/// Stress above which a beam is drawn highlighted.
	pub stress_threshold: f64,
	/// Stress above which a dashed centerline is added.
	pub dash_threshold: f64,
	/// Nodes larger than this get a faint outer ring.
	pub ring_radius: f64,
}

impl Default for TrussParams {
	fn default() -> Self {
		Self {
			node_count: 50,
			load_count: 12,
			page_height_factor: 5.0,
			max_beam_length: 280.0,
			max_links_per_node: 4,
			pinned_chance: 0.12,
			drift_speed: 0.15,
			radius_min: 2.0,
			radius_max: 5.0,
			drift_margin: 20.0,
			drift_interval_ms: 50,
			frame_step: 0.016,
			repel_radius: 180.0,
			repel_strength: 30.0,
			visibility_margin: 50.0,
			load_margin: 60.0,
			deform_per_scroll: 0.01,
			deform_max: 14.0,
			grid_spacing: 60.0,
			stress_threshold: 0.1,
			dash_threshold: 0.15,
			ring_radius: 3.5,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn dash_threshold_sits_above_stress_threshold() {
		let p = TrussParams::default();
		assert!(p.dash_threshold > p.stress_threshold);
		assert!(p.radius_min < p.ring_radius && p.ring_radius < p.radius_max);
	}
}

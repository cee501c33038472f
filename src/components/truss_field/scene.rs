//! Renderer-agnostic draw commands for one frame of the truss field.

/// Line style.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
	/// CSS color.
	pub color: &'static str,
	/// Line width in pixels.
	pub width: f64,
	/// `(dash, gap)` lengths; `None` draws a solid line.
	pub dash: Option<(f64, f64)>,
}

impl Stroke {
	/// Solid line.
	pub fn solid(color: &'static str, width: f64) -> Self {
		Self {
			color,
			width,
			dash: None,
		}
	}

	/// Dashed line with the given dash and gap lengths.
	pub fn dashed(color: &'static str, width: f64, dash: f64, gap: f64) -> Self {
		Self {
			color,
			width,
			dash: Some((dash, gap)),
		}
	}
}

/// One drawing operation in screen coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
	/// Clears the surface to transparent.
	Clear {
		/// Cleared width.
		width: f64,
		/// Cleared height.
		height: f64,
	},
	/// Straight segment.
	Line {
		/// Start point.
		from: (f64, f64),
		/// End point.
		to: (f64, f64),
		/// Line style.
		stroke: Stroke,
	},
	/// Full circle, filled and/or outlined.
	Circle {
		/// Center point.
		center: (f64, f64),
		/// Radius in pixels.
		radius: f64,
		/// Fill color.
		fill: Option<&'static str>,
		/// Outline style.
		stroke: Option<Stroke>,
	},
	/// Closed polygon.
	Polygon {
		/// Vertices in order.
		points: Vec<(f64, f64)>,
		/// Fill color.
		fill: Option<&'static str>,
		/// Outline style.
		stroke: Option<Stroke>,
	},
	/// Single line of text, baseline at `pos`.
	Text {
		/// Baseline origin.
		pos: (f64, f64),
		/// Text to draw.
		text: &'static str,
		/// CSS font shorthand.
		font: &'static str,
		/// CSS fill color.
		color: &'static str,
	},
}

/// Draw commands recorded in paint order.
#[derive(Debug, Default)]
pub struct DrawList {
	cmds: Vec<DrawCmd>,
}

impl DrawList {
	/// Empty list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Drops recorded commands, keeping capacity for the next frame.
	pub fn clear(&mut self) {
		self.cmds.clear();
	}

	/// Appends a command.
	pub fn push(&mut self, cmd: DrawCmd) {
		self.cmds.push(cmd);
	}

	/// Appends a [`DrawCmd::Line`].
	pub fn line(&mut self, from: (f64, f64), to: (f64, f64), stroke: Stroke) {
		self.push(DrawCmd::Line { from, to, stroke });
	}

	/// Commands in paint order.
	pub fn cmds(&self) -> &[DrawCmd] {
		&self.cmds
	}

	/// Whether nothing has been recorded.
	pub fn is_empty(&self) -> bool {
		self.cmds.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn clear_keeps_capacity() {
		let mut list = DrawList::new();
		for i in 0..16 {
			list.line((0.0, 0.0), (i as f64, 1.0), Stroke::solid("red", 1.0));
		}
		let cap = list.cmds.capacity();
		list.clear();
		assert!(list.is_empty());
		assert_eq!(list.cmds.capacity(), cap);
	}
}

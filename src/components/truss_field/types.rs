/// Truss joint in page coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	/// Current page x, moved by drift.
	pub x: f64,
	/// Current page y, moved by drift.
	pub y: f64,
	/// Rest x at initialization.
	pub base_x: f64,
	/// Rest y at initialization.
	pub base_y: f64,
	/// Horizontal drift per tick.
	pub vx: f64,
	/// Vertical drift per tick.
	pub vy: f64,
	/// Dot radius in pixels.
	pub radius: f64,
	/// Drawn with a pin support under it.
	pub pinned: bool,
	/// Reserved for stress shading; always zero for now.
	pub displaced: f64,
}

/// Connection between two nodes, `a < b`.
#[derive(Clone, Debug, PartialEq)]
pub struct Beam {
	/// Lower node index.
	pub a: usize,
	/// Higher node index.
	pub b: usize,
	/// Base-position distance at creation; never recomputed.
	pub rest_len: f64,
	/// `|len - rest_len| / rest_len` from the last projected frame.
	pub stress: f64,
}

/// Decorative load arrow in page coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Load {
	/// Page x of the arrow tail.
	pub x: f64,
	/// Page y of the arrow tail.
	pub y: f64,
	/// Direction in radians; `π/2` points straight down.
	pub angle: f64,
	/// Shaft length in pixels.
	pub length: f64,
	/// Bob phase offset.
	pub phase: f64,
	/// Bob angular speed.
	pub speed: f64,
}

/// Browser viewport plus the scrollable document height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	/// Inner width of the window.
	pub width: f64,
	/// Inner height of the window.
	pub height: f64,
	/// Scroll height of the document.
	pub document_height: f64,
}

impl Viewport {
	/// Viewport from window and document measurements.
	pub fn new(width: f64, height: f64, document_height: f64) -> Self {
		Self {
			width,
			height,
			document_height,
		}
	}

	/// Height of the virtual page nodes are scattered over.
	pub fn page_height(&self, factor: f64) -> f64 {
		(self.height * factor).max(self.document_height)
	}
}

/// Node position on screen for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
	/// Screen x.
	pub x: f64,
	/// Screen y.
	pub y: f64,
	/// Inside the vertical drawing band.
	pub visible: bool,
}

pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
	(x2 - x1).hypot(y2 - y1)
}

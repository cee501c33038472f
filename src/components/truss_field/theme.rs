/// Active page theme, mirrored on the `data-theme` attribute of `<html>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
	/// Light page background.
	#[default]
	Light,
	/// Dark page background.
	Dark,
}

impl Theme {
	/// Value of the `data-theme` attribute.
	pub fn as_str(self) -> &'static str {
		match self {
			Theme::Light => "light",
			Theme::Dark => "dark",
		}
	}

	/// Anything other than `"dark"` reads as light.
	pub fn from_attr(value: Option<&str>) -> Self {
		match value {
			Some("dark") => Theme::Dark,
			_ => Theme::Light,
		}
	}

	/// The other theme.
	pub fn toggled(self) -> Self {
		match self {
			Theme::Light => Theme::Dark,
			Theme::Dark => Theme::Light,
		}
	}

	/// Colors for this theme.
	pub fn palette(self) -> &'static Palette {
		match self {
			Theme::Light => &LIGHT,
			Theme::Dark => &DARK,
		}
	}
}

/// CSS colors used by one theme.
#[derive(Debug, PartialEq, Eq)]
pub struct Palette {
	/// Background grid lines.
	pub grid: &'static str,
	/// Beams at low stress.
	pub beam: &'static str,
	/// Beams above the stress threshold.
	pub beam_stressed: &'static str,
	/// Dashed centerline on heavily stressed beams.
	pub centerline: &'static str,
	/// Node fill.
	pub node: &'static str,
	/// Outer ring around large nodes.
	pub node_ring: &'static str,
	/// Pin supports and their hatching.
	pub support: &'static str,
	/// Load arrows.
	pub load: &'static str,
	/// Notation glyphs.
	pub glyph: &'static str,
}

const LIGHT: Palette = Palette {
	grid: "rgba(30, 41, 59, 0.04)",
	beam: "rgba(71, 85, 105, 0.18)",
	beam_stressed: "rgba(220, 38, 38, 0.32)",
	centerline: "rgba(220, 38, 38, 0.18)",
	node: "rgba(51, 65, 85, 0.45)",
	node_ring: "rgba(51, 65, 85, 0.12)",
	support: "rgba(37, 99, 235, 0.4)",
	load: "rgba(234, 88, 12, 0.35)",
	glyph: "rgba(30, 41, 59, 0.05)",
};

const DARK: Palette = Palette {
	grid: "rgba(148, 163, 184, 0.05)",
	beam: "rgba(148, 163, 184, 0.15)",
	beam_stressed: "rgba(248, 113, 113, 0.35)",
	centerline: "rgba(248, 113, 113, 0.2)",
	node: "rgba(203, 213, 225, 0.4)",
	node_ring: "rgba(203, 213, 225, 0.1)",
	support: "rgba(129, 140, 248, 0.45)",
	load: "rgba(251, 146, 60, 0.4)",
	glyph: "rgba(226, 232, 240, 0.05)",
};

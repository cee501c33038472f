use wasm_bindgen::JsValue;

/// Reasons the truss field could not be set up.
///
/// None of these are fatal to the page; the component logs them and leaves
/// the background empty.
#[derive(Debug, thiserror::Error)]
pub enum TrussError {
	/// No `window` global (not running in a browser).
	#[error("no global window")]
	NoWindow,
	/// The window has no document.
	#[error("no document on window")]
	NoDocument,
	/// The canvas node reference is empty.
	#[error("canvas element is not mounted")]
	NoCanvas,
	/// `getContext("2d")` returned nothing usable.
	#[error("2d canvas context unavailable")]
	NoContext,
	/// A browser API call threw.
	#[error("javascript call failed: {0}")]
	Js(String),
}

impl From<JsValue> for TrussError {
	fn from(value: JsValue) -> Self {
		Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}

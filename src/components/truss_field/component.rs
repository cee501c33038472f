use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::canvas;
use super::error::TrussError;
use super::params::TrussParams;
use super::render;
use super::scene::DrawList;
use super::schedule::{AnimationLoop, IntervalTask, Listener};
use super::state::TrussFieldState;
use super::theme::Theme;
use super::types::{ScreenPoint, Viewport};

/// Full-viewport animated truss background.
///
/// The canvas sits behind the page and ignores pointer events; cursor and
/// scroll are tracked on the window instead. If the canvas or its 2d context
/// is unavailable the component logs a warning and draws nothing.
#[component]
pub fn TrussFieldCanvas(
	/// Theme read on every paint.
	#[prop(into)]
	theme: Signal<Theme>,
	/// Tuning constants; defaults when absent.
	#[prop(optional)]
	params: Option<TrussParams>,
	/// Fixed RNG seed; random per page load when absent.
	#[prop(optional)]
	seed: Option<u64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let running = StoredValue::new_local(None::<Running>);

	Effect::new(move |_| {
		let canvas = canvas_ref.get();
		if running.with_value(Option::is_some) {
			return;
		}
		let params = params.clone().unwrap_or_default();
		match Running::start(canvas, theme, params, seed) {
			Ok(r) => running.set_value(Some(r)),
			Err(err) => warn!("truss field disabled: {err}"),
		}
	});

	// Repaint right away on a theme switch instead of waiting for the next frame.
	Effect::new(move |_| {
		let theme = theme.get();
		running.with_value(|r| {
			if let Some(r) = r {
				debug!("redrawing truss field for {} theme", theme.as_str());
				r.redraw();
			}
		});
	});

	on_cleanup(move || {
		running.try_update_value(|r| *r = None);
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="truss-field"
			aria-hidden="true"
			style="position: fixed; inset: 0; z-index: -1; display: block; pointer-events: none;"
		/>
	}
}

/// Paints frames using the theme read at paint time.
struct Painter {
	ctx: CanvasRenderingContext2d,
	list: RefCell<DrawList>,
	theme: Signal<Theme>,
}

impl Painter {
	fn draw(&self, state: &TrussFieldState, points: &[ScreenPoint]) {
		let palette = self.theme.get_untracked().palette();
		let mut list = self.list.borrow_mut();
		render::build_frame(state, points, palette, &mut list);
		canvas::paint(&list, &self.ctx);
	}
}

/// Live simulation plus the browser callbacks driving it. Dropping it stops
/// the render loop and drift timer and detaches the listeners.
struct Running {
	state: Rc<RefCell<TrussFieldState>>,
	painter: Rc<Painter>,
	_frames: AnimationLoop,
	_drift: IntervalTask,
	_listeners: Vec<Listener>,
}

impl Running {
	fn start(
		canvas: Option<HtmlCanvasElement>,
		theme: Signal<Theme>,
		params: TrussParams,
		seed: Option<u64>,
	) -> Result<Self, TrussError> {
		let canvas = canvas.ok_or(TrussError::NoCanvas)?;
		let window = web_sys::window().ok_or(TrussError::NoWindow)?;
		let document = window.document().ok_or(TrussError::NoDocument)?;
		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")?
			.ok_or(TrussError::NoContext)?
			.dyn_into()
			.map_err(|_| TrussError::NoContext)?;

		let viewport = measure(&window)?;
		fit_canvas(&canvas, &viewport);
		let rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
		let drift_ms = params.drift_interval_ms;
		let mut initial = TrussFieldState::new(params, viewport, rng);
		initial.set_scroll(window.scroll_y()?);

		let state = Rc::new(RefCell::new(initial));
		let painter = Rc::new(Painter {
			ctx,
			list: RefCell::new(DrawList::new()),
			theme,
		});

		let listeners = vec![
			{
				let (state, win) = (state.clone(), window.clone());
				Listener::new(&window, "scroll", move |_| {
					state.borrow_mut().set_scroll(win.scroll_y().unwrap_or(0.0));
				})?
			},
			{
				let state = state.clone();
				Listener::new(&window, "mousemove", move |ev| {
					if let Some(ev) = ev.dyn_ref::<MouseEvent>() {
						state
							.borrow_mut()
							.set_pointer(ev.client_x() as f64, ev.client_y() as f64);
					}
				})?
			},
			{
				let state = state.clone();
				Listener::new(&document, "mouseleave", move |_| {
					state.borrow_mut().clear_pointer();
				})?
			},
			{
				let (state, win) = (state.clone(), window.clone());
				Listener::new(&window, "resize", move |_| match measure(&win) {
					Ok(viewport) => {
						fit_canvas(&canvas, &viewport);
						state.borrow_mut().resize(viewport);
					}
					Err(err) => warn!("truss field resize skipped: {err}"),
				})?
			},
		];

		let frames = {
			let (state, painter) = (state.clone(), painter.clone());
			AnimationLoop::start(move || {
				let points = state.borrow_mut().advance_frame();
				painter.draw(&state.borrow(), &points);
			})?
		};

		let drift = {
			let state = state.clone();
			IntervalTask::start(drift_ms, move || state.borrow_mut().drift_tick())?
		};

		info!(
			"truss field started at {}x{} (seed {:?})",
			viewport.width, viewport.height, seed
		);

		Ok(Self {
			state,
			painter,
			_frames: frames,
			_drift: drift,
			_listeners: listeners,
		})
	}

	/// Repaints the current frame without advancing time.
	fn redraw(&self) {
		let points = self.state.borrow_mut().project();
		self.painter.draw(&self.state.borrow(), &points);
	}
}

fn measure(window: &Window) -> Result<Viewport, TrussError> {
	let width = window.inner_width()?.as_f64().unwrap_or(0.0);
	let height = window.inner_height()?.as_f64().unwrap_or(0.0);
	let document_height = window
		.document()
		.and_then(|d| d.document_element())
		.map(|el| el.scroll_height() as f64)
		.unwrap_or(height);
	Ok(Viewport::new(width, height, document_height))
}

fn fit_canvas(canvas: &HtmlCanvasElement, viewport: &Viewport) {
	canvas.set_width(viewport.width as u32);
	canvas.set_height(viewport.height as u32);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_canvas_disables_instead_of_panicking() {
		let result = Running::start(
			None,
			Signal::stored(Theme::Light),
			TrussParams::default(),
			Some(1),
		);
		assert!(matches!(result, Err(TrussError::NoCanvas)));
	}
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
	use wasm_bindgen_test::*;

	use super::*;

	wasm_bindgen_test_configure!(run_in_browser);

	fn detached_canvas() -> HtmlCanvasElement {
		web_sys::window()
			.and_then(|w| w.document())
			.and_then(|d| d.create_element("canvas").ok())
			.and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
			.expect("canvas element")
	}

	#[wasm_bindgen_test]
	fn canvas_without_2d_context_is_rejected() {
		let canvas = detached_canvas();
		// Once claimed by another context type, getContext("2d") yields null.
		assert!(canvas.get_context("bitmaprenderer").unwrap().is_some());

		let result = Running::start(
			Some(canvas),
			Signal::stored(Theme::Dark),
			TrussParams::default(),
			Some(3),
		);
		assert!(matches!(result, Err(TrussError::NoContext)));
	}

	#[wasm_bindgen_test]
	fn starts_paints_and_tears_down() {
		let running = Running::start(
			Some(detached_canvas()),
			Signal::stored(Theme::Light),
			TrussParams::default(),
			Some(4),
		)
		.expect("truss field starts on a fresh canvas");
		assert_eq!(running.state.borrow().nodes.len(), 50);
		running.redraw();
		drop(running);
	}
}

//! Recurring browser callbacks that stop when their handle is cancelled or
//! dropped.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget, Window};

use super::error::TrussError;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A `requestAnimationFrame` loop.
pub struct AnimationLoop {
	window: Window,
	pending: Rc<Cell<Option<i32>>>,
	callback: FrameCallback,
}

impl AnimationLoop {
	/// Calls `frame` once per display refresh until cancelled.
	pub fn start(mut frame: impl FnMut() + 'static) -> Result<Self, TrussError> {
		let window = web_sys::window().ok_or(TrussError::NoWindow)?;
		let pending = Rc::new(Cell::new(None));
		let callback: FrameCallback = Rc::new(RefCell::new(None));
		let (window_inner, pending_inner, callback_inner) =
			(window.clone(), pending.clone(), callback.clone());

		*callback.borrow_mut() = Some(Closure::new(move || {
			pending_inner.set(None);
			frame();
			if let Some(ref cb) = *callback_inner.borrow() {
				pending_inner.set(
					window_inner
						.request_animation_frame(cb.as_ref().unchecked_ref())
						.ok(),
				);
			}
		}));
		if let Some(ref cb) = *callback.borrow() {
			pending.set(Some(
				window.request_animation_frame(cb.as_ref().unchecked_ref())?,
			));
		}

		Ok(Self {
			window,
			pending,
			callback,
		})
	}

	pub fn cancel(&self) {
		if let Some(id) = self.pending.take() {
			let _ = self.window.cancel_animation_frame(id);
		}
		// Breaks the closure's reference back to itself.
		self.callback.borrow_mut().take();
	}
}

impl Drop for AnimationLoop {
	fn drop(&mut self) {
		self.cancel();
	}
}

/// A `setInterval` timer.
pub struct IntervalTask {
	window: Window,
	id: Cell<Option<i32>>,
	_callback: Closure<dyn FnMut()>,
}

impl IntervalTask {
	pub fn start(period_ms: i32, tick: impl FnMut() + 'static) -> Result<Self, TrussError> {
		let window = web_sys::window().ok_or(TrussError::NoWindow)?;
		let callback = Closure::<dyn FnMut()>::new(tick);
		let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
			callback.as_ref().unchecked_ref(),
			period_ms,
		)?;
		Ok(Self {
			window,
			id: Cell::new(Some(id)),
			_callback: callback,
		})
	}

	pub fn cancel(&self) {
		if let Some(id) = self.id.take() {
			self.window.clear_interval_with_handle(id);
		}
	}
}

impl Drop for IntervalTask {
	fn drop(&mut self) {
		self.cancel();
	}
}

/// An event listener that is removed again on drop.
pub struct Listener {
	target: EventTarget,
	kind: &'static str,
	callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
	pub fn new(
		target: &EventTarget,
		kind: &'static str,
		handler: impl FnMut(Event) + 'static,
	) -> Result<Self, TrussError> {
		let callback = Closure::<dyn FnMut(Event)>::new(handler);
		target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
		Ok(Self {
			target: target.clone(),
			kind,
			callback,
		})
	}
}

impl Drop for Listener {
	fn drop(&mut self) {
		let _ = self
			.target
			.remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
	}
}

//! Frame scheduling and event-listener ownership.
//!
//! The animation loop and the window listeners are the two resources that
//! leak if a mount/unmount cycle skips teardown, so both live behind owning
//! types with explicit cancellation: [`FrameLoop`] holds the pending
//! `requestAnimationFrame` handle, [`WindowListener`] detaches on drop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;

/// A cancellable repeating task bound to the display refresh rate.
///
/// Each invocation of the tick callback reschedules itself, storing the new
/// frame handle; [`FrameLoop::cancel`] revokes the pending request and drops
/// the callback, after which no further ticks fire.
pub struct FrameLoop {
	handle: Rc<Cell<Option<i32>>>,
	callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
	pub fn new() -> Self {
		Self {
			handle: Rc::new(Cell::new(None)),
			callback: Rc::new(RefCell::new(None)),
		}
	}

	/// Install the tick callback and request the first frame.
	pub fn start<F: FnMut() + 'static>(&self, mut tick: F) {
		let handle = self.handle.clone();
		let callback = self.callback.clone();
		let cb = Closure::new(move || {
			tick();
			// Reschedule only while still installed; cancel() empties the slot.
			if let Some(ref cb) = *callback.borrow() {
				if let Some(window) = web_sys::window() {
					if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
						handle.set(Some(id));
					}
				}
			}
		});
		*self.callback.borrow_mut() = Some(cb);
		self.request();
	}

	fn request(&self) {
		let Some(window) = web_sys::window() else {
			return;
		};
		if let Some(ref cb) = *self.callback.borrow() {
			if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				self.handle.set(Some(id));
			}
		}
	}

	/// Revoke the pending frame request and drop the callback.
	///
	/// Also breaks the self-referential `Rc` cycle the rescheduling closure
	/// holds, so the closure is freed.
	pub fn cancel(&self) {
		if let Some(id) = self.handle.take() {
			if let Some(window) = web_sys::window() {
				let _ = window.cancel_animation_frame(id);
			}
		}
		self.callback.borrow_mut().take();
	}
}

impl Default for FrameLoop {
	fn default() -> Self {
		Self::new()
	}
}

/// An event listener on `window`, removed when detached or dropped.
pub struct WindowListener {
	event: &'static str,
	callback: Option<Closure<dyn FnMut(web_sys::Event)>>,
}

impl WindowListener {
	/// Register `handler` for `event` on the window.
	pub fn attach(event: &'static str, handler: impl FnMut(web_sys::Event) + 'static) -> Self {
		let callback = Closure::new(handler);
		if let Some(window) = web_sys::window() {
			let _ = window
				.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
		}
		Self {
			event,
			callback: Some(callback),
		}
	}

	/// Remove the listener from the window. Idempotent.
	pub fn detach(&mut self) {
		if let Some(cb) = self.callback.take() {
			if let Some(window) = web_sys::window() {
				let _ = window
					.remove_event_listener_with_callback(self.event, cb.as_ref().unchecked_ref());
			}
		}
	}
}

impl Drop for WindowListener {
	fn drop(&mut self) {
		self.detach();
	}
}

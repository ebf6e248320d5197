//! Window sizing and window-level event listeners.

use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Event, HtmlCanvasElement, Window};

/// Current `innerWidth` / `innerHeight` of the window.
pub fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	let width = window.inner_width().ok()?.as_f64()?;
	let height = window.inner_height().ok()?.as_f64()?;
	Some((width, height))
}

/// Keeps a canvas backing store matched to the viewport.
pub struct ViewportAdapter {
	canvas: HtmlCanvasElement,
}

impl ViewportAdapter {
	pub fn new(canvas: HtmlCanvasElement) -> Self {
		Self { canvas }
	}

	/// Resizes the canvas to the viewport and returns the new size.
	pub fn sync(&self) -> Option<(f64, f64)> {
		let (width, height) = viewport_size(&web_sys::window()?)?;
		self.canvas.set_width(width as u32);
		self.canvas.set_height(height as u32);
		Some((width, height))
	}
}

/// A `window` event listener that is removed when dropped.
pub struct WindowListener {
	event: &'static str,
	closure: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
	/// Registers `handler` for `event`, skipping events that are not an `E`.
	pub fn new<E: JsCast + 'static>(
		event: &'static str,
		passive: bool,
		mut handler: impl FnMut(E) + 'static,
	) -> Option<Self> {
		let window = web_sys::window()?;
		let closure = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
			if let Ok(ev) = ev.dyn_into::<E>() {
				handler(ev);
			}
		});

		let options = AddEventListenerOptions::new();
		options.set_passive(passive);
		if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
			event,
			closure.as_ref().unchecked_ref(),
			&options,
		) {
			warn!("particle-veil: could not listen for '{}': {:?}", event, e);
			return None;
		}
		Some(Self { event, closure })
	}
}

impl Drop for WindowListener {
	fn drop(&mut self) {
		if let Some(window) = web_sys::window() {
			let _ = window
				.remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
		}
	}
}

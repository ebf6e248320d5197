//! Per-frame scheduling for the particle layers.
//!
//! Each canvas gets its own [`AnimationLoop`] that clears the surface, runs the
//! owning [`Scene`], and re-arms itself with `requestAnimationFrame`. Loops are
//! registered per [`SurfaceId`]; starting a loop for a surface that already has
//! one cancels the old loop first, so re-running initialization never stacks
//! duplicate loops.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::prelude::*;

use super::config::{CursorConfig, EngineConfig, ProximityConfig, RippleConfig};
use super::cursor::CursorEmitter;
use super::field::BackgroundField;
use super::palette::PaletteProvider;
use super::proximity;
use super::random::RandomSource;
use super::ripple::RippleEmitter;
use super::surface::{Surface, SurfaceId};
use super::theme::ThemeMode;

/// Something that can draw one full frame onto a surface.
pub trait Scene {
	/// Clears `surface` and runs one update+draw pass.
	fn render_frame(&mut self, rng: &mut impl RandomSource, surface: &mut impl Surface);

	/// Adopts new surface dimensions.
	fn resize(&mut self, width: f64, height: f64, rng: &mut impl RandomSource);
}

/// Ambient field followed by its proximity lines.
pub struct AmbientScene {
	pub field: BackgroundField,
	proximity: ProximityConfig,
}

impl AmbientScene {
	pub fn new(config: &EngineConfig, theme: ThemeMode) -> Self {
		Self {
			field: BackgroundField::new(config.field.clone(), PaletteProvider::new(theme)),
			proximity: config.proximity.clone(),
		}
	}

	pub fn set_theme(&mut self, mode: ThemeMode) {
		self.field.set_theme(mode);
	}
}

impl Scene for AmbientScene {
	fn render_frame(&mut self, _rng: &mut impl RandomSource, surface: &mut impl Surface) {
		surface.clear(self.field.width(), self.field.height());
		self.field.update(surface);
		proximity::connect(
			&self.field.particles,
			&self.proximity,
			self.field.palette.line_color(),
			surface,
		);
	}

	fn resize(&mut self, width: f64, height: f64, rng: &mut impl RandomSource) {
		self.field.reseed(width, height, rng);
	}
}

/// Cursor confetti followed by click ripples.
pub struct CursorScene {
	pub cursor: CursorEmitter,
	pub ripples: RippleEmitter,
	width: f64,
	height: f64,
}

impl CursorScene {
	pub fn new(cursor: CursorConfig, ripple: RippleConfig) -> Self {
		Self {
			cursor: CursorEmitter::new(cursor),
			ripples: RippleEmitter::new(ripple),
			width: 0.0,
			height: 0.0,
		}
	}
}

impl Scene for CursorScene {
	fn render_frame(&mut self, rng: &mut impl RandomSource, surface: &mut impl Surface) {
		surface.clear(self.width, self.height);
		self.cursor.update(rng, surface);
		self.ripples.update(surface);
	}

	fn resize(&mut self, width: f64, height: f64, _rng: &mut impl RandomSource) {
		self.width = width;
		self.height = height;
	}
}

/// Shared cancellation flag for one loop instance.
#[derive(Clone, Debug, Default)]
pub struct LoopToken(Rc<Cell<bool>>);

impl LoopToken {
	pub fn cancel(&self) {
		self.0.set(true);
	}

	pub fn is_cancelled(&self) -> bool {
		self.0.get()
	}
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A running loop that can be shut down.
pub trait Cancel {
	/// Stops the loop and releases what it holds.
	fn cancel(self);
}

/// At most one loop per surface. Replacing or removing an entry cancels it.
pub struct LoopRegistry<L: Cancel> {
	active: HashMap<SurfaceId, L>,
}

impl<L: Cancel> Default for LoopRegistry<L> {
	fn default() -> Self {
		Self {
			active: HashMap::new(),
		}
	}
}

impl<L: Cancel> LoopRegistry<L> {
	/// Registers `entry` for `surface`, returning the displaced loop.
	///
	/// The caller cancels the returned loop once the registry is released,
	/// so dropping it never runs while the registry is borrowed.
	#[must_use]
	pub fn replace(&mut self, surface: SurfaceId, entry: L) -> Option<L> {
		self.active.insert(surface, entry)
	}

	#[must_use]
	pub fn remove(&mut self, surface: SurfaceId) -> Option<L> {
		self.active.remove(&surface)
	}

	pub fn contains(&self, surface: SurfaceId) -> bool {
		self.active.contains_key(&surface)
	}

	pub fn len(&self) -> usize {
		self.active.len()
	}

	pub fn is_empty(&self) -> bool {
		self.active.is_empty()
	}
}

/// A self-rescheduling `requestAnimationFrame` loop.
pub struct AnimationLoop {
	token: LoopToken,
	frame_id: Rc<Cell<Option<i32>>>,
	callback: FrameCallback,
}

thread_local! {
	static ACTIVE_LOOPS: RefCell<LoopRegistry<AnimationLoop>> = RefCell::new(LoopRegistry::default());
}

fn request_frame(callback: &Closure<dyn FnMut()>) -> Option<i32> {
	let window = web_sys::window()?;
	match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
		Ok(id) => Some(id),
		Err(e) => {
			warn!("particle-veil: requestAnimationFrame failed: {:?}", e);
			None
		}
	}
}

impl AnimationLoop {
	/// Starts `tick` as the only loop for `surface`, stopping any previous one.
	pub fn start(surface: SurfaceId, mut tick: impl FnMut() + 'static) {
		let token = LoopToken::default();
		let frame_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
		let callback: FrameCallback = Rc::new(RefCell::new(None));

		let (token_inner, frame_inner, callback_inner) =
			(token.clone(), frame_id.clone(), callback.clone());
		*callback.borrow_mut() = Some(Closure::new(move || {
			if token_inner.is_cancelled() {
				return;
			}
			tick();
			if let Some(ref cb) = *callback_inner.borrow() {
				frame_inner.set(request_frame(cb));
			}
		}));
		if let Some(ref cb) = *callback.borrow() {
			frame_id.set(request_frame(cb));
		}

		let started = AnimationLoop {
			token,
			frame_id,
			callback,
		};
		let previous = ACTIVE_LOOPS.with(|loops| loops.borrow_mut().replace(surface, started));
		if let Some(previous) = previous {
			previous.cancel();
			debug!("particle-veil: replaced animation loop for {:?}", surface);
		}
		debug!("particle-veil: animation loop started for {:?}", surface);
	}
}

impl Cancel for AnimationLoop {
	fn cancel(self) {
		self.token.cancel();
		if let (Some(id), Some(window)) = (self.frame_id.take(), web_sys::window()) {
			let _ = window.cancel_animation_frame(id);
		}
		// Break the closure's self-reference so it can be freed.
		self.callback.borrow_mut().take();
	}
}

/// Stops the loop registered for `surface`, if any.
pub fn stop(surface: SurfaceId) {
	let previous = ACTIVE_LOOPS.with(|loops| loops.borrow_mut().remove(surface));
	if let Some(active) = previous {
		active.cancel();
		debug!("particle-veil: animation loop stopped for {:?}", surface);
	}
}

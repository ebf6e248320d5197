//! Leptos components hosting the particle canvases.
//!
//! Each component renders a fixed, full-viewport canvas, builds its scene once
//! the canvas is mounted, wires the window events it needs, and hands the
//! per-frame work to an [`AnimationLoop`].

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, MouseEvent, TouchEvent};

use super::config::EngineConfig;
use super::driver::{self, AmbientScene, AnimationLoop, CursorScene, Scene};
use super::random::MathRandom;
use super::surface::{SurfaceId, context_2d};
use super::theme::ThemeMode;
use super::viewport::{ViewportAdapter, WindowListener};

const CANVAS_STYLE: &str =
	"position: fixed; inset: 0; width: 100%; height: 100%; pointer-events: none;";

/// Resolves the mounted canvas and its 2-D context, logging why if unusable.
fn mounted_surface(
	canvas_ref: NodeRef<leptos::html::Canvas>,
	id: SurfaceId,
) -> Option<(HtmlCanvasElement, CanvasRenderingContext2d)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	match context_2d(&canvas) {
		Ok(ctx) => Some((canvas, ctx)),
		Err(e) => {
			warn!(
				"particle-veil: '{}' disabled: {}",
				id.element_id(),
				e
			);
			None
		}
	}
}

/// Ambient field of drifting nodes joined by proximity lines.
///
/// The population is reseeded on every window resize. Changing `theme`
/// recolors the live particles without restarting them.
#[component]
pub fn ParticleBackground(
	#[prop(into)] theme: Signal<ThemeMode>,
	#[prop(optional)] config: EngineConfig,
	#[prop(default = 0)] z_index: i32,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let scene: Rc<RefCell<Option<AmbientScene>>> = Rc::new(RefCell::new(None));
	let listeners: Rc<RefCell<Vec<WindowListener>>> = Rc::new(RefCell::new(Vec::new()));
	let scene_init = scene.clone();

	Effect::new(move |_| {
		let id = SurfaceId::Ambient;
		let Some((canvas, mut ctx)) = mounted_surface(canvas_ref, id) else {
			return;
		};
		let viewport = ViewportAdapter::new(canvas);

		let mut ambient = AmbientScene::new(&config, theme.get_untracked());
		if let Some((w, h)) = viewport.sync() {
			ambient.resize(w, h, &mut MathRandom);
		}
		*scene_init.borrow_mut() = Some(ambient);

		let scene_resize = scene_init.clone();
		*listeners.borrow_mut() = WindowListener::new("resize", false, move |_: Event| {
			let Some((w, h)) = viewport.sync() else {
				return;
			};
			if let Some(ref mut s) = *scene_resize.borrow_mut() {
				s.resize(w, h, &mut MathRandom);
			}
		})
		.into_iter()
		.collect();

		let scene_anim = scene_init.clone();
		AnimationLoop::start(id, move || {
			if let Some(ref mut s) = *scene_anim.borrow_mut() {
				s.render_frame(&mut MathRandom, &mut ctx);
			}
		});
	});

	on_cleanup(|| driver::stop(SurfaceId::Ambient));

	let scene_theme = scene.clone();
	Effect::new(move |_| {
		let mode = theme.get();
		if let Some(ref mut s) = *scene_theme.borrow_mut() {
			s.set_theme(mode);
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id=SurfaceId::Ambient.element_id()
			style=format!("{CANVAS_STYLE} z-index: {z_index};")
		/>
	}
}

/// Confetti that trails the pointer, plus ripples on click or tap.
#[component]
pub fn CursorParticles(
	#[prop(optional)] config: EngineConfig,
	#[prop(default = 50)] z_index: i32,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let scene: Rc<RefCell<Option<CursorScene>>> = Rc::new(RefCell::new(None));
	let listeners: Rc<RefCell<Vec<WindowListener>>> = Rc::new(RefCell::new(Vec::new()));

	Effect::new(move |_| {
		let id = SurfaceId::Cursor;
		let Some((canvas, mut ctx)) = mounted_surface(canvas_ref, id) else {
			return;
		};
		let viewport = ViewportAdapter::new(canvas);

		let mut cursor = CursorScene::new(config.cursor.clone(), config.ripple.clone());
		if let Some((w, h)) = viewport.sync() {
			cursor.resize(w, h, &mut MathRandom);
		}
		*scene.borrow_mut() = Some(cursor);

		let (s_resize, s_mouse, s_touch_start, s_touch_move, s_click) = (
			scene.clone(),
			scene.clone(),
			scene.clone(),
			scene.clone(),
			scene.clone(),
		);
		let track_touch = |target: Rc<RefCell<Option<CursorScene>>>| {
			move |ev: TouchEvent| {
				let Some(touch) = ev.touches().get(0) else {
					return;
				};
				if let Some(ref mut s) = *target.borrow_mut() {
					s.cursor
						.set_pointer(touch.client_x() as f64, touch.client_y() as f64);
				}
			}
		};

		*listeners.borrow_mut() = [
			WindowListener::new("resize", false, move |_: Event| {
				let Some((w, h)) = viewport.sync() else {
					return;
				};
				if let Some(ref mut s) = *s_resize.borrow_mut() {
					s.resize(w, h, &mut MathRandom);
				}
			}),
			WindowListener::new("mousemove", false, move |ev: MouseEvent| {
				if let Some(ref mut s) = *s_mouse.borrow_mut() {
					s.cursor
						.set_pointer(ev.client_x() as f64, ev.client_y() as f64);
				}
			}),
			WindowListener::new("touchstart", true, track_touch(s_touch_start)),
			WindowListener::new("touchmove", true, track_touch(s_touch_move)),
			WindowListener::new("click", false, move |ev: MouseEvent| {
				if let Some(ref mut s) = *s_click.borrow_mut() {
					s.ripples.spawn_at(
						ev.client_x() as f64,
						ev.client_y() as f64,
						&mut MathRandom,
					);
				}
			}),
		]
		.into_iter()
		.flatten()
		.collect();

		let scene_anim = scene.clone();
		AnimationLoop::start(id, move || {
			if let Some(ref mut s) = *scene_anim.borrow_mut() {
				s.render_frame(&mut MathRandom, &mut ctx);
			}
		});
	});

	on_cleanup(|| driver::stop(SurfaceId::Cursor));

	view! {
		<canvas
			node_ref=canvas_ref
			id=SurfaceId::Cursor.element_id()
			style=format!("{CANVAS_STYLE} z-index: {z_index};")
		/>
	}
}

/// Button flipping between light and dark mode.
#[component]
pub fn ThemeToggle(theme: RwSignal<ThemeMode>) -> impl IntoView {
	let label = move || {
		if theme.get().is_dark() {
			"Light mode"
		} else {
			"Dark mode"
		}
	};

	view! {
		<button
			class="theme-toggle"
			type="button"
			aria-label=label
			on:click=move |_| theme.update(|t| *t = t.toggled())
		>
			{label}
		</button>
	}
}

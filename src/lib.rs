//! particle-veil: decorative particle layers for web pages.
//!
//! This crate provides WASM components that draw an ambient proximity-graph
//! field behind the page and confetti/ripple effects that follow the pointer,
//! both reacting to a light/dark theme switch.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::particle_veil::{
	CursorParticles, EngineConfig, ParticleBackground, ThemeMode, ThemeToggle,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("particle-veil: logging initialized");
}

/// Load tuning overrides from a script element with id="particle-config".
/// Expected format: JSON with optional { field, proximity, cursor, ripple } sections.
fn load_config() -> Option<EngineConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("particle-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match EngineConfig::from_json(&json_text) {
		Ok(config) => {
			info!("particle-veil: loaded config overrides");
			Some(config)
		}
		Err(e) => {
			warn!("particle-veil: failed to parse config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Resolves the initial theme, then mounts both particle layers and the toggle.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config().unwrap_or_default();
	let theme = RwSignal::new(components::particle_veil::theme::initial_theme());

	// Persist and mark the document whenever the theme changes
	Effect::new(move |_| {
		components::particle_veil::theme::apply_to_document(theme.get());
	});

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleBackground theme=theme config=config.clone() />
		<CursorParticles config=config />
		<ThemeToggle theme=theme />
	}
}

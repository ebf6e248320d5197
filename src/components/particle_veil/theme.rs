//! Light/dark theme selection and its page-level side effects.
//!
//! The particle engine only needs the [`ThemeMode`] value. Persisting the
//! preference and marking the document are handled here so the rest of the
//! page can style itself off the `dark` class on `<html>`.

use log::{debug, warn};
use web_sys::Window;

/// `localStorage` key holding the persisted preference.
pub const STORAGE_KEY: &str = "theme";

/// Class toggled on the document element while dark mode is active.
pub const DARK_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
	#[default]
	Light,
	Dark,
}

impl ThemeMode {
	pub fn is_dark(self) -> bool {
		self == ThemeMode::Dark
	}

	pub fn toggled(self) -> Self {
		match self {
			ThemeMode::Light => ThemeMode::Dark,
			ThemeMode::Dark => ThemeMode::Light,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			ThemeMode::Light => "light",
			ThemeMode::Dark => "dark",
		}
	}

	/// Picks the startup theme.
	///
	/// A stored `"dark"` wins. Any other stored value means light. With nothing
	/// stored, the OS preference decides.
	pub fn resolve(saved: Option<&str>, prefers_dark: bool) -> Self {
		match saved {
			Some("dark") => ThemeMode::Dark,
			Some(_) => ThemeMode::Light,
			None if prefers_dark => ThemeMode::Dark,
			None => ThemeMode::Light,
		}
	}
}

/// Reads the persisted preference and the OS color scheme.
pub fn initial_theme() -> ThemeMode {
	let Some(window) = web_sys::window() else {
		return ThemeMode::default();
	};
	let saved = window
		.local_storage()
		.ok()
		.flatten()
		.and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
	let prefers_dark = window
		.match_media("(prefers-color-scheme: dark)")
		.ok()
		.flatten()
		.is_some_and(|query| query.matches());

	ThemeMode::resolve(saved.as_deref(), prefers_dark)
}

/// Persists the theme and toggles the document class.
pub fn apply_to_document(mode: ThemeMode) {
	let Some(window) = web_sys::window() else {
		return;
	};
	persist(&window, mode);

	let Some(root) = window.document().and_then(|d| d.document_element()) else {
		return;
	};
	if let Err(e) = root.class_list().toggle_with_force(DARK_CLASS, mode.is_dark()) {
		warn!("particle-veil: could not toggle theme class: {:?}", e);
	}
	debug!("particle-veil: theme set to {}", mode.as_str());
}

fn persist(window: &Window, mode: ThemeMode) {
	match window.local_storage() {
		Ok(Some(storage)) => {
			if storage.set_item(STORAGE_KEY, mode.as_str()).is_err() {
				warn!("particle-veil: could not persist theme preference");
			}
		}
		_ => debug!("particle-veil: localStorage unavailable, theme not persisted"),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn stored_preference_wins() {
		assert_eq!(ThemeMode::resolve(Some("dark"), false), ThemeMode::Dark);
		assert_eq!(ThemeMode::resolve(Some("light"), true), ThemeMode::Light);
	}

	#[test]
	fn unknown_stored_value_is_light() {
		assert_eq!(ThemeMode::resolve(Some("sepia"), true), ThemeMode::Light);
	}

	#[test]
	fn os_preference_applies_when_nothing_stored() {
		assert_eq!(ThemeMode::resolve(None, true), ThemeMode::Dark);
		assert_eq!(ThemeMode::resolve(None, false), ThemeMode::Light);
	}

	#[test]
	fn toggle_round_trips() {
		assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
		assert_eq!(ThemeMode::Dark.toggled().as_str(), "light");
	}
}

//! Theme-indexed colors for the particle layers.
//!
//! The ambient field uses a fill color and a connector-line color that depend on
//! the active [`ThemeMode`]. Cursor confetti and ripples draw from a fixed set of
//! pastel hues that ignore the theme entirely.

use super::theme::ThemeMode;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// A fill or stroke style handed to a [`Surface`](super::surface::Surface).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
	Rgba(Color),
	/// Hue in degrees, saturation and lightness in percent.
	Hsla {
		hue: f64,
		saturation: f64,
		lightness: f64,
		alpha: f64,
	},
}

impl Paint {
	/// Pastel tint used by confetti and ripples.
	pub fn pastel(hue: f64, alpha: f64) -> Self {
		Paint::Hsla {
			hue,
			saturation: 80.0,
			lightness: 85.0,
			alpha,
		}
	}

	pub fn alpha(&self) -> f64 {
		match self {
			Paint::Rgba(c) => c.a,
			Paint::Hsla { alpha, .. } => *alpha,
		}
	}

	pub fn to_css(&self) -> String {
		match self {
			Paint::Rgba(c) => c.to_css(),
			Paint::Hsla {
				hue,
				saturation,
				lightness,
				alpha,
			} => format!("hsla({hue}, {saturation}%, {lightness}%, {alpha})"),
		}
	}
}

impl From<Color> for Paint {
	fn from(color: Color) -> Self {
		Paint::Rgba(color)
	}
}

/// Hue angles (degrees) for confetti and ripples.
pub const PASTEL_HUES: [f64; 11] = [
	0.0, 30.0, 60.0, 100.0, 150.0, 180.0, 210.0, 240.0, 270.0, 300.0, 330.0,
];

/// Colors of the ambient field for one theme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldColors {
	/// Disc fill, alpha included.
	pub particle: Color,
	/// Connector line RGB. Alpha is supplied per line by distance.
	pub line: Color,
}

impl FieldColors {
	pub const fn light() -> Self {
		Self {
			particle: Color::rgba(156, 163, 175, 0.5),
			line: Color::rgb(156, 163, 175),
		}
	}

	pub const fn dark() -> Self {
		Self {
			particle: Color::rgba(107, 114, 128, 0.4),
			line: Color::rgb(107, 114, 128),
		}
	}
}

/// Holds both color tables and the active theme.
///
/// Readers query it every frame; only the theme controller changes the mode.
#[derive(Clone, Debug)]
pub struct PaletteProvider {
	mode: ThemeMode,
	light: FieldColors,
	dark: FieldColors,
}

impl PaletteProvider {
	pub fn new(mode: ThemeMode) -> Self {
		Self {
			mode,
			light: FieldColors::light(),
			dark: FieldColors::dark(),
		}
	}

	pub fn mode(&self) -> ThemeMode {
		self.mode
	}

	pub fn set_theme(&mut self, mode: ThemeMode) {
		self.mode = mode;
	}

	fn active(&self) -> &FieldColors {
		match self.mode {
			ThemeMode::Light => &self.light,
			ThemeMode::Dark => &self.dark,
		}
	}

	pub fn particle_color(&self) -> Color {
		self.active().particle
	}

	pub fn line_color(&self) -> Color {
		self.active().line
	}
}

impl Default for PaletteProvider {
	fn default() -> Self {
		Self::new(ThemeMode::default())
	}
}

//! Ambient background particles.
//!
//! Slow-moving discs that bounce off the canvas edges. The population is
//! re-created from scratch whenever the viewport changes size.

use log::info;

use super::config::FieldConfig;
use super::palette::{Color, PaletteProvider};
use super::random::RandomSource;
use super::surface::Surface;
use super::theme::ThemeMode;

/// A single floating node.
#[derive(Clone, Debug, PartialEq)]
pub struct AmbientParticle {
	pub x: f64,
	pub y: f64,
	pub dx: f64,
	pub dy: f64,
	pub radius: f64,
	pub color: Color,
}

/// Reflects one axis back inside `[radius, extent - radius]`.
///
/// Returns the corrected position and velocity. An axis narrower than the
/// particle's diameter pins it to the middle.
fn reflect_axis(pos: f64, vel: f64, radius: f64, extent: f64) -> (f64, f64) {
	let (low, high) = (radius, extent - radius);
	if high <= low {
		return (extent / 2.0, vel);
	}
	if pos < low {
		((2.0 * low - pos).min(high), vel.abs())
	} else if pos > high {
		((2.0 * high - pos).max(low), -vel.abs())
	} else {
		(pos, vel)
	}
}

impl AmbientParticle {
	fn advance(&mut self, width: f64, height: f64) {
		(self.x, self.dx) = reflect_axis(self.x + self.dx, self.dx, self.radius, width);
		(self.y, self.dy) = reflect_axis(self.y + self.dy, self.dy, self.radius, height);
	}
}

/// Number of particles for a viewport of the given width.
pub fn population_for_width(width: f64, config: &FieldConfig) -> usize {
	let raw = (width / config.px_per_particle).floor();
	let count = if raw.is_finite() && raw > 0.0 { raw as usize } else { 0 };
	count.clamp(config.min_particles, config.max_particles.max(config.min_particles))
}

/// Owns the ambient particles and the palette they are drawn with.
pub struct BackgroundField {
	pub particles: Vec<AmbientParticle>,
	pub palette: PaletteProvider,
	config: FieldConfig,
	width: f64,
	height: f64,
}

impl BackgroundField {
	pub fn new(config: FieldConfig, palette: PaletteProvider) -> Self {
		Self {
			particles: Vec::new(),
			palette,
			config,
			width: 0.0,
			height: 0.0,
		}
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	/// Discards the current population and scatters a new one over the bounds.
	pub fn reseed(&mut self, width: f64, height: f64, rng: &mut impl RandomSource) {
		self.width = width;
		self.height = height;

		let count = population_for_width(width, &self.config);
		let color = self.palette.particle_color();
		let cfg = &self.config;

		self.particles.clear();
		self.particles.reserve(count);
		for _ in 0..count {
			let radius = rng.range(cfg.radius_min, cfg.radius_max);
			let x = rng.range(radius, (width - radius).max(radius));
			let y = rng.range(radius, (height - radius).max(radius));
			self.particles.push(AmbientParticle {
				x,
				y,
				dx: rng.symmetric(cfg.max_speed),
				dy: rng.symmetric(cfg.max_speed),
				radius,
				color,
			});
		}

		info!(
			"particle-veil: seeded {} ambient particles for {}x{}",
			count, width, height
		);
	}

	/// Switches palettes and recolors every live particle in place.
	pub fn set_theme(&mut self, mode: ThemeMode) {
		self.palette.set_theme(mode);
		let color = self.palette.particle_color();
		for p in &mut self.particles {
			p.color = color;
		}
	}

	/// Moves every particle one frame and draws it.
	pub fn update(&mut self, surface: &mut impl Surface) {
		let (width, height) = (self.width, self.height);
		for p in &mut self.particles {
			p.advance(width, height);
			surface.fill_disc(p.x, p.y, p.radius, &p.color.into());
		}
	}
}

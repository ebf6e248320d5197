//! Expanding rings spawned on click or tap.

use super::config::RippleConfig;
use super::palette::{PASTEL_HUES, Paint};
use super::random::RandomSource;
use super::surface::Surface;

/// One ring growing out from a click point while it fades.
#[derive(Clone, Debug)]
pub struct RippleParticle {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub max_radius: f64,
	/// Starts at 1 and doubles as stroke alpha.
	pub life: f64,
	pub hue: f64,
}

impl RippleParticle {
	pub fn spawn(x: f64, y: f64, config: &RippleConfig, rng: &mut impl RandomSource) -> Self {
		Self {
			x,
			y,
			radius: config.start_radius,
			max_radius: rng.range(config.max_radius_min, config.max_radius_max),
			life: 1.0,
			hue: *rng.pick(&PASTEL_HUES),
		}
	}

	/// Eases the radius toward its maximum and burns life.
	///
	/// Radius and life run out independently; a ring can vanish before it has
	/// finished growing.
	pub fn step(&mut self, ease: f64, life_step: f64) {
		self.radius += (self.max_radius - self.radius) * ease;
		self.life -= life_step;
	}

	pub fn is_alive(&self) -> bool {
		self.life > 0.0
	}

	pub fn draw(&self, surface: &mut impl Surface, line_width: f64) {
		if !self.is_alive() || self.radius <= 0.0 {
			return;
		}
		surface.stroke_ring(
			self.x,
			self.y,
			self.radius,
			line_width,
			&Paint::pastel(self.hue, self.life),
		);
	}
}

/// Live rings for the cursor layer, advanced and culled once per frame.
#[derive(Debug)]
pub struct RippleEmitter {
	config: RippleConfig,
	pub ripples: Vec<RippleParticle>,
}

impl RippleEmitter {
	pub fn new(config: RippleConfig) -> Self {
		Self {
			config,
			ripples: Vec::new(),
		}
	}

	/// Adds a burst of rings centered on `(x, y)`.
	pub fn spawn_at(&mut self, x: f64, y: f64, rng: &mut impl RandomSource) {
		for _ in 0..self.config.rings_per_click {
			self.ripples.push(RippleParticle::spawn(x, y, &self.config, rng));
		}
	}

	pub fn update(&mut self, surface: &mut impl Surface) {
		let RippleConfig {
			ease,
			life_step,
			line_width,
			..
		} = self.config;
		for r in self.ripples.iter_mut() {
			r.step(ease, life_step);
			r.draw(surface, line_width);
		}
		self.ripples.retain(RippleParticle::is_alive);
	}
}

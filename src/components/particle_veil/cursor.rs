//! Cursor-following confetti.
//!
//! While the pointer moves, a small rotating shape is spawned at its position
//! every few frames. Each shape drifts, falls under gravity, and shrinks and
//! fades as its life runs out. The pool is capped; the oldest shapes go first.

use std::collections::VecDeque;

use super::config::CursorConfig;
use super::palette::{PASTEL_HUES, Paint};
use super::random::RandomSource;
use super::surface::Surface;

/// Confetti outline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
	Disc,
	Square,
	Triangle,
}

impl Shape {
	pub const ALL: [Shape; 3] = [Shape::Disc, Shape::Square, Shape::Triangle];

	/// Equilateral triangle inscribed in a circle of `radius`, tip up.
	pub fn triangle_vertices(radius: f64) -> [(f64, f64); 3] {
		let half_width = radius * 3f64.sqrt() / 2.0;
		[
			(0.0, -radius),
			(half_width, radius * 0.5),
			(-half_width, radius * 0.5),
		]
	}
}

/// A single piece of confetti.
#[derive(Clone, Debug)]
pub struct EmittedParticle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub gravity: f64,
	pub radius: f64,
	pub life: f64,
	pub max_life: f64,
	pub shape: Shape,
	pub hue: f64,
	pub angle: f64,
	pub spin: f64,
}

impl EmittedParticle {
	pub fn spawn(x: f64, y: f64, config: &CursorConfig, rng: &mut impl RandomSource) -> Self {
		let vx = rng.symmetric(config.max_speed);
		let vy = rng.symmetric(config.max_speed);
		let radius = rng.range(config.radius_min, config.radius_max);
		let life = rng.range(config.life_min, config.life_max);
		let shape = *rng.pick(&Shape::ALL);
		let hue = *rng.pick(&PASTEL_HUES);
		let angle = rng.range(0.0, std::f64::consts::TAU);
		let spin = rng.symmetric(config.max_spin);

		Self {
			x,
			y,
			vx,
			vy,
			gravity: config.gravity,
			radius,
			life,
			max_life: life,
			shape,
			hue,
			angle,
			spin,
		}
	}

	/// Advances one frame.
	pub fn step(&mut self, damping: f64) {
		self.life -= 1.0;
		self.vx *= damping;
		self.vy *= damping;
		self.vy += self.gravity;
		self.angle += self.spin;
		self.x += self.vx;
		self.y += self.vy;
	}

	/// Remaining life as a fraction of the original, clamped to `[0, 1]`.
	pub fn life_fraction(&self) -> f64 {
		if self.max_life <= 0.0 {
			return 0.0;
		}
		(self.life / self.max_life).clamp(0.0, 1.0)
	}

	pub fn alpha(&self) -> f64 {
		self.life_fraction()
	}

	pub fn drawn_radius(&self) -> f64 {
		self.radius * self.life_fraction()
	}

	pub fn is_alive(&self) -> bool {
		self.life > 0.0
	}

	pub fn draw(&self, surface: &mut impl Surface) {
		if !self.is_alive() {
			return;
		}
		let radius = self.drawn_radius();
		if radius <= 0.0 {
			return;
		}
		surface.fill_shape(
			self.shape,
			self.x,
			self.y,
			self.angle,
			radius,
			&Paint::pastel(self.hue, self.alpha()),
		);
	}
}

/// Tracks the pointer and owns the live confetti pool (oldest at the front).
#[derive(Debug)]
pub struct CursorEmitter {
	config: CursorConfig,
	pointer: Option<(f64, f64)>,
	previous: Option<(f64, f64)>,
	frame: u64,
	pub particles: VecDeque<EmittedParticle>,
}

impl CursorEmitter {
	pub fn new(config: CursorConfig) -> Self {
		let capacity = config.max_particles;
		Self {
			config,
			pointer: None,
			previous: None,
			frame: 0,
			particles: VecDeque::with_capacity(capacity),
		}
	}

	/// Records the latest pointer position. Only the most recent value is kept.
	pub fn set_pointer(&mut self, x: f64, y: f64) {
		self.pointer = Some((x, y));
	}

	fn pointer_moved(&self) -> bool {
		self.pointer.is_some() && self.pointer != self.previous
	}

	/// Spawns, advances, draws, and culls for one frame.
	pub fn update(&mut self, rng: &mut impl RandomSource, surface: &mut impl Surface) {
		self.frame += 1;

		if let Some((x, y)) = self.pointer {
			if self.pointer_moved() && self.frame % self.config.effective_duty_cycle() == 0 {
				self.particles
					.push_back(EmittedParticle::spawn(x, y, &self.config, rng));
			}
		}

		for p in self.particles.iter_mut() {
			p.step(self.config.damping);
			p.draw(surface);
		}

		self.particles.retain(EmittedParticle::is_alive);
		let surplus = self.particles.len().saturating_sub(self.config.max_particles);
		self.particles.drain(..surplus);

		self.previous = self.pointer;
	}
}

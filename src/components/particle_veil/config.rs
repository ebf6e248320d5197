//! Tuning constants for the particle layers.
//!
//! Every value has a default matching the shipped look. A page can override any
//! subset by embedding JSON in `<script id="particle-config">`; missing fields
//! fall back to the defaults below. Loaded values are sanitized so that every
//! particle still fades out, stays non-negative in size, and rings never grow
//! past their maximum.

use log::warn;
use serde::Deserialize;

/// Replaces a non-finite or out-of-range value, logging the change.
fn clamped(name: &str, value: f64, min: f64, max: f64) -> f64 {
	let fixed = if value.is_nan() { min } else { value.clamp(min, max) };
	if fixed != value {
		warn!("particle-veil: config {} = {} adjusted to {}", name, value, fixed);
	}
	fixed
}

/// Falls back to `fallback` unless `value` is strictly positive and finite.
fn positive(name: &str, value: f64, fallback: f64) -> f64 {
	if value > 0.0 && value.is_finite() {
		return value;
	}
	warn!(
		"particle-veil: config {} = {} must be positive, using {}",
		name, value, fallback
	);
	fallback
}

/// Non-negative bounds with `min <= max`.
fn ordered(name: &str, min: f64, max: f64) -> (f64, f64) {
	let min = clamped(name, min, 0.0, f64::MAX);
	let max = clamped(name, max, 0.0, f64::MAX);
	if min > max {
		warn!("particle-veil: config {} bounds {}..{} swapped", name, min, max);
		return (max, min);
	}
	(min, max)
}

/// Ambient field population and motion.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
	/// One particle per this many pixels of viewport width.
	pub px_per_particle: f64,
	pub min_particles: usize,
	pub max_particles: usize,
	pub radius_min: f64,
	pub radius_max: f64,
	/// Maximum absolute velocity per axis, px/frame.
	pub max_speed: f64,
}

impl FieldConfig {
	fn sanitized(mut self) -> Self {
		let d = Self::default();
		self.px_per_particle =
			positive("field.px_per_particle", self.px_per_particle, d.px_per_particle);
		(self.radius_min, self.radius_max) = ordered("field.radius", self.radius_min, self.radius_max);
		self.max_speed = clamped("field.max_speed", self.max_speed.abs(), 0.0, f64::MAX);
		if self.min_particles > self.max_particles {
			warn!(
				"particle-veil: config field particle bounds {}..{} swapped",
				self.min_particles, self.max_particles
			);
			std::mem::swap(&mut self.min_particles, &mut self.max_particles);
		}
		self
	}
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			px_per_particle: 30.0,
			min_particles: 40,
			max_particles: 100,
			radius_min: 1.0,
			radius_max: 4.5,
			max_speed: 0.4,
		}
	}
}

/// Connector lines between nearby ambient particles.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProximityConfig {
	pub max_distance: f64,
	pub line_width: f64,
}

impl ProximityConfig {
	fn sanitized(mut self) -> Self {
		self.max_distance = clamped("proximity.max_distance", self.max_distance, 0.0, f64::MAX);
		self.line_width = clamped("proximity.line_width", self.line_width, 0.0, f64::MAX);
		self
	}
}

impl Default for ProximityConfig {
	fn default() -> Self {
		Self {
			max_distance: 100.0,
			line_width: 0.5,
		}
	}
}

/// Cursor confetti spawning and physics.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
	/// Spawn on every Nth frame while the pointer moves. Values below 1 act as 1.
	pub duty_cycle: u32,
	/// Maximum absolute initial velocity per axis, px/frame.
	pub max_speed: f64,
	/// Added to vertical velocity every frame.
	pub gravity: f64,
	/// Velocity multiplier applied every frame (air drag).
	pub damping: f64,
	pub radius_min: f64,
	pub radius_max: f64,
	/// Lifetime bounds in frames.
	pub life_min: f64,
	pub life_max: f64,
	/// Maximum absolute angular speed, rad/frame.
	pub max_spin: f64,
	/// Pool cap. Oldest particles are evicted beyond this.
	pub max_particles: usize,
}

impl CursorConfig {
	pub fn effective_duty_cycle(&self) -> u64 {
		u64::from(self.duty_cycle.max(1))
	}

	fn sanitized(mut self) -> Self {
		self.max_speed = clamped("cursor.max_speed", self.max_speed.abs(), 0.0, f64::MAX);
		if !self.gravity.is_finite() {
			warn!("particle-veil: config cursor.gravity = {} ignored", self.gravity);
			self.gravity = Self::default().gravity;
		}
		self.damping = clamped("cursor.damping", self.damping, 0.0, 1.0);
		(self.radius_min, self.radius_max) = ordered("cursor.radius", self.radius_min, self.radius_max);
		(self.life_min, self.life_max) = ordered("cursor.life", self.life_min, self.life_max);
		self.max_spin = clamped("cursor.max_spin", self.max_spin.abs(), 0.0, f64::MAX);
		self
	}
}

impl Default for CursorConfig {
	fn default() -> Self {
		Self {
			duty_cycle: 2,
			max_speed: 1.0,
			gravity: 0.01,
			damping: 0.98,
			radius_min: 2.0,
			radius_max: 5.0,
			life_min: 80.0,
			life_max: 130.0,
			max_spin: 0.04,
			max_particles: 200,
		}
	}
}

/// Click ripples.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RippleConfig {
	pub rings_per_click: usize,
	pub start_radius: f64,
	pub max_radius_min: f64,
	pub max_radius_max: f64,
	/// Fraction of the remaining gap to the max radius closed each frame.
	pub ease: f64,
	/// Life lost per frame. Life starts at 1.
	pub life_step: f64,
	pub line_width: f64,
}

impl RippleConfig {
	fn sanitized(mut self) -> Self {
		let d = Self::default();
		self.start_radius = clamped("ripple.start_radius", self.start_radius, 0.0, f64::MAX);
		(self.max_radius_min, self.max_radius_max) =
			ordered("ripple.max_radius", self.max_radius_min, self.max_radius_max);
		self.ease = clamped("ripple.ease", positive("ripple.ease", self.ease, d.ease), 0.0, 1.0);
		self.life_step = positive("ripple.life_step", self.life_step, d.life_step);
		self.line_width = clamped("ripple.line_width", self.line_width, 0.0, f64::MAX);
		self
	}
}

impl Default for RippleConfig {
	fn default() -> Self {
		Self {
			rings_per_click: 3,
			start_radius: 1.0,
			max_radius_min: 40.0,
			max_radius_max: 70.0,
			ease: 0.04,
			life_step: 0.015,
			line_width: 2.0,
		}
	}
}

/// Complete configuration for both particle layers.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
	pub field: FieldConfig,
	pub proximity: ProximityConfig,
	pub cursor: CursorConfig,
	pub ripple: RippleConfig,
}

impl EngineConfig {
	/// Parses overrides and sanitizes the result.
	pub fn from_json(text: &str) -> serde_json::Result<Self> {
		serde_json::from_str::<Self>(text).map(Self::sanitized)
	}

	/// Brings every value back into the range the simulation relies on.
	pub fn sanitized(self) -> Self {
		Self {
			field: self.field.sanitized(),
			proximity: self.proximity.sanitized(),
			cursor: self.cursor.sanitized(),
			ripple: self.ripple.sanitized(),
		}
	}
}

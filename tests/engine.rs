//! End-to-end scenarios for both particle layers, driven without a browser.

// Test crate links every lib dependency, silence noisy lint.
#![allow(unused_crate_dependencies)]

use particle_veil::components::particle_veil::config::{CursorConfig, EngineConfig};
use particle_veil::components::particle_veil::cursor::Shape;
use particle_veil::components::particle_veil::driver::{AmbientScene, CursorScene, Scene};
use particle_veil::components::particle_veil::palette::{Color, Paint};
use particle_veil::components::particle_veil::random::RandomSource;
use particle_veil::components::particle_veil::surface::Surface;
use particle_veil::ThemeMode;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

struct Seeded(StdRng);

impl Seeded {
	fn new(seed: u64) -> Self {
		Self(StdRng::seed_from_u64(seed))
	}
}

impl RandomSource for Seeded {
	fn next_unit(&mut self) -> f64 {
		self.0.gen_range(0.0..1.0)
	}
}

/// Counts draw calls per frame and keeps line alphas.
#[derive(Default)]
struct Tally {
	clears: usize,
	discs: usize,
	shapes: usize,
	rings: Vec<(f64, f64, f64)>,
	line_alphas: Vec<f64>,
}

impl Surface for Tally {
	fn clear(&mut self, _width: f64, _height: f64) {
		self.clears += 1;
	}

	fn fill_disc(&mut self, _x: f64, _y: f64, _radius: f64, _paint: &Paint) {
		self.discs += 1;
	}

	fn stroke_line(&mut self, _from: (f64, f64), _to: (f64, f64), _width: f64, paint: &Paint) {
		self.line_alphas.push(paint.alpha());
	}

	fn stroke_ring(&mut self, x: f64, y: f64, radius: f64, _width: f64, _paint: &Paint) {
		self.rings.push((x, y, radius));
	}

	fn fill_shape(&mut self, _shape: Shape, _x: f64, _y: f64, _angle: f64, _radius: f64, _paint: &Paint) {
		self.shapes += 1;
	}
}

#[test]
fn reseed_click_and_fade_out() {
	let mut rng = Seeded::new(1);
	let config = EngineConfig::default();

	let mut ambient = AmbientScene::new(&config, ThemeMode::Light);
	ambient.resize(800.0, 600.0, &mut rng);
	assert_eq!(ambient.field.particles.len(), 40);

	let mut cursor = CursorScene::new(config.cursor.clone(), config.ripple.clone());
	cursor.resize(800.0, 600.0, &mut rng);
	cursor.ripples.spawn_at(100.0, 100.0, &mut rng);
	assert_eq!(cursor.ripples.ripples.len(), 3);
	assert!(
		cursor
			.ripples
			.ripples
			.iter()
			.all(|r| (r.x, r.y) == (100.0, 100.0))
	);

	let mut frames = 0;
	while !cursor.ripples.ripples.is_empty() {
		let mut surface = Tally::default();
		cursor.render_frame(&mut rng, &mut surface);
		assert_eq!(surface.clears, 1);
		for (x, y, _) in &surface.rings {
			assert_eq!((*x, *y), (100.0, 100.0));
		}
		frames += 1;
		assert!(frames < 100, "ripples never expired");
	}
	assert!(cursor.ripples.ripples.iter().all(|r| r.life <= 0.0));
}

#[test]
fn resize_replaces_population() {
	let mut rng = Seeded::new(2);
	let mut ambient = AmbientScene::new(&EngineConfig::default(), ThemeMode::Light);

	ambient.resize(2400.0, 900.0, &mut rng);
	assert_eq!(ambient.field.particles.len(), 80);
	for _ in 0..30 {
		ambient.render_frame(&mut rng, &mut Tally::default());
	}

	ambient.resize(1200.0, 900.0, &mut rng);
	assert_eq!(ambient.field.particles.len(), 40);
	for p in &ambient.field.particles {
		assert!(p.x <= 1200.0 - p.radius);
	}
}

#[test]
fn theme_switch_mid_animation_keeps_motion_state() {
	let mut rng = Seeded::new(3);
	let mut ambient = AmbientScene::new(&EngineConfig::default(), ThemeMode::Light);
	ambient.resize(1024.0, 768.0, &mut rng);
	for _ in 0..10 {
		ambient.render_frame(&mut rng, &mut Tally::default());
	}

	let snapshot: Vec<_> = ambient
		.field
		.particles
		.iter()
		.map(|p| (p.x, p.y, p.dx, p.dy, p.radius))
		.collect();
	ambient.set_theme(ThemeMode::Dark);

	for (p, before) in ambient.field.particles.iter().zip(&snapshot) {
		assert_eq!((p.x, p.y, p.dx, p.dy, p.radius), *before);
		assert_eq!(p.color, Color::rgba(107, 114, 128, 0.4));
	}
}

#[test]
fn line_alphas_are_within_unit_range() {
	let mut rng = Seeded::new(4);
	let mut ambient = AmbientScene::new(&EngineConfig::default(), ThemeMode::Dark);
	ambient.resize(600.0, 400.0, &mut rng);

	let mut surface = Tally::default();
	ambient.render_frame(&mut rng, &mut surface);
	assert_eq!(surface.discs, 40);
	assert!(!surface.line_alphas.is_empty());
	assert!(surface.line_alphas.iter().all(|a| *a > 0.0 && *a <= 1.0));
}

#[test]
fn confetti_pool_stays_capped_under_constant_motion() {
	let mut rng = Seeded::new(5);
	let mut cursor = CursorScene::new(
		CursorConfig {
			duty_cycle: 1,
			max_particles: 50,
			..CursorConfig::default()
		},
		Default::default(),
	);
	cursor.resize(800.0, 600.0, &mut rng);

	for frame in 0..500 {
		cursor
			.cursor
			.set_pointer(frame as f64 % 800.0, (frame * 3) as f64 % 600.0);
		let mut surface = Tally::default();
		cursor.render_frame(&mut rng, &mut surface);
		assert!(cursor.cursor.particles.len() <= 50);
		assert!(surface.shapes <= 51);
	}
	assert_eq!(cursor.cursor.particles.len(), 50);
}

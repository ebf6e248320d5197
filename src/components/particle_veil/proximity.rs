//! Connector lines between nearby ambient particles.
//!
//! Every pair closer than the link distance gets a thin line whose opacity
//! falls off linearly: fully opaque at distance 0, invisible at the threshold.

use std::collections::HashMap;

use super::config::ProximityConfig;
use super::field::AmbientParticle;
use super::palette::{Color, Paint};
use super::surface::Surface;

/// Populations above this size use the grid pass in [`connect`].
pub const BUCKETED_ABOVE: usize = 200;

/// A pair of particle indices (`a < b`) and the line alpha between them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	pub a: usize,
	pub b: usize,
	pub alpha: f64,
}

fn link_between(
	particles: &[AmbientParticle],
	a: usize,
	b: usize,
	max_distance: f64,
) -> Option<Link> {
	let (pa, pb) = (&particles[a], &particles[b]);
	let (dx, dy) = (pa.x - pb.x, pa.y - pb.y);
	let distance = (dx * dx + dy * dy).sqrt();
	(distance < max_distance).then(|| Link {
		a,
		b,
		alpha: 1.0 - distance / max_distance,
	})
}

/// All links, checking every unordered pair.
pub fn links(particles: &[AmbientParticle], max_distance: f64) -> Vec<Link> {
	let mut out = Vec::new();
	for a in 0..particles.len() {
		for b in a + 1..particles.len() {
			if let Some(link) = link_between(particles, a, b, max_distance) {
				out.push(link);
			}
		}
	}
	out
}

/// Same result as [`links`], using a uniform grid with `max_distance` cells so
/// only neighbouring cells are compared. Worth it for populations well past a
/// few hundred particles.
pub fn links_bucketed(particles: &[AmbientParticle], max_distance: f64) -> Vec<Link> {
	if max_distance <= 0.0 {
		return Vec::new();
	}
	let cell_of = |p: &AmbientParticle| {
		(
			(p.x / max_distance).floor() as i64,
			(p.y / max_distance).floor() as i64,
		)
	};

	let mut grid: HashMap<(i64, i64), Vec<usize>> = HashMap::new();
	for (idx, p) in particles.iter().enumerate() {
		grid.entry(cell_of(p)).or_default().push(idx);
	}

	let mut out = Vec::new();
	for (a, p) in particles.iter().enumerate() {
		let (cx, cy) = cell_of(p);
		for nx in cx - 1..=cx + 1 {
			for ny in cy - 1..=cy + 1 {
				let Some(bucket) = grid.get(&(nx, ny)) else {
					continue;
				};
				for &b in bucket.iter().filter(|&&b| b > a) {
					if let Some(link) = link_between(particles, a, b, max_distance) {
						out.push(link);
					}
				}
			}
		}
	}
	out.sort_by_key(|l| (l.a, l.b));
	out
}

/// Strokes every link in `line_color` with its distance-based alpha.
pub fn connect(
	particles: &[AmbientParticle],
	config: &ProximityConfig,
	line_color: Color,
	surface: &mut impl Surface,
) {
	let found = if particles.len() > BUCKETED_ABOVE {
		links_bucketed(particles, config.max_distance)
	} else {
		links(particles, config.max_distance)
	};
	for link in found {
		let (pa, pb) = (&particles[link.a], &particles[link.b]);
		surface.stroke_line(
			(pa.x, pa.y),
			(pb.x, pb.y),
			config.line_width,
			&Paint::Rgba(line_color.with_alpha(link.alpha)),
		);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_veil::random::RandomSource;
	use crate::components::particle_veil::random::testing::SeededRandom;
	use crate::components::particle_veil::surface::testing::{DrawOp, Recorder};

	fn at(x: f64, y: f64) -> AmbientParticle {
		AmbientParticle {
			x,
			y,
			dx: 0.0,
			dy: 0.0,
			radius: 1.0,
			color: Color::rgb(0, 0, 0),
		}
	}

	#[test]
	fn alpha_falls_off_linearly() {
		let particles = [at(0.0, 0.0), at(30.0, 40.0)];
		let found = links(&particles, 100.0);
		assert_eq!(found.len(), 1);
		assert!((found[0].alpha - 0.5).abs() < 1e-12);
	}

	#[test]
	fn threshold_is_exclusive() {
		let particles = [at(0.0, 0.0), at(100.0, 0.0), at(0.0, 150.0)];
		assert!(links(&particles, 100.0).is_empty());
	}

	#[test]
	fn coincident_particles_are_fully_opaque() {
		let particles = [at(5.0, 5.0), at(5.0, 5.0)];
		assert_eq!(links(&particles, 100.0)[0].alpha, 1.0);
	}

	#[test]
	fn connect_strokes_with_line_color() {
		let particles = [at(0.0, 0.0), at(60.0, 80.0), at(0.0, 20.0)];
		let mut surface = Recorder::default();
		connect(
			&particles,
			&ProximityConfig::default(),
			Color::rgb(156, 163, 175),
			&mut surface,
		);

		let lines: Vec<&DrawOp> = surface.lines().collect();
		assert_eq!(lines.len(), 2);
		for op in lines {
			let DrawOp::Line {
				from,
				to,
				width,
				paint,
			} = op
			else {
				unreachable!();
			};
			let d = ((from.0 - to.0).powi(2) + (from.1 - to.1).powi(2)).sqrt();
			assert_eq!(*width, 0.5);
			assert!((paint.alpha() - (1.0 - d / 100.0)).abs() < 1e-12);
			let Paint::Rgba(c) = paint else {
				panic!("expected rgba paint");
			};
			assert_eq!((c.r, c.g, c.b), (156, 163, 175));
		}
	}

	#[test]
	fn bucketed_matches_brute_force() {
		let mut rng = SeededRandom::new(21);
		let particles: Vec<AmbientParticle> = (0..300)
			.map(|_| at(rng.range(0.0, 1200.0), rng.range(0.0, 800.0)))
			.collect();
		let brute = links(&particles, 100.0);
		let bucketed = links_bucketed(&particles, 100.0);
		assert!(!brute.is_empty());
		assert_eq!(brute, bucketed);
	}

	#[test]
	fn large_population_draws_same_lines() {
		let mut rng = SeededRandom::new(22);
		let particles: Vec<AmbientParticle> = (0..BUCKETED_ABOVE + 50)
			.map(|_| at(rng.range(0.0, 1600.0), rng.range(0.0, 900.0)))
			.collect();
		let mut surface = Recorder::default();
		connect(
			&particles,
			&ProximityConfig::default(),
			Color::rgb(107, 114, 128),
			&mut surface,
		);

		let expected = links(&particles, 100.0);
		let drawn: Vec<&DrawOp> = surface.lines().collect();
		assert_eq!(drawn.len(), expected.len());
		for (op, link) in drawn.into_iter().zip(&expected) {
			let DrawOp::Line { from, paint, .. } = op else {
				unreachable!();
			};
			assert_eq!(*from, (particles[link.a].x, particles[link.a].y));
			assert!((paint.alpha() - link.alpha).abs() < 1e-12);
		}
	}
}

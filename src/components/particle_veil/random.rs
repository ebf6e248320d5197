//! Random number source for particle spawning.

/// Uniform random stream in `[0, 1)`.
///
/// The browser build draws from `Math.random`; tests plug in a seeded generator.
pub trait RandomSource {
	fn next_unit(&mut self) -> f64;

	/// Uniform value in `[min, max)`.
	fn range(&mut self, min: f64, max: f64) -> f64 {
		min + self.next_unit() * (max - min)
	}

	/// Uniform value in `[-half_width, half_width)`.
	fn symmetric(&mut self, half_width: f64) -> f64 {
		(self.next_unit() - 0.5) * 2.0 * half_width
	}

	/// Uniformly chosen element. `items` must not be empty.
	fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
		let idx = (self.next_unit() * items.len() as f64) as usize;
		&items[idx.min(items.len() - 1)]
	}
}

/// `Math.random` from the host JS engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct MathRandom;

impl RandomSource for MathRandom {
	fn next_unit(&mut self) -> f64 {
		js_sys::Math::random()
	}
}


#[cfg(test)]
mod tests {
	use super::testing::{Scripted, SeededRandom};
	use super::*;

	#[test]
	fn range_stays_inside_bounds() {
		let mut rng = SeededRandom::new(7);
		for _ in 0..1000 {
			let v = rng.range(1.0, 4.5);
			assert!((1.0..4.5).contains(&v));
			let s = rng.symmetric(0.4);
			assert!((-0.4..0.4).contains(&s));
		}
	}

	#[test]
	fn pick_covers_edges() {
		let items = [1, 2, 3];
		let mut rng = Scripted::new(&[0.0, 0.5, 0.999_999]);
		assert_eq!(*rng.pick(&items), 1);
		assert_eq!(*rng.pick(&items), 2);
		assert_eq!(*rng.pick(&items), 3);
	}
}

//! Particle field storage and per-tick motion.
//!
//! The field is three parallel buffers in the layout the renderer consumes:
//! particle `i` occupies slots `[3i, 3i + 3)` of `positions` and `velocities`
//! and slot `i` of `sizes`. Generated once at mount and mutated (positions
//! only) every animation tick.

use rand::Rng;

/// Number of particles in the field.
pub const PARTICLE_COUNT: usize = 150;

/// Half-extent of the wrap cube; particles live in `[-BOUND, BOUND]^3`.
pub const BOUND: f32 = 10.0;

/// The ambient particle buffers.
pub struct ParticleField {
	/// Interleaved xyz positions, mutated each tick.
	pub positions: Vec<f32>,
	/// Interleaved xyz velocities, fixed after generation.
	pub velocities: Vec<f32>,
	/// Per-particle base point size, fixed after generation.
	pub sizes: Vec<f32>,
}

impl ParticleField {
	/// Sample a fresh field of `count` particles.
	///
	/// Positions are uniform in `[-10, 10]` per axis, velocities uniform in
	/// `[-0.01, 0.01]` per axis, sizes uniform in `[1, 4)`.
	pub fn generate<R: Rng>(count: usize, rng: &mut R) -> Self {
		let mut positions = Vec::with_capacity(count * 3);
		let mut velocities = Vec::with_capacity(count * 3);
		let mut sizes = Vec::with_capacity(count);

		for _ in 0..count {
			for _ in 0..3 {
				positions.push((rng.r#gen::<f32>() - 0.5) * 20.0);
				velocities.push((rng.r#gen::<f32>() - 0.5) * 0.02);
			}
			sizes.push(rng.r#gen::<f32>() * 3.0 + 1.0);
		}

		Self {
			positions,
			velocities,
			sizes,
		}
	}

	/// Sample the standard 150-particle field from an unseeded source.
	pub fn new() -> Self {
		Self::generate(PARTICLE_COUNT, &mut rand::thread_rng())
	}

	pub fn len(&self) -> usize {
		self.sizes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.sizes.is_empty()
	}

	/// Advance every particle by its velocity and wrap at the cube faces.
	///
	/// Wrapping teleports to the opposite face edge (`10.3` becomes `-10.0`,
	/// not `-9.7`); velocity direction is preserved.
	pub fn step(&mut self) {
		for (p, v) in self.positions.iter_mut().zip(&self.velocities) {
			*p += v;
			if *p > BOUND {
				*p = -BOUND;
			} else if *p < -BOUND {
				*p = BOUND;
			}
		}
	}
}

impl Default for ParticleField {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn seeded_field() -> ParticleField {
		ParticleField::generate(PARTICLE_COUNT, &mut StdRng::seed_from_u64(7))
	}

	#[test]
	fn buffer_lengths() {
		let field = seeded_field();
		assert_eq!(field.len(), PARTICLE_COUNT);
		assert_eq!(field.positions.len(), PARTICLE_COUNT * 3);
		assert_eq!(field.velocities.len(), PARTICLE_COUNT * 3);
		assert_eq!(field.sizes.len(), PARTICLE_COUNT);
	}

	#[test]
	fn buffer_lengths_stable_under_ticks() {
		let mut field = seeded_field();
		for _ in 0..500 {
			field.step();
		}
		assert_eq!(field.positions.len(), PARTICLE_COUNT * 3);
		assert_eq!(field.velocities.len(), PARTICLE_COUNT * 3);
		assert_eq!(field.sizes.len(), PARTICLE_COUNT);
	}

	#[test]
	fn generation_ranges() {
		let field = seeded_field();
		for &p in &field.positions {
			assert!((-10.0..=10.0).contains(&p));
		}
		for &v in &field.velocities {
			assert!((-0.01..=0.01).contains(&v));
		}
		for &s in &field.sizes {
			assert!((1.0..4.0).contains(&s));
		}
	}

	#[test]
	fn positions_stay_in_bounds() {
		let mut field = seeded_field();
		for _ in 0..2000 {
			field.step();
			for &p in &field.positions {
				assert!((-BOUND..=BOUND).contains(&p));
			}
		}
	}

	#[test]
	fn wrap_snaps_to_opposite_face() {
		let mut field = seeded_field();
		field.positions[0] = 10.25;
		field.velocities[0] = 0.05;
		field.step();
		// 10.3 overflows the cube; wrap discards the remainder.
		assert_eq!(field.positions[0], -10.0);

		field.positions[1] = -10.25;
		field.velocities[1] = -0.05;
		field.step();
		assert_eq!(field.positions[1], 10.0);
	}

	#[test]
	fn velocities_never_change() {
		let mut field = seeded_field();
		let initial = field.velocities.clone();
		for _ in 0..300 {
			field.step();
		}
		assert_eq!(field.velocities, initial);
	}

	#[test]
	fn seeded_generation_is_reproducible() {
		let a = ParticleField::generate(10, &mut StdRng::seed_from_u64(42));
		let b = ParticleField::generate(10, &mut StdRng::seed_from_u64(42));
		assert_eq!(a.positions, b.positions);
		assert_eq!(a.velocities, b.velocities);
		assert_eq!(a.sizes, b.sizes);
	}
}

//! Backdrop simulation state.
//!
//! Created once when the component mounts, then mutated each frame by the
//! animation loop. Identity-defining state (the particle field, the ambient
//! rings) is sampled at construction and never regenerated; presentation
//! state (the uniforms) tracks the host's theme flag and pointer.

use rand::Rng;

use super::camera::DriftCamera;
use super::field::ParticleField;
use super::theme;

/// Draw-call inputs shared by every sprite in a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Uniforms {
	/// Simulation clock in seconds, derived from wall-clock time.
	pub time: f32,
	/// Host page's theme flag, reflected into color selection.
	pub dark: bool,
	/// Last known pointer position in normalized device coordinates.
	pub pointer: (f32, f32),
}

/// One translucent ring floating behind the particles for depth.
#[derive(Clone, Copy, Debug)]
pub struct Ring {
	pub position: [f32; 3],
	/// Tilt around the x axis, radians.
	pub rot_x: f32,
	/// Tilt around the y axis, radians.
	pub rot_y: f32,
}

/// Inner radius of an ambient ring in world units.
pub const RING_INNER: f32 = 0.5;
/// Outer radius of an ambient ring in world units.
pub const RING_OUTER: f32 = 1.0;
/// Number of ambient rings.
pub const RING_COUNT: usize = 3;

fn generate_rings<R: Rng>(rng: &mut R) -> Vec<Ring> {
	(0..RING_COUNT)
		.map(|_| Ring {
			position: [
				(rng.r#gen::<f32>() - 0.5) * 15.0,
				(rng.r#gen::<f32>() - 0.5) * 15.0,
				(rng.r#gen::<f32>() - 0.5) * 10.0 - 5.0,
			],
			rot_x: rng.r#gen::<f32>() * std::f32::consts::PI,
			rot_y: rng.r#gen::<f32>() * std::f32::consts::PI,
		})
		.collect()
}

/// Convert a wall-clock timestamp in milliseconds to simulation seconds.
pub fn sim_time(now_ms: f64) -> f32 {
	(now_ms * 0.001) as f32
}

/// Everything the animation loop reads and writes for one mounted backdrop.
pub struct BackdropState {
	pub field: ParticleField,
	pub camera: DriftCamera,
	pub uniforms: Uniforms,
	pub rings: Vec<Ring>,
	/// Ring color is fixed at mount; later theme toggles only retarget the
	/// particle uniforms.
	pub ring_color: theme::Color,
	pub ring_alpha: f32,
	/// Viewport size in CSS pixels.
	pub width: f64,
	pub height: f64,
}

impl BackdropState {
	/// Build the mount-time state from an unseeded random source.
	pub fn new(width: f64, height: f64, dark: bool) -> Self {
		Self::with_rng(width, height, dark, &mut rand::thread_rng())
	}

	/// Build the mount-time state from an injected random source.
	pub fn with_rng<R: Rng>(width: f64, height: f64, dark: bool, rng: &mut R) -> Self {
		let palette = theme::palette(dark);
		Self {
			field: ParticleField::generate(super::field::PARTICLE_COUNT, rng),
			camera: DriftCamera::new((width / height) as f32),
			uniforms: Uniforms {
				time: 0.0,
				dark,
				pointer: (0.0, 0.0),
			},
			rings: generate_rings(rng),
			ring_color: palette.ring,
			ring_alpha: palette.ring_alpha,
			width,
			height,
		}
	}

	/// Advance the simulation by one tick at the given clock reading.
	pub fn tick(&mut self, time: f32) {
		self.field.step();
		self.uniforms.time = time;
		self.camera.drift(time);
	}

	/// Reflect a changed theme flag into the shading uniforms.
	pub fn set_dark(&mut self, dark: bool) {
		self.uniforms.dark = dark;
	}

	/// Store the latest pointer position in NDC; last write wins.
	pub fn set_pointer(&mut self, x: f32, y: f32) {
		self.uniforms.pointer = (x, y);
	}

	/// React to a viewport resize.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.camera.set_aspect((width / height) as f32);
	}
}

//! Per-vertex and per-fragment shading math for the particle sprites.
//!
//! These are pure functions of (base position, elapsed time, pointer, theme),
//! kept separate from the host-side simulation step: the simulation owns the
//! wrap-cube positions, while everything here is evaluated fresh at draw time
//! and never written back to the buffers.

use super::theme::{self, Color};

/// Amplitude-bounded float/pointer displacement applied at draw time.
///
/// Layers three offsets on top of the simulated position: a sinusoidal
/// vertical float phased by x and time (amplitude 0.3), a cosinusoidal
/// horizontal float phased by y and time (amplitude 0.2), and an ambient pull
/// toward the pointer that weakens with distance (at most 0.05 units).
///
/// `position` is the pre-displacement buffer coordinate; all phase and
/// distance terms read it, not the displaced value.
pub fn displace(position: [f32; 3], time: f32, pointer: (f32, f32)) -> [f32; 3] {
	let [x, y, z] = position;
	let mut out = [x, y, z];

	out[1] += (time * 0.5 + x * 0.1).sin() * 0.3;
	out[0] += (time * 0.3 + y * 0.1).cos() * 0.2;

	let (mx, my) = (pointer.0 * 0.5, pointer.1 * 0.5);
	let dist = ((x - mx) * (x - mx) + (y - my) * (y - my)).sqrt();
	let pull = 0.1 / (dist + 1.0);
	out[0] += mx * pull;
	out[1] += my * pull;

	out
}

/// Theme-adaptive particle color, drifting with time and x position.
pub fn color_at(dark: bool, time: f32, x: f32) -> Color {
	let palette = theme::palette(dark);
	let t = (time * 0.2 + x * 0.1).sin() * 0.5 + 0.5;
	palette.from.mix(palette.to, t)
}

/// Flat per-particle alpha before the sprite falloff.
pub fn base_alpha(dark: bool) -> f32 {
	theme::palette(dark).alpha
}

/// Rendered sprite diameter in pixels: perspective size attenuation.
///
/// `view_z` is the distance along the view axis, positive in front of the
/// camera.
pub fn point_size(size: f32, view_z: f32) -> f32 {
	size * (300.0 / view_z)
}

/// Radial falloff inside a point sprite.
///
/// `dist` is the distance from the sprite center in normalized point-sprite
/// space, where the sprite spans `[-0.5, 0.5]`. Fragments beyond radius 0.5
/// are discarded.
pub fn sprite_alpha(dist: f32, base: f32) -> Option<f32> {
	if dist > 0.5 {
		return None;
	}
	Some((1.0 - dist * 2.0) * base)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn idle_pointer_adds_no_pull() {
		// With the pointer at rest the only displacement is the time float.
		let time = 1.7;
		let pos = [3.0, -2.0, 5.0];
		let displaced = displace(pos, time, (0.0, 0.0));
		let expected_y = pos[1] + (time * 0.5 + pos[0] * 0.1).sin() * 0.3;
		let expected_x = pos[0] + (time * 0.3 + pos[1] * 0.1).cos() * 0.2;
		assert!((displaced[0] - expected_x).abs() < 1e-6);
		assert!((displaced[1] - expected_y).abs() < 1e-6);
		assert_eq!(displaced[2], pos[2]);
	}

	#[test]
	fn float_amplitudes_are_bounded() {
		for i in 0..200 {
			let time = i as f32 * 0.37;
			let pos = [(i as f32 * 0.13) % 10.0 - 5.0, (i as f32 * 0.29) % 10.0 - 5.0, 0.0];
			let d = displace(pos, time, (0.0, 0.0));
			assert!((d[0] - pos[0]).abs() <= 0.2 + 1e-6);
			assert!((d[1] - pos[1]).abs() <= 0.3 + 1e-6);
		}
	}

	#[test]
	fn pointer_pull_weakens_with_distance() {
		let pointer = (1.0, 0.0);
		let near = displace([0.5, 0.0, 0.0], 0.0, pointer);
		let far = displace([9.0, 0.0, 0.0], 0.0, pointer);
		let near_pull = near[0] - 0.5 - (0.0f32).cos() * 0.2;
		let far_pull = far[0] - 9.0 - (0.0f32).cos() * 0.2;
		assert!(near_pull > far_pull);
		assert!(near_pull <= 0.05 + 1e-6);
	}

	#[test]
	fn color_drifts_between_palette_endpoints() {
		// sin(pi/2) = 1 puts the mix at the far endpoint.
		let time = std::f32::consts::FRAC_PI_2 / 0.2;
		let c = color_at(true, time, 0.0);
		assert!((c.r - 0.6).abs() < 1e-3);
		assert!((c.g - 0.3).abs() < 1e-3);
		assert!((c.b - 0.9).abs() < 1e-3);
	}

	#[test]
	fn theme_selects_alpha() {
		assert!((base_alpha(true) - 0.6).abs() < 1e-6);
		assert!((base_alpha(false) - 0.4).abs() < 1e-6);
	}

	#[test]
	fn size_attenuates_with_distance() {
		assert!((point_size(2.0, 10.0) - 60.0).abs() < 1e-4);
		assert!(point_size(2.0, 30.0) < point_size(2.0, 10.0));
	}

	#[test]
	fn sprite_edge_is_discarded() {
		assert!(sprite_alpha(0.6, 0.6).is_none());
		assert_eq!(sprite_alpha(0.0, 0.6), Some(0.6));
		let edge = sprite_alpha(0.5, 0.6).unwrap();
		assert!(edge.abs() < 1e-6);
	}
}

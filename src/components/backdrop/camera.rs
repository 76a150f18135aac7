//! Drifting perspective camera.
//!
//! Matches the scene setup of the backdrop: vertical FOV 75 degrees, near
//! plane 0.1, far plane 1000, parked at z = 10 just outside the particle
//! cube. Each tick the camera slides on a slow Lissajous path and re-aims at
//! the origin, which keeps the whole field in frame.

/// Vertical field of view in degrees.
pub const FOV_Y_DEG: f32 = 75.0;
/// Near clip plane.
pub const NEAR: f32 = 0.1;
/// Far clip plane.
pub const FAR: f32 = 1000.0;
/// Resting distance from the origin along +z.
pub const CAMERA_Z: f32 = 10.0;

/// A world-space point carried into screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
	/// Horizontal canvas coordinate in CSS pixels.
	pub x: f64,
	/// Vertical canvas coordinate in CSS pixels.
	pub y: f64,
	/// Distance along the view axis; positive in front of the camera.
	pub view_z: f32,
}

/// Perspective camera that drifts with the simulation clock.
pub struct DriftCamera {
	/// Width / height of the viewport.
	pub aspect: f32,
	/// Eye position; z stays fixed, x/y follow the drift path.
	pub position: [f32; 3],
}

impl DriftCamera {
	pub fn new(aspect: f32) -> Self {
		Self {
			aspect,
			position: [0.0, 0.0, CAMERA_Z],
		}
	}

	/// Update the aspect ratio after a viewport resize.
	pub fn set_aspect(&mut self, aspect: f32) {
		self.aspect = aspect;
	}

	/// Slide the eye along the Lissajous drift path for the given time.
	pub fn drift(&mut self, time: f32) {
		self.position[0] = (time * 0.1).sin() * 0.5;
		self.position[1] = (time * 0.15).cos() * 0.3;
	}

	/// Orthonormal look-at basis aimed at the origin: (right, up, forward).
	fn basis(&self) -> ([f32; 3], [f32; 3], [f32; 3]) {
		let [ex, ey, ez] = self.position;
		let len = (ex * ex + ey * ey + ez * ez).sqrt().max(1e-6);
		let forward = [-ex / len, -ey / len, -ez / len];

		// right = forward x world-up, renormalized
		let right = [-forward[2], 0.0, forward[0]];
		let rlen = (right[0] * right[0] + right[2] * right[2]).sqrt().max(1e-6);
		let right = [right[0] / rlen, 0.0, right[2] / rlen];

		let up = [
			right[1] * forward[2] - right[2] * forward[1],
			right[2] * forward[0] - right[0] * forward[2],
			right[0] * forward[1] - right[1] * forward[0],
		];
		(right, up, forward)
	}

	/// Project a world-space point onto a canvas of the given CSS-pixel size.
	///
	/// Returns `None` for points outside the near/far range.
	pub fn project(&self, point: [f32; 3], width: f64, height: f64) -> Option<Projected> {
		let (right, up, forward) = self.basis();
		let d = [
			point[0] - self.position[0],
			point[1] - self.position[1],
			point[2] - self.position[2],
		];
		let view_x = d[0] * right[0] + d[1] * right[1] + d[2] * right[2];
		let view_y = d[0] * up[0] + d[1] * up[1] + d[2] * up[2];
		let view_z = d[0] * forward[0] + d[1] * forward[1] + d[2] * forward[2];

		if !(NEAR..=FAR).contains(&view_z) {
			return None;
		}

		let f = 1.0 / (FOV_Y_DEG.to_radians() * 0.5).tan();
		let ndc_x = view_x * f / self.aspect / view_z;
		let ndc_y = view_y * f / view_z;

		Some(Projected {
			x: (f64::from(ndc_x) + 1.0) * 0.5 * width,
			y: (1.0 - f64::from(ndc_y)) * 0.5 * height,
			view_z,
		})
	}
}

/// Screen pixels per world unit at the given view depth.
///
/// Used for elements sized in world units (the ambient rings); point sprites
/// carry their own pixel sizing.
pub fn pixels_per_unit(height: f64, view_z: f32) -> f64 {
	let f = 1.0 / (FOV_Y_DEG.to_radians() * 0.5).tan();
	f64::from(f) * height * 0.5 / f64::from(view_z)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn origin_projects_to_center() {
		let camera = DriftCamera::new(16.0 / 9.0);
		let p = camera.project([0.0, 0.0, 0.0], 1920.0, 1080.0).unwrap();
		assert!((p.x - 960.0).abs() < 1e-3);
		assert!((p.y - 540.0).abs() < 1e-3);
		assert!((p.view_z - CAMERA_Z).abs() < 1e-5);
	}

	#[test]
	fn resize_updates_aspect() {
		let mut camera = DriftCamera::new(1920.0 / 1080.0);
		camera.set_aspect(800.0 / 600.0);
		assert!((camera.aspect - 800.0 / 600.0).abs() < 1e-6);
	}

	#[test]
	fn drift_follows_lissajous_path() {
		let mut camera = DriftCamera::new(1.0);
		camera.drift(3.0);
		assert!((camera.position[0] - (0.3f32).sin() * 0.5).abs() < 1e-6);
		assert!((camera.position[1] - (0.45f32).cos() * 0.3).abs() < 1e-6);
		assert!((camera.position[2] - CAMERA_Z).abs() < 1e-6);
	}

	#[test]
	fn points_behind_camera_are_culled() {
		let camera = DriftCamera::new(1.0);
		assert!(camera.project([0.0, 0.0, 20.0], 800.0, 600.0).is_none());
	}

	#[test]
	fn points_beyond_far_plane_are_culled() {
		let camera = DriftCamera::new(1.0);
		assert!(camera.project([0.0, 0.0, -1500.0], 800.0, 600.0).is_none());
	}

	#[test]
	fn rightward_point_lands_right_of_center() {
		let camera = DriftCamera::new(1.0);
		let p = camera.project([2.0, 0.0, 0.0], 800.0, 600.0).unwrap();
		assert!(p.x > 400.0);
		assert!((p.y - 300.0).abs() < 1e-3);
	}

	#[test]
	fn upward_point_lands_above_center() {
		let camera = DriftCamera::new(1.0);
		let p = camera.project([0.0, 2.0, 0.0], 800.0, 600.0).unwrap();
		assert!(p.y < 300.0);
	}

	#[test]
	fn world_units_shrink_with_depth() {
		let near = pixels_per_unit(1080.0, 5.0);
		let far = pixels_per_unit(1080.0, 15.0);
		assert!(near > far);
		assert!((near / far - 3.0).abs() < 1e-6);
	}
}

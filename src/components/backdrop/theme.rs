//! Visual theming for the particle backdrop.
//!
//! Colors live in normalized float space because they feed the shading math
//! directly; conversion to CSS strings happens only at draw time.

/// RGB color with normalized channels in `[0.0, 1.0]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: f32,
	pub g: f32,
	pub b: f32,
}

impl Color {
	pub const fn new(r: f32, g: f32, b: f32) -> Self {
		Self { r, g, b }
	}

	/// Linear interpolation between two colors.
	pub fn mix(self, other: Color, t: f32) -> Self {
		let t = t.clamp(0.0, 1.0);
		Self {
			r: self.r + (other.r - self.r) * t,
			g: self.g + (other.g - self.g) * t,
			b: self.b + (other.b - self.b) * t,
		}
	}

	pub fn to_css_rgba(self, alpha: f32) -> String {
		format!(
			"rgba({}, {}, {}, {})",
			(self.r * 255.0).round() as u8,
			(self.g * 255.0).round() as u8,
			(self.b * 255.0).round() as u8,
			alpha
		)
	}
}

/// Color endpoints and base opacity for the particle shading of one theme.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
	/// Hue at the low end of the color-drift sinusoid.
	pub from: Color,
	/// Hue at the high end of the color-drift sinusoid.
	pub to: Color,
	/// Flat per-particle alpha before the sprite falloff.
	pub alpha: f32,
	/// Color of the ambient depth rings.
	pub ring: Color,
	/// Opacity of the ambient depth rings.
	pub ring_alpha: f32,
}

/// Rose-to-purple pair used over dark page backgrounds.
pub const DARK: Palette = Palette {
	from: Color::new(0.9, 0.4, 0.6),
	to: Color::new(0.6, 0.3, 0.9),
	alpha: 0.6,
	ring: Color::new(0.290, 0.082, 0.290), // #4a154a
	ring_alpha: 0.1,
};

/// Pastel pair used over light page backgrounds.
pub const LIGHT: Palette = Palette {
	from: Color::new(0.95, 0.7, 0.8),
	to: Color::new(0.9, 0.6, 0.95),
	alpha: 0.4,
	ring: Color::new(0.988, 0.906, 0.953), // #fce7f3
	ring_alpha: 0.05,
};

/// Select the palette for the current theme flag.
pub fn palette(dark: bool) -> &'static Palette {
	if dark { &DARK } else { &LIGHT }
}

#[cfg(test)]
mod tests {
	use super::*;

	fn approx(a: Color, b: Color) -> bool {
		(a.r - b.r).abs() < 1e-6 && (a.g - b.g).abs() < 1e-6 && (a.b - b.b).abs() < 1e-6
	}

	#[test]
	fn mix_endpoints() {
		let a = Color::new(0.0, 0.2, 1.0);
		let b = Color::new(1.0, 0.8, 0.0);
		assert_eq!(a.mix(b, 0.0), a);
		assert!(approx(a.mix(b, 1.0), b));
		assert!(approx(a.mix(b, 0.5), Color::new(0.5, 0.5, 0.5)));
	}

	#[test]
	fn mix_clamps_t() {
		let a = Color::new(0.1, 0.1, 0.1);
		let b = Color::new(0.9, 0.9, 0.9);
		assert_eq!(a.mix(b, -2.0), a);
		assert!(approx(a.mix(b, 3.0), b));
	}

	#[test]
	fn css_formatting() {
		let c = Color::new(1.0, 0.0, 0.5);
		assert_eq!(c.to_css_rgba(0.6), "rgba(255, 0, 128, 0.6)");
	}

	#[test]
	fn palette_selection() {
		assert!((palette(true).alpha - 0.6).abs() < 1e-6);
		assert!((palette(false).alpha - 0.4).abs() < 1e-6);
	}
}

//! Canvas rendering for the particle backdrop.
//!
//! Draws in two passes: the ambient depth rings with normal compositing,
//! then the particle sprites with additive ("lighter") compositing so
//! overlapping dots bloom instead of occluding. The canvas is cleared, never
//! filled, so the page background shows through.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::camera;
use super::shading;
use super::state::{BackdropState, RING_INNER, RING_OUTER};

/// Sprites smaller than this many CSS pixels across are skipped.
const MIN_SPRITE_PX: f32 = 0.5;

/// Renders one frame of the backdrop.
pub fn render(state: &BackdropState, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);

	ctx.save();
	draw_rings(state, ctx);
	let _ = ctx.set_global_composite_operation("lighter");
	draw_particles(state, ctx);
	ctx.restore();
}

fn draw_rings(state: &BackdropState, ctx: &CanvasRenderingContext2d) {
	let css = state.ring_color.to_css_rgba(state.ring_alpha);

	for ring in &state.rings {
		let Some(p) = state
			.camera
			.project(ring.position, state.width, state.height)
		else {
			continue;
		};

		let ppu = camera::pixels_per_unit(state.height, p.view_z);
		let radius = f64::from((RING_INNER + RING_OUTER) * 0.5) * ppu;
		let width = f64::from(RING_OUTER - RING_INNER) * ppu;
		if radius < 1.0 {
			continue;
		}

		// Tilt renders as foreshortening of the minor axis.
		let minor = radius * f64::from(ring.rot_x.cos().abs().max(0.15));

		ctx.set_stroke_style_str(&css);
		ctx.set_line_width(width);
		ctx.begin_path();
		let _ = ctx.ellipse(p.x, p.y, radius, minor, f64::from(ring.rot_y), 0.0, PI * 2.0);
		ctx.stroke();
	}
}

fn draw_particles(state: &BackdropState, ctx: &CanvasRenderingContext2d) {
	let u = state.uniforms;
	let alpha = shading::base_alpha(u.dark);

	for i in 0..state.field.len() {
		let i3 = i * 3;
		let base = [
			state.field.positions[i3],
			state.field.positions[i3 + 1],
			state.field.positions[i3 + 2],
		];

		let displaced = shading::displace(base, u.time, u.pointer);
		let Some(p) = state.camera.project(displaced, state.width, state.height) else {
			continue;
		};

		let size = shading::point_size(state.field.sizes[i], p.view_z);
		if size < MIN_SPRITE_PX {
			continue;
		}
		let radius = f64::from(size) * 0.5;

		let color = shading::color_at(u.dark, u.time, base[0]);

		// The sprite's radial falloff (1 - 2*dist) * alpha is linear from
		// center to rim, which a two-stop radial gradient reproduces exactly.
		let gradient = ctx
			.create_radial_gradient(p.x, p.y, 0.0, p.x, p.y, radius)
			.unwrap();
		let _ = gradient.add_color_stop(0.0, &color.to_css_rgba(alpha));
		let _ = gradient.add_color_stop(1.0, &color.to_css_rgba(0.0));

		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, radius, 0.0, PI * 2.0);
		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
		ctx.fill();
	}
}

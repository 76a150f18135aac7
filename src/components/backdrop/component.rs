//! Leptos component wrapping the backdrop canvas.
//!
//! The component mounts a full-viewport, click-through canvas behind the page
//! content and wires up the animation loop plus global pointer/resize
//! listeners. The host supplies one reactive input, the dark-theme flag;
//! everything else is internal.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::lifecycle::{FrameLoop, WindowListener};
use super::render;
use super::state::{self, BackdropState};

/// Cap on the device-pixel-ratio applied to the canvas backing store.
const MAX_DPR: f64 = 2.0;

/// Bundles simulation state with the drawing context for one mount.
struct BackdropContext {
	state: BackdropState,
	ctx: CanvasRenderingContext2d,
}

fn viewport_size(window: &Window) -> (f64, f64) {
	(
		window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
		window
			.inner_height()
			.ok()
			.and_then(|v| v.as_f64())
			.unwrap_or(0.0),
	)
}

/// Size the backing store to the viewport at the capped pixel ratio and
/// rescale the context so draw commands stay in CSS pixels.
///
/// Setting the canvas width resets the context transform, so the scale is
/// reapplied here after every resize.
fn fit_surface(canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d, window: &Window) {
	let (w, h) = viewport_size(window);
	let dpr = window.device_pixel_ratio().clamp(1.0, MAX_DPR);
	canvas.set_width((w * dpr) as u32);
	canvas.set_height((h * dpr) as u32);
	let _ = ctx.scale(dpr, dpr);
}

/// Renders the animated particle backdrop.
///
/// The canvas is positioned behind foreground content and never intercepts
/// pointer input; pointer tracking is global. The particle field is sampled
/// once per mount and survives theme toggles, which only retarget the shading
/// uniforms.
#[component]
pub fn AmbientBackdrop(#[prop(into)] dark: Signal<bool>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<BackdropContext>>> = Rc::new(RefCell::new(None));
	let frame_loop = Rc::new(FrameLoop::new());
	let listeners: Rc<RefCell<Vec<WindowListener>>> = Rc::new(RefCell::new(Vec::new()));

	let (context_init, frame_loop_init, listeners_init) =
		(context.clone(), frame_loop.clone(), listeners.clone());
	Effect::new(move |_| {
		// Bootstrap runs once, when the mount target becomes available; if it
		// never does, the page simply renders without the backdrop.
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if context_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let (w, h) = viewport_size(&window);
		if w <= 0.0 || h <= 0.0 {
			return;
		}

		let Ok(Some(ctx_obj)) = canvas.get_context("2d") else {
			return;
		};
		let Ok(ctx) = ctx_obj.dyn_into::<CanvasRenderingContext2d>() else {
			return;
		};
		fit_surface(&canvas, &ctx, &window);

		// Untracked read: the field must not regenerate when the theme flips.
		*context_init.borrow_mut() = Some(BackdropContext {
			state: BackdropState::new(w, h, dark.get_untracked()),
			ctx,
		});
		info!("backdrop: mounted at {w:.0}x{h:.0}");

		let context_pointer = context_init.clone();
		listeners_init
			.borrow_mut()
			.push(WindowListener::attach("mousemove", move |ev| {
				let Some(ev) = ev.dyn_ref::<MouseEvent>() else {
					return;
				};
				let Some(window) = web_sys::window() else {
					return;
				};
				let (w, h) = viewport_size(&window);
				if w <= 0.0 || h <= 0.0 {
					return;
				}
				let x = (f64::from(ev.client_x()) / w) * 2.0 - 1.0;
				let y = -(f64::from(ev.client_y()) / h) * 2.0 + 1.0;
				if let Some(ref mut c) = *context_pointer.borrow_mut() {
					c.state.set_pointer(x as f32, y as f32);
				}
			}));

		let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
		listeners_init
			.borrow_mut()
			.push(WindowListener::attach("resize", move |_| {
				let Some(window) = web_sys::window() else {
					return;
				};
				let (w, h) = viewport_size(&window);
				if w <= 0.0 || h <= 0.0 {
					return;
				}
				if let Some(ref mut c) = *context_resize.borrow_mut() {
					fit_surface(&canvas_resize, &c.ctx, &window);
					c.state.resize(w, h);
					debug!("backdrop: resized to {w:.0}x{h:.0}");
				}
			}));

		let context_anim = context_init.clone();
		frame_loop_init.start(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				c.state.tick(state::sim_time(js_sys::Date::now()));
				render::render(&c.state, &c.ctx);
			}
		});
	});

	// Theme reactivity: only the shading uniform changes, never the field.
	let context_theme = context.clone();
	Effect::new(move |_| {
		let dark = dark.get();
		if let Some(ref mut c) = *context_theme.borrow_mut() {
			c.state.set_dark(dark);
		}
	});

	let cleanup = send_wrapper::SendWrapper::new((frame_loop, listeners, context));
	on_cleanup(move || {
		let (frame_loop, listeners, context) = cleanup.take();
		frame_loop.cancel();
		for listener in listeners.borrow_mut().iter_mut() {
			listener.detach();
		}
		listeners.borrow_mut().clear();
		context.borrow_mut().take();
		debug!("backdrop: torn down");
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="ambient-backdrop-canvas"
			style="position: fixed; inset: 0; width: 100%; height: 100%; display: block; pointer-events: none; z-index: 1;"
		/>
	}
}

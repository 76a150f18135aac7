//! ambient-backdrop: animated particle backdrop for creator rate-card pages.
//!
//! This crate provides a WASM-based decorative background component: a
//! drifting 3D particle field rendered on a transparent full-viewport canvas,
//! reacting to the host page's dark-mode flag and ambient pointer motion.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

// Pulled in for the wasm `rand` backend; not referenced directly.
use getrandom as _;

pub mod components;

pub use components::backdrop::{AmbientBackdrop, ParticleField};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("ambient-backdrop: logging initialized");
}

/// Whether the visitor's browser prefers a dark color scheme.
fn prefers_dark() -> bool {
	web_sys::window()
		.and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
		.map(|m| m.matches())
		.unwrap_or(false)
}

/// Demo host page.
///
/// Owns the dark-mode flag (seeded from the browser preference) and renders
/// the backdrop behind a minimal overlay with a theme toggle. This stands in
/// for the rate-card page content, which only ever hands the backdrop a
/// boolean.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let dark = RwSignal::new(prefers_dark());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme=move || if dark.get() { "dark" } else { "light" } />
		<Title text="Creator Rate Card" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<AmbientBackdrop dark=dark />
		<div class="page-overlay" style="position: relative; z-index: 2;">
			<button on:click=move |_| dark.update(|d| *d = !*d)>
				{move || if dark.get() { "Switch to light" } else { "Switch to dark" }}
			</button>
		</div>
	}
}

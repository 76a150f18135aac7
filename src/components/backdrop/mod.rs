//! Ambient particle backdrop component.
//!
//! Renders a decorative 3D particle field on a full-viewport canvas with:
//! - A 150-particle field sampled once per mount, drifting inside a wrap cube
//! - Theme-reactive rose/purple shading driven by the host's dark-mode flag
//! - Ambient pointer attraction and a slow Lissajous camera drift
//! - Guaranteed teardown of the frame loop and window listeners on unmount
//!
//! # Example
//!
//! ```ignore
//! use ambient_backdrop::AmbientBackdrop;
//!
//! let dark = RwSignal::new(true);
//!
//! view! { <AmbientBackdrop dark=dark /> }
//! ```

mod camera;
mod component;
mod field;
mod lifecycle;
mod render;
mod shading;
mod state;
pub mod theme;

pub use component::AmbientBackdrop;
pub use field::{BOUND, PARTICLE_COUNT, ParticleField};

#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Scroll choreography for the floors portal: parallax, floor shadows, login
//! covers, hinged divider panels and the elevator navigator.
//!
//! Everything outside `wasm` is pure geometry and state and builds on any
//! target; the `wasm` module binds it to the live DOM.

pub mod clock;
pub mod config;
pub mod cover;
pub mod elevator;
pub mod error;
pub mod floors;
pub mod layout;
pub mod parallax;
pub mod profile;
pub mod scene;
pub mod scroll;
pub mod tilt;

pub use config::SceneConfig;
pub use error::{ConfigError, ProfileError};
pub use layout::{LayoutSource, Rect, SimulatedLayout, Span, Viewport};
pub use scene::{AnimationContext, Divider, Floor, Frame, Scene};

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm;

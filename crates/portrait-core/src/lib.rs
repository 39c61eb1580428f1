//! Platform-independent core of the holographic portrait tiles.
//!
//! Maps pointer positions and device orientation readings to a small
//! [`TransformState`], keeps per-tile state machines, and describes each
//! portrait variant as plain style data. The web front-end owns everything
//! that touches the DOM.

pub mod carousel;
pub mod config;
pub mod constants;
pub mod device;
pub mod error;
pub mod input;
pub mod math;
pub mod state;
pub mod style;
pub mod tile;
pub mod transform;

pub use carousel::*;
pub use config::*;
pub use device::*;
pub use error::*;
pub use input::*;
pub use state::*;
pub use style::{describe, PortraitLayers, Spring, Style, StyleHooks, Variant};
pub use tile::*;
pub use transform::*;

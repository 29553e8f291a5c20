//! An interactive unit circle.
//!
//! The diagram shows a grid, the unit circle and the axes. As the pointer moves, it adds the
//! radius through the pointer, the sine, cosine and tangent constructions with their values,
//! and the angle they belong to.

pub mod config;
pub mod diagram;
mod error;
#[cfg(not(target_arch = "wasm32"))]
pub mod export;
pub mod geometry;
pub mod trig;
#[cfg(target_arch = "wasm32")]
mod web;

pub use crate::error::*;
pub use unitcircle_renderer as renderer;

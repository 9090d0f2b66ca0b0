//! # floem-ruler
//!
//! A draggable ruler/tube picker widget for [Floem](https://github.com/lapce/floem).
//!
//! Renders a row of evenly spaced vertical ticks radiating from the view
//! center, fading with distance, with an optional center dot marker. Dragging
//! horizontally slides the row and reports a normalized progress value
//! (roughly `-tick_count..=tick_count`) through an `RwSignal`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_ruler::ruler_picker;
//!
//! let progress = RwSignal::new(0.0);
//! // Use `ruler_picker(progress)` in your Floem view tree.
//! ```
//!
//! The geometry and drag-to-progress math live in [`RulerState`] and
//! [`geometry`], independent of any view plumbing, so hosts with their own
//! rendering can drive them directly.

mod config;
mod constants;
mod fade;
pub mod geometry;
mod model;
mod ruler;

pub use config::RulerConfig;
pub use fade::FadeStyle;
pub use model::RulerState;
pub use ruler::{ruler_picker, ruler_picker_with, RulerPicker};

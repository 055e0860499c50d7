// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Scroll-driven 3D scene animation engine.
//!
//! Scrollscape animates a vertical stack of rotating objects, one per
//! scroll section, with a camera that travels with page scroll and
//! parallaxes with the cursor. Rendering is left to a [`render::Renderer`]
//! implementation (a three.js scene in the browser, a recorder in tests).
//!
//! # Key entry points
//!
//! - [`engine::ScrollEngine`] - event handling and the per-frame update
//! - [`engine::FrameLoop`] - request-next-frame scheduling with `stop()`
//! - [`scene::SceneBuilder`] - builds the object stack and particle field
//! - [`options::Options`] - runtime configuration with TOML presets
//! - [`animation`] - eased section transitions
//!
//! # Frame order
//!
//! Events mutate the [`engine::AnimationContext`] synchronously. Each
//! frame then reads the clock delta, spins every object, advances running
//! transitions, moves the camera to the scroll position, damps the rig
//! toward the pointer parallax target, and issues exactly one render.

pub mod animation;
pub mod camera;
pub mod clock;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod render;
pub mod scene;
pub mod section;
pub mod viewport;
#[cfg(feature = "web")]
pub mod web;

pub use engine::{AnimationContext, FrameLoop, ScrollEngine};
pub use error::ScrollscapeError;
pub use input::InputEvent;

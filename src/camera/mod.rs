//! Camera system for the scroll scene.
//!
//! A perspective camera parented to a rig: the rig carries pointer
//! parallax, the camera carries scroll travel.

/// Perspective camera and projection matrices.
pub mod core;
/// Parent rig carrying parallax.
pub mod rig;

pub use self::core::Camera;
pub use rig::CameraRig;

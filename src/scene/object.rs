use std::f32::consts::TAU;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Geometry a host should build for an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Torus (radius 1, tube 0.5).
    Torus,
    /// Cone (radius 1, height 1).
    Cone,
    /// Torus knot (radius 0.8, tube 0.35).
    TorusKnot,
    /// Unit box.
    Box,
}

impl ShapeKind {
    /// Shapes in section order; the stack repeats this cycle.
    pub const CYCLE: [ShapeKind; 4] = [
        ShapeKind::Torus,
        ShapeKind::Cone,
        ShapeKind::TorusKnot,
        ShapeKind::Box,
    ];

    /// Stable name used in snapshots and logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Torus => "torus",
            Self::Cone => "cone",
            Self::TorusKnot => "torus_knot",
            Self::Box => "box",
        }
    }
}

/// One object in the section stack.
///
/// Rotation is kept as two contributions that are summed on read: the
/// continuous spin accumulated every frame, and the transition offset
/// (settled offsets of finished transitions plus the in-flight part of
/// running ones). Both stored angles are kept in `[0, 2π)` so a long-lived
/// scene keeps enough `f32` precision for per-frame increments.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    kind: ShapeKind,
    position: Vec3,
    spin: Vec3,
    settled_offset: Vec3,
    in_flight_offset: Vec3,
}

impl SceneObject {
    /// Unrotated object at `position`.
    #[must_use]
    pub fn new(kind: ShapeKind, position: Vec3) -> Self {
        Self {
            kind,
            position,
            spin: Vec3::ZERO,
            settled_offset: Vec3::ZERO,
            in_flight_offset: Vec3::ZERO,
        }
    }

    /// Geometry kind.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Position, fixed at construction.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Continuous spin contribution.
    #[must_use]
    pub fn spin(&self) -> Vec3 {
        self.spin
    }

    /// Add `amount` radians of spin around X and Y.
    pub fn add_spin(&mut self, amount: f32) {
        self.spin.x = (self.spin.x + amount).rem_euclid(TAU);
        self.spin.y = (self.spin.y + amount).rem_euclid(TAU);
    }

    /// Transition contribution: settled plus in-flight offsets.
    #[must_use]
    pub fn transition_offset(&self) -> Vec3 {
        self.settled_offset + self.in_flight_offset
    }

    /// Effective rotation in radians (XYZ Euler angles).
    #[must_use]
    pub fn rotation(&self) -> Vec3 {
        self.spin + self.transition_offset()
    }

    pub(crate) fn in_flight_offset(&self) -> Vec3 {
        self.in_flight_offset
    }

    pub(crate) fn set_in_flight_offset(&mut self, offset: Vec3) {
        self.in_flight_offset = offset;
    }

    pub(crate) fn settle_offset(&mut self, offset: Vec3) {
        self.settled_offset = (self.settled_offset + offset).map(|v| v.rem_euclid(TAU));
    }
}

use crate::{Scalar, Vec3};
use alloc::string::String;

/// Classification of a simulated celestial object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BodyKind {
    Star,
    Planet,
    Moon,
    Asteroid,
}

impl BodyKind {
    #[inline]
    pub fn is_star(self) -> bool {
        self == BodyKind::Star
    }
}

/// One simulated celestial object: static attributes plus the dynamic
/// state an external integrator advances each step.
///
/// Pure data. The record owns its fields by value and has no behavior of
/// its own; creation, stepping, and destruction belong to the surrounding
/// simulation. No synchronization is provided for concurrent mutation of a
/// single record.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CelestialBody<S> {
    // Static attributes
    pub kind: BodyKind,
    /// Display name; not required to be unique.
    pub name: String,
    pub radius: S,
    pub mass: S,
    /// Rotation period.
    pub period: S,
    /// Rotation axis; not required to be normalized.
    pub axis: Vec3<S>,
    /// Surface temperature. Only meaningful when `kind` is
    /// [`BodyKind::Star`]; ignored for other kinds.
    pub temp: S,

    // Dynamic attributes, advanced by the external integrator
    pub position: Vec3<S>,
    pub velocity: Vec3<S>,
    /// Position at the previous step (Verlet-style integrators).
    pub prev_position: Vec3<S>,
    /// Force accumulated over the current step.
    pub force: Vec3<S>,
}

impl<S: Scalar> CelestialBody<S> {
    /// A body of the given kind with every numeric field zeroed, for a
    /// loader to fill in.
    pub fn new(kind: BodyKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            radius: S::ZERO,
            mass: S::ZERO,
            period: S::ZERO,
            axis: Vec3::zero(),
            temp: S::ZERO,
            position: Vec3::zero(),
            velocity: Vec3::zero(),
            prev_position: Vec3::zero(),
            force: Vec3::zero(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_zeroes_state() {
        let b = CelestialBody::<f64>::new(BodyKind::Planet, "Earth");
        assert_eq!(b.kind, BodyKind::Planet);
        assert_eq!(b.name, "Earth");
        assert_eq!(b.mass, 0.0);
        assert_eq!(b.position, Vec3::zero());
        assert_eq!(b.force, Vec3::zero());
    }

    #[test]
    fn kind_is_closed_enumeration() {
        assert!(BodyKind::Star.is_star());
        assert!(!BodyKind::Asteroid.is_star());
        assert_ne!(BodyKind::Planet, BodyKind::Moon);
    }

    #[test]
    fn driver_style_mutation() {
        // The shape of one integrator step: the record just stores values.
        let mut b = CelestialBody::<f64>::new(BodyKind::Asteroid, "Ceres");
        b.mass = 9.38e20;
        b.velocity = Vec3::new(0.0, 17.9e3, 0.0);
        b.force = Vec3::new(-1.0e15, 0.0, 0.0);

        let dt = 60.0;
        b.prev_position = b.position;
        b.velocity += b.force / b.mass * dt;
        b.position += b.velocity * dt;
        b.force = Vec3::zero();

        assert_eq!(b.prev_position, Vec3::zero());
        assert!(b.position.is_finite());
        assert_eq!(b.force, Vec3::zero());
    }

    #[test]
    fn names_need_not_be_unique() {
        let a = CelestialBody::<f64>::new(BodyKind::Moon, "Moon");
        let b = CelestialBody::<f64>::new(BodyKind::Moon, "Moon");
        assert_eq!(a, b);
    }
}

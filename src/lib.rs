//! orrery — 3D algebra kernel and body types for N-body simulation
//!
//! The numeric substrate of a gravitational N-body simulator: exact,
//! reusable [`Vec3`]/[`Mat3`] value types with operator arithmetic, and the
//! passive [`CelestialBody`] record a simulation driver populates and
//! steps. The kernel is purely functional over `Copy` values — no shared
//! state, no blocking — so it is safe to call from any thread.
//!
//! # Design principles
//! - Generic over `Scalar` type (f32, f64) — simulations run f64, renderers f32
//! - `#[repr(C)]` value types, operands taken by value
//! - IEEE-754 passthrough: division by zero and singular inverses produce
//!   Infinity/NaN rather than panicking; `try_*` variants give the checked
//!   boundary (see [`Mat3::try_inverse`])
//! - The library never terminates or logs; errors surface as values

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod body;
mod mat3;
mod scalar;
mod vec3;

pub use body::{BodyKind, CelestialBody};
pub use mat3::Mat3;
pub use scalar::Scalar;
pub use vec3::Vec3;

/// Cross-product matrix [v]× such that [v]× w = v × w
pub fn skew<S: Scalar>(v: &Vec3<S>) -> Mat3<S> {
    Mat3::new(
        S::ZERO, -v.z,    v.y,
        v.z,     S::ZERO, -v.x,
        -v.y,    v.x,     S::ZERO,
    )
}

/// Newtonian gravitational constant, m^3 kg^-1 s^-2 (CODATA 2018).
pub const G: f64 = 6.674_30e-11;

// Bytemuck impls for concrete f32/f64 types (generic structs can't derive Pod)
#[cfg(feature = "bytemuck")]
mod bytemuck_impls {
    use super::*;

    macro_rules! impl_pod {
        ($t:ty) => {
            // SAFETY: All fields are the same float type, #[repr(C)], no padding
            unsafe impl bytemuck::Zeroable for $t {}
            unsafe impl bytemuck::Pod for $t {}
        };
    }

    impl_pod!(Vec3<f32>);
    impl_pod!(Vec3<f64>);
    impl_pod!(Mat3<f32>);
    impl_pod!(Mat3<f64>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skew_cross_product() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let w = Vec3::new(4.0, 5.0, 6.0);
        let result = skew(&v) * w;
        let expected = v.cross(w);
        assert!((result - expected).norm() < 1e-10);
    }

    #[test]
    fn skew_antisymmetric() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let s = skew(&v);
        let sum = s + s.transpose();
        assert_eq!(sum, Mat3::zero());
    }

    #[test]
    fn skew_is_singular() {
        // [v]× always has rank 2, so no inverse exists.
        let s = skew(&Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(s.determinant(), 0.0);
        assert!(s.try_inverse().is_none());
    }
}

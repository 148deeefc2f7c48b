// MIT/Apache2 License

#![allow(clippy::excessive_precision, clippy::unreadable_literal)]

use core::fmt;
use num_traits::Float;

mod private {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// A floating point number that can be used as the magnitude of an [`Angle`](crate::Angle).
///
/// This trait is sealed and is only implemented for `f32` and `f64`, so an angle backed by an integer is
/// rejected at compile time. The conversion factors are fixed constants rather than being derived from
/// `PI` at runtime.
///
/// ```compile_fail
/// use chalkboard_angle::Angle;
///
/// let _: Option<Angle<i32>> = None;
/// ```
pub trait Scalar:
    Float + Default + fmt::Debug + fmt::Display + Send + Sync + 'static + private::Sealed
{
    /// The number of radians in one degree.
    const RADIANS_PER_DEGREE: Self;
    /// The number of degrees in one radian.
    const DEGREES_PER_RADIAN: Self;

    /// A quarter turn, or 90 degrees, in radians.
    const QUARTER_TURN: Self;
    /// A half turn, or 180 degrees, in radians.
    const HALF_TURN: Self;
    /// Three quarters of a turn, or 270 degrees, in radians.
    const THREE_QUARTERS_TURN: Self;
    /// A full turn, or 360 degrees, in radians.
    const FULL_TURN: Self;
}

macro_rules! impl_scalar {
    ($($ty: ty),*) => {
        $(
            impl Scalar for $ty {
                const RADIANS_PER_DEGREE: $ty = 0.01745329251994329576923690768489;
                const DEGREES_PER_RADIAN: $ty = 57.295779513082320876798154814105;

                // computed the same way `from_degrees` computes them, so the two always agree exactly
                const QUARTER_TURN: $ty = 90.0 * Self::RADIANS_PER_DEGREE;
                const HALF_TURN: $ty = 180.0 * Self::RADIANS_PER_DEGREE;
                const THREE_QUARTERS_TURN: $ty = 270.0 * Self::RADIANS_PER_DEGREE;
                const FULL_TURN: $ty = 360.0 * Self::RADIANS_PER_DEGREE;
            }
        )*
    };
}

impl_scalar! { f32, f64 }

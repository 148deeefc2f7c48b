// MIT/Apache2 License

use crate::{DefaultP, Precision, Scalar};
use core::{fmt, marker::PhantomData};
use num_traits::AsPrimitive;

/// An angle, or a measure of the space between two intersecting lines.
///
/// The magnitude is always stored in radians, but there is no way to read or write it without saying
/// which unit you mean: angles are created through [`Angle::from_radians`] or [`Angle::from_degrees`], and
/// are read through [`Angle::radians`] or [`Angle::degrees`]. There is intentionally no conversion between
/// an `Angle` and a bare number.
///
/// `T` is the scalar the magnitude is stored as, and must be `f32` or `f64`. `P` is a storage qualifier
/// that is carried along but never inspected.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Angle<T: Scalar, P: Precision = DefaultP> {
    radians: T,
    precision: PhantomData<P>,
}

impl<T: Scalar> Angle<T> {
    /// Create an angle based on the number of radians in the angle.
    #[must_use]
    #[inline]
    pub fn from_radians(radians: T) -> Angle<T> {
        Angle::new(radians)
    }

    /// Create an angle based on the number of degrees in the angle.
    #[must_use]
    #[inline]
    pub fn from_degrees(degrees: T) -> Angle<T> {
        Angle::new(degrees * T::RADIANS_PER_DEGREE)
    }
}

impl<T: Scalar, P: Precision> Angle<T, P> {
    #[inline]
    pub(crate) fn new(radians: T) -> Angle<T, P> {
        Angle {
            radians,
            precision: PhantomData,
        }
    }

    /// An angle of zero.
    #[must_use]
    #[inline]
    pub fn zero() -> Angle<T, P> {
        Angle::new(T::zero())
    }

    /// An angle of 90 degrees.
    #[must_use]
    #[inline]
    pub fn quarter_circle() -> Angle<T, P> {
        Angle::new(T::QUARTER_TURN)
    }

    /// An angle of 180 degrees.
    #[must_use]
    #[inline]
    pub fn half_circle() -> Angle<T, P> {
        Angle::new(T::HALF_TURN)
    }

    /// An angle of 270 degrees.
    #[must_use]
    #[inline]
    pub fn three_quarters_circle() -> Angle<T, P> {
        Angle::new(T::THREE_QUARTERS_TURN)
    }

    /// An angle of 360 degrees, or one full turn.
    #[must_use]
    #[inline]
    pub fn full_circle() -> Angle<T, P> {
        Angle::new(T::FULL_TURN)
    }

    /// Get the number of radians in this angle.
    #[must_use]
    #[inline]
    pub fn radians(self) -> T {
        self.radians
    }

    /// Get the number of degrees in this angle.
    #[must_use]
    #[inline]
    pub fn degrees(self) -> T {
        self.radians * T::DEGREES_PER_RADIAN
    }

    /// Re-tag this angle with a different storage qualifier. The magnitude is unchanged.
    #[must_use]
    #[inline]
    pub fn with_precision<Q: Precision>(self) -> Angle<T, Q> {
        Angle::new(self.radians)
    }

    /// Convert this angle to one backed by a different scalar, widening or narrowing the magnitude the
    /// same way an `as` cast would.
    #[must_use]
    #[inline]
    pub fn cast<U: Scalar>(self) -> Angle<U, P>
    where
        T: AsPrimitive<U>,
    {
        Angle::new(self.radians.as_())
    }
}

impl<T: Scalar, P: Precision> Default for Angle<T, P> {
    #[inline]
    fn default() -> Self {
        Angle::zero()
    }
}

impl<T: Scalar, P: Precision> fmt::Debug for Angle<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Angle")
            .field("radians", &self.radians)
            .finish()
    }
}

impl<T: Scalar, P: Precision> fmt::Display for Angle<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.radians, f)?;
        f.write_str(" rad")
    }
}

/// Create an angle of `radians` radians.
#[must_use]
#[inline]
pub fn from_radians<T: Scalar>(radians: T) -> Angle<T> {
    Angle::from_radians(radians)
}

/// Create an angle of `degrees` degrees.
#[must_use]
#[inline]
pub fn from_degrees<T: Scalar>(degrees: T) -> Angle<T> {
    Angle::from_degrees(degrees)
}

/// Shorthand for [`from_radians`].
#[must_use]
#[inline]
pub fn rad<T: Scalar>(radians: T) -> Angle<T> {
    Angle::from_radians(radians)
}

/// Shorthand for [`from_degrees`].
#[must_use]
#[inline]
pub fn deg<T: Scalar>(degrees: T) -> Angle<T> {
    Angle::from_degrees(degrees)
}

/// Get the number of radians in `angle`.
#[must_use]
#[inline]
pub fn radians<T: Scalar, P: Precision>(angle: Angle<T, P>) -> T {
    angle.radians()
}

/// Get the number of degrees in `angle`.
#[must_use]
#[inline]
pub fn degrees<T: Scalar, P: Precision>(angle: Angle<T, P>) -> T {
    angle.degrees()
}

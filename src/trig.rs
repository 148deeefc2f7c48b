// MIT/Apache2 License

use crate::{Angle, Precision, Scalar};
use euclid::Vector2D;

impl<T: Scalar, P: Precision> Angle<T, P> {
    /// The cosine of this angle.
    #[must_use]
    #[inline]
    pub fn cos(self) -> T {
        self.radians().cos()
    }

    /// The sine of this angle.
    #[must_use]
    #[inline]
    pub fn sin(self) -> T {
        self.radians().sin()
    }

    /// The tangent of this angle.
    #[must_use]
    #[inline]
    pub fn tan(self) -> T {
        self.radians().tan()
    }

    /// The sine and cosine of this angle, in that order.
    #[must_use]
    #[inline]
    pub fn sin_cos(self) -> (T, T) {
        self.radians().sin_cos()
    }
}

impl<T: Scalar> Angle<T> {
    /// The four-quadrant arctangent of `y` and `x`, in the range `[-180, 180]` degrees.
    ///
    /// `atan2(0, 0)` is whatever the underlying float implementation says it is, usually zero.
    #[must_use]
    #[inline]
    pub fn atan2(y: T, x: T) -> Angle<T> {
        Angle::from_radians(y.atan2(x))
    }

    /// The angle between the positive X axis and `vector`.
    #[must_use]
    #[inline]
    pub fn atan2_vector<U>(vector: Vector2D<T, U>) -> Angle<T> {
        Angle::atan2(vector.y, vector.x)
    }

    /// The arcsine of `x`. Values outside of `[-1, 1]` produce a `NaN` angle.
    #[must_use]
    #[inline]
    pub fn asin(x: T) -> Angle<T> {
        Angle::from_radians(x.asin())
    }

    /// The arccosine of `x`. Values outside of `[-1, 1]` produce a `NaN` angle.
    #[must_use]
    #[inline]
    pub fn acos(x: T) -> Angle<T> {
        Angle::from_radians(x.acos())
    }

    /// The arctangent of `x`.
    #[must_use]
    #[inline]
    pub fn atan(x: T) -> Angle<T> {
        Angle::from_radians(x.atan())
    }
}

/// The four-quadrant arctangent of `y` and `x`.
#[must_use]
#[inline]
pub fn atan2<T: Scalar>(y: T, x: T) -> Angle<T> {
    Angle::atan2(y, x)
}

/// The angle between the positive X axis and `vector`.
#[must_use]
#[inline]
pub fn atan2_vector<T: Scalar, U>(vector: Vector2D<T, U>) -> Angle<T> {
    Angle::atan2_vector(vector)
}

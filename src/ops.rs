// MIT/Apache2 License

//! Arithmetic and comparisons on angles.
//!
//! Only operations that keep the result an angle (or make it dimensionless, in the case of dividing two
//! angles) are implemented. Multiplying two angles together is deliberately not possible.

use crate::{Angle, Precision, Scalar};
use core::{cmp::Ordering, iter::Sum, ops};
use ordered_float::OrderedFloat;

impl<T: Scalar, P: Precision> Angle<T, P> {
    /// Unary plus. Returns the angle unchanged.
    #[must_use]
    #[inline]
    pub fn pos(self) -> Angle<T, P> {
        self
    }

    /// A totally ordered key for this angle, suitable for `sort_by_key` and ordered collections.
    ///
    /// The key orders like `<` for ordinary magnitudes and places `NaN` after everything else.
    #[must_use]
    #[inline]
    pub fn sort_key(self) -> OrderedFloat<T> {
        OrderedFloat(self.radians())
    }
}

impl<T: Scalar, P: Precision> ops::Neg for Angle<T, P> {
    type Output = Angle<T, P>;

    #[inline]
    fn neg(self) -> Angle<T, P> {
        Angle::new(-self.radians())
    }
}

impl<T: Scalar, P: Precision> ops::Add for Angle<T, P> {
    type Output = Angle<T, P>;

    #[inline]
    fn add(self, other: Angle<T, P>) -> Angle<T, P> {
        Angle::new(self.radians() + other.radians())
    }
}

impl<T: Scalar, P: Precision> ops::Sub for Angle<T, P> {
    type Output = Angle<T, P>;

    #[inline]
    fn sub(self, other: Angle<T, P>) -> Angle<T, P> {
        Angle::new(self.radians() - other.radians())
    }
}

impl<T: Scalar, P: Precision> ops::Mul<T> for Angle<T, P> {
    type Output = Angle<T, P>;

    #[inline]
    fn mul(self, scale: T) -> Angle<T, P> {
        Angle::new(self.radians() * scale)
    }
}

impl<T: Scalar, P: Precision> ops::Div<T> for Angle<T, P> {
    type Output = Angle<T, P>;

    #[inline]
    fn div(self, scale: T) -> Angle<T, P> {
        Angle::new(self.radians() / scale)
    }
}

/// Dividing two angles cancels out the unit and leaves a plain ratio.
impl<T: Scalar, P: Precision> ops::Div for Angle<T, P> {
    type Output = T;

    #[inline]
    fn div(self, other: Angle<T, P>) -> T {
        self.radians() / other.radians()
    }
}

impl<T: Scalar, P: Precision> ops::Rem for Angle<T, P> {
    type Output = Angle<T, P>;

    #[inline]
    fn rem(self, other: Angle<T, P>) -> Angle<T, P> {
        self.modulo(other)
    }
}

impl<T: Scalar, P: Precision> ops::AddAssign for Angle<T, P> {
    #[inline]
    fn add_assign(&mut self, other: Angle<T, P>) {
        *self = *self + other;
    }
}

impl<T: Scalar, P: Precision> ops::SubAssign for Angle<T, P> {
    #[inline]
    fn sub_assign(&mut self, other: Angle<T, P>) {
        *self = *self - other;
    }
}

impl<T: Scalar, P: Precision> ops::MulAssign<T> for Angle<T, P> {
    #[inline]
    fn mul_assign(&mut self, scale: T) {
        *self = *self * scale;
    }
}

impl<T: Scalar, P: Precision> ops::DivAssign<T> for Angle<T, P> {
    #[inline]
    fn div_assign(&mut self, scale: T) {
        *self = *self / scale;
    }
}

impl<T: Scalar, P: Precision> Sum for Angle<T, P> {
    #[inline]
    fn sum<I: Iterator<Item = Angle<T, P>>>(iter: I) -> Angle<T, P> {
        iter.fold(Angle::zero(), ops::Add::add)
    }
}

// scalar * angle can't be written generically over T, since T is foreign
macro_rules! impl_scalar_mul {
    ($($ty: ty),*) => {
        $(
            impl<P: Precision> ops::Mul<Angle<$ty, P>> for $ty {
                type Output = Angle<$ty, P>;

                #[inline]
                fn mul(self, angle: Angle<$ty, P>) -> Angle<$ty, P> {
                    Angle::new(self * angle.radians())
                }
            }
        )*
    };
}

impl_scalar_mul! { f32, f64 }

// Comparisons are exact. Use the `approx` traits to compare with a tolerance.

impl<T: Scalar, P: Precision> PartialEq for Angle<T, P> {
    #[inline]
    fn eq(&self, other: &Angle<T, P>) -> bool {
        self.radians() == other.radians()
    }
}

impl<T: Scalar, P: Precision> PartialOrd for Angle<T, P> {
    #[inline]
    fn partial_cmp(&self, other: &Angle<T, P>) -> Option<Ordering> {
        self.radians().partial_cmp(&other.radians())
    }
}

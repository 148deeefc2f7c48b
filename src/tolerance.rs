// MIT/Apache2 License

//! Approximate comparisons between angles.
//!
//! `==` on angles compares the stored radians exactly, which rarely holds for angles that went through any
//! arithmetic. These impls compare the radians with a tolerance instead.

use crate::{Angle, Precision, Scalar};
use approx::{AbsDiffEq, RelativeEq, UlpsEq};

impl<T, P> AbsDiffEq for Angle<T, P>
where
    T: Scalar + AbsDiffEq<Epsilon = T>,
    P: Precision,
{
    type Epsilon = T;

    #[inline]
    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.radians().abs_diff_eq(&other.radians(), epsilon)
    }
}

impl<T, P> RelativeEq for Angle<T, P>
where
    T: Scalar + RelativeEq<Epsilon = T>,
    P: Precision,
{
    #[inline]
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    #[inline]
    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.radians()
            .relative_eq(&other.radians(), epsilon, max_relative)
    }
}

impl<T, P> UlpsEq for Angle<T, P>
where
    T: Scalar + UlpsEq<Epsilon = T>,
    P: Precision,
{
    #[inline]
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    #[inline]
    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        self.radians().ulps_eq(&other.radians(), epsilon, max_ulps)
    }
}

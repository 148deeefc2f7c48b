// MIT/Apache2 License

use crate::{Angle, Precision, Scalar};

impl<T: Scalar, P: Precision> Angle<T, P> {
    /// The absolute value of this angle.
    #[must_use]
    #[inline]
    pub fn abs(self) -> Angle<T, P> {
        Angle::new(self.radians().abs())
    }

    /// The smaller of two angles.
    #[must_use]
    #[inline]
    pub fn min(self, other: Angle<T, P>) -> Angle<T, P> {
        Angle::new(self.radians().min(other.radians()))
    }

    /// The larger of two angles.
    #[must_use]
    #[inline]
    pub fn max(self, other: Angle<T, P>) -> Angle<T, P> {
        Angle::new(self.radians().max(other.radians()))
    }

    /// Restrict this angle to the range `min..=max`.
    ///
    /// Unlike `f32::clamp`, this does not panic if `min` is greater than `max`; the result is just `max`.
    #[must_use]
    #[inline]
    pub fn clamp(self, min: Angle<T, P>, max: Angle<T, P>) -> Angle<T, P> {
        self.max(min).min(max)
    }

    /// Linearly interpolate between this angle and `other`. A factor of zero gives `self` and a factor of
    /// one gives `other`; the factor is not clamped.
    #[must_use]
    #[inline]
    pub fn mix(self, other: Angle<T, P>, factor: T) -> Angle<T, P> {
        Angle::new(self.radians() * (T::one() - factor) + other.radians() * factor)
    }

    /// Pick `other` if `flag` is set, otherwise `self`.
    #[must_use]
    #[inline]
    pub fn select(self, other: Angle<T, P>, flag: bool) -> Angle<T, P> {
        if flag {
            other
        } else {
            self
        }
    }

    /// The remainder of dividing this angle by `other`.
    ///
    /// This is a truncated remainder: the result has the same sign as `self`.
    #[must_use]
    #[inline]
    pub fn modulo(self, other: Angle<T, P>) -> Angle<T, P> {
        Angle::new(self.radians() % other.radians())
    }

    /// The sign of this angle: `1` if it is positive, `-1` if it is negative and `0` otherwise.
    #[must_use]
    #[inline]
    pub fn sign(self) -> T {
        // Float::signum() maps zero to one
        let radians = self.radians();
        if radians > T::zero() {
            T::one()
        } else if radians < T::zero() {
            -T::one()
        } else {
            T::zero()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{from_degrees, from_radians};
    use approx::assert_abs_diff_eq;
    use num_traits::Float;

    const VALUES: &[f32] = &[0.1, 0.37, 0.5, 0.93, 1.0];

    #[test]
    fn test_abs() {
        for &x in VALUES {
            let a = from_radians(x);
            let b = from_radians(-x);
            assert_abs_diff_eq!(b.abs().radians(), x, epsilon = 0.01);
            assert_eq!(a.abs(), b.abs());
        }
    }

    #[test]
    fn test_clamp() {
        let lo = from_radians(100.0f32);
        let hi = from_radians(200.0f32);

        for &x in VALUES {
            let below = lo - from_radians(x);
            let above = hi + from_radians(x);

            assert_eq!(below.clamp(lo, hi), lo);
            assert_eq!(above.clamp(lo, hi), hi);
        }

        let inside = from_radians(150.0f32);
        assert_eq!(inside.clamp(lo, hi), inside);

        // an inverted range never panics
        assert_eq!(inside.clamp(hi, lo), lo);
    }

    #[test]
    fn test_min_max() {
        for &x in VALUES {
            for &y in VALUES {
                let (a, b) = (from_radians(x), from_radians(y));
                assert_eq!(a.max(b).radians(), Float::max(x, y));
                assert_eq!(a.min(b).radians(), Float::min(x, y));
            }
        }
    }

    #[test]
    fn test_mix() {
        let a = from_degrees(10.0f64);
        let b = from_degrees(50.0f64);

        assert_abs_diff_eq!(a.mix(b, 0.0).degrees(), 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(a.mix(b, 0.25).degrees(), 20.0, epsilon = 1e-9);
        assert_abs_diff_eq!(a.mix(b, 1.0).degrees(), 50.0, epsilon = 1e-9);
        assert_abs_diff_eq!(a.mix(b, 2.0).degrees(), 90.0, epsilon = 1e-9);

        assert_eq!(a.select(b, false), a);
        assert_eq!(a.select(b, true), b);
    }

    #[test]
    fn test_modulo() {
        for &x in VALUES {
            for &y in VALUES {
                let (a, b) = (from_radians(x), from_radians(y));
                assert_abs_diff_eq!(a.modulo(b).radians(), x % y, epsilon = 0.01);
                assert_abs_diff_eq!((b % a).radians(), y % x, epsilon = 0.01);
            }
        }

        // truncated, so the sign follows the dividend
        let r = from_degrees(-450.0f64).modulo(from_degrees(360.0));
        assert_abs_diff_eq!(r.degrees(), -90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_sign() {
        assert_eq!(from_radians(10.0f32).sign(), 1.0);
        assert_eq!(from_radians(0.0f32).sign(), 0.0);
        assert_eq!(from_radians(-10.0f32).sign(), -1.0);
        assert_eq!(from_degrees(10.0f32).sign(), 1.0);
        assert_eq!(from_degrees(0.0f32).sign(), 0.0);
        assert_eq!(from_degrees(-10.0f32).sign(), -1.0);
        assert_eq!(from_radians(-0.0f64).sign(), 0.0);
        assert_eq!(from_radians(f64::NAN).sign(), 0.0);
    }
}

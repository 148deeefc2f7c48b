// MIT/Apache2 License

//! Reducing angles to a single turn, and measuring the short way around between two of them.

use crate::{Angle, Precision, Scalar};

impl<T: Scalar, P: Precision> Angle<T, P> {
    /// Reduce this angle to the equivalent angle in the range `[0, 360)` degrees.
    ///
    /// Whole turns, positive or negative, normalize to zero.
    #[must_use]
    pub fn normalize(self) -> Angle<T, P> {
        let full = Angle::full_circle();
        let reduced = self % full;

        if reduced < Angle::zero() {
            // the remainder takes the sign of the dividend, so negative angles land in (-360, 0)
            let wrapped = reduced + full;

            // a tiny negative remainder can round up to exactly one turn
            if wrapped >= full {
                log::trace!("{} rounded up to a full turn while normalizing, using zero", self);
                Angle::zero()
            } else {
                wrapped
            }
        } else {
            reduced
        }
    }

    /// The shortest signed rotation that takes this angle to `to`.
    ///
    /// Both angles are expected to be normalized already (see [`Angle::normalize`]); in that case the
    /// result is in the range `[-180, 180]` degrees. Positive results are counter-clockwise.
    #[must_use]
    pub fn distance(self, to: Angle<T, P>) -> Angle<T, P> {
        let direct = to - self;

        if direct.abs() > Angle::half_circle() {
            // going the other way around is shorter
            let full = Angle::full_circle();
            let target = if self > to { to + full } else { to - full };

            log::trace!(
                "distance from {} to {} wraps around, target adjusted to {}",
                self,
                to,
                target
            );

            target - self
        } else {
            direct
        }
    }
}

/// Reduce `angle` to the equivalent angle in the range `[0, 360)` degrees.
#[must_use]
#[inline]
pub fn normalize<T: Scalar, P: Precision>(angle: Angle<T, P>) -> Angle<T, P> {
    angle.normalize()
}

/// The shortest signed rotation that takes `from` to `to`.
#[must_use]
#[inline]
pub fn distance<T: Scalar, P: Precision>(from: Angle<T, P>, to: Angle<T, P>) -> Angle<T, P> {
    from.distance(to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{from_degrees, from_radians};
    use approx::assert_abs_diff_eq;
    use core::f32::consts::PI;

    fn samples() -> impl Iterator<Item = f32> {
        (-40..=40).map(|i| i as f32 * 0.7 + 0.013)
    }

    #[test]
    fn test_normalize() {
        assert_abs_diff_eq!(normalize(from_radians(5.0 * PI)).radians(), PI, epsilon = 0.01);
        assert_abs_diff_eq!(normalize(from_radians(2.0 * PI)).radians(), 0.0, epsilon = 0.01);
        assert_abs_diff_eq!(
            normalize(from_radians(-PI / 2.0)).radians(),
            1.5 * PI,
            epsilon = 0.01
        );
        assert_abs_diff_eq!(normalize(from_radians(-PI * 2.0)).radians(), 0.0, epsilon = 0.01);
        assert_abs_diff_eq!(normalize(from_radians(5.0 * -PI)).radians(), PI, epsilon = 0.01);
    }

    #[test]
    fn test_normalize_whole_turns() {
        for turns in -5..=5 {
            let a = from_degrees(360.0f64 * f64::from(turns));
            assert_eq!(a.normalize(), Angle::zero(), "{} turns", turns);
        }
    }

    #[test]
    fn test_normalize_range() {
        let full = Angle::full_circle();

        for x in samples() {
            let n = from_radians(x).normalize();
            assert!(n >= Angle::zero() && n < full, "{} normalized to {}", x, n);
        }

        for &x in &[-1.0e-9f32, -1.0e-30, 1.0e9, -1.0e9, 123_456.79] {
            let n = from_radians(x).normalize();
            assert!(n >= Angle::zero() && n < full, "{} normalized to {}", x, n);
        }

        // rounds up to a full turn before being pulled back
        assert_eq!(from_radians(-1.0e-9f32).normalize(), Angle::zero());
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for x in samples() {
            let n = from_radians(f64::from(x)).normalize();
            assert_eq!(n.normalize(), n);
        }
    }

    fn assert_distance(from: f32, to: f32, expected: f32) {
        let d = distance(from_degrees(from), from_degrees(to));
        assert_abs_diff_eq!(d.degrees(), expected, epsilon = 0.01);
    }

    #[test]
    fn test_distance() {
        assert_distance(0.0, 90.0, 90.0);
        assert_distance(90.0, 0.0, -90.0);

        assert_distance(0.0, 270.0, -90.0);
        assert_distance(270.0, 0.0, 90.0);

        assert_distance(0.0, 360.0, 0.0);
        assert_distance(360.0, 0.0, 0.0);

        assert_distance(10.0, 350.0, -20.0);
        assert_distance(350.0, 10.0, 20.0);
    }

    #[test]
    fn test_distance_half_turn() {
        // exactly half a turn apart stays on the direct path in both directions
        assert_distance(0.0, 180.0, 180.0);
        assert_distance(180.0, 0.0, -180.0);
    }

    #[test]
    fn test_distance_range_and_antisymmetry() {
        let half = Angle::half_circle();

        for x in samples() {
            for y in samples() {
                let a = from_radians(f64::from(x)).normalize();
                let b = from_radians(f64::from(y)).normalize();

                if ((a - b).abs() - half).abs().radians() < 1.0e-9 {
                    continue;
                }

                let forward = a.distance(b);
                let backward = b.distance(a);

                assert!(forward > -half && forward <= half, "{} -> {} gave {}", a, b, forward);
                assert_abs_diff_eq!(forward.radians(), -backward.radians(), epsilon = 1.0e-12);
            }
        }
    }
}

// MIT/Apache2 License

//! Conversions to and from `euclid`'s angle type.
//!
//! `euclid::Angle` is a radian-tagged value as well, so these conversions can't mix up units. Geometry types
//! that take an `euclid::Angle` for rotations can be handed one of our angles through `into()`.

use crate::{Angle, Precision, Scalar};

impl<T: Scalar, P: Precision> From<Angle<T, P>> for euclid::Angle<T> {
    #[inline]
    fn from(angle: Angle<T, P>) -> euclid::Angle<T> {
        euclid::Angle::radians(angle.radians())
    }
}

impl<T: Scalar> From<euclid::Angle<T>> for Angle<T> {
    #[inline]
    fn from(angle: euclid::Angle<T>) -> Angle<T> {
        Angle::from_radians(angle.radians)
    }
}

#[cfg(test)]
mod tests {
    use crate::{from_degrees, from_radians, Angle, LowP};
    use approx::assert_abs_diff_eq;
    use euclid::{default::Rotation2D, default::Vector2D};

    #[test]
    fn test_round_trip() {
        for &x in &[0.0f32, 1.25, -7.5, 1.0e6] {
            let ours = from_radians(x);
            let theirs: euclid::Angle<f32> = ours.into();
            assert_eq!(theirs.radians, x);

            let back: Angle<f32> = theirs.into();
            assert_eq!(back, ours);
        }

        let tagged = from_radians(0.5f64).with_precision::<LowP>();
        assert_eq!(euclid::Angle::from(tagged).radians, 0.5);
    }

    #[test]
    fn test_rotation() {
        let quarter: euclid::Angle<f64> = from_degrees(90.0).into();
        let rotation = Rotation2D::new(quarter);
        let rotated = rotation.transform_vector(Vector2D::new(1.0, 0.0));

        assert_abs_diff_eq!(rotated.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(rotated.y, 1.0, epsilon = 1e-9);
    }
}

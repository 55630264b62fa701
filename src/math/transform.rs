use glam::{Mat4, Vec3};

/// Affine transform built by chaining primitive operations.
///
/// Every call applies *after* the operations already in the chain, so
/// `Transform::identity().scale(s).translate(t)` scales first and then
/// translates (the composite matrix is `T * S`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform(Mat4);

impl Transform {
    pub const fn identity() -> Self {
        Self(Mat4::IDENTITY)
    }

    pub fn scale(self, factors: Vec3) -> Self {
        self.then_matrix(Mat4::from_scale(factors))
    }

    pub fn translate(self, offset: Vec3) -> Self {
        self.then_matrix(Mat4::from_translation(offset))
    }

    /// Rotate by `angle` radians around `axis`; the axis need not be unit length.
    /// A zero axis leaves the chain unchanged.
    pub fn rotate(self, angle: f32, axis: Vec3) -> Self {
        match axis.try_normalize() {
            Some(axis) => self.then_matrix(Mat4::from_axis_angle(axis, angle)),
            None => self,
        }
    }

    /// Apply `next` after this transform
    pub fn then(self, next: Transform) -> Self {
        self.then_matrix(next.0)
    }

    pub fn matrix(&self) -> Mat4 {
        self.0
    }

    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.0.transform_point3(point)
    }

    fn then_matrix(self, next: Mat4) -> Self {
        Self(next * self.0)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<Transform> for Mat4 {
    fn from(transform: Transform) -> Self {
        transform.0
    }
}

impl From<Mat4> for Transform {
    fn from(matrix: Mat4) -> Self {
        Self(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn scale_then_translate_differs_from_translate_then_scale() {
        let p = Vec3::new(1.0, 0.0, 0.0);

        let a = Transform::identity()
            .scale(Vec3::splat(2.0))
            .translate(Vec3::X);
        let b = Transform::identity()
            .translate(Vec3::X)
            .scale(Vec3::splat(2.0));

        assert!(a.transform_point(p).abs_diff_eq(Vec3::new(3.0, 0.0, 0.0), 1e-6));
        assert!(b.transform_point(p).abs_diff_eq(Vec3::new(4.0, 0.0, 0.0), 1e-6));
    }

    #[test]
    fn rotate_normalizes_axis() {
        let t = Transform::identity().rotate(FRAC_PI_2, Vec3::new(0.0, 5.0, 0.0));
        let rotated = t.transform_point(Vec3::X);
        assert!(rotated.abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), 1e-6));
    }

    #[test]
    fn rotate_around_zero_axis_is_noop() {
        let t = Transform::identity().rotate(1.0, Vec3::ZERO);
        assert_eq!(t.matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn then_appends_after() {
        let first = Transform::identity().translate(Vec3::Y);
        let second = Transform::identity().scale(Vec3::splat(3.0));
        let combined = first.then(second);
        assert!(combined
            .transform_point(Vec3::ZERO)
            .abs_diff_eq(Vec3::new(0.0, 3.0, 0.0), 1e-6));
    }
}

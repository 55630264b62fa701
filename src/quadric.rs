use glam::{Mat4, Vec3};

use crate::error::Result;
use crate::math::QuadricMatrix;
use crate::types::QuadricUniform;

/// A clipped quadric surface with a specular exponent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadric {
    pub surface: QuadricMatrix,
    pub clipper: QuadricMatrix,
    pub shininess: f32,
}

impl Quadric {
    pub fn new(surface: QuadricMatrix, clipper: QuadricMatrix, shininess: f32) -> Self {
        debug_assert!(shininess >= 0.0, "negative shininess {shininess}");
        Self {
            surface,
            clipper,
            shininess,
        }
    }

    pub fn set_shininess(&mut self, shininess: f32) -> &mut Self {
        debug_assert!(shininess >= 0.0, "negative shininess {shininess}");
        self.shininess = shininess;
        self
    }

    /// Move surface and clipper together
    pub fn transform(&mut self, trafo: impl Into<Mat4>) -> Result<&mut Self> {
        let trafo = trafo.into();
        // Check both before mutating either so a failure leaves the pair consistent
        let mut surface = self.surface;
        let mut clipper = self.clipper;
        surface.transform(trafo)?;
        clipper.transform(trafo)?;
        self.surface = surface;
        self.clipper = clipper;
        Ok(self)
    }

    /// Point lies in the clip region
    pub fn is_clipped_in(&self, point: Vec3) -> bool {
        self.clipper.evaluate(point) <= 0.0
    }

    /// Point lies on the visible part of the surface
    pub fn is_visible_at(&self, point: Vec3, tolerance: f32) -> bool {
        self.surface.evaluate(point).abs() <= tolerance && self.is_clipped_in(point)
    }

    pub fn to_uniform(&self) -> QuadricUniform {
        QuadricUniform {
            surface: self.surface.to_cols_array_2d(),
            clipper: self.clipper.to_cols_array_2d(),
            shininess: self.shininess,
            _pad: [0.0; 3],
        }
    }
}

/// An unused slot: a surface with no real points and no clipping
impl Default for Quadric {
    fn default() -> Self {
        Self::new(QuadricMatrix::empty(), QuadricMatrix::no_clip(), 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Transform;

    #[test]
    fn transform_moves_clipper_with_surface() {
        let mut q = Quadric::new(QuadricMatrix::unit_sphere(), QuadricMatrix::unit_slab(), 10.0);
        q.transform(Transform::identity().translate(Vec3::new(0.0, 10.0, 0.0)))
            .unwrap();

        let top = Vec3::new(0.0, 11.0, 0.0);
        assert!(q.is_visible_at(top, 1e-4));
        assert!(!q.is_clipped_in(Vec3::new(0.0, 12.5, 0.0)));
    }

    #[test]
    fn surface_and_clipper_move_independently() {
        let mut q = Quadric::new(QuadricMatrix::unit_sphere(), QuadricMatrix::unit_slab(), 1.0);
        q.clipper
            .transform(Transform::identity().translate(Vec3::new(0.0, 1.5, 0.0)))
            .unwrap();

        // Only the upper cap survives the shifted slab
        assert!(q.is_visible_at(Vec3::new(0.0, 1.0, 0.0), 1e-5));
        assert!(!q.is_visible_at(Vec3::new(0.0, -1.0, 0.0), 1e-5));
    }

    #[test]
    fn failed_transform_leaves_pair_untouched() {
        let mut q = Quadric::new(QuadricMatrix::unit_sphere(), QuadricMatrix::unit_slab(), 1.0);
        let before = q;
        assert!(q.transform(Mat4::ZERO).is_err());
        assert_eq!(q, before);
    }

    #[test]
    fn default_slot_is_invisible() {
        let q = Quadric::default();
        for p in [Vec3::ZERO, Vec3::X, Vec3::new(4.0, -2.0, 7.0)] {
            assert!(!q.is_visible_at(p, 1e-3));
        }
    }

    #[test]
    fn uniform_carries_shininess() {
        let q = Quadric::new(QuadricMatrix::unit_sphere(), QuadricMatrix::no_clip(), 42.0);
        let u = q.to_uniform();
        assert_eq!(u.shininess, 42.0);
        assert_eq!(u.surface[3][3], -1.0);
        assert_eq!(u.clipper[0][0], 0.0);
    }
}

use glam::{Mat3, Mat4, Vec3, Vec4};

use crate::error::{Result, SceneError};

/// Determinants below this magnitude are treated as singular
pub const SINGULAR_EPSILON: f32 = 1e-12;

/// Symmetric 4x4 coefficient matrix of an implicit quadric `pᵗ A p = 0`
/// over homogeneous points `p = (x, y, z, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadricMatrix(Mat4);

impl QuadricMatrix {
    /// x² + y² + z² - 1
    pub fn unit_sphere() -> Self {
        Self(Mat4::from_diagonal(Vec4::new(1.0, 1.0, 1.0, -1.0)))
    }

    /// y² - 1, the slab |y| <= 1 when used as a clipper
    pub fn unit_slab() -> Self {
        Self(Mat4::from_diagonal(Vec4::new(0.0, 1.0, 0.0, -1.0)))
    }

    /// Constant -1: every point passes the clip test
    pub fn no_clip() -> Self {
        Self(Mat4::from_diagonal(Vec4::new(0.0, 0.0, 0.0, -1.0)))
    }

    /// x² + y² + z² + 1, which has no real zeros
    pub fn empty() -> Self {
        Self(Mat4::IDENTITY)
    }

    /// Build from 16 row-major coefficients.
    ///
    /// Asymmetric input is replaced by `(A + Aᵗ) / 2`, which has the same
    /// quadratic form and therefore the same zero-set.
    pub fn from_coefficients(coefficients: [f32; 16]) -> Self {
        Self(symmetrize(Mat4::from_cols_array(&coefficients).transpose()))
    }

    pub fn set(&mut self, coefficients: [f32; 16]) -> &mut Self {
        *self = Self::from_coefficients(coefficients);
        self
    }

    pub fn set_preset(&mut self, preset: &QuadricMatrix) -> &mut Self {
        *self = *preset;
        self
    }

    /// Move the zero-set by `trafo`: `A' = (M⁻¹)ᵗ A M⁻¹`.
    ///
    /// Fails without touching the stored matrix when `trafo` is singular.
    pub fn transform(&mut self, trafo: impl Into<Mat4>) -> Result<&mut Self> {
        let trafo = trafo.into();
        let determinant = trafo.determinant();
        if !determinant.is_finite() || determinant.abs() < SINGULAR_EPSILON {
            return Err(SceneError::SingularTransform { determinant });
        }

        let inverse = trafo.inverse();
        self.0 = symmetrize(inverse.transpose() * self.0 * inverse);
        Ok(self)
    }

    /// Value of the quadratic form at `point`; zero on the surface
    pub fn evaluate(&self, point: Vec3) -> f32 {
        let p = point.extend(1.0);
        p.dot(self.0 * p)
    }

    /// Gradient of the quadratic form, the unnormalized surface normal
    pub fn gradient(&self, point: Vec3) -> Vec3 {
        (self.0 * point.extend(1.0)).truncate() * 2.0
    }

    /// Center of a central quadric (sphere, ellipsoid, hyperboloid), where the
    /// gradient vanishes. `None` for cylinders, slabs and paraboloids.
    ///
    /// The trace shader derives texture origins the same way.
    pub fn center(&self) -> Option<Vec3> {
        let quadratic = Mat3::from_mat4(self.0);
        if quadratic.determinant().abs() < SINGULAR_EPSILON {
            return None;
        }
        Some(quadratic.inverse() * -self.0.col(3).truncate())
    }

    pub fn coefficient(&self, row: usize, col: usize) -> f32 {
        self.0.col(col)[row]
    }

    /// Coefficient of the linear term along `axis` (0 = x, 1 = y, 2 = z)
    pub fn linear_term(&self, axis: usize) -> f32 {
        self.coefficient(axis, 3) + self.coefficient(3, axis)
    }

    pub fn is_symmetric(&self, max_abs_diff: f32) -> bool {
        self.0.abs_diff_eq(self.0.transpose(), max_abs_diff)
    }

    pub fn abs_diff_eq(&self, other: &QuadricMatrix, max_abs_diff: f32) -> bool {
        self.0.abs_diff_eq(other.0, max_abs_diff)
    }

    pub fn matrix(&self) -> Mat4 {
        self.0
    }

    /// Column-major, as WGSL `mat4x4<f32>` expects
    pub fn to_cols_array_2d(&self) -> [[f32; 4]; 4] {
        self.0.to_cols_array_2d()
    }
}

impl Default for QuadricMatrix {
    fn default() -> Self {
        Self::empty()
    }
}

fn symmetrize(m: Mat4) -> Mat4 {
    (m + m.transpose()) * 0.5
}

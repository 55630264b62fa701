use glam::{Vec3, Vec4};

use crate::error::{Result, SceneError};
use crate::types::LightUniform;

/// Directional (w = 0) or point (w != 0) light
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Light {
    pub position: Vec4,
    pub power_density: Vec3,
}

impl Light {
    /// Light arriving from `direction`; the vector is normalized and must
    /// not be zero
    pub fn directional(direction: Vec3, power_density: Vec3) -> Result<Self> {
        let unit = direction
            .try_normalize()
            .ok_or(SceneError::DegenerateDirection {
                direction: direction.to_array(),
            })?;
        Ok(Self {
            position: unit.extend(0.0),
            power_density,
        })
    }

    pub fn point(position: Vec3, power_density: Vec3) -> Self {
        Self {
            position: position.extend(1.0),
            power_density,
        }
    }

    pub fn is_directional(&self) -> bool {
        self.position.w == 0.0
    }

    /// Unit vector from `point` towards the light
    pub fn direction_from(&self, point: Vec3) -> Vec3 {
        if self.is_directional() {
            self.position.truncate()
        } else {
            (self.position.truncate() / self.position.w - point).normalize_or_zero()
        }
    }

    pub fn to_uniform(&self) -> LightUniform {
        LightUniform {
            position: self.position.to_array(),
            power_density: self.power_density.to_array(),
            _pad: 0.0,
        }
    }
}

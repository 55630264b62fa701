//! Static layout constants of the beach scene.
//!
//! Defaults reproduce the reference rendering; a JSON file can override any
//! subset of them.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SceneError};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub umbrella: UmbrellaConfig,
    pub ball: BallConfig,
    pub sand: SandConfig,
    pub ocean: OceanConfig,
    pub sun: SunConfig,
    pub camera: CameraConfig,
}

impl SceneConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| SceneError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the scene cannot be built from
    pub fn validate(&self) -> Result<()> {
        let shininess = [
            ("umbrella.pole_shininess", self.umbrella.pole_shininess),
            ("umbrella.canopy_shininess", self.umbrella.canopy_shininess),
            ("ball.shininess", self.ball.shininess),
            ("sand.shininess", self.sand.shininess),
            ("ocean.shininess", self.ocean.shininess),
        ];
        for (field, value) in shininess {
            if !value.is_finite() || value < 0.0 {
                return Err(SceneError::Config(format!(
                    "{field} must be a non-negative number, got {value}"
                )));
            }
        }

        if self.sun.direction.try_normalize().is_none() {
            return Err(SceneError::Config(format!(
                "sun.direction must be a non-zero vector, got {:?}",
                self.sun.direction.to_array()
            )));
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| SceneError::Config(e.to_string()))
    }
}

/// Pole and canopy share one placement: translate to `position`, then
/// rotate by `roll` around `tilt_axis`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UmbrellaConfig {
    pub position: Vec3,
    pub tilt_axis: Vec3,
    pub roll: f32,
    /// Squared pole radius
    pub pole_radius_sq: f32,
    pub pole_clip_scale: Vec3,
    pub pole_shininess: f32,
    pub canopy_scale: Vec3,
    pub canopy_offset: f32,
    pub canopy_clip_offset: f32,
    pub canopy_shininess: f32,
}

impl Default for UmbrellaConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(2.0, 4.0, 2.0),
            tilt_axis: Vec3::new(0.25, 1.0, -0.15),
            roll: 2.0,
            pole_radius_sq: 0.01,
            pole_clip_scale: Vec3::new(0.1, 3.0, 0.1),
            pole_shininess: 50.0,
            canopy_scale: Vec3::new(3.0, 1.0, 3.0),
            canopy_offset: 2.01,
            canopy_clip_offset: 3.11,
            canopy_shininess: 40.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    /// Placement before the first frame
    pub rest_position: Vec3,
    /// Center the bobbing motion oscillates around
    pub anchor: Vec3,
    pub shininess: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            rest_position: Vec3::new(-17.0, -3.0, 0.0),
            anchor: Vec3::new(-17.0, -1.0, 0.0),
            shininess: 20.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandConfig {
    /// Curvature of the dune surface in x and z
    pub curvature: f32,
    /// Half thickness of the clip band
    pub clip_half_height: f32,
    pub clip_center: f32,
    pub shininess: f32,
}

impl Default for SandConfig {
    fn default() -> Self {
        Self {
            curvature: 0.01,
            clip_half_height: 2.0,
            clip_center: -1.0,
            shininess: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OceanConfig {
    pub surface_height: f32,
    pub clip_height: f32,
    pub shininess: f32,
}

impl Default for OceanConfig {
    fn default() -> Self {
        Self {
            surface_height: -3.0,
            clip_height: -2.0,
            shininess: 10.0,
        }
    }
}

/// Light 0, directional
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SunConfig {
    pub direction: Vec3,
    pub power_density: Vec3,
}

impl Default for SunConfig {
    fn default() -> Self {
        Self {
            direction: Vec3::new(1.0, 5.0, -2.0),
            power_density: Vec3::splat(1.1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    /// Vertical field of view in radians
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    /// Units per second
    pub speed: f32,
    /// Radians per second
    pub rotation_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 4.0, 10.0),
            yaw: std::f32::consts::PI,
            pitch: 0.0,
            fov: 1.0,
            near: 0.1,
            far: 1000.0,
            speed: 5.0,
            rotation_speed: 1.0,
        }
    }
}

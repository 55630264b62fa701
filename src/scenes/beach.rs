use glam::Vec3;

use crate::config::{BallConfig, OceanConfig, SandConfig, SceneConfig, SunConfig, UmbrellaConfig};
use crate::error::Result;
use crate::light::Light;
use crate::math::{QuadricMatrix, Transform};
use crate::quadric::Quadric;
use crate::types::{LIGHT_SLOTS, QUADRIC_SLOTS};

/// Slot indices of the beach layout
pub mod slot {
    pub const UMBRELLA_POLE: usize = 0;
    pub const RESERVED: usize = 1;
    pub const UMBRELLA_CANOPY: usize = 2;
    pub const BALL: usize = 3;
    pub const SAND: usize = 4;
    pub const OCEAN: usize = 5;
}

/// Builds the static quadric layout. Animated slots get their rest pose.
pub fn create_beach_quadrics(config: &SceneConfig) -> Result<[Quadric; QUADRIC_SLOTS]> {
    let mut quadrics = [Quadric::default(); QUADRIC_SLOTS];

    quadrics[slot::UMBRELLA_POLE] = umbrella_pole(&config.umbrella)?;
    quadrics[slot::UMBRELLA_CANOPY] = umbrella_canopy(&config.umbrella)?;
    quadrics[slot::BALL] = resting_ball(&config.ball)?;
    quadrics[slot::SAND] = sand(&config.sand)?;
    quadrics[slot::OCEAN] = resting_ocean(&config.ocean)?;

    Ok(quadrics)
}

/// Sun in slot 0, every other slot zeroed
pub fn create_beach_lights(sun: &SunConfig) -> Result<[Light; LIGHT_SLOTS]> {
    let mut lights = [Light::default(); LIGHT_SLOTS];
    lights[0] = Light::directional(sun.direction, sun.power_density)?;
    Ok(lights)
}

/// Vertical displacement shared by the waves and the ball
pub fn displacement(t: f32) -> f32 {
    t.sin()
}

/// `y² + d·y - 1`: the unit slab with its linear y term set to `d`
pub fn wave_slab(d: f32) -> QuadricMatrix {
    QuadricMatrix::from_coefficients([
        0.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, d, //
        0.0, 0.0, 0.0, 0.0, //
        0.0, 0.0, 0.0, -1.0,
    ])
}

/// `x² + y² + z² + d·y - 1`: the unit sphere with its linear y term set to `d`
pub fn bobbing_sphere(d: f32) -> QuadricMatrix {
    QuadricMatrix::from_coefficients([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, d, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, -1.0,
    ])
}

/// Ocean surface and clipper at time `t`
pub fn ocean(config: &OceanConfig, t: f32) -> Result<(QuadricMatrix, QuadricMatrix)> {
    let d = displacement(t);

    let mut surface = wave_slab(d);
    surface.transform(Transform::identity().translate(Vec3::new(0.0, config.surface_height, 0.0)))?;

    let mut clipper = wave_slab(d);
    clipper.transform(Transform::identity().translate(Vec3::new(0.0, config.clip_height, 0.0)))?;

    Ok((surface, clipper))
}

/// Ball surface at time `t`; its horizontal drift follows the same wave
pub fn ball(config: &BallConfig, t: f32) -> Result<QuadricMatrix> {
    let d = displacement(t);

    let mut surface = bobbing_sphere(d);
    surface.transform(
        Transform::identity()
            .translate(config.anchor)
            .translate(Vec3::new(-d, 0.0, 0.0)),
    )?;
    Ok(surface)
}

fn umbrella_placement(umbrella: &UmbrellaConfig) -> Transform {
    Transform::identity()
        .translate(umbrella.position)
        .rotate(umbrella.roll, umbrella.tilt_axis)
}

fn umbrella_pole(umbrella: &UmbrellaConfig) -> Result<Quadric> {
    // Infinite cylinder along y, cut to length by a scaled slab
    let mut pole = Quadric::default();
    pole.surface
        .set([
            1.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, -umbrella.pole_radius_sq,
        ])
        .transform(umbrella_placement(umbrella))?;
    pole.clipper
        .set_preset(&QuadricMatrix::unit_slab())
        .transform(
            Transform::identity()
                .scale(umbrella.pole_clip_scale)
                .then(umbrella_placement(umbrella)),
        )?;
    pole.set_shininess(umbrella.pole_shininess);
    Ok(pole)
}

fn umbrella_canopy(umbrella: &UmbrellaConfig) -> Result<Quadric> {
    // Flattened ellipsoid with only a thin band kept, above the pole
    let mut canopy = Quadric::default();
    canopy
        .surface
        .set_preset(&QuadricMatrix::unit_sphere())
        .transform(
            Transform::identity()
                .scale(umbrella.canopy_scale)
                .translate(Vec3::new(0.0, umbrella.canopy_offset, 0.0))
                .then(umbrella_placement(umbrella)),
        )?;
    canopy
        .clipper
        .set_preset(&QuadricMatrix::unit_slab())
        .transform(
            Transform::identity()
                .translate(Vec3::new(0.0, umbrella.canopy_clip_offset, 0.0))
                .then(umbrella_placement(umbrella)),
        )?;
    canopy.set_shininess(umbrella.canopy_shininess);
    Ok(canopy)
}

fn resting_ball(config: &BallConfig) -> Result<Quadric> {
    let mut ball = Quadric::default();
    ball.surface
        .set_preset(&QuadricMatrix::unit_sphere())
        .transform(Transform::identity().translate(config.rest_position))?;
    ball.clipper.set_preset(&QuadricMatrix::no_clip());
    ball.set_shininess(config.shininess);
    Ok(ball)
}

fn sand(config: &SandConfig) -> Result<Quadric> {
    let mut sand = Quadric::default();
    sand.surface.set([
        config.curvature, 0.0, 0.0, 0.0, //
        0.0, 0.0, 0.0, 1.0, //
        0.0, 0.0, config.curvature, 0.0, //
        0.0, 0.0, 0.0, -1.0,
    ]);
    sand.clipper
        .set([
            0.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 0.0, -config.clip_half_height * config.clip_half_height,
        ])
        .transform(Transform::identity().translate(Vec3::new(0.0, config.clip_center, 0.0)))?;
    sand.set_shininess(config.shininess);
    Ok(sand)
}

fn resting_ocean(config: &OceanConfig) -> Result<Quadric> {
    let mut ocean = Quadric::default();
    ocean
        .surface
        .set_preset(&QuadricMatrix::unit_slab())
        .transform(Transform::identity().translate(Vec3::new(0.0, config.surface_height, 0.0)))?;
    ocean.clipper.set_preset(&QuadricMatrix::no_clip());
    ocean.set_shininess(config.shininess);
    Ok(ocean)
}

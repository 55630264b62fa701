use crate::camera::Camera;
use crate::config::SceneConfig;
use crate::core::clock::SystemClock;
use crate::core::controller::Controller;
use crate::error::{Result, SceneError, SlotKind};
use crate::frame::{FrameInfo, FrameTimer};
use crate::light::Light;
use crate::quadric::Quadric;
use crate::scenes::{beach, create_beach_lights, create_beach_quadrics, slot};
use crate::traits::{SceneRenderer, TimeSource};
use crate::types::{SceneUniforms, LIGHT_SLOTS, QUADRIC_SLOTS};

/// The animated beach: fixed quadric and light slots, camera and frame time
pub struct Scene<C: TimeSource = SystemClock> {
    config: SceneConfig,
    quadrics: [Quadric; QUADRIC_SLOTS],
    lights: [Light; LIGHT_SLOTS],
    camera: Camera,
    timer: FrameTimer<C>,
    time: f32,
}

impl<C: TimeSource> Scene<C> {
    /// Lay out the static geometry; the clock's current reading becomes `t = 0`
    pub fn new(config: SceneConfig, clock: C) -> Result<Self> {
        config.validate()?;
        let quadrics = create_beach_quadrics(&config)?;
        let lights = create_beach_lights(&config.sun)?;
        let camera = Camera::new(&config.camera);

        log::info!(
            "Scene created: {} quadric slots, {} light slots",
            QUADRIC_SLOTS,
            LIGHT_SLOTS
        );

        Ok(Self {
            config,
            quadrics,
            lights,
            camera,
            timer: FrameTimer::new(clock),
            time: 0.0,
        })
    }

    /// Recompute the animated slots for time `t`; a pure function of `t`
    pub fn animate(&mut self, t: f32) -> Result<()> {
        let (surface, clipper) = beach::ocean(&self.config.ocean, t)?;
        let ocean = &mut self.quadrics[slot::OCEAN];
        ocean.surface = surface;
        ocean.clipper = clipper;

        self.quadrics[slot::BALL].surface = beach::ball(&self.config.ball, t)?;
        Ok(())
    }

    /// Advance time, animation and camera without drawing
    pub fn tick(&mut self, controller: &dyn Controller) -> Result<FrameInfo> {
        let frame = self.timer.tick();
        self.time = frame.time;

        self.animate(frame.time)?;
        self.camera.update(frame.delta, controller);

        log::trace!(
            "frame {} t={:.3} dt={:.4} camera={:?}",
            frame.number,
            frame.time,
            frame.delta,
            self.camera.position
        );
        Ok(frame)
    }

    /// One full frame: tick, pack, draw
    pub fn update(
        &mut self,
        controller: &dyn Controller,
        renderer: &mut dyn SceneRenderer,
    ) -> Result<FrameInfo> {
        let frame = self.tick(controller)?;
        renderer.draw(&self.uniforms())?;
        Ok(frame)
    }

    /// Rejects a zero dimension and keeps the previous aspect ratio
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(SceneError::DegenerateAspect { width, height });
        }
        self.camera.set_aspect_ratio(width as f32 / height as f32);
        log::debug!(
            "Resized to {}x{} (aspect {:.4})",
            width,
            height,
            self.camera.aspect_ratio()
        );
        Ok(())
    }

    pub fn uniforms(&self) -> SceneUniforms {
        SceneUniforms {
            camera: self.camera.to_uniform(self.time),
            quadrics: self.quadrics.map(|q| q.to_uniform()),
            lights: self.lights.map(|l| l.to_uniform()),
        }
    }

    pub fn quadric(&self, index: usize) -> Result<&Quadric> {
        self.quadrics
            .get(index)
            .ok_or(SceneError::SlotOutOfRange {
                kind: SlotKind::Quadric,
                index,
                capacity: QUADRIC_SLOTS,
            })
    }

    pub fn quadric_mut(&mut self, index: usize) -> Result<&mut Quadric> {
        self.quadrics
            .get_mut(index)
            .ok_or(SceneError::SlotOutOfRange {
                kind: SlotKind::Quadric,
                index,
                capacity: QUADRIC_SLOTS,
            })
    }

    pub fn light(&self, index: usize) -> Result<&Light> {
        self.lights.get(index).ok_or(SceneError::SlotOutOfRange {
            kind: SlotKind::Light,
            index,
            capacity: LIGHT_SLOTS,
        })
    }

    pub fn light_mut(&mut self, index: usize) -> Result<&mut Light> {
        self.lights.get_mut(index).ok_or(SceneError::SlotOutOfRange {
            kind: SlotKind::Light,
            index,
            capacity: LIGHT_SLOTS,
        })
    }

    pub fn quadrics(&self) -> &[Quadric; QUADRIC_SLOTS] {
        &self.quadrics
    }

    pub fn lights(&self) -> &[Light; LIGHT_SLOTS] {
        &self.lights
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Seconds since the first frame as of the latest tick
    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn frame_number(&self) -> u64 {
        self.timer.frame_number()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::ManualClock;
    use crate::core::controller::Button;
    use std::collections::HashSet;
    use std::time::Duration;

    fn scene() -> (Scene<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let scene = Scene::new(SceneConfig::default(), clock.clone()).unwrap();
        (scene, clock)
    }

    #[test]
    fn tick_updates_time_and_animation() {
        let (mut scene, clock) = scene();
        let before = *scene.quadric(slot::OCEAN).unwrap();

        clock.advance(Duration::from_millis(1500));
        let frame = scene.tick(&HashSet::<Button>::new()).unwrap();

        assert!((frame.time - 1.5).abs() < 1e-6);
        assert_eq!(scene.time(), frame.time);
        assert_ne!(*scene.quadric(slot::OCEAN).unwrap(), before);
    }

    #[test]
    fn tick_moves_camera_by_elapsed_time() {
        let (mut scene, clock) = scene();
        let start = scene.camera().position;
        let keys: HashSet<Button> = [Button::Space].into_iter().collect();

        clock.advance(Duration::from_millis(200));
        scene.tick(&keys).unwrap();

        let climbed = scene.camera().position.y - start.y;
        assert!((climbed - 5.0 * 0.2).abs() < 1e-4);
    }

    #[test]
    fn slot_access_is_bounds_checked() {
        let (mut scene, _) = scene();
        assert!(scene.quadric(QUADRIC_SLOTS - 1).is_ok());
        assert!(matches!(
            scene.quadric(QUADRIC_SLOTS),
            Err(SceneError::SlotOutOfRange { kind: SlotKind::Quadric, index: 6, capacity: 6 })
        ));
        assert!(scene.light_mut(LIGHT_SLOTS - 1).is_ok());
        assert!(matches!(
            scene.light(LIGHT_SLOTS),
            Err(SceneError::SlotOutOfRange { kind: SlotKind::Light, index: 8, capacity: 8 })
        ));
    }

    #[test]
    fn lights_can_be_replaced() {
        let (mut scene, _) = scene();
        *scene.light_mut(3).unwrap() = Light::point(glam::Vec3::Y, glam::Vec3::ONE);
        let uniforms = scene.uniforms();
        assert_eq!(uniforms.lights[3].position, [0.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn uniforms_mirror_slots() {
        let (scene, _) = scene();
        let uniforms = scene.uniforms();
        for (packed, quadric) in uniforms.quadrics.iter().zip(scene.quadrics()) {
            assert_eq!(*packed, quadric.to_uniform());
        }
        assert_eq!(uniforms.camera.time, 0.0);
    }
}

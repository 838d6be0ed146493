use crate::body::RigidBody;
use crate::config::{ConfigError, DroneConfig};
use crate::controller::{DroneController, StepEffects};
use crate::input::ControlInput;
use crate::math::Vec3;
use crate::scene::Scene;

pub const DEFAULT_TIMESTEP: f32 = 1.0 / 60.0;

/// Owns the drone body, its controller, and the obstacle scene, and
/// advances them one fixed step at a time. The caller drives the loop;
/// there is no internal clock.
pub struct World {
    pub tick: u64,
    timestep: f32,
    body: RigidBody,
    controller: DroneController,
    scene: Scene,
}

impl World {
    pub fn new(config: DroneConfig, scene: Scene) -> Result<Self, ConfigError> {
        let mass = config.mass;
        let controller = DroneController::from_config(config)?;
        log::info!(
            "world ready: {} propeller slots, sensor {}",
            controller.propellers.len(),
            if controller.sensor.is_some() {
                "fitted"
            } else {
                "absent"
            }
        );

        Ok(Self {
            tick: 0,
            timestep: DEFAULT_TIMESTEP,
            body: RigidBody::new(mass, Vec3::ZERO),
            controller,
            scene,
        })
    }

    pub fn with_timestep(mut self, timestep: f32) -> Self {
        self.timestep = timestep;
        self
    }

    pub fn timestep(&self) -> f32 {
        self.timestep
    }

    pub fn body(&self) -> &RigidBody {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut RigidBody {
        &mut self.body
    }

    pub fn controller(&self) -> &DroneController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut DroneController {
        &mut self.controller
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// One fixed step: controller first (forces, spin, sensor), then the
    /// body integrates. The sensor therefore observes pre-integration
    /// positions, matching a physics engine that runs user callbacks
    /// before its solve.
    pub fn step(&mut self, input: &ControlInput) -> StepEffects {
        self.tick += 1;
        let effects =
            self.controller
                .fixed_update(&mut self.body, &self.scene, input, self.timestep);
        self.body.integrate(self.timestep);
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SensorConfig;
    use crate::layers::LayerMask;
    use crate::math::AXIS_UP;
    use crate::scene::{Aabb, Obstacle};

    fn world_without_gravity(config: DroneConfig, scene: Scene) -> World {
        let mut world = World::new(config, scene).unwrap();
        world.body_mut().gravity = None;
        world
    }

    #[test]
    fn step_advances_the_tick() {
        let mut world = world_without_gravity(DroneConfig::default(), Scene::new());
        assert_eq!(world.tick, 0);
        world.step(&ControlInput::none());
        world.step(&ControlInput::none());
        assert_eq!(world.tick, 2);
    }

    #[test]
    fn lift_for_one_tick_moves_the_body_up() {
        let mut world = world_without_gravity(DroneConfig::default(), Scene::new());
        let input = ControlInput {
            lift: true,
            ..ControlInput::none()
        };

        world.step(&input);

        let dt = world.timestep();
        let expected_velocity = AXIS_UP * (30.0 * dt);
        assert!((world.body().velocity.z - expected_velocity.z).abs() < 1e-6);
        assert!(world.body().position.z > 0.0);
    }

    #[test]
    fn idle_world_without_gravity_stays_put() {
        let mut world = world_without_gravity(DroneConfig::default(), Scene::new());
        world.step(&ControlInput::none());
        assert_eq!(world.body().velocity, Vec3::ZERO);
        assert_eq!(world.body().position, Vec3::ZERO);
    }

    #[test]
    fn sensor_effects_surface_through_step() {
        let scene = Scene::from_obstacles(vec![Obstacle::new(
            "pillar",
            Aabb::new(Vec3::new(4.0, -1.0, -1.0), Vec3::new(5.0, 1.0, 1.0)),
            LayerMask::layer(0),
        )]);
        let config =
            DroneConfig::default().with_sensor(SensorConfig::new().with_mask(LayerMask::layer(0)));
        let mut world = world_without_gravity(config, scene);

        let effects = world.step(&ControlInput::none());

        let cast = effects.sensor.expect("sensor fitted");
        assert_eq!(cast.reading.unwrap().obstacle, "pillar");
    }

    #[test]
    fn invalid_config_fails_construction() {
        let result = World::new(
            DroneConfig::default().with_thrust(f32::INFINITY),
            Scene::new(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn custom_timestep_scales_the_step() {
        let mut world =
            world_without_gravity(DroneConfig::default(), Scene::new()).with_timestep(0.1);
        let input = ControlInput {
            lift: true,
            ..ControlInput::none()
        };

        world.step(&input);
        assert!((world.body().velocity.z - 3.0).abs() < 1e-5);
    }
}

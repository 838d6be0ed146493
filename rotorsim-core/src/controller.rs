use crate::body::RigidBody;
use crate::config::{ConfigError, DroneConfig};
use crate::input::ControlInput;
use crate::math::{AXIS_BACK, AXIS_FORWARD, AXIS_LEFT, AXIS_RIGHT, AXIS_UP};
use crate::propeller::PropellerRig;
use crate::scene::Scene;
use crate::sensor::{ProximitySensor, SensorCast};

/// What one fixed step produced, for the front-end to draw.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StepEffects {
    pub propellers_spun: usize,
    pub sensor: Option<SensorCast>,
}

/// The drone component: force-and-spin control loop, plus an optional
/// proximity sensor. A sensorless drone and a sensing drone are the same
/// type; only `sensor` differs.
#[derive(Debug, Clone, PartialEq)]
pub struct DroneController {
    pub config: DroneConfig,
    pub propellers: PropellerRig,
    pub sensor: Option<ProximitySensor>,
}

impl DroneController {
    pub fn from_config(config: DroneConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let propellers = config.build_rig();
        let sensor = config.sensor.as_ref().map(|sensor| sensor.build());
        Ok(Self {
            config,
            propellers,
            sensor,
        })
    }

    /// One fixed step: per held key, append a constant-magnitude force
    /// along the matching world axis; while lift is held, also spin the
    /// rig; finally run the proximity cast when a sensor is fitted.
    ///
    /// `config.thrust` and `config.spin_speed` are read here, every step,
    /// so external edits take effect on the very next tick.
    pub fn fixed_update(
        &mut self,
        body: &mut RigidBody,
        scene: &Scene,
        input: &ControlInput,
        dt: f32,
    ) -> StepEffects {
        let thrust = self.config.thrust;
        let mut effects = StepEffects::default();

        if input.lift {
            body.apply_force(AXIS_UP * thrust);
            effects.propellers_spun = self.propellers.spin_all(self.config.spin_speed, dt);
        }

        if input.forward {
            body.apply_force(AXIS_FORWARD * thrust);
        }
        if input.backward {
            body.apply_force(AXIS_BACK * thrust);
        }
        if input.left {
            body.apply_force(AXIS_LEFT * thrust);
        }
        if input.right {
            body.apply_force(AXIS_RIGHT * thrust);
        }

        if let Some(sensor) = &self.sensor {
            effects.sensor = Some(sensor.cast(body.position, body.forward(), scene));
        }

        effects
    }
}

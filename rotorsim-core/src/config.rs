use crate::layers::LayerMask;
use crate::math::Vec3;
use crate::propeller::{Propeller, PropellerRig};
use crate::sensor::ProximitySensor;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

pub const DEFAULT_THRUST: f32 = 30.0;
pub const DEFAULT_SPIN_SPEED: f32 = 1000.0;
pub const DEFAULT_SENSOR_RANGE: f32 = 20.0;
pub const DEFAULT_MASS: f32 = 1.0;
pub const DEFAULT_ARM_LENGTH: f32 = 0.25;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NonFinite(&'static str),
    NonPositive(&'static str),
    Negative(&'static str),
    EmptySensorMask,
    Parse(String),
}

impl ConfigError {
    fn message(&self) -> String {
        match self {
            ConfigError::NonFinite(field) => format!("{field} must be finite"),
            ConfigError::NonPositive(field) => format!("{field} must be greater than zero"),
            ConfigError::Negative(field) => format!("{field} must not be negative"),
            ConfigError::EmptySensorMask => "sensor mask matches no layers".to_string(),
            ConfigError::Parse(detail) => format!("invalid config json: {detail}"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl Error for ConfigError {}

/// Mount description for one propeller slot; `None` in the slot list
/// stands for a reference that was never assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropellerSpec {
    pub label: String,
    pub mount: Vec3,
}

impl PropellerSpec {
    pub fn new(label: impl Into<String>, mount: Vec3) -> Self {
        Self {
            label: label.into(),
            mount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorConfig {
    pub mount: Option<Vec3>,
    pub range: f32,
    pub mask: LayerMask,
}

impl SensorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mount(mut self, offset: Vec3) -> Self {
        self.mount = Some(offset);
        self
    }

    pub fn with_range(mut self, range: f32) -> Self {
        self.range = range;
        self
    }

    pub fn with_mask(mut self, mask: LayerMask) -> Self {
        self.mask = mask;
        self
    }

    pub fn build(&self) -> ProximitySensor {
        let mut sensor = ProximitySensor::new(self.range, self.mask);
        if let Some(offset) = self.mount {
            sensor = sensor.with_mount(offset);
        }
        sensor
    }
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            mount: None,
            range: DEFAULT_SENSOR_RANGE,
            mask: LayerMask::ALL,
        }
    }
}

/// Externally editable tuning surface, read fresh every tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DroneConfig {
    pub mass: f32,
    pub thrust: f32,
    pub spin_speed: f32,
    pub propellers: Vec<Option<PropellerSpec>>,
    pub sensor: Option<SensorConfig>,
}

impl DroneConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_thrust(mut self, thrust: f32) -> Self {
        self.thrust = thrust;
        self
    }

    pub fn with_spin_speed(mut self, spin_speed: f32) -> Self {
        self.spin_speed = spin_speed;
        self
    }

    pub fn with_propellers(mut self, propellers: Vec<Option<PropellerSpec>>) -> Self {
        self.propellers = propellers;
        self
    }

    pub fn with_sensor(mut self, sensor: SensorConfig) -> Self {
        self.sensor = Some(sensor);
        self
    }

    pub fn without_sensor(mut self) -> Self {
        self.sensor = None;
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.mass.is_finite() {
            return Err(ConfigError::NonFinite("mass"));
        }
        if self.mass <= 0.0 {
            return Err(ConfigError::NonPositive("mass"));
        }
        if !self.thrust.is_finite() {
            return Err(ConfigError::NonFinite("thrust"));
        }
        if self.thrust < 0.0 {
            return Err(ConfigError::Negative("thrust"));
        }
        if !self.spin_speed.is_finite() {
            return Err(ConfigError::NonFinite("spin_speed"));
        }
        if self.spin_speed < 0.0 {
            return Err(ConfigError::Negative("spin_speed"));
        }

        if let Some(sensor) = &self.sensor {
            if !sensor.range.is_finite() {
                return Err(ConfigError::NonFinite("sensor range"));
            }
            if sensor.range <= 0.0 {
                return Err(ConfigError::NonPositive("sensor range"));
            }
            if sensor.mask.is_empty() {
                return Err(ConfigError::EmptySensorMask);
            }
        }

        for spec in self.propellers.iter().flatten() {
            if !spec.mount.is_finite() {
                return Err(ConfigError::NonFinite("propeller mount"));
            }
        }

        Ok(())
    }

    pub fn build_rig(&self) -> PropellerRig {
        PropellerRig::from_slots(
            self.propellers
                .iter()
                .map(|slot| {
                    slot.as_ref()
                        .map(|spec| Propeller::new(spec.label.clone(), spec.mount))
                })
                .collect(),
        )
    }

    fn quad_specs(arm: f32) -> Vec<Option<PropellerSpec>> {
        PropellerRig::quad(arm)
            .slots()
            .iter()
            .map(|slot| {
                slot.as_ref()
                    .map(|prop| PropellerSpec::new(prop.label.clone(), prop.mount))
            })
            .collect()
    }
}

impl Default for DroneConfig {
    fn default() -> Self {
        Self {
            mass: DEFAULT_MASS,
            thrust: DEFAULT_THRUST,
            spin_speed: DEFAULT_SPIN_SPEED,
            propellers: Self::quad_specs(DEFAULT_ARM_LENGTH),
            sensor: None,
        }
    }
}

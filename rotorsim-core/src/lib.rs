pub mod body;
pub mod config;
pub mod controller;
pub mod fieldgen;
pub mod input;
pub mod layers;
pub mod math;
pub mod propeller;
pub mod scene;
pub mod sensor;
pub mod world;

pub use body::{RigidBody, STANDARD_GRAVITY};
pub use config::{
    ConfigError, DEFAULT_SENSOR_RANGE, DEFAULT_SPIN_SPEED, DEFAULT_THRUST, DroneConfig,
    PropellerSpec, SensorConfig,
};
pub use controller::{DroneController, StepEffects};
pub use fieldgen::ScatteredField;
pub use input::ControlInput;
pub use layers::LayerMask;
pub use math::{AXIS_BACK, AXIS_FORWARD, AXIS_LEFT, AXIS_RIGHT, AXIS_UP, Vec3};
pub use propeller::{Propeller, PropellerRig, SPIN_AXIS};
pub use scene::{Aabb, Obstacle, Ray, RayHit, Scene};
pub use sensor::{DebugRay, ProximitySensor, SensorCast, SensorReading};
pub use world::{DEFAULT_TIMESTEP, World};

use crate::layers::LayerMask;
use crate::math::Vec3;
use crate::scene::{Ray, Scene};

/// Non-physical line handed to the front-end for drawing. Emitted for
/// every cast, hit or miss.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugRay {
    pub origin: Vec3,
    pub direction: Vec3,
    pub length: f32,
    pub hit: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SensorReading {
    pub distance: f32,
    pub obstacle: String,
}

/// Result of one proximity cast: an optional reading plus the debug ray.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorCast {
    pub reading: Option<SensorReading>,
    pub debug_ray: DebugRay,
}

/// Forward-looking range sensor. Purely observational: the reading is
/// logged and surfaced, never fed back into control.
#[derive(Debug, Clone, PartialEq)]
pub struct ProximitySensor {
    /// Ray origin offset relative to the body; unset means the body's own
    /// position.
    pub mount: Option<Vec3>,
    pub range: f32,
    pub mask: LayerMask,
}

impl ProximitySensor {
    pub fn new(range: f32, mask: LayerMask) -> Self {
        Self {
            mount: None,
            range,
            mask,
        }
    }

    pub fn with_mount(mut self, offset: Vec3) -> Self {
        self.mount = Some(offset);
        self
    }

    pub fn origin_for(&self, body_position: Vec3) -> Vec3 {
        match self.mount {
            Some(offset) => body_position + offset,
            None => body_position,
        }
    }

    pub fn cast(&self, body_position: Vec3, forward: Vec3, scene: &Scene) -> SensorCast {
        let origin = self.origin_for(body_position);
        let ray = Ray::new(origin, forward);
        let hit = scene.raycast(ray, self.range, self.mask);

        let reading = hit.map(|hit| {
            log::info!(
                "obstacle {} detected at {:.2} m",
                hit.obstacle,
                hit.distance
            );
            SensorReading {
                distance: hit.distance,
                obstacle: hit.obstacle,
            }
        });

        SensorCast {
            debug_ray: DebugRay {
                origin,
                direction: ray.direction,
                length: self.range,
                hit: reading.is_some(),
            },
            reading,
        }
    }
}

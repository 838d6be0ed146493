use crate::layers::LayerMask;
use crate::math::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        debug_assert!(min.x <= max.x && min.y <= max.y && min.z <= max.z);
        Self { min, max }
    }

    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn contains_point(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub name: String,
    pub bounds: Aabb,
    pub layers: LayerMask,
}

impl Obstacle {
    pub fn new(name: impl Into<String>, bounds: Aabb, layers: LayerMask) -> Self {
        Self {
            name: name.into(),
            bounds,
            layers,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Direction is normalized so hit distances are in world units.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RayHit {
    pub distance: f32,
    pub obstacle: String,
}

/// Flat list of named, layer-tagged obstacle boxes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scene {
    obstacles: Vec<Obstacle>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_obstacles(obstacles: Vec<Obstacle>) -> Self {
        Self { obstacles }
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn add_obstacle(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Returns the nearest obstacle struck by `ray` within `max_range`,
    /// considering only obstacles whose layers intersect `mask`. A ray
    /// starting inside a box reports distance zero. A degenerate ray
    /// direction never hits.
    pub fn raycast(&self, ray: Ray, max_range: f32, mask: LayerMask) -> Option<RayHit> {
        if ray.direction == Vec3::ZERO || max_range <= 0.0 {
            return None;
        }

        let mut nearest: Option<RayHit> = None;
        for obstacle in &self.obstacles {
            if !obstacle.layers.intersects(mask) {
                continue;
            }

            let Some(distance) = ray_aabb_entry(ray, &obstacle.bounds) else {
                continue;
            };
            if distance > max_range {
                continue;
            }

            let closer = nearest
                .as_ref()
                .map_or(true, |hit| distance < hit.distance);
            if closer {
                nearest = Some(RayHit {
                    distance,
                    obstacle: obstacle.name.clone(),
                });
            }
        }

        nearest
    }
}

/// Slab test: entry distance of `ray` into `aabb`, or `None` when the ray
/// misses or the box lies entirely behind the origin.
fn ray_aabb_entry(ray: Ray, aabb: &Aabb) -> Option<f32> {
    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;

    let axes = [
        (ray.origin.x, ray.direction.x, aabb.min.x, aabb.max.x),
        (ray.origin.y, ray.direction.y, aabb.min.y, aabb.max.y),
        (ray.origin.z, ray.direction.z, aabb.min.z, aabb.max.z),
    ];

    for (origin, direction, min, max) in axes {
        if direction.abs() <= f32::EPSILON {
            // Parallel to this slab: the origin must already be inside it.
            if origin < min || origin > max {
                return None;
            }
            continue;
        }

        let inv = 1.0 / direction;
        let (t_near, t_far) = {
            let a = (min - origin) * inv;
            let b = (max - origin) * inv;
            if a <= b { (a, b) } else { (b, a) }
        };

        t_enter = t_enter.max(t_near);
        t_exit = t_exit.min(t_far);
        if t_enter > t_exit {
            return None;
        }
    }

    if t_exit < 0.0 {
        return None;
    }

    Some(t_enter.max(0.0))
}

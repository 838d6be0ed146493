use macroquad::prelude::*;
use rotorsim_core::math::Vec3 as SimVec3;
use rotorsim_core::{PropellerRig, RigidBody, Scene, SensorCast};

/// The simulation is Z-up; macroquad renders Y-up.
pub fn to_render(v: SimVec3) -> Vec3 {
    vec3(v.x, v.z, v.y)
}

fn to_render_size(v: SimVec3) -> Vec3 {
    vec3(v.x, v.z, v.y)
}

#[derive(Debug, Clone)]
pub struct DrawConfig {
    pub body_size: SimVec3,
    pub prop_radius: f32,
    pub prop_lift: f32, // blade height above the mount point
    pub heading_length: f32,
    pub body_color: Color,
    pub heading_color: Color,
    pub prop_color: Color,
    pub obstacle_color: Color,
    pub obstacle_wire_color: Color,
    pub ray_color: Color,
    pub hit_marker_color: Color,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            body_size: SimVec3::new(0.6, 0.6, 0.15),
            prop_radius: 0.22,
            prop_lift: 0.12,
            heading_length: 1.0,
            body_color: WHITE,
            heading_color: SKYBLUE,
            prop_color: LIGHTGRAY,
            obstacle_color: Color::from_rgba(110, 110, 120, 255),
            obstacle_wire_color: DARKGRAY,
            ray_color: RED,
            hit_marker_color: ORANGE,
        }
    }
}

pub fn draw_obstacles(scene: &Scene, config: &DrawConfig) {
    for obstacle in scene.obstacles() {
        let center = to_render(obstacle.bounds.center());
        let size = to_render_size(obstacle.bounds.size());
        draw_cube(center, size, None, config.obstacle_color);
        draw_cube_wires(center, size, config.obstacle_wire_color);
    }
}

pub fn draw_drone(body: &RigidBody, propellers: &PropellerRig, config: &DrawConfig) {
    draw_cube(
        to_render(body.position),
        to_render_size(config.body_size),
        None,
        config.body_color,
    );

    let heading_end = body.position + body.forward() * config.heading_length;
    draw_line_3d(
        to_render(body.position),
        to_render(heading_end),
        config.heading_color,
    );

    for prop in propellers.slots().iter().flatten() {
        let center = body.position + prop.mount + SimVec3::new(0.0, 0.0, config.prop_lift);
        let angle = prop.angle_deg.to_radians();
        let blade = SimVec3::new(angle.cos(), angle.sin(), 0.0) * config.prop_radius;
        let cross = SimVec3::new(-angle.sin(), angle.cos(), 0.0) * config.prop_radius;

        draw_line_3d(
            to_render(center - blade),
            to_render(center + blade),
            config.prop_color,
        );
        draw_line_3d(
            to_render(center - cross),
            to_render(center + cross),
            config.prop_color,
        );
    }
}

/// The debug ray is drawn over its full range whether or not anything was
/// hit; a hit additionally gets a marker at the reported distance.
pub fn draw_sensor(cast: &SensorCast, config: &DrawConfig) {
    let ray = &cast.debug_ray;
    let end = ray.origin + ray.direction * ray.length;
    draw_line_3d(to_render(ray.origin), to_render(end), config.ray_color);

    if let Some(reading) = &cast.reading {
        let point = ray.origin + ray.direction * reading.distance;
        draw_sphere(to_render(point), 0.15, None, config.hit_marker_color);
    }
}

use crate::math::Vec3;

pub const STANDARD_GRAVITY: Vec3 = Vec3::new(0.0, 0.0, -9.81);

/// Point-mass rigid body with a per-step force accumulator.
///
/// Forces appended during a step are consumed by `integrate`, which runs
/// semi-implicit Euler: acceleration feeds velocity first, then velocity
/// feeds position. Orientation is reduced to a heading unit vector in the
/// XY plane; nothing in the control loop applies torque.
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    pub mass: f32,
    pub position: Vec3,
    pub heading: Vec3,
    pub velocity: Vec3,
    pub gravity: Option<Vec3>,
    accumulated_force: Vec3,
}

impl RigidBody {
    pub fn new(mass: f32, position: Vec3) -> Self {
        Self {
            mass,
            position,
            heading: crate::math::AXIS_FORWARD,
            velocity: Vec3::ZERO,
            gravity: Some(STANDARD_GRAVITY),
            accumulated_force: Vec3::ZERO,
        }
    }

    pub fn without_gravity(mut self) -> Self {
        self.gravity = None;
        self
    }

    /// Forces are additive and independent; nothing inspects or cancels
    /// previously applied forces within the same step.
    pub fn apply_force(&mut self, force: Vec3) {
        self.accumulated_force += force;
    }

    /// Net force appended so far this step.
    pub fn pending_force(&self) -> Vec3 {
        self.accumulated_force
    }

    /// Heading, falling back to world forward when the stored vector is
    /// degenerate.
    pub fn forward(&self) -> Vec3 {
        let normalized = self.heading.normalize_or_zero();
        if normalized == Vec3::ZERO {
            crate::math::AXIS_FORWARD
        } else {
            normalized
        }
    }

    pub fn integrate(&mut self, dt: f32) {
        let mut acceleration = self.accumulated_force * (1.0 / self.mass);
        if let Some(gravity) = self.gravity {
            acceleration += gravity;
        }

        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
        self.accumulated_force = Vec3::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::AXIS_UP;

    const DT: f32 = 1.0 / 60.0;

    fn hovering_body() -> RigidBody {
        RigidBody::new(1.0, Vec3::ZERO).without_gravity()
    }

    #[test]
    fn forces_accumulate_additively() {
        let mut body = hovering_body();
        body.apply_force(Vec3::new(1.0, 0.0, 0.0));
        body.apply_force(Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(body.pending_force(), Vec3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn integrate_clears_the_accumulator() {
        let mut body = hovering_body();
        body.apply_force(AXIS_UP * 30.0);
        body.integrate(DT);
        assert_eq!(body.pending_force(), Vec3::ZERO);

        let expected_vz = 30.0 * DT;
        assert!((body.velocity.z - expected_vz).abs() < 1e-6);
    }

    #[test]
    fn mass_scales_acceleration() {
        let mut light = hovering_body();
        let mut heavy = RigidBody::new(2.0, Vec3::ZERO).without_gravity();

        light.apply_force(AXIS_UP * 10.0);
        heavy.apply_force(AXIS_UP * 10.0);
        light.integrate(DT);
        heavy.integrate(DT);

        assert!((light.velocity.z - 2.0 * heavy.velocity.z).abs() < 1e-6);
    }

    #[test]
    fn gravity_pulls_an_idle_body_down() {
        let mut body = RigidBody::new(1.0, Vec3::ZERO);
        body.integrate(DT);
        assert!(body.velocity.z < 0.0);
        assert!(body.position.z < 0.0);
    }

    #[test]
    fn forward_falls_back_when_heading_is_degenerate() {
        let mut body = hovering_body();
        body.heading = Vec3::ZERO;
        assert_eq!(body.forward(), crate::math::AXIS_FORWARD);

        body.heading = Vec3::new(0.0, 3.0, 0.0);
        let forward = body.forward();
        assert!((forward.y - 1.0).abs() < 1e-6);
    }
}

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use fastrand::Rng;

use crate::layers::LayerMask;
use crate::math::Vec3;
use crate::scene::{Aabb, Obstacle, Scene};

/// Seeded obstacle-field generator for the demo scene. Same seed, same
/// field: each box draws from an RNG keyed on the seed and its index.
#[derive(Debug, Clone)]
pub struct ScatteredField {
    seed: u64,
    pub area_half_extent: f32,
    pub clear_radius: f32,
    pub obstacle_count: usize,
    pub layers: LayerMask,
}

impl ScatteredField {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            area_half_extent: 40.0,
            clear_radius: 6.0,
            obstacle_count: 24,
            layers: LayerMask::layer(0),
        }
    }

    pub fn generate(&self) -> Scene {
        let mut scene = Scene::new();
        for index in 0..self.obstacle_count {
            let mut rng = self.rng_for_index(index);
            let center = self.scatter_position(&mut rng);

            let half_x = rng.f32() * 2.0 + 0.5;
            let half_y = rng.f32() * 2.0 + 0.5;
            let height = rng.f32() * 5.0 + 1.0;

            let bounds = Aabb::new(
                Vec3::new(center.x - half_x, center.y - half_y, 0.0),
                Vec3::new(center.x + half_x, center.y + half_y, height),
            );

            scene.add_obstacle(Obstacle::new(format!("box-{index}"), bounds, self.layers));
        }
        scene
    }

    /// Uniform position over the field, re-rolled until it leaves the
    /// spawn area around the origin clear.
    fn scatter_position(&self, rng: &mut Rng) -> Vec3 {
        loop {
            let x = (rng.f32() * 2.0 - 1.0) * self.area_half_extent;
            let y = (rng.f32() * 2.0 - 1.0) * self.area_half_extent;
            let position = Vec3::new(x, y, 0.0);
            if position.length() >= self.clear_radius {
                return position;
            }
        }
    }

    fn rng_for_index(&self, index: usize) -> Rng {
        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        index.hash(&mut hasher);
        Rng::with_seed(hasher.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_reproduces_the_field() {
        let first = ScatteredField::new(42).generate();
        let second = ScatteredField::new(42).generate();
        assert_eq!(first, second);
        assert_eq!(first.obstacles().len(), 24);
    }

    #[test]
    fn different_seeds_diverge() {
        let first = ScatteredField::new(42).generate();
        let second = ScatteredField::new(7).generate();
        assert_ne!(first, second);
    }

    #[test]
    fn spawn_area_stays_clear() {
        let field = ScatteredField::new(42);
        let scene = field.generate();

        for obstacle in scene.obstacles() {
            let center = obstacle.bounds.center();
            let flat = Vec3::new(center.x, center.y, 0.0);
            assert!(flat.length() >= field.clear_radius);
        }
    }

    #[test]
    fn boxes_sit_on_the_ground() {
        let scene = ScatteredField::new(9).generate();
        for obstacle in scene.obstacles() {
            assert_eq!(obstacle.bounds.min.z, 0.0);
            assert!(obstacle.bounds.max.z > 0.0);
        }
    }

    #[test]
    fn generated_obstacles_carry_the_configured_layer() {
        let mut field = ScatteredField::new(1);
        field.layers = LayerMask::layer(4);
        let scene = field.generate();
        assert!(
            scene
                .obstacles()
                .iter()
                .all(|obstacle| obstacle.layers == LayerMask::layer(4))
        );
    }
}

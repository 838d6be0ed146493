use macroquad::prelude::*;
use rotorsim_core::{
    ControlInput, DroneConfig, LayerMask, ScatteredField, SensorConfig, StepEffects, World,
};

mod draw;

use crate::draw::{DrawConfig, to_render};

const FIXED_STEP_SECONDS: f32 = 1.0 / 60.0;
const MAX_STEPS_PER_FRAME: u32 = 5;
const MAX_FRAME_SECONDS: f32 = 0.25;
const FIELD_SEED: u64 = 42;
const OBSTACLE_LAYER: LayerMask = LayerMask::layer(0);
const CAMERA_OFFSET: Vec3 = vec3(-14.0, 9.0, -6.0);

fn poll_input() -> ControlInput {
    ControlInput {
        lift: is_key_down(KeyCode::V),
        forward: is_key_down(KeyCode::W),
        backward: is_key_down(KeyCode::S),
        left: is_key_down(KeyCode::A),
        right: is_key_down(KeyCode::D),
    }
}

struct GameState {
    world: World,
    accumulator: f32,
    last_effects: StepEffects,
    draw: DrawConfig,
}

impl GameState {
    fn new() -> Self {
        let scene = ScatteredField::new(FIELD_SEED).generate();
        log::info!("field seeded: {} obstacles", scene.obstacles().len());

        let config =
            DroneConfig::default().with_sensor(SensorConfig::new().with_mask(OBSTACLE_LAYER));
        let world = World::new(config, scene)
            .unwrap_or_else(|err| panic!("invalid drone configuration: {err}"));

        Self {
            world,
            accumulator: 0.0,
            last_effects: StepEffects::default(),
            draw: DrawConfig::default(),
        }
    }

    fn update(&mut self) {
        self.accumulator += get_frame_time().min(MAX_FRAME_SECONDS);
        let input = poll_input();

        let mut steps = 0;
        while self.accumulator >= FIXED_STEP_SECONDS && steps < MAX_STEPS_PER_FRAME {
            self.last_effects = self.world.step(&input);
            self.accumulator -= FIXED_STEP_SECONDS;
            steps += 1;
        }

        if steps == MAX_STEPS_PER_FRAME {
            // Behind real time; drop the backlog instead of chasing it.
            self.accumulator = 0.0;
        }
    }

    fn render(&self) {
        clear_background(Color::from_rgba(18, 22, 30, 255));

        let body = self.world.body();
        let target = to_render(body.position);
        set_camera(&Camera3D {
            position: target + CAMERA_OFFSET,
            target,
            up: vec3(0.0, 1.0, 0.0),
            ..Default::default()
        });

        draw_grid(40, 2.0, GRAY, DARKGRAY);
        draw::draw_obstacles(self.world.scene(), &self.draw);
        draw::draw_drone(body, &self.world.controller().propellers, &self.draw);
        if let Some(cast) = &self.last_effects.sensor {
            draw::draw_sensor(cast, &self.draw);
        }

        set_default_camera();

        draw_text(&format!("tick: {}", self.world.tick), 20.0, 40.0, 24.0, WHITE);

        let position = body.position;
        draw_text(
            &format!(
                "pos: {:.2}, {:.2}, {:.2}",
                position.x, position.y, position.z
            ),
            20.0,
            64.0,
            24.0,
            WHITE,
        );

        let velocity = body.velocity;
        draw_text(
            &format!(
                "vel: {:.2}, {:.2}, {:.2}",
                velocity.x, velocity.y, velocity.z
            ),
            20.0,
            88.0,
            24.0,
            WHITE,
        );

        let sensor_text = match self
            .last_effects
            .sensor
            .as_ref()
            .and_then(|cast| cast.reading.as_ref())
        {
            Some(reading) => format!("sensor: {} at {:.2} m", reading.obstacle, reading.distance),
            None => "sensor: clear".to_string(),
        };
        draw_text(&sensor_text, 20.0, 112.0, 24.0, WHITE);

        draw_text(
            "V lift / WASD move",
            20.0,
            136.0,
            24.0,
            GRAY,
        );
    }
}

#[macroquad::main("Rotorsim")]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let mut game = GameState::new();

    loop {
        game.update();
        game.render();

        next_frame().await;
    }
}

//! Fireworks demo
//!
//! Headless exercise of the kernel: rockets ease up toward their burst
//! point, burst into sparks on a polar fan, sparks fall under gravity,
//! bounce off the arena walls, and collide elastically with each other.
//! All state lives in [`World`]; frames are driven by the fixed-step
//! accumulator from simulated timestamps. Prints a JSON summary at exit.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use vectile::collision::{self, MovingBody};
use vectile::consts::SIM_DT;
use vectile::frame::{FixedStep, FrameTimer};
use vectile::motion;
use vectile::polar_to_cartesian;
use vectile::surface::{Style, Surface};
use vectile::{Rect, Vec2};

const ARENA: Vec2 = Vec2::new(640.0, 480.0);
const GRAVITY: f64 = 120.0 * SIM_DT;
const ROCKET_EASE: f64 = 0.04;
const BURST_SNAP: f64 = 8.0;
const SPARK_COUNT: u32 = 8;
const SPARK_SPEED: f64 = 90.0;
const SPARK_RADIUS: f64 = 3.0;
const SPARK_LIFE: f64 = 2.5;
const SPAWN_INTERVAL: f64 = 0.75;
const SIM_SECONDS: f64 = 10.0;

struct Rocket {
    body: MovingBody,
    burst_at: Vec2,
}

struct Spark {
    body: MovingBody,
    life: f64,
}

/// All simulation state; the loop owns exactly one of these
struct World {
    bounds: Vec2,
    rockets: Vec<Rocket>,
    sparks: Vec<Spark>,
    rng: Pcg32,
    spawn_timer: f64,
    ticks: u64,
    bursts: u64,
    bounces: u64,
}

#[derive(Serialize)]
struct Summary {
    ticks: u64,
    bursts: u64,
    bounces: u64,
    sparks_alive: usize,
    draw_calls: u64,
}

impl World {
    fn new(seed: u64) -> Self {
        Self {
            bounds: ARENA,
            rockets: Vec::new(),
            sparks: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            spawn_timer: 0.0,
            ticks: 0,
            bursts: 0,
            bounces: 0,
        }
    }

    fn spawn_rocket(&mut self) {
        let x = self.rng.random_range(0.2..0.8) * self.bounds.x;
        let burst_y = self.rng.random_range(0.15..0.45) * self.bounds.y;
        self.rockets.push(Rocket {
            body: MovingBody::new(Vec2::new(x, self.bounds.y), 2.0),
            burst_at: Vec2::new(x, burst_y),
        });
        log::debug!("rocket launched at x={x:.1} bursting at y={burst_y:.1}");
    }

    fn burst(&mut self, at: Vec2) {
        self.bursts += 1;
        for i in 0..SPARK_COUNT {
            let angle = f64::from(i) / f64::from(SPARK_COUNT) * std::f64::consts::TAU;
            let speed = SPARK_SPEED * self.rng.random_range(0.7..1.0);
            let mut body = MovingBody::new(at, SPARK_RADIUS);
            body.vel = polar_to_cartesian(speed, angle);
            self.sparks.push(Spark {
                body,
                life: SPARK_LIFE,
            });
        }
        log::info!("burst #{} at ({:.1}, {:.1})", self.bursts, at.x, at.y);
    }

    fn tick(&mut self) {
        self.ticks += 1;
        self.spawn_timer += SIM_DT;
        if self.spawn_timer >= SPAWN_INTERVAL {
            self.spawn_timer -= SPAWN_INTERVAL;
            self.spawn_rocket();
        }

        // Rockets ease toward their burst point, then pop
        let mut popped = Vec::new();
        for rocket in &mut self.rockets {
            motion::ease_towards(&mut rocket.body, rocket.burst_at, ROCKET_EASE);
            if rocket.body.pos.distance_to(rocket.burst_at) < BURST_SNAP {
                popped.push(rocket.burst_at);
            }
        }
        self.rockets
            .retain(|r| r.body.pos.distance_to(r.burst_at) >= BURST_SNAP);
        for at in popped {
            self.burst(at);
        }

        // Sparks fall, fly, and age out
        for spark in &mut self.sparks {
            motion::apply_gravity(&mut spark.body, GRAVITY);
            motion::integrate(&mut spark.body, SIM_DT);
            spark.life -= SIM_DT;
        }
        self.bounce_off_walls();
        self.collide_sparks();
        self.sparks.retain(|s| s.life > 0.0);
    }

    // Each axis reflects independently so a corner hit flips both
    // velocity components
    fn bounce_off_walls(&mut self) {
        for spark in &mut self.sparks {
            let body = &mut spark.body;
            if body.pos.x - body.radius < 0.0 {
                body.pos.x = body.radius;
                body.vel = collision::reflect(body.vel, Vec2::X);
                self.bounces += 1;
            } else if body.pos.x + body.radius > self.bounds.x {
                body.pos.x = self.bounds.x - body.radius;
                body.vel = collision::reflect(body.vel, -Vec2::X);
                self.bounces += 1;
            }
            if body.pos.y + body.radius > self.bounds.y {
                body.pos.y = self.bounds.y - body.radius;
                body.vel = collision::reflect(body.vel, -Vec2::Y);
                self.bounces += 1;
            }
        }
    }

    fn collide_sparks(&mut self) {
        for i in 0..self.sparks.len() {
            let (head, tail) = self.sparks.split_at_mut(i + 1);
            let a = &mut head[i];
            for b in tail {
                if a.body.overlaps(&b.body) {
                    collision::resolve_elastic(&mut a.body, &mut b.body);
                    collision::separate_circles(&mut a.body, &mut b.body);
                }
            }
        }
    }

    fn draw<S: Surface>(&self, surface: &mut S) {
        let arena = Rect {
            origin: Vec2::ZERO,
            size: self.bounds,
        };
        surface.draw_rect(&arena, &Style::stroked([0.3, 0.3, 0.3, 1.0], 1.0));
        let rocket_style = Style::filled([1.0, 0.9, 0.5, 1.0]);
        for rocket in &self.rockets {
            surface.draw_circle(rocket.body.pos, rocket.body.radius, &rocket_style);
        }
        for spark in &self.sparks {
            let fade = (spark.life / SPARK_LIFE) as f32;
            let style = Style::filled([1.0, 0.5, 0.2, fade]);
            surface.draw_circle(spark.body.pos, spark.body.radius, &style);
        }
    }
}

/// Surface that only counts draw calls; stands in for a real backend
#[derive(Default)]
struct CountingSurface {
    draw_calls: u64,
}

impl Surface for CountingSurface {
    fn draw_circle(&mut self, _center: Vec2, _radius: f64, _style: &Style) {
        self.draw_calls += 1;
    }

    fn draw_rect(&mut self, _rect: &Rect, _style: &Style) {
        self.draw_calls += 1;
    }

    fn draw_polygon(&mut self, _vertices: &[Vec2], _style: &Style) {
        self.draw_calls += 1;
    }
}

fn main() {
    env_logger::init();

    let mut world = World::new(0x5eed);
    let mut timer = FrameTimer::new();
    let mut stepper = FixedStep::new();
    let mut surface = CountingSurface::default();

    // Simulated 60 Hz frame clock
    let frame_dt = 1.0 / 60.0;
    let frames = (SIM_SECONDS / frame_dt) as u64;
    for frame in 0..frames {
        let now = frame as f64 * frame_dt;
        let dt = timer.delta(now);
        for _ in 0..stepper.advance(dt) {
            world.tick();
        }
        world.draw(&mut surface);
    }

    let summary = Summary {
        ticks: world.ticks,
        bursts: world.bursts,
        bounces: world.bounces,
        sparks_alive: world.sparks.len(),
        draw_calls: surface.draw_calls,
    };
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("summary serialization failed: {err}"),
    }
}

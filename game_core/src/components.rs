use glam::Vec2;
use rand::Rng;

use crate::geometry::Aabb;
use crate::GameRng;

/// Which side of the field a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleSide {
    Left,  // AI
    Right, // player
}

/// Paddle component
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: PaddleSide,
    pub y: f32,      // center Y, clamped to field
    pub height: f32, // current height (halved while shortened)
    pub visible: bool,
    pub speed: f32, // step per frame while moving (zero while frozen)
}

impl Paddle {
    pub fn new(side: PaddleSide, y: f32, height: f32, speed: f32) -> Self {
        Self {
            side,
            y,
            height,
            visible: true,
            speed,
        }
    }

    pub fn top(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.y - self.height / 2.0
    }

    pub fn bounds(&self, x: f32, width: f32) -> Aabb {
        Aabb::from_center_size(Vec2::new(x, self.y), Vec2::new(width, self.height))
    }
}

/// Ball component
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self { pos, vel, size }
    }

    /// Ball at `spawn` heading along a random diagonal
    pub fn launch(spawn: Vec2, speed: f32, size: f32, rng: &mut GameRng) -> Self {
        let mut ball = Self::new(spawn, Vec2::ZERO, size);
        ball.reset(spawn, speed, rng);
        ball
    }

    /// Reset ball to `spawn` with velocity (±speed, ±speed)
    pub fn reset(&mut self, spawn: Vec2, speed: f32, rng: &mut GameRng) {
        self.pos = spawn;
        let vx = if rng.0.gen_bool(0.5) { speed } else { -speed };
        let vy = if rng.0.gen_bool(0.5) { speed } else { -speed };
        self.vel = Vec2::new(vx, vy);
    }

    pub fn half_size(&self) -> f32 {
        self.size / 2.0
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.half_size()
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.half_size()
    }

    pub fn top(&self) -> f32 {
        self.pos.y + self.half_size()
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y - self.half_size()
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_size(self.pos, Vec2::splat(self.size))
    }
}

/// Spawn sequence number; the lowest living value is the "first" ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SpawnOrder(pub u64);

/// Movement intent for the player paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = down, 0 = stop, 1 = up
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

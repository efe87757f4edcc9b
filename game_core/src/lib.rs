pub mod components;
pub mod config;
pub mod fsm;
pub mod geometry;
pub mod params;
pub mod resources;
pub mod scene;
pub mod session;
pub mod systems;
pub mod timers;
pub mod unfair;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use geometry::*;
pub use params::*;
pub use resources::*;
pub use scene::*;
pub use session::*;
pub use timers::*;
pub use systems::Key;
pub use unfair::*;

use hecs::World;
use systems::*;

/// Run one frame of ball and paddle simulation
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &Time,
    config: &Config,
    score: &mut Score,
    messages: &mut Messages,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // 1. Move balls
    move_balls(world);

    // 2. Bounce off walls and paddles
    check_collisions(world, config, events);

    // 3. Score and remove balls that left the field
    check_scoring(world, time, config, score, messages, events, rng);

    // 4. Never leave the field empty
    ensure_ball(world, config, rng, events);

    // 5. AI tracks the first ball
    track_ball(world, config);

    // 6. Player paddle follows key state
    move_paddles(world, config);
}

/// Helper to create a paddle entity at its side's starting position
pub fn create_paddle(world: &mut World, config: &Config, side: PaddleSide) -> hecs::Entity {
    let paddle = Paddle::new(
        side,
        config.field_height / 2.0,
        config.paddle_height,
        config.paddle_speed,
    );
    world.spawn((paddle, PaddleIntent::new()))
}

/// Helper to create a ball entity, ordered after every living ball
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    let next = world
        .query::<&SpawnOrder>()
        .iter()
        .map(|(_e, order)| order.0 + 1)
        .max()
        .unwrap_or(0);
    world.spawn((ball, SpawnOrder(next)))
}

/// The oldest ball still in play
pub fn first_ball(world: &World) -> Option<Ball> {
    world
        .query::<(&Ball, &SpawnOrder)>()
        .iter()
        .min_by_key(|(_e, (_ball, order))| **order)
        .map(|(_e, (ball, _order))| *ball)
}

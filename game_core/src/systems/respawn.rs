use crate::{create_ball, Ball, Config, Events, GameRng};
use hecs::World;

/// Keep at least one ball in play: if the last one left the field, launch a
/// fresh one from the center
pub fn ensure_ball(world: &mut World, config: &Config, rng: &mut GameRng, events: &mut Events) {
    if world.query::<&Ball>().iter().next().is_some() {
        return;
    }
    let ball = Ball::launch(
        config.ball_spawn(),
        config.ball_speed_initial,
        config.ball_size,
        rng,
    );
    create_ball(world, ball);
    events.ball_respawned = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_spawns_when_empty() {
        let mut world = World::new();
        let config = Config::new();
        let mut rng = GameRng::default();
        let mut events = Events::new();

        ensure_ball(&mut world, &config, &mut rng, &mut events);

        let balls: Vec<Ball> = world.query::<&Ball>().iter().map(|(_e, b)| *b).collect();
        assert_eq!(balls.len(), 1);
        assert_eq!(balls[0].pos, Vec2::new(400.0, 300.0));
        assert_eq!(balls[0].vel.abs(), Vec2::new(3.0, 3.0));
        assert!(events.ball_respawned);
    }

    #[test]
    fn test_leaves_existing_balls_alone() {
        let mut world = World::new();
        let config = Config::new();
        let mut rng = GameRng::default();
        let mut events = Events::new();
        create_ball(
            &mut world,
            Ball::new(Vec2::new(10.0, 10.0), Vec2::new(1.0, 1.0), 20.0),
        );

        ensure_ball(&mut world, &config, &mut rng, &mut events);

        assert_eq!(world.query::<&Ball>().iter().count(), 1);
        assert!(!events.ball_respawned);
    }
}

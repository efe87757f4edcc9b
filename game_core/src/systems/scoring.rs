use crate::{Ball, Config, Events, GameRng, Messages, Score, Time};
use hecs::{Entity, World};
use rand::seq::SliceRandom;

/// Remove balls that left the field through a side wall and score them.
///
/// Past the right edge scores a point and clears the miss message; past the
/// left edge costs a point and taunts the player.
pub fn check_scoring(
    world: &mut World,
    time: &Time,
    config: &Config,
    score: &mut Score,
    messages: &mut Messages,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let mut exited: Vec<(Entity, bool)> = Vec::new();
    for (entity, ball) in world.query::<&Ball>().iter() {
        if ball.right() > config.field_width {
            exited.push((entity, true));
        } else if ball.left() < 0.0 {
            exited.push((entity, false));
        }
    }

    for (entity, scored) in exited {
        if scored {
            score.increment();
            messages.clear_miss();
            events.player_scored = true;
        } else {
            score.decrement(config.clamp_score);
            if let Some(taunt) = config.miss_messages.choose(&mut rng.0) {
                messages.show_miss(*taunt, time.now);
            }
            events.player_missed = true;
        }
        // Entity came from this frame's query, so it is still alive
        let _ = world.despawn(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    struct Fixture {
        world: World,
        time: Time,
        config: Config,
        score: Score,
        messages: Messages,
        events: Events,
        rng: GameRng,
    }

    impl Fixture {
        fn new(config: Config) -> Self {
            Self {
                world: World::new(),
                time: Time::new(0.016, 3.0),
                config,
                score: Score::new(),
                messages: Messages::new(),
                events: Events::new(),
                rng: GameRng::new(12345),
            }
        }

        fn ball(&mut self, x: f32, vx: f32) {
            let size = self.config.ball_size;
            create_ball(
                &mut self.world,
                Ball::new(Vec2::new(x, 300.0), Vec2::new(vx, 0.0), size),
            );
        }

        fn run(&mut self) {
            check_scoring(
                &mut self.world,
                &self.time,
                &self.config,
                &mut self.score,
                &mut self.messages,
                &mut self.events,
                &mut self.rng,
            );
        }

        fn ball_count(&self) -> usize {
            self.world.query::<&Ball>().iter().count()
        }
    }

    #[test]
    fn test_right_exit_scores_and_clears_taunt() {
        let mut f = Fixture::new(Config::new());
        f.messages.show_miss("old", 2.0);
        f.ball(795.0, 3.0);

        f.run();

        assert_eq!(f.score.value, 1);
        assert!(f.messages.miss.is_none());
        assert!(f.events.player_scored);
        assert_eq!(f.ball_count(), 0, "Exited ball is removed");
    }

    #[test]
    fn test_left_exit_costs_point_and_taunts() {
        let mut f = Fixture::new(Config::countdown_variant());
        f.ball(5.0, -3.0);

        f.run();

        assert_eq!(f.score.value, -1, "Countdown variant allows negative score");
        let miss = f.messages.miss.clone().expect("taunt shown");
        assert_eq!(miss.text, "Lol you're such a noob");
        assert_eq!(miss.set_at, 3.0);
        assert!(f.events.player_missed);
    }

    #[test]
    fn test_left_exit_floors_at_zero_when_clamped() {
        let mut f = Fixture::new(Config::key_start_variant());
        f.ball(5.0, -3.0);

        f.run();

        assert_eq!(f.score.value, 0);
        let taunt = f.messages.miss.clone().expect("taunt shown").text;
        assert!(f.config.miss_messages.iter().any(|m| *m == taunt));
    }

    #[test]
    fn test_ball_in_bounds_is_untouched() {
        let mut f = Fixture::new(Config::new());
        f.ball(400.0, 3.0);

        f.run();

        assert_eq!(f.score.value, 0);
        assert_eq!(f.ball_count(), 1);
        assert!(!f.events.player_scored && !f.events.player_missed);
    }

    #[test]
    fn test_several_exits_in_one_frame() {
        let mut f = Fixture::new(Config::countdown_variant());
        f.ball(795.0, 3.0);
        f.ball(796.0, 3.0);
        f.ball(5.0, -3.0);
        f.ball(400.0, 3.0);

        f.run();

        assert_eq!(f.score.value, 1);
        assert_eq!(f.ball_count(), 1);
    }
}

use crate::{Ball, Config, Events, Paddle, PaddleSide};
use glam::Vec2;
use hecs::World;

/// Reflect off a paddle: invert X, then push both components one
/// `increment` further along their direction of travel
pub fn paddle_hit_velocity(vel: Vec2, increment: f32) -> Vec2 {
    let vx = -vel.x;
    let vx = vx + if vx > 0.0 { increment } else { -increment };
    let vy = vel.y + if vel.y > 0.0 { increment } else { -increment };
    Vec2::new(vx, vy)
}

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle bounds first so balls can be borrowed mutably
    let paddles: Vec<_> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.bounds(config.paddle_x(p.side), config.paddle_width)))
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Top/bottom walls; only flip when heading outward so a ball that
        // is still past the wall next frame does not flip back
        if ball.top() > config.field_height && ball.vel.y > 0.0 {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        } else if ball.bottom() < 0.0 && ball.vel.y < 0.0 {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }

        let bounds = ball.bounds();
        for (side, paddle_bounds) in &paddles {
            let approaching = match side {
                PaddleSide::Left => ball.vel.x < 0.0,
                PaddleSide::Right => ball.vel.x > 0.0,
            };
            if approaching && bounds.intersects(paddle_bounds) {
                ball.vel = paddle_hit_velocity(ball.vel, config.ball_speed_increment);
                events.ball_hit_paddle = true;
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};

    fn setup_world() -> (World, Config, Events) {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, &config, PaddleSide::Left);
        create_paddle(&mut world, &config, PaddleSide::Right);
        (world, config, Events::new())
    }

    fn only_ball(world: &World) -> Ball {
        let mut query = world.query::<&Ball>();
        let (_e, ball) = query.iter().next().expect("ball");
        *ball
    }

    #[test]
    fn test_paddle_hit_adds_increment_to_both_axes() {
        let cases = [
            Vec2::new(3.0, 3.0),
            Vec2::new(-3.0, 3.0),
            Vec2::new(3.0, -3.0),
            Vec2::new(-4.5, -4.5),
        ];
        for vel in cases {
            let hit = paddle_hit_velocity(vel, 0.1);
            assert_eq!(hit.x.signum(), -vel.x.signum(), "X is inverted");
            assert_eq!(hit.y.signum(), vel.y.signum(), "Y keeps its sign");
            assert!((hit.x.abs() - vel.x.abs() - 0.1).abs() < 1e-5);
            assert!((hit.y.abs() - vel.y.abs() - 0.1).abs() < 1e-5);
        }
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, config, mut events) = setup_world();
        create_ball(
            &mut world,
            Ball::new(Vec2::new(400.0, 595.0), Vec2::new(3.0, 3.0), config.ball_size),
        );

        check_collisions(&mut world, &config, &mut events);

        let ball = only_ball(&world);
        assert_eq!(ball.vel, Vec2::new(3.0, -3.0));
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, config, mut events) = setup_world();
        create_ball(
            &mut world,
            Ball::new(Vec2::new(400.0, 5.0), Vec2::new(-3.0, -3.0), config.ball_size),
        );

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(only_ball(&world).vel, Vec2::new(-3.0, 3.0));
    }

    #[test]
    fn test_ball_collides_with_right_paddle() {
        let (mut world, config, mut events) = setup_world();
        // Right paddle spans x 780..790, y 250..350
        create_ball(
            &mut world,
            Ball::new(Vec2::new(772.0, 300.0), Vec2::new(3.0, 3.0), config.ball_size),
        );

        check_collisions(&mut world, &config, &mut events);

        let ball = only_ball(&world);
        assert!((ball.vel.x + 3.1).abs() < 1e-5);
        assert!((ball.vel.y - 3.1).abs() < 1e-5);
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_collides_with_left_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_ball(
            &mut world,
            Ball::new(Vec2::new(28.0, 300.0), Vec2::new(-3.0, -3.0), config.ball_size),
        );

        check_collisions(&mut world, &config, &mut events);

        let ball = only_ball(&world);
        assert!((ball.vel.x - 3.1).abs() < 1e-5);
        assert!((ball.vel.y + 3.1).abs() < 1e-5);
    }

    #[test]
    fn test_receding_ball_is_not_reflected_again() {
        let (mut world, config, mut events) = setup_world();
        create_ball(
            &mut world,
            Ball::new(Vec2::new(772.0, 300.0), Vec2::new(-3.1, 3.1), config.ball_size),
        );

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(only_ball(&world).vel, Vec2::new(-3.1, 3.1));
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_hidden_paddle_still_collides() {
        let (mut world, config, mut events) = setup_world();
        for (_e, paddle) in world.query_mut::<&mut Paddle>() {
            paddle.visible = false;
        }
        create_ball(
            &mut world,
            Ball::new(Vec2::new(772.0, 300.0), Vec2::new(3.0, 0.0), config.ball_size),
        );

        check_collisions(&mut world, &config, &mut events);

        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_no_collision_when_paddle_elsewhere() {
        let (mut world, config, mut events) = setup_world();
        for (_e, paddle) in world.query_mut::<&mut Paddle>() {
            paddle.y = 100.0;
        }
        create_ball(
            &mut world,
            Ball::new(Vec2::new(772.0, 300.0), Vec2::new(3.0, 0.0), config.ball_size),
        );

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(only_ball(&world).vel, Vec2::new(3.0, 0.0));
        assert!(!events.ball_hit_paddle);
    }
}

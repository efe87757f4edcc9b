use crate::{
    create_ball, Ball, Config, DeferredEffect, GameRng, Paddle, PaddleSide, Timers, UnfairEvent,
};
use hecs::World;

/// Apply an unfair event and schedule its undo, if it has one
pub fn apply_unfair_event(
    world: &mut World,
    event: UnfairEvent,
    config: &Config,
    rng: &mut GameRng,
    timers: &mut Timers,
) {
    match event {
        UnfairEvent::ShortenPaddle => {
            with_player_paddle(world, |paddle| {
                paddle.height = config.paddle_height / 2.0;
            });
            timers.schedule(DeferredEffect::RestorePaddleHeight, config.shorten_duration);
        }
        UnfairEvent::MultiplyBall => {
            for _ in 0..config.extra_balls {
                let ball = Ball::launch(
                    config.ball_spawn(),
                    config.ball_speed_initial,
                    config.ball_size,
                    rng,
                );
                create_ball(world, ball);
            }
        }
        UnfairEvent::SpeedUpBall => {
            for (_entity, ball) in world.query_mut::<&mut Ball>() {
                ball.vel *= config.speed_up_factor;
            }
        }
        UnfairEvent::HidePaddle => {
            with_player_paddle(world, |paddle| paddle.visible = false);
            timers.schedule(DeferredEffect::ShowPaddle, config.hide_duration);
        }
        UnfairEvent::FreezePaddle => {
            with_player_paddle(world, |paddle| paddle.speed = 0.0);
            timers.schedule(DeferredEffect::RestorePaddleSpeed, config.freeze_duration);
        }
    }
}

/// Undo a paddle handicap. Restores to defaults, so firing twice or after
/// the round ended changes nothing.
pub fn restore_paddle(world: &mut World, effect: DeferredEffect, config: &Config) {
    match effect {
        DeferredEffect::RestorePaddleHeight => with_player_paddle(world, |paddle| {
            paddle.height = config.paddle_height;
            paddle.y = config.clamp_paddle_y(paddle.y, paddle.height);
        }),
        DeferredEffect::ShowPaddle => with_player_paddle(world, |paddle| paddle.visible = true),
        DeferredEffect::RestorePaddleSpeed => {
            with_player_paddle(world, |paddle| paddle.speed = config.paddle_speed)
        }
        DeferredEffect::CloseSession => {}
    }
}

fn with_player_paddle(world: &mut World, mut f: impl FnMut(&mut Paddle)) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == PaddleSide::Right {
            f(paddle);
        }
    }
}

use crate::{first_ball, Config, Paddle, PaddleSide};
use hecs::World;

/// Left paddle chases the first ball's height by a fixed step per frame
pub fn track_ball(world: &mut World, config: &Config) {
    let Some(target_y) = first_ball(world).map(|ball| ball.pos.y) else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != PaddleSide::Left {
            continue;
        }
        if paddle.y < target_y {
            paddle.y += config.ai_step;
        } else if paddle.y > target_y {
            paddle.y -= config.ai_step;
        }
        paddle.y = config.clamp_paddle_y(paddle.y, paddle.height);
    }
}

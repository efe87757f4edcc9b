use crate::{Ball, Config, Paddle, PaddleIntent};
use hecs::World;

/// Move every ball by its per-frame velocity
pub fn move_balls(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

/// Apply player paddle movement from its intent
pub fn move_paddles(world: &mut World, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.dir != 0 {
            paddle.y += intent.dir as f32 * paddle.speed;
        }
        // Clamp even when idle; a height change can push a paddle off screen
        paddle.y = config.clamp_paddle_y(paddle.y, paddle.height);
    }
}

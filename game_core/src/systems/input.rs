use crate::{Paddle, PaddleIntent, PaddleSide};
use hecs::World;

/// Keys the session reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Other,
}

/// Set the player paddle direction while an arrow key is held
pub fn apply_key_down(world: &mut World, key: Key) {
    let dir = match key {
        Key::Up => 1,
        Key::Down => -1,
        Key::Other => return,
    };
    set_player_dir(world, dir);
}

/// Releasing either arrow stops the player paddle
pub fn apply_key_up(world: &mut World, key: Key) {
    if matches!(key, Key::Up | Key::Down) {
        set_player_dir(world, 0);
    }
}

fn set_player_dir(world: &mut World, dir: i8) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.side == PaddleSide::Right {
            intent.dir = dir;
        }
    }
}

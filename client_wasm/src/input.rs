//! Keyboard input handling

use game_core::Key;

/// Map a DOM `KeyboardEvent.key` value to a session key
pub fn key_from_name(key: &str) -> Key {
    match key {
        "ArrowUp" | "Up" => Key::Up,
        "ArrowDown" | "Down" => Key::Down,
        _ => Key::Other,
    }
}

/// Keys whose browser default (page scrolling) should be suppressed
pub fn should_prevent_default(key: &str) -> bool {
    key_from_name(key) != Key::Other || key == " "
}

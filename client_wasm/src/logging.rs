//! Browser console logging
//!
//! `console_log!` / `console_error!` format like `println!` and write to the
//! browser console. Off the web (unit tests) they go to stderr.

use game_core::{Events, SessionPhase};

#[macro_export]
macro_rules! console_log {
    ($($t:tt)*) => ($crate::logging::log(&format!($($t)*)))
}

#[macro_export]
macro_rules! console_error {
    ($($t:tt)*) => ($crate::logging::error(&format!($($t)*)))
}

pub fn log(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{msg}");
}

pub fn error(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("ERROR: {msg}");
}

/// One line per noteworthy thing that happened this frame. Wall and paddle
/// bounces are too frequent to log.
pub fn describe_events(events: &Events, score: i32) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(phase) = events.phase_changed {
        lines.push(match phase {
            SessionPhase::Playing => "Session: play started".to_string(),
            SessionPhase::Won => format!("Session: won with score {score}"),
            other => format!("Session: entered {other:?}"),
        });
    }
    if events.player_scored {
        lines.push(format!("Score: point scored, now {score}"));
    }
    if events.player_missed {
        lines.push(format!("Score: ball missed, now {score}"));
    }
    if events.ball_respawned {
        lines.push("Ball: respawned at center".to_string());
    }
    if let Some(event) = events.unfair_event {
        lines.push(format!("Unfair event: {event:?}"));
    }
    lines
}

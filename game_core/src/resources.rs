use crate::{SessionPhase, UnfairEvent};

/// Time resource for tracking session time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this frame
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 0.016,
            now: 0.0,
        }
    }
}

/// Player score; may go negative unless clamped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub value: i32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self) {
        self.value += 1;
    }

    pub fn decrement(&mut self, clamp_at_zero: bool) {
        self.value -= 1;
        if clamp_at_zero {
            self.value = self.value.max(0);
        }
    }

    pub fn has_won(&self, win_score: i32) -> bool {
        self.value >= win_score
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Short-lived on-screen text
#[derive(Debug, Clone, PartialEq)]
pub struct TransientMessage {
    pub text: String,
    pub set_at: f32,
}

/// The two transient message slots shown over the field
#[derive(Debug, Clone, Default)]
pub struct Messages {
    pub miss: Option<TransientMessage>,
    pub event: Option<TransientMessage>,
}

impl Messages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_miss(&mut self, text: impl Into<String>, now: f32) {
        self.miss = Some(TransientMessage {
            text: text.into(),
            set_at: now,
        });
    }

    pub fn show_event(&mut self, text: impl Into<String>, now: f32) {
        self.event = Some(TransientMessage {
            text: text.into(),
            set_at: now,
        });
    }

    pub fn clear_miss(&mut self) {
        self.miss = None;
    }

    /// Drop every message shown for at least `duration` seconds
    pub fn expire(&mut self, now: f32, duration: f32) {
        for slot in [&mut self.miss, &mut self.event] {
            if slot.as_ref().is_some_and(|m| now - m.set_at >= duration) {
                *slot = None;
            }
        }
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub player_scored: bool,
    pub player_missed: bool,
    pub ball_respawned: bool,
    pub unfair_event: Option<UnfairEvent>,
    pub phase_changed: Option<SessionPhase>,
    pub session_closed: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

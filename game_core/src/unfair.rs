use rand::seq::SliceRandom;

use crate::GameRng;

/// Randomized handicaps thrown at the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnfairEvent {
    ShortenPaddle,
    MultiplyBall,
    SpeedUpBall,
    HidePaddle,
    FreezePaddle,
}

impl UnfairEvent {
    pub const ALL: [UnfairEvent; 5] = [
        UnfairEvent::ShortenPaddle,
        UnfairEvent::MultiplyBall,
        UnfairEvent::SpeedUpBall,
        UnfairEvent::HidePaddle,
        UnfairEvent::FreezePaddle,
    ];

    /// Announcement shown while the event is fresh
    pub fn message(self) -> &'static str {
        match self {
            UnfairEvent::ShortenPaddle => "Your paddle shrank!",
            UnfairEvent::MultiplyBall => "Multiball!",
            UnfairEvent::SpeedUpBall => "Speed up!",
            UnfairEvent::HidePaddle => "Where did your paddle go?",
            UnfairEvent::FreezePaddle => "Paddle frozen!",
        }
    }
}

/// Decides when the next event fires and which one it is
#[derive(Debug, Clone, Default)]
pub struct EventDirector {
    elapsed: f32,
    last: Option<UnfairEvent>,
}

impl EventDirector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<UnfairEvent> {
        self.last
    }

    /// Advance the cadence clock; true once per elapsed `interval`
    pub fn tick(&mut self, dt: f32, interval: f32) -> bool {
        self.elapsed += dt;
        if self.elapsed >= interval {
            self.elapsed -= interval;
            true
        } else {
            false
        }
    }

    /// Pick uniformly among `enabled`, never repeating the previous pick.
    /// Returns `None` if nothing but the previous event is available.
    pub fn choose(&mut self, enabled: &[UnfairEvent], rng: &mut GameRng) -> Option<UnfairEvent> {
        let candidates: Vec<UnfairEvent> = enabled
            .iter()
            .copied()
            .filter(|e| Some(*e) != self.last)
            .collect();
        let event = candidates.choose(&mut rng.0).copied()?;
        self.last = Some(event);
        Some(event)
    }
}

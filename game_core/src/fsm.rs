//! Session State Machine
//!
//! `Countdown | WaitingForKey -> Playing -> Won -> Closed`. Closing is
//! allowed from any live phase so a manual window close always lands.

use crate::StartGate;

/// Session phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Countdown,
    WaitingForKey,
    Playing,
    Won,
    Closed,
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    CountdownDone,
    KeyPressed,
    ReachedWinScore,
    Close,
}

/// Result of a phase transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from: SessionPhase,
    pub to: SessionPhase,
    pub action: SessionAction,
}

/// Session finite state machine
#[derive(Debug, Clone)]
pub struct SessionFsm {
    phase: SessionPhase,
}

impl SessionFsm {
    pub fn new(start_gate: StartGate) -> Self {
        let phase = match start_gate {
            StartGate::Countdown(_) => SessionPhase::Countdown,
            StartGate::AnyKey => SessionPhase::WaitingForKey,
        };
        Self { phase }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn can_transition(&self, action: SessionAction) -> bool {
        self.next_phase(action).is_some()
    }

    /// Attempt a transition; invalid actions leave the phase unchanged
    pub fn transition(&mut self, action: SessionAction) -> TransitionResult {
        let from = self.phase;
        match self.next_phase(action) {
            Some(to) => {
                self.phase = to;
                TransitionResult {
                    success: true,
                    from,
                    to,
                    action,
                }
            }
            None => TransitionResult {
                success: false,
                from,
                to: from,
                action,
            },
        }
    }

    fn next_phase(&self, action: SessionAction) -> Option<SessionPhase> {
        use SessionAction as A;
        use SessionPhase as P;

        match (self.phase, action) {
            (P::Countdown, A::CountdownDone) => Some(P::Playing),
            (P::WaitingForKey, A::KeyPressed) => Some(P::Playing),
            (P::Playing, A::ReachedWinScore) => Some(P::Won),
            (P::Closed, A::Close) => None,
            (_, A::Close) => Some(P::Closed),
            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == SessionPhase::Playing
    }

    pub fn is_pre_game(&self) -> bool {
        matches!(
            self.phase,
            SessionPhase::Countdown | SessionPhase::WaitingForKey
        )
    }
}

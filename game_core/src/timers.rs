/// A delayed one-shot action, keyed by the effect it undoes or performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeferredEffect {
    RestorePaddleHeight,
    ShowPaddle,
    RestorePaddleSpeed,
    CloseSession,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    effect: DeferredEffect,
    t_left: f32,
}

/// Pending deferred effects, at most one per effect
#[derive(Debug, Clone, Default)]
pub struct Timers {
    pending: Vec<Pending>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `effect` to fire after `delay` seconds. Re-scheduling a
    /// pending effect replaces its deadline.
    pub fn schedule(&mut self, effect: DeferredEffect, delay: f32) {
        match self.pending.iter_mut().find(|p| p.effect == effect) {
            Some(p) => p.t_left = delay,
            None => self.pending.push(Pending {
                effect,
                t_left: delay,
            }),
        }
    }

    pub fn is_pending(&self, effect: DeferredEffect) -> bool {
        self.pending.iter().any(|p| p.effect == effect)
    }

    #[cfg(test)]
    pub fn remaining(&self, effect: DeferredEffect) -> Option<f32> {
        self.pending
            .iter()
            .find(|p| p.effect == effect)
            .map(|p| p.t_left)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Advance all timers by `dt` and return the effects that came due,
    /// in scheduling order
    pub fn tick(&mut self, dt: f32) -> Vec<DeferredEffect> {
        let mut due = Vec::new();
        self.pending.retain_mut(|p| {
            p.t_left -= dt;
            if p.t_left <= 0.0 {
                due.push(p.effect);
                false
            } else {
                true
            }
        });
        due
    }
}

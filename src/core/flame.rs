use super::constants::*;

/// Whether the flame is resting at its floor or burning above it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlamePhase {
    Active,
    AtFloor,
}

/// Owns the scalar flame level and its decay clock.
///
/// The level is unbounded above and floored at [`FLAME_MIN`]; every mutation
/// preserves `level >= FLAME_MIN`. Timestamps are plain wall-clock
/// milliseconds so the engine stays platform-independent.
pub struct FlameEngine {
    level: f64,
    last_decay_ms: f64,
}

impl FlameEngine {
    pub fn new(now_ms: f64) -> Self {
        Self {
            level: FLAME_INITIAL,
            last_decay_ms: now_ms,
        }
    }

    #[inline]
    pub fn level(&self) -> f64 {
        self.level
    }

    #[inline]
    pub fn phase(&self) -> FlamePhase {
        if self.level > FLAME_MIN {
            FlamePhase::Active
        } else {
            FlamePhase::AtFloor
        }
    }

    /// Add `amount` to the level. No upper bound; callers pass values from
    /// the tier boost table, which are non-negative by construction.
    pub fn increase(&mut self, amount: f64) {
        debug_assert!(amount >= 0.0);
        self.level += amount;
    }

    /// Apply at most one decay step if the decay interval has elapsed.
    ///
    /// Called from a coarse 1-second poll; calls between threshold crossings
    /// change nothing, and the clock resets only when a step is applied.
    /// One step removes `max(level * DECAY_RATE, MIN_DECAY_STEP)` but never
    /// takes the level below [`FLAME_MIN`].
    pub fn tick_decay(&mut self, now_ms: f64) -> bool {
        if now_ms - self.last_decay_ms < DECAY_INTERVAL_MS {
            return false;
        }
        let step = (self.level * DECAY_RATE).max(MIN_DECAY_STEP);
        self.level = (self.level - step).max(FLAME_MIN);
        self.last_decay_ms = now_ms;
        true
    }

    /// Milliseconds since the last applied decay step.
    #[inline]
    pub fn since_last_decay_ms(&self, now_ms: f64) -> f64 {
        now_ms - self.last_decay_ms
    }
}

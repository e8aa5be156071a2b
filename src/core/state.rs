use super::embers::{EmberQueue, EmberScrap};
use super::flame::FlameEngine;
use glam::Vec2;

/// Owns the whole session state: the flame engine and the live ember set.
///
/// Mutations go through one entrypoint per logical transition, so the state
/// machine is unit-testable without any rendering harness.
pub struct Campfire {
    pub flame: FlameEngine,
    pub embers: EmberQueue,
}

impl Campfire {
    pub fn new(now_ms: f64) -> Self {
        Self {
            flame: FlameEngine::new(now_ms),
            embers: EmberQueue::new(),
        }
    }

    /// One submission: validate, create the scrap, boost the flame by the
    /// scrap's tier. A rejected (empty) submission changes nothing and the
    /// flame is not touched.
    pub fn throw_memo(
        &mut self,
        text: &str,
        origin: Vec2,
        target: Vec2,
        now_ms: f64,
    ) -> Option<EmberScrap> {
        let scrap = self.embers.submit(text, origin, target, now_ms)?.clone();
        self.flame.increase(scrap.intensity.boost());
        Some(scrap)
    }

    /// Periodic decay poll; returns true when a step was applied.
    pub fn tick_decay(&mut self, now_ms: f64) -> bool {
        self.flame.tick_decay(now_ms)
    }

    /// Expiry of one scrap, keyed by id. Idempotent.
    pub fn expire_ember(&mut self, id: u64) {
        self.embers.expire(id);
    }

    #[inline]
    pub fn level(&self) -> f64 {
        self.flame.level()
    }
}

use super::constants::*;
use glam::Vec2;

/// Discrete intensity rank of a submitted note, derived once from its
/// trimmed character count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Intensity {
    Low,
    Medium,
    High,
}

impl Intensity {
    pub fn from_char_count(len: usize) -> Self {
        if len < SHORT_TEXT_THRESHOLD {
            Intensity::Low
        } else if len < MEDIUM_TEXT_THRESHOLD {
            Intensity::Medium
        } else {
            Intensity::High
        }
    }

    /// Flame boost for this tier. A fixed table, not a formula.
    pub fn boost(self) -> f64 {
        match self {
            Intensity::Low => BOOST_LOW,
            Intensity::Medium => BOOST_MEDIUM,
            Intensity::High => BOOST_HIGH,
        }
    }

    pub fn rank(self) -> u8 {
        match self {
            Intensity::Low => 1,
            Intensity::Medium => 2,
            Intensity::High => 3,
        }
    }
}

/// One submitted note in flight toward the fire.
///
/// Immutable after creation; both coordinates are captured at submit time so
/// a mid-flight window resize does not alter the trajectory.
#[derive(Clone, Debug)]
pub struct EmberScrap {
    pub id: u64,
    pub text: String,
    pub intensity: Intensity,
    pub origin: Vec2,
    pub target: Vec2,
    pub created_ms: f64,
}

/// Insertion-ordered live set of ember scraps.
pub struct EmberQueue {
    scraps: Vec<EmberScrap>,
    next_id: u64,
}

impl Default for EmberQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl EmberQueue {
    pub fn new() -> Self {
        Self {
            scraps: Vec::new(),
            next_id: 0,
        }
    }

    /// Create a scrap for `text`, or `None` when the trimmed text is empty.
    ///
    /// Rejected submissions change nothing; the caller must then skip the
    /// paired flame increase as well. Display text longer than
    /// [`MAX_DISPLAY_CHARS`] characters is cut there with an ellipsis
    /// appended. The returned record's expiry (after
    /// [`EMBER_REMOVAL_DELAY_MS`]) is scheduled by the submission glue.
    pub fn submit(
        &mut self,
        text: &str,
        origin: Vec2,
        target: Vec2,
        now_ms: f64,
    ) -> Option<&EmberScrap> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        let char_count = trimmed.chars().count();
        let display = if char_count > MAX_DISPLAY_CHARS {
            let mut s: String = trimmed.chars().take(MAX_DISPLAY_CHARS).collect();
            s.push('…');
            s
        } else {
            trimmed.to_string()
        };
        let id = self.next_id;
        self.next_id += 1;
        self.scraps.push(EmberScrap {
            id,
            text: display,
            intensity: Intensity::from_char_count(char_count),
            origin,
            target,
            created_ms: now_ms,
        });
        self.scraps.last()
    }

    /// Remove the scrap with `id` if still present. Idempotent, so a late or
    /// duplicate expiry callback is harmless.
    pub fn expire(&mut self, id: u64) {
        self.scraps.retain(|s| s.id != id);
    }

    #[inline]
    pub fn live(&self) -> &[EmberScrap] {
        &self.scraps
    }

    /// Point-in-time copy for the renderer; mutations after this call are
    /// not reflected in the returned vector.
    pub fn snapshot(&self) -> Vec<EmberScrap> {
        self.scraps.clone()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.scraps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.scraps.is_empty()
    }
}

// Behavioral tuning constants shared by the flame engine, ember queue and
// their derived visual projections. Presentation-only values live in the
// glue-side `constants.rs`.

// Flame level
pub const FLAME_INITIAL: f64 = 20.0; // level at session start
pub const FLAME_MIN: f64 = 10.0; // floor; the fire never fully dies

// Decay
pub const DECAY_INTERVAL_MS: f64 = 5.0 * 60.0 * 1000.0; // one step per 5 minutes
pub const DECAY_RATE: f64 = 0.2; // fraction of current level lost per step
pub const MIN_DECAY_STEP: f64 = 5.0; // proportional step never shrinks below this

// Intensity tiers (trimmed character count)
pub const SHORT_TEXT_THRESHOLD: usize = 20; // below: tier 1
pub const MEDIUM_TEXT_THRESHOLD: usize = 80; // below: tier 2, at or above: tier 3
pub const MAX_DISPLAY_CHARS: usize = 140; // longer text is truncated with an ellipsis

// Flame boost per tier
pub const BOOST_LOW: f64 = 15.0;
pub const BOOST_MEDIUM: f64 = 25.0;
pub const BOOST_HIGH: f64 = 35.0;

// Ember flight
pub const EMBER_FLIGHT_DURATION_MS: f64 = 4000.0; // nominal visual flight time
pub const EMBER_REMOVAL_DELAY_MS: f64 = 3200.0; // model removes the record before the visual ends

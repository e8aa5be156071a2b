/// Presentation and layout tuning constants.
///
/// These cover where things sit on screen and how the glue behaves; the
/// behavioral constants (decay, tiers, timings) live in `core/constants.rs`.
// Campfire placement (percent of viewport)
pub const CAMPFIRE_X_DESKTOP_PCT: f64 = 65.0;
pub const CAMPFIRE_Y_PCT: f64 = 80.0;

// Memo pad
pub const MEMO_ORIGIN_OFFSET: f64 = 0.1; // origin sits this far down the pad image
pub const ORIGIN_FALLBACK_FROM_BOTTOM: f64 = 200.0; // used when the pad image is missing

// Form factor
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

// Input guard
pub const SUBMIT_COOLDOWN_MS: f64 = 500.0; // drop rapid-fire repeat submits

// Timers
pub const DECAY_POLL_INTERVAL_MS: i32 = 1000; // coarse poll; the engine decides when to step

// Glow styling
pub const GLOW_BLUR_PX: f32 = 40.0;
pub const GLOW_MID_OPACITY_FACTOR: f32 = 0.67; // gradient stop at 25%
pub const GLOW_OUTER_OPACITY_FACTOR: f32 = 0.5; // gradient stop at 50%

// Flame animation easing (CSS transition on the flame element)
pub const FLAME_TRANSITION_SEC: f32 = 0.8;

// Element ids expected in the host page
pub const MEMO_INPUT_ID: &str = "memo-input";
pub const MEMO_IMAGE_ID: &str = "memo-image";
pub const FLAME_ID: &str = "campfire-flame";
pub const GLOW_ID: &str = "campfire-glow";
pub const EMBER_LAYER_ID: &str = "ember-layer";

// Host-side tests for behavioral constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod visuals {
    include!("../src/core/visuals.rs");
}

use constants::*;
use visuals::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn flame_constants_are_coherent() {
    // The fire starts above its floor and the floor is above zero.
    assert!(FLAME_MIN > 0.0);
    assert!(FLAME_INITIAL > FLAME_MIN);

    // Proportional decay with a positive minimum step.
    assert!(DECAY_RATE > 0.0 && DECAY_RATE < 1.0);
    assert!(MIN_DECAY_STEP > 0.0);
    assert!(DECAY_INTERVAL_MS > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tier_thresholds_are_ordered() {
    assert!(SHORT_TEXT_THRESHOLD < MEDIUM_TEXT_THRESHOLD);
    assert!(MEDIUM_TEXT_THRESHOLD < MAX_DISPLAY_CHARS);

    // A longer note always burns at least as hot.
    assert!(BOOST_LOW < BOOST_MEDIUM);
    assert!(BOOST_MEDIUM < BOOST_HIGH);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ember_timings_are_coherent() {
    // The model lets go of a scrap before its visual flight nominally ends,
    // never after.
    assert!(EMBER_REMOVAL_DELAY_MS < EMBER_FLIGHT_DURATION_MS);
    assert!(EMBER_REMOVAL_DELAY_MS > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn projection_ranges_are_coherent() {
    assert!(SPEED_MIN < SPEED_MAX);
    assert!(SCALE_BASE < SCALE_MAX);
    assert!(OPACITY_BASE < OPACITY_MAX);
    assert!(OPACITY_MAX <= 1.0);
    assert!(GLOW_BASE_SIZE < GLOW_MAX_SIZE);
    assert!(GLOW_BASE_OPACITY < GLOW_MAX_OPACITY);
    assert!(GLOW_MAX_OPACITY <= 1.0);
    assert!(FLAME_BASE_WIDTH < FLAME_MAX_WIDTH);
    assert!(FLAME_BASE_HEIGHT < FLAME_MAX_HEIGHT_MOBILE);
    assert!(FLAME_MAX_HEIGHT_MOBILE < FLAME_MAX_HEIGHT_DESKTOP);
    assert!(BRIGHTNESS_BASE < BRIGHTNESS_MAX);
    assert!(SATURATION_BASE < SATURATION_MAX);
}

#[test]
fn decay_steps_are_perceptible_everywhere() {
    // At high levels the proportional term dominates; near the floor the
    // fixed minimum keeps cooling visible.
    let high = 100.0_f64;
    assert!((high * DECAY_RATE).max(MIN_DECAY_STEP) >= MIN_DECAY_STEP);
    let low = FLAME_MIN + 1.0;
    assert_eq!((low * DECAY_RATE).max(MIN_DECAY_STEP), MIN_DECAY_STEP);
}

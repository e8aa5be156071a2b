// Host-side tests for the pure level -> visual projections.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod visuals {
    include!("../src/core/visuals.rs");
}

use visuals::*;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn projections_start_at_their_base_values() {
    assert_eq!(flame_speed(0.0), 0.5);
    assert_eq!(flame_scale(0.0), 0.8);
    assert_eq!(flame_opacity(0.0), 0.8);
    assert_eq!(glow_size(0.0), 400.0);
    assert_eq!(glow_opacity(0.0), 0.3);
    assert_eq!(flame_width(0.0), 100.0);
    assert_eq!(flame_height(0.0, false), 120.0);
    assert_eq!(brightness(0.0), 0.8);
    assert_eq!(saturation(0.0), 1.0);
}

#[test]
fn projections_reach_their_max_at_level_100() {
    assert!(close(flame_speed(100.0), 2.0));
    assert!(close(flame_scale(100.0), 2.0));
    assert!(close(flame_opacity(100.0), 1.0));
    assert!(close(glow_size(100.0), 700.0));
    assert!(close(glow_opacity(100.0), 0.5));
    assert!(close(flame_width(100.0), 250.0));
    assert!(close(flame_height(100.0, false), 300.0));
    assert!(close(brightness(100.0), 1.3));
    assert!(close(saturation(100.0), 1.5));
}

#[test]
fn projections_clamp_above_level_100() {
    assert_eq!(flame_speed(500.0), 2.0);
    assert_eq!(flame_scale(500.0), 2.0);
    assert_eq!(flame_opacity(500.0), 1.0);
    assert_eq!(glow_size(500.0), 700.0);
    assert_eq!(glow_opacity(500.0), 0.5);
    assert_eq!(flame_width(500.0), 250.0);
    assert_eq!(brightness(500.0), 1.3);
    assert_eq!(saturation(500.0), 1.5);
}

#[test]
fn flame_height_keeps_growing_until_the_form_factor_cap() {
    // The height ramp tops out past level 100, unlike the other projections.
    assert!(flame_height(120.0, false) > flame_height(100.0, false));
    assert_eq!(flame_height(200.0, false), 400.0);
    assert_eq!(flame_height(200.0, true), 350.0);
    assert!(flame_height(150.0, true) <= 350.0);
}

#[test]
fn projections_are_monotonic_non_decreasing() {
    let fns: [fn(f64) -> f32; 8] = [
        flame_speed,
        flame_scale,
        flame_opacity,
        glow_size,
        glow_opacity,
        flame_width,
        brightness,
        saturation,
    ];
    for f in fns {
        let mut prev = f(0.0);
        for step in 1..=300 {
            let v = f(step as f64);
            assert!(v >= prev, "projection decreased at level {step}");
            prev = v;
        }
    }
}

#[test]
fn projections_are_reproducible() {
    for level in [0.0, 10.0, 33.3, 64.1, 100.0, 250.0] {
        assert_eq!(flame_speed(level).to_bits(), flame_speed(level).to_bits());
        assert_eq!(glow_size(level).to_bits(), glow_size(level).to_bits());
        assert_eq!(
            flame_height(level, true).to_bits(),
            flame_height(level, true).to_bits()
        );
    }
}

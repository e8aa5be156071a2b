// Pure projections of the flame level into visual parameters.
//
// Each function is deterministic in the level alone, monotonic
// non-decreasing, and clamped to the documented range (the value its linear
// ramp reaches at level 100). The renderer reads these; nothing here reads
// or writes engine state.

// Linear ramps run from the base value at level 0 to the max at level 100.
pub const SPEED_MIN: f32 = 0.5;
pub const SPEED_MAX: f32 = 2.0;
pub const SCALE_BASE: f32 = 0.8;
pub const SCALE_MAX: f32 = 2.0;
pub const OPACITY_BASE: f32 = 0.8;
pub const OPACITY_MAX: f32 = 1.0;
pub const GLOW_BASE_SIZE: f32 = 400.0;
pub const GLOW_MAX_SIZE: f32 = 700.0;
pub const GLOW_BASE_OPACITY: f32 = 0.3;
pub const GLOW_MAX_OPACITY: f32 = 0.5;
pub const FLAME_BASE_WIDTH: f32 = 100.0;
pub const FLAME_MAX_WIDTH: f32 = 250.0;
pub const FLAME_BASE_HEIGHT: f32 = 120.0;
pub const FLAME_HEIGHT_INCREASE: f32 = 180.0;
pub const FLAME_MAX_HEIGHT_DESKTOP: f32 = 400.0;
pub const FLAME_MAX_HEIGHT_MOBILE: f32 = 350.0;
pub const BRIGHTNESS_BASE: f32 = 0.8;
pub const BRIGHTNESS_MAX: f32 = 1.3;
pub const SATURATION_BASE: f32 = 1.0;
pub const SATURATION_MAX: f32 = 1.5;

#[inline]
fn ramp(level: f64, base: f32, max: f32) -> f32 {
    (base + (level as f32 / 100.0) * (max - base)).clamp(base, max)
}

/// Playback-speed multiplier for the flame animation, in [0.5, 2.0].
#[inline]
pub fn flame_speed(level: f64) -> f32 {
    ramp(level, SPEED_MIN, SPEED_MAX)
}

/// Visual scale of the flame, in [0.8, 2.0].
#[inline]
pub fn flame_scale(level: f64) -> f32 {
    ramp(level, SCALE_BASE, SCALE_MAX)
}

/// Flame opacity, in [0.8, 1.0].
#[inline]
pub fn flame_opacity(level: f64) -> f32 {
    ramp(level, OPACITY_BASE, OPACITY_MAX)
}

/// Diameter of the ambient glow in CSS pixels, in [400, 700].
#[inline]
pub fn glow_size(level: f64) -> f32 {
    ramp(level, GLOW_BASE_SIZE, GLOW_MAX_SIZE)
}

/// Peak opacity of the glow gradient, in [0.3, 0.5].
#[inline]
pub fn glow_opacity(level: f64) -> f32 {
    ramp(level, GLOW_BASE_OPACITY, GLOW_MAX_OPACITY)
}

/// Flame element width in CSS pixels, in [100, 250].
#[inline]
pub fn flame_width(level: f64) -> f32 {
    ramp(level, FLAME_BASE_WIDTH, FLAME_MAX_WIDTH)
}

/// Flame element height in CSS pixels. Unlike the other ramps this one keeps
/// growing past level 100 until it hits the per-form-factor cap.
#[inline]
pub fn flame_height(level: f64, mobile: bool) -> f32 {
    let max = if mobile {
        FLAME_MAX_HEIGHT_MOBILE
    } else {
        FLAME_MAX_HEIGHT_DESKTOP
    };
    (FLAME_BASE_HEIGHT + (level as f32 / 100.0) * FLAME_HEIGHT_INCREASE).clamp(FLAME_BASE_HEIGHT, max)
}

/// CSS brightness filter value, in [0.8, 1.3].
#[inline]
pub fn brightness(level: f64) -> f32 {
    ramp(level, BRIGHTNESS_BASE, BRIGHTNESS_MAX)
}

/// CSS saturation filter value, in [1.0, 1.5].
#[inline]
pub fn saturation(level: f64) -> f32 {
    ramp(level, SATURATION_BASE, SATURATION_MAX)
}

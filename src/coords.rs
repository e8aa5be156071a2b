use crate::constants::*;
use glam::Vec2;
use web_sys as web;

/// Viewport size in CSS pixels.
#[inline]
pub fn viewport(window: &web::Window) -> Vec2 {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Vec2::new(w as f32, h as f32)
}

#[inline]
pub fn is_mobile(window: &web::Window) -> bool {
    viewport(window).x < MOBILE_BREAKPOINT_PX as f32
}

/// Where a scrap starts: horizontally centered, just below the top edge of
/// the memo pad image. Falls back to a fixed offset from the bottom when the
/// image is not in the page.
pub fn scrap_origin(window: &web::Window, memo_image: Option<&web::HtmlImageElement>) -> Vec2 {
    let vp = viewport(window);
    let y = match memo_image {
        Some(img) => {
            let rect = img.get_bounding_client_rect();
            (rect.top() + rect.height() * MEMO_ORIGIN_OFFSET) as f32
        }
        None => vp.y - ORIGIN_FALLBACK_FROM_BOTTOM as f32,
    };
    Vec2::new(vp.x / 2.0, y)
}

/// Where a scrap lands: the campfire position for the current form factor.
pub fn scrap_target(window: &web::Window) -> Vec2 {
    let vp = viewport(window);
    let x = if is_mobile(window) {
        vp.x / 2.0
    } else {
        vp.x * (CAMPFIRE_X_DESKTOP_PCT as f32) / 100.0
    };
    Vec2::new(x, vp.y * (CAMPFIRE_Y_PCT as f32) / 100.0)
}

use crate::constants::*;
use crate::core::visuals;
use crate::core::EmberScrap;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Restyle the flame element from the current level. All values come from the
/// pure projections; this function only writes styles.
pub fn apply_flame(document: &web::Document, level: f64, mobile: bool) {
    if let Some(el) = dom::html_element_by_id(document, FLAME_ID) {
        let scale = visuals::flame_scale(level);
        let opacity = visuals::flame_opacity(level);
        let width = visuals::flame_width(level);
        let height = visuals::flame_height(level, mobile);
        let brightness = visuals::brightness(level);
        let saturation = visuals::saturation(level);
        // The flame's looping keyframe animation speeds up with intensity.
        let speed = visuals::flame_speed(level);

        let style = format!(
            "width:{width:.0}px;height:{height:.0}px;\
             transform:translate(-50%,-50%) scale({scale:.3});opacity:{opacity:.3};\
             filter:brightness({brightness:.3}) saturate({saturation:.3});\
             transition:all {FLAME_TRANSITION_SEC}s ease-out;\
             --flame-speed:{speed:.3}"
        );
        _ = el.set_attribute("style", &style);
        _ = el.set_attribute(
            "aria-label",
            &format!("Campfire flame, intensity {}", level.round()),
        );
    }
}

/// Restyle the radial glow behind the fire.
pub fn apply_glow(document: &web::Document, level: f64) {
    if let Some(el) = dom::html_element_by_id(document, GLOW_ID) {
        let size = visuals::glow_size(level);
        let o1 = visuals::glow_opacity(level);
        let o2 = o1 * GLOW_MID_OPACITY_FACTOR;
        let o3 = o1 * GLOW_OUTER_OPACITY_FACTOR;

        let style = format!(
            "width:{size:.0}px;height:{size:.0}px;\
             transform:translate(-50%,-50%);\
             background:radial-gradient(circle, rgba(255,120,20,{o1:.3}) 0%, \
             rgba(255,90,10,{o2:.3}) 25%, rgba(200,60,10,{o3:.3}) 50%, transparent 70%);\
             filter:blur({GLOW_BLUR_PX}px)"
        );
        _ = el.set_attribute("style", &style);
    }
}

#[inline]
fn ember_node_id(id: u64) -> String {
    format!("ember-{id}")
}

/// Add a scrap node at its origin and start its flight toward the target.
///
/// The flight is a CSS transition owned entirely by this layer; the model
/// removes the record at 3.2 s while the transition nominally runs 4 s, so
/// node removal simply cuts the tail of the fade-out.
pub fn spawn_scrap(document: &web::Document, scrap: &EmberScrap, flight_ms: f64) {
    let Some(layer) = dom::html_element_by_id(document, EMBER_LAYER_ID) else {
        return;
    };
    let Ok(el) = document.create_element("div") else {
        return;
    };
    _ = el.set_attribute("id", &ember_node_id(scrap.id));
    el.set_class_name("paper-scrap");
    el.set_text_content(Some(&scrap.text));

    let start = format!(
        "position:fixed;left:0;top:0;pointer-events:none;z-index:200;\
         transform:translate({:.0}px,{:.0}px) scale(1) rotate(0deg);opacity:1;\
         transition:transform {dur:.1}s cubic-bezier(0.4,0,0.2,1), opacity {dur:.1}s ease-in",
        scrap.origin.x - 100.0,
        scrap.origin.y - 50.0,
        dur = flight_ms / 1000.0,
    );
    _ = el.set_attribute("style", &start);
    _ = layer.append_child(&el);

    if let Some(node) = el.dyn_ref::<web::HtmlElement>() {
        // Force a reflow so the transition runs from the start state.
        let _ = node.offset_width();
        let end = format!(
            "transform:translate({:.0}px,{:.0}px) scale(0.2) rotate(720deg);opacity:0",
            scrap.target.x - 100.0,
            scrap.target.y - 50.0,
        );
        _ = node.style().set_css_text(&format!("{start};{end}"));
    }
}

/// Drop the scrap's node, if it is still in the page.
pub fn remove_scrap(document: &web::Document, id: u64) {
    if let Some(el) = document.get_element_by_id(&ember_node_id(id)) {
        el.remove();
    }
}

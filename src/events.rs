use crate::constants::*;
use crate::coords;
use crate::core::{Campfire, EMBER_FLIGHT_DURATION_MS, EMBER_REMOVAL_DELAY_MS};
use crate::dom;
use crate::render;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the memo input handlers need to capture.
pub struct InputWiring {
    pub campfire: Rc<RefCell<Campfire>>,
    pub textarea: web::HtmlTextAreaElement,
    pub memo_image: Option<web::HtmlImageElement>,
}

/// Wire Enter-to-submit on the memo textarea, with an IME composition guard
/// (Enter while composing confirms the conversion, it must not submit) and
/// scroll resets on focus changes.
pub fn wire_memo_input(wiring: InputWiring) {
    let InputWiring {
        campfire,
        textarea,
        memo_image,
    } = wiring;

    let composing = Rc::new(Cell::new(false));
    let last_submit_ms = Rc::new(Cell::new(f64::NEG_INFINITY));

    {
        let composing = composing.clone();
        dom::add_event_listener(&textarea, "compositionstart", move |_| {
            composing.set(true);
        });
    }
    {
        let composing = composing.clone();
        dom::add_event_listener(&textarea, "compositionend", move |_| {
            composing.set(false);
        });
    }

    dom::add_event_listener(&textarea, "focus", |_| dom::reset_scroll());
    dom::add_event_listener(&textarea, "blur", |_| dom::reset_scroll());

    {
        let ta = textarea.clone();
        dom::add_event_listener(&textarea, "keydown", move |ev: web::Event| {
            let Some(key_ev) = ev.dyn_ref::<web::KeyboardEvent>() else {
                return;
            };
            if key_ev.key() == "Enter" && !composing.get() {
                key_ev.prevent_default();
                submit_memo(&campfire, &ta, memo_image.as_ref(), &last_submit_ms);
            }
        });
    }
}

/// The full submission sequence, run synchronously inside the keydown
/// handler: validate, create the scrap, boost the flame, clear the input,
/// then schedule the scrap's own expiry.
pub fn submit_memo(
    campfire: &Rc<RefCell<Campfire>>,
    textarea: &web::HtmlTextAreaElement,
    memo_image: Option<&web::HtmlImageElement>,
    last_submit_ms: &Rc<Cell<f64>>,
) {
    let Some(window) = web::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let now = dom::now_ms();
    if now - last_submit_ms.get() < SUBMIT_COOLDOWN_MS {
        return;
    }

    // Coordinates are captured here, once; a resize mid-flight must not bend
    // the trajectory.
    let origin = coords::scrap_origin(&window, memo_image);
    let target = coords::scrap_target(&window);

    let text = textarea.value();
    let Some(scrap) = campfire
        .borrow_mut()
        .throw_memo(&text, origin, target, now)
    else {
        return; // empty or whitespace-only; silently rejected
    };
    last_submit_ms.set(now);
    log::info!(
        "[memo] thrown id={} tier={} chars={}",
        scrap.id,
        scrap.intensity.rank(),
        scrap.text.chars().count()
    );

    // Clear immediately; blur + deferred refocus works around the iOS Safari
    // stale-placeholder quirk.
    textarea.set_value("");
    _ = textarea.blur();
    {
        let ta = textarea.clone();
        dom::set_timeout(&window, 0, move || {
            _ = ta.focus();
        });
    }

    let level = campfire.borrow().level();
    render::apply_flame(&document, level, coords::is_mobile(&window));
    render::apply_glow(&document, level);
    render::spawn_scrap(&document, &scrap, EMBER_FLIGHT_DURATION_MS);

    // The scrap removes itself from the model before the visual flight ends.
    let campfire = campfire.clone();
    let id = scrap.id;
    dom::set_timeout(&window, EMBER_REMOVAL_DELAY_MS as i32, move || {
        campfire.borrow_mut().expire_ember(id);
        if let Some(doc) = dom::window_document() {
            render::remove_scrap(&doc, id);
        }
    });
}

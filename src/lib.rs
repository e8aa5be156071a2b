#![cfg(target_arch = "wasm32")]
use crate::core::Campfire;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod coords;
pub mod core;
mod dom;
mod events;
mod render;

use constants::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("campfire-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let textarea_el = document
        .get_element_by_id(MEMO_INPUT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{MEMO_INPUT_ID}"))?;
    let textarea: web::HtmlTextAreaElement = textarea_el
        .dyn_into::<web::HtmlTextAreaElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // The memo pad image only anchors the scrap origin; the page may omit it.
    let memo_image = document
        .get_element_by_id(MEMO_IMAGE_ID)
        .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok());

    let campfire = Rc::new(RefCell::new(Campfire::new(dom::now_ms())));

    // Paint the resting fire before any interaction.
    {
        let level = campfire.borrow().level();
        render::apply_flame(&document, level, coords::is_mobile(&window));
        render::apply_glow(&document, level);
    }

    events::wire_memo_input(events::InputWiring {
        campfire: campfire.clone(),
        textarea,
        memo_image,
    });

    wire_decay_ticker(&window, campfire);

    Ok(())
}

// Coarse 1-second poll; the engine itself decides when the 5-minute decay
// threshold has been crossed, so extra ticks are no-ops.
fn wire_decay_ticker(window: &web::Window, campfire: Rc<RefCell<Campfire>>) {
    dom::set_interval(window, DECAY_POLL_INTERVAL_MS, move || {
        let now = dom::now_ms();
        if campfire.borrow_mut().tick_decay(now) {
            let level = campfire.borrow().level();
            log::info!("[decay] flame cooled to {level:.1}");
            if let (Some(w), Some(doc)) = (web::window(), dom::window_document()) {
                render::apply_flame(&doc, level, coords::is_mobile(&w));
                render::apply_glow(&doc, level);
            }
        }
    });
}

#![cfg(target_arch = "wasm32")]
use crate::core::{DialConfig, DialEvent, DialState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod app;
mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod transform;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pan-dial starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let dial_el = document
        .get_element_by_id(constants::DIAL_ELEMENT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::DIAL_ELEMENT_ID))?;

    let cfg = DialConfig::with_bank_len(constants::SOUND_BANK.len());
    let state = DialState::new(&cfg)?;
    let player = audio::SoundBankPlayer::new(cfg.bank_len)?;
    let app = app::DialApp::new(state, player, dial_el);

    load_sound_bank(&app);

    events::wire_input_handlers(events::InputWiring {
        app: app.clone(),
        pan: Rc::new(RefCell::new(input::PanTracker::default())),
    });

    app.dispatch(DialEvent::Mount);
    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext::new(app))));
    Ok(())
}

// Clips arrive independently; a trigger before its clip is decoded just drops that sound.
fn load_sound_bank(app: &Rc<app::DialApp>) {
    let ctx: web::AudioContext = app.player.borrow().context().clone();
    for (index, &path) in constants::SOUND_BANK.iter().enumerate() {
        let app = app.clone();
        let ctx = ctx.clone();
        spawn_local(async move {
            match audio::load_clip(&ctx, path).await {
                Ok(buffer) => {
                    let mut player = app.player.borrow_mut();
                    player.set_clip(index, buffer);
                    if player.loaded_count() == constants::SOUND_BANK.len() {
                        log::info!("[audio] sound bank ready ({} clips)", player.loaded_count());
                    }
                }
                Err(e) => log::error!("[audio] {}", e),
            }
        });
    }
}

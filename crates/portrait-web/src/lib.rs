#![cfg(target_arch = "wasm32")]
use portrait_core::{CalibrationProfile, PortraitConfig};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

pub mod dom;
pub mod gallery;
pub mod listener;
pub mod portrait;

thread_local! {
    static GALLERY: RefCell<Option<gallery::Gallery>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portrait-web starting");

    if let Err(e) = init(CalibrationProfile::default()) {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init(profile: CalibrationProfile) -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let configs = gallery::read_configs(&gallery::root(&document)?);
    remount(configs, profile)
}

/// Remount the gallery with the full-range tilt calibration (card rotates
/// with the device) instead of the default glare-only one.
#[wasm_bindgen]
pub fn use_wide_tilt() {
    let configs = GALLERY.with(|g| g.borrow().as_ref().map(|g| g.configs().to_vec()));
    let Some(configs) = configs else {
        log::warn!("[gallery] nothing mounted");
        return;
    };
    if let Err(e) = remount(configs, CalibrationProfile::WIDE) {
        log::error!("remount error: {:?}", e);
    }
}

/// Tear the gallery down, releasing every listener it registered.
#[wasm_bindgen]
pub fn unmount() {
    let removed = GALLERY.with(|g| g.borrow_mut().take());
    if let Some(gallery) = removed {
        log::info!(
            "[gallery] unmounting {} tiles, releasing {} listeners",
            gallery.len(),
            gallery.listener_count()
        );
    }
}

fn remount(configs: Vec<PortraitConfig>, profile: CalibrationProfile) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let strategy = gallery::detect_strategy(&window);
    // previous listeners must be gone before new ones attach
    unmount();
    let mounted = gallery::mount(&document, configs, strategy, profile)?;
    GALLERY.with(|g| *g.borrow_mut() = Some(mounted));
    Ok(())
}

// ============================================================================
// CALENDAR SHELL - Yew + WASM
// ============================================================================
// Arranque: panic hook + logger -> buscar #app -> montar App (router).
// A partir de ahí el render loop de Yew lo lleva todo.
// ============================================================================

pub mod app;
pub mod calendar;
pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod layouts;
pub mod models;
pub mod router;
pub mod utils;
pub mod views;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app::App;
use crate::config::CONFIG;
use crate::error::ShellError;

// En tests el montaje lo hace cada test
#[cfg_attr(not(test), wasm_bindgen(start))]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 [MAIN] {} starting...", CONFIG.app_title);

    mount(&CONFIG.mount_element_id)
}

/// Monta la app dentro del elemento con id `element_id`
#[wasm_bindgen]
pub fn mount(element_id: &str) -> Result<(), JsValue> {
    let root = mount_point(element_id).map_err(|e| {
        log::error!("❌ [MAIN] {}", e);
        e
    })?;

    yew::Renderer::<App>::with_root(root).render();
    log::info!("✅ [MAIN] App montada en #{}", element_id);
    Ok(())
}

fn mount_point(element_id: &str) -> Result<Element, ShellError> {
    let document = web_sys::window()
        .and_then(|win| win.document())
        .ok_or(ShellError::NoDocument)?;
    document
        .get_element_by_id(element_id)
        .ok_or_else(|| ShellError::MountNotFound(element_id.to_string()))
}

// ============================================================================
// PORTFOLIO - INTERACTIVIDAD DE LA PÁGINA (RUST PURO + WASM)
// ============================================================================
// Arquitectura MVVM:
// - Views: pintan estado en el DOM (sin lógica)
// - ViewModels: estado + transiciones (testeables sin navegador)
// - State: stores Rc<RefCell> que conectan viewmodels, vistas y timers
// - Services: scheduler de tareas diferidas
// - Models: campos del formulario, categorías de proyectos
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod viewmodels;
pub mod views;
mod dom;
mod utils;
mod app;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::CONFIG;
use crate::services::BrowserScheduler;

// Instancia de App de la página
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Panic hook para mejor debugging
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 [APP] Portfolio - Rust puro + WASM");

    let app = App::new(&CONFIG, Rc::new(BrowserScheduler::new())).map_err(|e| {
        log::error!("❌ [APP] Error inicializando la página: {:?}", e);
        e
    })?;
    app.mount()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Cancelar timers pendientes (envío simulado, mensaje de éxito, animaciones).
/// Llamable desde JavaScript antes de desmontar la página.
#[wasm_bindgen]
pub fn cancel_pending_timers() {
    APP.with(|app_cell| {
        if let Some(ref app) = *app_cell.borrow() {
            app.cancel_pending_timers();
            log::info!("🛑 [APP] Timers pendientes cancelados");
        } else {
            log::warn!("⚠️ [APP] App no está inicializada");
        }
    });
}

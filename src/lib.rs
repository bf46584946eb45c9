// ============================================================================
// HISTORIAL DE ARCHIVOS (ADMIN) - FRONTEND RUST PURO + WASM
// ============================================================================
// - Views: funciones que pintan DOM (sin lógica)
// - ViewModels: control de acceso, carga del listado, flujo de eliminación
// - Services: API HTTP, sesión (localStorage), diálogos, navegación
// - Models: estructuras compartidas con el backend
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod models;
pub mod services;
pub mod utils;
pub mod viewmodels;
pub mod views;

#[cfg(test)]
mod testing;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::AppConfig;

// Instancia global de la pantalla
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    wasm_logger::init(wasm_logger::Config::new(config.log_level()));
    log::info!("🚀 Historial de archivos - Rust + WASM");

    // Sin la tabla en la página no hay nada que montar
    let app = match App::new(&config) {
        Ok(app) => app,
        Err(e) => {
            log::error!("❌ No se pudo iniciar la pantalla: {:?}", e);
            return Ok(());
        }
    };
    app.start();

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Recargar el listado desde JavaScript
#[wasm_bindgen]
pub fn reload_files_wasm() {
    APP.with(|cell| match cell.borrow().as_ref() {
        Some(app) => app.reload(),
        None => log::warn!("⚠️ [RELOAD] App no está inicializada"),
    });
}

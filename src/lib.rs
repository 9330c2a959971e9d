// ============================================================================
// DISASTER HAVEN - FRONTEND YEW (RUST + WASM)
// ============================================================================
// Capas:
// - stores: registro de sesión sobre almacenamiento clave/valor
// - state: contexto de auth (único escritor de la sesión) y cola de toasts
// - hooks: providers de Yew sobre ese estado
// - views: páginas enrutadas con datos estáticos de `data`
// ============================================================================

pub mod app;
pub mod components;
pub mod config;
pub mod data;
pub mod error;
pub mod hooks;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod stores;
pub mod utils;
pub mod views;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::CONFIG;

/// Punto de entrada: panic hook, logging y montaje de la app
pub fn run() {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        let level = if CONFIG.is_production() {
            log::Level::Warn
        } else {
            log::Level::Debug
        };
        wasm_logger::init(wasm_logger::Config::new(level));
    }
    log::info!("🚀 {} iniciando ({})", CONFIG.app_name, CONFIG.environment);

    yew::Renderer::<App>::new().render();
}

/// Resumen de configuración, llamable desde la consola del navegador
#[wasm_bindgen]
pub fn app_info() -> String {
    format!(
        "{} [{}] latencia simulada {}ms",
        CONFIG.app_name, CONFIG.environment, CONFIG.timing.simulated_latency_ms
    )
}

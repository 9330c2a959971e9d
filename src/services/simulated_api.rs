// ============================================================================
// SIMULATED API - Envíos simulados con latencia fija
// ============================================================================
// No hay backend: cada envío espera un tiempo fijo y siempre termina bien.
// Sin cancelación ni camino de error.
// ============================================================================

use gloo_timers::future::TimeoutFuture;
use log::info;

use crate::config::CONFIG;

/// Espera `latency_ms` y registra el envío
pub async fn submit(label: &str, latency_ms: u32) {
    info!("📤 Enviando {}...", label);
    TimeoutFuture::new(latency_ms).await;
    info!("✅ {} enviado", label);
}

/// Envío con la latencia por defecto de formularios
pub async fn submit_form(label: &str) {
    submit(label, CONFIG.timing.simulated_latency_ms).await;
}

/// Guardado de perfil/preferencias
pub async fn save_profile(label: &str) {
    submit(label, CONFIG.timing.profile_save_ms).await;
}

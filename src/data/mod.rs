// ============================================================================
// DATOS ESTÁTICOS - fixtures tipados por página
// ============================================================================
// No hay backend: cada vista lee su propio conjunto y lo filtra localmente.
// ============================================================================

pub mod alerts;
pub mod shelters;
pub mod donation;
pub mod community;
pub mod recovery;
pub mod help;
pub mod dashboard;
pub mod admin;
pub mod home;

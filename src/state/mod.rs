// ============================================================================
// STATE - Estado compartido de la app
// ============================================================================

pub mod reactivity;
pub mod auth_state;
pub mod toast_state;

pub use reactivity::{ReactiveState, SubscriptionId};
pub use auth_state::AuthContext;
pub use toast_state::{Toast, ToastAction, ToastQueue, ToastVariant, MAX_VISIBLE_TOASTS};

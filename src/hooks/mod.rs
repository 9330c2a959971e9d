pub mod use_auth;
pub mod use_toast;

pub use use_auth::{use_auth, AuthHandle, AuthProvider};
pub use use_toast::{use_toast, ToastHandle, ToastProvider};

/// Claves de `localStorage` del registro de sesión
pub const STORAGE_KEY_AUTHENTICATED: &str = "isAuthenticated";
pub const STORAGE_KEY_ADMIN: &str = "isAdmin";
pub const STORAGE_KEY_USER_NAME: &str = "userName";
pub const STORAGE_KEY_USER_EMAIL: &str = "userEmail";

pub const SESSION_KEYS: [&str; 4] = [
    STORAGE_KEY_AUTHENTICATED,
    STORAGE_KEY_ADMIN,
    STORAGE_KEY_USER_NAME,
    STORAGE_KEY_USER_EMAIL,
];

/// Pares reservados de demostración (no es una frontera de seguridad)
pub const DEMO_USER_EMAIL: &str = "user@example.com";
pub const DEMO_USER_PASSWORD: &str = "password";
pub const DEMO_ADMIN_EMAIL: &str = "admin@example.com";
pub const DEMO_ADMIN_PASSWORD: &str = "admin";

pub const FOOTER_TEXT: &str = "© 2023 DisasterHaven Connect. All rights reserved.";

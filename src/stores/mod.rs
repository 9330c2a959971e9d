pub mod storage;
pub mod session_store;

pub use storage::{BrowserStorage, KeyValueStorage, MemoryStorage};
pub use session_store::{BrowserSessionStore, KeyValueSessionStore, SessionStore};

// Utils compartidos

pub mod constants;
pub mod search;
pub mod format;
pub mod styles;

pub use constants::*;
pub use search::*;
pub use format::*;

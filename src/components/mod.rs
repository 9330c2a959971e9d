// Componentes reutilizables

pub mod layout;
pub mod route_guard;
pub mod toaster;
pub mod tabs;
pub mod progress_bar;
pub mod search_input;
pub mod stat_card;
pub mod form_field;
pub mod accordion;

pub use layout::Layout;
pub use route_guard::RouteGuard;
pub use toaster::Toaster;
pub use tabs::Tabs;
pub use progress_bar::ProgressBar;
pub use search_input::SearchInput;
pub use stat_card::StatCard;
pub use accordion::Accordion;
pub use form_field::{bind, bind_toggle, SelectField, TextAreaField, TextField, Toggle};

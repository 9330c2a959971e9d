// Páginas enrutadas

pub mod home;
pub mod alerts;
pub mod shelters;
pub mod donation;
pub mod community;
pub mod recovery;
pub mod help;
pub mod dashboard;
pub mod profile;
pub mod admin;
pub mod login;
pub mod not_found;

pub use home::HomePage;
pub use alerts::AlertsPage;
pub use shelters::SheltersPage;
pub use donation::DonationPage;
pub use community::CommunityPage;
pub use recovery::RecoveryPage;
pub use help::HelpPage;
pub use dashboard::DashboardPage;
pub use profile::ProfilePage;
pub use admin::AdminPage;
pub use login::{AuthTab, LoginPage};
pub use not_found::NotFoundPage;

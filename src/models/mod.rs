pub mod session;
pub mod alert;
pub mod shelter;
pub mod donation;
pub mod community;
pub mod recovery;
pub mod help;
pub mod dashboard;
pub mod admin;
pub mod home;
pub mod forms;

pub use session::{AuthPhase, Role, Session};
pub use alert::{filter_alerts, toggle_subscription, Alert, AlertTab, Severity};
pub use shelter::{Shelter, ShelterFeature, ShelterFilters, ShelterType};
pub use donation::{Campaign, DonationKind, DonationRecord, StockStatus, SupplyNeed};
pub use community::{filter_opportunities, CommunityTab, DiscussionPost, SuccessStory, VolunteerOpportunity};
pub use recovery::{resources_in, Faq, RecoveryResource, ResourceCategory};
pub use help::FaqCategory;
pub use dashboard::{
    ActivityCategory, ActivityEntry, ActivityTab, ChecklistItem, NearbyResource, ResourceKind,
    ResourceStatus, SafetyStatus, Tally, UserAlert, UserAlertKind, VolunteerActivity,
};
pub use admin::{
    filter_admin_alerts, filter_users, showing_summary, AdminActivity, AdminAlert, AdminShelter,
    AdminStats, AdminTab, RecordStatus, ServiceState, ServiceStatus, ShelterStatus, UserRecord,
    UserRole,
};
pub use home::{DisasterStatus, Feature, RecentDisaster};

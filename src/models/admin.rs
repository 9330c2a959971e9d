use serde::{Deserialize, Serialize};

use crate::models::Severity;
use crate::utils::{matches_query, percentage};

/// Cifras globales del panel de administración
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminStats {
    pub active_alerts: u32,
    pub registered_users: u32,
    pub active_shelters: u32,
    pub volunteers: u32,
    pub donations: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    User,
    Admin,
    Volunteer,
}

impl UserRole {
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::User => "User",
            UserRole::Admin => "Admin",
            UserRole::Volunteer => "Volunteer",
        }
    }
}

/// Estado genérico de registro (usuarios y alertas)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordStatus {
    Active,
    Inactive,
}

impl RecordStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RecordStatus::Active => "Active",
            RecordStatus::Inactive => "Inactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: RecordStatus,
    pub location: String,
    pub last_active: String,
    pub join_date: String,
}

impl UserRecord {
    pub fn matches(&self, query: &str) -> bool {
        matches_query(query, &[&self.name, &self.email, &self.location])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminAlert {
    pub id: u32,
    pub title: String,
    pub kind: String,
    pub severity: Severity,
    pub location: String,
    pub status: RecordStatus,
    pub created: String,
    pub updated_by: String,
    pub recipients: u32,
}

impl AdminAlert {
    pub fn matches(&self, query: &str) -> bool {
        matches_query(query, &[&self.title, &self.location, &self.kind])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShelterStatus {
    Open,
    Limited,
    Closed,
}

impl ShelterStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ShelterStatus::Open => "Open",
            ShelterStatus::Limited => "Limited",
            ShelterStatus::Closed => "Closed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminShelter {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub capacity: u32,
    pub occupancy: u32,
    pub status: ShelterStatus,
    pub last_updated: String,
}

impl AdminShelter {
    pub fn occupancy_percent(&self) -> f64 {
        percentage(self.occupancy as f64, self.capacity as f64)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminActivity {
    pub title: String,
    pub actor: String,
    pub at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceState {
    Operational,
    Degraded,
}

impl ServiceState {
    pub fn label(&self) -> &'static str {
        match self {
            ServiceState::Operational => "Operational",
            ServiceState::Degraded => "Degraded",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub name: String,
    pub state: ServiceState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminTab {
    Dashboard,
    Alerts,
    Users,
    Shelters,
    Donations,
}

impl AdminTab {
    pub fn all() -> [AdminTab; 5] {
        [
            AdminTab::Dashboard,
            AdminTab::Alerts,
            AdminTab::Users,
            AdminTab::Shelters,
            AdminTab::Donations,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::Dashboard => "Dashboard",
            AdminTab::Alerts => "Alerts",
            AdminTab::Users => "Users",
            AdminTab::Shelters => "Shelters",
            AdminTab::Donations => "Donations",
        }
    }
}

pub fn filter_users<'a>(users: &'a [UserRecord], query: &str) -> Vec<&'a UserRecord> {
    users.iter().filter(|u| u.matches(query)).collect()
}

pub fn filter_admin_alerts<'a>(alerts: &'a [AdminAlert], query: &str) -> Vec<&'a AdminAlert> {
    alerts.iter().filter(|a| a.matches(query)).collect()
}

/// Texto "Showing X of Y <noun>" del pie de cada tabla
pub fn showing_summary(shown: usize, total: usize, noun: &str) -> String {
    format!("Showing {} of {} {}", shown, total, noun)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::admin::{admin_alerts, admin_shelters, users};

    #[test]
    fn user_search_covers_name_email_location() {
        let data = users();
        assert_eq!(filter_users(&data, "").len(), 5);
        assert_eq!(filter_users(&data, "lincoln").len(), 3);
        assert_eq!(filter_users(&data, "JANE@").len(), 1);
        assert_eq!(filter_users(&data, "wilson").len(), 1);
    }

    #[test]
    fn alert_search_covers_title_location_type() {
        let data = admin_alerts();
        assert_eq!(filter_admin_alerts(&data, "weather").len(), 3);
        assert_eq!(filter_admin_alerts(&data, "california").len(), 2);
        assert_eq!(filter_admin_alerts(&data, "tornado").len(), 1);
    }

    #[test]
    fn shelter_occupancy_percent() {
        let data = admin_shelters();
        assert_eq!(data[0].occupancy_percent().round() as u32, 60);
        assert_eq!(data[2].occupancy_percent().round() as u32, 92);
    }

    #[test]
    fn summary_text() {
        assert_eq!(showing_summary(2, 5, "users"), "Showing 2 of 5 users");
    }
}

use serde::{Deserialize, Serialize};

use crate::models::Severity;
use crate::utils::{percentage, rounded_percentage};

/// Progreso de una sección de preparación (hechos / total)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub done: u32,
    pub total: u32,
}

impl Tally {
    pub fn percent(&self) -> f64 {
        percentage(self.done as f64, self.total as f64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyStatus {
    pub checklist: Tally,
    pub contacts: Tally,
    pub documents: Tally,
}

impl SafetyStatus {
    /// Porcentaje global redondeado sobre las tres secciones
    pub fn preparedness(&self) -> u32 {
        let done = self.checklist.done + self.contacts.done + self.documents.done;
        let total = self.checklist.total + self.contacts.total + self.documents.total;
        rounded_percentage(done as f64, total as f64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserAlertKind {
    Warning,
    Info,
    Status,
}

impl UserAlertKind {
    pub fn icon(&self) -> &'static str {
        match self {
            UserAlertKind::Warning => "⚠️",
            UserAlertKind::Info => "ℹ️",
            UserAlertKind::Status => "✅",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAlert {
    pub id: u32,
    pub kind: UserAlertKind,
    pub title: String,
    pub description: String,
    pub location: String,
    pub time: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Shelter,
    Medical,
    Supplies,
}

impl ResourceKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ResourceKind::Shelter => "📍",
            ResourceKind::Medical => "🛡️",
            ResourceKind::Supplies => "📜",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceStatus {
    Open,
    Limited,
    Closed,
}

impl ResourceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ResourceStatus::Open => "Open",
            ResourceStatus::Limited => "Limited",
            ResourceStatus::Closed => "Closed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyResource {
    pub id: u32,
    pub kind: ResourceKind,
    pub name: String,
    pub distance: f64,
    pub status: ResourceStatus,
    pub capacity: Option<Tally>,
    pub schedule: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolunteerActivity {
    pub id: u32,
    pub title: String,
    pub organization: String,
    pub date: String,
    pub time: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub title: String,
    pub completed_on: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityCategory {
    Alerts,
    Donations,
    Volunteer,
    Checklist,
}

/// Filtro de la pestaña "Recent Activity"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityTab {
    All,
    Alerts,
    Donations,
    Volunteer,
}

impl ActivityTab {
    pub fn all() -> [ActivityTab; 4] {
        [ActivityTab::All, ActivityTab::Alerts, ActivityTab::Donations, ActivityTab::Volunteer]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityTab::All => "All Activity",
            ActivityTab::Alerts => "Alerts",
            ActivityTab::Donations => "Donations",
            ActivityTab::Volunteer => "Volunteer",
        }
    }

    pub fn includes(&self, category: ActivityCategory) -> bool {
        match self {
            ActivityTab::All => true,
            ActivityTab::Alerts => category == ActivityCategory::Alerts,
            ActivityTab::Donations => category == ActivityCategory::Donations,
            ActivityTab::Volunteer => category == ActivityCategory::Volunteer,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub category: ActivityCategory,
    pub title: String,
    pub detail: String,
    pub when: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dashboard::{recent_activity, safety_status};

    #[test]
    fn preparedness_rounds_over_all_sections() {
        // 12 de 19 -> 63.15 % -> 63
        assert_eq!(safety_status().preparedness(), 63);
    }

    #[test]
    fn empty_tallies_do_not_divide_by_zero() {
        let empty = Tally { done: 0, total: 0 };
        let status = SafetyStatus { checklist: empty, contacts: empty, documents: empty };
        assert_eq!(status.preparedness(), 0);
    }

    #[test]
    fn activity_tabs_filter_by_category() {
        let entries = recent_activity();
        let count = |tab: ActivityTab| entries.iter().filter(|e| tab.includes(e.category)).count();
        assert_eq!(count(ActivityTab::All), 4);
        assert_eq!(count(ActivityTab::Alerts), 1);
        assert_eq!(count(ActivityTab::Donations), 1);
        assert_eq!(count(ActivityTab::Volunteer), 1);
    }
}

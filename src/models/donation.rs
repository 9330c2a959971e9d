use serde::{Deserialize, Serialize};

use crate::models::Severity;
use crate::utils::percentage;

/// Campaña de recaudación activa
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub raised: u64,
    pub goal: u64,
    pub donors_count: u32,
    pub days_left: u32,
}

impl Campaign {
    pub fn progress_percent(&self) -> f64 {
        percentage(self.raised as f64, self.goal as f64)
    }

    /// Clave de causa: primera palabra del título en minúsculas
    pub fn cause_key(&self) -> String {
        self.title
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_lowercase()
    }
}

/// Estado de existencias mostrado en el panel admin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    Urgent,
    Needed,
    Good,
}

impl StockStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::Urgent => "Urgent",
            StockStatus::Needed => "Needed",
            StockStatus::Good => "Good",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyNeed {
    pub id: u32,
    pub item: String,
    pub needed: u32,
    pub received: u32,
    pub priority: Severity,
}

impl SupplyNeed {
    pub fn progress_percent(&self) -> f64 {
        percentage(self.received as f64, self.needed as f64)
    }

    pub fn stock_status(&self) -> StockStatus {
        let percent = self.progress_percent();
        if percent < 30.0 {
            StockStatus::Urgent
        } else if percent < 80.0 {
            StockStatus::Needed
        } else {
            StockStatus::Good
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DonationKind {
    Financial,
    Supplies,
}

impl DonationKind {
    pub fn label(&self) -> &'static str {
        match self {
            DonationKind::Financial => "Financial",
            DonationKind::Supplies => "Supplies",
        }
    }
}

/// Donación registrada (listado del panel admin)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationRecord {
    pub date: String,
    pub donor: String,
    pub kind: DonationKind,
    pub amount: String,
    pub campaign: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::donation::{campaigns, supply_needs};

    #[test]
    fn campaign_progress_and_cause() {
        let data = campaigns();
        assert_eq!(data[0].progress_percent(), 85.0);
        assert_eq!(data[0].cause_key(), "hurricane");
        assert_eq!(data[2].cause_key(), "flood");
    }

    #[test]
    fn stock_status_thresholds() {
        let labels: Vec<&str> = supply_needs()
            .iter()
            .map(|need| need.stock_status().label())
            .collect();
        assert_eq!(labels, vec!["Needed", "Needed", "Urgent", "Good", "Needed"]);
    }
}

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Gravedad de una alerta (también usada como prioridad de suministros)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }

    /// Etiqueta con mayúscula inicial ("Critical", "High", ...)
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }

    /// Acepta cualquier capitalización; `None` si no es una gravedad conocida
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "critical" => Some(Severity::Critical),
            "high" => Some(Severity::High),
            "medium" => Some(Severity::Medium),
            "low" => Some(Severity::Low),
            _ => None,
        }
    }

    pub fn all() -> [Severity; 4] {
        [Severity::Critical, Severity::High, Severity::Medium, Severity::Low]
    }
}

/// Alerta de emergencia pública
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: u32,
    pub kind: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub timestamp: String,
    pub severity: Severity,
    pub instructions: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertTab {
    All,
    Active,
    Subscribed,
}

impl AlertTab {
    pub fn all() -> [AlertTab; 3] {
        [AlertTab::All, AlertTab::Active, AlertTab::Subscribed]
    }

    pub fn label(&self) -> &'static str {
        match self {
            AlertTab::All => "All Alerts",
            AlertTab::Active => "Active",
            AlertTab::Subscribed => "Subscribed",
        }
    }
}

/// Alertas visibles para la pestaña activa, en el orden original
pub fn filter_alerts<'a>(
    alerts: &'a [Alert],
    tab: AlertTab,
    subscribed: &BTreeSet<u32>,
) -> Vec<&'a Alert> {
    alerts
        .iter()
        .filter(|alert| match tab {
            AlertTab::All => true,
            AlertTab::Active => alert.is_active,
            AlertTab::Subscribed => subscribed.contains(&alert.id),
        })
        .collect()
}

/// Alterna la suscripción; devuelve `true` si queda suscrita
pub fn toggle_subscription(subscribed: &mut BTreeSet<u32>, alert_id: u32) -> bool {
    if subscribed.remove(&alert_id) {
        false
    } else {
        subscribed.insert(alert_id);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::alerts::alerts;

    #[test]
    fn active_tab_keeps_only_active_alerts() {
        let data = alerts();
        let active = filter_alerts(&data, AlertTab::Active, &BTreeSet::new());
        assert_eq!(active.len(), 3);
        assert!(active.iter().all(|a| a.is_active));
    }

    #[test]
    fn subscribed_tab_follows_subscription_set() {
        let data = alerts();
        let mut subscribed: BTreeSet<u32> = [1, 2].into_iter().collect();
        assert_eq!(filter_alerts(&data, AlertTab::Subscribed, &subscribed).len(), 2);

        assert!(toggle_subscription(&mut subscribed, 4));
        assert!(!toggle_subscription(&mut subscribed, 1));
        let ids: Vec<u32> = filter_alerts(&data, AlertTab::Subscribed, &subscribed)
            .iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn severity_parse_ignores_case() {
        assert_eq!(Severity::parse("Critical"), Some(Severity::Critical));
        assert_eq!(Severity::parse(" HIGH "), Some(Severity::High));
        assert_eq!(Severity::parse("extreme"), None);
    }
}

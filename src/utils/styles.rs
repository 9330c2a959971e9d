// ============================================================================
// CLASES CSS - tablas de correspondencia estado -> clase
// ============================================================================
// Cada página conserva su propia paleta; por eso hay varias funciones para
// la misma gravedad.
// ============================================================================

use crate::models::{
    DisasterStatus, RecordStatus, ResourceStatus, Severity, ShelterStatus, ShelterType,
    StockStatus, UserRole,
};

/// Insignia de gravedad en Alerts y en el panel admin
pub fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "bg-emergency text-white",
        Severity::High => "bg-alert text-white",
        Severity::Medium => "bg-info text-white",
        Severity::Low => "bg-success text-white",
    }
}

/// Gravedad de los desastres recientes de la portada
pub fn disaster_severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical | Severity::High => "alert-badge alert-badge-emergency",
        Severity::Medium => "alert-badge alert-badge-warning",
        Severity::Low => "alert-badge alert-badge-info",
    }
}

pub fn disaster_status_class(status: DisasterStatus) -> &'static str {
    match status {
        DisasterStatus::Active => "animate-pulse-alert bg-emergency text-white px-2 py-1 rounded-full text-xs",
        DisasterStatus::Contained => "bg-alert text-white px-2 py-1 rounded-full text-xs",
        DisasterStatus::Recovery => "bg-info text-white px-2 py-1 rounded-full text-xs",
    }
}

/// Insignias suaves del dashboard personal
pub fn user_alert_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical | Severity::High => "bg-emergency/20 text-emergency-dark",
        Severity::Medium => "bg-alert/20 text-alert-dark",
        Severity::Low => "bg-info/20 text-info-dark",
    }
}

pub fn resource_status_class(status: ResourceStatus) -> &'static str {
    match status {
        ResourceStatus::Open => "bg-success/20 text-success-dark",
        ResourceStatus::Limited => "bg-alert/20 text-alert-dark",
        ResourceStatus::Closed => "bg-emergency/20 text-emergency-dark",
    }
}

pub fn shelter_type_class(shelter_type: ShelterType) -> &'static str {
    match shelter_type {
        ShelterType::Evacuation => "bg-blue-100 text-info-dark",
        ShelterType::LongTerm => "bg-green-100 text-success-dark",
        ShelterType::Medical => "bg-red-100 text-emergency-dark",
    }
}

/// Color por ocupación: <50 % verde, <80 % naranja, resto rojo
pub fn occupancy_class(capacity: u32, occupancy: u32) -> &'static str {
    let percent = crate::utils::percentage(occupancy as f64, capacity as f64);
    if percent < 50.0 {
        "bg-success text-white"
    } else if percent < 80.0 {
        "bg-alert text-white"
    } else {
        "bg-emergency text-white"
    }
}

pub fn priority_class(priority: Severity) -> &'static str {
    match priority {
        Severity::Critical => "text-white bg-emergency",
        Severity::High => "text-white bg-alert",
        Severity::Medium => "text-white bg-info",
        Severity::Low => "text-white bg-gray-500",
    }
}

pub fn record_status_class(status: RecordStatus) -> &'static str {
    match status {
        RecordStatus::Active => "bg-success text-white",
        RecordStatus::Inactive => "bg-muted text-muted-foreground",
    }
}

pub fn shelter_status_class(status: ShelterStatus) -> &'static str {
    match status {
        ShelterStatus::Open => "bg-success text-white",
        ShelterStatus::Limited => "bg-alert text-white",
        ShelterStatus::Closed => "bg-destructive text-white",
    }
}

pub fn role_class(role: UserRole) -> &'static str {
    match role {
        UserRole::Admin => "bg-primary text-white",
        UserRole::Volunteer => "bg-secondary text-white",
        UserRole::User => "bg-muted text-muted-foreground",
    }
}

pub fn stock_status_class(status: StockStatus) -> &'static str {
    match status {
        StockStatus::Urgent => "bg-emergency text-white",
        StockStatus::Needed => "bg-alert text-white",
        StockStatus::Good => "bg-success text-white",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupancy_thresholds() {
        assert_eq!(occupancy_class(200, 60), "bg-success text-white");
        assert_eq!(occupancy_class(200, 120), "bg-alert text-white");
        assert_eq!(occupancy_class(200, 160), "bg-emergency text-white");
        assert_eq!(occupancy_class(120, 110), "bg-emergency text-white");
    }

    #[test]
    fn severity_palettes_differ_per_page() {
        assert_eq!(severity_class(Severity::Critical), "bg-emergency text-white");
        assert_eq!(user_alert_class(Severity::High), "bg-emergency/20 text-emergency-dark");
        assert_eq!(disaster_severity_class(Severity::Medium), "alert-badge alert-badge-warning");
    }
}

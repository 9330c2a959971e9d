use crate::models::{Alert, Severity};

/// Alertas suscritas al abrir la página
pub const DEFAULT_SUBSCRIPTIONS: [u32; 2] = [1, 2];

#[allow(clippy::too_many_arguments)]
fn alert(
    id: u32,
    kind: &str,
    title: &str,
    description: &str,
    location: &str,
    timestamp: &str,
    severity: Severity,
    instructions: &str,
    is_active: bool,
) -> Alert {
    Alert {
        id,
        kind: kind.into(),
        title: title.into(),
        description: description.into(),
        location: location.into(),
        timestamp: timestamp.into(),
        severity,
        instructions: instructions.into(),
        is_active,
    }
}

pub fn alerts() -> Vec<Alert> {
    vec![
        alert(
            1,
            "Hurricane",
            "Hurricane Warning",
            "Hurricane approaching the southern coast. Expected to make landfall in 24 hours.",
            "Ranchi",
            "2023-09-15T08:30:00",
            Severity::Critical,
            "Evacuate immediately if in evacuation zones. Secure property and prepare emergency supplies.",
            true,
        ),
        alert(
            2,
            "Flood",
            "Flash Flood Warning",
            "Heavy rainfall causing rapid flooding in low-lying areas.",
            "Mumbai Bandra",
            "2023-09-14T14:15:00",
            Severity::High,
            "Avoid flooded areas. Do not attempt to cross flowing streams. Move to higher ground.",
            true,
        ),
        alert(
            3,
            "Wildfire",
            "Wildfire Alert",
            "Rapidly spreading wildfire threatening residential areas.",
            "Ayanagar",
            "2023-09-10T11:20:00",
            Severity::High,
            "Be ready to evacuate. Pack essential items and important documents. Follow evacuation routes.",
            true,
        ),
        alert(
            4,
            "Earthquake",
            "Earthquake Advisory",
            "5.2 magnitude earthquake detected. Aftershocks possible.",
            "Khanpur",
            "2023-09-05T02:45:00",
            Severity::Medium,
            "Check for injuries and damage. Be prepared for aftershocks. Stay away from damaged buildings.",
            false,
        ),
        alert(
            5,
            "Tornado",
            "Tornado Watch",
            "Conditions are favorable for tornado development in the next few hours.",
            "Saket",
            "2023-09-01T16:30:00",
            Severity::Medium,
            "Stay alert for changing weather conditions. Have an emergency plan ready.",
            false,
        ),
    ]
}

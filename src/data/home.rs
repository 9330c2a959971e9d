use crate::models::{DisasterStatus, Feature, RecentDisaster, Severity};

pub fn features() -> Vec<Feature> {
    [
        ("Real-time Alerts", "Get immediate notifications about emergencies and critical updates in your area.", "🔔", "/alerts", "bg-primary/10"),
        ("Shelter Locator", "Find nearby emergency shelters and safe zones with directions.", "📍", "/shelters", "bg-emergency/10"),
        ("Donation & Support", "Contribute to relief efforts and provide assistance to affected areas.", "❤️", "/donation", "bg-secondary/10"),
        ("Post-Disaster Recovery", "Access resources and guidance for recovery after a disaster.", "🛡️", "/recovery", "bg-info/10"),
        ("Community Volunteering", "Join volunteer efforts and help your community during emergencies.", "👥", "/community", "bg-alert/10"),
    ]
    .into_iter()
    .map(|(title, description, icon, path, color_class)| Feature {
        title: title.into(),
        description: description.into(),
        icon: icon.into(),
        path: path.into(),
        color_class: color_class.into(),
    })
    .collect()
}

pub fn recent_disasters() -> Vec<RecentDisaster> {
    [
        (1, "Hurricane", "Florida Coast", Severity::High, "2023-06-15", DisasterStatus::Active),
        (2, "Wildfire", "California", Severity::Medium, "2023-07-01", DisasterStatus::Contained),
        (3, "Flood", "Mississippi River", Severity::High, "2023-05-20", DisasterStatus::Recovery),
    ]
    .into_iter()
    .map(|(id, title, location, severity, date, status)| RecentDisaster {
        id,
        title: title.into(),
        location: location.into(),
        severity,
        date: date.into(),
        status,
    })
    .collect()
}

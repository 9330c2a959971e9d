use crate::models::{
    ActivityCategory, ActivityEntry, ChecklistItem, NearbyResource, ResourceKind, ResourceStatus,
    SafetyStatus, Severity, Tally, UserAlert, UserAlertKind, VolunteerActivity,
};

pub fn safety_status() -> SafetyStatus {
    SafetyStatus {
        checklist: Tally { done: 5, total: 8 },
        contacts: Tally { done: 3, total: 5 },
        documents: Tally { done: 4, total: 6 },
    }
}

pub fn user_alerts() -> Vec<UserAlert> {
    [
        (
            1,
            UserAlertKind::Warning,
            "Flash Flood Warning",
            "Flash flooding possible in your area. Stay vigilant and avoid low-lying areas.",
            "2 hours ago",
            Severity::High,
        ),
        (
            2,
            UserAlertKind::Info,
            "Weather Advisory",
            "Heavy rainfall expected in the next 24 hours. Be prepared for potential flooding.",
            "5 hours ago",
            Severity::Medium,
        ),
        (
            3,
            UserAlertKind::Status,
            "Power Restoration Update",
            "Crews working to restore power in your area. Estimated restoration by 8PM today.",
            "7 hours ago",
            Severity::Low,
        ),
    ]
    .into_iter()
    .map(|(id, kind, title, description, time, severity)| UserAlert {
        id,
        kind,
        title: title.into(),
        description: description.into(),
        location: "Lincoln, NE".into(),
        time: time.into(),
        severity,
    })
    .collect()
}

pub fn nearby_resources() -> Vec<NearbyResource> {
    vec![
        NearbyResource {
            id: 1,
            kind: ResourceKind::Shelter,
            name: "Central Community Center".into(),
            distance: 2.3,
            status: ResourceStatus::Open,
            capacity: Some(Tally { done: 120, total: 200 }),
            schedule: None,
        },
        NearbyResource {
            id: 2,
            kind: ResourceKind::Medical,
            name: "Westview Medical Shelter".into(),
            distance: 6.1,
            status: ResourceStatus::Open,
            capacity: Some(Tally { done: 110, total: 120 }),
            schedule: None,
        },
        NearbyResource {
            id: 3,
            kind: ResourceKind::Supplies,
            name: "Northside Supply Distribution".into(),
            distance: 3.7,
            status: ResourceStatus::Open,
            capacity: None,
            schedule: Some("9AM-6PM".into()),
        },
    ]
}

pub fn volunteer_activities() -> Vec<VolunteerActivity> {
    vec![
        VolunteerActivity {
            id: 1,
            title: "Flood Relief Volunteers".into(),
            organization: "Red Cross".into(),
            date: "2023-09-25".into(),
            time: "9:00 AM - 4:00 PM".into(),
            location: "Mississippi River Basin".into(),
        },
        VolunteerActivity {
            id: 2,
            title: "Emergency Supply Distribution".into(),
            organization: "Local Emergency Management".into(),
            date: "2023-09-30".into(),
            time: "7:00 AM - 2:00 PM".into(),
            location: "Lincoln, NE".into(),
        },
    ]
}

pub fn checklist() -> Vec<ChecklistItem> {
    [
        ("Create an emergency plan", Some("Sep 5, 2023")),
        ("Prepare emergency kit", Some("Sep 10, 2023")),
        ("Identify evacuation routes", None),
        ("Add emergency contacts", Some("Sep 8, 2023")),
        ("Create a communication plan", None),
    ]
    .into_iter()
    .map(|(title, completed_on)| ChecklistItem {
        title: title.into(),
        completed_on: completed_on.map(String::from),
    })
    .collect()
}

pub fn recent_activity() -> Vec<ActivityEntry> {
    [
        (
            ActivityCategory::Volunteer,
            "Volunteered for Flood Relief",
            "You signed up to volunteer with Red Cross for flood relief efforts.",
            "2 days ago",
        ),
        (
            ActivityCategory::Alerts,
            "Alert Received: Flash Flood Warning",
            "You received a high priority alert for your area.",
            "2 days ago",
        ),
        (
            ActivityCategory::Checklist,
            "Completed: Prepare Emergency Kit",
            "You marked the \"Prepare Emergency Kit\" task as completed.",
            "5 days ago",
        ),
        (
            ActivityCategory::Donations,
            "Donation Made: $50",
            "You donated $50 to the Wildfire Recovery Initiative.",
            "1 week ago",
        ),
    ]
    .into_iter()
    .map(|(category, title, detail, when)| ActivityEntry {
        category,
        title: title.into(),
        detail: detail.into(),
        when: when.into(),
    })
    .collect()
}

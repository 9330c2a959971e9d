use crate::models::{
    AdminActivity, AdminAlert, AdminShelter, AdminStats, DonationKind, DonationRecord,
    RecordStatus, ServiceState, ServiceStatus, Severity, ShelterStatus, UserRecord, UserRole,
};

pub fn stats() -> AdminStats {
    AdminStats {
        active_alerts: 8,
        registered_users: 2542,
        active_shelters: 12,
        volunteers: 486,
        donations: "$24,350".into(),
    }
}

pub fn users() -> Vec<UserRecord> {
    use RecordStatus::*;
    use UserRole::*;
    [
        (1, "John Doe", "john@example.com", User, Active, "Lincoln, NE", "2023-09-14T10:30:00", "2023-03-25"),
        (2, "Jane Smith", "jane@example.com", Admin, Active, "Omaha, NE", "2023-09-15T08:45:00", "2023-02-12"),
        (3, "Robert Johnson", "robert@example.com", User, Inactive, "Lincoln, NE", "2023-08-30T14:20:00", "2023-05-08"),
        (4, "Sarah Wilson", "sarah@example.com", Volunteer, Active, "Grand Island, NE", "2023-09-15T11:10:00", "2023-04-17"),
        (5, "Michael Brown", "michael@example.com", User, Active, "Lincoln, NE", "2023-09-14T16:05:00", "2023-06-22"),
    ]
    .into_iter()
    .map(|(id, name, email, role, status, location, last_active, join_date)| UserRecord {
        id,
        name: name.into(),
        email: email.into(),
        role,
        status,
        location: location.into(),
        last_active: last_active.into(),
        join_date: join_date.into(),
    })
    .collect()
}

pub fn admin_alerts() -> Vec<AdminAlert> {
    use RecordStatus::*;
    [
        (1, "Hurricane Warning", "Weather", Severity::Critical, "Florida Coast", Active, "2023-09-14T08:30:00", "Jane Smith", 1254),
        (2, "Flash Flood Warning", "Weather", Severity::High, "Mississippi River Basin", Active, "2023-09-14T14:15:00", "Jane Smith", 892),
        (3, "Wildfire Alert", "Fire", Severity::High, "Northern California", Active, "2023-09-10T11:20:00", "Admin System", 745),
        (4, "Earthquake Advisory", "Geological", Severity::Medium, "Central California", Inactive, "2023-09-05T02:45:00", "Admin System", 1103),
        (5, "Tornado Watch", "Weather", Severity::Medium, "Oklahoma", Inactive, "2023-09-01T16:30:00", "Jane Smith", 658),
    ]
    .into_iter()
    .map(
        |(id, title, kind, severity, location, status, created, updated_by, recipients)| AdminAlert {
            id,
            title: title.into(),
            kind: kind.into(),
            severity,
            location: location.into(),
            status,
            created: created.into(),
            updated_by: updated_by.into(),
            recipients,
        },
    )
    .collect()
}

pub fn admin_shelters() -> Vec<AdminShelter> {
    [
        (1, "Central Community Center", "123 Main St, Lincoln, NE 68508", 200, 120, "2023-09-15T07:30:00"),
        (2, "Eastside High School", "456 Oak Ave, Lincoln, NE 68510", 350, 280, "2023-09-15T08:15:00"),
        (3, "Westview Medical Shelter", "789 Elm St, Lincoln, NE 68512", 120, 110, "2023-09-15T06:45:00"),
        (4, "Northside Church", "321 Pine Rd, Lincoln, NE 68521", 150, 60, "2023-09-15T09:00:00"),
    ]
    .into_iter()
    .map(|(id, name, address, capacity, occupancy, last_updated)| AdminShelter {
        id,
        name: name.into(),
        address: address.into(),
        capacity,
        occupancy,
        status: ShelterStatus::Open,
        last_updated: last_updated.into(),
    })
    .collect()
}

pub fn admin_activity() -> Vec<AdminActivity> {
    [
        ("New alert created: Flash Flood Warning", "Jane Smith", "2023-09-14T14:15:00"),
        ("Shelter status updated: Central Community Center", "Admin System", "2023-09-15T07:30:00"),
        ("User role changed: Sarah Wilson to Volunteer", "Jane Smith", "2023-09-14T10:45:00"),
        ("Alert status changed: Earthquake Advisory to Inactive", "Admin System", "2023-09-06T08:20:00"),
    ]
    .into_iter()
    .map(|(title, actor, at)| AdminActivity {
        title: title.into(),
        actor: actor.into(),
        at: at.into(),
    })
    .collect()
}

pub fn service_statuses() -> Vec<ServiceStatus> {
    [
        ("Alert System", ServiceState::Operational),
        ("User Authentication", ServiceState::Operational),
        ("Resource Management", ServiceState::Operational),
        ("SMS Notifications", ServiceState::Degraded),
        ("Map Services", ServiceState::Operational),
    ]
    .into_iter()
    .map(|(name, state)| ServiceStatus { name: name.into(), state })
    .collect()
}

/// Métricas fijas del bloque "System Metrics"
pub fn system_metrics() -> [(&'static str, &'static str); 4] {
    [
        ("Response Time", "315ms"),
        ("Uptime", "99.9%"),
        ("Alerts Sent Today", "1,254"),
        ("Active Sessions", "432"),
    ]
}

/// Reparto de donaciones por campaña: (campaña, importe, ancho de barra %)
pub fn donation_breakdown() -> [(&'static str, &'static str, u32); 3] {
    [
        ("Hurricane Relief", "$14,250", 58),
        ("Wildfire Recovery", "$6,780", 28),
        ("Flood Response", "$3,320", 14),
    ]
}

pub fn donation_records() -> Vec<DonationRecord> {
    use DonationKind::*;
    [
        ("2023-09-15T10:23:00", "Anonymous", Financial, "$250.00", "Hurricane Relief"),
        ("2023-09-15T09:15:00", "John Doe", Financial, "$100.00", "Wildfire Recovery"),
        ("2023-09-14T15:40:00", "Local Grocery Store", Supplies, "200 Water Bottles", "General"),
        ("2023-09-14T13:20:00", "Sarah Wilson", Financial, "$50.00", "Flood Response"),
    ]
    .into_iter()
    .map(|(date, donor, kind, amount, campaign)| DonationRecord {
        date: date.into(),
        donor: donor.into(),
        kind,
        amount: amount.into(),
        campaign: campaign.into(),
    })
    .collect()
}

use crate::models::{Campaign, SupplyNeed, Severity};

pub fn campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            id: 1,
            title: "Hurricane Relief Fund".into(),
            description: "Supporting families affected by recent hurricanes with shelter, food, and essential supplies.".into(),
            raised: 85_000,
            goal: 100_000,
            donors_count: 1250,
            days_left: 12,
        },
        Campaign {
            id: 2,
            title: "Wildfire Recovery Initiative".into(),
            description: "Helping communities rebuild after devastating wildfires destroyed homes and infrastructure.".into(),
            raised: 45_000,
            goal: 75_000,
            donors_count: 560,
            days_left: 20,
        },
        Campaign {
            id: 3,
            title: "Flood Response & Rebuilding".into(),
            description: "Immediate aid and long-term support for families displaced by severe flooding.".into(),
            raised: 32_000,
            goal: 50_000,
            donors_count: 430,
            days_left: 15,
        },
    ]
}

pub fn supply_needs() -> Vec<SupplyNeed> {
    [
        (1, "Canned Food", 500, 320, Severity::High),
        (2, "Blankets", 300, 150, Severity::High),
        (3, "Baby Formula", 100, 25, Severity::Critical),
        (4, "Water Bottles", 1000, 800, Severity::Medium),
        (5, "First Aid Kits", 200, 90, Severity::High),
    ]
    .into_iter()
    .map(|(id, item, needed, received, priority)| SupplyNeed {
        id,
        item: item.into(),
        needed,
        received,
        priority,
    })
    .collect()
}

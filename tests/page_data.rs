// Datos estáticos de las páginas junto con sus filtros y formularios

use std::collections::BTreeSet;

use disaster_haven::data::{admin, alerts, community, donation, recovery, shelters};
use disaster_haven::models::forms::{AmountChoice, DonationForm, SupplyPickupForm};
use disaster_haven::models::{
    filter_alerts, filter_opportunities, filter_users, resources_in, showing_summary, AlertTab,
    ResourceCategory, Severity, ShelterFeature, ShelterFilters, StockStatus,
};

#[test]
fn default_subscriptions_show_first_two_alerts() {
    let data = alerts::alerts();
    let subscribed: BTreeSet<u32> = alerts::DEFAULT_SUBSCRIPTIONS.into_iter().collect();
    let ids: Vec<u32> = filter_alerts(&data, AlertTab::Subscribed, &subscribed)
        .iter()
        .map(|a| a.id)
        .collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(filter_alerts(&data, AlertTab::All, &subscribed).len(), data.len());
}

#[test]
fn shelter_filters_combine_search_and_features() {
    let data = shelters::shelters();
    let mut filters = ShelterFilters::new(100.0);
    filters.toggle(ShelterFeature::Medical);
    let result = filters.apply(&data);
    assert!(result.iter().all(|s| s.has_medical && !s.is_full()));
    assert!(result.windows(2).all(|w| w[0].distance <= w[1].distance));

    filters.query = "no such shelter".into();
    assert!(filters.apply(&data).is_empty());
}

#[test]
fn support_this_cause_prefills_the_donation_form() {
    let campaigns = donation::campaigns();
    let mut form = DonationForm::default();
    form.support_cause(campaigns[0].cause_key());
    assert_eq!(form.amount, AmountChoice::Preset(50));
    assert_eq!(form.cause, "hurricane");

    form.anonymous = true;
    form.email = "donor@example.com".into();
    assert!(form.validate().is_ok());
}

#[test]
fn supply_pickup_needs_items() {
    let form = SupplyPickupForm {
        name: "Ana".into(),
        email: "ana@example.com".into(),
        ..SupplyPickupForm::default()
    };
    assert_eq!(
        form.validate().unwrap_err().to_string(),
        "Please list the items you wish to donate"
    );
}

#[test]
fn supply_stock_status_uses_thresholds() {
    for need in donation::supply_needs() {
        let percent = need.progress_percent();
        let expected = if percent < 30.0 {
            StockStatus::Urgent
        } else if percent < 80.0 {
            StockStatus::Needed
        } else {
            StockStatus::Good
        };
        assert_eq!(need.stock_status(), expected, "{}", need.item);
    }
}

#[test]
fn community_and_admin_search_are_case_insensitive() {
    let opportunities = community::volunteer_opportunities();
    assert_eq!(
        filter_opportunities(&opportunities, "RED CROSS").len(),
        filter_opportunities(&opportunities, "red cross").len()
    );

    let users = admin::users();
    let shown = filter_users(&users, "LINCOLN");
    assert_eq!(showing_summary(shown.len(), users.len(), "users"), "Showing 3 of 5 users");
}

#[test]
fn every_recovery_category_has_resources() {
    let data = recovery::resources();
    for category in ResourceCategory::all() {
        assert!(!resources_in(&data, category).is_empty(), "{:?}", category);
    }
    assert_eq!(recovery::recovery_faqs().len(), 6);
}

#[test]
fn fixtures_serialize_with_lowercase_severity() {
    let json = serde_json::to_string(&alerts::alerts()[0]).unwrap();
    let severity = alerts::alerts()[0].severity;
    assert!(json.contains(&format!("\"severity\":\"{}\"", severity.as_str())));
    assert_eq!(serde_json::from_str::<Severity>("\"medium\"").unwrap(), Severity::Medium);
}

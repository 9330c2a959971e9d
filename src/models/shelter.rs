use serde::{Deserialize, Serialize};

use crate::utils::{matches_query, percentage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShelterType {
    Evacuation,
    LongTerm,
    Medical,
}

impl ShelterType {
    pub fn label(&self) -> &'static str {
        match self {
            ShelterType::Evacuation => "Evacuation",
            ShelterType::LongTerm => "Long-term",
            ShelterType::Medical => "Medical",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shelter {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone: String,
    pub capacity: u32,
    pub occupancy: u32,
    pub shelter_type: ShelterType,
    pub amenities: Vec<String>,
    pub distance: f64,
    pub opening_hours: String,
    pub has_accessibility: bool,
    pub has_pets: bool,
    pub has_food: bool,
    pub has_water: bool,
    pub has_medical: bool,
    pub has_internet: bool,
    pub has_shower: bool,
}

impl Shelter {
    pub fn spots_left(&self) -> u32 {
        self.capacity.saturating_sub(self.occupancy)
    }

    pub fn is_full(&self) -> bool {
        self.occupancy >= self.capacity
    }

    pub fn occupancy_percent(&self) -> f64 {
        percentage(self.occupancy as f64, self.capacity as f64)
    }

    pub fn full_address(&self) -> String {
        format!("{}, {}, {} {}", self.address, self.city, self.state, self.zip_code)
    }

    /// Etiquetas de servicios disponibles, en el orden de las insignias
    pub fn feature_badges(&self) -> Vec<&'static str> {
        [
            (self.has_food, "Food"),
            (self.has_water, "Water"),
            (self.has_medical, "Medical"),
            (self.has_internet, "Internet"),
            (self.has_shower, "Showers"),
            (self.has_pets, "Pet Friendly"),
            (self.has_accessibility, "Accessible"),
        ]
        .into_iter()
        .filter_map(|(present, label)| present.then_some(label))
        .collect()
    }
}

/// Filtros activables en la barra lateral del localizador
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShelterFeature {
    Availability,
    Accessibility,
    Pets,
    Food,
    Medical,
}

impl ShelterFeature {
    pub fn all() -> [ShelterFeature; 5] {
        [
            ShelterFeature::Availability,
            ShelterFeature::Accessibility,
            ShelterFeature::Pets,
            ShelterFeature::Food,
            ShelterFeature::Medical,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            ShelterFeature::Availability => "hasAvailability",
            ShelterFeature::Accessibility => "hasAccessibility",
            ShelterFeature::Pets => "hasPets",
            ShelterFeature::Food => "hasFood",
            ShelterFeature::Medical => "hasMedical",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShelterFeature::Availability => "Has Availability",
            ShelterFeature::Accessibility => "Accessibility Features",
            ShelterFeature::Pets => "Accepts Pets",
            ShelterFeature::Food => "Food Available",
            ShelterFeature::Medical => "Medical Services",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShelterFilters {
    pub query: String,
    pub max_distance: f64,
    pub has_availability: bool,
    pub has_accessibility: bool,
    pub has_pets: bool,
    pub has_food: bool,
    pub has_medical: bool,
}

impl ShelterFilters {
    pub fn new(max_distance: f64) -> Self {
        Self {
            query: String::new(),
            max_distance,
            has_availability: true,
            has_accessibility: false,
            has_pets: false,
            has_food: false,
            has_medical: false,
        }
    }

    pub fn is_enabled(&self, feature: ShelterFeature) -> bool {
        match feature {
            ShelterFeature::Availability => self.has_availability,
            ShelterFeature::Accessibility => self.has_accessibility,
            ShelterFeature::Pets => self.has_pets,
            ShelterFeature::Food => self.has_food,
            ShelterFeature::Medical => self.has_medical,
        }
    }

    pub fn toggle(&mut self, feature: ShelterFeature) {
        let flag = match feature {
            ShelterFeature::Availability => &mut self.has_availability,
            ShelterFeature::Accessibility => &mut self.has_accessibility,
            ShelterFeature::Pets => &mut self.has_pets,
            ShelterFeature::Food => &mut self.has_food,
            ShelterFeature::Medical => &mut self.has_medical,
        };
        *flag = !*flag;
    }

    pub fn matches(&self, shelter: &Shelter) -> bool {
        if !matches_query(&self.query, &[&shelter.name, &shelter.city, &shelter.address]) {
            return false;
        }
        if shelter.distance > self.max_distance {
            return false;
        }
        if self.has_availability && shelter.is_full() {
            return false;
        }
        (!self.has_accessibility || shelter.has_accessibility)
            && (!self.has_pets || shelter.has_pets)
            && (!self.has_food || shelter.has_food)
            && (!self.has_medical || shelter.has_medical)
    }

    /// Refugios que pasan todos los filtros, del más cercano al más lejano
    pub fn apply<'a>(&self, shelters: &'a [Shelter]) -> Vec<&'a Shelter> {
        let mut result: Vec<&Shelter> = shelters.iter().filter(|s| self.matches(s)).collect();
        result.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::shelters::shelters;

    #[test]
    fn default_filters_return_all_sorted_by_distance() {
        let data = shelters();
        let result = ShelterFilters::new(50.0).apply(&data);
        assert_eq!(result.len(), 5);
        assert!(result.windows(2).all(|w| w[0].distance <= w[1].distance));
    }

    #[test]
    fn query_matches_name_city_or_address() {
        let data = shelters();
        let mut filters = ShelterFilters::new(50.0);
        filters.query = "oak ave".into();
        let result = filters.apply(&data);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Eastside High School");

        filters.query = "LINCOLN".into();
        assert_eq!(filters.apply(&data).len(), 5);
    }

    #[test]
    fn distance_and_feature_filters_combine() {
        let data = shelters();
        let mut filters = ShelterFilters::new(5.0);
        assert_eq!(filters.apply(&data).len(), 2);

        filters.max_distance = 100.0;
        filters.toggle(ShelterFeature::Pets);
        let names: Vec<&str> = filters.apply(&data).iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Central Community Center", "Northside Church", "Southside Long Term Relief Center"]
        );
    }

    #[test]
    fn availability_filter_hides_full_shelters() {
        let mut data = shelters();
        data[0].occupancy = data[0].capacity;
        let mut filters = ShelterFilters::new(50.0);
        assert_eq!(filters.apply(&data).len(), 4);
        filters.toggle(ShelterFeature::Availability);
        assert_eq!(filters.apply(&data).len(), 5);
    }

    #[test]
    fn spots_left_never_underflows() {
        let mut shelter = shelters().remove(0);
        shelter.occupancy = shelter.capacity + 10;
        assert_eq!(shelter.spots_left(), 0);
    }
}

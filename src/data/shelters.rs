use crate::models::{Shelter, ShelterType};

struct Amenities {
    accessibility: bool,
    pets: bool,
    food: bool,
    water: bool,
    medical: bool,
    internet: bool,
    shower: bool,
}

#[allow(clippy::too_many_arguments)]
fn shelter(
    id: u32,
    name: &str,
    address: &str,
    zip_code: &str,
    phone: &str,
    capacity: u32,
    occupancy: u32,
    shelter_type: ShelterType,
    amenities: &[&str],
    distance: f64,
    opening_hours: &str,
    flags: Amenities,
) -> Shelter {
    Shelter {
        id,
        name: name.into(),
        address: address.into(),
        city: "Lincoln".into(),
        state: "NE".into(),
        zip_code: zip_code.into(),
        phone: phone.into(),
        capacity,
        occupancy,
        shelter_type,
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
        distance,
        opening_hours: opening_hours.into(),
        has_accessibility: flags.accessibility,
        has_pets: flags.pets,
        has_food: flags.food,
        has_water: flags.water,
        has_medical: flags.medical,
        has_internet: flags.internet,
        has_shower: flags.shower,
    }
}

pub fn shelters() -> Vec<Shelter> {
    vec![
        shelter(
            1,
            "Central Community Center",
            "123 Main St",
            "68508",
            "(402) 555-1234",
            200,
            120,
            ShelterType::Evacuation,
            &["Food", "Water", "Medical", "Restrooms", "Charging Stations"],
            2.3,
            "24/7 during emergencies",
            Amenities { accessibility: true, pets: true, food: true, water: true, medical: true, internet: true, shower: true },
        ),
        shelter(
            2,
            "Eastside High School",
            "456 Oak Ave",
            "68510",
            "(402) 555-5678",
            350,
            280,
            ShelterType::Evacuation,
            &["Food", "Water", "Restrooms", "Charging Stations"],
            4.7,
            "8:00 AM - 10:00 PM",
            Amenities { accessibility: true, pets: false, food: true, water: true, medical: false, internet: true, shower: true },
        ),
        shelter(
            3,
            "Westview Medical Shelter",
            "789 Elm St",
            "68512",
            "(402) 555-9012",
            120,
            110,
            ShelterType::Medical,
            &["Medical Care", "Food", "Water", "Restrooms", "Accessibility"],
            6.1,
            "24/7",
            Amenities { accessibility: true, pets: false, food: true, water: true, medical: true, internet: true, shower: true },
        ),
        shelter(
            4,
            "Northside Church",
            "321 Pine Rd",
            "68521",
            "(402) 555-3456",
            150,
            60,
            ShelterType::Evacuation,
            &["Food", "Water", "Restrooms", "Pet Area"],
            8.4,
            "7:00 AM - 9:00 PM",
            Amenities { accessibility: false, pets: true, food: true, water: true, medical: false, internet: false, shower: false },
        ),
        shelter(
            5,
            "Southside Long Term Relief Center",
            "987 Cedar Blvd",
            "68516",
            "(402) 555-7890",
            200,
            190,
            ShelterType::LongTerm,
            &["Food", "Water", "Restrooms", "Laundry", "Counseling"],
            10.2,
            "24/7",
            Amenities { accessibility: true, pets: true, food: true, water: true, medical: true, internet: true, shower: true },
        ),
    ]
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceCategory {
    Financial,
    Housing,
    Legal,
    MentalHealth,
}

impl ResourceCategory {
    pub fn all() -> [ResourceCategory; 4] {
        [
            ResourceCategory::Financial,
            ResourceCategory::Housing,
            ResourceCategory::Legal,
            ResourceCategory::MentalHealth,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            ResourceCategory::Financial => "financial",
            ResourceCategory::Housing => "housing",
            ResourceCategory::Legal => "legal",
            ResourceCategory::MentalHealth => "mentalHealth",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ResourceCategory::Financial => "Financial Assistance",
            ResourceCategory::Housing => "Housing Support",
            ResourceCategory::Legal => "Legal Services",
            ResourceCategory::MentalHealth => "Mental Health",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ResourceCategory::Financial => "🏛️",
            ResourceCategory::Housing => "🏠",
            ResourceCategory::Legal => "📄",
            ResourceCategory::MentalHealth => "💬",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoveryResource {
    pub id: u32,
    pub category: ResourceCategory,
    pub title: String,
    pub organization: String,
    pub description: String,
    pub phone: String,
    pub deadline: String,
    pub eligibility: String,
}

/// Pregunta frecuente (Recovery y Help)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

pub fn resources_in(resources: &[RecoveryResource], category: ResourceCategory) -> Vec<&RecoveryResource> {
    resources.iter().filter(|r| r.category == category).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::recovery::resources;

    #[test]
    fn resources_are_grouped_by_category() {
        let data = resources();
        let counts: Vec<usize> = ResourceCategory::all()
            .iter()
            .map(|c| resources_in(&data, *c).len())
            .collect();
        assert_eq!(counts, vec![3, 2, 1, 1]);
    }

    #[test]
    fn category_names() {
        assert_eq!(ResourceCategory::MentalHealth.key(), "mentalHealth");
        assert_eq!(ResourceCategory::Legal.display_name(), "Legal Services");
    }
}

use serde::{Deserialize, Serialize};

use crate::utils::{matches_query, percentage};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolunteerOpportunity {
    pub id: u32,
    pub title: String,
    pub organization: String,
    pub location: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub description: String,
    pub skills: Vec<String>,
    pub volunteers_needed: u32,
    pub volunteers_signed_up: u32,
}

impl VolunteerOpportunity {
    pub fn signup_progress(&self) -> f64 {
        percentage(self.volunteers_signed_up as f64, self.volunteers_needed as f64)
    }

    pub fn spots_remaining(&self) -> u32 {
        self.volunteers_needed.saturating_sub(self.volunteers_signed_up)
    }

    pub fn matches(&self, query: &str) -> bool {
        matches_query(query, &[&self.title, &self.location, &self.organization])
    }
}

/// Oportunidades que contienen la búsqueda en título, lugar u organización
pub fn filter_opportunities<'a>(
    opportunities: &'a [VolunteerOpportunity],
    query: &str,
) -> Vec<&'a VolunteerOpportunity> {
    opportunities.iter().filter(|o| o.matches(query)).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscussionPost {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub author_role: String,
    pub date: String,
    pub content: String,
    pub replies: u32,
    pub likes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessStory {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub date: String,
    pub content: String,
    pub likes: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommunityTab {
    Opportunities,
    Discussions,
    Success,
}

impl CommunityTab {
    pub fn all() -> [CommunityTab; 3] {
        [CommunityTab::Opportunities, CommunityTab::Discussions, CommunityTab::Success]
    }

    pub fn label(&self) -> &'static str {
        match self {
            CommunityTab::Opportunities => "Volunteer",
            CommunityTab::Discussions => "Discussions",
            CommunityTab::Success => "Success Stories",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::community::volunteer_opportunities;

    #[test]
    fn search_covers_title_location_and_organization() {
        let data = volunteer_opportunities();
        assert_eq!(filter_opportunities(&data, "").len(), 4);
        assert_eq!(filter_opportunities(&data, "delhi").len(), 3);
        assert_eq!(filter_opportunities(&data, "red cross").len(), 1);
        assert_eq!(filter_opportunities(&data, "WILDFIRE").len(), 1);
        assert!(filter_opportunities(&data, "tsunami").is_empty());
    }

    #[test]
    fn signup_progress_is_a_percentage() {
        let data = volunteer_opportunities();
        assert_eq!(data[0].signup_progress(), 72.0);
        assert_eq!(data[3].spots_remaining(), 12);
    }
}

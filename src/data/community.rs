use crate::models::{DiscussionPost, SuccessStory, VolunteerOpportunity};

#[allow(clippy::too_many_arguments)]
fn opportunity(
    id: u32,
    title: &str,
    organization: &str,
    location: &str,
    date: &str,
    (start_time, end_time): (&str, &str),
    description: &str,
    skills: &[&str],
    volunteers_needed: u32,
    volunteers_signed_up: u32,
) -> VolunteerOpportunity {
    VolunteerOpportunity {
        id,
        title: title.into(),
        organization: organization.into(),
        location: location.into(),
        date: date.into(),
        start_time: start_time.into(),
        end_time: end_time.into(),
        description: description.into(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        volunteers_needed,
        volunteers_signed_up,
    }
}

pub fn volunteer_opportunities() -> Vec<VolunteerOpportunity> {
    vec![
        opportunity(
            1,
            "Flood Relief Volunteers",
            "Red Cross",
            "Odisha",
            "2023-09-25",
            ("09:00 AM", "04:00 PM"),
            "Help distribute supplies, clean up debris, and assist affected families in flood-damaged areas.",
            &["Physical Labor", "Customer Service", "Organization"],
            25,
            18,
        ),
        opportunity(
            2,
            "Wildfire Recovery Team",
            "Community Rebuild",
            "Delhi",
            "2023-10-05",
            ("08:00 AM", "03:00 PM"),
            "Join our team to help rebuild structures and clear land damaged by recent wildfires.",
            &["Construction", "Landscaping", "Teamwork"],
            15,
            10,
        ),
        opportunity(
            3,
            "Hurricane Evacuation Center Support",
            "Disaster Relief Network",
            "Saket, Delhi",
            "2023-09-18",
            ("10:00 AM", "06:00 PM"),
            "Provide support and assistance at hurricane evacuation centers, including meal distribution and check-in services.",
            &["Compassion", "Organization", "Communication"],
            30,
            22,
        ),
        opportunity(
            4,
            "Emergency Supply Distribution",
            "Local Emergency Management",
            "Ayanagar, Delhi",
            "2023-09-30",
            ("07:00 AM", "02:00 PM"),
            "Help sort, package, and distribute emergency supplies to affected communities.",
            &["Organization", "Physical Labor", "Attention to Detail"],
            20,
            8,
        ),
    ]
}

pub fn discussions() -> Vec<DiscussionPost> {
    [
        (
            1,
            "Tips for Preparing an Emergency Kit",
            "Richa Bharti",
            "Emergency Preparedness Specialist",
            "2023-09-10",
            "I wanted to share some essential items that every household should have in their emergency kit. Based on my experience...",
            24,
            45,
        ),
        (
            2,
            "Looking for volunteers for elderly check-ins",
            "Mudita Jain",
            "Community Organizer",
            "2023-09-12",
            "We need volunteers to check on elderly residents during the upcoming storm. Please comment if you can help...",
            18,
            32,
        ),
        (
            3,
            "Shelter options for pets during evacuation",
            "Jessica Martinez",
            "Animal Rescue Coordinator",
            "2023-09-14",
            "Many people don't know where they can bring their pets during evacuations. Here's a list of pet-friendly shelters in our area...",
            30,
            56,
        ),
    ]
    .into_iter()
    .map(|(id, title, author, role, date, content, replies, likes)| DiscussionPost {
        id,
        title: title.into(),
        author: author.into(),
        author_role: role.into(),
        date: date.into(),
        content: content.into(),
        replies,
        likes,
    })
    .collect()
}

pub fn success_stories() -> Vec<SuccessStory> {
    vec![
        SuccessStory {
            id: 1,
            title: "Rebuilding Together: Smithville Recovery".into(),
            author: "Revant Prabhas".into(),
            date: "2023-08-25".into(),
            content: "After the tornado devastated our town, over 200 volunteers came together to rebuild the community center. This became our central hub for recovery efforts and brought our community closer than ever before.".into(),
            likes: 89,
        },
        SuccessStory {
            id: 2,
            title: "Senior Rescue During Flash Floods".into(),
            author: "Volunteer Rescue Team".into(),
            date: "2023-07-15".into(),
            content: "When flash floods hit unexpectedly, our volunteer team was able to safely evacuate 45 seniors from the Oakridge Retirement Community. The coordination between volunteers and emergency services was remarkable.".into(),
            likes: 124,
        },
    ]
}

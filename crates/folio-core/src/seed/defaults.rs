//! Default content inserted into empty collections.

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::{
    ClubCategory, NewBlogPost, NewClub, NewMarketingWork, NewMessage, NewProject, NewTestimonial,
};

const UNSPLASH: &str = "https://images.unsplash.com";

fn unsplash(photo: &str) -> String {
    format!("{UNSPLASH}/photo-{photo}")
}

fn club(
    name: &str,
    role: &str,
    description: &str,
    category: ClubCategory,
    images: &[&str],
) -> NewClub {
    NewClub {
        name: name.to_owned(),
        role: role.to_owned(),
        description: description.to_owned(),
        link: Some("#".to_owned()),
        category,
        images: images.iter().map(|photo| unsplash(photo)).collect(),
    }
}

pub fn clubs() -> Vec<NewClub> {
    vec![
        club(
            "Brampton FBLC, JEC & TA",
            "Vice President",
            "Led initiatives and organized events for future business leaders.",
            ClubCategory::Main,
            &["1517245386807-bb43f82c33c4"],
        ),
        club(
            "Chinguacousy Robotics",
            "Lead Programmer",
            "Developed autonomous code for competition robots.",
            ClubCategory::Main,
            &["1485827404703-89b55fcc595e"],
        ),
        club(
            "STAC",
            "Member",
            "Student Technology Advisory Council - bridging tech and students.",
            ClubCategory::Main,
            &["1531482615713-2afd69097998"],
        ),
        club(
            "Superposition Toronto",
            "Event Coordinator",
            "Organized hackathons for underrepresented groups in tech.",
            ClubCategory::Main,
            &["1540575467063-178a50c2df87"],
        ),
        club(
            "Debate Club",
            "Member",
            "Participated in regional debate tournaments.",
            ClubCategory::Other,
            &[],
        ),
    ]
}

fn project(title: &str, description: &str, tech_stack: &[&str], repo: &str) -> NewProject {
    NewProject {
        title: title.to_owned(),
        description: description.to_owned(),
        tech_stack: tech_stack.iter().map(|tech| (*tech).to_owned()).collect(),
        repo_link: Some(format!("https://github.com/user/{repo}")),
        demo_link: Some("#".to_owned()),
    }
}

pub fn projects() -> Vec<NewProject> {
    vec![
        project(
            "Portfolio Website",
            "A glassmorphism-styled personal portfolio.",
            &["React", "TypeScript", "Tailwind CSS"],
            "portfolio",
        ),
        project(
            "E-commerce Dashboard",
            "Admin dashboard for managing products and orders.",
            &["Vue.js", "Node.js", "PostgreSQL"],
            "dashboard",
        ),
        project(
            "Weather App",
            "Real-time weather application using OpenWeatherMap API.",
            &["React", "API Integration"],
            "weather",
        ),
    ]
}

const CAMPAIGN_COVERS: [&str; 2] = ["1542744173-8e7e53415bb0", "1557804506-669a67965ba0"];

/// Six campaigns alternating between two covers; each carousel shows both.
pub fn marketing_work() -> Vec<NewMarketingWork> {
    (1..=6)
        .map(|index| NewMarketingWork {
            title: format!("Marketing Campaign {index}"),
            description: "Social media graphics and branding materials.".to_owned(),
            image_url: unsplash(CAMPAIGN_COVERS[index % 2]),
            carousel_images: CAMPAIGN_COVERS.iter().map(|photo| unsplash(photo)).collect(),
            category: Some("Social Media".to_owned()),
        })
        .collect()
}

pub fn testimonials() -> Vec<NewTestimonial> {
    vec![
        NewTestimonial {
            name: "Priya Sharma".to_owned(),
            role: "Robotics Team Captain".to_owned(),
            content: "Our autonomous routine went from unreliable to consistent in a single season."
                .to_owned(),
        },
        NewTestimonial {
            name: "Marcus Lee".to_owned(),
            role: "Hackathon Participant".to_owned(),
            content: "The best-organized student hackathon I have attended.".to_owned(),
        },
    ]
}

fn published(year: i32, month: u32, day: u32) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .map(|moment| moment.and_utc())
}

pub fn blog_posts() -> Vec<NewBlogPost> {
    vec![
        NewBlogPost {
            title: "Building a Robot That Drives Itself".to_owned(),
            content: "Notes from a season of writing autonomous code for competition robots."
                .to_owned(),
            image_url: Some(unsplash("1485827404703-89b55fcc595e")),
            published_at: published(2024, 3, 14),
        },
        NewBlogPost {
            title: "What Running a Hackathon Taught Me".to_owned(),
            content: "Planning, sponsors, and keeping a hundred students fed for a weekend."
                .to_owned(),
            image_url: Some(unsplash("1540575467063-178a50c2df87")),
            published_at: published(2024, 9, 2),
        },
        NewBlogPost {
            title: "Launching This Portfolio".to_owned(),
            content: "A short tour of the stack behind this site.".to_owned(),
            image_url: None,
            published_at: published(2025, 1, 20),
        },
    ]
}

/// The contact inbox starts empty.
pub fn messages() -> Vec<NewMessage> {
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::InsertSchema;

    #[test]
    fn test_defaults_satisfy_their_schemas() {
        clubs().iter().for_each(|club| club.check().unwrap());
        projects().iter().for_each(|project| project.check().unwrap());
        marketing_work().iter().for_each(|work| work.check().unwrap());
        testimonials().iter().for_each(|t| t.check().unwrap());
        blog_posts().iter().for_each(|post| post.check().unwrap());
    }

    #[test]
    fn test_default_clubs_cover_both_categories() {
        let clubs = clubs();
        assert_eq!(clubs.len(), 5);
        assert_eq!(
            clubs.iter().filter(|c| c.category == ClubCategory::Main).count(),
            4
        );
    }

    #[test]
    fn test_default_blog_posts_are_dated() {
        assert!(blog_posts().iter().all(|post| post.published_at.is_some()));
    }
}

use super::*;

fn contact(name: &str, email: &str, message: &str) -> NewMessage {
    NewMessage {
        name: name.to_owned(),
        email: email.to_owned(),
        message: message.to_owned(),
    }
}

#[test]
fn test_valid_contact_passes() {
    assert!(contact("Ada", "ada@example.com", "Hello").check().is_ok());
}

#[test]
fn test_first_violation_follows_field_order() {
    let violation = contact("", "not-an-email", "").check().unwrap_err();
    assert_eq!(violation.field, "name");
    assert_eq!(violation.message, "Name is required");
}

#[test]
fn test_malformed_email_is_reported() {
    let violation = contact("Ada", "not-an-email", "Hello").check().unwrap_err();
    assert_eq!(violation.field, "email");
    assert_eq!(violation.message, "Please enter a valid email address");
}

#[test]
fn test_empty_email_reports_required_first() {
    let violation = contact("Ada", "", "Hello").check().unwrap_err();
    assert_eq!(violation.message, "Email is required");
}

#[test]
fn test_testimonial_requires_content() {
    let testimonial = NewTestimonial {
        name: "Grace".to_owned(),
        role: "Mentor".to_owned(),
        content: String::new(),
    };
    let violation = testimonial.check().unwrap_err();
    assert_eq!(violation.field, "content");
    assert_eq!(violation.message, "Testimonial content is required");
}

#[test]
fn test_project_rejects_blank_technology() {
    let project = NewProject {
        title: "CLI".to_owned(),
        description: "A command line tool".to_owned(),
        tech_stack: vec!["Rust".to_owned(), "  ".to_owned()],
        repo_link: None,
        demo_link: None,
    };
    let violation = project.check().unwrap_err();
    assert_eq!(violation.field, "tech_stack");
}

#[test]
fn test_project_requires_a_technology() {
    let project = NewProject {
        title: "CLI".to_owned(),
        description: "A command line tool".to_owned(),
        tech_stack: Vec::new(),
        repo_link: None,
        demo_link: None,
    };
    let violation = project.check().unwrap_err();
    assert_eq!(violation.message, "At least one technology is required");
}

#[test]
fn test_club_category_rejects_unknown_value() {
    let payload = serde_json::json!({
        "name": "Chess Club",
        "role": "Member",
        "description": "Weekly games.",
        "category": "featured"
    });
    assert!(serde_json::from_value::<NewClub>(payload).is_err());
}

#[test]
fn test_records_serialize_camel_case() {
    let work = MarketingWork {
        id: 1,
        title: "Launch".to_owned(),
        description: "Poster set".to_owned(),
        image_url: "https://example.com/a.png".to_owned(),
        carousel_images: vec![],
        category: None,
    };
    let json = serde_json::to_value(&work).unwrap();
    assert!(json.get("imageUrl").is_some());
    assert!(json.get("carouselImages").is_some());
}

#[test]
fn test_contact_schema_lists_required_fields() {
    let schema = serde_json::to_value(NewMessage::describe()).unwrap();
    let required = schema["required"].as_array().unwrap();
    for field in ["name", "email", "message"] {
        assert!(required.iter().any(|value| value == field));
    }
}

#[test]
fn test_contact_and_testimonial_records_serialize_camel_case() {
    let message = Message {
        id: 1,
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        message: "Hello".to_owned(),
        created_at: chrono::Utc::now(),
    };
    let json = serde_json::to_value(&message).unwrap();
    assert!(json.get("createdAt").is_some());
    assert!(json.get("created_at").is_none());

    let testimonial: NewTestimonial = serde_json::from_value(serde_json::json!({
        "name": "Grace",
        "role": "Mentor",
        "content": "Sharp and reliable."
    }))
    .unwrap();
    assert!(testimonial.check().is_ok());

    let schema = serde_json::to_value(NewMessage::describe()).unwrap();
    for field in ["name", "email", "message"] {
        assert!(schema["properties"].get(field).is_some(), "{field}");
    }
}

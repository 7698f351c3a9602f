use jen_site_backend::validation::{
    ContactField, ContactFormFields, ReviewField, ReviewFormFields, validate_contact_form,
    validate_email, validate_phone, validate_review,
};

const VALID_MESSAGE: &str = "I would like to remodel my basement this spring.";

fn form<'a>(name: &'a str, message: &'a str) -> ContactFormFields<'a> {
    ContactFormFields {
        name,
        email: "jane@example.com",
        phone: "(555) 123-4567",
        service: "Kitchen Remodeling",
        message,
    }
}

#[test]
fn well_formed_form_is_valid() {
    let result = validate_contact_form(&form("Jane Doe", VALID_MESSAGE));
    assert!(result.valid);
    assert!(result.errors.is_empty());
}

#[test]
fn every_failing_field_is_reported() {
    let result = validate_contact_form(&ContactFormFields {
        name: "   ",
        email: "",
        phone: "",
        service: "",
        message: "",
    });

    assert!(!result.valid);
    assert_eq!(result.error(ContactField::Name), Some("Name is required"));
    assert_eq!(result.error(ContactField::Email), Some("Email is required"));
    assert_eq!(result.error(ContactField::Phone), Some("Phone number is required"));
    assert_eq!(result.error(ContactField::Service), Some("Please select a service"));
    assert_eq!(
        result.error(ContactField::Message),
        Some("Please tell us about your project")
    );
}

#[test]
fn name_boundary_is_200_characters() {
    let ok = "a".repeat(200);
    assert!(validate_contact_form(&form(&ok, VALID_MESSAGE)).valid);

    let long = "a".repeat(201);
    let result = validate_contact_form(&form(&long, VALID_MESSAGE));
    assert_eq!(result.error(ContactField::Name), Some("Name is too long"));
}

#[test]
fn name_is_measured_after_trimming() {
    let padded = format!("  {}  ", "a".repeat(200));
    assert!(validate_contact_form(&form(&padded, VALID_MESSAGE)).valid);
}

#[test]
fn message_boundaries_are_inclusive() {
    let twenty = "x".repeat(20);
    assert!(validate_contact_form(&form("Jane", &twenty)).valid);

    let nineteen = "x".repeat(19);
    assert_eq!(
        validate_contact_form(&form("Jane", &nineteen)).error(ContactField::Message),
        Some("Please provide more details (at least 20 characters)")
    );

    let max = "x".repeat(10_000);
    assert!(validate_contact_form(&form("Jane", &max)).valid);

    let over = "x".repeat(10_001);
    assert_eq!(
        validate_contact_form(&form("Jane", &over)).error(ContactField::Message),
        Some("Message is too long (max 10,000 characters)")
    );
}

#[test]
fn message_padding_does_not_count() {
    let padded = format!("   {}   ", "x".repeat(19));
    assert!(!validate_contact_form(&form("Jane", &padded)).valid);
}

#[test]
fn malformed_email_and_phone_get_format_messages() {
    let result = validate_contact_form(&ContactFormFields {
        email: "jane@example",
        phone: "555-1234",
        ..form("Jane", VALID_MESSAGE)
    });
    assert_eq!(
        result.error(ContactField::Email),
        Some("Please enter a valid email address")
    );
    assert_eq!(
        result.error(ContactField::Phone),
        Some("Please enter a valid phone number")
    );
}

#[test]
fn email_shapes() {
    for good in ["a@b.co", "first.last@sub.example.org", "x+tag@y.io"] {
        assert!(validate_email(good), "{good} should be valid");
    }
    for bad in ["", "plain", "a@b", "@b.co", "a@.", "a b@c.co", "a@b .co", "a@b.co\n"] {
        assert!(!validate_email(bad), "{bad:?} should be invalid");
    }
}

#[test]
fn phone_needs_ten_digits_and_allowed_characters() {
    assert!(validate_phone("5551234567"));
    assert!(validate_phone("+1 (555) 123-4567"));
    assert!(!validate_phone("555123456"));
    assert!(!validate_phone("------------"));
    assert!(!validate_phone("555-123-4567 ext 2"));
    assert!(!validate_phone("555/123/4567"));
}

#[test]
fn review_requires_rating_between_one_and_five() {
    let fields = |rating| ReviewFormFields {
        name: "Alice",
        rating,
        text: "Great work on our kitchen.",
    };
    assert!(validate_review(&fields(1)).valid);
    assert!(validate_review(&fields(5)).valid);
    assert_eq!(
        validate_review(&fields(0)).error(ReviewField::Rating),
        Some("Please select a rating")
    );
    assert!(!validate_review(&fields(6)).valid);
}

#[test]
fn review_text_is_bounded() {
    let long = "y".repeat(5_001);
    let result = validate_review(&ReviewFormFields {
        name: "",
        rating: 4,
        text: &long,
    });
    assert_eq!(result.error(ReviewField::Name), Some("Name is required"));
    assert_eq!(
        result.error(ReviewField::Text),
        Some("Review is too long (max 5,000 characters)")
    );
}

#[test]
fn errors_serialize_keyed_by_field_name() {
    let result = validate_contact_form(&form("", VALID_MESSAGE));
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["valid"], false);
    assert_eq!(json["errors"]["name"], "Name is required");
}

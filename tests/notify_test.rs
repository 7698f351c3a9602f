use jen_site_backend::notify::format::{TableEvent, format_table_event};
use jen_site_backend::notify::{
    ContactRecord, ReviewRecord, escape_html, format_contact_email, format_review_email,
    sanitize_subject,
};

fn contact(name: &str) -> ContactRecord {
    ContactRecord {
        name: Some(name.to_string()),
        email: Some("jane@example.com".to_string()),
        phone: Some("555-123-4567".to_string()),
        preferred_contact: Some("email".to_string()),
        service: Some("Kitchen Remodeling".to_string()),
        message: Some("Line one\nLine two".to_string()),
        ..Default::default()
    }
}

#[test]
fn subject_line_breaks_become_spaces() {
    assert_eq!(sanitize_subject("hello\r\nworld"), "hello world");
}

#[test]
fn subject_is_capped_at_200_characters() {
    assert_eq!(sanitize_subject(&"a".repeat(300)).len(), 200);
}

#[test]
fn html_special_characters_are_escaped() {
    assert_eq!(
        escape_html(r#"<img src="x" onerror='y'>"#),
        "&lt;img src=&quot;x&quot; onerror=&#39;y&#39;&gt;"
    );
    assert_eq!(escape_html("Tom & Jerry"), "Tom &amp; Jerry");
}

#[test]
fn contact_email_subject_and_body() {
    let email = format_contact_email(&contact("Jane Doe"));

    assert_eq!(email.subject, "[JEN Site] New contact: Jane Doe");
    assert!(email.html.contains("<p><strong>Name:</strong> Jane Doe</p>"));
    assert!(email.html.contains("mailto:jane@example.com"));
    assert!(email.html.contains("Line one\nLine two</pre>"));
}

#[test]
fn contact_email_omits_empty_optional_fields() {
    let mut record = contact("Jane");
    record.budget = Some("$10,000 - $25,000".to_string());
    record.timeline = Some(String::new());

    let email = format_contact_email(&record);
    assert!(email.html.contains("<strong>Budget:</strong> $10,000 - $25,000"));
    assert!(!email.html.contains("Timeline"));
    assert!(!email.html.contains("Project type"));
}

#[test]
fn injected_header_in_name_stays_on_one_line() {
    let email = format_contact_email(&contact("Eve\r\nBcc: victim@example.com"));

    assert!(!email.subject.contains('\r'));
    assert!(!email.subject.contains('\n'));
    assert_eq!(
        email.subject,
        "[JEN Site] New contact: Eve Bcc: victim@example.com"
    );
}

#[test]
fn markup_in_message_is_escaped() {
    let mut record = contact("Jane");
    record.message = Some("<script>alert(1)</script>".to_string());

    let email = format_contact_email(&record);
    assert!(!email.html.contains("<script>"));
    assert!(email.html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
}

#[test]
fn review_email_shows_rating_out_of_five() {
    let email = format_review_email(&ReviewRecord {
        name: Some("Alice".to_string()),
        service: Some("kitchen".to_string()),
        rating: Some(4),
        text: Some("Lovely work".to_string()),
    });

    assert_eq!(email.subject, "[JEN Site] New review from Alice");
    assert!(email.html.contains("<strong>Rating:</strong> 4/5"));
    assert!(email.html.contains("<strong>Service:</strong> kitchen"));
}

#[test]
fn webhook_update_events_say_updated() {
    let row = serde_json::json!({ "name": "Bob", "email": "bob@example.com" });
    let email = format_table_event(Some("contact_submissions"), TableEvent::Update, Some(&row));
    assert_eq!(email.subject, "[JEN Site] Contact updated: Bob");

    let row = serde_json::json!({ "name": "Carol", "rating": 5 });
    let email = format_table_event(Some("reviews"), TableEvent::Update, Some(&row));
    assert_eq!(email.subject, "[JEN Site] Review updated: Carol");
    assert!(email.html.contains("5/5"));
}

#[test]
fn webhook_insert_uses_dedicated_template() {
    let row = serde_json::json!({ "name": "Dan", "service": "Other" });
    let email = format_table_event(Some("contact_submissions"), TableEvent::Insert, Some(&row));
    assert_eq!(email.subject, "[JEN Site] New contact: Dan");
}

#[test]
fn other_tables_get_escaped_json_dump() {
    let row = serde_json::json!({ "title": "<b>Kitchen</b>" });

    let email = format_table_event(Some("projects"), TableEvent::Delete, Some(&row));
    assert_eq!(email.subject, "[JEN Site] Change: projects DELETE");
    assert!(email.html.contains("&lt;b&gt;Kitchen&lt;/b&gt;"));

    let email = format_table_event(Some("admin_users"), TableEvent::Insert, None);
    assert_eq!(email.subject, "[JEN Site] admin_users - INSERT");
    assert!(email.html.contains("<pre>{}</pre>"));
}

#[test]
fn one_badly_typed_column_keeps_the_rest() {
    let row = serde_json::json!({
        "name": "Erin",
        "email": "erin@example.com",
        "phone": 5551234567u64,
        "message": "Need a new bathroom",
        "budget": null,
    });

    let email = format_table_event(Some("contact_submissions"), TableEvent::Insert, Some(&row));

    assert_eq!(email.subject, "[JEN Site] New contact: Erin");
    assert!(email.html.contains("<strong>Phone:</strong> 5551234567"));
    assert!(email.html.contains("Need a new bathroom</pre>"));
    assert!(!email.html.contains("Budget"));
}

#[test]
fn review_rating_sent_as_text_still_shows() {
    let row = serde_json::json!({ "name": "Finn", "rating": "4", "text": "Solid" });
    let email = format_table_event(Some("reviews"), TableEvent::Insert, Some(&row));
    assert!(email.html.contains("<strong>Rating:</strong> 4/5"));
    assert!(email.html.contains("Solid</pre>"));
}

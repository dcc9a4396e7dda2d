use crate::helpers::{spawn_app, valid_inquiry};
use wiremock::matchers::{any, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn contact_returns_a_200_and_sends_one_email_for_a_valid_inquiry() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .and(method("POST"))
        .and(header("Authorization", "Bearer my-secret-token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app.post_contact(&valid_inquiry()).await;

    // Assert
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "ok": true }));
    // Mock verifies on Drop that exactly one email went out
}

#[tokio::test]
async fn the_notification_names_the_package_and_quotes_the_message() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // Act
    app.post_contact(&valid_inquiry()).await;

    // Assert
    let email_request = &app.email_server.received_requests().await.unwrap()[0];
    let body: serde_json::Value = serde_json::from_slice(&email_request.body).unwrap();

    assert_eq!(body["from"], "noreply@on.resend.dev");
    assert_eq!(body["to"], "hello@studio.example");
    let subject = body["subject"].as_str().unwrap();
    assert!(subject.contains("Premium"));
    assert!(subject.contains("Ursula Le Guin"));
    assert!(body["text"]
        .as_str()
        .unwrap()
        .contains("We would like a new website for our publishing house."));
}

#[tokio::test]
async fn markup_in_the_message_is_escaped_in_the_html_body() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let mut inquiry = valid_inquiry();
    inquiry["message"] = serde_json::json!("<script>alert('pwned')</script>");

    // Act
    app.post_contact(&inquiry).await;

    // Assert
    let email_request = &app.email_server.received_requests().await.unwrap()[0];
    let body: serde_json::Value = serde_json::from_slice(&email_request.body).unwrap();
    let html = body["html"].as_str().unwrap();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[tokio::test]
async fn contact_returns_a_400_and_sends_nothing_when_fields_are_invalid() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        // We assert that no request is fired at the email provider!
        .expect(0)
        .mount(&app.email_server)
        .await;

    let test_cases = vec![
        ("name", serde_json::json!("U"), "a one-letter name"),
        ("name", serde_json::Value::Null, "a missing name"),
        ("email", serde_json::json!("definitely-not-an-email"), "an invalid email"),
        ("message", serde_json::json!("Too short"), "a short message"),
        ("package", serde_json::json!("enterprise"), "an unknown package"),
        ("name", serde_json::json!(42), "a name of the wrong type"),
    ];

    for (field, value, description) in test_cases {
        let mut inquiry = valid_inquiry();
        inquiry[field] = value;

        // Act
        let response = app.post_contact(&inquiry).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload had {}.",
            description
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["ok"], false);
        assert_eq!(body["error"], "Invalid input");
    }
}

#[tokio::test]
async fn a_filled_honeypot_gets_a_fake_success_and_no_email() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let mut inquiry = valid_inquiry();
    inquiry["website"] = serde_json::json!("http://cheap-pills.example");

    // Act
    let response = app.post_contact(&inquiry).await;

    // Assert
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "ok": true }));
}

#[tokio::test]
async fn malformed_json_is_a_generic_server_error() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app.post_contact_raw(r#"{"name": "Ursula""#).await;

    // Assert
    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "ok": false, "error": "Server error" }));
}

#[tokio::test]
async fn a_provider_failure_is_a_generic_server_error() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(422).set_body_string("sender domain not verified"))
        // No retry: exactly one attempt.
        .expect(1)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app.post_contact(&valid_inquiry()).await;

    // Assert
    assert_eq!(response.status().as_u16(), 500);
    let body = response.text().await.unwrap();
    assert!(!body.contains("sender domain"));
    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body, serde_json::json!({ "ok": false, "error": "Server error" }));
}

#[tokio::test]
async fn repeating_a_valid_inquiry_gives_the_same_answer_and_sends_again() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        // No deduplication: one email per request.
        .expect(2)
        .mount(&app.email_server)
        .await;

    // Act
    let first: serde_json::Value = app.post_contact(&valid_inquiry()).await.json().await.unwrap();
    let second: serde_json::Value = app.post_contact(&valid_inquiry()).await.json().await.unwrap();

    // Assert
    assert_eq!(first, second);
    assert_eq!(first, serde_json::json!({ "ok": true }));
}

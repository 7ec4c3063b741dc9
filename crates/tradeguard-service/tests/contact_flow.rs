//! End-to-end contact form flow.

mod common;

use axum::http::StatusCode;
use axum::{routing::post, Json, Router};
use tokio::net::TcpListener;
use tradeguard_client::{ClientError, ContactForm, TradeguardClient};

fn filled_form() -> ContactForm {
    ContactForm {
        first_name: "Priya".to_string(),
        last_name: "Nair".to_string(),
        email: "priya@vendoro.example".to_string(),
        phone: String::new(),
        company: "Vendoro Marketplace".to_string(),
        subject: "Escrow pricing".to_string(),
        message: "How does escrow release work for vehicle sales?".to_string(),
    }
}

/// A stand-in for the real backend that rejects every submission.
async fn spawn_failing_app() -> String {
    let app = Router::new().route(
        "/api/contact",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "message": "upstream rejected the submission" })),
            )
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve test app");
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn successful_submission_resets_the_form() {
    let base_url = common::spawn_app().await;
    let client = TradeguardClient::new(&base_url).unwrap();

    let mut form = filled_form();
    let response = form.submit(&client).await.unwrap();

    assert!(response.message.contains("Thanks"));
    assert!(form.is_empty(), "form should reset after a 2xx response");
}

#[tokio::test]
async fn validation_failure_short_circuits_without_any_request() {
    // Nothing listens here; a dispatched request would surface as an HTTP
    // error rather than a validation error.
    let client = TradeguardClient::new("http://127.0.0.1:9").unwrap();

    let mut form = filled_form();
    form.email = String::new();

    let err = form.submit(&client).await.unwrap_err();
    assert!(
        matches!(err, ClientError::Validation(_)),
        "expected a validation error, got {err:?}"
    );
    assert_eq!(form.first_name, "Priya", "entered values must survive");
    assert_eq!(form.message, filled_form().message);
}

#[tokio::test]
async fn server_failure_retains_entered_values() {
    let base_url = spawn_failing_app().await;
    let client = TradeguardClient::new(&base_url).unwrap();

    let mut form = filled_form();
    let err = form.submit(&client).await.unwrap_err();

    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "upstream rejected the submission");
        }
        other => panic!("expected an API error, got {other:?}"),
    }
    assert_eq!(form, filled_form(), "entered values must survive a failure");
}

#[tokio::test]
async fn service_rejects_invalid_submissions_itself() {
    let base_url = common::spawn_app().await;

    // Raw request so the client's own validation cannot get in the way.
    let response = reqwest::Client::new()
        .post(format!("{base_url}/api/contact"))
        .json(&serde_json::json!({
            "firstName": "Priya",
            "lastName": "Nair",
            "email": "not-an-email",
            "message": "hello"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Please enter a valid email address"));
}

#[tokio::test]
async fn missing_fields_are_reported_with_the_standard_copy() {
    let base_url = common::spawn_app().await;

    let response = reqwest::Client::new()
        .post(format!("{base_url}/api/contact"))
        .json(&serde_json::json!({
            "firstName": "",
            "lastName": "Nair",
            "email": "priya@vendoro.example",
            "message": ""
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body["message"],
        "Please fill in all required fields: firstName, message"
    );
}

use std::sync::{Arc, Mutex};

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use frontier_contact::{DeliveryClient, DeliveryError, DeliveryRequest};
use frontier_notification::{EmailJsClient, EmailJsConfig};
use serde_json::Value;

type Received = Arc<Mutex<Vec<Value>>>;

async fn spawn_emailjs(status: StatusCode) -> (String, Received) {
    let received = Received::default();

    let app = Router::new()
        .route(
            "/api/v1.0/email/send",
            post(
                move |State(received): State<Received>, Json(body): Json<Value>| async move {
                    received.lock().unwrap().push(body);
                    (status, "OK")
                },
            ),
        )
        .with_state(received.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

    (format!("http://{addr}/api/v1.0/email/send"), received)
}

fn config(endpoint: String) -> EmailJsConfig {
    EmailJsConfig {
        endpoint,
        service_id: "service_frontier".to_owned(),
        template_id: "template_contact".to_owned(),
        public_key: "public_key".to_owned(),
        private_key: Some("private_key".to_owned()),
        timeout_secs: 5,
    }
}

fn request() -> DeliveryRequest {
    DeliveryRequest {
        to_email: "sirfrontier3@gmail.com".to_owned(),
        from_name: "Jane".to_owned(),
        from_email: "jane@x.com".to_owned(),
        message: "Need a site".to_owned(),
    }
}

#[tokio::test]
async fn accepted_message_resolves_ok() -> anyhow::Result<()> {
    let (endpoint, received) = spawn_emailjs(StatusCode::OK).await;
    let client = EmailJsClient::new(config(endpoint))?;

    client.deliver(&request()).await?;

    let received = received.lock().unwrap().clone();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0]["service_id"], "service_frontier");
    assert_eq!(received[0]["template_id"], "template_contact");
    assert_eq!(received[0]["user_id"], "public_key");
    assert_eq!(received[0]["accessToken"], "private_key");
    assert_eq!(received[0]["template_params"]["to_email"], "sirfrontier3@gmail.com");
    assert_eq!(received[0]["template_params"]["from_name"], "Jane");
    assert_eq!(received[0]["template_params"]["from_email"], "jane@x.com");
    assert_eq!(received[0]["template_params"]["message"], "Need a site");

    Ok(())
}

#[tokio::test]
async fn rejected_message_reports_status() -> anyhow::Result<()> {
    let (endpoint, _) = spawn_emailjs(StatusCode::BAD_REQUEST).await;
    let client = EmailJsClient::new(config(endpoint))?;

    let err = client.deliver(&request()).await.unwrap_err();

    assert!(matches!(err, DeliveryError::Rejected { status: 400, .. }));

    Ok(())
}

#[tokio::test]
async fn unreachable_endpoint_is_a_network_error() -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let client = EmailJsClient::new(config(format!("http://{addr}/api/v1.0/email/send")))?;
    let err = client.deliver(&request()).await.unwrap_err();

    assert!(matches!(err, DeliveryError::Network(_)));

    Ok(())
}

#[tokio::test]
async fn missing_identifiers_fail_without_a_request() -> anyhow::Result<()> {
    let (endpoint, received) = spawn_emailjs(StatusCode::OK).await;
    let client = EmailJsClient::new(EmailJsConfig {
        service_id: String::new(),
        ..config(endpoint)
    })?;

    let err = client.deliver(&request()).await.unwrap_err();

    assert!(matches!(err, DeliveryError::Config(_)));
    assert!(received.lock().unwrap().is_empty());

    Ok(())
}

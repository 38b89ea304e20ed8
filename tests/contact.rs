use std::time::Duration;

use axum::http::StatusCode;
use frontier_contact::{DELIVERY_FAILED_MESSAGE, DeliveryRequest};
use helpers::{DESTINATION, GatedClient, create_test_app, get, jane, post_form};

mod helpers;

#[tokio::test]
async fn test_contact_page_renders_an_empty_form() {
    let app = create_test_app(GatedClient::succeeding()).await;

    let res = get(&app.router, "/contact").await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains(r#"name="visit""#));
    assert!(res.body.contains("Send Message"));
    assert!(res.body.contains(DESTINATION));
    assert!(res.body.contains("+263788521064"));
    assert!(!res.body.contains(DELIVERY_FAILED_MESSAGE));
}

#[tokio::test]
async fn test_successful_submit_redirects_to_thank_you() {
    let app = create_test_app(GatedClient::succeeding()).await;

    let res = post_form(&app.router, "/contact", &jane("visit-a")).await;

    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert_eq!(res.location(), Some("/thank-you"));
    assert_eq!(
        app.client.calls(),
        vec![DeliveryRequest {
            to_email: DESTINATION.to_owned(),
            from_name: "Jane".to_owned(),
            from_email: "jane@x.com".to_owned(),
            message: "Need a site".to_owned(),
        }]
    );
    assert!(app.sessions.is_empty().await);

    let thank_you = get(&app.router, "/thank-you").await;
    assert_eq!(thank_you.status, StatusCode::OK);
    assert!(thank_you.body.contains("Thank You for Choosing Us!"));
}

#[tokio::test]
async fn test_failed_submit_keeps_fields_and_shows_inline_error() {
    let app = create_test_app(GatedClient::failing()).await;

    let res = post_form(&app.router, "/contact", &jane("visit-b")).await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.location().is_none());
    assert!(res.body.contains(DELIVERY_FAILED_MESSAGE));
    assert!(res.body.contains(r#"value="Jane""#));
    assert!(res.body.contains(r#"value="jane@x.com""#));
    assert!(res.body.contains("Need a site</textarea>"));
    assert!(res.body.contains("Send Message"));
    assert!(!res.body.contains("Sending..."));
    assert_eq!(app.client.calls().len(), 1);
}

#[tokio::test]
async fn test_retry_after_failure_reaches_thank_you() {
    let app = create_test_app(GatedClient::failing()).await;

    let first = post_form(&app.router, "/contact", &jane("visit-c")).await;
    assert!(first.body.contains(DELIVERY_FAILED_MESSAGE));

    app.client.set_failing(false);

    let second = post_form(&app.router, "/contact", &jane("visit-c")).await;
    assert_eq!(second.status, StatusCode::SEE_OTHER);
    assert_eq!(second.location(), Some("/thank-you"));
    assert_eq!(app.client.calls().len(), 2);
}

#[tokio::test]
async fn test_empty_message_is_rejected_without_delivery() {
    let app = create_test_app(GatedClient::succeeding()).await;

    let res = post_form(
        &app.router,
        "/contact",
        &[
            ("visit", "visit-d"),
            ("name", "Jane"),
            ("email", "jane@x.com"),
            ("message", ""),
        ],
    )
    .await;

    assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(res.body.contains("Please enter a message."));
    assert!(!res.body.contains("Please enter your name."));
    assert!(!res.body.contains(DELIVERY_FAILED_MESSAGE));
    assert!(app.client.calls().is_empty());
}

#[tokio::test]
async fn test_malformed_email_is_rejected_without_delivery() {
    let app = create_test_app(GatedClient::succeeding()).await;

    let res = post_form(
        &app.router,
        "/contact",
        &[
            ("visit", "visit-e"),
            ("name", "Jane"),
            ("email", "not-an-email"),
            ("message", "Need a site"),
        ],
    )
    .await;

    assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(res.body.contains("Please enter a valid email address."));
    assert!(app.client.calls().is_empty());
}

#[tokio::test]
async fn test_second_submit_while_in_flight_is_a_conflict() {
    let app = create_test_app(GatedClient::gated()).await;

    let first = tokio::spawn({
        let router = app.router.clone();
        async move { post_form(&router, "/contact", &jane("visit-f")).await }
    });

    app.client.started.notified().await;

    let second = post_form(&app.router, "/contact", &jane("visit-f")).await;

    assert_eq!(second.status, StatusCode::CONFLICT);
    assert!(second.body.contains("Sending..."));
    assert!(second.body.contains("disabled"));
    assert_eq!(app.sessions.len().await, 1);

    app.client.release_one();
    let first = first.await.unwrap();

    assert_eq!(first.status, StatusCode::SEE_OTHER);
    assert_eq!(app.client.calls().len(), 1);
    assert!(app.sessions.is_empty().await);
}

#[tokio::test]
async fn test_abandoned_request_still_resolves_the_attempt() {
    let app = create_test_app(GatedClient::gated()).await;

    let abandoned = tokio::spawn({
        let router = app.router.clone();
        async move { post_form(&router, "/contact", &jane("visit-i")).await }
    });

    app.client.started.notified().await;
    abandoned.abort();
    assert!(abandoned.await.unwrap_err().is_cancelled());

    app.client.release_one();

    tokio::time::timeout(Duration::from_secs(5), async {
        while !app.sessions.is_empty().await {
            tokio::task::yield_now().await;
        }
    })
    .await
    .expect("attempt never resolved");

    app.client.release_one();
    let retry = post_form(&app.router, "/contact", &jane("visit-i")).await;

    assert_eq!(retry.status, StatusCode::SEE_OTHER);
    assert_eq!(retry.location(), Some("/thank-you"));
    assert_eq!(app.client.calls().len(), 2);
    assert!(app.sessions.is_empty().await);
}

#[tokio::test]
async fn test_submits_for_different_visits_do_not_block_each_other() {
    let app = create_test_app(GatedClient::gated()).await;

    let first = tokio::spawn({
        let router = app.router.clone();
        async move { post_form(&router, "/contact", &jane("visit-g")).await }
    });
    app.client.started.notified().await;

    let second = tokio::spawn({
        let router = app.router.clone();
        async move { post_form(&router, "/contact", &jane("visit-h")).await }
    });
    app.client.started.notified().await;

    assert_eq!(app.sessions.len().await, 2);

    app.client.release_one();
    app.client.release_one();

    assert_eq!(first.await.unwrap().status, StatusCode::SEE_OTHER);
    assert_eq!(second.await.unwrap().status, StatusCode::SEE_OTHER);
    assert_eq!(app.client.calls().len(), 2);
}

use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use frontier_contact::{
    DELIVERY_FAILED_MESSAGE, Field, Outcome, Submission, SubmissionPayload, SubmissionState,
};
use serde::Deserialize;

use crate::{
    routes::AppState,
    template::{Site, Template},
};

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub site: Site,
    pub visit: String,
    pub payload: SubmissionPayload,
    pub is_submitting: bool,
    pub error: Option<&'static str>,
    pub invalid: Vec<Field>,
}

impl ContactTemplate {
    fn new(site: Site, visit: String, state: SubmissionState) -> Self {
        let error = (state.outcome == Outcome::Error).then_some(DELIVERY_FAILED_MESSAGE);

        Self {
            site,
            visit,
            payload: state.form.into_payload(),
            is_submitting: state.is_submitting,
            error,
            invalid: vec![],
        }
    }

    pub fn is_invalid(&self, field: &str) -> bool {
        self.invalid.iter().any(|f| f.as_ref() == field)
    }
}

fn new_visit() -> String {
    ulid::Ulid::new().to_string()
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(ContactTemplate::new(
        template.site(),
        new_visit(),
        SubmissionState::default(),
    ))
}

#[derive(Deserialize)]
pub struct ActionInput {
    #[serde(default)]
    pub visit: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    Form(input): Form<ActionInput>,
) -> Response {
    let visit = match input.visit.trim() {
        "" => new_visit(),
        visit => visit.to_owned(),
    };

    let payload = SubmissionPayload::new(input.name, input.email, input.message);
    let session = app_state.sessions.open(&visit, payload).await;

    // The attempt runs on its own task so a dropped request cannot cancel
    // the delivery or leave the session stuck in flight.
    let attempt = tokio::spawn({
        let workflow = app_state.workflow.clone();
        let sessions = app_state.sessions.clone();
        let session = session.clone();
        let visit = visit.clone();

        async move {
            let submission = workflow.submit(&session).await;

            // An ignored submit belongs to the attempt still in flight.
            if !matches!(submission, Submission::Ignored) {
                sessions.close(&visit).await;
            }

            submission
        }
    });

    let submission = match attempt.await {
        Ok(submission) => submission,
        Err(err) => {
            tracing::error!(error = %err, visit = %visit, "Contact submission task failed");
            app_state.sessions.close(&visit).await;

            return (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response();
        }
    };

    if let Some(path) = submission.navigate_to() {
        return Redirect::to(path).into_response();
    }

    let mut view = ContactTemplate::new(template.site(), visit, session.snapshot());

    let status = match submission {
        Submission::Invalid(_) => {
            view.invalid = view.payload.invalid_fields();
            StatusCode::UNPROCESSABLE_ENTITY
        }
        Submission::Ignored => StatusCode::CONFLICT,
        _ => StatusCode::OK,
    };

    (status, template.render(view)).into_response()
}

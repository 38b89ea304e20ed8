use std::{collections::HashMap, sync::Arc};

use tokio::sync::{Mutex, watch};
use validator::Validate;

use crate::{Field, FormState, Outcome, Submission, SubmissionPayload};

/// Everything the contact view renders from.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct SubmissionState {
    pub form: FormState,
    pub is_submitting: bool,
    pub outcome: Outcome,
}

impl SubmissionState {
    pub fn payload(&self) -> &SubmissionPayload {
        self.form.payload()
    }
}

/// Per-visit owner of a [`SubmissionState`].
///
/// Every change is published on a watch channel so a renderer holding a
/// receiver sees it before the next interaction is handled.
#[derive(Debug)]
pub struct ContactSession {
    state: watch::Sender<SubmissionState>,
}

impl Default for ContactSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactSession {
    pub fn new() -> Self {
        Self::with_payload(SubmissionPayload::default())
    }

    pub fn with_payload(payload: SubmissionPayload) -> Self {
        let (state, _) = watch::channel(SubmissionState {
            form: payload.into(),
            ..Default::default()
        });

        Self { state }
    }

    pub fn snapshot(&self) -> SubmissionState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    pub fn update(&self, field: Field, value: impl Into<String>) {
        let value = value.into();
        self.state.send_modify(|state| state.form.apply(field, value));
    }

    /// Marks the session as submitting and hands back the payload to send.
    ///
    /// Check, validation and flag flip happen under one lock, so of two racing
    /// submits only one gets the payload.
    pub(crate) fn begin(&self) -> Result<SubmissionPayload, Submission> {
        let mut started = Err(Submission::Ignored);

        self.state.send_if_modified(|state| {
            if state.is_submitting {
                return false;
            }

            if let Err(errors) = state.payload().validate() {
                started = Err(Submission::Invalid(errors));
                return false;
            }

            state.is_submitting = true;
            started = Ok(state.payload().clone());

            true
        });

        started
    }

    pub(crate) fn resolve(&self, outcome: Outcome) {
        self.state.send_modify(|state| {
            state.outcome = outcome;
            state.is_submitting = false;
        });
    }
}

/// Sessions with a submission in progress, keyed by visit token.
#[derive(Default, Clone)]
pub struct ContactSessions(Arc<Mutex<HashMap<String, Arc<ContactSession>>>>);

impl ContactSessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the session already registered for `visit`, or registers a new
    /// one seeded with `payload`.
    pub async fn open(&self, visit: &str, payload: SubmissionPayload) -> Arc<ContactSession> {
        let mut sessions = self.0.lock().await;

        sessions
            .entry(visit.to_owned())
            .or_insert_with(|| Arc::new(ContactSession::with_payload(payload)))
            .clone()
    }

    pub async fn close(&self, visit: &str) {
        self.0.lock().await.remove(visit);
    }

    pub async fn len(&self) -> usize {
        self.0.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

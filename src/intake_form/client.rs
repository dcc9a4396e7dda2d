use crate::analytics::EventSink;
use crate::domain::{FieldIssue, IntakeResponse};
use crate::intake_form::IntakeForm;
use reqwest::{Client, StatusCode};
use std::sync::Arc;

/// What the form shows once a submission attempt is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    /// Field issues to show next to the inputs. Nothing was sent to the studio.
    Rejected(Vec<FieldIssue>),
    /// The server could not handle the inquiry. The visitor should try again.
    Failed,
}

impl SubmitOutcome {
    pub fn status_message(&self) -> &'static str {
        match self {
            SubmitOutcome::Accepted => "Thanks — we’ve received your message. We’ll reply shortly.",
            SubmitOutcome::Rejected(_) => "Please check the highlighted fields.",
            SubmitOutcome::Failed => "Something went wrong on our side. Please try again.",
        }
    }
}

pub struct IntakeClient {
    http_client: Client,
    endpoint: String,
    events: Arc<dyn EventSink>,
}

impl IntakeClient {
    pub fn new(endpoint: String, events: Arc<dyn EventSink>) -> Result<Self, reqwest::Error> {
        Ok(Self {
            http_client: Client::builder().build()?,
            endpoint,
            events,
        })
    }

    /// Validates locally first; an invalid form never leaves the browser. Transport failures are
    /// returned as errors, anything the server answered is mapped to an outcome.
    #[tracing::instrument(name = "Submitting the intake form", skip_all, fields(endpoint = %self.endpoint))]
    pub async fn submit(&self, form: &IntakeForm) -> Result<SubmitOutcome, reqwest::Error> {
        let payload = match form.validate() {
            Ok(payload) => payload,
            Err(e) => return Ok(SubmitOutcome::Rejected(e.issues().to_vec())),
        };

        self.events.track_event(
            "contact_submit",
            serde_json::json!({ "pkg": form.package().map(|p| p.slug()) }),
        );

        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await?;
        let status = response.status();
        let body: IntakeResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(error = %e, %status, "Unreadable intake response");
                return Ok(SubmitOutcome::Failed);
            }
        };

        let outcome = match status {
            s if s.is_success() && body.ok => SubmitOutcome::Accepted,
            StatusCode::BAD_REQUEST => SubmitOutcome::Rejected(body.fields),
            _ => SubmitOutcome::Failed,
        };
        Ok(outcome)
    }
}

use crate::domain::{ContactPayload, ContactSubmission, IntakeResponse, InvalidSubmission};
use crate::email_client::EmailClient;
use crate::notification::InquiryNotification;
use crate::startup::InquiryInbox;
use crate::utils::error_chain_fmt;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use anyhow::Context;

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error(transparent)]
    ValidationError(#[from] InvalidSubmission),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Callers only ever see `Invalid input` or `Server error`. The details stay in the logs.
impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ContactError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ContactError::ValidationError(e) => IntakeResponse::invalid_input(e.issues()),
            ContactError::UnexpectedError(_) => IntakeResponse::server_error(),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

/// # Contact intake
/// One request, one linear pass: parse, validate, check the honeypot, format, dispatch. Nothing is
/// stored and nothing is retried; if the provider fails the visitor is asked to try again.
///
/// The body is taken as raw bytes rather than through `web::Json`: a body that is not JSON at all
/// is a server error here, while JSON of the wrong shape is the visitor's input being invalid.
///
/// A filled-in honeypot gets the same `200 { ok: true }` a genuine visitor gets, so that a bot has
/// no signal to adapt to.
#[tracing::instrument(
    name = "Handling a contact inquiry",
    skip(body, email_client, inbox),
    fields(
        inquirer_email = tracing::field::Empty,
        inquirer_name = tracing::field::Empty,
        package = tracing::field::Empty,
    )
)]
pub async fn submit_inquiry(
    body: web::Bytes,
    email_client: web::Data<EmailClient>,
    inbox: web::Data<InquiryInbox>,
) -> Result<HttpResponse, ContactError> {
    let json: serde_json::Value =
        serde_json::from_slice(&body).context("The request body is not valid JSON")?;
    let payload: ContactPayload =
        serde_json::from_value(json).map_err(|e| InvalidSubmission::malformed(&e))?;
    let submission = ContactSubmission::try_from(payload).map_err(|e| {
        tracing::info!(error = %e, "Rejecting an invalid inquiry");
        e
    })?;

    let span = tracing::Span::current();
    span.record("inquirer_email", &tracing::field::display(&submission.email));
    span.record("inquirer_name", &tracing::field::display(&submission.name));
    if let Some(package) = submission.package {
        span.record("package", &package.slug());
    }

    if submission.is_suspected_bot() {
        tracing::info!("Honeypot field is filled in, skipping the notification");
        return Ok(HttpResponse::Ok().json(IntakeResponse::accepted()));
    }

    let notification = InquiryNotification::compose(&submission);
    send_notification(&email_client, &inbox, &notification).await?;

    Ok(HttpResponse::Ok().json(IntakeResponse::accepted()))
}

#[tracing::instrument(name = "Sending the inquiry notification", skip_all)]
async fn send_notification(
    email_client: &EmailClient,
    inbox: &InquiryInbox,
    notification: &InquiryNotification,
) -> Result<(), anyhow::Error> {
    email_client
        .send_email(
            &inbox.0,
            &notification.subject,
            &notification.html,
            &notification.text,
        )
        .await
        .context("Failed to send the inquiry notification")
        .map_err(|e| {
            tracing::error!(error.cause_chain = ?e, error.message = %e, "Dispatch failed");
            e
        })
}

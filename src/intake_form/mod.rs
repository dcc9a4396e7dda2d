//! The visitor-facing half of the contact intake: form state, template seeding and submission.
//!
//! It validates with the very same rules as the `/contact` handler, so a payload the form lets
//! through is one the server accepts.

mod client;
mod seeding;

pub use client::{IntakeClient, SubmitOutcome};
pub use seeding::{
    message_template, seed_package_from_query, EditState, MessageField, TEMPLATE_MARKER,
};

use crate::domain::{ContactPayload, ContactSubmission, InvalidSubmission, Package};

#[derive(Debug, Clone, Default)]
pub struct IntakeForm {
    pub name: String,
    pub email: String,
    pub company: String,
    /// The hidden honeypot input. Humans never see it, so it stays empty for them.
    pub website: String,
    package: Option<Package>,
    message: MessageField,
}

impl IntakeForm {
    pub fn new(seed: Option<Package>) -> Self {
        let mut form = Self::default();
        form.select_package(seed);
        form
    }

    /// Builds the form a visitor sees when landing on `/contact?<query>`.
    pub fn from_query(query: &str) -> Self {
        Self::new(seed_package_from_query(query))
    }

    pub fn package(&self) -> Option<Package> {
        self.package
    }

    /// Changing the package re-seeds the message unless the visitor has written their own.
    /// Clearing the selection leaves the message as it is.
    pub fn select_package(&mut self, package: Option<Package>) {
        self.package = package;
        if let Some(package) = package {
            self.message.seed(package);
        }
    }

    pub fn message(&self) -> &MessageField {
        &self.message
    }

    pub fn type_message(&mut self, text: impl Into<String>) {
        self.message.input(text);
    }

    pub fn blur_message(&mut self) {
        self.message.blur();
    }

    pub fn payload(&self) -> ContactPayload {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        ContactPayload {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            company: non_empty(&self.company),
            message: Some(self.message.text().to_string()),
            package: self.package.map(|p| p.slug().to_string()),
            website: non_empty(&self.website),
        }
    }

    /// Runs the shared schema and hands back the payload to post.
    pub fn validate(&self) -> Result<ContactPayload, InvalidSubmission> {
        let payload = self.payload();
        ContactSubmission::try_from(payload.clone())?;
        Ok(payload)
    }
}

use crate::domain::{ContactEmail, ContactMessage, ContactName, Package};

/// The wire shape of an inquiry, as posted by the intake form.
///
/// Every field is optional here: `serde` only decides whether the JSON *looks* like an inquiry,
/// while [`ContactSubmission::try_from`] decides whether it *is* a valid one. This way a missing
/// `name` is reported the same way as a one-letter `name` - as a field-level issue - rather than
/// as an opaque deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct ContactPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    /// The honeypot. Hidden from humans, irresistible to form-filling bots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
    Package,
    /// The body as a whole, e.g. a field holding a number where a string was expected.
    Payload,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FieldIssue {
    pub field: Field,
    pub message: String,
}

/// Every reason a payload was rejected, one entry per offending field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid input: {}", describe(.issues))]
pub struct InvalidSubmission {
    issues: Vec<FieldIssue>,
}

fn describe(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|i| format!("{:?} ({})", i.field, i.message))
        .collect::<Vec<_>>()
        .join(", ")
}

impl InvalidSubmission {
    /// The JSON was well-formed but did not have the shape of a [`ContactPayload`].
    pub fn malformed(error: &serde_json::Error) -> Self {
        tracing::debug!(%error, "Payload does not match the inquiry shape");
        Self {
            issues: vec![FieldIssue {
                field: Field::Payload,
                message: "Unexpected value type".to_string(),
            }],
        }
    }

    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    pub fn has_issue_for(&self, field: Field) -> bool {
        self.issues.iter().any(|i| i.field == field)
    }
}

/// The honeypot value. Any content means the form was most likely filled by a script.
#[derive(Debug, Clone, Default)]
pub struct Honeypot(Option<String>);

impl Honeypot {
    pub fn is_tripped(&self) -> bool {
        self.0.as_deref().map_or(false, |v| !v.is_empty())
    }
}

/// A validated inquiry. It lives for the duration of one request and is never stored.
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub email: ContactEmail,
    pub company: Option<String>,
    pub message: ContactMessage,
    pub package: Option<Package>,
    pub honeypot: Honeypot,
}

impl ContactSubmission {
    pub fn is_suspected_bot(&self) -> bool {
        self.honeypot.is_tripped()
    }
}

fn record<T>(issues: &mut Vec<FieldIssue>, field: Field, outcome: Result<T, String>) -> Option<T> {
    match outcome {
        Ok(value) => Some(value),
        Err(message) => {
            issues.push(FieldIssue { field, message });
            None
        }
    }
}

impl TryFrom<ContactPayload> for ContactSubmission {
    type Error = InvalidSubmission;

    /// Runs every rule, collecting all failures rather than stopping at the first one, so that the
    /// form can flag every offending field at once.
    fn try_from(payload: ContactPayload) -> Result<Self, Self::Error> {
        let mut issues = Vec::new();

        let name = record(
            &mut issues,
            Field::Name,
            ContactName::parse(payload.name.unwrap_or_default()),
        );
        let email = record(
            &mut issues,
            Field::Email,
            ContactEmail::parse(payload.email.unwrap_or_default()),
        );
        let message = record(
            &mut issues,
            Field::Message,
            ContactMessage::parse(payload.message.unwrap_or_default()),
        );
        let package = match payload.package {
            None => Some(None),
            Some(slug) => record(&mut issues, Field::Package, Package::parse(&slug).map(Some)),
        };

        match (name, email, message, package) {
            (Some(name), Some(email), Some(message), Some(package)) => Ok(Self {
                name,
                email,
                company: payload.company.filter(|c| !c.trim().is_empty()),
                message,
                package,
                honeypot: Honeypot(payload.website),
            }),
            _ => Err(InvalidSubmission { issues }),
        }
    }
}

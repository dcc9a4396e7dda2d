mod contact_email;
mod contact_message;
mod contact_name;
mod contact_submission;
mod intake_response;
mod package;

pub use contact_email::ContactEmail;
pub use contact_message::ContactMessage;
pub use contact_name::ContactName;
pub use contact_submission::{
    ContactPayload, ContactSubmission, Field, FieldIssue, Honeypot, InvalidSubmission,
};
pub use intake_response::IntakeResponse;
pub use package::Package;

use crate::domain::FieldIssue;

pub const INVALID_INPUT: &str = "Invalid input";
pub const SERVER_ERROR: &str = "Server error";

/// The JSON body of every `/contact` response. Shared by the handler, which writes it, and the
/// intake client, which reads it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct IntakeResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldIssue>,
}

impl IntakeResponse {
    pub fn accepted() -> Self {
        Self {
            ok: true,
            error: None,
            fields: Vec::new(),
        }
    }

    pub fn invalid_input(fields: &[FieldIssue]) -> Self {
        Self {
            ok: false,
            error: Some(INVALID_INPUT.to_string()),
            fields: fields.to_vec(),
        }
    }

    /// Deliberately vague: nothing about the underlying failure leaves the server.
    pub fn server_error() -> Self {
        Self {
            ok: false,
            error: Some(SERVER_ERROR.to_string()),
            fields: Vec::new(),
        }
    }
}

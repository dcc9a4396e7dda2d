use validator::validate_email;

pub(crate) const EMAIL_MESSAGE: &str = "Please enter a valid email";

#[derive(Debug, Clone)]
pub struct ContactEmail(String);

impl ContactEmail {
    /// The address is checked as typed: surrounding whitespace makes it invalid.
    pub fn parse(s: String) -> Result<ContactEmail, String> {
        if validate_email(&s) {
            Ok(Self(s))
        } else {
            Err(EMAIL_MESSAGE.to_string())
        }
    }
}

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContactEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // We just forward to the Display implementation of the wrapped String.
        self.0.fmt(f)
    }
}

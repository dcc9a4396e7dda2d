use unicode_segmentation::UnicodeSegmentation;

pub(crate) const MESSAGE_MESSAGE: &str = "A little more detail helps (10+ chars)";

/// The free-text body of an inquiry. The text is kept verbatim: the visitor's line breaks end up
/// in the notification email.
#[derive(Debug, Clone)]
pub struct ContactMessage(String);

impl ContactMessage {
    pub fn parse(s: String) -> Result<ContactMessage, String> {
        if s.trim().graphemes(true).count() < 10 {
            Err(MESSAGE_MESSAGE.to_string())
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for ContactMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

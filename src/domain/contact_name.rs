use unicode_segmentation::UnicodeSegmentation;

pub(crate) const NAME_MESSAGE: &str = "Please enter your name";

#[derive(Debug, Clone)]
pub struct ContactName(String);

impl ContactName {
    /// Returns an instance of `ContactName` if the input has at least two user-perceived characters
    /// once surrounding whitespace is stripped. The error carries the message shown next to the
    /// field.
    pub fn parse(s: String) -> Result<ContactName, String> {
        let trimmed = s.trim();

        // A grapheme is defined by the Unicode standard as a "user-perceived" character: `a°` is a
        // single grapheme, but it is composed of two characters (`a` and `°`).
        let is_too_short = trimmed.graphemes(true).count() < 2;

        if is_too_short {
            Err(NAME_MESSAGE.to_string())
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContactName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

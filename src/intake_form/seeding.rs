use crate::domain::Package;

/// Every template starts with this line prefix, which is how a still-untouched template is told
/// apart from the visitor's own words.
pub const TEMPLATE_MARKER: &str = "Project:";

/// Below this many characters (after trimming) the message field counts as empty.
const NEGLIGIBLE_MESSAGE_LENGTH: usize = 5;

/// The structured starting point for a message about `package`.
pub fn message_template(package: Package) -> String {
    [
        format!(
            "{TEMPLATE_MARKER} {} Website ({}, {})",
            package.display_name(),
            package.price(),
            package.timeline()
        ),
        String::new(),
        "Business name:".into(),
        "Industry:".into(),
        "Goals for the site (2–3 bullets):".into(),
        "—".into(),
        "Pages needed (rough list):".into(),
        "—".into(),
        "Inspiration (links):".into(),
        "—".into(),
        "Deadline / constraints:".into(),
        String::new(),
        "Anything else we should know?:".into(),
    ]
    .join("\n")
}

/// Resolves the package a visitor arrived with, from `?package=` or, failing that, `?tier=`.
///
/// Pricing pages link with values such as `?tier=Premium%20Website`, hence the lenient match. An
/// unparsable query string simply means there is nothing to seed.
pub fn seed_package_from_query(query: &str) -> Option<Package> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query).ok()?;
    let lookup = |key: &str| {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| Package::resolve(v))
    };
    lookup("package").or_else(|| lookup("tier"))
}

/// Whether the visitor has written in the message field yet.
///
/// The transition is one-way: the first keystroke or blur makes the field `Dirty` and nothing
/// makes it `Pristine` again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Pristine,
    Dirty,
}

#[derive(Debug, Clone, Default)]
pub struct MessageField {
    text: String,
    state: EditState,
}

impl MessageField {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    /// The visitor typed: replaces the content and marks the field as edited.
    pub fn input(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.state = EditState::Dirty;
    }

    pub fn blur(&mut self) {
        self.state = EditState::Dirty;
    }

    /// A template may replace the content while the field is pristine, still holds a template, or
    /// holds next to nothing. Anything else is the visitor's writing and is left alone.
    pub fn accepts_template(&self) -> bool {
        let current = self.text.trim();
        self.state == EditState::Pristine
            || current.starts_with(TEMPLATE_MARKER)
            || current.chars().count() < NEGLIGIBLE_MESSAGE_LENGTH
    }

    /// Seeding is not an edit: the state is left as it was. Returns whether the template was
    /// applied.
    pub fn seed(&mut self, package: Package) -> bool {
        if self.accepts_template() {
            self.text = message_template(package);
            true
        } else {
            false
        }
    }
}

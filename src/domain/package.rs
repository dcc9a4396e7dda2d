pub(crate) const PACKAGE_MESSAGE: &str = "Please choose one of our packages";

/// One of the three pricing offers a visitor can enquire about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Package {
    Professional,
    Premium,
    Sophisticated,
}

impl Package {
    pub const ALL: [Package; 3] = [
        Package::Professional,
        Package::Premium,
        Package::Sophisticated,
    ];

    /// Strict parsing: only the exact slug is accepted. This is what the intake schema uses.
    pub fn parse(s: &str) -> Result<Package, String> {
        Self::ALL
            .into_iter()
            .find(|p| p.slug() == s)
            .ok_or_else(|| PACKAGE_MESSAGE.to_string())
    }

    /// Lenient resolution used for links coming from pricing pages: any value that mentions a
    /// tier, in any case, resolves to it (`"Premium-Website"` -> `Premium`).
    pub fn resolve(s: &str) -> Option<Package> {
        let s = s.to_lowercase();
        Self::ALL.into_iter().find(|p| s.contains(p.slug()))
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Package::Professional => "professional",
            Package::Premium => "premium",
            Package::Sophisticated => "sophisticated",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Package::Professional => "Professional",
            Package::Premium => "Premium",
            Package::Sophisticated => "Sophisticated",
        }
    }

    pub fn price(&self) -> &'static str {
        match self {
            Package::Professional => "R8,000",
            Package::Premium => "R12,000",
            Package::Sophisticated => "R18,000",
        }
    }

    pub fn timeline(&self) -> &'static str {
        match self {
            Package::Professional => "2–3 weeks",
            Package::Premium => "3–4 weeks",
            Package::Sophisticated => "4–6 weeks",
        }
    }
}

impl std::fmt::Display for Package {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

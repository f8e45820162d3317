use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Location {
    Office, // O
    Remote, // R
    OnSite, // C (Customer)
    Mixed,  // M
}

impl Location {
    pub fn code(&self) -> &'static str {
        match self {
            Location::Office => "O",
            Location::Remote => "R",
            Location::OnSite => "C",
            Location::Mixed => "M",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Location::Office => "Office",
            Location::Remote => "Remote",
            Location::OnSite => "On-site (Client)",
            Location::Mixed => "Mixed",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.code()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "O" => Some(Location::Office),
            "R" => Some(Location::Remote),
            "C" => Some(Location::OnSite),
            "M" => Some(Location::Mixed),
            _ => None,
        }
    }

    /// Helper: accept a one-letter code or a full name from the CLI, in any case.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "office" => Some(Location::Office),
            "remote" => Some(Location::Remote),
            "onsite" | "on-site" | "customer" | "client" => Some(Location::OnSite),
            "mixed" => Some(Location::Mixed),
            other => Location::from_db_str(&other.to_uppercase()),
        }
    }
}

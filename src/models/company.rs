use serde::{Deserialize, Serialize};

/// Company details used while framing a post.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CompanyProfile {
    /// Display name, used for short overlay phrases
    pub name: String,

    /// Website printed in the caption strip
    #[serde(default)]
    pub website: Option<String>,
}

impl CompanyProfile {
    pub fn new(name: impl Into<String>, website: Option<String>) -> Self {
        Self {
            name: name.into(),
            website,
        }
    }

    /// Website with surrounding whitespace removed, if non-empty.
    pub fn website(&self) -> Option<&str> {
        self.website
            .as_deref()
            .map(str::trim)
            .filter(|w| !w.is_empty())
    }
}

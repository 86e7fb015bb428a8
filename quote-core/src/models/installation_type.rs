use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::parse::{ParseSelectionError, match_named};

/// How the panel structure is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstallationType {
    /// Standard rooftop mounting.
    Normal,
    /// Raised structure; priced per panel at a higher rate.
    Elevated,
}

impl InstallationType {
    pub const ALL: [InstallationType; 2] = [InstallationType::Normal, InstallationType::Elevated];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Elevated => "Elevated",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Normal => &["normal", "standard"],
            Self::Elevated => &["elevated", "raised"],
        }
    }
}

impl fmt::Display for InstallationType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for InstallationType {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match_named(s, &Self::ALL, Self::aliases).ok_or_else(|| {
            ParseSelectionError::new("installation type", s, vec!["normal", "elevated"])
        })
    }
}

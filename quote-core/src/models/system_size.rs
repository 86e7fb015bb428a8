use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::parse::{ParseSelectionError, parse_kilowatts};

/// Nominal rating of the solar array. Each size maps to a fixed panel count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemSize {
    Kw6,
    Kw10,
    Kw15,
    Kw20,
    Kw25,
}

impl SystemSize {
    /// Every size in the order the wizard offers them.
    pub const ALL: [SystemSize; 5] = [
        SystemSize::Kw6,
        SystemSize::Kw10,
        SystemSize::Kw15,
        SystemSize::Kw20,
        SystemSize::Kw25,
    ];

    pub fn identifier(&self) -> &'static str {
        match self {
            Self::Kw6 => "6",
            Self::Kw10 => "10",
            Self::Kw15 => "15",
            Self::Kw20 => "20",
            Self::Kw25 => "25",
        }
    }

    pub fn kilowatts(&self) -> u32 {
        match self {
            Self::Kw6 => 6,
            Self::Kw10 => 10,
            Self::Kw15 => 15,
            Self::Kw20 => 20,
            Self::Kw25 => 25,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Kw6 => "6KW (10 Panels)",
            Self::Kw10 => "10KW (16 Panels)",
            Self::Kw15 => "15KW (24 Panels)",
            Self::Kw20 => "20KW (32 Panels)",
            Self::Kw25 => "25KW (38 Panels)",
        }
    }

    pub fn panel_count(&self) -> u32 {
        match self {
            Self::Kw6 => 10,
            Self::Kw10 => 16,
            Self::Kw15 => 24,
            Self::Kw20 => 32,
            Self::Kw25 => 38,
        }
    }
}

impl fmt::Display for SystemSize {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SystemSize {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_kilowatts(s)
            .and_then(|kw| Self::ALL.into_iter().find(|size| size.kilowatts() == kw))
            .ok_or_else(|| {
                ParseSelectionError::new(
                    "system size",
                    s,
                    Self::ALL.iter().map(|size| size.identifier()).collect(),
                )
            })
    }
}

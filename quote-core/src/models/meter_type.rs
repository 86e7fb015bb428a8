use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::parse::{ParseSelectionError, match_named};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeterType {
    SinglePhase,
    ThreePhase,
}

impl MeterType {
    pub const ALL: [MeterType; 2] = [MeterType::SinglePhase, MeterType::ThreePhase];

    pub fn label(&self) -> &'static str {
        match self {
            Self::SinglePhase => "Single Phase",
            Self::ThreePhase => "Three Phase",
        }
    }

    /// Fixed meter price in whole rupees.
    pub fn list_price(&self) -> u32 {
        match self {
            Self::SinglePhase => 135_000,
            Self::ThreePhase => 110_000,
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::SinglePhase => &["Single Phase", "single", "1"],
            Self::ThreePhase => &["Three Phase", "three", "3"],
        }
    }
}

impl fmt::Display for MeterType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MeterType {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match_named(s, &Self::ALL, Self::aliases)
            .ok_or_else(|| ParseSelectionError::new("meter type", s, vec!["single", "three"]))
    }
}

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::parse::{ParseSelectionError, match_named};

/// Panel manufacturer/model combination with its wattage and per-watt price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelBrand {
    CanadianJinko,
    LongiNimoX7,
    JaAstroKingdom,
}

impl PanelBrand {
    pub const ALL: [PanelBrand; 3] = [
        PanelBrand::CanadianJinko,
        PanelBrand::LongiNimoX7,
        PanelBrand::JaAstroKingdom,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::CanadianJinko => "Canadian / Jinko 585W",
            Self::LongiNimoX7 => "Longi Nimo x7 615W",
            Self::JaAstroKingdom => "JA / Astro / Kingdom 585W",
        }
    }

    /// Short key used on the command line and in CSV files.
    pub fn key(&self) -> &'static str {
        match self {
            Self::CanadianJinko => "canadian",
            Self::LongiNimoX7 => "longi",
            Self::JaAstroKingdom => "ja",
        }
    }

    /// Price per watt in whole rupees.
    pub fn price_per_watt(&self) -> u32 {
        match self {
            Self::CanadianJinko | Self::LongiNimoX7 => 31,
            Self::JaAstroKingdom => 29,
        }
    }

    /// Rated wattage of a single panel.
    pub fn wattage(&self) -> u32 {
        match self {
            Self::CanadianJinko | Self::JaAstroKingdom => 585,
            Self::LongiNimoX7 => 615,
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::CanadianJinko => &["Canadian / Jinko 585W", "canadian", "jinko", "canadian-jinko"],
            Self::LongiNimoX7 => &["Longi Nimo x7 615W", "longi", "nimo", "longi-nimo"],
            Self::JaAstroKingdom => &["JA / Astro / Kingdom 585W", "ja", "astro", "kingdom"],
        }
    }
}

impl fmt::Display for PanelBrand {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PanelBrand {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match_named(s, &Self::ALL, Self::aliases).ok_or_else(|| {
            ParseSelectionError::new(
                "panel brand",
                s,
                Self::ALL.iter().map(|brand| brand.key()).collect(),
            )
        })
    }
}

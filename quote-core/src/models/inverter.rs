use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::parse::{ParseSelectionError, match_named, parse_kilowatts};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InverterBrand {
    Huawei,
    GrowattFox,
    SolisGoodwe,
}

impl InverterBrand {
    pub const ALL: [InverterBrand; 3] = [
        InverterBrand::Huawei,
        InverterBrand::GrowattFox,
        InverterBrand::SolisGoodwe,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Huawei => "Huawei",
            Self::GrowattFox => "Growatt / Fox",
            Self::SolisGoodwe => "Solis / Goodwe",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Huawei => "huawei",
            Self::GrowattFox => "growatt",
            Self::SolisGoodwe => "solis",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Huawei => &["Huawei"],
            Self::GrowattFox => &["Growatt / Fox", "growatt", "fox"],
            Self::SolisGoodwe => &["Solis / Goodwe", "solis", "goodwe"],
        }
    }
}

impl fmt::Display for InverterBrand {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InverterBrand {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match_named(s, &Self::ALL, Self::aliases).ok_or_else(|| {
            ParseSelectionError::new(
                "inverter brand",
                s,
                Self::ALL.iter().map(|brand| brand.key()).collect(),
            )
        })
    }
}

/// Inverter rating. Chosen independently of the array size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InverterCapacity {
    Kw10,
    Kw15,
    Kw20,
    Kw25,
}

impl InverterCapacity {
    pub const ALL: [InverterCapacity; 4] = [
        InverterCapacity::Kw10,
        InverterCapacity::Kw15,
        InverterCapacity::Kw20,
        InverterCapacity::Kw25,
    ];

    pub fn kilowatts(&self) -> u32 {
        match self {
            Self::Kw10 => 10,
            Self::Kw15 => 15,
            Self::Kw20 => 20,
            Self::Kw25 => 25,
        }
    }

    /// Earthing and mounting add-on bundled with this capacity.
    pub fn earthing_cost(&self) -> u32 {
        match self {
            Self::Kw10 => 100_000,
            Self::Kw15 => 110_000,
            Self::Kw20 => 125_000,
            Self::Kw25 => 140_000,
        }
    }
}

impl fmt::Display for InverterCapacity {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}KW", self.kilowatts())
    }
}

impl FromStr for InverterCapacity {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_kilowatts(s)
            .and_then(|kw| Self::ALL.into_iter().find(|c| c.kilowatts() == kw))
            .ok_or_else(|| {
                ParseSelectionError::new("inverter capacity", s, vec!["10", "15", "20", "25"])
            })
    }
}

/// A complete inverter choice: brand plus capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InverterSelection {
    pub brand: InverterBrand,
    pub capacity: InverterCapacity,
}

impl InverterSelection {
    pub fn new(
        brand: InverterBrand,
        capacity: InverterCapacity,
    ) -> Self {
        Self { brand, capacity }
    }

    /// List price in whole rupees for this brand and capacity.
    pub fn list_price(&self) -> u32 {
        use InverterBrand::*;
        use InverterCapacity::*;

        match (self.brand, self.capacity) {
            (Huawei, Kw10) => 340_000,
            (Huawei, Kw15) => 385_000,
            (Huawei, Kw20) => 430_000,
            (Huawei, Kw25) => 450_000,
            (GrowattFox, Kw10) => 185_000,
            (GrowattFox, Kw15) => 230_000,
            (GrowattFox, Kw20) => 320_000,
            (GrowattFox, Kw25) => 340_000,
            (SolisGoodwe, Kw10) => 235_000,
            (SolisGoodwe, Kw15) => 255_000,
            (SolisGoodwe, Kw20) => 290_000,
            (SolisGoodwe, Kw25) => 330_000,
        }
    }
}

impl fmt::Display for InverterSelection {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{} {}", self.brand, self.capacity)
    }
}

//! Quote pricing.
//!
//! The total is a pure function of the five selections. Nothing is cached,
//! so a quote always reflects the current selection.
//!
//! # Price Structure
//!
//! | Component | Formula |
//! |-----------|---------|
//! | Panels | wattage × panel count × price per watt |
//! | Inverter | table lookup on (brand, capacity) |
//! | Installation | Normal: panels / 2 × 7,000; Elevated: panels × 600 × 18 |
//! | Meter | Single Phase 135,000; Three Phase 110,000 |
//! | Boring | 23,000 |
//! | Tramp | 10,000 |
//! | Earthing/mounting | 100,000 / 110,000 / 125,000 / 140,000 for 10 / 15 / 20 / 25 KW |
//! | Extra installation | panels × 600 × 4 (Normal) or × 2 (Elevated) |
//! | **Total** | sum of all components × 1.1 |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use quote_core::calculations::QuoteCalculator;
//! use quote_core::models::*;
//!
//! let selection = QuoteSelection {
//!     size: SystemSize::Kw10,
//!     panel_brand: PanelBrand::JaAstroKingdom,
//!     inverter: InverterSelection::new(InverterBrand::GrowattFox, InverterCapacity::Kw15),
//!     installation: InstallationType::Normal,
//!     meter: MeterType::SinglePhase,
//! };
//!
//! let breakdown = QuoteCalculator::new().calculate(&selection);
//!
//! assert_eq!(breakdown.subtotal, dec!(873840));
//! assert_eq!(breakdown.total, dec!(961224));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    InstallationType, InverterBrand, InverterCapacity, InverterSelection, MeterType, PanelBrand,
    QuoteSelection,
};

/// Soil boring charge added to every quote.
pub const BORING_COST: u32 = 23_000;

/// Tramp charge added to every quote.
pub const TRAMP_COST: u32 = 10_000;

/// Labour rate per panel used by the elevated and extra-installation formulas.
const PANEL_LABOUR_RATE: u32 = 600;

/// Normal installation is charged per pair of panels.
const NORMAL_RATE_PER_PAIR: u32 = 7_000;

const ELEVATED_LABOUR_MULTIPLIER: u32 = 18;
const NORMAL_EXTRA_MULTIPLIER: u32 = 4;
const ELEVATED_EXTRA_MULTIPLIER: u32 = 2;

/// Markup applied to the component sum (10%).
pub fn markup_factor() -> Decimal {
    Decimal::new(11, 1)
}

/// Itemized result of pricing a [`QuoteSelection`].
///
/// Every field is an exact decimal; `total` is `subtotal × 1.1` with no
/// rounding applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteBreakdown {
    pub panel: Decimal,
    pub inverter: Decimal,
    pub installation: Decimal,
    pub meter: Decimal,
    pub boring: Decimal,
    pub tramp: Decimal,
    pub earthing: Decimal,
    pub extra_installation: Decimal,

    /// Sum of all components before markup.
    pub subtotal: Decimal,

    /// Subtotal with the 10% markup applied.
    pub total: Decimal,
}

impl QuoteBreakdown {
    /// Components in display order, paired with their labels.
    pub fn components(&self) -> [(&'static str, Decimal); 8] {
        [
            ("Solar Panels", self.panel),
            ("Inverter", self.inverter),
            ("Installation", self.installation),
            ("Meter", self.meter),
            ("Boring", self.boring),
            ("Tramp", self.tramp),
            ("Earthing & Mounting", self.earthing),
            ("Installation Charges", self.extra_installation),
        ]
    }
}

/// Calculator for solar installation quotes.
///
/// All prices come from fixed tables, so the calculator carries no state.
/// It exists so callers have one place to price a selection and to preview
/// the price of individual options before choosing them.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuoteCalculator;

impl QuoteCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Prices a complete selection.
    pub fn calculate(
        &self,
        selection: &QuoteSelection,
    ) -> QuoteBreakdown {
        let panel_count = selection.panel_count();

        let panel = self.panel_cost(selection.panel_brand, panel_count);
        let inverter = self.inverter_cost(&selection.inverter);
        let installation = self.installation_cost(selection.installation, panel_count);
        let meter = self.meter_cost(selection.meter);
        let boring = Decimal::from(BORING_COST);
        let tramp = Decimal::from(TRAMP_COST);
        let earthing = self.earthing_cost(selection.inverter.capacity);
        let extra_installation = self.extra_installation_charge(selection.installation, panel_count);

        let subtotal =
            panel + inverter + installation + meter + boring + tramp + earthing + extra_installation;
        let total = self.total(subtotal);

        tracing::debug!(
            %subtotal,
            %total,
            size = selection.size.identifier(),
            "priced quote selection"
        );

        QuoteBreakdown {
            panel,
            inverter,
            installation,
            meter,
            boring,
            tramp,
            earthing,
            extra_installation,
            subtotal,
            total,
        }
    }

    /// Panel cost: wattage × panel count × price per watt.
    pub fn panel_cost(
        &self,
        brand: PanelBrand,
        panel_count: u32,
    ) -> Decimal {
        Decimal::from(brand.wattage()) * Decimal::from(panel_count) * Decimal::from(brand.price_per_watt())
    }

    pub fn inverter_cost(
        &self,
        inverter: &InverterSelection,
    ) -> Decimal {
        Decimal::from(inverter.list_price())
    }

    /// Base installation cost for the mounting type.
    pub fn installation_cost(
        &self,
        installation: InstallationType,
        panel_count: u32,
    ) -> Decimal {
        let panels = Decimal::from(panel_count);
        match installation {
            InstallationType::Normal => panels / Decimal::TWO * Decimal::from(NORMAL_RATE_PER_PAIR),
            InstallationType::Elevated => {
                panels * Decimal::from(PANEL_LABOUR_RATE) * Decimal::from(ELEVATED_LABOUR_MULTIPLIER)
            }
        }
    }

    pub fn meter_cost(
        &self,
        meter: MeterType,
    ) -> Decimal {
        Decimal::from(meter.list_price())
    }

    pub fn earthing_cost(
        &self,
        capacity: InverterCapacity,
    ) -> Decimal {
        Decimal::from(capacity.earthing_cost())
    }

    /// Labour surcharge on top of the base installation cost.
    pub fn extra_installation_charge(
        &self,
        installation: InstallationType,
        panel_count: u32,
    ) -> Decimal {
        let multiplier = match installation {
            InstallationType::Normal => NORMAL_EXTRA_MULTIPLIER,
            InstallationType::Elevated => ELEVATED_EXTRA_MULTIPLIER,
        };
        Decimal::from(panel_count) * Decimal::from(PANEL_LABOUR_RATE) * Decimal::from(multiplier)
    }

    /// Applies the markup to a component sum.
    pub fn total(
        &self,
        subtotal: Decimal,
    ) -> Decimal {
        subtotal * markup_factor()
    }

    /// Panel cost of every brand for the given panel count.
    pub fn panel_options(
        &self,
        panel_count: u32,
    ) -> Vec<(PanelBrand, Decimal)> {
        PanelBrand::ALL
            .into_iter()
            .map(|brand| (brand, self.panel_cost(brand, panel_count)))
            .collect()
    }

    /// Inverter cost of every capacity offered by `brand`.
    pub fn capacity_options(
        &self,
        brand: InverterBrand,
    ) -> Vec<(InverterCapacity, Decimal)> {
        InverterCapacity::ALL
            .into_iter()
            .map(|capacity| {
                let price = self.inverter_cost(&InverterSelection::new(brand, capacity));
                (capacity, price)
            })
            .collect()
    }

    /// Base installation cost of both mounting types for the given panel count.
    pub fn installation_options(
        &self,
        panel_count: u32,
    ) -> Vec<(InstallationType, Decimal)> {
        InstallationType::ALL
            .into_iter()
            .map(|kind| (kind, self.installation_cost(kind, panel_count)))
            .collect()
    }
}

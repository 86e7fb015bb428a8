use serde::{Deserialize, Serialize};

use super::{InstallationType, InverterSelection, MeterType, PanelBrand, SystemSize};

/// One choice from every priced category.
///
/// This is the complete input of the quote calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuoteSelection {
    pub size: SystemSize,
    pub panel_brand: PanelBrand,
    pub inverter: InverterSelection,
    pub installation: InstallationType,
    pub meter: MeterType,
}

impl QuoteSelection {
    pub fn panel_count(&self) -> u32 {
        self.size.panel_count()
    }
}

mod contact_info;
mod installation_type;
mod inverter;
mod meter_type;
mod panel_brand;
mod parse;
mod selection;
mod system_size;

pub use contact_info::{ContactField, ContactInfo};
pub use installation_type::InstallationType;
pub use inverter::{InverterBrand, InverterCapacity, InverterSelection};
pub use meter_type::MeterType;
pub use panel_brand::PanelBrand;
pub use parse::ParseSelectionError;
pub use selection::QuoteSelection;
pub use system_size::SystemSize;

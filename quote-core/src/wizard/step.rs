use std::fmt;

use serde::{Deserialize, Serialize};

/// The seven ordered stages of the quote wizard.
///
/// Steps one through six collect input; [`Step::Summary`] is the terminal
/// display stage.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Step {
    #[default]
    SystemSize,
    PanelBrand,
    Inverter,
    Installation,
    Meter,
    ContactDetails,
    Summary,
}

impl Step {
    pub const COUNT: u8 = 7;

    pub const ALL: [Step; 7] = [
        Step::SystemSize,
        Step::PanelBrand,
        Step::Inverter,
        Step::Installation,
        Step::Meter,
        Step::ContactDetails,
        Step::Summary,
    ];

    /// One-based position of the step.
    pub fn number(&self) -> u8 {
        match self {
            Self::SystemSize => 1,
            Self::PanelBrand => 2,
            Self::Inverter => 3,
            Self::Installation => 4,
            Self::Meter => 5,
            Self::ContactDetails => 6,
            Self::Summary => 7,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|step| step.number() == number)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::SystemSize => "Select System Size",
            Self::PanelBrand => "Choose Panel Brand",
            Self::Inverter => "Choose Inverter",
            Self::Installation => "Installation Type",
            Self::Meter => "Meter Type",
            Self::ContactDetails => "Your Contact Details",
            Self::Summary => "Your Solar System Quote",
        }
    }

    pub fn following(&self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn preceding(&self) -> Option<Self> {
        self.number().checked_sub(1).and_then(Self::from_number)
    }

    pub fn is_first(&self) -> bool {
        *self == Self::SystemSize
    }

    pub fn is_last(&self) -> bool {
        *self == Self::Summary
    }

    /// Completion percentage shown next to the progress bar, rounded half-up.
    pub fn progress_percent(&self) -> u8 {
        let number = u32::from(self.number());
        let count = u32::from(Self::COUNT);
        // round(number / count × 100) in integer arithmetic
        ((number * 200 + count) / (count * 2)) as u8
    }
}

impl fmt::Display for Step {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "Step {} of {}", self.number(), Self::COUNT)
    }
}

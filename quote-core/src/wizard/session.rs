//! Quote wizard session state and commands.
//!
//! A [`QuoteSession`] is an immutable value: every command consumes the
//! session and returns the updated one, which keeps the wizard testable
//! without any UI harness.
//!
//! # Example
//!
//! ```
//! use quote_core::models::*;
//! use quote_core::wizard::{QuoteSession, Step};
//!
//! let session = QuoteSession::new().next();
//! assert_eq!(session.step(), Step::SystemSize); // nothing selected yet
//!
//! let session = session.select_size(SystemSize::Kw10).next();
//! assert_eq!(session.step(), Step::PanelBrand);
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Step;
use crate::calculations::{QuoteBreakdown, QuoteCalculator};
use crate::models::{
    ContactField, ContactInfo, InstallationType, InverterBrand, InverterCapacity,
    InverterSelection, MeterType, PanelBrand, QuoteSelection, SystemSize,
};
use crate::quote::{IncompleteQuote, Quote};

/// Selection state of one customer's pass through the wizard.
///
/// Prices are never stored; every price accessor recomputes from the
/// current selections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteSession {
    step: Step,
    size: Option<SystemSize>,
    panel_brand: Option<PanelBrand>,
    inverter_brand: Option<InverterBrand>,
    inverter_capacity: Option<InverterCapacity>,
    installation: Option<InstallationType>,
    meter: Option<MeterType>,
    contact: ContactInfo,
}

impl QuoteSession {
    /// Starts a fresh session on the first step with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    // ── selection commands ─────────────────────────────────────────────────

    #[must_use]
    pub fn select_size(
        mut self,
        size: SystemSize,
    ) -> Self {
        debug!(size = size.identifier(), "selected system size");
        self.size = Some(size);
        self
    }

    #[must_use]
    pub fn select_panel_brand(
        mut self,
        brand: PanelBrand,
    ) -> Self {
        debug!(brand = brand.key(), "selected panel brand");
        self.panel_brand = Some(brand);
        self
    }

    #[must_use]
    pub fn select_inverter_brand(
        mut self,
        brand: InverterBrand,
    ) -> Self {
        debug!(brand = brand.key(), "selected inverter brand");
        self.inverter_brand = Some(brand);
        self
    }

    #[must_use]
    pub fn select_inverter_capacity(
        mut self,
        capacity: InverterCapacity,
    ) -> Self {
        debug!(kilowatts = capacity.kilowatts(), "selected inverter capacity");
        self.inverter_capacity = Some(capacity);
        self
    }

    /// Selects brand and capacity together.
    #[must_use]
    pub fn select_inverter(
        self,
        inverter: InverterSelection,
    ) -> Self {
        self.select_inverter_brand(inverter.brand)
            .select_inverter_capacity(inverter.capacity)
    }

    #[must_use]
    pub fn select_installation(
        mut self,
        installation: InstallationType,
    ) -> Self {
        debug!(installation = installation.label(), "selected installation type");
        self.installation = Some(installation);
        self
    }

    #[must_use]
    pub fn select_meter(
        mut self,
        meter: MeterType,
    ) -> Self {
        debug!(meter = meter.label(), "selected meter type");
        self.meter = Some(meter);
        self
    }

    #[must_use]
    pub fn update_contact(
        mut self,
        field: ContactField,
        value: impl Into<String>,
    ) -> Self {
        self.contact = self.contact.with_field(field, value);
        self
    }

    #[must_use]
    pub fn set_contact(
        mut self,
        contact: ContactInfo,
    ) -> Self {
        self.contact = contact;
        self
    }

    // ── navigation commands ────────────────────────────────────────────────

    /// Advances one step if the current step is complete.
    ///
    /// A no-op on an incomplete step and on the summary step.
    #[must_use]
    pub fn next(mut self) -> Self {
        if !self.is_step_complete(self.step) {
            debug!(step = self.step.number(), "current step incomplete; staying");
            return self;
        }
        if let Some(following) = self.step.following() {
            debug!(from = self.step.number(), to = following.number(), "advancing");
            self.step = following;
        }
        self
    }

    /// Goes back one step. A no-op on the first step.
    ///
    /// Selections made on later steps are kept.
    #[must_use]
    pub fn prev(mut self) -> Self {
        if let Some(preceding) = self.step.preceding() {
            debug!(from = self.step.number(), to = preceding.number(), "going back");
            self.step = preceding;
        }
        self
    }

    /// Clears every selection and the contact details and returns to step one.
    #[must_use]
    pub fn reset(self) -> Self {
        debug!(from = self.step.number(), "starting over");
        Self::default()
    }

    // ── queries ────────────────────────────────────────────────────────────

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn size(&self) -> Option<SystemSize> {
        self.size
    }

    pub fn panel_brand(&self) -> Option<PanelBrand> {
        self.panel_brand
    }

    pub fn inverter_brand(&self) -> Option<InverterBrand> {
        self.inverter_brand
    }

    pub fn inverter_capacity(&self) -> Option<InverterCapacity> {
        self.inverter_capacity
    }

    pub fn inverter(&self) -> Option<InverterSelection> {
        Some(InverterSelection::new(
            self.inverter_brand?,
            self.inverter_capacity?,
        ))
    }

    pub fn installation(&self) -> Option<InstallationType> {
        self.installation
    }

    pub fn meter(&self) -> Option<MeterType> {
        self.meter
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    /// Completeness predicate of `step`.
    pub fn is_step_complete(
        &self,
        step: Step,
    ) -> bool {
        match step {
            Step::SystemSize => self.size.is_some(),
            Step::PanelBrand => self.panel_brand.is_some(),
            Step::Inverter => self.inverter().is_some(),
            Step::Installation => self.installation.is_some(),
            Step::Meter => self.meter.is_some(),
            Step::ContactDetails => self.contact.is_complete(),
            Step::Summary => true,
        }
    }

    /// Whether [`next`](Self::next) would move forward from here.
    pub fn can_advance(&self) -> bool {
        !self.step.is_last() && self.is_step_complete(self.step)
    }

    /// Input steps whose predicate does not hold yet.
    pub fn incomplete_steps(&self) -> Vec<Step> {
        Step::ALL
            .into_iter()
            .filter(|step| !self.is_step_complete(*step))
            .collect()
    }

    /// The complete selection, once every priced category is chosen.
    pub fn selection(&self) -> Option<QuoteSelection> {
        Some(QuoteSelection {
            size: self.size?,
            panel_brand: self.panel_brand?,
            inverter: self.inverter()?,
            installation: self.installation?,
            meter: self.meter?,
        })
    }

    // ── prices ─────────────────────────────────────────────────────────────

    /// Panel cost for the chosen brand and size; zero until both are chosen.
    pub fn panel_price(&self) -> Decimal {
        match (self.panel_brand, self.size) {
            (Some(brand), Some(size)) => QuoteCalculator::new().panel_cost(brand, size.panel_count()),
            _ => Decimal::ZERO,
        }
    }

    /// Inverter cost; zero until brand and capacity are chosen.
    pub fn inverter_price(&self) -> Decimal {
        self.inverter()
            .map(|inverter| QuoteCalculator::new().inverter_cost(&inverter))
            .unwrap_or(Decimal::ZERO)
    }

    /// Base installation cost; zero until type and size are chosen.
    pub fn installation_price(&self) -> Decimal {
        match (self.installation, self.size) {
            (Some(kind), Some(size)) => {
                QuoteCalculator::new().installation_cost(kind, size.panel_count())
            }
            _ => Decimal::ZERO,
        }
    }

    /// Meter cost; zero until a meter type is chosen.
    pub fn meter_price(&self) -> Decimal {
        self.meter
            .map(|meter| QuoteCalculator::new().meter_cost(meter))
            .unwrap_or(Decimal::ZERO)
    }

    /// Full price breakdown, once every priced category is chosen.
    pub fn breakdown(&self) -> Option<QuoteBreakdown> {
        self.selection()
            .map(|selection| QuoteCalculator::new().calculate(&selection))
    }

    /// Builds the finished quote.
    ///
    /// # Errors
    ///
    /// Returns [`IncompleteQuote`] naming every missing selection and
    /// contact field.
    pub fn quote(&self) -> Result<Quote, IncompleteQuote> {
        let Some(selection) = self.selection() else {
            let mut missing: Vec<String> = [
                (self.size.is_none(), "system size"),
                (self.panel_brand.is_none(), "panel brand"),
                (self.inverter_brand.is_none(), "inverter brand"),
                (self.inverter_capacity.is_none(), "inverter capacity"),
                (self.installation.is_none(), "installation type"),
                (self.meter.is_none(), "meter type"),
            ]
            .into_iter()
            .filter(|(absent, _)| *absent)
            .map(|(_, name)| name.to_string())
            .collect();
            missing.extend(
                self.contact
                    .missing_fields()
                    .iter()
                    .map(|field| format!("contact {}", field.label().to_lowercase())),
            );
            return Err(IncompleteQuote::new(missing));
        };

        Quote::new(selection, self.contact.clone())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn contact() -> ContactInfo {
        ContactInfo {
            name: "Ayesha Khan".to_string(),
            phone: "0300-1234567".to_string(),
            city: "Lahore".to_string(),
            address: "12 Canal View".to_string(),
            email: Some("ayesha@example.com".to_string()),
        }
    }

    /// Walks the wizard to the summary with the reference selection.
    fn completed_session() -> QuoteSession {
        QuoteSession::new()
            .select_size(SystemSize::Kw10)
            .next()
            .select_panel_brand(PanelBrand::JaAstroKingdom)
            .next()
            .select_inverter_brand(InverterBrand::GrowattFox)
            .select_inverter_capacity(InverterCapacity::Kw15)
            .next()
            .select_installation(InstallationType::Normal)
            .next()
            .select_meter(MeterType::SinglePhase)
            .next()
            .set_contact(contact())
            .next()
    }

    // =========================================================================
    // navigation tests
    // =========================================================================

    #[test]
    fn new_session_starts_on_first_step() {
        let session = QuoteSession::new();

        assert_eq!(session.step(), Step::SystemSize);
        assert_eq!(session.selection(), None);
    }

    #[test]
    fn next_is_noop_when_step_incomplete() {
        let session = QuoteSession::new();

        assert_eq!(session.clone().next(), session);
    }

    #[test]
    fn next_advances_when_step_complete() {
        let session = QuoteSession::new().select_size(SystemSize::Kw6).next();

        assert_eq!(session.step(), Step::PanelBrand);
    }

    #[test]
    fn inverter_step_needs_brand_and_capacity() {
        let session = QuoteSession::new()
            .select_size(SystemSize::Kw6)
            .next()
            .select_panel_brand(PanelBrand::CanadianJinko)
            .next()
            .select_inverter_brand(InverterBrand::Huawei)
            .next();

        assert_eq!(session.step(), Step::Inverter);

        let session = session.select_inverter_capacity(InverterCapacity::Kw10).next();

        assert_eq!(session.step(), Step::Installation);
    }

    #[test]
    fn contact_step_needs_every_required_field() {
        let mut session = completed_session().prev();
        assert_eq!(session.step(), Step::ContactDetails);

        session = session.update_contact(ContactField::Address, "").next();
        assert_eq!(session.step(), Step::ContactDetails);

        session = session.update_contact(ContactField::Address, "12 Canal View").next();
        assert_eq!(session.step(), Step::Summary);
    }

    #[test]
    fn contact_step_does_not_need_email() {
        let session = completed_session()
            .prev()
            .update_contact(ContactField::Email, "")
            .next();

        assert_eq!(session.step(), Step::Summary);
    }

    #[test]
    fn next_is_noop_on_summary() {
        let session = completed_session();
        assert_eq!(session.step(), Step::Summary);

        assert_eq!(session.clone().next(), session);
        assert!(!session.can_advance());
    }

    #[test]
    fn prev_is_noop_on_first_step() {
        let session = QuoteSession::new().select_size(SystemSize::Kw15);

        assert_eq!(session.clone().prev(), session);
    }

    #[test]
    fn prev_keeps_later_selections() {
        let session = completed_session().prev().prev().prev();

        assert_eq!(session.step(), Step::Installation);
        assert_eq!(session.meter(), Some(MeterType::SinglePhase));
        assert_eq!(session.contact(), &contact());
    }

    #[test]
    fn reset_clears_everything() {
        let session = completed_session().reset();

        assert_eq!(session, QuoteSession::new());
        assert_eq!(session.step(), Step::SystemSize);
        assert_eq!(session.panel_price(), Decimal::ZERO);
        assert_eq!(session.inverter_price(), Decimal::ZERO);
        assert_eq!(session.installation_price(), Decimal::ZERO);
        assert_eq!(session.meter_price(), Decimal::ZERO);
    }

    #[test]
    fn incomplete_steps_lists_unmet_predicates() {
        let session = QuoteSession::new()
            .select_size(SystemSize::Kw20)
            .select_meter(MeterType::ThreePhase);

        assert_eq!(
            session.incomplete_steps(),
            vec![
                Step::PanelBrand,
                Step::Inverter,
                Step::Installation,
                Step::ContactDetails,
            ]
        );
    }

    // =========================================================================
    // price tests
    // =========================================================================

    #[test]
    fn component_prices_follow_selections() {
        let session = completed_session();

        assert_eq!(session.panel_price(), dec!(271440));
        assert_eq!(session.inverter_price(), dec!(230000));
        assert_eq!(session.installation_price(), dec!(56000));
        assert_eq!(session.meter_price(), dec!(135000));
    }

    #[test]
    fn prices_recompute_after_changing_an_earlier_step() {
        let session = completed_session();
        assert_eq!(session.breakdown().unwrap().total, dec!(961224));

        let session = session
            .prev()
            .prev()
            .prev()
            .prev()
            .prev()
            .select_size(SystemSize::Kw6);

        assert_eq!(session.step(), Step::PanelBrand);
        // 585 × 10 × 29
        assert_eq!(session.panel_price(), dec!(169650));
        // 10 / 2 × 7000
        assert_eq!(session.installation_price(), dec!(35000));
        // 169650 + 230000 + 35000 + 135000 + 23000 + 10000 + 110000 + 24000
        assert_eq!(session.breakdown().unwrap().subtotal, dec!(736650));
    }

    #[test]
    fn panel_price_needs_size_and_brand() {
        let session = QuoteSession::new().select_panel_brand(PanelBrand::LongiNimoX7);

        assert_eq!(session.panel_price(), Decimal::ZERO);
        assert_eq!(
            session.select_size(SystemSize::Kw10).panel_price(),
            dec!(305040)
        );
    }

    // =========================================================================
    // quote tests
    // =========================================================================

    #[test]
    fn quote_from_completed_session() {
        let quote = completed_session().quote().unwrap();

        assert_eq!(quote.total(), dec!(961224));
        assert_eq!(quote.selection().size, SystemSize::Kw10);
    }

    #[test]
    fn quote_lists_every_missing_input() {
        let err = QuoteSession::new()
            .select_size(SystemSize::Kw10)
            .select_inverter_brand(InverterBrand::Huawei)
            .update_contact(ContactField::Name, "Bilal")
            .quote()
            .unwrap_err();

        assert_eq!(
            err.missing(),
            [
                "panel brand",
                "inverter capacity",
                "installation type",
                "meter type",
                "contact phone",
                "contact city",
                "contact address",
            ]
        );
    }
}

//! Printable plain-text quote summary.
//!
//! The summary is handed to a [`SummarySink`](crate::output::SummarySink)
//! as a finished string; sinks never format anything themselves.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use quote_core::models::*;
//! use quote_core::summary::{QuoteSummary, SummaryTemplate};
//! use quote_core::Quote;
//!
//! let selection = QuoteSelection {
//!     size: SystemSize::Kw10,
//!     panel_brand: PanelBrand::JaAstroKingdom,
//!     inverter: InverterSelection::new(InverterBrand::GrowattFox, InverterCapacity::Kw15),
//!     installation: InstallationType::Normal,
//!     meter: MeterType::SinglePhase,
//! };
//! let contact = ContactInfo {
//!     name: "Ayesha Khan".into(),
//!     phone: "0300-1234567".into(),
//!     city: "Lahore".into(),
//!     address: "12 Canal View".into(),
//!     email: None,
//! };
//! let quote = Quote::new(selection, contact).unwrap();
//! let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
//!
//! let text = QuoteSummary::new(&quote, &SummaryTemplate::default(), date).render();
//!
//! assert!(text.contains("Quote generated on October 19, 2026"));
//! assert!(text.contains("PKR 961,224"));
//! ```

use std::fmt;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calculations::common::format_currency;
use crate::quote::Quote;

/// Number of days a quote stays valid unless configured otherwise.
pub const DEFAULT_VALIDITY_DAYS: u32 = 5;

const LABEL_WIDTH: usize = 22;

/// Notes printed under "Additional Information" after the validity note.
pub fn default_notes() -> Vec<String> {
    [
        "Installation timeline: 2-3 weeks after confirmation.",
        "Payment terms: 60% advance, 20% on panels and structure installation 20% after complete electrical work.",
        "Free maintenance for the first year.",
        "Net metering cost as per actual not included in quotation.",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Presentation settings for the printable summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryTemplate {
    /// Heading printed above the quote title.
    pub company_name: String,
    /// Currency label placed before every amount.
    pub currency: String,
    pub validity_days: u32,
    pub notes: Vec<String>,
    /// Print the itemized cost breakdown above the total.
    pub show_breakdown: bool,
}

impl Default for SummaryTemplate {
    fn default() -> Self {
        Self {
            company_name: "Solar System Quote Generator".to_string(),
            currency: "PKR".to_string(),
            validity_days: DEFAULT_VALIDITY_DAYS,
            notes: default_notes(),
            show_breakdown: false,
        }
    }
}

/// A quote laid out for printing on a given date.
#[derive(Debug, Clone)]
pub struct QuoteSummary<'a> {
    quote: &'a Quote,
    template: &'a SummaryTemplate,
    generated_on: NaiveDate,
}

impl<'a> QuoteSummary<'a> {
    pub fn new(
        quote: &'a Quote,
        template: &'a SummaryTemplate,
        generated_on: NaiveDate,
    ) -> Self {
        Self {
            quote,
            template,
            generated_on,
        }
    }

    /// Last day the quote is honoured. `None` only if the date overflows.
    pub fn valid_until(&self) -> Option<NaiveDate> {
        self.generated_on
            .checked_add_days(Days::new(u64::from(self.template.validity_days)))
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    fn money(
        &self,
        amount: rust_decimal::Decimal,
    ) -> String {
        format_currency(&self.template.currency, amount)
    }
}

fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

impl fmt::Display for QuoteSummary<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let contact = self.quote.contact();
        let selection = self.quote.selection();
        let breakdown = self.quote.breakdown();
        let w = LABEL_WIDTH;

        writeln!(f, "{}", self.template.company_name)?;
        writeln!(f, "Your Solar System Quote")?;
        writeln!(f, "Quote generated on {}", long_date(self.generated_on))?;
        if let Some(until) = self.valid_until() {
            writeln!(f, "Valid until {}", long_date(until))?;
        }

        writeln!(f)?;
        writeln!(f, "Customer Information")?;
        writeln!(f, "  {:<w$}{}", "Name:", contact.name)?;
        writeln!(f, "  {:<w$}{}", "Phone:", contact.phone)?;
        writeln!(f, "  {:<w$}{}", "City:", contact.city)?;
        if let Some(email) = &contact.email {
            writeln!(f, "  {:<w$}{}", "Email:", email)?;
        }
        writeln!(f, "  {:<w$}{}", "Address:", contact.address)?;

        writeln!(f)?;
        writeln!(f, "System Configuration")?;
        writeln!(f, "  {:<w$}{}", "System Size:", selection.size.label())?;
        writeln!(f, "  {:<w$}{}", "Panel Brand:", selection.panel_brand.name())?;
        writeln!(f, "  {:<w$}{}", "Inverter Brand:", selection.inverter.brand.name())?;
        writeln!(f, "  {:<w$}{}", "Inverter Capacity:", selection.inverter.capacity)?;
        writeln!(f, "  {:<w$}{}", "Installation Type:", selection.installation.label())?;
        writeln!(f, "  {:<w$}{}", "Meter Type:", selection.meter.label())?;

        writeln!(f)?;
        if self.template.show_breakdown {
            writeln!(f, "Cost Breakdown")?;
            for (label, amount) in breakdown.components() {
                writeln!(f, "  {:<w$}{}", format!("{label}:"), self.money(amount))?;
            }
            writeln!(f, "  {:<w$}{}", "Subtotal:", self.money(breakdown.subtotal))?;
            writeln!(f)?;
        }
        writeln!(f, "{:<width$}{}", "Total:", self.money(breakdown.total), width = w + 2)?;

        writeln!(f)?;
        writeln!(f, "Additional Information")?;
        writeln!(
            f,
            "  - This quote is valid for {} days from the date of generation.",
            self.template.validity_days
        )?;
        for note in &self.template.notes {
            writeln!(f, "  - {note}")?;
        }
        Ok(())
    }
}

use serde::Serialize;
use thiserror::Error;

use crate::calculations::{QuoteBreakdown, QuoteCalculator};
use crate::models::{ContactInfo, QuoteSelection};

/// Returned when a quote is requested before every input is present.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("quote is incomplete; missing: {}", .missing.join(", "))]
pub struct IncompleteQuote {
    missing: Vec<String>,
}

impl IncompleteQuote {
    pub(crate) fn new(missing: Vec<String>) -> Self {
        Self { missing }
    }

    /// Human-readable names of the missing inputs.
    pub fn missing(&self) -> &[String] {
        &self.missing
    }
}

/// A finished quote: the customer's selection, their contact details and
/// the price derived from the selection.
///
/// The breakdown is computed on construction and cannot be edited, so it
/// always matches the selection it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    selection: QuoteSelection,
    contact: ContactInfo,
    breakdown: QuoteBreakdown,
}

impl Quote {
    /// Prices `selection` for `contact`.
    ///
    /// # Errors
    ///
    /// Returns [`IncompleteQuote`] if any required contact field is blank.
    pub fn new(
        selection: QuoteSelection,
        contact: ContactInfo,
    ) -> Result<Self, IncompleteQuote> {
        let missing = contact.missing_fields();
        if !missing.is_empty() {
            return Err(IncompleteQuote::new(
                missing
                    .iter()
                    .map(|field| format!("contact {}", field.label().to_lowercase()))
                    .collect(),
            ));
        }

        let breakdown = QuoteCalculator::new().calculate(&selection);
        Ok(Self {
            selection,
            contact,
            breakdown,
        })
    }

    pub fn selection(&self) -> &QuoteSelection {
        &self.selection
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    pub fn breakdown(&self) -> &QuoteBreakdown {
        &self.breakdown
    }

    pub fn total(&self) -> rust_decimal::Decimal {
        self.breakdown.total
    }
}

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::quote::Quote;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("submission rejected: {0}")]
    Rejected(String),
}

/// Confirmation shown to the customer after a quote request is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Acknowledgement {
    pub title: String,
    pub message: String,
}

/// Receives a finished quote request (CRM, email, ticketing).
pub trait SubmissionHook {
    fn submit(
        &self,
        quote: &Quote,
    ) -> Result<Acknowledgement, SubmissionError>;
}

/// Records the request in the log and acknowledges it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSubmissionHook;

impl SubmissionHook for LoggingSubmissionHook {
    fn submit(
        &self,
        quote: &Quote,
    ) -> Result<Acknowledgement, SubmissionError> {
        let contact = quote.contact();
        let selection = quote.selection();

        info!(
            name = %contact.name,
            phone = %contact.phone,
            city = %contact.city,
            size = %selection.size,
            panel = selection.panel_brand.key(),
            inverter = %selection.inverter,
            total = %quote.total(),
            "quote request submitted"
        );

        Ok(Acknowledgement {
            title: "Quote Request Submitted".to_string(),
            message: format!(
                "Thank you, {}! We'll contact you shortly with your personalized solar quote.",
                contact.name
            ),
        })
    }
}

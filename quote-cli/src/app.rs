use chrono::{Local, NaiveDate};
use quote_core::output::{SinkConfig, SinkRegistry};
use quote_core::summary::{QuoteSummary, SummaryTemplate};
use quote_core::{ContactInfo, IncompleteQuote, Quote, QuoteSelection, QuoteSession};
use tracing::debug;

use crate::sinks::{FileSinkFactory, StdoutSinkFactory};

/// Build and return a registry populated with every summary sink
/// compiled into this binary.
pub fn build_registry() -> SinkRegistry {
    let mut registry = SinkRegistry::new();
    registry.register(Box::new(StdoutSinkFactory));
    registry.register(Box::new(FileSinkFactory));
    registry
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Walks a new session through every step with the given choices.
///
/// The result sits on the summary step when everything was accepted, or on
/// the first step that could not be completed.
pub fn walk_session(
    selection: &QuoteSelection,
    contact: ContactInfo,
) -> QuoteSession {
    QuoteSession::new()
        .select_size(selection.size)
        .next()
        .select_panel_brand(selection.panel_brand)
        .next()
        .select_inverter(selection.inverter)
        .next()
        .select_installation(selection.installation)
        .next()
        .select_meter(selection.meter)
        .next()
        .set_contact(contact)
        .next()
}

/// Prices `selection` for `contact` through the wizard session.
pub fn build_quote(
    selection: &QuoteSelection,
    contact: ContactInfo,
) -> Result<Quote, IncompleteQuote> {
    let session = walk_session(selection, contact);
    debug!(step = %session.step(), "one-shot session finished");
    session.quote()
}

/// Renders `quote` and hands it to the sink named in `sink_config`.
/// Returns the sink description for user feedback.
pub fn deliver_quote(
    registry: &SinkRegistry,
    sink_config: &SinkConfig,
    quote: &Quote,
    template: &SummaryTemplate,
    date: NaiveDate,
) -> anyhow::Result<String> {
    let text = QuoteSummary::new(quote, template, date).render();
    let mut sink = registry.create(sink_config)?;
    sink.deliver(&text)?;
    Ok(sink.describe())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use quote_core::output::SinkConfig;
    use quote_core::*;
    use rust_decimal_macros::dec;

    use super::*;

    fn selection() -> QuoteSelection {
        QuoteSelection {
            size: SystemSize::Kw10,
            panel_brand: PanelBrand::JaAstroKingdom,
            inverter: InverterSelection::new(InverterBrand::GrowattFox, InverterCapacity::Kw15),
            installation: InstallationType::Normal,
            meter: MeterType::SinglePhase,
        }
    }

    fn contact() -> ContactInfo {
        ContactInfo {
            name: "Ayesha Khan".to_string(),
            phone: "0300-1234567".to_string(),
            city: "Lahore".to_string(),
            address: "12 Canal View".to_string(),
            email: None,
        }
    }

    #[test]
    fn registry_has_builtin_sinks() {
        assert_eq!(build_registry().available_backends(), vec!["file", "stdout"]);
    }

    #[test]
    fn walk_session_reaches_summary() {
        let session = walk_session(&selection(), contact());

        assert_eq!(session.step(), Step::Summary);
    }

    #[test]
    fn walk_session_stops_at_contact_details_when_incomplete() {
        let contact = ContactInfo {
            city: String::new(),
            ..contact()
        };

        let session = walk_session(&selection(), contact);

        assert_eq!(session.step(), Step::ContactDetails);
    }

    #[test]
    fn build_quote_prices_reference_selection() {
        let quote = build_quote(&selection(), contact()).unwrap();

        assert_eq!(quote.total(), dec!(961224));
    }

    #[test]
    fn deliver_quote_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quote.txt");
        let config = SinkConfig {
            backend: "file".to_string(),
            target: Some(path.clone()),
        };
        let quote = build_quote(&selection(), contact()).unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

        let described = deliver_quote(
            &build_registry(),
            &config,
            &quote,
            &SummaryTemplate::default(),
            date,
        )
        .unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(described, path.display().to_string());
        assert!(text.contains("PKR 961,224"));
        assert!(text.contains("Valid until October 24, 2026"));
    }
}

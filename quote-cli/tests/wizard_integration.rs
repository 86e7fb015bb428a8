//! Scripted end-to-end runs of the interactive wizard.

use std::fs;
use std::io::Cursor;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use quote_cli::app::build_registry;
use quote_cli::config::AppConfig;
use quote_cli::wizard::{Wizard, WizardExit};
use quote_core::output::{LoggingSubmissionHook, SinkConfig};
use quote_core::{QuoteSession, Step};
use rust_decimal_macros::dec;

const FULL_QUOTE: &str = "\
10
ja
growatt
15
normal
single
Ayesha Khan
0300-1234567
Lahore

12 Canal View
";

fn run_wizard(
    script: &str,
    sink_config: SinkConfig,
    config: &AppConfig,
) -> (QuoteSession, WizardExit, String) {
    let registry = build_registry();
    let hook = LoggingSubmissionHook;
    let mut output = Vec::new();

    let (session, exit) = Wizard::new(
        Cursor::new(script.to_string()),
        &mut output,
        &registry,
        sink_config,
        config.summary_template(false),
        &hook,
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
    )
    .run()
    .expect("wizard runs to completion");

    (session, exit, String::from_utf8(output).unwrap())
}

#[test]
fn full_walkthrough_shows_summary() {
    let (session, exit, output) = run_wizard(FULL_QUOTE, SinkConfig::default(), &AppConfig::default());

    assert_eq!(exit, WizardExit::EndOfInput);
    assert_eq!(session.step(), Step::Summary);
    assert_eq!(session.breakdown().unwrap().total, dec!(961224));
    assert!(output.contains("== Step 7 of 7 (100%): Your Solar System Quote =="));
    assert!(output.contains("Total:"));
    assert!(output.contains("PKR 961,224"));
}

#[test]
fn missing_contact_field_blocks_summary() {
    let script = "10\nja\ngrowatt\n15\nnormal\nsingle\nAyesha Khan\n\nLahore\n\n12 Canal View\n";

    let (session, _, output) = run_wizard(script, SinkConfig::default(), &AppConfig::default());

    assert_eq!(session.step(), Step::ContactDetails);
    assert!(output.contains("Please fill in: Phone"));
}

#[test]
fn print_writes_summary_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quote.txt");
    let sink = SinkConfig {
        backend: "file".to_string(),
        target: Some(path.clone()),
    };
    let config = AppConfig {
        company_name: "Sunrise Solar".to_string(),
        ..AppConfig::default()
    };

    let script = format!("{FULL_QUOTE}p\nq\n");
    let (_, exit, output) = run_wizard(&script, sink, &config);

    let printed = fs::read_to_string(&path).unwrap();
    assert_eq!(exit, WizardExit::Quit);
    assert!(output.contains(&format!("Quote sent to {}.", path.display())));
    assert!(printed.starts_with("Sunrise Solar\n"));
    assert!(printed.contains("Valid until October 24, 2026"));
}

#[test]
fn submit_acknowledges_customer() {
    let script = format!("{FULL_QUOTE}s\nq\n");

    let (session, _, output) = run_wizard(&script, SinkConfig::default(), &AppConfig::default());

    assert_eq!(session.step(), Step::Summary);
    assert!(output.contains("Quote Request Submitted"));
    assert!(output.contains("Thank you, Ayesha Khan!"));
}

#[test]
fn new_quote_starts_over() {
    let script = format!("{FULL_QUOTE}n\n");

    let (session, _, _) = run_wizard(&script, SinkConfig::default(), &AppConfig::default());

    assert_eq!(session, QuoteSession::new());
}

#[test]
fn back_from_summary_then_change_size_reprices() {
    // Back through contact details (kept as is) to the size step.
    let script = format!("{FULL_QUOTE}b\nb\nb\nb\nb\nb\n6\n");

    let (session, _, _) = run_wizard(&script, SinkConfig::default(), &AppConfig::default());

    assert_eq!(session.step(), Step::PanelBrand);
    assert_eq!(session.breakdown().unwrap().subtotal, dec!(736650));
}

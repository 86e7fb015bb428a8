//! Line-based interactive wizard over any `BufRead`/`Write` pair.
//!
//! Each step lists its options with a live price where one applies. The
//! user answers with an option number or its name; an empty answer keeps
//! the current choice.
//!
//! | input | effect                               |
//! |-------|--------------------------------------|
//! | `b`   | back to the previous step            |
//! | `q`   | quit                                 |
//! | `p`   | print the quote (summary step)       |
//! | `s`   | submit the request (summary step)    |
//! | `n`   | start a new quote (summary step)     |

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Result;
use chrono::NaiveDate;
use quote_core::calculations::QuoteCalculator;
use quote_core::calculations::common::format_currency;
use quote_core::output::{SinkConfig, SinkRegistry, SubmissionHook};
use quote_core::summary::{QuoteSummary, SummaryTemplate};
use quote_core::{
    ContactField, InstallationType, InverterBrand, MeterType, ParseSelectionError, QuoteSession,
    Step, SystemSize,
};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

/// What the user typed at an option prompt.
enum Answer<T> {
    Pick(T),
    Keep,
    Back,
    Quit,
    EndOfInput,
}

/// How the wizard ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardExit {
    /// The user typed `q`.
    Quit,
    /// Input ran out.
    EndOfInput,
}

pub struct Wizard<'a, R, W> {
    input: R,
    output: W,
    registry: &'a SinkRegistry,
    sink_config: SinkConfig,
    template: SummaryTemplate,
    hook: &'a dyn SubmissionHook,
    date: NaiveDate,
    calculator: QuoteCalculator,
}

impl<'a, R: BufRead, W: Write> Wizard<'a, R, W> {
    pub fn new(
        input: R,
        output: W,
        registry: &'a SinkRegistry,
        sink_config: SinkConfig,
        template: SummaryTemplate,
        hook: &'a dyn SubmissionHook,
        date: NaiveDate,
    ) -> Self {
        Self {
            input,
            output,
            registry,
            sink_config,
            template,
            hook,
            date,
            calculator: QuoteCalculator::new(),
        }
    }

    /// Runs until the user quits or input ends. Returns the final session
    /// alongside the reason it stopped.
    pub fn run(&mut self) -> Result<(QuoteSession, WizardExit)> {
        let mut session = QuoteSession::new();

        loop {
            let step = session.step();
            writeln!(
                self.output,
                "\n== {step} ({}%): {} ==",
                step.progress_percent(),
                step.title()
            )?;

            let outcome = match step {
                Step::SystemSize => self.size_step(session)?,
                Step::PanelBrand => self.panel_step(session)?,
                Step::Inverter => self.inverter_step(session)?,
                Step::Installation => self.installation_step(session)?,
                Step::Meter => self.meter_step(session)?,
                Step::ContactDetails => self.contact_step(session)?,
                Step::Summary => self.summary_step(session)?,
            };

            match outcome {
                Flow::Continue(next) => session = next,
                Flow::Stop(last, exit) => {
                    debug!(?exit, step = last.step().number(), "wizard finished");
                    return Ok((last, exit));
                }
            }
        }
    }

    // ─── steps ───────────────────────────────────────────────────────────

    fn size_step(
        &mut self,
        session: QuoteSession,
    ) -> Result<Flow> {
        let options: Vec<(SystemSize, String)> = SystemSize::ALL
            .into_iter()
            .map(|size| (size, size.label().to_string()))
            .collect();

        let answer = self.choose("System size", &options, session.size())?;
        self.apply(session, answer, QuoteSession::select_size)
    }

    fn panel_step(
        &mut self,
        session: QuoteSession,
    ) -> Result<Flow> {
        let panel_count = session.size().map(|size| size.panel_count()).unwrap_or_default();
        let options: Vec<_> = self
            .calculator
            .panel_options(panel_count)
            .into_iter()
            .map(|(brand, price)| (brand, self.priced(brand.name(), price)))
            .collect();

        let answer = self.choose("Panel brand", &options, session.panel_brand())?;
        self.apply(session, answer, QuoteSession::select_panel_brand)
    }

    fn inverter_step(
        &mut self,
        session: QuoteSession,
    ) -> Result<Flow> {
        let brands: Vec<(InverterBrand, String)> = InverterBrand::ALL
            .into_iter()
            .map(|brand| (brand, brand.name().to_string()))
            .collect();

        let session = match self.choose("Inverter brand", &brands, session.inverter_brand())? {
            Answer::Pick(brand) => session.select_inverter_brand(brand),
            Answer::Keep => session,
            Answer::Back => return Ok(Flow::Continue(session.prev())),
            Answer::Quit => return Ok(Flow::Stop(session, WizardExit::Quit)),
            Answer::EndOfInput => return Ok(Flow::Stop(session, WizardExit::EndOfInput)),
        };

        let Some(brand) = session.inverter_brand() else {
            writeln!(self.output, "Please choose an inverter brand.")?;
            return Ok(Flow::Continue(session));
        };

        let capacities: Vec<_> = self
            .calculator
            .capacity_options(brand)
            .into_iter()
            .map(|(capacity, price)| (capacity, self.priced(&capacity.to_string(), price)))
            .collect();

        // Back from the capacity prompt returns to the brand prompt.
        match self.choose("Inverter capacity", &capacities, session.inverter_capacity())? {
            Answer::Back => Ok(Flow::Continue(session)),
            answer => self.apply(session, answer, QuoteSession::select_inverter_capacity),
        }
    }

    fn installation_step(
        &mut self,
        session: QuoteSession,
    ) -> Result<Flow> {
        let panel_count = session.size().map(|size| size.panel_count()).unwrap_or_default();
        let options: Vec<(InstallationType, String)> = self
            .calculator
            .installation_options(panel_count)
            .into_iter()
            .map(|(kind, price)| (kind, self.priced(kind.label(), price)))
            .collect();

        let answer = self.choose("Installation type", &options, session.installation())?;
        self.apply(session, answer, QuoteSession::select_installation)
    }

    fn meter_step(
        &mut self,
        session: QuoteSession,
    ) -> Result<Flow> {
        let options: Vec<(MeterType, String)> = MeterType::ALL
            .into_iter()
            .map(|meter| (meter, self.priced(meter.label(), self.calculator.meter_cost(meter))))
            .collect();

        let answer = self.choose("Meter type", &options, session.meter())?;
        self.apply(session, answer, QuoteSession::select_meter)
    }

    fn contact_step(
        &mut self,
        mut session: QuoteSession,
    ) -> Result<Flow> {
        for field in ContactField::ALL {
            let current = session.contact().field(field).to_string();
            let hint = if field.is_required() { "" } else { " (optional)" };
            let prompt = if current.is_empty() {
                format!("{}{hint}: ", field.label())
            } else {
                format!("{}{hint} [{current}]: ", field.label())
            };

            let Some(line) = self.read_line(&prompt)? else {
                return Ok(Flow::Stop(session, WizardExit::EndOfInput));
            };
            match line.as_str() {
                "b" => return Ok(Flow::Continue(session.prev())),
                "q" => return Ok(Flow::Stop(session, WizardExit::Quit)),
                "" => {}
                value => session = session.update_contact(field, value),
            }
        }

        let missing = session.contact().missing_fields();
        if !missing.is_empty() {
            let names: Vec<_> = missing.iter().map(|field| field.label()).collect();
            warn!(missing = ?names, "contact details incomplete");
            writeln!(self.output, "Please fill in: {}", names.join(", "))?;
        }
        Ok(Flow::Continue(session.next()))
    }

    fn summary_step(
        &mut self,
        session: QuoteSession,
    ) -> Result<Flow> {
        let quote = match session.quote() {
            Ok(quote) => quote,
            Err(err) => {
                writeln!(self.output, "{err}")?;
                return Ok(Flow::Continue(session.prev()));
            }
        };

        let text = QuoteSummary::new(&quote, &self.template, self.date).render();
        writeln!(self.output, "\n{text}")?;

        loop {
            let Some(line) = self.read_line("[p]rint, [s]ubmit, [n]ew quote, [b]ack, [q]uit: ")?
            else {
                return Ok(Flow::Stop(session, WizardExit::EndOfInput));
            };

            match line.to_lowercase().as_str() {
                "p" => match self.print(&text) {
                    Ok(target) => writeln!(self.output, "Quote sent to {target}.")?,
                    Err(err) => {
                        warn!(error = %err, "printing quote failed");
                        writeln!(self.output, "Could not print quote: {err}")?;
                    }
                },
                "s" => match self.hook.submit(&quote) {
                    Ok(ack) => writeln!(self.output, "{}\n{}", ack.title, ack.message)?,
                    Err(err) => {
                        warn!(error = %err, "quote submission failed");
                        writeln!(self.output, "Could not submit quote: {err}")?;
                    }
                },
                "n" => {
                    info!("starting a new quote");
                    return Ok(Flow::Continue(session.reset()));
                }
                "b" => return Ok(Flow::Continue(session.prev())),
                "q" => return Ok(Flow::Stop(session, WizardExit::Quit)),
                other => writeln!(self.output, "Unknown command '{other}'.")?,
            }
        }
    }

    // ─── helpers ─────────────────────────────────────────────────────────

    fn print(
        &self,
        text: &str,
    ) -> Result<String> {
        let mut sink = self.registry.create(&self.sink_config)?;
        sink.deliver(text)?;
        Ok(sink.describe())
    }

    fn priced(
        &self,
        label: &str,
        price: Decimal,
    ) -> String {
        format!("{label:<28}{}", format_currency(&self.template.currency, price))
    }

    /// Applies a picked option and tries to move on.
    fn apply<T>(
        &mut self,
        session: QuoteSession,
        answer: Answer<T>,
        select: fn(QuoteSession, T) -> QuoteSession,
    ) -> Result<Flow> {
        let session = match answer {
            Answer::Pick(value) => select(session, value),
            Answer::Keep => session,
            Answer::Back => return Ok(Flow::Continue(session.prev())),
            Answer::Quit => return Ok(Flow::Stop(session, WizardExit::Quit)),
            Answer::EndOfInput => return Ok(Flow::Stop(session, WizardExit::EndOfInput)),
        };

        if !session.can_advance() {
            warn!(step = session.step().number(), "step incomplete; cannot continue");
            writeln!(self.output, "Please make a selection before continuing.")?;
            return Ok(Flow::Continue(session));
        }
        Ok(Flow::Continue(session.next()))
    }

    /// Lists `options` and reads one answer, re-prompting on bad input.
    fn choose<T>(
        &mut self,
        heading: &str,
        options: &[(T, String)],
        current: Option<T>,
    ) -> Result<Answer<T>>
    where
        T: Copy + PartialEq + FromStr<Err = ParseSelectionError>,
    {
        writeln!(self.output, "{heading}:")?;
        for (index, (value, text)) in options.iter().enumerate() {
            let marker = if current == Some(*value) { '*' } else { ' ' };
            writeln!(self.output, " {marker}{}) {text}", index + 1)?;
        }

        loop {
            let Some(line) = self.read_line(&format!("Choose 1-{}, b=back, q=quit: ", options.len()))?
            else {
                return Ok(Answer::EndOfInput);
            };

            match line.to_lowercase().as_str() {
                "" => return Ok(Answer::Keep),
                "b" => return Ok(Answer::Back),
                "q" => return Ok(Answer::Quit),
                _ => {}
            }

            if let Some(value) = line
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|index| options.get(index))
                .map(|(value, _)| *value)
            {
                return Ok(Answer::Pick(value));
            }

            match line.parse::<T>() {
                Ok(value) => return Ok(Answer::Pick(value)),
                Err(err) => {
                    warn!(error = %err, "rejected option");
                    writeln!(self.output, "{err}")?;
                }
            }
        }
    }

    /// Prints `prompt` and reads one trimmed line; `None` at end of input.
    fn read_line(
        &mut self,
        prompt: &str,
    ) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

enum Flow {
    Continue(QuoteSession),
    Stop(QuoteSession, WizardExit),
}

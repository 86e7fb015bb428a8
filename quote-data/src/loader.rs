use std::io::{Read, Write};

use quote_core::{
    ContactField, IncompleteQuote, InstallationType, InverterBrand, InverterCapacity, MeterType,
    PanelBrand, ParseSelectionError, Quote, QuoteSession, SystemSize,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur when loading quote requests or writing results.
///
/// Row numbers count data rows from 1; the header line is not counted.
#[derive(Debug, Error)]
pub enum QuoteLoaderError {
    #[error("CSV error: {0}")]
    Csv(String),

    #[error("Row {row}: {source}")]
    InvalidOption {
        row: usize,
        #[source]
        source: ParseSelectionError,
    },

    #[error("Row {row}: {source}")]
    Incomplete {
        row: usize,
        #[source]
        source: IncompleteQuote,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for QuoteLoaderError {
    fn from(err: csv::Error) -> Self {
        QuoteLoaderError::Csv(err.to_string())
    }
}

/// A single quote request from the input CSV.
///
/// Option columns are free text and parsed leniently:
/// - `size`: `10`, `10kw` or `10 KW`
/// - `panel_brand`: `canadian`, `longi`, `ja` or the full brand name
/// - `inverter_brand`: `huawei`, `growatt`, `solis` or the full brand name
/// - `inverter_capacity`: `10` to `25` kW in steps of 5
/// - `installation_type`: `normal` or `elevated`
/// - `meter_type`: `single` or `three`
///
/// `email` may be left empty.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct QuoteRequestRecord {
    pub size: String,
    pub panel_brand: String,
    pub inverter_brand: String,
    pub inverter_capacity: String,
    pub installation_type: String,
    pub meter_type: String,
    pub name: String,
    pub phone: String,
    pub city: String,
    pub address: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl QuoteRequestRecord {
    /// Walks a fresh [`QuoteSession`] through every step with this row's
    /// choices and returns the finished quote.
    fn to_quote(
        &self,
        row: usize,
    ) -> Result<Quote, QuoteLoaderError> {
        let invalid = |source| QuoteLoaderError::InvalidOption { row, source };

        let size: SystemSize = self.size.parse().map_err(invalid)?;
        let panel: PanelBrand = self.panel_brand.parse().map_err(invalid)?;
        let brand: InverterBrand = self.inverter_brand.parse().map_err(invalid)?;
        let capacity: InverterCapacity = self.inverter_capacity.parse().map_err(invalid)?;
        let installation: InstallationType = self.installation_type.parse().map_err(invalid)?;
        let meter: MeterType = self.meter_type.parse().map_err(invalid)?;

        let session = QuoteSession::new()
            .select_size(size)
            .next()
            .select_panel_brand(panel)
            .next()
            .select_inverter_brand(brand)
            .select_inverter_capacity(capacity)
            .next()
            .select_installation(installation)
            .next()
            .select_meter(meter)
            .next()
            .update_contact(ContactField::Name, self.name.as_str())
            .update_contact(ContactField::Phone, self.phone.as_str())
            .update_contact(ContactField::City, self.city.as_str())
            .update_contact(ContactField::Address, self.address.as_str())
            .update_contact(ContactField::Email, self.email.clone().unwrap_or_default())
            .next();

        session
            .quote()
            .map_err(|source| QuoteLoaderError::Incomplete { row, source })
    }
}

/// One priced row of the results CSV.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct QuoteResultRecord {
    pub name: String,
    pub size: String,
    pub panel_brand: String,
    pub inverter: String,
    pub installation_type: String,
    pub meter_type: String,
    pub panel: Decimal,
    pub inverter_cost: Decimal,
    pub installation: Decimal,
    pub meter: Decimal,
    pub earthing: Decimal,
    pub extra_installation: Decimal,
    pub subtotal: Decimal,
    pub total: Decimal,
}

fn amount(value: Decimal) -> Decimal {
    value.round_dp(2).normalize()
}

impl From<&Quote> for QuoteResultRecord {
    fn from(quote: &Quote) -> Self {
        let selection = quote.selection();
        let breakdown = quote.breakdown();

        Self {
            name: quote.contact().name.clone(),
            size: format!("{}KW", selection.size.kilowatts()),
            panel_brand: selection.panel_brand.name().to_string(),
            inverter: selection.inverter.to_string(),
            installation_type: selection.installation.label().to_string(),
            meter_type: selection.meter.label().to_string(),
            panel: amount(breakdown.panel),
            inverter_cost: amount(breakdown.inverter),
            installation: amount(breakdown.installation),
            meter: amount(breakdown.meter),
            earthing: amount(breakdown.earthing),
            extra_installation: amount(breakdown.extra_installation),
            subtotal: amount(breakdown.subtotal),
            total: amount(breakdown.total),
        }
    }
}

/// Batch pricing of quote requests read from CSV.
pub struct QuoteLoader;

impl QuoteLoader {
    /// Parse quote request records from a CSV reader.
    ///
    /// Surrounding whitespace in every cell is trimmed.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<QuoteRequestRecord>, QuoteLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: QuoteRequestRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Price every record, stopping at the first row that cannot be quoted.
    pub fn build(records: &[QuoteRequestRecord]) -> Result<Vec<Quote>, QuoteLoaderError> {
        records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let row = index + 1;
                let quote = record.to_quote(row).inspect_err(|err| {
                    warn!(row, error = %err, "rejected quote request");
                })?;
                debug!(row, name = %quote.contact().name, total = %quote.total(), "priced row");
                Ok(quote)
            })
            .collect()
    }

    /// Write one results row per quote, header first. Returns the row count.
    pub fn write_results<W: Write>(
        writer: W,
        quotes: &[Quote],
    ) -> Result<usize, QuoteLoaderError> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        for quote in quotes {
            csv_writer.serialize(QuoteResultRecord::from(quote))?;
        }
        csv_writer.flush()?;

        Ok(quotes.len())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const HEADER: &str = "size,panel_brand,inverter_brand,inverter_capacity,installation_type,meter_type,name,phone,city,address,email\n";

    fn csv(rows: &str) -> String {
        format!("{HEADER}{rows}")
    }

    #[test]
    fn parse_reads_records_and_empty_email() {
        let data = csv("10kw, ja ,growatt,15,normal,single,Ayesha Khan,0300-1234567,Lahore,12 Canal View,\n");

        let records = QuoteLoader::parse(data.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].size, "10kw");
        assert_eq!(records[0].panel_brand, "ja");
        assert_eq!(records[0].email, None);
    }

    #[test]
    fn parse_reports_short_rows() {
        let data = csv("10,ja,growatt\n");

        let result = QuoteLoader::parse(data.as_bytes());

        assert!(matches!(result, Err(QuoteLoaderError::Csv(_))));
    }

    #[test]
    fn build_prices_reference_quote() {
        let data = csv("10,ja,growatt,15,normal,single,Ayesha Khan,0300-1234567,Lahore,12 Canal View,\n");
        let records = QuoteLoader::parse(data.as_bytes()).unwrap();

        let quotes = QuoteLoader::build(&records).unwrap();

        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].total(), dec!(961224));
    }

    #[test]
    fn build_reports_unknown_option_with_row() {
        let data = csv(concat!(
            "10,ja,growatt,15,normal,single,Ayesha Khan,0300-1234567,Lahore,12 Canal View,\n",
            "12,ja,growatt,15,normal,single,Bilal Ahmed,0321-7654321,Karachi,45 Clifton,\n",
        ));
        let records = QuoteLoader::parse(data.as_bytes()).unwrap();

        let err = QuoteLoader::build(&records).unwrap_err();

        match &err {
            QuoteLoaderError::InvalidOption { row, source } => {
                assert_eq!(*row, 2);
                assert_eq!(source.input(), "12");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().starts_with("Row 2: unknown system size '12'"));
    }

    #[test]
    fn build_reports_missing_contact_with_row() {
        let data = csv("6,canadian,huawei,10,normal,three,Bilal Ahmed,,Karachi,45 Clifton,\n");
        let records = QuoteLoader::parse(data.as_bytes()).unwrap();

        let err = QuoteLoader::build(&records).unwrap_err();

        match err {
            QuoteLoaderError::Incomplete { row, source } => {
                assert_eq!(row, 1);
                assert_eq!(source.missing(), ["contact phone"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn result_record_normalizes_amounts() {
        let data = csv("25,longi,solis,25,elevated,three,Sara Malik,0333-1111111,Islamabad,7 F-8,sara@example.com\n");
        let records = QuoteLoader::parse(data.as_bytes()).unwrap();
        let quotes = QuoteLoader::build(&records).unwrap();

        let record = QuoteResultRecord::from(&quotes[0]);

        assert_eq!(record.size, "25KW");
        assert_eq!(record.installation_type, "Elevated");
        assert_eq!(record.total.to_string(), record.total.normalize().to_string());
        assert_eq!(record.total, amount(quotes[0].total()));
    }

    #[test]
    fn write_results_emits_header_and_rows() {
        let data = csv("10,ja,growatt,15,normal,single,Ayesha Khan,0300-1234567,Lahore,12 Canal View,\n");
        let quotes = QuoteLoader::build(&QuoteLoader::parse(data.as_bytes()).unwrap()).unwrap();
        let mut out = Vec::new();

        let written = QuoteLoader::write_results(&mut out, &quotes).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(written, 1);
        assert_eq!(
            lines[0],
            "name,size,panel_brand,inverter,installation_type,meter_type,panel,inverter_cost,installation,meter,earthing,extra_installation,subtotal,total"
        );
        assert!(lines[1].starts_with("Ayesha Khan,10KW,JA / Astro / Kingdom 585W,Growatt / Fox 15KW,Normal,Single Phase,"));
        assert!(lines[1].ends_with(",873840,961224"));
    }
}

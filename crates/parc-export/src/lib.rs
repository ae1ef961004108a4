//! Delimited-text export of derived views.
//!
//! Takes the filtered (not paginated) output of the view engine plus a fixed
//! column order and writes one row per record. Non-numeric fields are
//! quoted, matching the download produced by the legacy table.

pub mod error;
pub mod records;

use std::io::Write;

use chrono::NaiveDate;
use csv::{QuoteStyle, WriterBuilder};

pub use error::{ExportError, Result};

/// One exported cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CsvField {
    Text(String),
    Integer(i64),
    Amount(f64),
    Date(NaiveDate),
    /// Unset optional field; rendered empty.
    Empty,
}

impl CsvField {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Optional text, empty when unset.
    pub fn opt(value: Option<&str>) -> Self {
        match value {
            Some(text) => Self::Text(text.to_string()),
            None => Self::Empty,
        }
    }

    fn render(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Integer(value) => value.to_string(),
            Self::Amount(value) => value.to_string(),
            Self::Date(value) => value.format("%Y-%m-%d").to_string(),
            Self::Empty => String::new(),
        }
    }
}

/// Column-order descriptor for one record type.
pub trait CsvRecord {
    /// Header row, fixed order.
    fn headers() -> &'static [&'static str];

    /// Cell values in header order.
    fn fields(&self) -> Vec<CsvField>;
}

/// Serialize a view to any writer.
pub fn write_csv<R: CsvRecord, W: Write>(rows: &[&R], writer: W) -> Result<()> {
    let mut out = WriterBuilder::new()
        .quote_style(QuoteStyle::NonNumeric)
        .from_writer(writer);
    out.write_record(R::headers())?;
    for row in rows {
        let rendered: Vec<String> = row.fields().iter().map(CsvField::render).collect();
        out.write_record(&rendered)?;
    }
    out.flush()?;
    Ok(())
}

/// Serialize a view to an in-memory string.
pub fn csv_string<R: CsvRecord>(rows: &[&R]) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(rows, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_render_their_natural_forms() {
        assert_eq!(CsvField::text("Dell").render(), "Dell");
        assert_eq!(CsvField::Integer(15).render(), "15");
        assert_eq!(CsvField::Amount(45_000.0).render(), "45000");
        assert_eq!(
            CsvField::Date(NaiveDate::from_ymd_opt(2024, 7, 15).unwrap()).render(),
            "2024-07-15"
        );
        assert_eq!(CsvField::Empty.render(), "");
        assert_eq!(CsvField::opt(None).render(), "");
    }
}

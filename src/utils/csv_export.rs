//! CSV export helpers

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::{AppError, AppResult};

/// Render a header and rows as CSV with every field quoted
pub fn to_csv<I>(headers: &[&str], rows: I) -> AppResult<String>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(&row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;

    String::from_utf8(bytes).map_err(|e| AppError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_is_quoted() {
        let csv = to_csv(
            &["Client", "GWP (INR)"],
            vec![vec!["Acme".to_string(), "1000".to_string()]],
        )
        .unwrap();

        assert_eq!(csv, "\"Client\",\"GWP (INR)\"\n\"Acme\",\"1000\"\n");
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let csv = to_csv(&["Name"], vec![vec!["The \"Best\" Co, Ltd".to_string()]]).unwrap();
        assert_eq!(csv, "\"Name\"\n\"The \"\"Best\"\" Co, Ltd\"\n");
    }

    #[test]
    fn test_header_only() {
        let csv = to_csv(&["A", "B"], Vec::new()).unwrap();
        assert_eq!(csv, "\"A\",\"B\"\n");
    }
}

//! Delimited text decoding into ordered name/value rows

use super::column_mapping::canonical_headers;
use crate::error::{MyDataError, Result};
use crate::models::{FieldValue, RawRecord};
use tracing::{debug, warn};

/// Decode delimited text with a header row into renamed, typed rows.
///
/// Short rows are padded with nulls and surplus cells are dropped, so a
/// ragged line never aborts the decode.
pub fn decode_rows(text: &str, delimiter: char, infer_types: bool) -> Result<Vec<RawRecord>> {
    if !delimiter.is_ascii() {
        return Err(MyDataError::configuration(format!(
            "delimiter '{}' is not an ASCII character",
            delimiter
        )));
    }
    let delimiter = delimiter as u8;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::None)
        .from_reader(text.as_bytes());

    let headers = canonical_headers(reader.headers()?);
    debug!("Decoded {} column headers", headers.len());

    let mut rows = Vec::new();
    let mut ragged = 0usize;

    for result in reader.records() {
        let record = result?;
        if record.len() != headers.len() {
            ragged += 1;
        }
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        let mut row = RawRecord::new();
        for (index, name) in headers.iter().enumerate() {
            let value = match record.get(index) {
                Some(cell) if infer_types => FieldValue::infer(cell),
                Some(cell) => FieldValue::text(cell),
                None => FieldValue::Null,
            };
            row.insert(name.clone(), value);
        }
        rows.push(row);
    }

    if ragged > 0 {
        warn!(
            "{} rows had a field count different from the {} header columns",
            ragged,
            headers.len()
        );
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Submission ID,Common Name,Taxonomic Order,Count,Date,Age/Sex\n\
                          S1,Mallard,300,4,2020-03-01,\n\
                          S2,Mallard,300,X,2021-04-01,Male\n";

    #[test]
    fn test_decode_renames_and_infers() {
        let rows = decode_rows(SAMPLE, ',', true).unwrap();
        assert_eq!(rows.len(), 2);

        let first = &rows[0];
        assert_eq!(
            first.get("submissionId"),
            Some(&FieldValue::Text("S1".to_string()))
        );
        assert_eq!(first.get("taxonomicOrder"), Some(&FieldValue::Int(300)));
        assert_eq!(first.get("count"), Some(&FieldValue::Int(4)));
        assert_eq!(
            first.get("date"),
            Some(&FieldValue::Text("2020-03-01".to_string()))
        );
        assert_eq!(first.get("Age/Sex"), Some(&FieldValue::Null));

        assert_eq!(
            rows[1].get("count"),
            Some(&FieldValue::Text("X".to_string()))
        );
    }

    #[test]
    fn test_decode_preserves_column_order() {
        let rows = decode_rows(SAMPLE, ',', true).unwrap();
        let names: Vec<&str> = rows[0].fields.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(
            names,
            vec!["submissionId", "commonName", "taxonomicOrder", "count", "date", "Age/Sex"]
        );
    }

    #[test]
    fn test_decode_infers_bool_float_and_null() {
        let text = "Common Name,Approved,Reviewed,Latitude,Breeding Code\n\
                    Mallard,true,FALSE,40.66,\n";
        let rows = decode_rows(text, ',', true).unwrap();
        let row = &rows[0];

        assert_eq!(row.get("Approved"), Some(&FieldValue::Bool(true)));
        assert_eq!(row.get("Reviewed"), Some(&FieldValue::Bool(false)));
        assert_eq!(row.get("latitude"), Some(&FieldValue::Float(40.66)));
        assert_eq!(row.get("breedingCode"), Some(&FieldValue::Null));

        let as_text = decode_rows(text, ',', false).unwrap();
        assert_eq!(
            as_text[0].get("Approved"),
            Some(&FieldValue::Text("true".to_string()))
        );
        assert_eq!(
            as_text[0].get("latitude"),
            Some(&FieldValue::Text("40.66".to_string()))
        );
    }

    #[test]
    fn test_decode_without_inference_keeps_text() {
        let rows = decode_rows(SAMPLE, ',', false).unwrap();
        assert_eq!(
            rows[0].get("taxonomicOrder"),
            Some(&FieldValue::Text("300".to_string()))
        );
        assert_eq!(rows[0].get("Age/Sex"), Some(&FieldValue::Null));
    }

    #[test]
    fn test_decode_pads_short_rows() {
        let text = "Common Name,Taxonomic Order,Date\nMallard,300\n";
        let rows = decode_rows(text, ',', true).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("date"), Some(&FieldValue::Null));
    }

    #[test]
    fn test_decode_skips_blank_lines_and_quotes() {
        let text = "Common Name,Location\n\"Duck, Mallard\",\"Pond, North\"\n,\n";
        let rows = decode_rows(text, ',', true).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0].get("location"),
            Some(&FieldValue::Text("Pond, North".to_string()))
        );
    }

    #[test]
    fn test_decode_rejects_non_ascii_delimiter() {
        let result = decode_rows(SAMPLE, '€', true);
        assert!(matches!(result, Err(MyDataError::Configuration { .. })));
    }

    #[test]
    fn test_decode_tab_delimited() {
        let text = "Common Name\tTaxonomic Order\nMallard\t300\n";
        let rows = decode_rows(text, '\t', true).unwrap();
        assert_eq!(rows[0].get("taxonomicOrder"), Some(&FieldValue::Int(300)));
    }
}

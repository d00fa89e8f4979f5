//! CSV normalizer: turns the back-office export into [`RawRow`]s.
//!
//! The export opens with a fixed banner of [`BANNER_LINES`] lines that carry
//! report metadata rather than data. The line after the banner holds the
//! column names; every following line is one data row.

use crate::domain::model::RawRow;
use crate::utils::error::Result;
use std::path::Path;

pub const BANNER_LINES: usize = 4;

/// `"Cust PO-Number"` becomes `"Cust_PO_Number"`.
pub fn normalize_column_name(name: &str) -> String {
    name.chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}

fn skip_banner(data: &[u8]) -> &[u8] {
    let mut rest = data;
    for _ in 0..BANNER_LINES {
        match rest.iter().position(|&b| b == b'\n') {
            Some(pos) => rest = &rest[pos + 1..],
            None => return &[],
        }
    }
    rest
}

pub fn normalize(data: &[u8]) -> Result<Vec<RawRow>> {
    let body = skip_banner(data);
    if body.is_empty() {
        tracing::debug!("Export has no content after the {}-line banner", BANNER_LINES);
        return Ok(Vec::new());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(body);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(normalize_column_name)
        .collect();
    tracing::debug!("CSV columns: {:?}", headers);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(
            headers
                .iter()
                .zip(record.iter())
                .map(|(column, value)| (column.clone(), value.to_string()))
                .collect::<RawRow>(),
        );
    }

    tracing::debug!("Parsed {} data rows", rows.len());
    Ok(rows)
}

/// Reads and normalizes an export straight from disk.
pub fn load_export(path: impl AsRef<Path>) -> Result<Vec<RawRow>> {
    let data = std::fs::read(path.as_ref())?;
    normalize(&data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::BridgeError;

    const BANNER: &str = "Shipment Report\nGenerated 2024-01-01\nWarehouse: Main\n\n";

    #[test]
    fn test_normalize_column_name() {
        assert_eq!(normalize_column_name("Cust PO-Number"), "Cust_PO_Number");
        assert_eq!(normalize_column_name("Shipped VIA"), "Shipped_VIA");
        assert_eq!(normalize_column_name("Tracking_Number"), "Tracking_Number");
    }

    #[test]
    fn test_skips_banner_and_reads_rows_in_order() {
        let input = format!(
            "{}Cust PO-Number,Shipped VIA,Customer Number,Tracking Number\n\
             111/1,UPS - G,RTSCS,1Z1\n\
             222/1,FedEx - 2ND,HERO,1Z2\n",
            BANNER
        );

        let rows = normalize(input.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("Cust_PO_Number"), Some("111/1"));
        assert_eq!(rows[0].get("Shipped_VIA"), Some("UPS - G"));
        assert_eq!(rows[1].get("Customer_Number"), Some("HERO"));
        assert_eq!(rows[1].get("Tracking_Number"), Some("1Z2"));
    }

    #[test]
    fn test_banner_lines_may_contain_commas_and_quotes() {
        let input = "a,b,c\n\"unterminated,\nx\ny\nCol A\nv1\n";
        // The banner is skipped by line, so its odd quoting never reaches the parser.
        let rows = normalize(input.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("Col_A"), Some("v1"));
    }

    #[test]
    fn test_short_input_yields_no_rows() {
        assert!(normalize(b"only\ntwo lines\n").unwrap().is_empty());
        assert!(normalize(b"").unwrap().is_empty());
    }

    #[test]
    fn test_short_rows_leave_columns_absent() {
        let input = format!("{}A,B,C\n1,2\n", BANNER);
        let rows = normalize(input.as_bytes()).unwrap();
        assert_eq!(rows[0].get("A"), Some("1"));
        assert_eq!(rows[0].get("C"), None);
    }

    #[test]
    fn test_crlf_line_endings() {
        let input = "1\r\n2\r\n3\r\n4\r\nCust PO-Number,Tracking Number\r\n55/1,TRK\r\n";
        let rows = normalize(input.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("Tracking_Number"), Some("TRK"));
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        let mut input = BANNER.as_bytes().to_vec();
        input.extend_from_slice(b"A,B\n\xff\xfe,1\n");
        assert!(matches!(normalize(&input), Err(BridgeError::ParseError(_))));
    }
}

use shipment_bridge::core::{normalizer, transformer};
use shipment_bridge::BridgeError;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_export_from_disk() -> anyhow::Result<()> {
    let mut file = NamedTempFile::new()?;
    write!(
        file,
        "Open Orders Report\nPrinted by: warehouse\nPage 1\n\n\
         Cust PO-Number,Shipped VIA,Customer Number,Tracking Number\n\
         12345/1,UPS - G,RTSCS,1Z100\n\
         12345/2,UPS - G,RTSCS,1Z101\n\
         ,UPS - G,RTSCS,1Z102\n\
         67890/1,FedEx - NEXT,ACME,7700\n"
    )?;

    let rows = normalizer::load_export(file.path())?;
    assert_eq!(rows.len(), 4);

    let result = transformer::transform(&rows);
    let ids: Vec<&str> = result
        .records
        .iter()
        .map(|r| r.source_id.as_str())
        .collect();

    assert_eq!(ids, vec!["68125-12345", "ACME-67890"]);
    assert_eq!(result.records[1].carrier_code, "FedEx");
    assert_eq!(result.records[1].shipment_method, "NEXT");
    assert_eq!(result.summary.duplicates, 1);
    assert_eq!(result.summary.missing_po, 1);
    Ok(())
}

#[test]
fn test_load_export_missing_file() {
    let err = normalizer::load_export("/definitely/not/here.csv").unwrap_err();
    assert!(matches!(err, BridgeError::IoError(_)));
}

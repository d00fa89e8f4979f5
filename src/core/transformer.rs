use crate::domain::model::{RawRow, ShipmentRecord, TransformResult, TransformSummary};
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

pub const PO_COLUMN: &str = "Cust_PO_Number";
pub const SHIPPED_VIA_COLUMN: &str = "Shipped_VIA";
pub const CUSTOMER_COLUMN: &str = "Customer_Number";
pub const TRACKING_COLUMN: &str = "Tracking_Number";

pub const DEFAULT_SHIPMENT_METHOD: &str = "Residential";

static SHIPMENT_METHODS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([("G", "Ground"), ("3RD", "3 Day Select"), ("2ND", "2nd Day Air")])
});

static STORE_IDS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([("RTSCS", "68125"), ("RTFMS", "118741"), ("HERO", "14077")])
});

/// Order number from a PO field such as `"12345/1"`: the part before the
/// first `/`, reduced to its digits. `None` when no digits remain.
pub fn extract_order_number(po: &str) -> Option<String> {
    let head = po.split('/').next().unwrap_or_default();
    let digits: String = head.chars().filter(|c| c.is_ascii_digit()).collect();
    let digits = digits.trim();
    (!digits.is_empty()).then(|| digits.to_string())
}

/// Splits `"UPS - G"` into `("UPS", "G")`.
pub fn parse_shipped_via(value: &str) -> (String, String) {
    let mut parts = value.split('-');
    let carrier = parts.next().unwrap_or_default().trim().to_string();
    let method = parts.next().unwrap_or_default().trim().to_string();
    (carrier, method)
}

pub fn map_shipment_method(code: &str) -> String {
    if code.is_empty() {
        return DEFAULT_SHIPMENT_METHOD.to_string();
    }
    SHIPMENT_METHODS
        .get(code)
        .map(|m| m.to_string())
        .unwrap_or_else(|| code.to_string())
}

pub fn map_store_id(customer_number: &str) -> String {
    match STORE_IDS.get(customer_number) {
        Some(store_id) => store_id.to_string(),
        None => {
            tracing::warn!(
                "No store id mapped for customer number '{}', using it as-is",
                customer_number
            );
            customer_number.to_string()
        }
    }
}

/// Maps normalized rows to shipment records, keeping the first row seen for
/// each order number.
pub fn transform(rows: &[RawRow]) -> TransformResult {
    let mut summary = TransformSummary {
        rows_read: rows.len(),
        ..Default::default()
    };
    let mut seen_orders = HashSet::new();
    let mut records = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        let po = row.get(PO_COLUMN).unwrap_or_default();
        if po.is_empty() {
            summary.missing_po += 1;
            continue;
        }

        let Some(order_number) = extract_order_number(po) else {
            tracing::debug!("Row {}: no order number in PO '{}'", index + 1, po);
            summary.unparseable_order += 1;
            continue;
        };

        if !seen_orders.insert(order_number.clone()) {
            tracing::debug!("Row {}: duplicate order {}", index + 1, order_number);
            summary.duplicates += 1;
            continue;
        }

        let (carrier_code, method_code) =
            parse_shipped_via(row.get(SHIPPED_VIA_COLUMN).unwrap_or_default());
        let store_id = map_store_id(row.get(CUSTOMER_COLUMN).unwrap_or_default());

        records.push(ShipmentRecord {
            source_id: format!("{}-{}", store_id, order_number),
            tracking_number: row.get(TRACKING_COLUMN).unwrap_or_default().to_string(),
            carrier_code,
            shipment_method: map_shipment_method(&method_code),
        });
    }

    summary.emitted = records.len();
    tracing::debug!("Transform summary: {:?}", summary);

    TransformResult { records, summary }
}

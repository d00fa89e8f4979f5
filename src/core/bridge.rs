use crate::core::{normalizer, transformer};
use crate::domain::model::{ShipmentRecord, SubmissionResult};
use crate::domain::ports::Submitter;
use crate::utils::error::Result;

/// Runs one upload through normalize -> transform -> submit.
pub struct ShipmentBridge<S: Submitter> {
    submitter: S,
}

impl<S: Submitter> ShipmentBridge<S> {
    pub fn new(submitter: S) -> Self {
        Self { submitter }
    }

    /// Builds the outbound payload without submitting it.
    pub fn prepare(&self, csv_bytes: &[u8]) -> Result<Vec<ShipmentRecord>> {
        let rows = normalizer::normalize(csv_bytes)?;
        tracing::info!("📥 Parsed {} rows from upload", rows.len());

        let result = transformer::transform(&rows);
        tracing::info!(
            "🔄 Transformed {} rows into {} shipment records ({} without PO, {} unparseable, {} duplicates)",
            result.summary.rows_read,
            result.summary.emitted,
            result.summary.missing_po,
            result.summary.unparseable_order,
            result.summary.duplicates
        );

        Ok(result.records)
    }

    pub async fn process(&self, csv_bytes: &[u8]) -> Result<SubmissionResult> {
        let records = self.prepare(csv_bytes)?;

        tracing::info!("📤 Submitting {} shipment records", records.len());
        let result = self.submitter.submit(&records).await?;
        tracing::info!(
            "✅ Submission finished: status={} items={}",
            result.status,
            result.results.len()
        );

        Ok(result)
    }
}

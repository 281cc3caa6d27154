//! Batch transformation of a whole export.

use crm_model::{DestinationRecord, OwnerAssignment, SourceRecord};

use crate::audit::CleaningLog;
use crate::mapper::FieldMapper;

/// Transformed records, index-aligned with the input, and the run's log.
#[derive(Debug, Clone, Default)]
pub struct TransformOutput {
    pub records: Vec<DestinationRecord>,
    pub log: CleaningLog,
}

/// Map every source record with the reference mapping.
///
/// `on_progress` is called with the count of records done after each one.
pub fn transform_records(
    sources: &[SourceRecord],
    owners: &OwnerAssignment,
    mut on_progress: impl FnMut(usize),
) -> TransformOutput {
    let mapper = FieldMapper::reference();
    let mut output = TransformOutput {
        records: Vec::with_capacity(sources.len()),
        log: CleaningLog::new(),
    };
    for (index, source) in sources.iter().enumerate() {
        let mapped = mapper.map_record(source, owners);
        if !mapped.steps.is_empty() {
            tracing::trace!(record = index, steps = mapped.steps.len(), "record cleaned");
        }
        output
            .log
            .append(index, &source.display_name(), mapped.steps);
        output.records.push(mapped.record);
        on_progress(index + 1);
    }
    tracing::debug!(
        records = output.records.len(),
        cleaning_steps = output.log.len(),
        "transformed records"
    );
    output
}

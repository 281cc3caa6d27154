use crm_ingest::{MappingOverview, QualityProfile};
use crm_model::OwnerAssignment;
use crm_transform::TransformOutput;
use crm_validate::{FieldPopulation, ValidationReport};

use crm_cli::pipeline::OutputResult;

#[derive(Debug)]
pub struct ImportResult {
    pub source: String,
    pub owners: OwnerAssignment,
    pub profile: QualityProfile,
    pub transformed: TransformOutput,
    pub population: Vec<FieldPopulation>,
    pub validation: ValidationReport,
    pub outputs: OutputResult,
    pub dry_run: bool,
}

impl ImportResult {
    /// True when nothing can be imported.
    pub fn has_errors(&self) -> bool {
        self.validation.valid_count() == 0
    }
}

#[derive(Debug)]
pub struct ProfileResult {
    pub source: String,
    pub profile: QualityProfile,
    pub overview: MappingOverview,
}

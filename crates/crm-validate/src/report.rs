//! Per-run validation outcome and the valid/invalid partition.

use serde::Serialize;

use crm_model::{DestinationRecord, Issue, IssueKind};

use crate::checks::validate_record;

/// Validation outcome of one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordValidation {
    /// 0-based position in the run.
    pub index: usize,
    pub name: String,
    /// Issues in rule order: required, contact method, email, LinkedIn.
    pub issues: Vec<Issue>,
}

impl RecordValidation {
    pub fn errors(&self) -> Vec<&Issue> {
        self.issues.iter().filter(|issue| issue.is_error()).collect()
    }

    pub fn warnings(&self) -> Vec<&Issue> {
        self.issues.iter().filter(|issue| !issue.is_error()).collect()
    }

    /// A record is importable when it has no errors; warnings are allowed.
    pub fn is_valid(&self) -> bool {
        !self.issues.iter().any(Issue::is_error)
    }
}

/// Occurrences of one issue kind across a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueGroup<'a> {
    pub kind: IssueKind,
    pub issues: Vec<&'a Issue>,
}

/// Validation outcome of a run, index-aligned with the records.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub records: Vec<RecordValidation>,
}

impl ValidationReport {
    pub fn total(&self) -> usize {
        self.records.len()
    }

    pub fn valid_indices(&self) -> Vec<usize> {
        self.records
            .iter()
            .filter(|outcome| outcome.is_valid())
            .map(|outcome| outcome.index)
            .collect()
    }

    pub fn invalid_indices(&self) -> Vec<usize> {
        self.records
            .iter()
            .filter(|outcome| !outcome.is_valid())
            .map(|outcome| outcome.index)
            .collect()
    }

    pub fn valid_count(&self) -> usize {
        self.records.iter().filter(|outcome| outcome.is_valid()).count()
    }

    pub fn invalid_count(&self) -> usize {
        self.total() - self.valid_count()
    }

    /// Percentage of valid records; 0 for an empty run.
    pub fn success_rate(&self) -> f64 {
        if self.records.is_empty() {
            0.0
        } else {
            self.valid_count() as f64 / self.total() as f64 * 100.0
        }
    }

    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.records.iter().flat_map(|outcome| &outcome.issues)
    }

    pub fn error_count(&self) -> usize {
        self.issues().filter(|issue| issue.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues().filter(|issue| !issue.is_error()).count()
    }

    /// Errors grouped by kind, groups ordered by first appearance.
    pub fn error_groups(&self) -> Vec<IssueGroup<'_>> {
        group_by_kind(self.issues().filter(|issue| issue.is_error()))
    }

    /// Warnings grouped by kind, groups ordered by first appearance.
    pub fn warning_groups(&self) -> Vec<IssueGroup<'_>> {
        group_by_kind(self.issues().filter(|issue| !issue.is_error()))
    }

    /// Records that passed validation, in input order.
    pub fn valid_records<'a>(&self, records: &'a [DestinationRecord]) -> Vec<&'a DestinationRecord> {
        self.valid_indices()
            .into_iter()
            .filter_map(|index| records.get(index))
            .collect()
    }
}

fn group_by_kind<'a>(issues: impl Iterator<Item = &'a Issue>) -> Vec<IssueGroup<'a>> {
    let mut groups: Vec<IssueGroup<'a>> = Vec::new();
    for issue in issues {
        let kind = issue.kind();
        match groups.iter_mut().find(|group| group.kind == kind) {
            Some(group) => group.issues.push(issue),
            None => groups.push(IssueGroup {
                kind,
                issues: vec![issue],
            }),
        }
    }
    groups
}

/// Validate every record of a run.
pub fn validate_records(records: &[DestinationRecord]) -> ValidationReport {
    let report = ValidationReport {
        records: records
            .iter()
            .enumerate()
            .map(|(index, record)| validate_record(record, index))
            .collect(),
    };
    tracing::debug!(
        records = report.total(),
        valid = report.valid_count(),
        invalid = report.invalid_count(),
        warnings = report.warning_count(),
        "validated records"
    );
    report
}

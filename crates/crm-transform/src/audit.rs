//! Run-wide cleaning log.

use serde::Serialize;

use crm_model::{CleaningStep, StepField};

/// Every cleaning step of a run, in the order it was produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CleaningLog {
    steps: Vec<CleaningStep>,
}

/// Steps sharing a [`StepField`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepGroup<'a> {
    pub field: StepField,
    pub steps: Vec<&'a CleaningStep>,
}

impl CleaningLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the steps of one record, tagging each with its identity.
    pub fn append(
        &mut self,
        index: usize,
        name: &str,
        steps: impl IntoIterator<Item = CleaningStep>,
    ) {
        self.steps
            .extend(steps.into_iter().map(|step| step.tagged(index, name)));
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[CleaningStep] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CleaningStep> {
        self.steps.iter()
    }

    /// Steps belonging to the record at `index`.
    pub fn for_record(&self, index: usize) -> impl Iterator<Item = &CleaningStep> {
        self.steps
            .iter()
            .filter(move |step| step.record.as_ref().is_some_and(|tag| tag.index == index))
    }

    /// Steps grouped by field, groups ordered by first appearance.
    pub fn groups(&self) -> Vec<StepGroup<'_>> {
        let mut groups: Vec<StepGroup<'_>> = Vec::new();
        for step in &self.steps {
            match groups.iter_mut().find(|group| group.field == step.field) {
                Some(group) => group.steps.push(step),
                None => groups.push(StepGroup {
                    field: step.field,
                    steps: vec![step],
                }),
            }
        }
        groups
    }
}

impl<'a> IntoIterator for &'a CleaningLog {
    type Item = &'a CleaningStep;
    type IntoIter = std::slice::Iter<'a, CleaningStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(field: StepField) -> CleaningStep {
        CleaningStep::new(field, "a", Some("b".to_string()), "test")
    }

    #[test]
    fn append_tags_steps() {
        let mut log = CleaningLog::new();
        log.append(4, "Ana Lima", vec![step(StepField::Domain)]);
        let tag = log.steps()[0].record.as_ref().expect("tagged");
        assert_eq!(tag.index, 4);
        assert_eq!(tag.name, "Ana Lima");
        assert_eq!(log.for_record(4).count(), 1);
        assert_eq!(log.for_record(0).count(), 0);
    }

    #[test]
    fn groups_follow_first_appearance() {
        let mut log = CleaningLog::new();
        log.append(0, "A", vec![step(StepField::Domain), step(StepField::PhoneSelection)]);
        log.append(1, "B", vec![step(StepField::ContactOwner), step(StepField::Domain)]);
        let groups = log.groups();
        let fields: Vec<StepField> = groups.iter().map(|group| group.field).collect();
        assert_eq!(
            fields,
            vec![StepField::Domain, StepField::PhoneSelection, StepField::ContactOwner]
        );
        assert_eq!(groups[0].steps.len(), 2);
        assert_eq!(log.len(), 4);
    }
}

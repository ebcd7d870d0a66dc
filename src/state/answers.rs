//! Answer record and per-step validity

use super::steps::Step;
use crate::lead::Lead;
use std::collections::BTreeMap;

/// Mapping from field name to the current entered value.
///
/// Every field is present from initialization with an empty value; keys are
/// only ever overwritten, never removed.
#[derive(Debug, Clone)]
pub struct AnswerRecord {
    values: BTreeMap<&'static str, String>,
}

impl AnswerRecord {
    /// Create a record with an empty value for every field in the schema
    pub fn new(steps: &[Step]) -> Self {
        let values = steps
            .iter()
            .flat_map(|s| s.fields.iter())
            .map(|f| (f.name, String::new()))
            .collect();
        Self { values }
    }

    /// Overwrite a field value. No validation here; validity is decided at
    /// read time by `is_step_valid`.
    pub fn set_field(&mut self, name: &'static str, value: String) {
        self.values.insert(name, value);
    }

    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    /// Append a character to a field (terminal text entry)
    pub fn push_char(&mut self, name: &'static str, c: char) {
        let mut value = self.values.get(name).cloned().unwrap_or_default();
        value.push(c);
        self.set_field(name, value);
    }

    /// Remove the last character from a field (backspace)
    pub fn pop_char(&mut self, name: &'static str) {
        let mut value = self.values.get(name).cloned().unwrap_or_default();
        value.pop();
        self.set_field(name, value);
    }

    /// Whether every required field in the step has a non-blank value.
    ///
    /// Pure function of the current record; callers must re-evaluate on every
    /// transition attempt rather than cache the result.
    pub fn is_step_valid(&self, step: &Step) -> bool {
        step.fields
            .iter()
            .filter(|f| f.required)
            .all(|f| !self.get(f.name).trim().is_empty())
    }

    /// Whether a single field currently fails its required check
    pub fn is_field_missing(&self, name: &str, required: bool) -> bool {
        required && self.get(name).trim().is_empty()
    }

    /// Snapshot the record into a submission payload
    pub fn to_lead(&self) -> Lead {
        Lead::new(
            self.values
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        )
    }
}

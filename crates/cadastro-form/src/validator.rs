// File: src/validator.rs
// Purpose: Full validation pass over every field

use crate::errors::{ErrorMap, FieldValidationFailure};
use crate::field::Field;
use crate::schema::FormSchema;
use crate::values::{FormValues, Registration};

/// Result of a full validation pass. Never partial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted(Registration),
    Rejected(ErrorMap),
}

impl SubmissionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionOutcome::Accepted(_))
    }

    /// Errors of a rejected submission, `None` when accepted
    pub fn errors(&self) -> Option<&ErrorMap> {
        match self {
            SubmissionOutcome::Accepted(_) => None,
            SubmissionOutcome::Rejected(errors) => Some(errors),
        }
    }
}

impl FormSchema {
    /// Check one field's rule chain against the current values
    pub fn validate_field(
        &self,
        field: Field,
        values: &FormValues,
    ) -> Result<(), FieldValidationFailure> {
        self.field(field).check(values)
    }

    /// Validate every field, collecting one message per failing field
    ///
    /// A failing field never stops the pass; all fields are reported.
    pub fn validate_all(&self, values: &FormValues) -> SubmissionOutcome {
        let errors: ErrorMap = self
            .fields()
            .filter_map(|schema| schema.check(values).err())
            .collect();

        if errors.is_empty() {
            SubmissionOutcome::Accepted(Registration::from(values))
        } else {
            SubmissionOutcome::Rejected(errors)
        }
    }
}

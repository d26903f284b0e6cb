//! Required-field validation for employee submissions.
//!
//! Valid submissions:
//! - `name`, `surname`, `email` and `position` are non-empty once trimmed
//! - `telephone`, `identity_number` and `image` are free-form and optional
//!
//! [`validate`] is the only way to obtain a [`ValidatedFields`], and the store
//! only accepts [`ValidatedFields`], so nothing unvalidated can be committed.

use crate::error::{Result, RosterError};
use crate::model::EmployeeFields;
use serde::Serialize;
use std::fmt;

/// A required field of an employee record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Surname,
    Email,
    Position,
}

impl Field {
    pub const REQUIRED: [Field; 4] = [Field::Name, Field::Surname, Field::Email, Field::Position];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Surname => "Surname",
            Field::Email => "Email",
            Field::Position => "Position",
        }
    }

    fn value<'a>(&self, fields: &'a EmployeeFields) -> &'a str {
        match self {
            Field::Name => &fields.name,
            Field::Surname => &fields.surname,
            Field::Email => &fields.email,
            Field::Position => &fields.position,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fields that passed [`validate`]. Values are kept exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedFields(EmployeeFields);

impl ValidatedFields {
    pub fn as_fields(&self) -> &EmployeeFields {
        &self.0
    }

    pub fn into_inner(self) -> EmployeeFields {
        self.0
    }
}

/// Returns the required fields whose trimmed value is empty, in declaration order.
pub fn missing_fields(candidate: &EmployeeFields) -> Vec<Field> {
    Field::REQUIRED
        .into_iter()
        .filter(|field| field.value(candidate).trim().is_empty())
        .collect()
}

/// Checks a candidate against the required-field rules.
///
/// # Examples
/// ```
/// use roster::model::EmployeeFields;
/// use roster::validation::{validate, Field};
/// use roster::error::RosterError;
///
/// assert!(validate(EmployeeFields::new("Sam", "Lee", "s@l.com", "QA")).is_ok());
///
/// match validate(EmployeeFields::new("", "Doe", "a@b.com", "Eng")) {
///     Err(RosterError::Validation { missing }) => assert_eq!(missing, vec![Field::Name]),
///     other => panic!("unexpected: {:?}", other),
/// }
/// ```
pub fn validate(candidate: EmployeeFields) -> Result<ValidatedFields> {
    let missing = missing_fields(&candidate);
    if missing.is_empty() {
        Ok(ValidatedFields(candidate))
    } else {
        Err(RosterError::Validation { missing })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> EmployeeFields {
        EmployeeFields::new("Jon", "Doe", "j@d.com", "Lead")
    }

    #[test]
    fn accepts_complete_candidate() {
        let validated = validate(complete()).unwrap();
        assert_eq!(validated.as_fields(), &complete());
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let candidate = complete();
        assert!(candidate.telephone.is_none());
        assert!(candidate.identity_number.is_none());
        assert!(candidate.image.is_none());
        assert!(validate(candidate).is_ok());
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut candidate = complete();
        candidate.surname = "   ".into();
        candidate.position = "\t".into();
        assert_eq!(
            missing_fields(&candidate),
            vec![Field::Surname, Field::Position]
        );
    }

    #[test]
    fn reports_every_missing_field_in_order() {
        let err = validate(EmployeeFields::default()).unwrap_err();
        match err {
            RosterError::Validation { missing } => {
                assert_eq!(missing, Field::REQUIRED.to_vec());
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn keeps_values_untrimmed() {
        let mut candidate = complete();
        candidate.name = " Jon ".into();
        let validated = validate(candidate).unwrap();
        assert_eq!(validated.as_fields().name, " Jon ");
    }
}

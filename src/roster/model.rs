use crate::validation::ValidatedFields;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identifier of an employee record, rendered in base 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub u64);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for EmployeeId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(EmployeeId)
    }
}

impl From<u64> for EmployeeId {
    fn from(value: u64) -> Self {
        EmployeeId(value)
    }
}

/// The values a submission carries. Everything except the `id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeFields {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub telephone: Option<String>,
    pub position: String,
    pub identity_number: Option<String>,
    pub image: Option<String>,
}

impl EmployeeFields {
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        email: impl Into<String>,
        position: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            email: email.into(),
            position: position.into(),
            ..Default::default()
        }
    }

    pub fn with_telephone(mut self, telephone: impl Into<String>) -> Self {
        self.telephone = Some(telephone.into());
        self
    }

    pub fn with_identity_number(mut self, number: impl Into<String>) -> Self {
        self.identity_number = Some(number.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub telephone: Option<String>,
    pub position: String,
    pub identity_number: Option<String>,
    // Part of the record layout; no operation reads or toggles it.
    pub packed: bool,
    pub image: Option<String>,
}

impl Employee {
    /// Builds a record from fields that already passed validation.
    pub fn new(id: EmployeeId, fields: ValidatedFields) -> Self {
        let fields = fields.into_inner();
        Self {
            id,
            name: fields.name,
            surname: fields.surname,
            email: fields.email,
            telephone: fields.telephone,
            position: fields.position,
            identity_number: fields.identity_number,
            packed: false,
            image: fields.image,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }

    pub fn fields(&self) -> EmployeeFields {
        EmployeeFields {
            name: self.name.clone(),
            surname: self.surname.clone(),
            email: self.email.clone(),
            telephone: self.telephone.clone(),
            position: self.position.clone(),
            identity_number: self.identity_number.clone(),
            image: self.image.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate;

    #[test]
    fn parses_ids_in_base_ten() {
        assert_eq!("42".parse::<EmployeeId>().unwrap(), EmployeeId(42));
        assert_eq!(" 7 ".parse::<EmployeeId>().unwrap(), EmployeeId(7));
        assert!("abc".parse::<EmployeeId>().is_err());
        assert!("-1".parse::<EmployeeId>().is_err());
    }

    #[test]
    fn display_honours_width_flags() {
        assert_eq!(format!("{:>4}.", EmployeeId(7)), "   7.");
        assert_eq!(format!("{:<3}|", EmployeeId(12)), "12 |");
        assert_eq!(EmployeeId(1700000000000).to_string(), "1700000000000");
    }

    #[test]
    fn new_record_is_never_packed() {
        let fields = validate(EmployeeFields::new("Ann", "Lee", "a@l.com", "QA")).unwrap();
        let employee = Employee::new(EmployeeId(9), fields);
        assert!(!employee.packed);
        assert_eq!(employee.full_name(), "Ann Lee");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let fields = validate(
            EmployeeFields::new("Ann", "Lee", "a@l.com", "QA").with_identity_number("77"),
        )
        .unwrap();
        let json = serde_json::to_value(Employee::new(EmployeeId(3), fields)).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["identityNumber"], "77");
        assert_eq!(json["packed"], false);
    }
}

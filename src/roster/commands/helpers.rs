use crate::error::{Result, RosterError};
use crate::model::{Employee, EmployeeId};

/// Parses a user-supplied id. Input that is not a base-10 id can never match
/// a record, so it is reported as `NotFound`.
pub fn parse_id(raw: &str) -> Result<EmployeeId> {
    raw.parse().map_err(|_| RosterError::not_found(raw.trim()))
}

pub fn describe(employee: &Employee) -> String {
    format!("({}): {}", employee.id, employee.full_name())
}

use crate::error::{Result, RosterError};
use crate::model::{Employee, EmployeeId};
use crate::store::EmployeeStore;

/// Resolves free-text user input to a stored record.
///
/// The input, trimmed, must be a base-10 id. Anything else, or an id nobody
/// has, is `NotFound`.
pub fn resolve<S: EmployeeStore + ?Sized>(store: &S, raw: &str) -> Result<Employee> {
    let id: EmployeeId = raw
        .parse()
        .map_err(|_| RosterError::not_found(raw.trim()))?;
    store.find_by_id(id)
}

use crate::commands::CmdResult;
use crate::error::Result;
use crate::profile::ProfileSelector;
use crate::resolver::resolve;
use crate::store::EmployeeStore;
use tracing::debug;

/// Looks a record up by id and opens it in detail view.
///
/// A miss is returned as `NotFound` and leaves the current view alone.
pub fn run<S: EmployeeStore>(
    store: &S,
    profile: &mut ProfileSelector,
    query: &str,
) -> Result<CmdResult> {
    let employee = resolve(store, query)?;
    debug!(id = %employee.id, query, "search resolved");
    profile.select(employee.clone());
    Ok(CmdResult::default().with_profile(employee))
}

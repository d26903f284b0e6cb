use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::profile::ProfileSelector;
use crate::store::EmployeeStore;

use super::helpers::parse_id;

pub fn select<S: EmployeeStore>(
    store: &S,
    profile: &mut ProfileSelector,
    raw_id: &str,
) -> Result<CmdResult> {
    let employee = store.find_by_id(parse_id(raw_id)?)?;
    profile.select(employee.clone());
    Ok(CmdResult::default().with_profile(employee))
}

/// Shows the record currently in detail view, if any.
pub fn current(profile: &ProfileSelector) -> Result<CmdResult> {
    Ok(match profile.current() {
        Some(employee) => CmdResult::default().with_profile(employee.clone()),
        None => CmdResult::default().with_message(CmdMessage::info("No profile selected")),
    })
}

pub fn back(profile: &mut ProfileSelector) -> Result<CmdResult> {
    profile.clear();
    Ok(CmdResult::default())
}

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::form::EmployeeForm;
use crate::profile::ProfileSelector;
use crate::session::EditSession;
use crate::store::EmployeeStore;
use tracing::{info, warn};

use super::helpers::{describe, parse_id};

/// Removes the record with `raw_id`.
///
/// Deleting is idempotent: an unknown id only produces a warning. An edit or
/// a detail view of the removed record is closed along with it.
pub fn run<S: EmployeeStore>(
    store: &mut S,
    session: &mut EditSession,
    form: &mut EmployeeForm,
    profile: &mut ProfileSelector,
    raw_id: &str,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let removed = parse_id(raw_id).and_then(|id| store.remove(id));
    let employee = match removed {
        Ok(employee) => employee,
        Err(e) if e.is_not_found() => {
            warn!(error = %e, "delete of unknown record ignored");
            result.add_message(CmdMessage::warning(format!("{}; nothing deleted", e)));
            return Ok(result);
        }
        Err(e) => return Err(e),
    };

    if session.editing() == Some(employee.id) {
        session.cancel();
        form.clear();
        result.add_message(CmdMessage::info("Edit of the deleted employee was discarded"));
    }
    if profile.shows(employee.id) {
        profile.clear();
    }

    info!(id = %employee.id, "record removed");
    result.add_message(CmdMessage::success(format!(
        "Employee deleted {}",
        describe(&employee)
    )));
    result.affected.push(employee);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::EmployeeId;
    use crate::session::EditState;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_record() {
        let mut store = StoreFixture::new().with_samples().store;
        let mut session = EditSession::new();
        let mut form = EmployeeForm::new();
        let mut profile = ProfileSelector::new();

        let result = run(&mut store, &mut session, &mut form, &mut profile, "2").unwrap();
        assert_eq!(result.affected[0].id, EmployeeId(2));
        assert!(store.find_by_id(EmployeeId(2)).unwrap_err().is_not_found());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn deleting_twice_is_harmless() {
        let mut store = StoreFixture::new().with_samples().store;
        let mut session = EditSession::new();
        let mut form = EmployeeForm::new();
        let mut profile = ProfileSelector::new();

        run(&mut store, &mut session, &mut form, &mut profile, "2").unwrap();
        let again = run(&mut store, &mut session, &mut form, &mut profile, "2").unwrap();
        assert!(again.affected.is_empty());
        assert_eq!(again.messages[0].level, MessageLevel::Warning);

        let garbage = run(&mut store, &mut session, &mut form, &mut profile, "x").unwrap();
        assert!(garbage.affected.is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn closes_edit_and_profile_of_deleted_record() {
        let mut store = StoreFixture::new().with_samples().store;
        let mut session = EditSession::new();
        let mut profile = ProfileSelector::new();
        let current = session.begin_edit(&store, EmployeeId(1)).unwrap();
        let mut form = EmployeeForm::seeded(&current);
        profile.select(current);

        run(&mut store, &mut session, &mut form, &mut profile, "1").unwrap();
        assert_eq!(session.state(), EditState::Idle);
        assert!(form.is_blank());
        assert!(profile.current().is_none());
    }

    #[test]
    fn unrelated_edit_survives() {
        let mut store = StoreFixture::new().with_samples().store;
        let mut session = EditSession::new();
        let mut profile = ProfileSelector::new();
        let mut form = EmployeeForm::seeded(&session.begin_edit(&store, EmployeeId(1)).unwrap());

        run(&mut store, &mut session, &mut form, &mut profile, "2").unwrap();
        assert_eq!(session.state(), EditState::Editing(EmployeeId(1)));
        assert!(!form.is_blank());
    }
}

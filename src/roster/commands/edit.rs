use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::form::EmployeeForm;
use crate::session::EditSession;
use crate::store::EmployeeStore;
use tracing::debug;

use super::helpers::{describe, parse_id};

/// Puts the session into edit mode for `raw_id` and seeds the form from the
/// stored record. Any edit already in progress is dropped uncommitted.
pub fn begin<S: EmployeeStore>(
    store: &S,
    session: &mut EditSession,
    form: &mut EmployeeForm,
    raw_id: &str,
) -> Result<CmdResult> {
    let id = parse_id(raw_id)?;
    let replaced = session.editing().filter(|prev| *prev != id);
    let employee = session.begin_edit(store, id)?;
    *form = EmployeeForm::seeded(&employee);
    debug!(%id, ?replaced, "edit started");

    let mut result = CmdResult::default().with_form(employee.fields());
    if let Some(prev) = replaced {
        result.add_message(CmdMessage::info(format!(
            "Discarded unsaved edit of {}",
            prev
        )));
    }
    result.add_message(CmdMessage::info(format!("Editing {}", describe(&employee))));
    Ok(result)
}

/// Leaves edit mode without touching the store.
pub fn cancel(session: &mut EditSession, form: &mut EmployeeForm) -> Result<CmdResult> {
    form.clear();
    let result = match session.cancel() {
        Some(id) => {
            debug!(%id, "edit cancelled");
            CmdResult::default().with_message(CmdMessage::info(format!("Edit of {} cancelled", id)))
        }
        None => CmdResult::default().with_message(CmdMessage::info("Form cleared")),
    };
    Ok(result)
}

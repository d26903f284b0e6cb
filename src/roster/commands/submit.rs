use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::form::EmployeeForm;
use crate::ids::{Clock, IdentifierGenerator};
use crate::session::{EditSession, SubmitOutcome};
use crate::store::EmployeeStore;
use tracing::{debug, info, warn};

use super::helpers::describe;

/// Submits the form: add when idle, update when editing.
///
/// On a validation error nothing changes, not even the form. On success, or
/// when the edited record vanished, the form is cleared and the session is
/// back to idle.
pub fn run<S: EmployeeStore, C: Clock>(
    store: &mut S,
    ids: &mut IdentifierGenerator<C>,
    session: &mut EditSession,
    form: &mut EmployeeForm,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if let Some(reason) = form.refresh_image() {
        warn!(%reason, "image encoding failed");
        result.add_message(CmdMessage::error(format!(
            "Image could not be read: {}",
            reason
        )));
    }
    if form.image().is_pending() {
        debug!("submitting before image encoding finished, image omitted");
        result.add_message(CmdMessage::info(
            "Image is still being processed and was not included.",
        ));
    }

    let candidate = form.to_fields();
    let mode = session.mode();
    debug!(mode = mode.label(), "submitting form");

    match session.submit(store, ids, candidate) {
        Ok(outcome) => {
            form.clear();
            let message = match &outcome {
                SubmitOutcome::Added(e) => format!("Employee added {}", describe(e)),
                SubmitOutcome::Updated(e) => format!("Employee updated {}", describe(e)),
            };
            info!(id = %outcome.employee().id, mode = mode.label(), "record committed");
            result.add_message(CmdMessage::success(message));
            result.affected.push(outcome.employee().clone());
            Ok(result)
        }
        Err(e) if e.is_not_found() => {
            form.clear();
            warn!(error = %e, "edited record no longer exists");
            result.add_message(CmdMessage::warning(format!(
                "{}; the edit was discarded",
                e
            )));
            Ok(result)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;
    use crate::form::FormField;
    use crate::image::testing::GatedEncoder;
    use crate::commands::MessageLevel;
    use crate::image::{DataUrlEncoder, PendingImage};
    use crate::model::EmployeeId;
    use crate::session::EditState;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::validation::Field;

    fn fill(form: &mut EmployeeForm, name: &str, surname: &str, email: &str, position: &str) {
        form.set(FormField::Name, name);
        form.set(FormField::Surname, surname);
        form.set(FormField::Email, email);
        form.set(FormField::Position, position);
    }

    #[test]
    fn adds_when_idle_and_clears_form() {
        let mut store = StoreFixture::new().with_samples().store;
        let mut ids = IdentifierGenerator::new();
        let mut session = EditSession::new();
        let mut form = EmployeeForm::new();
        fill(&mut form, "Sam", "Lee", "s@l.com", "QA");

        let result = run(&mut store, &mut ids, &mut session, &mut form).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(result.affected.len(), 1);
        assert!(result.messages[0].content.starts_with("Employee added"));
        assert!(form.is_blank());
    }

    #[test]
    fn rejects_missing_name_without_mutation() {
        let mut store = StoreFixture::new().with_samples().store;
        let before = store.list();
        let mut ids = IdentifierGenerator::new();
        let mut session = EditSession::new();
        let mut form = EmployeeForm::new();
        fill(&mut form, "", "Doe", "a@b.com", "Eng");

        let err = run(&mut store, &mut ids, &mut session, &mut form).unwrap_err();
        match err {
            RosterError::Validation { missing } => assert_eq!(missing, vec![Field::Name]),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(store.list(), before);
        assert_eq!(form.get(FormField::Surname), "Doe");
    }

    #[test]
    fn vanished_edit_is_a_warning() {
        let mut store = StoreFixture::new().with_samples().store;
        let mut ids = IdentifierGenerator::new();
        let mut session = EditSession::new();
        let mut form = EmployeeForm::seeded(&session.begin_edit(&store, EmployeeId(1)).unwrap());
        store.remove(EmployeeId(1)).unwrap();

        let result = run(&mut store, &mut ids, &mut session, &mut form).unwrap();
        assert!(result.affected.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(session.state(), EditState::Idle);
        assert!(form.is_blank());
    }

    #[test]
    fn submit_before_image_resolves_omits_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sam.png");
        std::fs::write(&path, b"png").unwrap();
        let (encoder, _release) = GatedEncoder::new();

        let mut store = StoreFixture::new().store;
        let mut ids = IdentifierGenerator::new();
        let mut session = EditSession::new();
        let mut form = EmployeeForm::new();
        fill(&mut form, "Sam", "Lee", "s@l.com", "QA");
        form.attach_image(PendingImage::spawn(encoder, &path));

        let result = run(&mut store, &mut ids, &mut session, &mut form).unwrap();
        assert_eq!(result.affected[0].image, None);
        assert_eq!(store.list()[0].image, None);
    }

    #[test]
    fn failed_image_is_reported_as_error_and_record_still_saved() {
        let mut store = StoreFixture::new().store;
        let mut ids = IdentifierGenerator::new();
        let mut session = EditSession::new();
        let mut form = EmployeeForm::new();
        fill(&mut form, "Sam", "Lee", "s@l.com", "QA");
        let pending = PendingImage::spawn(DataUrlEncoder, "/no/such/sam.png");
        pending.cancel();
        form.attach_image(pending);

        let result = run(&mut store, &mut ids, &mut session, &mut form).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(result.messages[0].content.starts_with("Image could not be read"));
        assert_eq!(result.messages[1].level, MessageLevel::Success);
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].image, None);
    }
}

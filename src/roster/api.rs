//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every roster operation, whatever the UI.
//!
//! `RosterApi` owns the session state: the store, the id generator, the edit
//! session, the profile selector and the form. Each method is one user action
//! and returns `Result<CmdResult>`. It never prints. Presenting messages and
//! errors is the caller's job.
//!
//! ## Generic Over EmployeeStore
//!
//! `RosterApi<S: EmployeeStore, C: Clock>` works with any store and any clock,
//! so the whole flow can be tested without a terminal or real time.

use crate::commands;
use crate::error::Result;
use crate::form::{EmployeeForm, FormField};
use crate::ids::{Clock, IdentifierGenerator, SystemClock};
use crate::image::{DataUrlEncoder, ImageEncoder, PendingImage};
use crate::model::Employee;
use crate::profile::ProfileSelector;
use crate::session::{EditSession, EditState, SubmitMode};
use crate::store::EmployeeStore;
use std::path::PathBuf;
use tracing::debug;

pub struct RosterApi<S: EmployeeStore, C: Clock = SystemClock> {
    store: S,
    ids: IdentifierGenerator<C>,
    session: EditSession,
    profile: ProfileSelector,
    form: EmployeeForm,
}

impl<S: EmployeeStore> RosterApi<S, SystemClock> {
    pub fn new(store: S) -> Self {
        Self::with_generator(store, IdentifierGenerator::new())
    }
}

impl<S: EmployeeStore, C: Clock> RosterApi<S, C> {
    pub fn with_generator(store: S, ids: IdentifierGenerator<C>) -> Self {
        Self {
            store,
            ids,
            session: EditSession::new(),
            profile: ProfileSelector::new(),
            form: EmployeeForm::new(),
        }
    }

    pub fn seed_sample_records(&mut self) -> Result<commands::CmdResult> {
        commands::seed::run(&mut self.store)
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    /// Commits the form as a new record, or as the edited record in edit mode.
    pub fn submit(&mut self) -> Result<commands::CmdResult> {
        commands::submit::run(
            &mut self.store,
            &mut self.ids,
            &mut self.session,
            &mut self.form,
        )
    }

    pub fn begin_edit(&mut self, raw_id: &str) -> Result<commands::CmdResult> {
        commands::edit::begin(&self.store, &mut self.session, &mut self.form, raw_id)
    }

    pub fn cancel_edit(&mut self) -> Result<commands::CmdResult> {
        commands::edit::cancel(&mut self.session, &mut self.form)
    }

    pub fn delete(&mut self, raw_id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(
            &mut self.store,
            &mut self.session,
            &mut self.form,
            &mut self.profile,
            raw_id,
        )
    }

    pub fn search(&mut self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, &mut self.profile, query)
    }

    pub fn view(&mut self, raw_id: &str) -> Result<commands::CmdResult> {
        commands::view::select(&self.store, &mut self.profile, raw_id)
    }

    pub fn current_profile(&self) -> Result<commands::CmdResult> {
        commands::view::current(&self.profile)
    }

    pub fn back(&mut self) -> Result<commands::CmdResult> {
        commands::view::back(&mut self.profile)
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Starts encoding the file at `path` into the form's image input.
    pub fn attach_image(&mut self, path: impl Into<PathBuf>) {
        self.attach_image_with(DataUrlEncoder, path);
    }

    pub fn attach_image_with<E>(&mut self, encoder: E, path: impl Into<PathBuf>)
    where
        E: ImageEncoder + Send + 'static,
    {
        let path = path.into();
        debug!(path = %path.display(), "image encoding started");
        self.form.attach_image(PendingImage::spawn(encoder, path));
    }

    pub fn form(&self) -> &EmployeeForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut EmployeeForm {
        &mut self.form
    }

    pub fn edit_state(&self) -> EditState {
        self.session.state()
    }

    pub fn submit_mode(&self) -> SubmitMode {
        self.session.mode()
    }

    pub fn profile(&self) -> Option<&Employee> {
        self.profile.current()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

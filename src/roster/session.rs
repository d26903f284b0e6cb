//! # Edit Session
//!
//! Tracks whether the next submission creates a record or revises one.
//!
//! ```text
//!            begin_edit(id)                 begin_edit(other)
//!   Idle ───────────────────▶ Editing(id) ───────────────────▶ Editing(other)
//!    ▲  │                        │    │
//!    │  │ submit: add            │    │ cancel: no store operation
//!    │  ▼                        │    ▼
//!   Idle ◀───────────────────────┘   Idle
//!              submit: update
//! ```
//!
//! The session holds only an id. The values being edited live in the form,
//! which [`EditSession::begin_edit`] seeds from the stored record.
//!
//! A submission that fails validation changes nothing. A submission whose
//! target vanished in the meantime resets the session and reports `NotFound`.

use crate::error::Result;
use crate::ids::{Clock, IdentifierGenerator};
use crate::model::{Employee, EmployeeFields, EmployeeId};
use crate::store::EmployeeStore;
use crate::validation::validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Idle,
    Editing(EmployeeId),
}

/// What a submission will do, matching the form's button label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    Add,
    Update,
}

impl SubmitMode {
    pub fn label(&self) -> &'static str {
        match self {
            SubmitMode::Add => "Add",
            SubmitMode::Update => "Update",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(Employee),
    Updated(Employee),
}

impl SubmitOutcome {
    pub fn employee(&self) -> &Employee {
        match self {
            SubmitOutcome::Added(e) | SubmitOutcome::Updated(e) => e,
        }
    }
}

#[derive(Debug, Default)]
pub struct EditSession {
    state: EditState,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    pub fn editing(&self) -> Option<EmployeeId> {
        match self.state {
            EditState::Editing(id) => Some(id),
            EditState::Idle => None,
        }
    }

    pub fn mode(&self) -> SubmitMode {
        match self.state {
            EditState::Idle => SubmitMode::Add,
            EditState::Editing(_) => SubmitMode::Update,
        }
    }

    /// Starts revising `id`, replacing any edit in progress. Returns the
    /// record's current values for seeding the form.
    pub fn begin_edit<S: EmployeeStore + ?Sized>(
        &mut self,
        store: &S,
        id: EmployeeId,
    ) -> Result<Employee> {
        let employee = store.find_by_id(id)?;
        self.state = EditState::Editing(id);
        Ok(employee)
    }

    /// Abandons the edit in progress. Returns the id that was being edited.
    pub fn cancel(&mut self) -> Option<EmployeeId> {
        let previous = self.editing();
        self.state = EditState::Idle;
        previous
    }

    /// Validates `candidate` and commits it: an update while editing, an add
    /// with a fresh id otherwise.
    pub fn submit<S, C>(
        &mut self,
        store: &mut S,
        ids: &mut IdentifierGenerator<C>,
        candidate: EmployeeFields,
    ) -> Result<SubmitOutcome>
    where
        S: EmployeeStore + ?Sized,
        C: Clock,
    {
        let fields = validate(candidate)?;
        match self.state {
            EditState::Editing(id) => {
                self.state = EditState::Idle;
                store.update(id, fields).map(SubmitOutcome::Updated)
            }
            EditState::Idle => {
                let id = ids.next(&*store);
                store.add(id, fields).map(SubmitOutcome::Added)
            }
        }
    }
}

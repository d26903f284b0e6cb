//! # Command Layer
//!
//! The **business logic** of the roster. Each user action lives in its own
//! submodule as a plain function over the store and the session state.
//!
//! ## Role and Responsibilities
//!
//! Commands:
//! - Validate, resolve ids and apply the add/edit/delete rules
//! - Keep the edit session, form and profile consistent with the store
//! - Return a structured [`CmdResult`] with affected records and messages
//! - Log what they did through `tracing`
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: no stdout, stderr or prompts
//! - **Argument parsing**: the CLI layer turns text into calls
//! - **Exit codes**: errors are returned, the caller decides
//!
//! ## Structured Returns
//!
//! [`CmdResult`] carries:
//! - `affected`: records created, replaced or removed
//! - `listed`: records for the list view
//! - `profile`: the record now in detail view
//! - `form`: form values after an edit began
//! - `messages`: [`CmdMessage`]s with a level (info, success, warning, error)
//!
//! A tolerated miss (deleting an unknown id, submitting an edit whose record
//! is gone) is a warning message in an `Ok` result. Failures the user must act
//! on, such as a validation error, are `Err`.
//!
//! ## Testing Strategy
//!
//! Most tests live here, against `InMemoryStore` built with `StoreFixture`.
//!
//! ## Command Modules
//!
//! - [`submit`]: Add or update from the form
//! - [`edit`]: Begin or cancel an edit
//! - [`delete`]: Remove a record
//! - [`search`]: Resolve typed text and open the profile
//! - [`view`]: Select, show or leave the profile
//! - [`list`]: All records in insertion order
//! - [`seed`]: Sample records for a new session
//! - [`helpers`]: Id parsing and record descriptions

use crate::model::{Employee, EmployeeFields};

pub mod delete;
pub mod edit;
pub mod helpers;
pub mod list;
pub mod search;
pub mod seed;
pub mod submit;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records created, replaced or removed by the command.
    pub affected: Vec<Employee>,
    /// Records to show in the list view.
    pub listed: Vec<Employee>,
    /// The record now shown in detail view.
    pub profile: Option<Employee>,
    /// Form values after the command, when it seeded the form.
    pub form: Option<EmployeeFields>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, employees: Vec<Employee>) -> Self {
        self.listed = employees;
        self
    }

    pub fn with_profile(mut self, employee: Employee) -> Self {
        self.profile = Some(employee);
        self
    }

    pub fn with_form(mut self, fields: EmployeeFields) -> Self {
        self.form = Some(fields);
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_levels() {
        assert_eq!(CmdMessage::info("a").level, MessageLevel::Info);
        assert_eq!(CmdMessage::success("b").level, MessageLevel::Success);
        assert_eq!(CmdMessage::warning("c").level, MessageLevel::Warning);
        let error = CmdMessage::error("d");
        assert_eq!(error.level, MessageLevel::Error);
        assert_eq!(error.content, "d");
    }

    #[test]
    fn builders_accumulate_messages() {
        let result = CmdResult::default()
            .with_message(CmdMessage::info("one"))
            .with_message(CmdMessage::error("two"));
        assert_eq!(result.messages.len(), 2);
        assert_eq!(result.messages[1].level, MessageLevel::Error);
        assert!(result.profile.is_none());
    }
}

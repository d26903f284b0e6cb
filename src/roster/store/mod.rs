//! # Storage Layer
//!
//! This module defines the storage abstraction for the roster. The
//! [`EmployeeStore`] trait is the only way records are created, replaced,
//! removed or read, so the rest of the crate can be tested against any
//! implementation without a rendering harness.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the session store
//!   - Ordered by insertion
//!   - Volatile: nothing survives the process
//!
//! ## Record Invariants
//!
//! Mutations take [`ValidatedFields`], which only
//! [`validate`](crate::validation::validate) can produce. A stored record has
//! therefore always passed validation at its last commit.
//!
//! Every store hands out copies. A `Vec` returned by [`EmployeeStore::list`]
//! is a snapshot and is not affected by later mutations.

use crate::error::Result;
use crate::model::{Employee, EmployeeId};
use crate::validation::ValidatedFields;

pub mod memory;

/// Abstract interface for the employee collection.
pub trait EmployeeStore {
    /// Append a new record built from `fields` under `id`.
    fn add(&mut self, id: EmployeeId, fields: ValidatedFields) -> Result<Employee>;

    /// Replace every field of the record with `id`, keeping its id and position.
    fn update(&mut self, id: EmployeeId, fields: ValidatedFields) -> Result<Employee>;

    /// Remove the record with `id`, returning it.
    fn remove(&mut self, id: EmployeeId) -> Result<Employee>;

    /// Get a copy of the record with `id`.
    fn find_by_id(&self, id: EmployeeId) -> Result<Employee>;

    /// All records in insertion order.
    fn list(&self) -> Vec<Employee>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, id: EmployeeId) -> bool {
        self.find_by_id(id).is_ok()
    }
}

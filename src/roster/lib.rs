//! # Roster Architecture
//!
//! Roster is a **UI-agnostic employee directory library**. It keeps a small
//! roster of personnel records in memory for one session and decides how
//! records are created, validated, identified, edited and looked up. The
//! bundled command-line session is one client of that library, nothing more.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads commands, prompts for fields, prints views         │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session: store, ids, edit session, profile, form│
//! │  - One method per user action, returns Result<CmdResult>    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic and user-facing messages                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (validation, ids, session, resolver, profile, store)  │
//! │  - EmployeeStore trait, InMemoryStore                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Control Flow
//!
//! A submission goes form → [`validation`] → ([`ids`] when creating) →
//! [`store`] → [`session`] reset. Independently, [`resolver`] or an explicit
//! selection feeds [`profile`], the detail view.
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes Rust values and returns
//! `Result<CmdResult>`. It never prints and never exits. The one background
//! activity is image encoding (see [`image`]), which delivers into the form.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic per user action
//! - [`store`]: Storage abstraction and the in-memory store
//! - [`model`]: `Employee`, `EmployeeId`, `EmployeeFields`
//! - [`validation`]: Required-field rules
//! - [`ids`]: Collision-free id generation
//! - [`session`]: Add/edit state machine
//! - [`resolver`]: Text to record lookup
//! - [`profile`]: Detail view selection
//! - [`form`]: Transient input state
//! - [`image`]: Image encoder contract and background encoding
//! - [`config`]: Layered configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod ids;
pub mod image;
pub mod model;
pub mod profile;
pub mod resolver;
pub mod session;
pub mod store;
pub mod validation;

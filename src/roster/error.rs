use crate::model::EmployeeId;
use crate::validation::Field;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Please fill out all required fields: {}", join_fields(.missing))]
    Validation { missing: Vec<Field> },

    #[error("Employee not found: {0}")]
    NotFound(String),

    #[error("Duplicate employee id: {0}")]
    DuplicateId(EmployeeId),

    #[error("Image error: {0}")]
    Image(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl RosterError {
    pub fn not_found(key: impl ToString) -> Self {
        RosterError::NotFound(key.to_string())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RosterError::NotFound(_))
    }
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, RosterError>;

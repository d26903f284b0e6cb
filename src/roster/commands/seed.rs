use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::model::{EmployeeFields, EmployeeId};
use crate::store::EmployeeStore;
use crate::validation::validate;
use tracing::debug;

/// The records a fresh session starts with, under ids 1 and 2.
pub fn sample_records() -> Vec<(EmployeeId, EmployeeFields)> {
    vec![
        (
            EmployeeId(1),
            EmployeeFields::new("John", "Doe", "john.doe@example.com", "Manager")
                .with_telephone("123-456-7890")
                .with_identity_number("12345"),
        ),
        (
            EmployeeId(2),
            EmployeeFields::new("Jane", "Smith", "jane.smith@example.com", "Developer")
                .with_telephone("987-654-3210")
                .with_identity_number("54321"),
        ),
    ]
}

/// Inserts the sample records. Samples whose id is already taken are skipped.
pub fn run<S: EmployeeStore>(store: &mut S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for (id, fields) in sample_records() {
        match store.add(id, validate(fields)?) {
            Ok(employee) => result.affected.push(employee),
            Err(RosterError::DuplicateId(id)) => {
                debug!(%id, "sample id taken, skipping");
            }
            Err(e) => return Err(e),
        }
    }
    if !result.affected.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Loaded {} sample employees",
            result.affected.len()
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn seeds_two_records() {
        let mut store = InMemoryStore::new();
        run(&mut store).unwrap();
        let list = store.list();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id, EmployeeId(1));
        assert_eq!(list[0].identity_number.as_deref(), Some("12345"));
        assert_eq!(list[1].full_name(), "Jane Smith");
        assert!(list.iter().all(|e| !e.packed && e.image.is_none()));
    }

    #[test]
    fn seeding_twice_does_not_duplicate() {
        let mut store = InMemoryStore::new();
        run(&mut store).unwrap();
        let again = run(&mut store).unwrap();
        assert!(again.affected.is_empty());
        assert!(again.messages.is_empty());
        assert_eq!(store.len(), 2);
    }
}

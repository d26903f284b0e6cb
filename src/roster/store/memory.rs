use super::EmployeeStore;
use crate::error::{Result, RosterError};
use crate::model::{Employee, EmployeeId};
use crate::validation::ValidatedFields;

/// Ordered, volatile storage for one session.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    employees: Vec<Employee>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: EmployeeId) -> Option<usize> {
        self.employees.iter().position(|e| e.id == id)
    }
}

impl EmployeeStore for InMemoryStore {
    fn add(&mut self, id: EmployeeId, fields: ValidatedFields) -> Result<Employee> {
        if self.position(id).is_some() {
            return Err(RosterError::DuplicateId(id));
        }
        let employee = Employee::new(id, fields);
        self.employees.push(employee.clone());
        Ok(employee)
    }

    fn update(&mut self, id: EmployeeId, fields: ValidatedFields) -> Result<Employee> {
        let pos = self.position(id).ok_or_else(|| RosterError::not_found(id))?;
        let employee = Employee::new(id, fields);
        self.employees[pos] = employee.clone();
        Ok(employee)
    }

    fn remove(&mut self, id: EmployeeId) -> Result<Employee> {
        let pos = self.position(id).ok_or_else(|| RosterError::not_found(id))?;
        Ok(self.employees.remove(pos))
    }

    fn find_by_id(&self, id: EmployeeId) -> Result<Employee> {
        self.employees
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| RosterError::not_found(id))
    }

    fn list(&self) -> Vec<Employee> {
        self.employees.clone()
    }

    fn len(&self) -> usize {
        self.employees.len()
    }

    fn contains(&self, id: EmployeeId) -> bool {
        self.position(id).is_some()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::EmployeeFields;
    use crate::validation::validate;

    pub fn fields(name: &str, surname: &str) -> EmployeeFields {
        EmployeeFields::new(
            name,
            surname,
            format!("{}.{}@example.com", name, surname).to_lowercase(),
            "Engineer",
        )
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_employee(mut self, id: u64, name: &str, surname: &str) -> Self {
            let validated = validate(fields(name, surname)).unwrap();
            self.store.add(EmployeeId(id), validated).unwrap();
            self
        }

        /// The two records every session starts with.
        pub fn with_samples(self) -> Self {
            self.with_employee(1, "John", "Doe")
                .with_employee(2, "Jane", "Smith")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{fields, StoreFixture};
    use super::*;
    use crate::validation::validate;

    #[test]
    fn add_appends_in_insertion_order() {
        let store = StoreFixture::new()
            .with_employee(20, "Zed", "Last")
            .with_employee(10, "Amy", "First")
            .store;
        let ids: Vec<_> = store.list().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![EmployeeId(20), EmployeeId(10)]);
    }

    #[test]
    fn add_rejects_duplicate_id() {
        let mut store = StoreFixture::new().with_samples().store;
        let err = store
            .add(EmployeeId(1), validate(fields("Dup", "Licate")).unwrap())
            .unwrap_err();
        assert!(matches!(err, RosterError::DuplicateId(EmployeeId(1))));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn update_replaces_in_place() {
        let mut store = StoreFixture::new().with_samples().store;
        let updated = store
            .update(EmployeeId(1), validate(fields("Jon", "Doe")).unwrap())
            .unwrap();
        assert_eq!(updated.id, EmployeeId(1));

        let list = store.list();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].name, "Jon");
        assert_eq!(list[1].name, "Jane");
    }

    #[test]
    fn update_missing_is_not_found() {
        let mut store = StoreFixture::new().store;
        let err = store
            .update(EmployeeId(5), validate(fields("A", "B")).unwrap())
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(store.is_empty());
    }

    #[test]
    fn remove_then_find_is_not_found() {
        let mut store = StoreFixture::new().with_samples().store;
        let removed = store.remove(EmployeeId(2)).unwrap();
        assert_eq!(removed.name, "Jane");
        assert!(store.find_by_id(EmployeeId(2)).unwrap_err().is_not_found());
        assert!(store.remove(EmployeeId(2)).unwrap_err().is_not_found());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn list_is_a_snapshot() {
        let mut store = StoreFixture::new().with_samples().store;
        let snapshot = store.list();
        store.remove(EmployeeId(1)).unwrap();
        store
            .update(EmployeeId(2), validate(fields("Changed", "Name")).unwrap())
            .unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[1].name, "Jane");
    }

    #[test]
    fn readding_moves_record_to_the_end() {
        let mut store = StoreFixture::new().with_samples().store;
        let removed = store.remove(EmployeeId(1)).unwrap();
        store
            .add(EmployeeId(3), validate(removed.fields()).unwrap())
            .unwrap();
        let ids: Vec<_> = store.list().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![EmployeeId(2), EmployeeId(3)]);
    }
}

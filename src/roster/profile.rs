use crate::model::{Employee, EmployeeId};

/// The record shown in detail view, if any.
///
/// Holds a copy taken at selection time. Later edits to the same record are
/// not reflected until it is selected again.
#[derive(Debug, Default)]
pub struct ProfileSelector {
    selected: Option<Employee>,
}

impl ProfileSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, employee: Employee) {
        self.selected = Some(employee);
    }

    /// Back to the list view.
    pub fn clear(&mut self) -> Option<Employee> {
        self.selected.take()
    }

    pub fn current(&self) -> Option<&Employee> {
        self.selected.as_ref()
    }

    pub fn shows(&self, id: EmployeeId) -> bool {
        self.selected.as_ref().is_some_and(|e| e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{fields, StoreFixture};
    use crate::store::EmployeeStore;
    use crate::validation::validate;

    #[test]
    fn select_and_clear() {
        let store = StoreFixture::new().with_samples().store;
        let mut profile = ProfileSelector::new();
        assert!(profile.current().is_none());

        profile.select(store.find_by_id(EmployeeId(1)).unwrap());
        assert!(profile.shows(EmployeeId(1)));

        let cleared = profile.clear().unwrap();
        assert_eq!(cleared.id, EmployeeId(1));
        assert!(profile.current().is_none());
    }

    #[test]
    fn holds_a_detached_copy() {
        let mut store = StoreFixture::new().with_samples().store;
        let mut profile = ProfileSelector::new();
        profile.select(store.find_by_id(EmployeeId(1)).unwrap());

        store
            .update(EmployeeId(1), validate(fields("Renamed", "Person")).unwrap())
            .unwrap();

        assert_eq!(profile.current().unwrap().name, "John");
    }
}

use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::EmployeeStore;

pub fn run<S: EmployeeStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed(store.list()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_in_insertion_order() {
        let store = StoreFixture::new()
            .with_employee(9, "Last", "In")
            .with_employee(3, "First", "Out")
            .store;
        let names: Vec<_> = run(&store)
            .unwrap()
            .listed
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["Last", "First"]);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = StoreFixture::new().store;
        assert!(run(&store).unwrap().listed.is_empty());
    }
}

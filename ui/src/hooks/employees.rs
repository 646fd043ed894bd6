use dioxus::prelude::*;
use types::{
    Entry, Id,
    employee::Employee,
    view::{DepartmentSummary, EmployeeDirectory, EmployeeView},
};

use super::{LoadState, Patch, load_into};

/// Employees together with departments and roles, kept in sync with the
/// server after every successful mutation.
#[derive(Clone, Copy, PartialEq)]
pub struct EmployeesHook {
    directory: Signal<EmployeeDirectory>,
    state: Signal<LoadState>,
}

pub fn use_employees() -> EmployeesHook {
    let directory = use_signal(EmployeeDirectory::default);
    let state = use_signal(LoadState::default);
    let hook = EmployeesHook { directory, state };

    use_effect(move || hook.retry());

    hook
}

impl EmployeesHook {
    pub fn state(&self) -> LoadState {
        self.state.read().clone()
    }

    pub fn directory(&self) -> EmployeeDirectory {
        self.directory.read().clone()
    }

    /// Employees with department and role names attached.
    pub fn views(&self) -> Vec<EmployeeView> {
        self.directory.read().views()
    }

    pub fn department_summaries(&self) -> Vec<DepartmentSummary> {
        self.directory.read().department_summaries()
    }

    pub fn retry(&self) {
        let hook = *self;
        spawn(async move {
            load_into(hook.directory, hook.state, api::load_employee_directory()).await;
        });
    }

    /// A blank query returns every cached employee without asking the server.
    pub async fn search(&self, query: String) -> ServerFnResult<Vec<EmployeeView>> {
        if let Some(views) = cached_search(&self.directory.read(), &query) {
            return Ok(views);
        }

        let found = api::search_employees(query).await?;
        Ok(self.directory.read().enrich(&found))
    }

    pub async fn create(&self, employee: Employee) -> ServerFnResult<Entry<Employee>> {
        let created = api::create_employee(employee).await?;
        self.patch(Patch::Created(created.clone()));
        Ok(created)
    }

    pub async fn update(&self, id: Id, employee: Employee) -> ServerFnResult<Entry<Employee>> {
        let updated = api::update_employee(id, employee).await?;
        self.patch(Patch::Updated(updated.clone()));
        Ok(updated)
    }

    pub async fn delete(&self, id: Id) -> ServerFnResult<()> {
        api::delete_employee(id).await?;
        self.patch(Patch::Deleted(id));
        Ok(())
    }

    fn patch(&self, patch: Patch<Employee>) {
        let mut directory = self.directory;
        patch.apply(&mut directory.write().employees);
    }
}

/// Answers a blank query from the cache: every employee, enriched. `None`
/// means the server has to search.
fn cached_search(directory: &EmployeeDirectory, query: &str) -> Option<Vec<EmployeeView>> {
    query.trim().is_empty().then(|| directory.views())
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use types::{
        department::Department,
        employee::{Address, EmployeeStatus},
        role::Role,
    };

    use super::*;

    fn directory() -> EmployeeDirectory {
        let employee = |id, first: &str| {
            Entry::new(
                Id::new(id),
                Employee {
                    first_name: first.into(),
                    last_name: "Doe".into(),
                    email: format!("{}@example.com", first.to_lowercase()),
                    phone: "555".into(),
                    department_id: Id::new(1),
                    role_id: Id::new(1),
                    status: EmployeeStatus::Active,
                    address: Address::default(),
                    join_date: date(2022, 5, 1),
                    photo_url: None,
                },
            )
        };

        EmployeeDirectory {
            employees: vec![employee(1, "Jane"), employee(2, "John")],
            departments: vec![Entry::new(
                Id::new(1),
                Department {
                    name: "Engineering".into(),
                    description: String::new(),
                    manager_id: None,
                },
            )],
            roles: vec![Entry::new(
                Id::new(1),
                Role {
                    name: "Engineer".into(),
                    description: String::new(),
                    level: 2,
                    permissions: Vec::new(),
                },
            )],
        }
    }

    #[test]
    fn blank_query_is_answered_from_cache() {
        let directory = directory();
        for query in ["", "   ", "\t\n"] {
            let views = cached_search(&directory, query).unwrap();
            assert_eq!(views, directory.views());
            assert_eq!(views.len(), 2);
            assert!(views.iter().all(|view| view.department == "Engineering"));
        }
    }

    #[test]
    fn real_query_goes_to_the_server() {
        assert!(cached_search(&directory(), " jane ").is_none());
    }
}

use std::sync::Arc;

use tracing::debug;
use types::{
    Entry, Id, Record, Result,
    attendance::AttendanceRecord,
    department::Department,
    employee::Employee,
    leave::LeaveRequest,
    role::Role,
    view::{AttendanceLedger, EmployeeDirectory, LeaveBook},
};

use crate::{
    latency::{Latency, Op},
    storage::{Store, Table},
};

mod attendance;
mod employee;
mod leave;

pub type EmployeeService = Service<Employee>;
pub type DepartmentService = Service<Department>;
pub type RoleService = Service<Role>;
pub type AttendanceService = Service<AttendanceRecord>;
pub type LeaveService = Service<LeaveRequest>;

/// Async CRUD over one collection, every call delayed by the configured
/// latency.
#[derive(Debug)]
pub struct Service<T> {
    table: Arc<Table<T>>,
    latency: Latency,
}

impl<T: Record> Service<T> {
    pub fn new(table: Arc<Table<T>>, latency: Latency) -> Self {
        Self { table, latency }
    }

    async fn pause(&self, op: Op) {
        self.latency.pause(T::KIND, op).await;
    }

    pub async fn get_all(&self) -> Result<Vec<Entry<T>>> {
        self.pause(Op::List).await;
        Ok(self.table.all().await)
    }

    pub async fn get_by_id(&self, id: Id) -> Result<Entry<T>> {
        self.pause(Op::Get).await;
        self.table.get(id).await
    }

    /// Stores `data` under the next id.
    pub async fn create(&self, data: T) -> Result<Entry<T>> {
        self.pause(Op::Create).await;
        data.validate().into_result()?;

        let entry = self.table.insert(data).await?;
        debug!("Created {} {}", T::KIND, entry.id);
        Ok(entry)
    }

    /// Replaces every field of the record; the id stays.
    pub async fn update(&self, id: Id, data: T) -> Result<Entry<T>> {
        self.pause(Op::Update).await;
        // An unknown id wins over invalid input.
        let replaced = self
            .table
            .modify(id, |current| {
                data.validate().into_result()?;
                data.check_update(current)?;
                *current = data;
                Ok(())
            })
            .await?;
        debug!("Updated {} {}", T::KIND, id);
        Ok(replaced.current)
    }

    /// Removes the record and returns what was stored.
    pub async fn delete(&self, id: Id) -> Result<Entry<T>> {
        self.pause(Op::Delete).await;
        let removed = self.table.remove(id).await?;
        debug!("Deleted {} {}", T::KIND, id);
        Ok(removed)
    }
}

/// One service per collection, all sharing a store.
#[derive(Debug)]
pub struct Services {
    pub employees: EmployeeService,
    pub departments: DepartmentService,
    pub roles: RoleService,
    pub attendance: AttendanceService,
    pub leave: LeaveService,
}

impl Services {
    pub fn new(store: &Store, latency: Latency) -> Self {
        Self {
            employees: Service::new(store.employees.clone(), latency),
            departments: Service::new(store.departments.clone(), latency),
            roles: Service::new(store.roles.clone(), latency),
            attendance: Service::new(store.attendance.clone(), latency),
            leave: Service::new(store.leave_requests.clone(), latency),
        }
    }

    /// Employees with the reference data needed to label them, fetched
    /// concurrently.
    pub async fn employee_directory(&self) -> Result<EmployeeDirectory> {
        let (employees, departments, roles) = tokio::try_join!(
            self.employees.get_all(),
            self.departments.get_all(),
            self.roles.get_all(),
        )?;

        Ok(EmployeeDirectory {
            employees,
            departments,
            roles,
        })
    }

    pub async fn attendance_ledger(&self) -> Result<AttendanceLedger> {
        let (attendance, employees) =
            tokio::try_join!(self.attendance.get_all(), self.employees.get_all())?;

        Ok(AttendanceLedger {
            attendance,
            employees,
        })
    }

    pub async fn leave_book(&self) -> Result<LeaveBook> {
        let (requests, employees) =
            tokio::try_join!(self.leave.get_all(), self.employees.get_all())?;

        Ok(LeaveBook {
            requests,
            employees,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use types::ErrorKind;

    use super::*;
    use crate::config::LatencyConfig;

    fn services() -> Services {
        Services::new(&Store::seeded().unwrap(), Latency::none())
    }

    fn department(name: &str) -> Department {
        Department {
            name: name.to_string(),
            description: String::new(),
            manager_id: None,
        }
    }

    #[tokio::test]
    async fn get_by_id_finds_seeded_record() {
        let services = services();
        let role = services.roles.get_by_id(Id::new(2)).await.unwrap();
        assert_eq!(role.name, "Engineering Manager");
    }

    #[tokio::test]
    async fn create_assigns_next_id() {
        let services = services();
        let created = services
            .departments
            .create(department("Legal"))
            .await
            .unwrap();
        assert_eq!(created.id, Id::new(6));

        let all = services.departments.get_all().await.unwrap();
        assert_eq!(all.last(), Some(&created));
    }

    #[tokio::test]
    async fn update_of_missing_id_is_not_found_even_when_invalid() {
        let services = services();
        let err = services
            .departments
            .update(Id::new(99), department(""))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(services.departments.get_all().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn update_replaces_all_fields() {
        let services = services();
        let updated = services
            .departments
            .update(Id::new(2), department("Growth"))
            .await
            .unwrap();
        assert_eq!(updated.id, Id::new(2));
        assert_eq!(updated.description, "");
        assert_eq!(updated.manager_id, None);
    }

    #[tokio::test]
    async fn delete_twice_is_not_found() {
        let services = services();
        let removed = services.roles.delete(Id::new(6)).await.unwrap();
        assert_eq!(removed.name, "Sales Representative");
        assert!(
            services
                .roles
                .delete(Id::new(6))
                .await
                .unwrap_err()
                .is_not_found()
        );
    }

    #[tokio::test]
    async fn aggregates_load_every_collection() {
        let services = services();
        let directory = services.employee_directory().await.unwrap();
        assert_eq!(directory.employees.len(), 8);
        assert_eq!(directory.departments.len(), 5);
        assert_eq!(directory.roles.len(), 6);

        let book = services.leave_book().await.unwrap();
        assert_eq!(book.requests.len(), 6);
        assert_eq!(book.employees.len(), 8);
    }

    #[tokio::test]
    async fn calls_wait_for_simulated_latency() {
        let latency = Latency::from_config(&LatencyConfig {
            enabled: true,
            scale: 0.05,
        });
        let services = Services::new(&Store::seeded().unwrap(), latency);

        let started = tokio::time::Instant::now();
        services.employees.get_all().await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(15));
    }
}

use std::sync::Arc;

use types::{
    Result, attendance::AttendanceRecord, department::Department, employee::Employee,
    leave::LeaveRequest, role::Role,
};

pub use seed::Seed;
pub use table::{Replaced, Table};

mod seed;
mod table;

/// Every collection the dashboard works with.
///
/// Tables are shared with the services through `Arc`, so a store built for a
/// test stays isolated from the process-wide one.
#[derive(Debug)]
pub struct Store {
    pub employees: Arc<Table<Employee>>,
    pub departments: Arc<Table<Department>>,
    pub roles: Arc<Table<Role>>,
    pub attendance: Arc<Table<AttendanceRecord>>,
    pub leave_requests: Arc<Table<LeaveRequest>>,
}

impl Store {
    pub fn from_seed(seed: Seed) -> Result<Self> {
        Ok(Self {
            employees: Arc::new(Table::new(seed.employees)?),
            departments: Arc::new(Table::new(seed.departments)?),
            roles: Arc::new(Table::new(seed.roles)?),
            attendance: Arc::new(Table::new(seed.attendance)?),
            leave_requests: Arc::new(Table::new(seed.leave_requests)?),
        })
    }

    /// The store populated with the bundled fixtures.
    pub fn seeded() -> Result<Self> {
        Self::from_seed(Seed::bundled()?)
    }

    pub fn empty() -> Self {
        Self {
            employees: Arc::default(),
            departments: Arc::default(),
            roles: Arc::default(),
            attendance: Arc::default(),
            leave_requests: Arc::default(),
        }
    }
}

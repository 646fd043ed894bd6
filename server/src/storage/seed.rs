use std::{fs, path::Path};

use types::{
    Entry, Record, Result, attendance::AttendanceRecord, department::Department,
    employee::Employee, err, leave::LeaveRequest, role::Role,
};

const EMPLOYEES: &str = "employees.json";
const DEPARTMENTS: &str = "departments.json";
const ROLES: &str = "roles.json";
const ATTENDANCE: &str = "attendance.json";
const LEAVE_REQUESTS: &str = "leave_requests.json";

/// Initial contents of every collection.
#[derive(Debug, Clone, Default)]
pub struct Seed {
    pub employees: Vec<Entry<Employee>>,
    pub departments: Vec<Entry<Department>>,
    pub roles: Vec<Entry<Role>>,
    pub attendance: Vec<Entry<AttendanceRecord>>,
    pub leave_requests: Vec<Entry<LeaveRequest>>,
}

impl Seed {
    /// The fixtures compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::load(None)
    }

    /// Reads each fixture from `dir` when it has one, otherwise uses the
    /// bundled copy.
    pub fn load(dir: Option<&Path>) -> Result<Self> {
        Ok(Self {
            employees: fixture(
                dir,
                EMPLOYEES,
                include_str!("../../seed/employees.json"),
            )?,
            departments: fixture(
                dir,
                DEPARTMENTS,
                include_str!("../../seed/departments.json"),
            )?,
            roles: fixture(dir, ROLES, include_str!("../../seed/roles.json"))?,
            attendance: fixture(
                dir,
                ATTENDANCE,
                include_str!("../../seed/attendance.json"),
            )?,
            leave_requests: fixture(
                dir,
                LEAVE_REQUESTS,
                include_str!("../../seed/leave_requests.json"),
            )?,
        })
    }
}

fn fixture<T: Record>(dir: Option<&Path>, name: &str, bundled: &str) -> Result<Vec<Entry<T>>> {
    let path = dir.map(|dir| dir.join(name)).filter(|path| path.is_file());

    let Some(path) = path else {
        return serde_json::from_str(bundled)
            .map_err(|e| err!("bundled fixture {name} is invalid: {e}"));
    };

    tracing::info!("Seeding {} from {}", T::KIND, path.display());
    let json = fs::read_to_string(&path)
        .map_err(|e| err!("failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&json).map_err(|e| err!("{} is invalid: {e}", path.display()))
}

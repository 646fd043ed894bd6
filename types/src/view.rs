//! Collections loaded together for one screen, and the joins that attach
//! readable names to foreign keys.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    Entry, Id,
    attendance::AttendanceRecord,
    department::Department,
    employee::Employee,
    leave::{LeaveRequest, LeaveStatus},
    role::Role,
};

/// Shown in place of a foreign key that resolves to nothing.
pub const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeView {
    pub entry: Entry<Employee>,
    pub department: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceView {
    pub entry: Entry<AttendanceRecord>,
    pub employee_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeaveView {
    pub entry: Entry<LeaveRequest>,
    pub employee_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentSummary {
    pub department: Entry<Department>,
    pub employee_count: usize,
    pub active_count: usize,
    pub manager: Option<String>,
}

fn lookup(names: &HashMap<Id, String>, id: Id) -> String {
    names.get(&id).map_or_else(|| UNKNOWN.to_string(), Clone::clone)
}

fn employee_names(employees: &[Entry<Employee>]) -> HashMap<Id, String> {
    employees
        .iter()
        .map(|employee| (employee.id, employee.full_name()))
        .collect()
}

/// Everything the employee and department screens need.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDirectory {
    pub employees: Vec<Entry<Employee>>,
    pub departments: Vec<Entry<Department>>,
    pub roles: Vec<Entry<Role>>,
}

impl EmployeeDirectory {
    pub fn views(&self) -> Vec<EmployeeView> {
        self.enrich(&self.employees)
    }

    /// Joins department and role names onto `employees`, which need not be
    /// the cached list (search results go through here too).
    pub fn enrich(&self, employees: &[Entry<Employee>]) -> Vec<EmployeeView> {
        let departments: HashMap<Id, String> = self
            .departments
            .iter()
            .map(|d| (d.id, d.name.clone()))
            .collect();
        let roles: HashMap<Id, String> = self
            .roles
            .iter()
            .map(|r| (r.id, r.name.clone()))
            .collect();

        employees
            .iter()
            .map(|employee| EmployeeView {
                department: lookup(&departments, employee.department_id),
                role: lookup(&roles, employee.role_id),
                entry: employee.clone(),
            })
            .collect()
    }

    pub fn department_summaries(&self) -> Vec<DepartmentSummary> {
        let names = employee_names(&self.employees);

        self.departments
            .iter()
            .map(|department| {
                let members = self
                    .employees
                    .iter()
                    .filter(|e| e.department_id == department.id);

                DepartmentSummary {
                    employee_count: members.clone().count(),
                    active_count: members.filter(|e| e.is_active()).count(),
                    manager: department
                        .manager_id
                        .and_then(|id| names.get(&id).cloned()),
                    department: department.clone(),
                }
            })
            .collect()
    }

    /// Members of one department, with their role names.
    pub fn members_of(&self, department_id: Id) -> Vec<EmployeeView> {
        let members: Vec<_> = self
            .employees
            .iter()
            .filter(|e| e.department_id == department_id)
            .cloned()
            .collect();
        self.enrich(&members)
    }
}

/// Attendance records and the employees they refer to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceLedger {
    pub attendance: Vec<Entry<AttendanceRecord>>,
    pub employees: Vec<Entry<Employee>>,
}

impl AttendanceLedger {
    pub fn views(&self) -> Vec<AttendanceView> {
        self.enrich(&self.attendance)
    }

    pub fn enrich(&self, records: &[Entry<AttendanceRecord>]) -> Vec<AttendanceView> {
        let names = employee_names(&self.employees);

        records
            .iter()
            .map(|record| AttendanceView {
                employee_name: lookup(&names, record.employee_id),
                entry: record.clone(),
            })
            .collect()
    }
}

/// Leave requests and the employees they refer to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaveBook {
    pub requests: Vec<Entry<LeaveRequest>>,
    pub employees: Vec<Entry<Employee>>,
}

impl LeaveBook {
    pub fn views(&self) -> Vec<LeaveView> {
        self.enrich(&self.requests)
    }

    pub fn enrich(&self, requests: &[Entry<LeaveRequest>]) -> Vec<LeaveView> {
        let names = employee_names(&self.employees);

        requests
            .iter()
            .map(|request| LeaveView {
                employee_name: lookup(&names, request.employee_id),
                entry: request.clone(),
            })
            .collect()
    }
}

/// Search box plus status dropdown of the leave screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaveFilter {
    pub query: String,
    /// `None` shows every status.
    pub status: Option<LeaveStatus>,
}

impl LeaveFilter {
    /// The query matches the employee name or the leave type, ignoring case.
    pub fn matches(&self, view: &LeaveView) -> bool {
        let needle = self.query.to_lowercase();
        let matches_query = view.employee_name.to_lowercase().contains(&needle)
            || view.entry.kind.as_str().contains(&needle);
        let matches_status = self.status.is_none_or(|status| view.entry.status == status);

        matches_query && matches_status
    }

    pub fn apply(&self, views: &[LeaveView]) -> Vec<LeaveView> {
        views.iter().filter(|v| self.matches(v)).cloned().collect()
    }
}

//! Form validation shared by the modals and the service boundary.
//!
//! Every check writes into a [`FieldErrors`] map keyed by field name; an empty
//! map means the input is valid.

use std::{collections::BTreeMap, sync::LazyLock};

use jiff::civil::Date;
use regex::Regex;

use crate::{
    Error, Id,
    employee::{Address, Employee, EmployeeStatus},
    leave::{LeaveRequest, LeaveStatus, LeaveType},
};

pub mod field {
    pub const FIRST_NAME: &str = "first_name";
    pub const LAST_NAME: &str = "last_name";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const DEPARTMENT: &str = "department_id";
    pub const ROLE: &str = "role_id";
    pub const EMPLOYEE: &str = "employee_id";
    pub const START_DATE: &str = "start_date";
    pub const END_DATE: &str = "end_date";
    pub const REASON: &str = "reason";
    pub const NAME: &str = "name";
}

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Drops the error for one field, as happens when the user edits it.
    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    pub fn into_result(self) -> Result<(), Error> {
        if self.is_empty() {
            return Ok(());
        }

        let message = self
            .iter()
            .map(|(_, message)| message)
            .collect::<Vec<_>>()
            .join("; ");
        Err(Error::invalid(message))
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

pub fn check_required(field: &'static str, value: &str, message: &str, errors: &mut FieldErrors) {
    if value.trim().is_empty() {
        errors.insert(field, message);
    }
}

pub(crate) fn check_person(
    first_name: &str,
    last_name: &str,
    email: &str,
    phone: &str,
    errors: &mut FieldErrors,
) {
    check_required(field::FIRST_NAME, first_name, "First name is required", errors);
    check_required(field::LAST_NAME, last_name, "Last name is required", errors);

    if email.trim().is_empty() {
        errors.insert(field::EMAIL, "Email is required");
    } else if !is_valid_email(email) {
        errors.insert(field::EMAIL, "Email is invalid");
    }

    check_required(field::PHONE, phone, "Phone is required", errors);
}

pub(crate) fn check_leave_dates(start: Option<Date>, end: Option<Date>, errors: &mut FieldErrors) {
    if start.is_none() {
        errors.insert(field::START_DATE, "Start date is required");
    }

    match (start, end) {
        (_, None) => errors.insert(field::END_DATE, "End date is required"),
        (Some(start), Some(end)) if start > end => {
            errors.insert(field::END_DATE, "End date must be after start date")
        }
        _ => {}
    }
}

/// Parses the value of an `<input type="date">`; empty or malformed is `None`.
pub fn parse_date_input(value: &str) -> Option<Date> {
    value.trim().parse().ok()
}

/// Editable state of the employee modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department_id: Option<Id>,
    pub role_id: Option<Id>,
    pub status: EmployeeStatus,
    pub address: Address,
}

impl EmployeeForm {
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone(),
            phone: employee.phone.clone(),
            department_id: Some(employee.department_id),
            role_id: Some(employee.role_id),
            status: employee.status,
            address: employee.address.clone(),
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        check_person(
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.phone,
            &mut errors,
        );

        if self.department_id.is_none() {
            errors.insert(field::DEPARTMENT, "Department is required");
        }

        if self.role_id.is_none() {
            errors.insert(field::ROLE, "Role is required");
        }

        errors
    }

    /// Builds the record to save. Editing keeps the join date and photo of
    /// `existing`; a new employee joins `today`.
    pub fn build(&self, existing: Option<&Employee>, today: Date) -> Result<Employee, FieldErrors> {
        let errors = self.validate();
        let (Some(department_id), Some(role_id)) = (self.department_id, self.role_id) else {
            return Err(errors);
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Employee {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            department_id,
            role_id,
            status: self.status,
            address: self.address.clone(),
            join_date: existing.map_or(today, |e| e.join_date),
            photo_url: existing.and_then(|e| e.photo_url.clone()),
        })
    }
}

/// Editable state of the leave request modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaveForm {
    pub employee_id: Option<Id>,
    pub kind: LeaveType,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub reason: String,
}

impl LeaveForm {
    pub fn from_request(request: &LeaveRequest) -> Self {
        Self {
            employee_id: Some(request.employee_id),
            kind: request.kind,
            start_date: Some(request.start_date),
            end_date: Some(request.end_date),
            reason: request.reason.clone(),
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();

        if self.employee_id.is_none() {
            errors.insert(field::EMPLOYEE, "Employee is required");
        }

        check_leave_dates(self.start_date, self.end_date, &mut errors);
        check_required(field::REASON, &self.reason, "Reason is required", &mut errors);
        errors
    }

    /// Builds the request to save. Editing keeps the request date and decision
    /// of `existing`; a new request is pending and dated `today`.
    pub fn build(&self, existing: Option<&LeaveRequest>, today: Date) -> Result<LeaveRequest, FieldErrors> {
        let errors = self.validate();
        let (Some(employee_id), Some(start_date), Some(end_date)) =
            (self.employee_id, self.start_date, self.end_date)
        else {
            return Err(errors);
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(LeaveRequest {
            employee_id,
            kind: self.kind,
            start_date,
            end_date,
            reason: self.reason.trim().to_string(),
            status: existing.map_or(LeaveStatus::Pending, |r| r.status),
            request_date: existing.map_or(today, |r| r.request_date),
            approved_by: existing.and_then(|r| r.approved_by),
        })
    }
}

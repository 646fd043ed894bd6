//! Server functions behind the dashboard. Each one forwards to the matching
//! service on the server and reports failures as a `ServerFnError` carrying
//! the service's message.

use dioxus::prelude::*;
use jiff::civil::Date;
use types::{
    Entry, Id,
    attendance::AttendanceRecord,
    department::Department,
    employee::Employee,
    leave::LeaveRequest,
    role::Role,
    view::{AttendanceLedger, EmployeeDirectory, LeaveBook},
};

#[post("/api/directory")]
pub async fn load_employee_directory() -> ServerFnResult<EmployeeDirectory> {
    Ok(server::services()?.employee_directory().await?)
}

#[post("/api/attendance/ledger")]
pub async fn load_attendance_ledger() -> ServerFnResult<AttendanceLedger> {
    Ok(server::services()?.attendance_ledger().await?)
}

#[post("/api/leave/book")]
pub async fn load_leave_book() -> ServerFnResult<LeaveBook> {
    Ok(server::services()?.leave_book().await?)
}

#[post("/api/employees")]
pub async fn list_employees() -> ServerFnResult<Vec<Entry<Employee>>> {
    Ok(server::services()?.employees.get_all().await?)
}

#[post("/api/employees/get")]
pub async fn get_employee(id: Id) -> ServerFnResult<Entry<Employee>> {
    Ok(server::services()?.employees.get_by_id(id).await?)
}

#[post("/api/employees/search")]
pub async fn search_employees(query: String) -> ServerFnResult<Vec<Entry<Employee>>> {
    Ok(server::services()?.employees.search(&query).await?)
}

#[post("/api/employees/create")]
pub async fn create_employee(employee: Employee) -> ServerFnResult<Entry<Employee>> {
    Ok(server::services()?.employees.create(employee).await?)
}

#[post("/api/employees/update")]
pub async fn update_employee(id: Id, employee: Employee) -> ServerFnResult<Entry<Employee>> {
    Ok(server::services()?.employees.update(id, employee).await?)
}

#[post("/api/employees/delete")]
pub async fn delete_employee(id: Id) -> ServerFnResult<Entry<Employee>> {
    Ok(server::services()?.employees.delete(id).await?)
}

#[post("/api/departments")]
pub async fn list_departments() -> ServerFnResult<Vec<Entry<Department>>> {
    Ok(server::services()?.departments.get_all().await?)
}

#[post("/api/departments/get")]
pub async fn get_department(id: Id) -> ServerFnResult<Entry<Department>> {
    Ok(server::services()?.departments.get_by_id(id).await?)
}

#[post("/api/departments/create")]
pub async fn create_department(department: Department) -> ServerFnResult<Entry<Department>> {
    Ok(server::services()?.departments.create(department).await?)
}

#[post("/api/departments/update")]
pub async fn update_department(
    id: Id,
    department: Department,
) -> ServerFnResult<Entry<Department>> {
    Ok(server::services()?.departments.update(id, department).await?)
}

#[post("/api/departments/delete")]
pub async fn delete_department(id: Id) -> ServerFnResult<Entry<Department>> {
    Ok(server::services()?.departments.delete(id).await?)
}

#[post("/api/roles")]
pub async fn list_roles() -> ServerFnResult<Vec<Entry<Role>>> {
    Ok(server::services()?.roles.get_all().await?)
}

#[post("/api/roles/get")]
pub async fn get_role(id: Id) -> ServerFnResult<Entry<Role>> {
    Ok(server::services()?.roles.get_by_id(id).await?)
}

#[post("/api/roles/create")]
pub async fn create_role(role: Role) -> ServerFnResult<Entry<Role>> {
    Ok(server::services()?.roles.create(role).await?)
}

#[post("/api/roles/update")]
pub async fn update_role(id: Id, role: Role) -> ServerFnResult<Entry<Role>> {
    Ok(server::services()?.roles.update(id, role).await?)
}

#[post("/api/roles/delete")]
pub async fn delete_role(id: Id) -> ServerFnResult<Entry<Role>> {
    Ok(server::services()?.roles.delete(id).await?)
}

#[post("/api/attendance")]
pub async fn list_attendance() -> ServerFnResult<Vec<Entry<AttendanceRecord>>> {
    Ok(server::services()?.attendance.get_all().await?)
}

#[post("/api/attendance/get")]
pub async fn get_attendance(id: Id) -> ServerFnResult<Entry<AttendanceRecord>> {
    Ok(server::services()?.attendance.get_by_id(id).await?)
}

#[post("/api/attendance/by-employee")]
pub async fn attendance_by_employee(
    employee_id: Id,
) -> ServerFnResult<Vec<Entry<AttendanceRecord>>> {
    Ok(server::services()?
        .attendance
        .get_by_employee(employee_id)
        .await?)
}

#[post("/api/attendance/between")]
pub async fn attendance_between(
    start: Date,
    end: Date,
) -> ServerFnResult<Vec<Entry<AttendanceRecord>>> {
    Ok(server::services()?
        .attendance
        .get_by_date_range(start, end)
        .await?)
}

#[post("/api/attendance/create")]
pub async fn create_attendance(record: AttendanceRecord) -> ServerFnResult<Entry<AttendanceRecord>> {
    Ok(server::services()?.attendance.create(record).await?)
}

#[post("/api/attendance/update")]
pub async fn update_attendance(
    id: Id,
    record: AttendanceRecord,
) -> ServerFnResult<Entry<AttendanceRecord>> {
    Ok(server::services()?.attendance.update(id, record).await?)
}

#[post("/api/attendance/delete")]
pub async fn delete_attendance(id: Id) -> ServerFnResult<Entry<AttendanceRecord>> {
    Ok(server::services()?.attendance.delete(id).await?)
}

#[post("/api/leave")]
pub async fn list_leave_requests() -> ServerFnResult<Vec<Entry<LeaveRequest>>> {
    Ok(server::services()?.leave.get_all().await?)
}

#[post("/api/leave/get")]
pub async fn get_leave_request(id: Id) -> ServerFnResult<Entry<LeaveRequest>> {
    Ok(server::services()?.leave.get_by_id(id).await?)
}

#[post("/api/leave/create")]
pub async fn create_leave_request(request: LeaveRequest) -> ServerFnResult<Entry<LeaveRequest>> {
    Ok(server::services()?.leave.create(request).await?)
}

#[post("/api/leave/update")]
pub async fn update_leave_request(
    id: Id,
    request: LeaveRequest,
) -> ServerFnResult<Entry<LeaveRequest>> {
    Ok(server::services()?.leave.update(id, request).await?)
}

#[post("/api/leave/delete")]
pub async fn delete_leave_request(id: Id) -> ServerFnResult<Entry<LeaveRequest>> {
    Ok(server::services()?.leave.delete(id).await?)
}

#[post("/api/leave/approve")]
pub async fn approve_leave_request(id: Id, approver: Id) -> ServerFnResult<Entry<LeaveRequest>> {
    Ok(server::services()?.leave.approve(id, approver).await?)
}

#[post("/api/leave/reject")]
pub async fn reject_leave_request(id: Id, approver: Id) -> ServerFnResult<Entry<LeaveRequest>> {
    Ok(server::services()?.leave.reject(id, approver).await?)
}

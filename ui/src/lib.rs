//! Data hooks and presentational pieces shared by the dashboard screens.

mod components;
mod hooks;

pub use components::{
    Avatar, ConfirmDialog, Empty, EmployeeCard, ErrorView, Loading, MetricCard, SearchBar,
    StatusBadge, Tone,
};
pub use hooks::{
    AttendanceHook, DEFAULT_APPROVER, EmployeesHook, LeaveRequestsHook, LoadState, error_message,
    use_attendance, use_employees, use_leave_requests,
};

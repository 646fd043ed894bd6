mod components;

mod dashboard;
pub use dashboard::Dashboard;

mod employees;
pub use employees::Employees;

mod attendance;
pub use attendance::Attendance;

mod leave;
pub use leave::LeaveRequests;

mod departments;
pub use departments::Departments;

mod not_found;
pub use not_found::PageNotFound;

use dioxus::prelude::*;
use types::{attendance::clock, metrics::DashboardMetrics};
use ui::{Empty, MetricCard, StatusBadge, Tone, use_attendance, use_employees, use_leave_requests};

use crate::{Route, today, views::components::LoadGate};

const RECENT: usize = 5;

#[component]
pub fn Dashboard() -> Element {
    let employees = use_employees();
    let leave = use_leave_requests();
    let attendance = use_attendance();
    let today = today();

    let metrics = DashboardMetrics::compute(
        &employees.directory().employees,
        &leave.requests(),
        &attendance.records(),
        today,
    );
    let pending: Vec<_> = leave
        .views()
        .into_iter()
        .filter(|view| view.entry.is_pending())
        .take(RECENT)
        .collect();
    let present: Vec<_> = attendance
        .views()
        .into_iter()
        .filter(|view| view.entry.date == today)
        .take(RECENT)
        .collect();

    rsx! {
        LoadGate {
            states: vec![employees.state(), leave.state(), attendance.state()],
            on_retry: move |_| {
                employees.retry();
                leave.retry();
                attendance.retry();
            },
            div { class: "metric-grid",
                MetricCard {
                    title: "Total Employees",
                    value: metrics.total_employees.to_string(),
                }
                MetricCard {
                    title: "Active Employees",
                    value: metrics.active_employees.to_string(),
                    detail: format!("{}% of staff", metrics.active_rate()),
                    accent: "text-success",
                }
                MetricCard {
                    title: "Pending Leave Requests",
                    value: metrics.pending_leaves.to_string(),
                    accent: "text-warning",
                }
                MetricCard {
                    title: "Present Today",
                    value: metrics.present_today.to_string(),
                }
            }
            div { class: "grid grid-cols-2",
                div { class: "card",
                    div { class: "card-header",
                        h2 { class: "card-title", "Pending Leave Requests" }
                        Link { to: Route::LeaveRequests {}, class: "card-link", "View all" }
                    }
                    if pending.is_empty() {
                        Empty { message: "No pending requests" }
                    } else {
                        ul { class: "list",
                            for view in pending {
                                li { key: "{view.entry.id}", class: "list-item",
                                    div {
                                        div { "{view.employee_name}" }
                                        div { class: "text-muted",
                                            "{view.entry.kind.label()} · {view.entry.start_date} to {view.entry.end_date}"
                                        }
                                    }
                                    StatusBadge {
                                        label: view.entry.status.label().to_string(),
                                        tone: Tone::from(view.entry.status),
                                    }
                                }
                            }
                        }
                    }
                }
                div { class: "card",
                    div { class: "card-header",
                        h2 { class: "card-title", "Today's Attendance" }
                        Link { to: Route::Attendance {}, class: "card-link", "View all" }
                    }
                    if present.is_empty() {
                        Empty { message: "No attendance recorded today" }
                    } else {
                        ul { class: "list",
                            for view in present {
                                li { key: "{view.entry.id}", class: "list-item",
                                    div {
                                        div { "{view.employee_name}" }
                                        div { class: "text-muted",
                                            "In {clock(view.entry.check_in)} · Out {clock(view.entry.check_out)}"
                                        }
                                    }
                                    StatusBadge {
                                        label: view.entry.status.label().to_string(),
                                        tone: Tone::from(view.entry.status),
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

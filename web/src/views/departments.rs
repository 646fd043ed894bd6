use dioxus::prelude::*;
use types::Id;
use ui::{Empty, StatusBadge, Tone, use_employees};

use crate::views::components::LoadGate;

#[component]
pub fn Departments() -> Element {
    let employees = use_employees();
    let mut selected = use_signal(|| None::<Id>);

    let summaries = employees.department_summaries();
    let members = selected().map(|id| employees.directory().members_of(id));
    let selected_name = selected().and_then(|id| {
        summaries
            .iter()
            .find(|summary| summary.department.id == id)
            .map(|summary| summary.department.name.clone())
    });

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Departments" }
                    p { class: "page-subtitle", "Headcount and members of each department." }
                }
            }

            LoadGate {
                states: vec![employees.state()],
                on_retry: move |_| employees.retry(),
                if summaries.is_empty() {
                    Empty { message: "No departments yet" }
                }
                div { class: "department-grid",
                    for summary in summaries {
                        {
                            let id = summary.department.id;
                            let is_selected = selected() == Some(id);
                            rsx! {
                                div {
                                    key: "{id}",
                                    class: if is_selected { "card department-card selected" } else { "card department-card" },
                                    onclick: move |_| {
                                        let next = if is_selected { None } else { Some(id) };
                                        selected.set(next);
                                    },
                                    h3 { class: "card-title", "{summary.department.name}" }
                                    p { class: "text-muted", "{summary.department.description}" }
                                    div { class: "department-stats",
                                        span { "{summary.employee_count} employees" }
                                        span { "{summary.active_count} active" }
                                    }
                                    div { class: "text-muted",
                                        "Manager: "
                                        {summary.manager.clone().unwrap_or_else(|| "Unassigned".to_string())}
                                    }
                                }
                            }
                        }
                    }
                }

                if let Some(members) = members {
                    div { class: "card",
                        div { class: "card-header",
                            h2 { class: "card-title",
                                {selected_name.unwrap_or_default()}
                                " members"
                            }
                        }
                        if members.is_empty() {
                            Empty { message: "No employees in this department" }
                        } else {
                            div { class: "table-container",
                                table {
                                    thead {
                                        tr {
                                            th { "Name" }
                                            th { "Role" }
                                            th { "Email" }
                                            th { "Status" }
                                        }
                                    }
                                    tbody {
                                        for member in members {
                                            tr { key: "{member.entry.id}",
                                                td { "{member.entry.full_name()}" }
                                                td { "{member.role}" }
                                                td { "{member.entry.email}" }
                                                td {
                                                    StatusBadge {
                                                        label: member.entry.status.label().to_string(),
                                                        tone: Tone::from(member.entry.status),
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
            }
        }
    }
}

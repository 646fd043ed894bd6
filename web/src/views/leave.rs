use dioxus::prelude::*;
use types::{
    Entry, Id,
    leave::{LeaveRequest, LeaveStatus, LeaveType},
    validation::{FieldErrors, LeaveForm, field, parse_date_input},
    view::LeaveFilter,
};
use ui::{ConfirmDialog, Empty, LeaveRequestsHook, SearchBar, StatusBadge, Tone, use_leave_requests};

use crate::{
    today, use_toast,
    views::components::{Editing, Field, LoadGate, ModalFrame, field_error},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decision {
    Approve,
    Reject,
}

#[component]
pub fn LeaveRequests() -> Element {
    let leave = use_leave_requests();
    let mut toast = use_toast();
    let mut filter = use_signal(LeaveFilter::default);
    let mut editing = use_signal(|| None::<Editing<LeaveRequest>>);
    let mut deleting = use_signal(|| None::<Entry<LeaveRequest>>);
    let mut busy = use_signal(|| false);
    // Request whose approval or rejection is in flight.
    let mut deciding = use_signal(|| None::<Id>);

    let decide = move |id: Id, decision: Decision| {
        spawn(async move {
            deciding.set(Some(id));
            let result = match decision {
                Decision::Approve => leave.approve(id, None).await,
                Decision::Reject => leave.reject(id, None).await,
            };
            match result {
                Ok(request) => {
                    toast.success(format!("Leave request {}", request.status.label().to_lowercase()));
                }
                Err(err) => toast.server_error(&err),
            }
            deciding.set(None);
        });
    };

    let rows = filter.read().apply(&leave.views());

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Leave Requests" }
                    p { class: "page-subtitle", "Review, approve and record time off." }
                }
                div { class: "page-header-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| editing.set(Some(Editing::New)),
                        "New Request"
                    }
                }
            }

            div { class: "filter-bar",
                SearchBar {
                    value: filter.read().query.clone(),
                    placeholder: "Search by employee or leave type...",
                    on_input: move |text| filter.write().query = text,
                }
                select {
                    class: "form-input",
                    onchange: move |e| filter.write().status = e.value().parse().ok(),
                    option { value: "all", selected: filter.read().status.is_none(), "All statuses" }
                    for status in LeaveStatus::ALL {
                        option {
                            key: "{status.as_str()}",
                            value: status.as_str(),
                            selected: filter.read().status == Some(*status),
                            "{status.label()}"
                        }
                    }
                }
            }

            if let Some(target) = editing() {
                LeaveModal {
                    leave,
                    target,
                    on_close: move |_| editing.set(None),
                }
            }

            if let Some(entry) = deleting() {
                ConfirmDialog {
                    title: "Delete Leave Request",
                    message: "Are you sure you want to delete this leave request?",
                    busy: busy(),
                    on_close: move |_| deleting.set(None),
                    on_confirm: move |_| {
                        let id = entry.id;
                        spawn(async move {
                            busy.set(true);
                            match leave.delete(id).await {
                                Ok(()) => {
                                    toast.success("Leave request deleted");
                                    deleting.set(None);
                                }
                                Err(err) => toast.server_error(&err),
                            }
                            busy.set(false);
                        });
                    },
                }
            }

            LoadGate {
                states: vec![leave.state()],
                on_retry: move |_| leave.retry(),
                if rows.is_empty() {
                    Empty { message: "No leave requests match" }
                } else {
                    div { class: "card",
                        div { class: "table-container",
                            table {
                                thead {
                                    tr {
                                        th { "Employee" }
                                        th { "Type" }
                                        th { "Dates" }
                                        th { "Reason" }
                                        th { "Requested" }
                                        th { "Status" }
                                        th {}
                                    }
                                }
                                tbody {
                                    for row in rows {
                                        {
                                            let id = row.entry.id;
                                            let pending = row.entry.is_pending();
                                            let in_flight = deciding() == Some(id);
                                            let edit = row.entry.clone();
                                            let delete = row.entry.clone();
                                            let request = &row.entry;
                                            rsx! {
                                                tr { key: "{id}",
                                                    td { "{row.employee_name}" }
                                                    td { "{request.kind.label()}" }
                                                    td { "{request.start_date} to {request.end_date}" }
                                                    td { "{request.reason}" }
                                                    td { "{request.request_date}" }
                                                    td {
                                                        StatusBadge {
                                                            label: request.status.label().to_string(),
                                                            tone: Tone::from(request.status),
                                                        }
                                                    }
                                                    td { class: "cell-actions",
                                                        if pending {
                                                            button {
                                                                class: "btn btn-success btn-sm",
                                                                disabled: in_flight,
                                                                onclick: move |_| decide(id, Decision::Approve),
                                                                "Approve"
                                                            }
                                                            button {
                                                                class: "btn btn-danger btn-sm",
                                                                disabled: in_flight,
                                                                onclick: move |_| decide(id, Decision::Reject),
                                                                "Reject"
                                                            }
                                                        }
                                                        button {
                                                            class: "btn btn-secondary btn-sm",
                                                            onclick: move |_| editing.set(Some(Editing::Existing(edit.clone()))),
                                                            "Edit"
                                                        }
                                                        button {
                                                            class: "btn btn-secondary btn-sm",
                                                            onclick: move |_| deleting.set(Some(delete.clone())),
                                                            "Delete"
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
}

#[component]
fn LeaveModal(
    leave: LeaveRequestsHook,
    target: Editing<LeaveRequest>,
    on_close: EventHandler<()>,
) -> Element {
    let mut toast = use_toast();
    let existing = target.entry().cloned();
    let mut form = use_signal(|| {
        existing
            .as_ref()
            .map(|entry| LeaveForm::from_request(entry))
            .unwrap_or_default()
    });
    let mut errors = use_signal(FieldErrors::default);
    let mut saving = use_signal(|| false);

    let employees = leave.employees();
    let is_edit = existing.is_some();
    let current_status = existing.as_ref().map(|entry| entry.status);
    let title = if is_edit { "Edit Leave Request" } else { "New Leave Request" };
    let date_value = |date: Option<jiff::civil::Date>| date.map(|d| d.to_string()).unwrap_or_default();
    let start_value = date_value(form.read().start_date);
    let end_value = date_value(form.read().end_date);

    let submit = move |_| {
        let built = form
            .read()
            .build(existing.as_ref().map(|entry| &entry.data), today());
        let request = match built {
            Ok(request) => request,
            Err(invalid) => {
                errors.set(invalid);
                return;
            }
        };

        let id = existing.as_ref().map(|entry| entry.id);
        spawn(async move {
            saving.set(true);
            let saved = match id {
                Some(id) => leave.update(id, request).await,
                None => leave.create(request).await,
            };
            saving.set(false);

            match saved {
                Ok(_) => {
                    toast.success("Leave request saved");
                    on_close.call(());
                }
                Err(err) => toast.server_error(&err),
            }
        });
    };

    rsx! {
        ModalFrame {
            title: title.to_string(),
            busy: saving(),
            on_close,
            on_submit: submit,
            Field { label: "Employee", id: "employee_id", error: field_error(errors, field::EMPLOYEE),
                select {
                    id: "employee_id",
                    class: "form-input",
                    onchange: move |e| {
                        form.write().employee_id = e.value().parse().ok();
                        errors.write().clear(field::EMPLOYEE);
                    },
                    option { value: "", selected: form.read().employee_id.is_none(), "Select employee" }
                    for employee in employees {
                        option {
                            key: "{employee.id}",
                            value: "{employee.id}",
                            selected: form.read().employee_id == Some(employee.id),
                            "{employee.full_name()}"
                        }
                    }
                }
            }
            Field { label: "Leave Type", id: "kind", error: None,
                select {
                    id: "kind",
                    class: "form-input",
                    onchange: move |e| {
                        if let Ok(kind) = e.value().parse::<LeaveType>() {
                            form.write().kind = kind;
                        }
                    },
                    for kind in LeaveType::ALL {
                        option {
                            key: "{kind.as_str()}",
                            value: kind.as_str(),
                            selected: form.read().kind == *kind,
                            "{kind.label()}"
                        }
                    }
                }
            }
            div { class: "form-row",
                Field { label: "Start Date", id: "start_date", error: field_error(errors, field::START_DATE),
                    input {
                        id: "start_date",
                        class: "form-input",
                        r#type: "date",
                        value: "{start_value}",
                        oninput: move |e| {
                            form.write().start_date = parse_date_input(&e.value());
                            errors.write().clear(field::START_DATE);
                            errors.write().clear(field::END_DATE);
                        },
                    }
                }
                Field { label: "End Date", id: "end_date", error: field_error(errors, field::END_DATE),
                    input {
                        id: "end_date",
                        class: "form-input",
                        r#type: "date",
                        value: "{end_value}",
                        oninput: move |e| {
                            form.write().end_date = parse_date_input(&e.value());
                            errors.write().clear(field::END_DATE);
                        },
                    }
                }
            }
            Field { label: "Reason", id: "reason", error: field_error(errors, field::REASON),
                textarea {
                    id: "reason",
                    class: "form-input",
                    rows: "3",
                    value: "{form.read().reason}",
                    oninput: move |e| {
                        form.write().reason = e.value();
                        errors.write().clear(field::REASON);
                    },
                }
            }
            if let Some(status) = current_status {
                Field { label: "Status", id: "status", error: None,
                    StatusBadge { label: status.label().to_string(), tone: Tone::from(status) }
                }
            }
        }
    }
}

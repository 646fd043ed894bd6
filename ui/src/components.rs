use dioxus::prelude::*;
use types::{
    attendance::AttendanceStatus, employee::EmployeeStatus, leave::LeaveStatus,
    view::EmployeeView,
};

/// Colour family of a [`StatusBadge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Neutral,
}

impl Tone {
    fn class(self) -> &'static str {
        match self {
            Self::Success => "badge badge-success",
            Self::Warning => "badge badge-warning",
            Self::Danger => "badge badge-danger",
            Self::Neutral => "badge badge-neutral",
        }
    }
}

impl From<EmployeeStatus> for Tone {
    fn from(status: EmployeeStatus) -> Self {
        match status {
            EmployeeStatus::Active => Self::Success,
            EmployeeStatus::OnLeave => Self::Warning,
            EmployeeStatus::Inactive => Self::Neutral,
        }
    }
}

impl From<AttendanceStatus> for Tone {
    fn from(status: AttendanceStatus) -> Self {
        match status {
            AttendanceStatus::Present => Self::Success,
            AttendanceStatus::Late => Self::Warning,
            AttendanceStatus::Absent => Self::Danger,
        }
    }
}

impl From<LeaveStatus> for Tone {
    fn from(status: LeaveStatus) -> Self {
        match status {
            LeaveStatus::Approved => Self::Success,
            LeaveStatus::Pending => Self::Warning,
            LeaveStatus::Rejected => Self::Danger,
        }
    }
}

#[component]
pub fn StatusBadge(label: String, tone: Tone) -> Element {
    rsx! {
        span { class: tone.class(), "{label}" }
    }
}

#[component]
pub fn MetricCard(
    title: String,
    value: String,
    #[props(default)] detail: String,
    #[props(default)] accent: String,
) -> Element {
    rsx! {
        div { class: "card metric-card",
            div { class: "metric-title", "{title}" }
            div { class: "metric-value {accent}", "{value}" }
            if !detail.is_empty() {
                div { class: "metric-detail", "{detail}" }
            }
        }
    }
}

#[component]
pub fn SearchBar(
    value: String,
    placeholder: String,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "search-bar",
            input {
                class: "form-input",
                r#type: "search",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |e| on_input.call(e.value()),
            }
        }
    }
}

#[component]
pub fn Avatar(initials: String, #[props(!optional)] photo_url: Option<String>) -> Element {
    rsx! {
        if let Some(url) = photo_url {
            img { class: "avatar", src: "{url}", alt: "{initials}" }
        } else {
            div { class: "avatar", "{initials}" }
        }
    }
}

#[component]
pub fn Loading(#[props(default = "Loading...".to_string())] message: String) -> Element {
    rsx! {
        div { class: "loading", "{message}" }
    }
}

/// A failed load with a way to try again.
#[component]
pub fn ErrorView(message: String, on_retry: EventHandler<()>) -> Element {
    rsx! {
        div { class: "card error-view",
            p { class: "error-view-message", "{message}" }
            button {
                class: "btn btn-secondary",
                onclick: move |_| on_retry.call(()),
                "Retry"
            }
        }
    }
}

#[component]
pub fn Empty(message: String) -> Element {
    rsx! {
        div { class: "empty-state", "{message}" }
    }
}

#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    busy: bool,
    on_close: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| if !busy { on_close.call(()) },
            div { class: "modal modal-sm",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    if !busy {
                        button {
                            class: "modal-close",
                            onclick: move |_| on_close.call(()),
                            "×"
                        }
                    }
                }
                div { class: "modal-body",
                    p { "{message}" }
                    p { class: "text-muted", "This action cannot be undone." }
                }
                div { class: "modal-footer",
                    button {
                        class: "btn btn-secondary",
                        disabled: busy,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-danger",
                        disabled: busy,
                        onclick: move |_| on_confirm.call(()),
                        if busy { "Working..." } else { "{confirm_label}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn EmployeeCard(
    view: EmployeeView,
    on_edit: EventHandler<()>,
    on_delete: EventHandler<()>,
) -> Element {
    let employee = &view.entry;
    let locality = employee.address.locality();

    rsx! {
        div { class: "card employee-card",
            div { class: "employee-card-header",
                Avatar { initials: employee.initials(), photo_url: employee.photo_url.clone() }
                div {
                    div { class: "employee-name", "{employee.full_name()}" }
                    div { class: "text-muted", "{view.role}" }
                }
                StatusBadge { label: employee.status.label().to_string(), tone: Tone::from(employee.status) }
            }
            div { class: "employee-card-body",
                div { "{employee.email}" }
                div { "{employee.phone}" }
                div { class: "text-muted", "{view.department}" }
                if !locality.is_empty() {
                    div { class: "text-muted", "{locality}" }
                }
            }
            div { class: "employee-card-actions",
                button {
                    class: "btn btn-secondary btn-sm",
                    onclick: move |_| on_edit.call(()),
                    "Edit"
                }
                button {
                    class: "btn btn-danger btn-sm",
                    onclick: move |_| on_delete.call(()),
                    "Delete"
                }
            }
        }
    }
}

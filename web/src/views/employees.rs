use dioxus::prelude::*;
use types::{
    Entry, Id,
    employee::{Employee, EmployeeStatus},
    validation::{EmployeeForm, FieldErrors, field},
};
use ui::{
    Avatar, ConfirmDialog, Empty, EmployeeCard, EmployeesHook, SearchBar, StatusBadge, Tone,
    use_employees,
};

use crate::{
    today, use_toast,
    views::components::{Editing, Field, LoadGate, ModalFrame, field_error},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    Grid,
    Table,
}

#[component]
pub fn Employees() -> Element {
    let employees = use_employees();
    let mut toast = use_toast();
    let mut query = use_signal(String::new);
    // Ids matched by the last search; `None` shows everyone.
    let mut matches = use_signal(|| None::<Vec<Id>>);
    let mut layout = use_signal(|| Layout::Grid);
    let mut editing = use_signal(|| None::<Editing<Employee>>);
    let mut deleting = use_signal(|| None::<Entry<Employee>>);
    let mut busy = use_signal(|| false);

    let run_search = move |text: String| {
        query.set(text.clone());
        spawn(async move {
            match employees.search(text.clone()).await {
                // A newer query may have been typed meanwhile.
                Ok(found) if *query.read() == text => {
                    let ids = found.iter().map(|view| view.entry.id).collect();
                    matches.set((!text.trim().is_empty()).then_some(ids));
                }
                Ok(_) => {}
                Err(err) => toast.server_error(&err),
            }
        });
    };

    let views: Vec<_> = match &*matches.read() {
        Some(ids) => employees
            .views()
            .into_iter()
            .filter(|view| ids.contains(&view.entry.id))
            .collect(),
        None => employees.views(),
    };

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Employees" }
                    p { class: "page-subtitle", "Browse, add and update staff records." }
                }
                div { class: "page-header-actions",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| {
                            let next = match layout() {
                                Layout::Grid => Layout::Table,
                                Layout::Table => Layout::Grid,
                            };
                            layout.set(next);
                        },
                        if layout() == Layout::Grid { "Table view" } else { "Grid view" }
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| editing.set(Some(Editing::New)),
                        "Add Employee"
                    }
                }
            }

            SearchBar {
                value: query(),
                placeholder: "Search by name or email...",
                on_input: run_search,
            }

            if let Some(target) = editing() {
                EmployeeModal {
                    employees,
                    target,
                    on_close: move |_| editing.set(None),
                }
            }

            if let Some(entry) = deleting() {
                ConfirmDialog {
                    title: "Delete Employee",
                    message: format!("Are you sure you want to delete {}?", entry.full_name()),
                    busy: busy(),
                    on_close: move |_| deleting.set(None),
                    on_confirm: move |_| {
                        let id = entry.id;
                        spawn(async move {
                            busy.set(true);
                            match employees.delete(id).await {
                                Ok(()) => {
                                    toast.success("Employee deleted");
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
                states: vec![employees.state()],
                on_retry: move |_| employees.retry(),
                if views.is_empty() {
                    Empty { message: "No employees found" }
                } else if layout() == Layout::Grid {
                    div { class: "employee-grid",
                        for view in views {
                            {
                                let key = view.entry.id;
                                let edit = view.entry.clone();
                                let delete = view.entry.clone();
                                rsx! {
                                    EmployeeCard {
                                        key: "{key}",
                                        view,
                                        on_edit: move |_| editing.set(Some(Editing::Existing(edit.clone()))),
                                        on_delete: move |_| deleting.set(Some(delete.clone())),
                                    }
                                }
                            }
                        }
                    }
                } else {
                    div { class: "card",
                        div { class: "table-container",
                            table {
                                thead {
                                    tr {
                                        th { "Name" }
                                        th { "Email" }
                                        th { "Department" }
                                        th { "Role" }
                                        th { "Status" }
                                        th { "Joined" }
                                        th {}
                                    }
                                }
                                tbody {
                                    for view in views {
                                        {
                                            let edit = view.entry.clone();
                                            let delete = view.entry.clone();
                                            let employee = &view.entry;
                                            rsx! {
                                                tr { key: "{employee.id}",
                                                    td { class: "cell-person",
                                                        Avatar {
                                                            initials: employee.initials(),
                                                            photo_url: employee.photo_url.clone(),
                                                        }
                                                        "{employee.full_name()}"
                                                    }
                                                    td { "{employee.email}" }
                                                    td { "{view.department}" }
                                                    td { "{view.role}" }
                                                    td {
                                                        StatusBadge {
                                                            label: employee.status.label().to_string(),
                                                            tone: Tone::from(employee.status),
                                                        }
                                                    }
                                                    td { "{employee.join_date}" }
                                                    td { class: "cell-actions",
                                                        button {
                                                            class: "btn btn-secondary btn-sm",
                                                            onclick: move |_| editing.set(Some(Editing::Existing(edit.clone()))),
                                                            "Edit"
                                                        }
                                                        button {
                                                            class: "btn btn-danger btn-sm",
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
fn EmployeeModal(
    employees: EmployeesHook,
    target: Editing<Employee>,
    on_close: EventHandler<()>,
) -> Element {
    let mut toast = use_toast();
    let existing = target.entry().cloned();
    let mut form = use_signal(|| {
        existing
            .as_ref()
            .map(|entry| EmployeeForm::from_employee(entry))
            .unwrap_or_default()
    });
    let mut errors = use_signal(FieldErrors::default);
    let mut saving = use_signal(|| false);

    let directory = employees.directory();
    let title = if existing.is_some() { "Edit Employee" } else { "Add Employee" };

    let submit = move |_| {
        let built = form
            .read()
            .build(existing.as_ref().map(|entry| &entry.data), today());
        let employee = match built {
            Ok(employee) => employee,
            Err(invalid) => {
                errors.set(invalid);
                return;
            }
        };

        let id = existing.as_ref().map(|entry| entry.id);
        spawn(async move {
            saving.set(true);
            let saved = match id {
                Some(id) => employees.update(id, employee).await,
                None => employees.create(employee).await,
            };
            saving.set(false);

            match saved {
                Ok(entry) => {
                    toast.success(format!("Saved {}", entry.full_name()));
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
            div { class: "form-row",
                Field { label: "First Name", id: "first_name", error: field_error(errors, field::FIRST_NAME),
                    input {
                        id: "first_name",
                        class: "form-input",
                        value: "{form.read().first_name}",
                        oninput: move |e| {
                            form.write().first_name = e.value();
                            errors.write().clear(field::FIRST_NAME);
                        },
                    }
                }
                Field { label: "Last Name", id: "last_name", error: field_error(errors, field::LAST_NAME),
                    input {
                        id: "last_name",
                        class: "form-input",
                        value: "{form.read().last_name}",
                        oninput: move |e| {
                            form.write().last_name = e.value();
                            errors.write().clear(field::LAST_NAME);
                        },
                    }
                }
            }
            div { class: "form-row",
                Field { label: "Email", id: "email", error: field_error(errors, field::EMAIL),
                    input {
                        id: "email",
                        class: "form-input",
                        r#type: "email",
                        value: "{form.read().email}",
                        oninput: move |e| {
                            form.write().email = e.value();
                            errors.write().clear(field::EMAIL);
                        },
                    }
                }
                Field { label: "Phone", id: "phone", error: field_error(errors, field::PHONE),
                    input {
                        id: "phone",
                        class: "form-input",
                        r#type: "tel",
                        value: "{form.read().phone}",
                        oninput: move |e| {
                            form.write().phone = e.value();
                            errors.write().clear(field::PHONE);
                        },
                    }
                }
            }
            div { class: "form-row",
                Field { label: "Department", id: "department_id", error: field_error(errors, field::DEPARTMENT),
                    select {
                        id: "department_id",
                        class: "form-input",
                        onchange: move |e| {
                            form.write().department_id = e.value().parse().ok();
                            errors.write().clear(field::DEPARTMENT);
                        },
                        option { value: "", selected: form.read().department_id.is_none(), "Select department" }
                        for department in directory.departments.iter() {
                            option {
                                key: "{department.id}",
                                value: "{department.id}",
                                selected: form.read().department_id == Some(department.id),
                                "{department.name}"
                            }
                        }
                    }
                }
                Field { label: "Role", id: "role_id", error: field_error(errors, field::ROLE),
                    select {
                        id: "role_id",
                        class: "form-input",
                        onchange: move |e| {
                            form.write().role_id = e.value().parse().ok();
                            errors.write().clear(field::ROLE);
                        },
                        option { value: "", selected: form.read().role_id.is_none(), "Select role" }
                        for role in directory.roles.iter() {
                            option {
                                key: "{role.id}",
                                value: "{role.id}",
                                selected: form.read().role_id == Some(role.id),
                                "{role.name}"
                            }
                        }
                    }
                }
            }
            Field { label: "Status", id: "status", error: None,
                select {
                    id: "status",
                    class: "form-input",
                    onchange: move |e| {
                        if let Ok(status) = e.value().parse::<EmployeeStatus>() {
                            form.write().status = status;
                        }
                    },
                    for status in EmployeeStatus::ALL {
                        option {
                            key: "{status.as_str()}",
                            value: status.as_str(),
                            selected: form.read().status == *status,
                            "{status.label()}"
                        }
                    }
                }
            }
            fieldset { class: "form-fieldset",
                legend { "Address" }
                Field { label: "Street", id: "street", error: None,
                    input {
                        id: "street",
                        class: "form-input",
                        value: "{form.read().address.street}",
                        oninput: move |e| form.write().address.street = e.value(),
                    }
                }
                div { class: "form-row",
                    Field { label: "City", id: "city", error: None,
                        input {
                            id: "city",
                            class: "form-input",
                            value: "{form.read().address.city}",
                            oninput: move |e| form.write().address.city = e.value(),
                        }
                    }
                    Field { label: "State", id: "state", error: None,
                        input {
                            id: "state",
                            class: "form-input",
                            value: "{form.read().address.state}",
                            oninput: move |e| form.write().address.state = e.value(),
                        }
                    }
                    Field { label: "ZIP Code", id: "zip_code", error: None,
                        input {
                            id: "zip_code",
                            class: "form-input",
                            value: "{form.read().address.zip_code}",
                            oninput: move |e| form.write().address.zip_code = e.value(),
                        }
                    }
                }
            }
        }
    }
}

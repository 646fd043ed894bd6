use dioxus::prelude::*;
use jiff::civil::Date;
use types::{
    Id,
    attendance::clock,
    calendar::{MonthGrid, WEEKDAYS},
    metrics::DayStats,
    validation::parse_date_input,
    view::AttendanceView,
};
use ui::{AttendanceHook, Empty, MetricCard, StatusBadge, Tone, use_attendance};

use crate::{today, use_toast, views::components::LoadGate};

#[component]
pub fn Attendance() -> Element {
    let attendance = use_attendance();
    let today = today();
    let mut selected = use_signal(move || today);
    let mut month = use_signal(move || MonthGrid::containing(today));

    let records = attendance.records();
    let day = selected();
    let headcount = attendance.employees().len();
    let stats = DayStats::for_day(records.iter().map(|entry| &entry.data), day, headcount);
    let daily: Vec<_> = attendance
        .views()
        .into_iter()
        .filter(|view| view.entry.date == day)
        .collect();
    let grid = month();

    rsx! {
        LoadGate {
            states: vec![attendance.state()],
            on_retry: move |_| attendance.retry(),
            div { class: "metric-grid",
                MetricCard { title: "Present", value: stats.present.to_string(), accent: "text-success" }
                MetricCard { title: "Late", value: stats.late.to_string(), accent: "text-warning" }
                MetricCard { title: "Absent", value: stats.absent.to_string(), accent: "text-danger" }
                MetricCard {
                    title: "Attendance Rate",
                    value: format!("{}%", stats.rate()),
                    detail: format!("{} of {} employees logged on {day}", stats.recorded, stats.total),
                }
            }
            div { class: "grid grid-cols-2",
                div { class: "card",
                    div { class: "card-header calendar-header",
                        button {
                            class: "btn btn-secondary btn-sm",
                            onclick: move |_| month.set(grid.previous()),
                            "‹"
                        }
                        h2 { class: "card-title", "{grid.title()}" }
                        button {
                            class: "btn btn-secondary btn-sm",
                            onclick: move |_| month.set(grid.next()),
                            "›"
                        }
                        button {
                            class: "btn btn-secondary btn-sm",
                            onclick: move |_| {
                                selected.set(today);
                                month.set(MonthGrid::containing(today));
                            },
                            "Today"
                        }
                    }
                    div { class: "calendar",
                        for weekday in WEEKDAYS {
                            div { key: "{weekday}", class: "calendar-weekday", "{weekday}" }
                        }
                        for blank in 0..grid.leading_blanks() {
                            div { key: "blank-{blank}", class: "calendar-blank" }
                        }
                        for date in grid.days() {
                            {
                                let status = records.iter().find(|entry| entry.date == date).map(|entry| entry.status);
                                let mut class = String::from("calendar-day");
                                if date == day {
                                    class.push_str(" selected");
                                }
                                if date == today {
                                    class.push_str(" today");
                                }
                                rsx! {
                                    button {
                                        key: "{date}",
                                        class,
                                        onclick: move |_| selected.set(date),
                                        span { "{date.day()}" }
                                        if let Some(status) = status {
                                            span { class: "dot dot-{status.as_str()}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                div { class: "card",
                    div { class: "card-header",
                        h2 { class: "card-title", {day.strftime("%B %-d, %Y").to_string()} }
                    }
                    AttendanceTable { rows: daily, empty: "No attendance recorded for this day" }
                }
            }
            AttendanceLookup { attendance }
        }
    }
}

/// Ad-hoc queries by employee or date range, fetched on demand.
#[component]
fn AttendanceLookup(attendance: AttendanceHook) -> Element {
    let mut toast = use_toast();
    let mut employee = use_signal(|| None::<Id>);
    let mut start = use_signal(|| None::<Date>);
    let mut end = use_signal(|| None::<Date>);
    let mut rows = use_signal(|| None::<Vec<AttendanceView>>);
    let mut searching = use_signal(|| false);

    let by_employee = move |_| {
        let Some(id) = employee() else {
            toast.error("Select an employee first");
            return;
        };
        spawn(async move {
            searching.set(true);
            match attendance.employee_attendance(id).await {
                Ok(found) => rows.set(Some(found)),
                Err(err) => toast.server_error(&err),
            }
            searching.set(false);
        });
    };

    let by_range = move |_| {
        let (Some(from), Some(to)) = (start(), end()) else {
            toast.error("Pick both a start and an end date");
            return;
        };
        spawn(async move {
            searching.set(true);
            match attendance.attendance_between(from, to).await {
                Ok(found) => rows.set(Some(found)),
                Err(err) => toast.server_error(&err),
            }
            searching.set(false);
        });
    };

    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "Lookup" }
            }
            div { class: "lookup-controls",
                select {
                    class: "form-input",
                    onchange: move |e| employee.set(e.value().parse().ok()),
                    option { value: "", "Select employee" }
                    for person in attendance.employees() {
                        option { key: "{person.id}", value: "{person.id}", "{person.full_name()}" }
                    }
                }
                button {
                    class: "btn btn-secondary",
                    disabled: searching(),
                    onclick: by_employee,
                    "Show history"
                }
                input {
                    class: "form-input",
                    r#type: "date",
                    oninput: move |e| start.set(parse_date_input(&e.value())),
                }
                input {
                    class: "form-input",
                    r#type: "date",
                    oninput: move |e| end.set(parse_date_input(&e.value())),
                }
                button {
                    class: "btn btn-secondary",
                    disabled: searching(),
                    onclick: by_range,
                    "Show range"
                }
            }
            if let Some(found) = rows() {
                AttendanceTable { rows: found, empty: "No matching records" }
            }
        }
    }
}

#[component]
fn AttendanceTable(rows: Vec<AttendanceView>, empty: String) -> Element {
    if rows.is_empty() {
        return rsx! {
            Empty { message: empty }
        };
    }

    rsx! {
        div { class: "table-container",
            table {
                thead {
                    tr {
                        th { "Employee" }
                        th { "Date" }
                        th { "Status" }
                        th { "Check In" }
                        th { "Check Out" }
                    }
                }
                tbody {
                    for row in rows {
                        tr { key: "{row.entry.id}",
                            td { "{row.employee_name}" }
                            td { "{row.entry.date}" }
                            td {
                                StatusBadge {
                                    label: row.entry.status.label().to_string(),
                                    tone: Tone::from(row.entry.status),
                                }
                            }
                            td { {clock(row.entry.check_in)} }
                            td { {clock(row.entry.check_out)} }
                        }
                    }
                }
            }
        }
    }
}

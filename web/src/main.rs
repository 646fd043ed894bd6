use dioxus::prelude::*;
use jiff::{Zoned, civil::Date};

mod views;

use views::{Attendance, Dashboard, Departments, Employees, LeaveRequests, PageNotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Dashboard {},
        #[route("/employees")]
        Employees {},
        #[route("/attendance")]
        Attendance {},
        #[route("/leave")]
        LeaveRequests {},
        #[route("/departments")]
        Departments {},
    #[end_layout]
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

impl Route {
    fn title(&self) -> &'static str {
        match self {
            Route::Dashboard {} => "Dashboard",
            Route::Employees {} => "Employees",
            Route::Attendance {} => "Attendance",
            Route::LeaveRequests {} => "Leave Requests",
            Route::Departments {} => "Departments",
            Route::PageNotFound { .. } => "Not Found",
        }
    }
}

/// The local calendar date.
pub fn today() -> Date {
    Zoned::now().date()
}

fn main() {
    #[cfg(feature = "server")]
    {
        server::init_tracing();
        dioxus::serve(|| async move {
            server::init()?;

            Ok(dioxus::server::router(App))
        });
    }

    #[cfg(all(feature = "web", not(feature = "server")))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "StaffDesk" }
        document::Link { rel: "icon", href: asset!("/assets/favicon.svg") }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}

#[component]
fn NavLink(to: Route, children: Element) -> Element {
    let current_route: Route = use_route();
    let is_active = current_route == to;

    rsx! {
        Link {
            to,
            class: if is_active { "active" },
            {children}
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

/// Notification shown above the page after an action - use `use_toast()`
#[derive(Clone, Copy)]
pub struct ToastState(Signal<Option<Toast>>);

impl ToastState {
    pub fn success(&mut self, message: impl Into<String>) {
        self.0.set(Some(Toast {
            kind: ToastKind::Success,
            message: message.into(),
        }));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.0.set(Some(Toast {
            kind: ToastKind::Error,
            message: message.into(),
        }));
    }

    pub fn server_error(&mut self, err: &ServerFnError) {
        tracing::warn!("Server call failed: {err}");
        self.error(ui::error_message(err));
    }

    pub fn clear(&mut self) {
        self.0.set(None);
    }
}

pub fn use_toast() -> ToastState {
    use_context::<ToastState>()
}

#[component]
fn ToastBanner() -> Element {
    let mut toast_state = use_toast();
    let toast = toast_state.0.read();

    let Some(toast) = toast.as_ref() else {
        return rsx! {};
    };

    let class = match toast.kind {
        ToastKind::Success => "toast toast-success",
        ToastKind::Error => "toast toast-error",
    };

    rsx! {
        div { class,
            span { class: "toast-message", "{toast.message}" }
            button {
                class: "toast-close",
                onclick: move |_| toast_state.clear(),
                "×"
            }
        }
    }
}

#[component]
fn Layout() -> Element {
    use_context_provider(|| ToastState(Signal::new(None)));
    let route: Route = use_route();
    let today = today().strftime("%A, %B %-d, %Y").to_string();

    rsx! {
        div { class: "app-layout",
            aside { class: "sidebar",
                div { class: "sidebar-header",
                    span { class: "sidebar-logo", "StaffDesk" }
                }
                nav { class: "sidebar-nav",
                    NavLink { to: Route::Dashboard {}, "Dashboard" }
                    NavLink { to: Route::Employees {}, "Employees" }
                    NavLink { to: Route::Attendance {}, "Attendance" }
                    NavLink { to: Route::LeaveRequests {}, "Leave Requests" }
                    NavLink { to: Route::Departments {}, "Departments" }
                }
            }
            main { class: "main-content",
                header { class: "top-bar",
                    h1 { class: "top-bar-title", "{route.title()}" }
                    span { class: "text-muted", "{today}" }
                }
                ToastBanner {}
                Outlet::<Route> {}
            }
        }
    }
}

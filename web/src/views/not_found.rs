use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "not-found",
            h1 { class: "page-title", "Page not found" }
            p { class: "text-muted", "Nothing lives at /{path}." }
            Link { to: Route::Dashboard {}, class: "btn btn-primary", "Back to dashboard" }
        }
    }
}

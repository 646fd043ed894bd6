use dioxus::prelude::*;
use types::{Entry, Id, validation::FieldErrors};
use ui::{ErrorView, LoadState, Loading};

/// What a modal is editing.
#[derive(Debug, Clone, PartialEq)]
pub enum Editing<T> {
    New,
    Existing(Entry<T>),
}

impl<T> Editing<T> {
    pub fn entry(&self) -> Option<&Entry<T>> {
        match self {
            Editing::New => None,
            Editing::Existing(entry) => Some(entry),
        }
    }

    pub fn id(&self) -> Option<Id> {
        self.entry().map(|entry| entry.id)
    }
}

pub fn field_error(errors: Signal<FieldErrors>, field: &str) -> Option<String> {
    errors.read().get(field).map(str::to_string)
}

/// Label, input and the input's validation message.
#[component]
pub fn Field(
    label: String,
    id: String,
    #[props(!optional)] error: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: "{id}", "{label}" }
            {children}
            if let Some(error) = error {
                span { class: "form-error", "{error}" }
            }
        }
    }
}

/// Shows the loading and failure states of a screen's data, and `children`
/// once everything has loaded.
#[component]
pub fn LoadGate(states: Vec<LoadState>, on_retry: EventHandler<()>, children: Element) -> Element {
    if let Some(message) = states.iter().find_map(LoadState::error) {
        return rsx! {
            ErrorView { message: message.to_string(), on_retry }
        };
    }

    if states.iter().any(LoadState::is_loading) {
        return rsx! {
            Loading {}
        };
    }

    children
}

#[component]
pub fn ModalFrame(
    title: String,
    busy: bool,
    on_close: EventHandler<()>,
    on_submit: EventHandler<()>,
    #[props(default = "Save".to_string())] submit_label: String,
    children: Element,
) -> Element {
    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| if !busy { on_close.call(()) },
            div { class: "modal",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    button {
                        class: "modal-close",
                        disabled: busy,
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                form {
                    onsubmit: move |e| {
                        e.prevent_default();
                        on_submit.call(());
                    },
                    div { class: "modal-body", {children} }
                    div { class: "modal-footer",
                        button {
                            r#type: "button",
                            class: "btn btn-secondary",
                            disabled: busy,
                            onclick: move |_| on_close.call(()),
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: busy,
                            if busy { "Saving..." } else { "{submit_label}" }
                        }
                    }
                }
            }
        }
    }
}

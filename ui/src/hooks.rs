use dioxus::prelude::*;
use types::{Entry, EntryList, Id};

mod attendance;
mod employees;
mod leave;

pub use attendance::{AttendanceHook, use_attendance};
pub use employees::{EmployeesHook, use_employees};
pub use leave::{LeaveRequestsHook, use_leave_requests};

/// Recorded as the approver when a manager decides a leave request.
pub const DEFAULT_APPROVER: Id = Id::new(1);

/// Progress of a hook's initial load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// The message a failed server call should show to the user.
pub fn error_message(err: &ServerFnError) -> String {
    match err {
        ServerFnError::ServerError { message, .. } => message.clone(),
        other => other.to_string(),
    }
}

/// A mutation the server accepted, to be mirrored in a cached collection.
#[derive(Debug, Clone, PartialEq)]
enum Patch<T> {
    Created(Entry<T>),
    Updated(Entry<T>),
    Deleted(Id),
}

impl<T> Patch<T> {
    fn apply(self, entries: &mut Vec<Entry<T>>) {
        match self {
            Self::Created(entry) => entries.push(entry),
            Self::Updated(entry) => entries.upsert(entry),
            Self::Deleted(id) => {
                entries.remove_id(id);
            }
        }
    }
}

/// Runs `load` and records the outcome in `state`, storing the data in
/// `target` on success. Earlier data is kept when a reload fails.
async fn load_into<T: 'static>(
    mut target: Signal<T>,
    mut state: Signal<LoadState>,
    load: impl Future<Output = ServerFnResult<T>>,
) {
    state.set(LoadState::Loading);
    match load.await {
        Ok(data) => {
            target.set(data);
            state.set(LoadState::Ready);
        }
        Err(err) => {
            let message = error_message(&err);
            tracing::warn!("Load failed: {message}");
            state.set(LoadState::Failed(message));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_loading() {
        let state = LoadState::default();
        assert!(state.is_loading());
        assert_eq!(state.error(), None);
    }

    fn entries() -> Vec<Entry<&'static str>> {
        vec![Entry::new(Id::new(1), "one"), Entry::new(Id::new(2), "two")]
    }

    #[test]
    fn created_is_appended() {
        let mut list = entries();
        Patch::Created(Entry::new(Id::new(3), "three")).apply(&mut list);
        assert_eq!(list.iter().map(|e| e.data).collect::<Vec<_>>(), ["one", "two", "three"]);
    }

    #[test]
    fn updated_replaces_in_place() {
        let mut list = entries();
        Patch::Updated(Entry::new(Id::new(1), "uno")).apply(&mut list);
        assert_eq!(list.iter().map(|e| e.data).collect::<Vec<_>>(), ["uno", "two"]);
    }

    #[test]
    fn deleted_drops_only_that_id() {
        let mut list = entries();
        Patch::Deleted(Id::new(2)).apply(&mut list);
        Patch::<&str>::Deleted(Id::new(9)).apply(&mut list);
        assert_eq!(list, vec![Entry::new(Id::new(1), "one")]);
    }

    #[test]
    fn failure_carries_message() {
        let state = LoadState::Failed("Employee not found".into());
        assert!(!state.is_loading());
        assert_eq!(state.error(), Some("Employee not found"));
    }
}

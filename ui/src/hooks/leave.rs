use dioxus::prelude::*;
use types::{
    Entry, Id,
    employee::Employee,
    leave::LeaveRequest,
    view::{LeaveBook, LeaveView},
};

use super::{DEFAULT_APPROVER, LoadState, Patch, load_into};

#[derive(Clone, Copy, PartialEq)]
pub struct LeaveRequestsHook {
    book: Signal<LeaveBook>,
    state: Signal<LoadState>,
}

pub fn use_leave_requests() -> LeaveRequestsHook {
    let book = use_signal(LeaveBook::default);
    let state = use_signal(LoadState::default);
    let hook = LeaveRequestsHook { book, state };

    use_effect(move || hook.retry());

    hook
}

impl LeaveRequestsHook {
    pub fn state(&self) -> LoadState {
        self.state.read().clone()
    }

    pub fn requests(&self) -> Vec<Entry<LeaveRequest>> {
        self.book.read().requests.clone()
    }

    /// Requests with the employee's name attached.
    pub fn views(&self) -> Vec<LeaveView> {
        self.book.read().views()
    }

    /// Employees known to the screen, for pickers and name lookups.
    pub fn employees(&self) -> Vec<Entry<Employee>> {
        self.book.read().employees.clone()
    }

    pub fn retry(&self) {
        let hook = *self;
        spawn(async move {
            load_into(hook.book, hook.state, api::load_leave_book()).await;
        });
    }

    pub async fn create(&self, request: LeaveRequest) -> ServerFnResult<Entry<LeaveRequest>> {
        let created = api::create_leave_request(request).await?;
        self.patch(Patch::Created(created.clone()));
        Ok(created)
    }

    pub async fn update(&self, id: Id, request: LeaveRequest) -> ServerFnResult<Entry<LeaveRequest>> {
        let updated = api::update_leave_request(id, request).await?;
        self.patch(Patch::Updated(updated.clone()));
        Ok(updated)
    }

    pub async fn delete(&self, id: Id) -> ServerFnResult<()> {
        api::delete_leave_request(id).await?;
        self.patch(Patch::Deleted(id));
        Ok(())
    }

    /// `None` records [`DEFAULT_APPROVER`] as the decider.
    pub async fn approve(
        &self,
        id: Id,
        approver: Option<Id>,
    ) -> ServerFnResult<Entry<LeaveRequest>> {
        let approver = approver.unwrap_or(DEFAULT_APPROVER);
        let approved = api::approve_leave_request(id, approver).await?;
        self.patch(Patch::Updated(approved.clone()));
        Ok(approved)
    }

    pub async fn reject(
        &self,
        id: Id,
        approver: Option<Id>,
    ) -> ServerFnResult<Entry<LeaveRequest>> {
        let approver = approver.unwrap_or(DEFAULT_APPROVER);
        let rejected = api::reject_leave_request(id, approver).await?;
        self.patch(Patch::Updated(rejected.clone()));
        Ok(rejected)
    }

    fn patch(&self, patch: Patch<LeaveRequest>) {
        let mut book = self.book;
        patch.apply(&mut book.write().requests);
    }
}

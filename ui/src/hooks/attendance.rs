use dioxus::prelude::*;
use jiff::civil::Date;
use types::{
    Entry, Id,
    attendance::AttendanceRecord,
    employee::Employee,
    view::{AttendanceLedger, AttendanceView},
};

use super::{LoadState, Patch, load_into};

#[derive(Clone, Copy, PartialEq)]
pub struct AttendanceHook {
    ledger: Signal<AttendanceLedger>,
    state: Signal<LoadState>,
}

pub fn use_attendance() -> AttendanceHook {
    let ledger = use_signal(AttendanceLedger::default);
    let state = use_signal(LoadState::default);
    let hook = AttendanceHook { ledger, state };

    use_effect(move || hook.retry());

    hook
}

impl AttendanceHook {
    pub fn state(&self) -> LoadState {
        self.state.read().clone()
    }

    pub fn records(&self) -> Vec<Entry<AttendanceRecord>> {
        self.ledger.read().attendance.clone()
    }

    /// Records with the employee's name attached.
    pub fn views(&self) -> Vec<AttendanceView> {
        self.ledger.read().views()
    }

    /// Employees known to the screen, for pickers and name lookups.
    pub fn employees(&self) -> Vec<Entry<Employee>> {
        self.ledger.read().employees.clone()
    }

    pub fn retry(&self) {
        let hook = *self;
        spawn(async move {
            load_into(hook.ledger, hook.state, api::load_attendance_ledger()).await;
        });
    }

    /// Fetched fresh; the cached list is left alone.
    pub async fn employee_attendance(&self, employee_id: Id) -> ServerFnResult<Vec<AttendanceView>> {
        let records = api::attendance_by_employee(employee_id).await?;
        Ok(self.ledger.read().enrich(&records))
    }

    /// Records from `start` through `end`, fetched fresh.
    pub async fn attendance_between(&self, start: Date, end: Date) -> ServerFnResult<Vec<AttendanceView>> {
        let records = api::attendance_between(start, end).await?;
        Ok(self.ledger.read().enrich(&records))
    }

    pub async fn create(&self, record: AttendanceRecord) -> ServerFnResult<Entry<AttendanceRecord>> {
        let created = api::create_attendance(record).await?;
        self.patch(Patch::Created(created.clone()));
        Ok(created)
    }

    pub async fn update(
        &self,
        id: Id,
        record: AttendanceRecord,
    ) -> ServerFnResult<Entry<AttendanceRecord>> {
        let updated = api::update_attendance(id, record).await?;
        self.patch(Patch::Updated(updated.clone()));
        Ok(updated)
    }

    pub async fn delete(&self, id: Id) -> ServerFnResult<()> {
        api::delete_attendance(id).await?;
        self.patch(Patch::Deleted(id));
        Ok(())
    }

    fn patch(&self, patch: Patch<AttendanceRecord>) {
        let mut ledger = self.ledger;
        patch.apply(&mut ledger.write().attendance);
    }
}

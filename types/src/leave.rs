use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::{
    EntityKind, Error, Id, Record, Result,
    validation::{self, FieldErrors},
};

labeled_enum! {
    #[derive(Default)]
    pub enum LeaveType {
        #[default]
        Vacation => ("vacation", "Vacation"),
        Sick => ("sick", "Sick Leave"),
        Personal => ("personal", "Personal"),
        Emergency => ("emergency", "Emergency"),
    }
}

labeled_enum! {
    #[derive(Default)]
    pub enum LeaveStatus {
        #[default]
        Pending => ("pending", "Pending"),
        Approved => ("approved", "Approved"),
        Rejected => ("rejected", "Rejected"),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub employee_id: Id,
    #[serde(rename = "type")]
    pub kind: LeaveType,
    pub start_date: Date,
    pub end_date: Date,
    pub reason: String,
    pub status: LeaveStatus,
    pub request_date: Date,
    #[serde(default)]
    pub approved_by: Option<Id>,
}

impl LeaveRequest {
    pub fn is_pending(&self) -> bool {
        self.status == LeaveStatus::Pending
    }

    /// Records an approval or rejection.
    ///
    /// Only pending requests can be decided; deciding twice is a conflict.
    pub fn decide(&mut self, decision: LeaveStatus, approver: Id) -> Result<()> {
        if decision == LeaveStatus::Pending {
            return Err(Error::invalid("a decision must approve or reject"));
        }

        if !self.is_pending() {
            return Err(Error::conflict(format!(
                "leave request is already {}",
                self.status
            )));
        }

        self.status = decision;
        self.approved_by = Some(approver);
        Ok(())
    }
}

impl Record for LeaveRequest {
    const KIND: EntityKind = EntityKind::LeaveRequest;

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        validation::check_leave_dates(Some(self.start_date), Some(self.end_date), &mut errors);
        validation::check_required(validation::field::REASON, &self.reason, "Reason is required", &mut errors);
        errors
    }

    /// Status and approver only change through [`LeaveRequest::decide`].
    fn check_update(&self, stored: &Self) -> Result<()> {
        if self.status != stored.status || self.approved_by != stored.approved_by {
            return Err(Error::conflict(
                "leave status changes go through approve or reject",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::ErrorKind;

    fn pending() -> LeaveRequest {
        LeaveRequest {
            employee_id: Id::new(3),
            kind: LeaveType::Sick,
            start_date: date(2024, 2, 1),
            end_date: date(2024, 2, 2),
            reason: "Flu".into(),
            status: LeaveStatus::Pending,
            request_date: date(2024, 1, 31),
            approved_by: None,
        }
    }

    #[test]
    fn decide_sets_status_and_approver() {
        let mut request = pending();
        request.decide(LeaveStatus::Rejected, Id::new(7)).unwrap();
        assert_eq!(request.status, LeaveStatus::Rejected);
        assert_eq!(request.approved_by, Some(Id::new(7)));
    }

    #[test]
    fn deciding_twice_conflicts() {
        let mut request = pending();
        request.decide(LeaveStatus::Approved, Id::new(1)).unwrap();
        let error = request.decide(LeaveStatus::Rejected, Id::new(2)).unwrap_err();
        assert_eq!(error.kind, ErrorKind::Conflict);
        assert_eq!(request.status, LeaveStatus::Approved);
        assert_eq!(request.approved_by, Some(Id::new(1)));
    }

    #[test]
    fn pending_is_not_a_decision() {
        let mut request = pending();
        let error = request.decide(LeaveStatus::Pending, Id::new(1)).unwrap_err();
        assert_eq!(error.kind, ErrorKind::Invalid);
    }

    #[test]
    fn type_field_keeps_its_wire_name() {
        let json = serde_json::to_value(pending()).unwrap();
        assert_eq!(json["type"], "sick");
        assert_eq!(json["startDate"], "2024-02-01");
    }

    #[test]
    fn defaults_are_vacation_and_pending() {
        assert_eq!(LeaveType::default(), LeaveType::Vacation);
        assert_eq!(LeaveStatus::default(), LeaveStatus::Pending);
        assert_eq!(crate::employee::EmployeeStatus::default().as_str(), "active");
    }

    #[test]
    fn plain_update_cannot_change_the_decision() {
        let mut stored = pending();
        stored.decide(LeaveStatus::Rejected, Id::new(7)).unwrap();

        let mut edited = stored.clone();
        edited.reason = "Flu, two days".into();
        assert!(edited.check_update(&stored).is_ok());

        edited.status = LeaveStatus::Approved;
        let error = edited.check_update(&stored).unwrap_err();
        assert_eq!(error.kind, ErrorKind::Conflict);
    }

    #[test]
    fn validation_rejects_reversed_dates() {
        let mut request = pending();
        request.end_date = date(2024, 1, 20);
        let errors = request.validate();
        assert_eq!(
            errors.get(validation::field::END_DATE),
            Some("End date must be after start date")
        );
    }
}

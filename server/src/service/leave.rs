use tracing::info;
use types::{
    Entry, Id, Result,
    leave::{LeaveRequest, LeaveStatus},
};

use super::LeaveService;
use crate::latency::Op;

impl LeaveService {
    pub async fn approve(&self, id: Id, approver: Id) -> Result<Entry<LeaveRequest>> {
        self.decide(id, LeaveStatus::Approved, approver).await
    }

    pub async fn reject(&self, id: Id, approver: Id) -> Result<Entry<LeaveRequest>> {
        self.decide(id, LeaveStatus::Rejected, approver).await
    }

    async fn decide(
        &self,
        id: Id,
        decision: LeaveStatus,
        approver: Id,
    ) -> Result<Entry<LeaveRequest>> {
        self.pause(Op::Decide).await;
        let replaced = self
            .table
            .modify(id, |request| request.decide(decision, approver))
            .await?;

        info!("Leave request {id} {decision} by employee {approver}");
        Ok(replaced.current)
    }
}

#[cfg(test)]
mod tests {
    use types::{ErrorKind, Id, leave::LeaveStatus};

    use crate::{latency::Latency, service::Services, storage::Store};

    fn services() -> Services {
        Services::new(&Store::seeded().unwrap(), Latency::none())
    }

    #[tokio::test]
    async fn reject_records_approver() {
        let services = services();
        let rejected = services.leave.reject(Id::new(5), Id::new(7)).await.unwrap();
        assert_eq!(rejected.status, LeaveStatus::Rejected);
        assert_eq!(rejected.approved_by, Some(Id::new(7)));

        let stored = services.leave.get_by_id(Id::new(5)).await.unwrap();
        assert_eq!(stored, rejected);
    }

    #[tokio::test]
    async fn approve_keeps_other_fields() {
        let services = services();
        let before = services.leave.get_by_id(Id::new(3)).await.unwrap();
        let approved = services.leave.approve(Id::new(3), Id::new(1)).await.unwrap();
        assert_eq!(approved.status, LeaveStatus::Approved);
        assert_eq!(approved.reason, before.reason);
        assert_eq!(approved.start_date, before.start_date);
    }

    #[tokio::test]
    async fn deciding_twice_conflicts() {
        let services = services();
        services.leave.approve(Id::new(6), Id::new(1)).await.unwrap();
        let err = services
            .leave
            .reject(Id::new(6), Id::new(1))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);

        let stored = services.leave.get_by_id(Id::new(6)).await.unwrap();
        assert_eq!(stored.status, LeaveStatus::Approved);
    }

    #[tokio::test]
    async fn update_cannot_overturn_a_decision() {
        let services = services();
        let rejected = services.leave.reject(Id::new(5), Id::new(7)).await.unwrap();

        let mut flipped = rejected.data.clone();
        flipped.status = LeaveStatus::Approved;
        let err = services
            .leave
            .update(Id::new(5), flipped)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);

        let stored = services.leave.get_by_id(Id::new(5)).await.unwrap();
        assert_eq!(stored.status, LeaveStatus::Rejected);
        assert_eq!(stored.approved_by, Some(Id::new(7)));
    }

    #[tokio::test]
    async fn update_keeps_editing_other_fields() {
        let services = services();
        let mut request = services.leave.get_by_id(Id::new(3)).await.unwrap().data;
        request.reason = "Moved to a later week".into();

        let updated = services.leave.update(Id::new(3), request).await.unwrap();
        assert_eq!(updated.reason, "Moved to a later week");
        assert!(updated.is_pending());
    }

    #[tokio::test]
    async fn unknown_request_is_not_found() {
        let err = services()
            .leave
            .approve(Id::new(99), Id::new(1))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}

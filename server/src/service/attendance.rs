use jiff::civil::Date;
use types::{Entry, Id, Result, attendance::AttendanceRecord};

use super::AttendanceService;
use crate::latency::Op;

impl AttendanceService {
    pub async fn get_by_employee(&self, employee_id: Id) -> Result<Vec<Entry<AttendanceRecord>>> {
        self.pause(Op::Query).await;
        Ok(self
            .table
            .filter(|record| record.employee_id == employee_id)
            .await)
    }

    /// Records dated from `start` through `end`, both included. An inverted
    /// range matches nothing.
    pub async fn get_by_date_range(
        &self,
        start: Date,
        end: Date,
    ) -> Result<Vec<Entry<AttendanceRecord>>> {
        self.pause(Op::Query).await;
        Ok(self.table.filter(|record| record.is_within(start, end)).await)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use types::Id;

    use crate::{latency::Latency, service::Services, storage::Store};

    fn services() -> Services {
        Services::new(&Store::seeded().unwrap(), Latency::none())
    }

    #[tokio::test]
    async fn by_employee_only_returns_their_records() {
        let records = services()
            .attendance
            .get_by_employee(Id::new(3))
            .await
            .unwrap();
        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.employee_id == Id::new(3)));
    }

    #[tokio::test]
    async fn unknown_employee_has_no_records() {
        let records = services()
            .attendance
            .get_by_employee(Id::new(42))
            .await
            .unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn date_range_includes_both_ends() {
        let services = services();
        let single = services
            .attendance
            .get_by_date_range(date(2024, 1, 15), date(2024, 1, 15))
            .await
            .unwrap();
        assert_eq!(single.len(), 8);

        let span = services
            .attendance
            .get_by_date_range(date(2024, 1, 15), date(2024, 1, 16))
            .await
            .unwrap();
        assert_eq!(span.len(), 16);
    }

    #[tokio::test]
    async fn inverted_range_is_empty() {
        let records = services()
            .attendance
            .get_by_date_range(date(2024, 1, 17), date(2024, 1, 15))
            .await
            .unwrap();
        assert!(records.is_empty());
    }
}

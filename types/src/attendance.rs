use jiff::civil::{Date, Time};
use serde::{Deserialize, Serialize};

use crate::{EntityKind, Id, Record};

labeled_enum! {
    pub enum AttendanceStatus {
        Present => ("present", "Present"),
        Absent => ("absent", "Absent"),
        Late => ("late", "Late"),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub employee_id: Id,
    pub date: Date,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub check_in: Option<Time>,
    #[serde(default)]
    pub check_out: Option<Time>,
}

impl AttendanceRecord {
    /// Inclusive on both ends.
    pub fn is_within(&self, start: Date, end: Date) -> bool {
        start <= self.date && self.date <= end
    }
}

impl Record for AttendanceRecord {
    const KIND: EntityKind = EntityKind::Attendance;
}

/// Renders a clock time as `HH:MM`, or a dash when missing.
pub fn clock(time: Option<Time>) -> String {
    time.map(|t| t.strftime("%H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, time};

    use super::*;

    fn record(on: Date) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: Id::new(1),
            date: on,
            status: AttendanceStatus::Present,
            check_in: Some(time(9, 0, 0, 0)),
            check_out: None,
        }
    }

    #[test]
    fn range_is_inclusive() {
        let start = date(2024, 1, 10);
        let end = date(2024, 1, 12);
        assert!(record(start).is_within(start, end));
        assert!(record(end).is_within(start, end));
        assert!(!record(date(2024, 1, 13)).is_within(start, end));
        assert!(!record(date(2024, 1, 9)).is_within(start, end));
    }

    #[test]
    fn parses_fixture_shape() {
        let parsed: AttendanceRecord = serde_json::from_str(
            r#"{"employeeId":4,"date":"2024-01-15","status":"late","checkIn":"09:25:00","checkOut":null}"#,
        )
        .unwrap();
        assert_eq!(parsed.status, AttendanceStatus::Late);
        assert_eq!(parsed.date, date(2024, 1, 15));
        assert_eq!(clock(parsed.check_in), "09:25");
        assert_eq!(clock(parsed.check_out), "-");
    }
}

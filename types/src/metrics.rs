use jiff::civil::Date;

use crate::{
    Entry,
    attendance::{AttendanceRecord, AttendanceStatus},
    employee::Employee,
    leave::LeaveRequest,
};

/// Headline numbers of the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardMetrics {
    pub total_employees: usize,
    pub active_employees: usize,
    pub pending_leaves: usize,
    pub present_today: usize,
}

impl DashboardMetrics {
    pub fn compute(
        employees: &[Entry<Employee>],
        requests: &[Entry<LeaveRequest>],
        attendance: &[Entry<AttendanceRecord>],
        today: Date,
    ) -> Self {
        Self {
            total_employees: employees.len(),
            active_employees: employees.iter().filter(|e| e.is_active()).count(),
            pending_leaves: requests.iter().filter(|r| r.is_pending()).count(),
            present_today: attendance
                .iter()
                .filter(|a| a.date == today && a.status == AttendanceStatus::Present)
                .count(),
        }
    }

    /// Share of employees that are active, as a whole percentage.
    pub fn active_rate(&self) -> u32 {
        percent(self.active_employees, self.total_employees)
    }
}

/// Attendance counts for a single day, measured against the headcount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayStats {
    pub present: usize,
    pub late: usize,
    pub absent: usize,
    /// Records logged that day.
    pub recorded: usize,
    /// Employees on the books.
    pub total: usize,
}

impl DayStats {
    pub fn for_day<'a>(
        records: impl IntoIterator<Item = &'a AttendanceRecord>,
        day: Date,
        headcount: usize,
    ) -> Self {
        let mut stats = Self {
            total: headcount,
            ..Self::default()
        };
        for record in records.into_iter().filter(|r| r.date == day) {
            stats.recorded += 1;
            match record.status {
                AttendanceStatus::Present => stats.present += 1,
                AttendanceStatus::Late => stats.late += 1,
                AttendanceStatus::Absent => stats.absent += 1,
            }
        }
        stats
    }

    /// Present share of the headcount, rounded; 0 with no employees.
    pub fn rate(&self) -> u32 {
        percent(self.present, self.total)
    }
}

fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::Id;

    fn record(day: Date, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: Id::new(1),
            date: day,
            status,
            check_in: None,
            check_out: None,
        }
    }

    #[test]
    fn day_stats_only_count_that_day() {
        let day = date(2024, 1, 15);
        let records = [
            record(day, AttendanceStatus::Present),
            record(day, AttendanceStatus::Present),
            record(day, AttendanceStatus::Late),
            record(day, AttendanceStatus::Absent),
            record(date(2024, 1, 16), AttendanceStatus::Present),
        ];

        let stats = DayStats::for_day(&records, day, 4);
        assert_eq!(
            stats,
            DayStats {
                present: 2,
                late: 1,
                absent: 1,
                recorded: 4,
                total: 4
            }
        );
        assert_eq!(stats.rate(), 50);
    }

    #[test]
    fn rate_is_against_headcount_not_records() {
        let day = date(2024, 1, 15);
        let records = [record(day, AttendanceStatus::Present)];

        let stats = DayStats::for_day(&records, day, 8);
        assert_eq!(stats.recorded, 1);
        assert_eq!(stats.total, 8);
        assert_eq!(stats.rate(), 13);
    }

    #[test]
    fn rate_rounds_and_handles_empty_staff() {
        assert_eq!(DayStats::default().rate(), 0);
        let stats = DayStats {
            present: 2,
            late: 1,
            absent: 0,
            recorded: 3,
            total: 3,
        };
        assert_eq!(stats.rate(), 67);
    }

    #[test]
    fn dashboard_counts_present_today_only() {
        let today = date(2024, 1, 15);
        let attendance = vec![
            Entry::new(Id::new(1), record(today, AttendanceStatus::Present)),
            Entry::new(Id::new(2), record(today, AttendanceStatus::Late)),
            Entry::new(Id::new(3), record(date(2024, 1, 14), AttendanceStatus::Present)),
        ];

        let metrics = DashboardMetrics::compute(&[], &[], &attendance, today);
        assert_eq!(metrics.present_today, 1);
        assert_eq!(metrics.total_employees, 0);
        assert_eq!(metrics.active_rate(), 0);
    }
}

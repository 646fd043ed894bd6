use jiff::{ToSpan, civil::Date};

pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// One month of the attendance calendar, laid out Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    first: Date,
}

impl MonthGrid {
    pub fn containing(day: Date) -> Self {
        Self {
            first: day.first_of_month(),
        }
    }

    pub fn previous(self) -> Self {
        Self::containing(self.first.saturating_sub(1.month()))
    }

    pub fn next(self) -> Self {
        Self::containing(self.first.saturating_add(1.month()))
    }

    /// e.g. "January 2024"
    pub fn title(self) -> String {
        self.first.strftime("%B %Y").to_string()
    }

    /// Empty cells before the first day so it lands under its weekday.
    pub fn leading_blanks(self) -> usize {
        self.first.weekday().to_sunday_zero_offset() as usize
    }

    pub fn days(self) -> impl Iterator<Item = Date> {
        self.first
            .series(1.day())
            .take(self.first.days_in_month() as usize)
    }

    pub fn contains(self, day: Date) -> bool {
        day.year() == self.first.year() && day.month() == self.first.month()
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn leap_february_has_29_days() {
        let grid = MonthGrid::containing(date(2024, 2, 17));
        let days: Vec<_> = grid.days().collect();
        assert_eq!(days.len(), 29);
        assert_eq!(days.first(), Some(&date(2024, 2, 1)));
        assert_eq!(days.last(), Some(&date(2024, 2, 29)));
    }

    #[test]
    fn first_day_is_aligned_to_its_weekday() {
        // 2024-09-01 is a Sunday, 2024-08-01 a Thursday.
        assert_eq!(MonthGrid::containing(date(2024, 9, 10)).leading_blanks(), 0);
        assert_eq!(MonthGrid::containing(date(2024, 8, 10)).leading_blanks(), 4);
    }

    #[test]
    fn navigation_crosses_years() {
        let january = MonthGrid::containing(date(2024, 1, 31));
        assert_eq!(january.previous(), MonthGrid::containing(date(2023, 12, 1)));
        assert_eq!(january.next(), MonthGrid::containing(date(2024, 2, 5)));
        assert_eq!(january.title(), "January 2024");
    }

    #[test]
    fn contains_checks_year_and_month() {
        let grid = MonthGrid::containing(date(2024, 3, 1));
        assert!(grid.contains(date(2024, 3, 31)));
        assert!(!grid.contains(date(2023, 3, 15)));
    }
}

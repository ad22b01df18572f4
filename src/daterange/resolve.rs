use chrono::NaiveDate;
use tracing::debug;
use super::types::DateRange;
use super::calendar::Calendar;

/// A concrete, inclusive pair of dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolvedRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl ResolvedRange {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        ResolvedRange { start_date, end_date }
    }

    pub fn single(date: NaiveDate) -> Self {
        ResolvedRange::new(date, date)
    }

    /// Number of days covered, counting both ends.
    pub fn num_days(&self) -> i64 {
        self.end_date.signed_duration_since(self.start_date).num_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

impl From<ResolvedRange> for DateRange {
    fn from(range: ResolvedRange) -> Self {
        DateRange::Custom(range.start_date, range.end_date)
    }
}

impl DateRange {
    /// Concrete dates for this range, or `None` for the separator and for
    /// ranges that fall outside the representable calendar.
    ///
    /// Panics on `PastDays(0)`.
    pub fn resolve<C: Calendar + ?Sized>(&self, calendar: &C) -> Option<ResolvedRange> {
        let resolved = match *self {
            DateRange::Custom(start_date, end_date) => Some(ResolvedRange::new(start_date, end_date)),
            DateRange::PastDays(days) => {
                assert!(days >= 1, "PastDays requires at least one day, got {days}");
                let today = calendar.today();
                calendar.add_days(today, -(days as i64 - 1))
                    .map(|start_date| ResolvedRange::new(start_date, today))
            }
            DateRange::CalendarUnit(offset, unit) => {
                let today = calendar.today();
                calendar.unit_interval(today, unit)
                    .and_then(|current| calendar.add_units(current.start_date, unit, offset))
                    .and_then(|shifted| calendar.unit_interval(shifted, unit))
            }
            DateRange::None => None,
        };
        debug!(range = %self, ?resolved, "resolved date range");
        resolved
    }

    pub fn start_date<C: Calendar + ?Sized>(&self, calendar: &C) -> Option<NaiveDate> {
        self.resolve(calendar).map(|range| range.start_date)
    }

    pub fn end_date<C: Calendar + ?Sized>(&self, calendar: &C) -> Option<NaiveDate> {
        self.resolve(calendar).map(|range| range.end_date)
    }
}

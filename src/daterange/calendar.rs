use chrono::{Datelike, Days, Local, Months, NaiveDate, Weekday};
use super::types::{CalendarUnit, UnitOffset};
use super::resolve::ResolvedRange;

/// Date arithmetic provided by the host environment.
pub trait Calendar {
    fn today(&self) -> NaiveDate;

    fn add_days(&self, date: NaiveDate, days: i64) -> Option<NaiveDate>;

    /// Moves `date` by `offset` whole units.
    fn add_units(&self, date: NaiveDate, unit: CalendarUnit, offset: UnitOffset) -> Option<NaiveDate>;

    /// The first and last day of the unit containing `date`.
    fn unit_interval(&self, date: NaiveDate, unit: CalendarUnit) -> Option<ResolvedRange>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GregorianCalendar {
    pub first_weekday: Weekday,
    pinned_today: Option<NaiveDate>,
}

impl GregorianCalendar {
    pub fn new(first_weekday: Weekday) -> Self {
        GregorianCalendar {
            first_weekday,
            pinned_today: None,
        }
    }

    /// A calendar whose `today` never moves.
    pub fn pinned(today: NaiveDate) -> Self {
        GregorianCalendar {
            first_weekday: Weekday::Mon,
            pinned_today: Some(today),
        }
    }

    pub fn with_first_weekday(self, first_weekday: Weekday) -> Self {
        GregorianCalendar { first_weekday, ..self }
    }

    fn add_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
        let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
        if months >= 0 {
            date.checked_add_months(magnitude)
        } else {
            date.checked_sub_months(magnitude)
        }
    }

    fn days_into_week(&self, date: NaiveDate) -> i64 {
        let weekday = date.weekday().num_days_from_monday() as i64;
        let first = self.first_weekday.num_days_from_monday() as i64;
        (weekday - first).rem_euclid(7)
    }
}

impl Default for GregorianCalendar {
    fn default() -> Self {
        GregorianCalendar::new(Weekday::Mon)
    }
}

impl Calendar for GregorianCalendar {
    fn today(&self) -> NaiveDate {
        self.pinned_today.unwrap_or_else(|| Local::now().date_naive())
    }

    fn add_days(&self, date: NaiveDate, days: i64) -> Option<NaiveDate> {
        let magnitude = Days::new(days.unsigned_abs());
        if days >= 0 {
            date.checked_add_days(magnitude)
        } else {
            date.checked_sub_days(magnitude)
        }
    }

    fn add_units(&self, date: NaiveDate, unit: CalendarUnit, offset: UnitOffset) -> Option<NaiveDate> {
        match unit.months() {
            Some(months) => Self::add_months(date, offset as i64 * months as i64),
            None => self.add_days(date, offset as i64 * 7),
        }
    }

    fn unit_interval(&self, date: NaiveDate, unit: CalendarUnit) -> Option<ResolvedRange> {
        let start = match unit {
            CalendarUnit::WeekOfYear => {
                let start = self.add_days(date, -self.days_into_week(date))?;
                let end = self.add_days(start, 6)?;
                return Some(ResolvedRange::new(start, end));
            }
            CalendarUnit::Month => date.with_day(1)?,
            CalendarUnit::Quarter => {
                let first_month = date.month0() / 3 * 3 + 1;
                NaiveDate::from_ymd_opt(date.year(), first_month, 1)?
            }
            CalendarUnit::Year => NaiveDate::from_ymd_opt(date.year(), 1, 1)?,
        };
        // month-based units end the day before the next unit starts
        let months = unit.months()? as i64;
        let end = Self::add_months(start, months)?.pred_opt()?;
        Some(ResolvedRange::new(start, end))
    }
}

use std::fmt;
use serde::{Serialize, Deserialize};
use chrono::NaiveDate;

pub type Days = u32;
pub type UnitOffset = i32;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarUnit {
    WeekOfYear,
    Month,
    Quarter,
    Year,
}

impl CalendarUnit {
    pub const ALL: [CalendarUnit; 4] = [
        CalendarUnit::WeekOfYear,
        CalendarUnit::Month,
        CalendarUnit::Quarter,
        CalendarUnit::Year,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CalendarUnit::WeekOfYear => "Week",
            CalendarUnit::Month => "Month",
            CalendarUnit::Quarter => "Quarter",
            CalendarUnit::Year => "Year",
        }
    }

    /// Length of the unit in months, for the month-based units.
    pub fn months(&self) -> Option<u32> {
        match self {
            CalendarUnit::WeekOfYear => None,
            CalendarUnit::Month => Some(1),
            CalendarUnit::Quarter => Some(3),
            CalendarUnit::Year => Some(12),
        }
    }
}

/// Describes how a start/end date pair is derived.
///
/// `None` is a menu separator and never carries dates.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateRange {
    Custom(NaiveDate, NaiveDate),
    PastDays(Days),
    CalendarUnit(UnitOffset, CalendarUnit),
    None,
}

impl DateRange {
    /// Rolling window of `days` days ending today. Panics if `days` is zero.
    pub fn past_days(days: Days) -> Self {
        assert!(days >= 1, "PastDays requires at least one day, got {days}");
        DateRange::PastDays(days)
    }

    pub fn this(unit: CalendarUnit) -> Self {
        DateRange::CalendarUnit(0, unit)
    }

    pub fn last(unit: CalendarUnit) -> Self {
        DateRange::CalendarUnit(-1, unit)
    }

    pub fn is_selectable(&self) -> bool {
        !matches!(self, DateRange::None)
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, DateRange::Custom(..))
    }

    pub fn title(&self) -> String {
        match self {
            DateRange::Custom(..) => "Custom".to_string(),
            DateRange::PastDays(days) => format!("Last {days} Days"),
            DateRange::CalendarUnit(0, unit) => format!("This {}", unit.name()),
            DateRange::CalendarUnit(-1, unit) => format!("Last {}", unit.name()),
            DateRange::CalendarUnit(offset, unit) => format!("{} (offset {offset})", unit.name()),
            DateRange::None => String::new(),
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title())
    }
}

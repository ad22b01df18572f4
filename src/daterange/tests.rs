use chrono::{Datelike, NaiveDate, Weekday};
use super::*;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn calendar() -> GregorianCalendar {
    GregorianCalendar::pinned(date(2024, 3, 15))
}

fn resolved(range: DateRange) -> (NaiveDate, NaiveDate) {
    let resolved = range.resolve(&calendar()).unwrap();
    (resolved.start_date, resolved.end_date)
}

#[test]
fn test_custom_resolves_unchanged() {
    let range = DateRange::Custom(date(2024, 5, 1), date(2024, 4, 1));
    assert_eq!(resolved(range), (date(2024, 5, 1), date(2024, 4, 1)));
}

#[test]
fn test_past_seven_days() {
    assert_eq!(resolved(DateRange::PastDays(7)), (date(2024, 3, 9), date(2024, 3, 15)));
    assert_eq!(resolved(DateRange::PastDays(1)), (date(2024, 3, 15), date(2024, 3, 15)));
}

#[test]
fn test_past_days_ends_today_and_spans_n_days() {
    let calendar = calendar();
    for days in [1, 2, 7, 15, 30, 31, 90, 365, 366, 1000] {
        let range = DateRange::past_days(days).resolve(&calendar).unwrap();
        assert_eq!(range.end_date, calendar.today());
        assert_eq!(range.num_days(), days as i64);
    }
}

#[test]
#[should_panic(expected = "PastDays requires at least one day")]
fn test_past_days_constructor_rejects_zero() {
    DateRange::past_days(0);
}

#[test]
#[should_panic(expected = "PastDays requires at least one day")]
fn test_resolving_zero_past_days_panics() {
    DateRange::PastDays(0).resolve(&calendar());
}

#[test]
fn test_this_month() {
    assert_eq!(
        resolved(DateRange::this(CalendarUnit::Month)),
        (date(2024, 3, 1), date(2024, 3, 31))
    );
}

#[test]
fn test_last_quarter_crosses_year() {
    assert_eq!(
        resolved(DateRange::last(CalendarUnit::Quarter)),
        (date(2023, 10, 1), date(2023, 12, 31))
    );
}

#[test]
fn test_this_week_starts_on_first_weekday() {
    // 2024-03-15 is a Friday
    assert_eq!(
        resolved(DateRange::this(CalendarUnit::WeekOfYear)),
        (date(2024, 3, 11), date(2024, 3, 17))
    );

    let sunday_first = calendar().with_first_weekday(Weekday::Sun);
    let range = DateRange::last(CalendarUnit::WeekOfYear).resolve(&sunday_first).unwrap();
    assert_eq!((range.start_date, range.end_date), (date(2024, 3, 3), date(2024, 3, 9)));
}

#[test]
fn test_month_offsets_handle_short_months() {
    assert_eq!(
        resolved(DateRange::CalendarUnit(-1, CalendarUnit::Month)),
        (date(2024, 2, 1), date(2024, 2, 29))
    );
    assert_eq!(
        resolved(DateRange::CalendarUnit(11, CalendarUnit::Month)),
        (date(2025, 2, 1), date(2025, 2, 28))
    );
}

#[test]
fn test_year_offsets() {
    assert_eq!(
        resolved(DateRange::this(CalendarUnit::Year)),
        (date(2024, 1, 1), date(2024, 12, 31))
    );
    assert_eq!(
        resolved(DateRange::CalendarUnit(-3, CalendarUnit::Year)),
        (date(2021, 1, 1), date(2021, 12, 31))
    );
}

#[test]
fn test_calendar_units_are_aligned_for_every_day_of_a_year() {
    for ordinal in 1..=366 {
        let today = NaiveDate::from_yo_opt(2024, ordinal).unwrap();
        let calendar = GregorianCalendar::pinned(today);
        for unit in CalendarUnit::ALL {
            for offset in [-5, -1, 0, 1, 4] {
                let range = DateRange::CalendarUnit(offset, unit).resolve(&calendar).unwrap();
                let next_day = range.end_date.succ_opt().unwrap();
                match unit {
                    CalendarUnit::WeekOfYear => {
                        assert_eq!(range.start_date.weekday(), Weekday::Mon);
                        assert_eq!(range.num_days(), 7);
                    }
                    CalendarUnit::Month => {
                        assert_eq!(range.start_date.day(), 1);
                        assert_eq!(next_day.day(), 1);
                    }
                    CalendarUnit::Quarter => {
                        assert_eq!(range.start_date.day(), 1);
                        assert_eq!(range.start_date.month0() % 3, 0);
                        assert_eq!(next_day.day(), 1);
                        assert_eq!(next_day.month0() % 3, 0);
                    }
                    CalendarUnit::Year => {
                        assert_eq!(range.start_date.ordinal(), 1);
                        assert_eq!(next_day.ordinal(), 1);
                    }
                }
                if offset == 0 {
                    assert!(range.contains(today), "{unit:?} does not contain {today}");
                }
            }
        }
    }
}

#[test]
fn test_weeks_follow_first_weekday_for_every_day_of_a_year() {
    for first_weekday in [Weekday::Sun, Weekday::Wed, Weekday::Sat] {
        for ordinal in 1..=366 {
            let today = NaiveDate::from_yo_opt(2024, ordinal).unwrap();
            let calendar = GregorianCalendar::pinned(today).with_first_weekday(first_weekday);
            for offset in [-2, 0, 3] {
                let range = DateRange::CalendarUnit(offset, CalendarUnit::WeekOfYear)
                    .resolve(&calendar)
                    .unwrap();
                assert_eq!(range.start_date.weekday(), first_weekday);
                assert_eq!(range.num_days(), 7);
                let week_shift = range.start_date.signed_duration_since(
                    DateRange::this(CalendarUnit::WeekOfYear).start_date(&calendar).unwrap(),
                );
                assert_eq!(week_shift.num_days(), offset as i64 * 7);
                if offset == 0 {
                    assert!(range.contains(today), "week starting {first_weekday} misses {today}");
                }
            }
        }
    }
}

#[test]
fn test_only_custom_ranges_are_custom() {
    let today = date(2024, 3, 15);
    assert!(DateRange::Custom(today, today).is_custom());
    assert!(!DateRange::PastDays(7).is_custom());
    assert!(!DateRange::this(CalendarUnit::Month).is_custom());
    assert!(!DateRange::None.is_custom());
    assert!(!DateRange::None.is_selectable());
    assert!(DateRange::PastDays(7).is_selectable());
}

#[test]
fn test_none_has_no_dates() {
    let calendar = calendar();
    assert!(DateRange::None.resolve(&calendar).is_none());
    assert!(DateRange::None.start_date(&calendar).is_none());
    assert!(DateRange::None.end_date(&calendar).is_none());
}

#[test]
fn test_overflow_resolves_to_nothing() {
    let calendar = GregorianCalendar::pinned(NaiveDate::MAX);
    assert!(DateRange::CalendarUnit(1, CalendarUnit::Year).resolve(&calendar).is_none());
    let calendar = GregorianCalendar::pinned(NaiveDate::MIN);
    assert!(DateRange::PastDays(2).resolve(&calendar).is_none());
}

#[test]
fn test_titles() {
    let today = date(2024, 3, 15);
    assert_eq!(DateRange::Custom(today, today).title(), "Custom");
    assert_eq!(DateRange::PastDays(30).title(), "Last 30 Days");
    assert_eq!(DateRange::this(CalendarUnit::WeekOfYear).title(), "This Week");
    assert_eq!(DateRange::last(CalendarUnit::Quarter).title(), "Last Quarter");
    assert_eq!(DateRange::CalendarUnit(2, CalendarUnit::Month).title(), "Month (offset 2)");
    assert_eq!(DateRange::None.title(), "");
    assert_eq!(DateRange::PastDays(7).to_string(), "Last 7 Days");
}

#[test]
fn test_equality_is_structural() {
    let a = DateRange::Custom(date(2024, 3, 1), date(2024, 3, 15));
    let b = DateRange::Custom(date(2024, 3, 1), date(2024, 3, 15));
    let c = DateRange::Custom(date(2024, 3, 1), date(2024, 3, 14));
    assert_eq!(a, b);
    assert_eq!(b, a);
    assert_ne!(a, c);
    assert_ne!(DateRange::PastDays(7), DateRange::PastDays(15));
    assert_ne!(DateRange::this(CalendarUnit::Month), DateRange::last(CalendarUnit::Month));
    assert_ne!(DateRange::this(CalendarUnit::Month), DateRange::this(CalendarUnit::Quarter));
    // a custom range covering the same days is still not the preset
    assert_ne!(DateRange::Custom(date(2024, 3, 9), date(2024, 3, 15)), DateRange::PastDays(7));
}

#[test]
fn test_standard_catalog_round_trips() {
    let catalog = PresetCatalog::standard(date(2024, 3, 15));
    assert_eq!(catalog.len(), 12);
    for (index, preset) in catalog.presets().iter().enumerate() {
        match preset {
            DateRange::None => assert_eq!(catalog.match_preset(preset), None),
            _ => assert_eq!(catalog.match_preset(preset), Some(index)),
        }
    }
}

#[test]
fn test_unmatched_range_selects_custom() {
    let catalog = PresetCatalog::standard(date(2024, 3, 15));
    assert_eq!(catalog.match_preset(&DateRange::PastDays(8)), None);
    assert_eq!(catalog.selected_index(&DateRange::PastDays(8)), 0);
    assert_eq!(catalog.selected_index(&DateRange::last(CalendarUnit::Month)), 0);
    assert_eq!(catalog.selected_index(&DateRange::None), 0);
    assert_eq!(catalog.selected_index(&DateRange::PastDays(90)), 5);
}

#[test]
fn test_separators_become_menu_separators() {
    let catalog = PresetCatalog::standard(date(2024, 3, 15));
    let separators: Vec<usize> = catalog.menu_items()
        .iter()
        .enumerate()
        .filter(|(_, item)| **item == MenuItem::Separator)
        .map(|(index, _)| index)
        .collect();
    assert_eq!(separators, vec![1, 7]);
}

#[test]
fn test_try_new_validates_placeholder() {
    assert!(matches!(PresetCatalog::try_new(vec![]), Err(crate::error::ConfigError::EmptyCatalog)));
    assert!(PresetCatalog::try_new(vec![DateRange::None, DateRange::PastDays(7)]).is_err());

    let today = date(2024, 3, 15);
    let catalog = PresetCatalog::try_new(vec![DateRange::Custom(today, today), DateRange::PastDays(3)]).unwrap();
    assert_eq!(catalog.get(1), Some(&DateRange::PastDays(3)));
    assert!(!catalog.is_empty());
}

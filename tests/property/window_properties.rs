// Property-based tests for window computation and validation
// Checks the computed windows against the validator over random dates

use booking_calendar::models::settings::FirstDayOfWeek;
use booking_calendar::models::view::CalendarViewMode;
use booking_calendar::services::calendar::{
    is_span_valid, is_window_valid, navigate, resolve_anchor_month, window_for_date, Navigation,
};
use booking_calendar::services::clock::FixedClock;
use booking_calendar::utils::date::format_date_only;
use chrono::{Datelike, Duration, NaiveDate};
use proptest::prelude::*;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    // 1990-01-01 .. roughly 2090
    (0i64..36_500).prop_map(|offset| {
        NaiveDate::from_ymd_opt(1990, 1, 1).unwrap() + Duration::days(offset)
    })
}

fn any_view() -> impl Strategy<Value = CalendarViewMode> {
    prop::sample::select(CalendarViewMode::ALL.to_vec())
}

fn any_first_day() -> impl Strategy<Value = FirstDayOfWeek> {
    prop_oneof![Just(FirstDayOfWeek::Monday), Just(FirstDayOfWeek::Sunday)]
}

proptest! {
    /// Property: a computed window always passes the validator for its view
    #[test]
    fn prop_computed_window_is_valid(
        today in any_date(),
        view in any_view(),
        first_day in any_first_day(),
    ) {
        let window = window_for_date(view, Some(first_day), today);
        prop_assert!(is_span_valid(view, window.start(), window.end()));
        prop_assert!(is_window_valid(
            view.as_str(),
            &format_date_only(window.start()),
            &format_date_only(window.end()),
        ));
        prop_assert!(window.contains(today));
    }

    /// Property: week and month grids start and end on the first day of the week
    #[test]
    fn prop_grids_align_to_first_day(
        today in any_date(),
        first_day in any_first_day(),
    ) {
        for view in [CalendarViewMode::WeekGrid, CalendarViewMode::WeekList, CalendarViewMode::MonthGrid] {
            let window = window_for_date(view, Some(first_day), today);
            prop_assert_eq!(window.start().weekday(), first_day.weekday());
            prop_assert_eq!(window.end().weekday(), first_day.weekday());
            prop_assert_eq!(window.days() % 7, 0);
        }
    }

    /// Property: the month grid covers every day of the month
    #[test]
    fn prop_month_grid_covers_month(
        today in any_date(),
        first_day in any_first_day(),
    ) {
        let window = window_for_date(CalendarViewMode::MonthGrid, Some(first_day), today);
        let first = NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap();
        prop_assert!(window.contains(first));
        prop_assert!(window.start() > first - Duration::days(7));
        prop_assert_eq!(resolve_anchor_month(window.start()), first);
    }

    /// Property: stepping forward then back returns to the same window
    #[test]
    fn prop_navigation_round_trips(
        today in any_date(),
        view in any_view(),
        first_day in any_first_day(),
    ) {
        let clock = FixedClock(today);
        let start = window_for_date(view, Some(first_day), today);
        let next = navigate(view, &start, Navigation::Next, Some(first_day), &clock);
        let back = navigate(view, &next, Navigation::Previous, Some(first_day), &clock);
        prop_assert!(is_span_valid(view, next.start(), next.end()));
        prop_assert_eq!(back, start);
    }

    /// Property: the validator never panics on arbitrary input
    #[test]
    fn prop_validator_total(view in ".{0,12}", start in ".{0,12}", end in ".{0,12}") {
        let _ = is_window_valid(&view, &start, &end);
    }
}

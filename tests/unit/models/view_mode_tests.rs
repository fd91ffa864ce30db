// Unit tests for CalendarViewMode parsing from URL state

use booking_calendar::models::view::CalendarViewMode;
use booking_calendar::CalendarError;
use test_case::test_case;

#[test_case("MonthGrid", CalendarViewMode::MonthGrid ; "month canonical")]
#[test_case("dayGridMonth", CalendarViewMode::MonthGrid ; "month component key")]
#[test_case("WeekGrid", CalendarViewMode::WeekGrid ; "week canonical")]
#[test_case("timeGridWeek", CalendarViewMode::WeekGrid ; "week component key")]
#[test_case("DayGrid", CalendarViewMode::DayGrid ; "day canonical")]
#[test_case("timeGridDay", CalendarViewMode::DayGrid ; "day component key")]
#[test_case("WeekList", CalendarViewMode::WeekList ; "list canonical")]
#[test_case("listWeek", CalendarViewMode::WeekList ; "list component key")]
fn test_known_views_parse(input: &str, expected: CalendarViewMode) {
    assert_eq!(input.parse::<CalendarViewMode>(), Ok(expected));
}

#[test_case("" ; "empty")]
#[test_case("month" ; "partial name")]
#[test_case("listMonth" ; "unsupported component view")]
#[test_case("WeekGrid;drop" ; "trailing junk")]
fn test_unknown_views_are_errors(input: &str) {
    assert_eq!(
        input.parse::<CalendarViewMode>(),
        Err(CalendarError::UnknownView {
            input: input.to_string()
        })
    );
}

#[test]
fn test_display_matches_canonical_name() {
    for view in CalendarViewMode::ALL {
        assert_eq!(view.to_string(), view.as_str());
    }
}

use chefbuddy_shared::{Error, Result};
use time::{Date, Duration, Month, Weekday};

fn first_of_month(year: i32, month: Month) -> Result<Date> {
    Date::from_calendar_date(year, month, 1)
        .map_err(|err| Error::Server(format!("invalid month {year}-{month}: {err}")))
}

/// Number of days in the given month, leap years included.
pub fn days_in_month(year: i32, month: Month) -> Result<u8> {
    first_of_month(year, month)?;
    let (following_year, following) = next_month(year, month);

    let last = match first_of_month(following_year, following) {
        Ok(next_first) => next_first - Duration::days(1),
        // December of the last representable year.
        Err(_) => Date::from_calendar_date(year, month, 31)
            .map_err(|err| Error::Server(format!("invalid month {year}-{month}: {err}")))?,
    };

    Ok(last.day())
}

/// Month laid out as Sunday-first weeks.
///
/// Cells before the 1st and after the last day are `None`; the length is
/// always a multiple of seven.
pub fn month_grid(year: i32, month: Month) -> Result<Vec<Option<Date>>> {
    let first = first_of_month(year, month)?;
    let days = days_in_month(year, month)?;

    let leading = match first.weekday() {
        Weekday::Sunday => 0,
        Weekday::Monday => 1,
        Weekday::Tuesday => 2,
        Weekday::Wednesday => 3,
        Weekday::Thursday => 4,
        Weekday::Friday => 5,
        Weekday::Saturday => 6,
    };

    let mut cells = Vec::with_capacity(42);
    cells.resize(leading, None);

    let mut day = first;
    for _ in 0..days {
        cells.push(Some(day));
        match day.next_day() {
            Some(next) => day = next,
            None => break,
        }
    }

    let trailing = (7 - cells.len() % 7) % 7;
    cells.resize(cells.len() + trailing, None);

    Ok(cells)
}

pub fn previous_month(year: i32, month: Month) -> (i32, Month) {
    match month {
        Month::January => (year - 1, Month::December),
        _ => (year, month.previous()),
    }
}

pub fn next_month(year: i32, month: Month) -> (i32, Month) {
    match month {
        Month::December => (year + 1, Month::January),
        _ => (year, month.next()),
    }
}

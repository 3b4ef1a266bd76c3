use time::{Date, Month};

/// Parses a date in format `yyyy-mm-dd`
pub fn parse_date(arg: &str) -> Result<Date, time::error::Parse> {
    Date::parse(
        arg,
        time::macros::format_description!("[year]-[month]-[day]"),
    )
}

/// Returns the ISO 8601 representation of a date ("2023-01-31")
pub fn format_date(date: Date) -> String {
    format!("{}-{:02}-{:02}", date.year(), date.month() as u8, date.day())
}

/// Returns `date` shifted by `months` calendar months, keeping the day of month
/// or clamping it to the last day of the target month (e.g. 2024-08-31 + 6 = 2025-02-28).
/// Returns `None` when the result is outside the supported range of years.
pub fn add_months(date: Date, months: u32) -> Option<Date> {
    let zero_based = (date.month() as u32 - 1).checked_add(months)?;
    let year = date.year().checked_add(i32::try_from(zero_based / 12).ok()?)?;
    let month = Month::try_from((zero_based % 12 + 1) as u8).ok()?;
    let day = date.day().min(time::util::days_in_year_month(year, month));
    Date::from_calendar_date(year, month, day).ok()
}

/// Returns the last day of the month of `date`
pub fn last_day_of_month(date: Date) -> Date {
    let last = time::util::days_in_year_month(date.year(), date.month());
    Date::from_calendar_date(date.year(), date.month(), last).expect("last day of month is valid")
}

#[cfg(test)]
mod test {
    use super::*;
    use time::macros::date;

    #[test]
    fn parse() {
        assert_eq!(parse_date("2024-03-01").unwrap(), date!(2024 - 03 - 01));
        assert!(parse_date("2024-13-01").is_err());
        assert_eq!(format_date(date!(2024 - 03 - 01)), "2024-03-01");
    }

    #[test]
    fn months() {
        assert_eq!(add_months(date!(2024 - 01 - 15), 6), Some(date!(2024 - 07 - 15)));
        assert_eq!(add_months(date!(2024 - 08 - 31), 6), Some(date!(2025 - 02 - 28)));
        assert_eq!(add_months(date!(2023 - 08 - 31), 6), Some(date!(2024 - 02 - 29)));
        assert_eq!(add_months(date!(2024 - 12 - 01), 1), Some(date!(2025 - 01 - 01)));
        assert_eq!(add_months(date!(2024 - 05 - 10), 0), Some(date!(2024 - 05 - 10)));
        assert_eq!(add_months(date!(9999 - 12 - 01), 1), None);
    }

    #[test]
    fn end_of_month() {
        assert_eq!(last_day_of_month(date!(2024 - 02 - 10)), date!(2024 - 02 - 29));
        assert_eq!(last_day_of_month(date!(2023 - 02 - 01)), date!(2023 - 02 - 28));
        assert_eq!(last_day_of_month(date!(2024 - 07 - 31)), date!(2024 - 07 - 31));
    }
}

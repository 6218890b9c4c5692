use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_milli_opt(23, 59, 59, 999).expect("23:59:59.999 is a valid time of day")
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1).and_then(|first| first.pred_opt())
}

impl DateRange {
    pub fn spanning_days(first: NaiveDate, last: NaiveDate) -> Self {
        Self {
            start: first.and_time(NaiveTime::MIN),
            end: last.and_time(end_of_day()),
        }
    }

    pub fn single_day(day: NaiveDate) -> Self {
        Self::spanning_days(day, day)
    }

    /// Monday through Sunday of the ISO week holding `reference`. A Sunday
    /// closes the week that began six days earlier.
    pub fn week_of(reference: NaiveDate) -> Self {
        let days_from_monday = i64::from(reference.weekday().num_days_from_monday());
        let monday = reference - Duration::days(days_from_monday);
        Self::spanning_days(monday, monday + Duration::days(6))
    }

    pub fn month_of(reference: NaiveDate) -> Self {
        let first = reference.with_day(1).unwrap_or(reference);
        let last = last_day_of_month(reference.year(), reference.month()).unwrap_or(reference);
        Self::spanning_days(first, last)
    }

    pub fn year_of(reference: NaiveDate) -> Self {
        let first = NaiveDate::from_ymd_opt(reference.year(), 1, 1).unwrap_or(reference);
        let last = NaiveDate::from_ymd_opt(reference.year(), 12, 31).unwrap_or(reference);
        Self::spanning_days(first, last)
    }

    pub fn first_day(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn last_day(&self) -> NaiveDate {
        self.end.date()
    }

    // Row dates are compared at midnight.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        let moment = date.and_time(NaiveTime::MIN);
        self.start <= moment && moment <= self.end
    }
}

pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn week_of_midweek_starts_monday_and_ends_sunday() {
        let range = DateRange::week_of(day(2025, 1, 8));

        assert_eq!(range.first_day(), day(2025, 1, 6));
        assert_eq!(range.first_day().weekday(), Weekday::Mon);
        assert_eq!(range.last_day(), day(2025, 1, 12));
        assert_eq!(range.start.time(), NaiveTime::MIN);
        assert_eq!(range.end.time(), end_of_day());
    }

    #[test]
    fn week_of_sunday_belongs_to_preceding_monday() {
        let range = DateRange::week_of(day(2025, 1, 12));

        assert_eq!(range.first_day(), day(2025, 1, 6));
        assert_eq!(range.last_day(), day(2025, 1, 12));
    }

    #[test]
    fn week_of_crosses_year_boundary() {
        let range = DateRange::week_of(day(2025, 1, 1));

        assert_eq!(range.first_day(), day(2024, 12, 30));
        assert_eq!(range.last_day(), day(2025, 1, 5));
    }

    #[test]
    fn month_of_handles_leap_february_and_december() {
        let feb = DateRange::month_of(day(2024, 2, 14));
        assert_eq!(feb.first_day(), day(2024, 2, 1));
        assert_eq!(feb.last_day(), day(2024, 2, 29));

        let dec = DateRange::month_of(day(2025, 12, 31));
        assert_eq!(dec.first_day(), day(2025, 12, 1));
        assert_eq!(dec.last_day(), day(2025, 12, 31));
    }

    #[test]
    fn year_of_spans_whole_calendar_year() {
        let range = DateRange::year_of(day(2025, 6, 15));

        assert_eq!(range.first_day(), day(2025, 1, 1));
        assert_eq!(range.last_day(), day(2025, 12, 31));
    }

    #[test]
    fn contains_date_is_inclusive_on_both_ends() {
        let range = DateRange::spanning_days(day(2025, 1, 6), day(2025, 1, 12));

        assert!(range.contains_date(day(2025, 1, 6)));
        assert!(range.contains_date(day(2025, 1, 12)));
        assert!(!range.contains_date(day(2025, 1, 5)));
        assert!(!range.contains_date(day(2025, 1, 13)));
    }

    #[test]
    fn parse_iso_date_rejects_blank_and_garbage() {
        assert_eq!(parse_iso_date("2025-01-10"), Some(day(2025, 1, 10)));
        assert_eq!(parse_iso_date(" 2025-01-10 "), Some(day(2025, 1, 10)));
        assert_eq!(parse_iso_date(""), None);
        assert_eq!(parse_iso_date("   "), None);
        assert_eq!(parse_iso_date("2025-02-30"), None);
        assert_eq!(parse_iso_date("10/01/2025"), None);
    }
}

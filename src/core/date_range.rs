use crate::domain::model::DateRange;
use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc};

/// The Monday-to-Sunday week before the ISO week containing `now`.
pub fn previous_week_range(now: DateTime<Utc>) -> DateRange {
    let today = now.date_naive();
    let current_monday = today - Duration::days(today.weekday().num_days_from_monday() as i64);
    let start_day = current_monday - Duration::days(7);
    let end_day = start_day + Duration::days(6);

    DateRange {
        start: start_day.and_time(NaiveTime::MIN).and_utc(),
        end: end_day.and_time(end_of_day()).and_utc(),
    }
}

/// The week immediately preceding [`previous_week_range`].
pub fn week_before_range(now: DateTime<Utc>) -> DateRange {
    previous_week_range(now).shifted_back_one_week()
}

/// Both comparison windows as `(last_week, week_before_last)`.
pub fn comparison_windows(now: DateTime<Utc>) -> (DateRange, DateRange) {
    let last_week = previous_week_range(now);
    (last_week, last_week.shifted_back_one_week())
}

fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN)
}

use chrono::{Duration, NaiveDate};

/// Week reported when no due date is on record (mid-pregnancy default)
pub const DEFAULT_WEEK: u8 = 20;

/// Full-term pregnancy length used to back-date conception
pub const TERM_DAYS: i64 = 280;

/// Lowest reportable gestational week
pub const MIN_WEEK: u8 = 1;

/// Highest reportable gestational week
pub const MAX_WEEK: u8 = 42;

/// Compute the current gestational week from the due date.
///
/// Conception is taken as `due_date` minus 280 days (40 weeks); the result
/// is the number of whole weeks from conception to `today`, clamped to
/// [`MIN_WEEK`, `MAX_WEEK`]. Without a due date the fixed [`DEFAULT_WEEK`]
/// is returned.
///
/// Callers display this value computed fresh, but freeze a snapshot of it
/// into each reading at creation time; a later due-date change never
/// rewrites historical readings.
pub fn current_week(due_date: Option<NaiveDate>, today: NaiveDate) -> u8 {
    let Some(due_date) = due_date else {
        return DEFAULT_WEEK;
    };

    let conception = due_date - Duration::days(TERM_DAYS);
    let weeks = (today - conception).num_weeks();

    weeks.clamp(MIN_WEEK as i64, MAX_WEEK as i64) as u8
}

//! Next-occurrence evaluation for parsed recurrence rules.
//!
//! Evaluation is pure date math: it steps forward from the rule's base date
//! until it clears the reference date `now`. Every loop advances monotonically
//! and terminates within one calendar cycle (at most 400 day-steps for the
//! interval kind, 12 month hops for the monthly kind).

use chrono::{Datelike, Duration, Months, NaiveDate};

use super::date::days_in_month;
use super::rule::RecurrenceRule;

impl RecurrenceRule {
    /// Compute the next occurrence of this rule after `now`, stepping from
    /// `base` (typically the task's previous due date).
    ///
    /// The interval kind may return a date equal to `now` when a missed
    /// occurrence falls due exactly today; the other kinds always advance
    /// strictly past their anchor.
    pub fn next_occurrence(&self, now: NaiveDate, base: NaiveDate) -> NaiveDate {
        match self {
            RecurrenceRule::Interval { days } => next_interval(now, base, i64::from(*days)),
            RecurrenceRule::Yearly => next_yearly(now, base),
            RecurrenceRule::Weekly { weekdays } => next_weekly(now, base, weekdays),
            RecurrenceRule::Monthly { days, months } => next_monthly(now, base, days, months),
        }
    }
}

fn next_interval(now: NaiveDate, base: NaiveDate, step: i64) -> NaiveDate {
    let mut date = base;
    if date > now {
        date += Duration::days(step);
    } else {
        // stops as soon as the date is no longer before `now`, so the result
        // may equal `now` itself
        while date < now {
            date += Duration::days(step);
        }
    }
    date
}

fn next_yearly(now: NaiveDate, base: NaiveDate) -> NaiveDate {
    let mut date = base;
    if date > now {
        date = add_year(date);
    } else {
        while date < now {
            date = add_year(date);
        }
    }
    date
}

/// Add one calendar year. Feb 29 clamps to Feb 28 in non-leap years.
fn add_year(date: NaiveDate) -> NaiveDate {
    date.checked_add_months(Months::new(12))
        .unwrap_or(NaiveDate::MAX)
}

fn next_weekly(now: NaiveDate, base: NaiveDate, weekdays: &[u8]) -> NaiveDate {
    let anchor = if base > now { base } else { now };
    let current = i64::from(anchor.weekday().num_days_from_sunday());
    let mut min_days = 7;
    for &target in weekdays {
        let mut diff = (i64::from(target) - current).rem_euclid(7);
        if diff == 0 {
            // the anchor day itself never qualifies; roll to next week
            diff = 7;
        }
        min_days = min_days.min(diff);
    }
    anchor + Duration::days(min_days)
}

fn next_monthly(now: NaiveDate, base: NaiveDate, days: &[i8], months: &[u8]) -> NaiveDate {
    // never search behind the reference date
    let date = if now > base { now } else { base };
    if months.is_empty() {
        resolve_day(date, days, false)
    } else {
        resolve_day(advance_to_month(date, months), days, true)
    }
}

/// Move to day 1 of the earliest configured month strictly after the current
/// one, wrapping to the smallest configured month of the next year.
fn advance_to_month(date: NaiveDate, months: &[u8]) -> NaiveDate {
    for &month in months {
        if u32::from(month) > date.month() {
            return first_of(date.year(), u32::from(month));
        }
    }
    first_of(date.year() + 1, u32::from(months[0]))
}

/// Find the next configured day of the month at `date` or, failing that, in a
/// following month. Negative specs are re-translated against each month
/// visited, so `-1` is always that month's true last day. With `inclusive`
/// set, `date`'s own day qualifies; otherwise only strictly later days do.
fn resolve_day(date: NaiveDate, specs: &[i8], inclusive: bool) -> NaiveDate {
    let in_month = days_in_month(date.year(), date.month());
    let mut candidates: Vec<u32> = Vec::new();
    for &spec in specs {
        if spec > 0 {
            let day = spec as u32;
            if day <= in_month {
                candidates.push(day);
            }
        } else {
            // -1 is the last day, -2 the one before it; both land inside
            // every month
            candidates.push((in_month as i32 + i32::from(spec) + 1) as u32);
        }
    }
    candidates.sort_unstable();
    candidates.dedup();
    if candidates.is_empty() {
        return resolve_day(first_of_next(date), specs, true);
    }
    for &day in &candidates {
        if date.day() < day || (inclusive && date.day() == day) {
            return with_day(date, day);
        }
    }
    resolve_day(first_of_next(date), specs, true)
}

fn first_of(year: i32, month: u32) -> NaiveDate {
    // month is validated to 1..=12 before evaluation starts
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MAX)
}

fn first_of_next(date: NaiveDate) -> NaiveDate {
    if date.month() == 12 {
        first_of(date.year() + 1, 1)
    } else {
        first_of(date.year(), date.month() + 1)
    }
}

fn with_day(date: NaiveDate, day: u32) -> NaiveDate {
    // day never exceeds the month's length here
    date.with_day(day).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn rule(s: &str) -> RecurrenceRule {
        s.parse().unwrap()
    }

    #[test]
    fn test_interval_catches_up_to_now() {
        // steps of 5 from the base stop at the first date not before now,
        // which here is now itself
        let next = rule("d 5").next_occurrence(ymd(2024, 1, 15), ymd(2024, 1, 10));
        assert_eq!(next, ymd(2024, 1, 15));
    }

    #[test]
    fn test_interval_may_equal_now() {
        // deliberately replicated asymmetry: the interval kind alone does not
        // guarantee a result strictly after now
        let next = rule("d 7").next_occurrence(ymd(2024, 1, 31), ymd(2024, 1, 10));
        assert_eq!(next, ymd(2024, 1, 31));
    }

    #[test]
    fn test_interval_steps_past_now() {
        let next = rule("d 7").next_occurrence(ymd(2024, 2, 1), ymd(2024, 1, 10));
        assert_eq!(next, ymd(2024, 2, 7));
    }

    #[test]
    fn test_interval_future_base_takes_one_step() {
        // a base already past now still takes exactly one unconditional step
        let next = rule("d 7").next_occurrence(ymd(2024, 1, 10), ymd(2024, 1, 20));
        assert_eq!(next, ymd(2024, 1, 27));
    }

    #[test]
    fn test_interval_crosses_year_boundary() {
        let next = rule("d 30").next_occurrence(ymd(2024, 1, 5), ymd(2023, 12, 20));
        assert_eq!(next, ymd(2024, 1, 19));
    }

    #[test]
    fn test_yearly_catches_up() {
        let next = RecurrenceRule::Yearly.next_occurrence(ymd(2024, 3, 1), ymd(2024, 1, 15));
        assert_eq!(next, ymd(2025, 1, 15));
    }

    #[test]
    fn test_yearly_multiple_years_behind() {
        let next = RecurrenceRule::Yearly.next_occurrence(ymd(2024, 3, 1), ymd(2020, 6, 10));
        assert_eq!(next, ymd(2024, 6, 10));
    }

    #[test]
    fn test_yearly_future_base_takes_one_step() {
        let next = RecurrenceRule::Yearly.next_occurrence(ymd(2024, 1, 1), ymd(2024, 5, 4));
        assert_eq!(next, ymd(2025, 5, 4));
    }

    #[test]
    fn test_yearly_leap_day_clamps() {
        // Feb 29 rolls to Feb 28 in a non-leap year
        let next = RecurrenceRule::Yearly.next_occurrence(ymd(2024, 3, 1), ymd(2024, 2, 29));
        assert_eq!(next, ymd(2025, 2, 28));
    }

    #[test]
    fn test_weekly_minimum_forward_distance() {
        // 2024-03-04 is a Monday; targets Monday and Wednesday. Monday is the
        // anchor day itself and rolls a full week, so Wednesday wins.
        let next = rule("w 1,3").next_occurrence(ymd(2024, 3, 4), ymd(2024, 1, 1));
        assert_eq!(next, ymd(2024, 3, 6));
    }

    #[test]
    fn test_weekly_anchor_day_rolls_a_full_week() {
        // only Monday configured, anchor is a Monday
        let next = rule("w 1").next_occurrence(ymd(2024, 3, 4), ymd(2024, 1, 1));
        assert_eq!(next, ymd(2024, 3, 11));
    }

    #[test]
    fn test_weekly_sunday_as_seven() {
        // 2024-03-04 is a Monday; Sunday (7) is 6 days out
        let next = rule("w 7").next_occurrence(ymd(2024, 3, 4), ymd(2024, 1, 1));
        assert_eq!(next, ymd(2024, 3, 10));
        assert_eq!(next.weekday().num_days_from_sunday(), 0);
    }

    #[test]
    fn test_weekly_future_base_anchors_on_base() {
        // base 2024-03-20 is a Wednesday and lies past now; the result is
        // measured from base, not now
        let next = rule("w 5").next_occurrence(ymd(2024, 3, 4), ymd(2024, 3, 20));
        assert_eq!(next, ymd(2024, 3, 22));
    }

    #[test]
    fn test_weekly_result_is_strictly_after_anchor() {
        let weekdays = rule("w 1,2,3,4,5,6,7");
        let anchor = ymd(2024, 3, 4);
        let next = weekdays.next_occurrence(anchor, ymd(2024, 1, 1));
        assert!(next > anchor);
        assert_eq!(next, ymd(2024, 3, 5));
    }

    #[test]
    fn test_monthly_next_day_in_same_month() {
        let next = rule("m 10,20").next_occurrence(ymd(2024, 1, 15), ymd(2024, 1, 1));
        assert_eq!(next, ymd(2024, 1, 20));
    }

    #[test]
    fn test_monthly_wraps_to_next_month() {
        let next = rule("m 10").next_occurrence(ymd(2024, 1, 15), ymd(2024, 1, 1));
        assert_eq!(next, ymd(2024, 2, 10));
    }

    #[test]
    fn test_monthly_own_day_does_not_qualify() {
        // the search position's own day is excluded when no month set forces
        // an inclusive restart
        let next = rule("m 15").next_occurrence(ymd(2024, 1, 15), ymd(2024, 1, 1));
        assert_eq!(next, ymd(2024, 2, 15));
    }

    #[test]
    fn test_monthly_last_day_of_month() {
        let next = rule("m -1").next_occurrence(ymd(2024, 1, 15), ymd(2024, 1, 1));
        assert_eq!(next, ymd(2024, 1, 31));
    }

    #[test]
    fn test_monthly_last_day_of_february() {
        let next = rule("m -1").next_occurrence(ymd(2023, 2, 10), ymd(2023, 2, 1));
        assert_eq!(next, ymd(2023, 2, 28));
    }

    #[test]
    fn test_monthly_second_to_last_day() {
        let next = rule("m -2").next_occurrence(ymd(2024, 1, 15), ymd(2024, 1, 1));
        assert_eq!(next, ymd(2024, 1, 30));
    }

    #[test]
    fn test_monthly_day_31_skips_short_months() {
        // no day 31 in February; the search lands in March
        let next = rule("m 31").next_occurrence(ymd(2023, 2, 10), ymd(2023, 2, 1));
        assert_eq!(next, ymd(2023, 3, 31));
    }

    #[test]
    fn test_monthly_december_wraps_to_january() {
        let next = rule("m 5").next_occurrence(ymd(2024, 12, 20), ymd(2024, 12, 1));
        assert_eq!(next, ymd(2025, 1, 5));
    }

    #[test]
    fn test_monthly_now_ahead_of_base_pulls_search_forward() {
        // base is months behind now; the search starts at now, not base
        let next = rule("m 10,20").next_occurrence(ymd(2024, 5, 12), ymd(2024, 1, 1));
        assert_eq!(next, ymd(2024, 5, 20));
    }

    #[test]
    fn test_monthly_with_month_set() {
        // base in January, only February configured: day 31 is discarded for
        // February and -1 resolves to its true last day
        let next = rule("m 31,-1 2").next_occurrence(ymd(2023, 1, 16), ymd(2023, 1, 15));
        assert_eq!(next, ymd(2023, 2, 28));
    }

    #[test]
    fn test_monthly_month_set_leap_year() {
        let next = rule("m 31,-1 2").next_occurrence(ymd(2024, 1, 16), ymd(2024, 1, 15));
        assert_eq!(next, ymd(2024, 2, 29));
    }

    #[test]
    fn test_monthly_month_set_first_day_qualifies() {
        // advancing to a configured month resets the position to day 1, and
        // day 1 itself may then qualify
        let next = rule("m 1 6").next_occurrence(ymd(2024, 2, 10), ymd(2024, 2, 1));
        assert_eq!(next, ymd(2024, 6, 1));
    }

    #[test]
    fn test_monthly_month_set_always_leaves_current_month() {
        // the month advance is strictly past the current month even when the
        // current month is itself configured
        let next = rule("m 20 2").next_occurrence(ymd(2024, 2, 10), ymd(2024, 2, 5));
        assert_eq!(next, ymd(2025, 2, 20));
    }

    #[test]
    fn test_monthly_month_set_wraps_to_next_year() {
        let next = rule("m 15 3,9").next_occurrence(ymd(2024, 10, 1), ymd(2024, 10, 1));
        assert_eq!(next, ymd(2025, 3, 15));
    }

    #[test]
    fn test_monthly_day_set_translation_per_result_month() {
        // day-of-month membership holds after negative translation for the
        // month the result lands in
        let r = rule("m -1,10");
        let next = r.next_occurrence(ymd(2024, 4, 20), ymd(2024, 4, 1));
        assert_eq!(next, ymd(2024, 4, 30));
        let after = r.next_occurrence(ymd(2024, 5, 1), ymd(2024, 5, 1));
        assert_eq!(after, ymd(2024, 5, 10));
    }
}

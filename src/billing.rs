use crate::config::RateSchedule;
use chrono::NaiveDateTime;
use std::fmt;

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * 60;
const SECS_PER_DAY: i64 = 24 * 60 * 60;

/// Wall-clock duration between install and retrieval (or now), decomposed
/// into whole days, hours, minutes and seconds.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Elapsed {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}d {}h {}m {}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Elapsed time since install, against the retrieval instant when the plug
/// has been pulled, otherwise against `now`. Negative differences (a future
/// install date) display as zero rather than signaling an error.
pub fn elapsed(
    install: NaiveDateTime,
    retrieval: Option<NaiveDateTime>,
    now: NaiveDateTime,
) -> Elapsed {
    let end = retrieval.unwrap_or(now);
    let total = (end - install).num_seconds().max(0);
    Elapsed {
        days: total / SECS_PER_DAY,
        hours: total % SECS_PER_DAY / SECS_PER_HOUR,
        minutes: total % SECS_PER_HOUR / SECS_PER_MINUTE,
        seconds: total % SECS_PER_MINUTE,
    }
}

/// Day count used for billing: the absolute difference between the two
/// instants, with partial days rounded up to a full billable day.
///
/// Unlike `elapsed`, an inverted date pair still bills. The display clamps
/// to zero while billing takes the absolute value, matching how the
/// dashboard has always behaved.
pub fn billable_days(install: NaiveDateTime, end: NaiveDateTime) -> i64 {
    let secs = (end - install).num_seconds().abs();
    // `secs` is non-negative after `.abs()`; signed `div_ceil` is unstable,
    // so round up via the stable unsigned equivalent.
    ((secs as u64).div_ceil(SECS_PER_DAY as u64)) as i64
}

/// Rental cost for a plug. A missing install date costs nothing. The first
/// `discount_after_days` billable days are charged at the regular rate,
/// every day past that at the discounted rate.
pub fn cost(
    install: Option<NaiveDateTime>,
    retrieval: Option<NaiveDateTime>,
    now: NaiveDateTime,
    rates: &RateSchedule,
) -> f64 {
    let Some(install) = install else {
        return 0.0;
    };
    let end = retrieval.unwrap_or(now);
    let days = billable_days(install, end);
    let tier = i64::from(rates.discount_after_days);
    let regular_days = days.min(tier);
    let discounted_days = (days - tier).max(0);
    regular_days as f64 * rates.regular_per_day
        + discounted_days as f64 * rates.discounted_per_day
}

//! The pickup schedule rules and the values rendered from them.

use std::{collections::HashSet, iter::successors};

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Utc, Weekday};
use chrono_tz::{Tz, US};
use serde::Serialize;

static READABLE_FORMAT: &str = "%A, %B %d %Y";

/// A fixed municipal pickup schedule: trash every Tuesday, recycling every other
/// Tuesday, both moved one day later when the pickup lands on an observed holiday.
///
/// The default is the production schedule; tests inject their own values.
#[derive(Debug, Clone)]
pub struct PickupSchedule {
    /// the timezone every schedule date is anchored to
    pub timezone: Tz,
    /// a known recycling day marking the start of the biweekly cycle
    pub recycling_epoch: NaiveDate,
    /// `(month, day)` pairs the hauler is closed on, whatever the year
    pub holidays: HashSet<(u32, u32)>,
}

impl Default for PickupSchedule {
    fn default() -> Self {
        Self {
            timezone: US::Central,
            recycling_epoch: NaiveDate::from_ymd_opt(2021, 3, 16).unwrap(),
            holidays: HashSet::from([(12, 25), (1, 1)]),
        }
    }
}

impl PickupSchedule {
    /// The current date in the schedule's timezone, truncated to midnight.
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.timezone).date_naive()
    }

    /// Whether the hauler skips this date, in any year.
    pub fn is_observed_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&(date.month(), date.day()))
    }

    /// Move a pickup landing on an observed holiday to the next day.
    ///
    /// A single shift only; the shifted date is not checked again. The observed
    /// holidays are never on consecutive days.
    pub fn holiday_adjust(&self, date: NaiveDate) -> NaiveDate {
        if self.is_observed_holiday(date) {
            return date + Duration::days(1);
        }
        date
    }

    /// All recycling days from the epoch until two weeks past `today`, holiday
    /// adjusted.
    ///
    /// The two week margin keeps the upcoming trash day inside the window.
    pub fn recycling_days(&self, today: NaiveDate) -> impl Iterator<Item = NaiveDate> + '_ {
        let until = today + Duration::days(14);
        successors(Some(self.recycling_epoch), |date| {
            Some(*date + Duration::days(14))
        })
        .take_while(move |date| *date <= until)
        .map(|date| self.holiday_adjust(date))
    }

    /// The next day trash goes out, counting from (and including) `today`.
    pub fn upcoming_trash_day(&self, today: NaiveDate) -> NaiveDate {
        if today.weekday() == Weekday::Tue {
            // today is the pickup day, unless it is a holiday
            return self.holiday_adjust(today);
        }
        if today.weekday() == Weekday::Wed && self.is_observed_holiday(today - Duration::days(1)) {
            // today is the makeup day for yesterday's skipped pickup
            return today;
        }
        self.holiday_adjust(next_tuesday(today))
    }

    /// Build the values both output sinks consume.
    pub fn render_params(&self, trash_day: NaiveDate, today: NaiveDate) -> TrashDayParams {
        // midnight is never skipped or repeated by daylight saving in this zone
        let midnight = trash_day
            .and_time(NaiveTime::MIN)
            .and_local_timezone(self.timezone)
            .single()
            .unwrap();
        TrashDayParams {
            trash_day_readable: trash_day.format(READABLE_FORMAT).to_string(),
            trash_day: midnight.timestamp().to_string(),
            countdown: (trash_day - today).num_days(),
            recycling: self.recycling_days(today).any(|date| date == trash_day),
        }
    }
}

/// The first Tuesday strictly after `date`.
fn next_tuesday(date: NaiveDate) -> NaiveDate {
    let mut next = date + Duration::days(1);
    while next.weekday() != Weekday::Tue {
        next = next + Duration::days(1);
    }
    next
}

/// Everything the HTML template and the JSON document need to know about the
/// upcoming trash day.
#[derive(Debug, PartialEq, Serialize)]
pub struct TrashDayParams {
    /// e.g. `Tuesday, December 31 2024`
    pub trash_day_readable: String,
    /// midnight of the trash day as epoch seconds
    pub trash_day: String,
    /// whole days between today and the trash day
    pub countdown: i64,
    /// whether recycling goes out with the trash
    pub recycling: bool,
}

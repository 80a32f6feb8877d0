use chrono::{DateTime, Datelike, FixedOffset, Months, NaiveDate, NaiveTime, Offset, Utc};
use serde::*;

use crate::error::{TimelineError, TimelineResult};

const MS_PER_SECOND: i64 = 1_000;
const MAX_OFFSET_MINUTES: i32 = 24 * 60 - 1;

/// Timezone in which calendar dates are anchored to instants.
///
/// Every calendar date maps to the UTC epoch millisecond of its local
/// midnight in this zone. Serialized as a signed offset in minutes east of UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct DisplayZone(FixedOffset);

impl DisplayZone {
    /// The UTC zone.
    pub fn utc() -> Self {
        Self(Utc.fix())
    }

    /// Create a zone from an offset in minutes east of UTC.
    ///
    /// Returns `None` when the offset is not strictly within ±24h.
    pub fn from_offset_minutes(minutes: i32) -> Option<Self> {
        if minutes.abs() > MAX_OFFSET_MINUTES {
            return None;
        }
        FixedOffset::east_opt(minutes * 60).map(Self)
    }

    /// Offset in minutes east of UTC.
    pub fn offset_minutes(&self) -> i32 {
        self.0.local_minus_utc() / 60
    }

    /// UTC epoch milliseconds of local midnight on `date`.
    pub fn midnight_ms(&self, date: NaiveDate) -> i64 {
        let local = date.and_time(NaiveTime::default());
        local.and_utc().timestamp_millis() - i64::from(self.0.local_minus_utc()) * MS_PER_SECOND
    }

    /// Calendar date of `instant` as seen in this zone.
    pub fn calendar_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.0).date_naive()
    }
}

impl Default for DisplayZone {
    fn default() -> Self {
        Self::utc()
    }
}

impl TryFrom<i32> for DisplayZone {
    type Error = String;

    fn try_from(minutes: i32) -> Result<Self, Self::Error> {
        Self::from_offset_minutes(minutes)
            .ok_or_else(|| format!("UTC offset of {} minutes is out of range", minutes))
    }
}

impl From<DisplayZone> for i32 {
    fn from(zone: DisplayZone) -> Self {
        zone.offset_minutes()
    }
}

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - chrono::Duration::days(i64::from(date.day0()))
}

/// Last day of the month containing `date`.
///
/// Saturates at `date` itself for the final representable month.
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

/// First day of the month following the month containing `date`.
pub fn next_month_start(date: NaiveDate) -> Option<NaiveDate> {
    first_of_month(date).checked_add_months(Months::new(1))
}

/// Parse a wire date into a calendar date in `zone`.
///
/// Accepts a plain `YYYY-MM-DD` date or an RFC 3339 timestamp; timestamps are
/// resolved to the calendar date they fall on in the display zone.
pub fn parse_calendar_date(value: &str, zone: DisplayZone) -> TimelineResult<NaiveDate> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| zone.calendar_date(dt.with_timezone(&Utc)))
        .map_err(|e| TimelineError::invalid_date(value, e.to_string()))
}

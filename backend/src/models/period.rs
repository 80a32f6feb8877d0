use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::significance::Significance;
use crate::error::{TimelineError, TimelineResult};

crate::define_string_id!(PeriodId);

/// Extra fields carried by a period that the layout engine never inspects.
pub type Payload = serde_json::Map<String, serde_json::Value>;

/// A single date-ranged event period (e.g. a transit activation).
///
/// Both dates are inclusive calendar dates. Periods are owned by the caller;
/// the layout engine only ever borrows or clones them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Period {
    pub id: PeriodId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub significance: Significance,
    #[serde(default)]
    pub label: String,
    /// Pass-through fields, serialized back at the top level of the period.
    #[serde(flatten)]
    pub payload: Payload,
}

impl Period {
    /// Create a period, rejecting ranges that end before they start.
    pub fn new(
        id: impl Into<PeriodId>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        significance: Significance,
        label: impl Into<String>,
    ) -> TimelineResult<Self> {
        let period = Self {
            id: id.into(),
            start_date,
            end_date,
            significance,
            label: label.into(),
            payload: Payload::new(),
        };
        period.validate()?;
        Ok(period)
    }

    /// Attach pass-through payload fields.
    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = payload;
        self
    }

    /// Check the `start_date <= end_date` invariant.
    pub fn validate(&self) -> TimelineResult<()> {
        if self.start_date > self.end_date {
            return Err(TimelineError::invalid_period(
                self.id.as_str(),
                format!(
                    "start date {} is after end date {}",
                    self.start_date, self.end_date
                ),
            ));
        }
        Ok(())
    }

    /// Closed-interval overlap: ranges sharing a single day overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_date <= other.end_date && other.start_date <= self.end_date
    }

    /// Length of the range in whole days (zero for a single-day period).
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

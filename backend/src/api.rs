//! Public API surface for the timeline engine.
//!
//! This file consolidates the input and output types of the layout pipeline.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::timeline::AxisBounds;
pub use crate::routes::timeline::Geometry;
pub use crate::routes::timeline::MonthTick;
pub use crate::routes::timeline::PositionedPeriod;
pub use crate::routes::timeline::TierLayout;
pub use crate::routes::timeline::TimelineLayout;
pub use crate::routes::timeline::ViewMode;

pub use crate::config::{LayoutSettings, TimelineConfig};
pub use crate::error::{TimelineError, TimelineResult};
pub use crate::models::{DisplayZone, Payload, Period, PeriodId, Significance};
pub use crate::services::packer::PackingOrder;

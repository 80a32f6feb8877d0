//! # Transit Timeline
//!
//! Layout engine for date-ranged event periods.
//!
//! Given a list of periods (for example transit activations), each with a
//! start date, an end date and a significance tier, the engine produces a
//! compact Gantt-style layout: periods grouped by tier, packed into the
//! fewest overlapping-free rows a first-fit pass finds, and positioned in
//! pixels along a month-aligned axis. The optional HTTP server exposes the
//! same pipeline as a JSON endpoint.
//!
//! ## Architecture
//!
//! - [`api`]: Re-exports of the input and output types
//! - [`models`]: Periods, significance tiers and calendar helpers
//! - [`services`]: Axis, bucketing, packing, geometry and the full pipeline
//! - [`routes`]: Layout output types
//! - [`config`]: TOML layout configuration
//! - [`http`]: Axum-based HTTP server (feature `http-server`)
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use transit_timeline::api::{LayoutSettings, Period, Significance};
//! use transit_timeline::services::build_layout;
//!
//! let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
//! let periods = vec![
//!     Period::new("p1", day(1), day(10), Significance::High, "Jupiter→Saturn").unwrap(),
//!     Period::new("p2", day(5), day(15), Significance::High, "Mars→Venus").unwrap(),
//! ];
//!
//! let layout = build_layout(&periods, &LayoutSettings::default());
//! assert_eq!(layout.tiers[0].row_count(), 2);
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

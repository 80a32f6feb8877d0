//! Layout services.
//!
//! Each stage of the layout pipeline lives in its own module; [`timeline`]
//! wires them together into a complete [`crate::api::TimelineLayout`].

pub mod axis;
pub mod bucketer;
pub mod geometry;
pub mod packer;
pub mod timeline;


pub use axis::compute_axis;
pub use bucketer::{bucket, SignificanceBuckets};
pub use geometry::map_to_geometry;
pub use packer::{pack, PackingOrder};
pub use timeline::{build_layout, filter_by_year, initial_view_mode};

pub mod macros;
pub mod period;
pub mod significance;
pub mod time;


pub use period::*;
pub use significance::*;
pub use time::*;

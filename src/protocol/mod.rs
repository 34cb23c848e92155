//! Text formats at the crate's edges.
//!
//! Position notation for naming individual states, and the JSON run report
//! consumed by rendering and plotting tools.

pub mod notation;
pub mod report;

pub use notation::{encode_position, parse_position, NotationError};
pub use report::{write_report, Report};

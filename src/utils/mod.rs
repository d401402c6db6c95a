//! Utility functions

pub mod crypto;
pub mod encoding;
pub mod time;

pub use time::{format_timestamp, Clock, FixedClock, SystemClock};

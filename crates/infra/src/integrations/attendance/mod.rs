//! In-process attendance source

pub mod feed;

pub use feed::AttendanceFeed;

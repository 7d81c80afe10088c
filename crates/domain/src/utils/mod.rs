//! Small domain helpers shared by config and core.

pub mod time_zone;

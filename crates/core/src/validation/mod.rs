//! Event draft validation and publishing

pub mod policy;
pub mod ports;
pub mod service;

pub use policy::validate;
pub use ports::*;
pub use service::*;

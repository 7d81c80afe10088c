//! Shared test helpers for `seesturm-core` integration tests.
//!
//! Fixtures and lightweight in-memory mocks for every core port.

#![allow(dead_code)]

pub mod attendance;
pub mod calendar;
pub mod fixtures;
pub mod submitter;

use std::time::Duration;

/// Poll `condition` until it holds, failing the test after two seconds.
pub async fn eventually(mut condition: impl FnMut() -> bool) {
    for _ in 0..400 {
        if condition() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("condition not reached in time");
}

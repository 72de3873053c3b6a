mod config_tests;
mod end_to_end_tests;
mod inventory_registry_tests;

use std::sync::Arc;

use log::info;

use crate::implementations::clock::ManualClock;
use crate::models::common::Timestamp;

pub(crate) const START_MS: u64 = 1_700_000_000_000;

// Initialize logging once; later calls are no-ops
pub(crate) fn setup() {
    if env_logger::builder().is_test(true).try_init().is_ok() {
        info!("Logger initialized");
    }
}

/// A clock that starts at `START_MS` and moves one second per read
pub(crate) fn test_clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(Timestamp::from_millis(START_MS), 1_000))
}

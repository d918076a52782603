#![allow(dead_code)]

use alloy::primitives::hex;
use tracing_subscriber::EnvFilter;

/// Constructor storing 0x0a at slot 0x0c.
pub const STORE_INIT_CODE: [u8; 7] = hex!("600a600c600055");

/// Constructor returning the single byte runtime code `0x00` (STOP).
pub const STOP_INIT_CODE: [u8; 11] = hex!("6001600081600a8239f300");

pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

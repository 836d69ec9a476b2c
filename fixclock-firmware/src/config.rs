//! Build-time clock configuration
//!
//! `CLOCK_CONFIG` is generated by build.rs from clock.toml.

use defmt::*;
use fixclock_core::config::{ClockConfig, GpsConfig, PanelConfig, SegmentConfig};

include!(concat!(env!("OUT_DIR"), "/clock_config.rs"));

/// The compiled-in configuration, or the defaults if it fails validation
pub fn load() -> ClockConfig {
    match CLOCK_CONFIG.validate() {
        Ok(()) => CLOCK_CONFIG,
        Err(e) => {
            error!("Invalid clock configuration ({:?}), using defaults", e);
            ClockConfig::DEFAULT
        }
    }
}

pub fn log_summary(config: &ClockConfig) {
    info!(
        "Config: utc_offset={}h poll={}ms gps={}baud",
        config.utc_offset_hours, config.poll_interval_ms, config.gps.baudrate
    );
    info!(
        "Config: segment addr={=u8:#x} brightness={} panel={} rotation={}",
        config.segment.i2c_address,
        config.segment.brightness,
        config.panel.enabled,
        config.panel.rotation
    );
}

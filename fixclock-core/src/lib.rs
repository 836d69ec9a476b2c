//! Board-agnostic core logic for the Fixclock GPS clock
//!
//! This crate contains everything between the serial bytes coming out of
//! the GPS receiver and the calls made on the two display devices:
//!
//! - Hardware abstraction traits (decoder, segment display, panel, serial)
//! - Fix state monitor (3D fix acquisition/loss)
//! - Time localizer and render value builder
//! - Differential display sinks (segment and panel)
//! - Cycle and poll loop scheduler
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod fix;
pub mod render;
pub mod scheduler;
pub mod sink;
pub mod traits;

#[cfg(test)]
pub(crate) mod mock;

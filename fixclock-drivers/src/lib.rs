//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in fixclock-core:
//!
//! - GPS decoder over the `nmea` sentence parser
//! - HT16K33 4-digit segment display
//! - ST7789 TFT panel and its text adapter
//! - I2C bus scan

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod bus;
pub mod gps;
pub mod panel;
pub mod segment;

// src/lib.rs

//! Driver for the Sensirion SHT3x family (SHT30, SHT31, SHT35) of I2C
//! humidity and temperature sensors.
//!
//! The driver talks to the device through the [`Sht3xBus`] and
//! [`Sht3xTimer`] traits, so any transport can be plugged in. With the
//! `impl-native` feature, [`common::hal_traits::NativeAdapter`] covers every
//! `embedded-hal` 1.0 `I2c` + `DelayNs` pair.
//!
//! ```ignore
//! use sht3x::{common::hal_traits::NativeAdapter, Sht3x, Sht3xAddr};
//!
//! let mut sensor = Sht3x::new(NativeAdapter::new(i2c, delay));
//! sensor.begin(Sht3xAddr::PRIMARY)?;
//!
//! match sensor.measure() {
//!     Ok(m) => println!("{:.2} °C, {:.1} %RH", m.celsius(), m.humidity_percent()),
//!     Err(e) => println!("Error trying to get data: {}", e),
//! }
//! ```

#![cfg_attr(not(test), no_std)]

#[cfg(all(feature = "defmt", feature = "log"))]
compile_error!("Features \"defmt\" and \"log\" are mutually exclusive and cannot be enabled together");

#[macro_use]
mod macros;

pub mod common;
pub mod driver;

// Re-export key types for convenience
pub use common::{Command, Measurement, Register, Repeatability, Sht3xAddr, Sht3xError};
pub use common::{Sht3xBus, Sht3xTimer};
pub use driver::Sht3x;

#[cfg(feature = "async")]
pub use driver::AsyncSht3x;

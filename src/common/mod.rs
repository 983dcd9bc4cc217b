// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod address;
pub mod command;
pub mod crc;
pub mod error;
pub mod hal_traits;
pub mod measurement;
pub mod timing;

// --- Re-export key types/traits/functions for easier access ---

// From address.rs
pub use address::Sht3xAddr;

// From command.rs
pub use command::{Command, Repeatability};

// From crc.rs
pub use crc::{calculate_crc8, verify_word_crc};

// From error.rs
pub use error::{Register, Sht3xError};

// From hal_traits.rs
pub use hal_traits::{Sht3xBus, Sht3xTimer}; // Core sync traits

// From measurement.rs
pub use measurement::{Measurement, RESPONSE_LEN};

// From timing.rs (constants - users can access via common::timing::*)

// --- Feature-gated re-exports ---

// Async traits (from hal_traits.rs)
#[cfg(feature = "async")]
pub use hal_traits::{Sht3xBusAsync, Sht3xTimerAsync};

// Native HAL adapters (from hal_traits.rs)
#[cfg(feature = "impl-native")]
pub use hal_traits::NativeAdapter;
#[cfg(all(feature = "async", feature = "impl-native"))]
pub use hal_traits::NativeAdapterAsync;

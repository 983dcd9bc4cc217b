// src/driver/mod.rs

// Blocking engine
pub mod sync_driver;

// Async engine, delays become suspension points
#[cfg(feature = "async")]
pub mod async_driver;

#[cfg(test)]
pub(crate) mod mock;

// Re-export the public driver structs
pub use sync_driver::Sht3x;

#[cfg(feature = "async")]
pub use async_driver::AsyncSht3x;

// src/common/timing.rs

use core::time::Duration;

// Values below are the driver's wait times, not the datasheet nominals. Each
// is at or above the worst case in the SHT3x-DIS datasheet, Table 4 and
// Section 4.9, so no polling or clock stretching is needed.

// === Reset (Sec 4.9) ===

/// Wait after a soft reset. Datasheet maximum is 1 ms, doubled for margin.
pub const RESET_DELAY: Duration = Duration::from_millis(2);

// === Single Shot Conversion (Table 4) ===

/// High repeatability conversion, max 15 ms.
pub const MEASUREMENT_DELAY_HIGH: Duration = Duration::from_millis(15);
/// Medium repeatability conversion, max 6 ms.
pub const MEASUREMENT_DELAY_MEDIUM: Duration = Duration::from_millis(6);
/// Low repeatability conversion, max 4 ms.
pub const MEASUREMENT_DELAY_LOW: Duration = Duration::from_millis(4);

/// Converts a protocol delay into the whole milliseconds handed to a timer,
/// rounding up so the wait is never shorter than requested.
#[inline]
pub const fn as_delay_ms(delay: Duration) -> u32 {
    let ms = delay.as_millis();
    let ms = if delay.subsec_nanos() % 1_000_000 != 0 { ms + 1 } else { ms };
    ms as u32
}

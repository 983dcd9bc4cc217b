//! SHT3x command definitions.
//!
//! Every command is a 16-bit opcode sent MSB first. See the SHT3x-DIS
//! datasheet, Section 4 "Operation and Communication".

use core::fmt;
use core::time::Duration;

use super::timing;

/// Measurement repeatability for single-shot acquisition.
///
/// Higher repeatability lowers noise but takes longer to convert.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Repeatability {
    #[default]
    High,
    Medium,
    Low,
}

impl Repeatability {
    /// Worst-case conversion time the driver waits before reading back.
    pub const fn measurement_delay(self) -> Duration {
        match self {
            Repeatability::High => timing::MEASUREMENT_DELAY_HIGH,
            Repeatability::Medium => timing::MEASUREMENT_DELAY_MEDIUM,
            Repeatability::Low => timing::MEASUREMENT_DELAY_LOW,
        }
    }
}

/// Represents an SHT3x command.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Soft reset (`0x30A2`). Restores default configuration, same effect as nRESET.
    SoftReset,

    /// Switch the internal heater on (`0x306D`).
    HeaterEnable,

    /// Switch the internal heater off (`0x3066`).
    HeaterDisable,

    /// Single shot measurement, clock stretching disabled.
    /// `0x2400` (high), `0x240B` (medium) or `0x2416` (low).
    SingleShot(Repeatability),
}

impl Command {
    /// The raw 16-bit opcode.
    pub const fn opcode(self) -> u16 {
        match self {
            Command::SoftReset => 0x30A2,
            Command::HeaterEnable => 0x306D,
            Command::HeaterDisable => 0x3066,
            Command::SingleShot(Repeatability::High) => 0x2400,
            Command::SingleShot(Repeatability::Medium) => 0x240B,
            Command::SingleShot(Repeatability::Low) => 0x2416,
        }
    }

    /// Wire encoding: high byte then low byte.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 2] {
        self.opcode().to_be_bytes()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06X}", self.opcode())
    }
}

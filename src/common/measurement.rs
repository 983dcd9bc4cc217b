// src/common/measurement.rs

use core::fmt;

use super::crc::verify_word_crc;
use super::error::{Register, Sht3xError};

/// Size of a single-shot response: `[t_msb, t_lsb, t_crc, rh_msb, rh_lsb, rh_crc]`.
pub const RESPONSE_LEN: usize = 6;

// Full scale of both 16-bit registers (2^16 - 1), see datasheet Sec 4.13.
const FULL_SCALE: f32 = 65535.0;

/// One validated temperature/humidity sample.
///
/// A `Measurement` only exists once both response words passed their CRC
/// check, so the raw registers are always meaningful. The conversions below
/// are the fixed linear maps from the SHT3x-DIS datasheet, Section 4.13.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    raw_temperature: u16,
    raw_humidity: u16,
}

impl Measurement {
    pub const fn from_raw(raw_temperature: u16, raw_humidity: u16) -> Self {
        Measurement { raw_temperature, raw_humidity }
    }

    /// Raw 16-bit temperature register.
    #[inline]
    pub const fn raw_temperature(&self) -> u16 {
        self.raw_temperature
    }

    /// Raw 16-bit relative humidity register.
    #[inline]
    pub const fn raw_humidity(&self) -> u16 {
        self.raw_humidity
    }

    /// Temperature in degrees Celsius: `-45 + 175 * raw / 65535`.
    pub fn celsius(&self) -> f32 {
        -45.0 + (175.0 * self.raw_temperature as f32) / FULL_SCALE
    }

    /// Temperature in degrees Fahrenheit: `-49 + 315 * raw / 65535`.
    pub fn fahrenheit(&self) -> f32 {
        -49.0 + (315.0 * self.raw_temperature as f32) / FULL_SCALE
    }

    /// Relative humidity as a fraction in `[0.0, 1.0]`.
    pub fn relative_humidity(&self) -> f32 {
        self.raw_humidity as f32 / FULL_SCALE
    }

    /// Relative humidity in percent, `[0.0, 100.0]`.
    pub fn humidity_percent(&self) -> f32 {
        100.0 * self.relative_humidity()
    }

    /// Decodes a complete response frame.
    ///
    /// The temperature word is checked first; a bad temperature CRC is
    /// reported without looking at the humidity bytes at all.
    pub fn from_response<E>(frame: &[u8; RESPONSE_LEN]) -> Result<Self, Sht3xError<E>>
    where
        E: fmt::Debug,
    {
        let raw_temperature =
            verify_word_crc(Register::Temperature, [frame[0], frame[1], frame[2]])?;
        let raw_humidity = verify_word_crc(Register::Humidity, [frame[3], frame[4], frame[5]])?;

        Ok(Measurement { raw_temperature, raw_humidity })
    }

    /// Validates a frame read from the bus, `received` being the number of
    /// bytes the device delivered into it.
    ///
    /// Anything shorter than a full frame is a `ShortRead` and is never
    /// decoded. Short reads and CRC mismatches are logged.
    pub(crate) fn from_read<E>(received: usize, frame: &[u8; RESPONSE_LEN]) -> Result<Self, Sht3xError<E>>
    where
        E: fmt::Debug,
    {
        if received < RESPONSE_LEN {
            warn!("sht3x: short read, {} of {} bytes", received, RESPONSE_LEN);
            return Err(Sht3xError::ShortRead { expected: RESPONSE_LEN, received });
        }

        Self::from_response(frame).map_err(|e| {
            if let Sht3xError::CrcMismatch { register, expected, calculated } = &e {
                warn!(
                    "sht3x: {} CRC mismatch, received {:#x}, calculated {:#x}",
                    register, expected, calculated
                );
            }
            e
        })
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} °C, {:.2} %RH", self.celsius(), self.humidity_percent())
    }
}

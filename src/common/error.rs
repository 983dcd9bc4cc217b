// src/common/error.rs

use core::fmt;

/// Which response word a checksum belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    Temperature,
    Humidity,
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Register::Temperature => f.write_str("temperature"),
            Register::Humidity => f.write_str("humidity"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Sht3xError<E = ()>
where
    E: core::fmt::Debug,
{
    /// The bus transport could not be brought up during `begin`.
    #[error("Bus transport unavailable")]
    TransportUnavailable,

    /// Underlying I/O error from the bus implementation.
    #[error("I/O error: {0:?}")]
    Io(E),

    /// The device returned fewer bytes than a full measurement frame.
    #[error("Short read: expected {expected} bytes, received {received}")]
    ShortRead { expected: usize, received: usize },

    /// Received CRC does not match calculated CRC.
    #[error("CRC mismatch on {register} word: expected {expected:#04x}, calculated {calculated:#04x}")]
    CrcMismatch { register: Register, expected: u8, calculated: u8 },
}

// Allow mapping from underlying bus error
impl<E: core::fmt::Debug> From<E> for Sht3xError<E> {
    fn from(e: E) -> Self {
        Sht3xError::Io(e)
    }
}

#[cfg(feature = "defmt")]
impl<E: core::fmt::Debug> defmt::Format for Sht3xError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Sht3xError::TransportUnavailable => defmt::write!(f, "TransportUnavailable"),
            Sht3xError::Io(e) => defmt::write!(f, "Io({})", defmt::Debug2Format(e)),
            Sht3xError::ShortRead { expected, received } => {
                defmt::write!(f, "ShortRead(expected={}, received={})", expected, received)
            }
            Sht3xError::CrcMismatch { register, expected, calculated } => defmt::write!(
                f,
                "CrcMismatch(register={}, expected={:#x}, calculated={:#x})",
                register,
                expected,
                calculated
            ),
        }
    }
}

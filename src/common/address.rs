// src/common/address.rs

use core::fmt;

/// 7-bit I2C address of an SHT3x device.
///
/// The device answers on [`Sht3xAddr::PRIMARY`] when its ADDR pin is tied to
/// GND and on [`Sht3xAddr::SECONDARY`] when it is tied to VDD. Any other byte is
/// accepted as-is so boards with address translators keep working.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sht3xAddr(u8);

impl Sht3xAddr {
    /// ADDR pin tied to GND (solder jumper closed on most breakouts).
    pub const PRIMARY: Sht3xAddr = Sht3xAddr(0x44);
    /// ADDR pin tied to VDD.
    pub const SECONDARY: Sht3xAddr = Sht3xAddr(0x45);

    #[inline]
    pub const fn new(address: u8) -> Self {
        Sht3xAddr(address)
    }

    #[inline]
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// True for one of the two vendor-defined addresses.
    #[inline]
    pub const fn is_standard(&self) -> bool {
        matches!(self.0, 0x44 | 0x45)
    }
}

impl Default for Sht3xAddr {
    fn default() -> Self {
        Self::PRIMARY
    }
}

impl From<u8> for Sht3xAddr {
    fn from(value: u8) -> Self {
        Sht3xAddr(value)
    }
}

impl From<Sht3xAddr> for u8 {
    fn from(value: Sht3xAddr) -> Self {
        value.0
    }
}

impl fmt::Display for Sht3xAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}

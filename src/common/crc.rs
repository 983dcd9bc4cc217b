// src/common/crc.rs

use super::error::{Register, Sht3xError};
use crc::{Algorithm, Crc};

/// CRC algorithm used by the SHT3x to protect each 16-bit word (datasheet Sec 4.12).
/// Polynomial: 0x31 (x^8 + x^5 + x^4 + 1)
/// Initial Value: 0xFF
/// Input Reflected: false
/// Output Reflected: false
/// Final XOR: 0x00
/// Check Value: 0xF7 (for "123456789") - identical to CRC-8/NRSC-5
pub const SHT3X_CRC: Algorithm<u8> = Algorithm {
    width: 8,
    poly: 0x31,
    init: 0xFF,
    refin: false,
    refout: false,
    xorout: 0x00,
    check: 0xF7,
    residue: 0x00,
};

// Create a Crc instance for the SHT3x algorithm for reuse.
const CRC_COMPUTER: Crc<u8> = Crc::<u8>::new(&SHT3X_CRC);

/// Calculates the SHT3x CRC-8 over the given bytes.
///
/// The device only ever checksums two bytes at a time (one register word), but
/// the calculation is defined for any length.
#[inline]
pub fn calculate_crc8(data: &[u8]) -> u8 {
    CRC_COMPUTER.checksum(data)
}

/// Verifies one `[msb, lsb, crc]` triplet from a response and returns the word.
///
/// # Returns
///
/// * `Ok(word)` if the CRC is valid.
/// * `Err(Sht3xError::CrcMismatch)` naming `register` otherwise.
pub fn verify_word_crc<E>(register: Register, triplet: [u8; 3]) -> Result<u16, Sht3xError<E>>
where
    E: core::fmt::Debug,
{
    let [msb, lsb, received] = triplet;
    let calculated = calculate_crc8(&[msb, lsb]);

    if calculated == received {
        Ok(u16::from_be_bytes([msb, lsb]))
    } else {
        Err(Sht3xError::CrcMismatch { register, expected: received, calculated })
    }
}

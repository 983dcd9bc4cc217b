// src/driver/sync_driver/mod.rs

use crate::common::{
    address::Sht3xAddr,
    command::{Command, Repeatability},
    error::Sht3xError,
    hal_traits::{Sht3xBus, Sht3xTimer},
    measurement::Measurement,
    timing,
};

mod io_helpers;

/// Blocking SHT3x driver.
///
/// Owns the bus interface and the device address. Every call runs to
/// completion, including the fixed waits the device needs (2 ms after a
/// reset, up to 15 ms per measurement). The driver does no locking and no
/// retries; sharing a bus with other devices is left to the caller.
#[derive(Debug)]
pub struct Sht3x<IF>
where
    IF: Sht3xBus + Sht3xTimer,
{
    interface: IF,
    address: Sht3xAddr,
}

impl<IF> Sht3x<IF>
where
    IF: Sht3xBus + Sht3xTimer,
{
    /// Wraps `interface`. No bus traffic happens until [`Sht3x::begin`].
    pub fn new(interface: IF) -> Self {
        Sht3x {
            interface,
            address: Sht3xAddr::PRIMARY,
        }
    }

    /// Address used for all transactions.
    pub fn address(&self) -> Sht3xAddr {
        self.address
    }

    /// Gives back the owned interface.
    pub fn release(self) -> IF {
        self.interface
    }

    // --- Public Blocking Methods ---

    /// Brings up the bus, selects `address` and soft-resets the device.
    ///
    /// If the bus cannot be started, returns `TransportUnavailable` and
    /// keeps the previous address.
    pub fn begin(&mut self, address: Sht3xAddr) -> Result<(), Sht3xError<IF::Error>> {
        if self.interface.begin().is_err() {
            warn!("sht3x: bus transport unavailable");
            return Err(Sht3xError::TransportUnavailable);
        }

        self.address = address;
        debug!("sht3x: using address {:#x}", address.as_u8());
        self.reset()
    }

    /// Soft reset. Restores the power-on configuration (heater off).
    pub fn reset(&mut self) -> Result<(), Sht3xError<IF::Error>> {
        self.write_command(Command::SoftReset)?;
        self.wait(timing::RESET_DELAY);
        Ok(())
    }

    /// Switches the internal heater on.
    pub fn enable_heater(&mut self) -> Result<(), Sht3xError<IF::Error>> {
        self.write_command(Command::HeaterEnable)
    }

    /// Switches the internal heater off.
    pub fn disable_heater(&mut self) -> Result<(), Sht3xError<IF::Error>> {
        self.write_command(Command::HeaterDisable)
    }

    /// Single shot measurement with high repeatability.
    pub fn measure(&mut self) -> Result<Measurement, Sht3xError<IF::Error>> {
        self.measure_with(Repeatability::High)
    }

    /// Single shot measurement with the given repeatability.
    ///
    /// Sends the command, waits the worst-case conversion time and reads the
    /// 6 byte response. A response shorter than 6 bytes is never decoded.
    pub fn measure_with(
        &mut self,
        repeatability: Repeatability,
    ) -> Result<Measurement, Sht3xError<IF::Error>> {
        self.write_command(Command::SingleShot(repeatability))?;
        self.wait(repeatability.measurement_delay());

        let measurement = self.read_measurement()?;

        debug!(
            "sht3x: raw temperature {:#x}, raw humidity {:#x}",
            measurement.raw_temperature(),
            measurement.raw_humidity()
        );
        Ok(measurement)
    }

    /// Sends any command as one two-byte write.
    pub fn write_command(&mut self, command: Command) -> Result<(), Sht3xError<IF::Error>> {
        trace!("sht3x: command {:#x}", command.opcode());
        self.send_command_bytes(&command.to_bytes())
    }
}

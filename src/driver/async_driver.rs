// src/driver/async_driver.rs

use crate::common::{
    address::Sht3xAddr,
    command::{Command, Repeatability},
    error::Sht3xError,
    hal_traits::{Sht3xBusAsync, Sht3xTimerAsync},
    measurement::{Measurement, RESPONSE_LEN},
    timing,
};
use core::time::Duration;

/// Async SHT3x driver.
///
/// Same protocol as [`crate::Sht3x`], but the reset and conversion waits are
/// awaited on the timer so other tasks on the executor keep running. The
/// minimum wait times are unchanged.
#[derive(Debug)]
pub struct AsyncSht3x<IF>
where
    IF: Sht3xBusAsync + Sht3xTimerAsync,
{
    interface: IF,
    address: Sht3xAddr,
}

impl<IF> AsyncSht3x<IF>
where
    IF: Sht3xBusAsync + Sht3xTimerAsync,
{
    /// Wraps `interface`. No bus traffic happens until [`AsyncSht3x::begin`].
    pub fn new(interface: IF) -> Self {
        AsyncSht3x {
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

    /// Brings up the bus, selects `address` and soft-resets the device.
    ///
    /// If the bus cannot be started, returns `TransportUnavailable` and
    /// keeps the previous address.
    pub async fn begin(&mut self, address: Sht3xAddr) -> Result<(), Sht3xError<IF::Error>> {
        if self.interface.begin().await.is_err() {
            warn!("sht3x: bus transport unavailable");
            return Err(Sht3xError::TransportUnavailable);
        }

        self.address = address;
        debug!("sht3x: using address {:#x}", address.as_u8());
        self.reset().await
    }

    /// Soft reset, then waits at least 2 ms for the device to come back.
    pub async fn reset(&mut self) -> Result<(), Sht3xError<IF::Error>> {
        self.write_command(Command::SoftReset).await?;
        self.wait(timing::RESET_DELAY).await;
        Ok(())
    }

    /// Switches the internal heater on.
    pub async fn enable_heater(&mut self) -> Result<(), Sht3xError<IF::Error>> {
        self.write_command(Command::HeaterEnable).await
    }

    /// Switches the internal heater off.
    pub async fn disable_heater(&mut self) -> Result<(), Sht3xError<IF::Error>> {
        self.write_command(Command::HeaterDisable).await
    }

    /// Single shot measurement with high repeatability.
    pub async fn measure(&mut self) -> Result<Measurement, Sht3xError<IF::Error>> {
        self.measure_with(Repeatability::High).await
    }

    /// Single shot measurement with the given repeatability.
    ///
    /// The conversion wait is awaited on the timer. Short reads and CRC
    /// failures are reported exactly as by [`crate::Sht3x::measure_with`].
    pub async fn measure_with(
        &mut self,
        repeatability: Repeatability,
    ) -> Result<Measurement, Sht3xError<IF::Error>> {
        self.write_command(Command::SingleShot(repeatability)).await?;
        self.wait(repeatability.measurement_delay()).await;

        let mut frame = [0u8; RESPONSE_LEN];
        let received = self
            .interface
            .read(self.address.as_u8(), &mut frame)
            .await
            .map_err(Sht3xError::Io)?;

        let measurement = Measurement::from_read(received, &frame)?;

        debug!(
            "sht3x: raw temperature {:#x}, raw humidity {:#x}",
            measurement.raw_temperature(),
            measurement.raw_humidity()
        );
        Ok(measurement)
    }

    /// Sends any command as one two-byte write.
    pub async fn write_command(&mut self, command: Command) -> Result<(), Sht3xError<IF::Error>> {
        trace!("sht3x: command {:#x}", command.opcode());
        self.interface
            .write(self.address.as_u8(), &command.to_bytes())
            .await
            .map_err(Sht3xError::Io)
    }

    async fn wait(&mut self, delay: Duration) {
        self.interface.delay_ms(timing::as_delay_ms(delay)).await;
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::Register;
    use crate::driver::mock::{BusEvent, MockBusError, MockInterface};

    async fn started(mock: MockInterface) -> AsyncSht3x<MockInterface> {
        let mut sensor = AsyncSht3x::new(mock);
        sensor.begin(Sht3xAddr::PRIMARY).await.unwrap();
        sensor.interface.events.clear();
        sensor.interface.current_time_us = 0;
        sensor
    }

    #[tokio::test]
    async fn test_begin_and_reset() {
        let mut sensor = AsyncSht3x::new(MockInterface::new());
        sensor.begin(Sht3xAddr::SECONDARY).await.unwrap();

        let iface = sensor.release();
        assert_eq!(iface.events[0], BusEvent::Begin);
        assert_eq!(iface.writes(), vec![(0x45, vec![0x30, 0xA2])]);
        assert!(iface.delay_after(1) >= 2_000);
    }

    #[tokio::test]
    async fn test_begin_transport_unavailable() {
        let mut mock = MockInterface::new();
        mock.begin_fails = true;
        let mut sensor = AsyncSht3x::new(mock);

        assert!(matches!(
            sensor.begin(Sht3xAddr::SECONDARY).await,
            Err(Sht3xError::TransportUnavailable)
        ));
        assert_eq!(sensor.address(), Sht3xAddr::PRIMARY);
    }

    #[tokio::test]
    async fn test_heater_commands() {
        let mut sensor = started(MockInterface::new()).await;
        sensor.enable_heater().await.unwrap();
        sensor.disable_heater().await.unwrap();
        assert_eq!(
            sensor.interface.writes(),
            vec![(0x44, vec![0x30, 0x6D]), (0x44, vec![0x30, 0x66])]
        );
    }

    #[tokio::test]
    async fn test_measure_success_waits_for_conversion() {
        let mut mock = MockInterface::new();
        mock.stage_read_data(&[0x00, 0x00, 0x81, 0xFF, 0xFF, 0xAC]);
        let mut sensor = started(mock).await;

        let m = sensor.measure().await.unwrap();
        assert_eq!(m, Measurement::from_raw(0x0000, 0xFFFF));
        assert_eq!(sensor.interface.writes(), vec![(0x44, vec![0x24, 0x00])]);
        assert!(sensor.interface.delay_after(0) >= 15_000);
    }

    #[tokio::test]
    async fn test_measure_failures() {
        let mut mock = MockInterface::new();
        mock.stage_read_data(&[0x00, 0x00, 0x81]);
        mock.stage_read_data(&[0x00, 0x00, 0x80, 0xFF, 0xFF, 0xAC]);
        mock.stage_read_data(&[0x00, 0x00, 0x81, 0xFF, 0xFF, 0xAB]);
        let mut sensor = started(mock).await;

        assert!(matches!(
            sensor.measure().await,
            Err(Sht3xError::ShortRead { expected: 6, received: 3 })
        ));
        assert!(matches!(
            sensor.measure().await,
            Err(Sht3xError::CrcMismatch { register: Register::Temperature, .. })
        ));
        assert!(matches!(
            sensor.measure().await,
            Err(Sht3xError::CrcMismatch { register: Register::Humidity, .. })
        ));

        sensor.interface.fail_writes = true;
        assert!(matches!(sensor.measure().await, Err(Sht3xError::Io(MockBusError))));
    }

    #[tokio::test]
    async fn test_reset_single_write_and_delay() {
        let mut sensor = started(MockInterface::new()).await;
        sensor.reset().await.unwrap();

        assert_eq!(sensor.interface.writes(), vec![(0x44, vec![0x30, 0xA2])]);
        assert!(sensor.interface.delay_after(0) >= 2_000);
        assert_eq!(sensor.interface.reads(), 0);
    }

    #[tokio::test]
    async fn test_measure_with_repeatability() {
        let mut mock = MockInterface::new();
        mock.stage_read_data(&[0x00, 0x00, 0x81, 0xFF, 0xFF, 0xAC]);
        mock.stage_read_data(&[0x66, 0x66, 0x93, 0x80, 0x00, 0xA2]);
        let mut sensor = started(mock).await;

        let medium = sensor.measure_with(Repeatability::Medium).await.unwrap();
        assert_eq!(medium, Measurement::from_raw(0x0000, 0xFFFF));
        assert_eq!(sensor.interface.writes(), vec![(0x44, vec![0x24, 0x0B])]);
        assert!(sensor.interface.delay_after(0) >= 6_000);

        sensor.interface.events.clear();
        let low = sensor.measure_with(Repeatability::Low).await.unwrap();
        assert_eq!(low, Measurement::from_raw(0x6666, 0x8000));
        assert_eq!(sensor.interface.writes(), vec![(0x44, vec![0x24, 0x16])]);
        assert!(sensor.interface.delay_after(0) >= 4_000);
    }

    #[tokio::test]
    async fn test_write_command() {
        let mut sensor = started(MockInterface::new()).await;
        sensor.write_command(Command::SingleShot(Repeatability::Low)).await.unwrap();

        assert_eq!(sensor.interface.writes(), vec![(0x44, vec![0x24, 0x16])]);
        assert_eq!(sensor.interface.reads(), 0);
        assert_eq!(sensor.interface.current_time_us, 0);
    }
}

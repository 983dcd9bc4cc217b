// src/driver/sync_driver/io_helpers.rs

use super::Sht3x;
use crate::common::{
    error::Sht3xError,
    hal_traits::{Sht3xBus, Sht3xTimer},
    measurement::{Measurement, RESPONSE_LEN},
    timing,
};
use core::time::Duration;

// Implementation block for I/O related helpers
impl<IF> Sht3x<IF>
where
    IF: Sht3xBus + Sht3xTimer,
{
    /// Writes already encoded command bytes to the device in one transaction.
    pub(super) fn send_command_bytes(&mut self, cmd_bytes: &[u8]) -> Result<(), Sht3xError<IF::Error>> {
        self.interface
            .write(self.address.as_u8(), cmd_bytes)
            .map_err(Sht3xError::Io)
    }

    /// Requests a full response frame and decodes it.
    pub(super) fn read_measurement(&mut self) -> Result<Measurement, Sht3xError<IF::Error>> {
        let mut frame = [0u8; RESPONSE_LEN];
        let received = self
            .interface
            .read(self.address.as_u8(), &mut frame)
            .map_err(Sht3xError::Io)?;

        Measurement::from_read(received, &frame)
    }

    /// Blocks for at least `delay`.
    pub(super) fn wait(&mut self, delay: Duration) {
        self.interface.delay_ms(timing::as_delay_ms(delay));
    }
}

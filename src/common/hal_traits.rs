// src/common/hal_traits.rs

use core::fmt::Debug;

/// Abstraction for the delays required between SHT3x commands and read-back.
///
/// Note: `NativeAdapter` implements this on top of
/// `embedded_hal::delay::DelayNs` when the `impl-native` feature is enabled.
pub trait Sht3xTimer {
    /// Delay for at least the specified number of microseconds.
    ///
    /// Defaults to `delay_ms`, rounded up to whole milliseconds.
    fn delay_us(&mut self, us: u32) {
        self.delay_ms(us.div_ceil(1000));
    }

    /// Delay for at least the specified number of milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

/// Abstraction for the two-wire bus the sensor sits on.
///
/// This is the minimal capability the driver needs: bring the bus up, write a
/// command to an address, and read a response back while reporting how many
/// bytes the device actually delivered.
pub trait Sht3xBus {
    /// Associated error type for communication errors.
    type Error: Debug;

    /// Initializes the bus. Must be idempotent.
    ///
    /// Returning an error means the transport is unavailable.
    fn begin(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Writes `bytes` to the device at `address` as a single transaction
    /// (start, address+W, bytes, stop).
    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Requests `buffer.len()` bytes from the device at `address`.
    ///
    /// Returns the number of bytes that were actually delivered into the
    /// front of `buffer`. A device that is absent or still busy yields a
    /// count lower than requested rather than an error.
    fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<usize, Self::Error>;
}

/// Async version of `Sht3xTimer` (requires 'async' feature).
#[cfg(feature = "async")]
#[allow(async_fn_in_trait)]
pub trait Sht3xTimerAsync {
    /// Suspends the caller for at least the specified number of microseconds.
    ///
    /// Defaults to `delay_ms`, rounded up to whole milliseconds.
    async fn delay_us(&mut self, us: u32) {
        self.delay_ms(us.div_ceil(1000)).await;
    }

    /// Suspends the caller for at least the specified number of milliseconds.
    async fn delay_ms(&mut self, ms: u32);
}

/// Async version of `Sht3xBus` (requires 'async' feature).
#[cfg(feature = "async")]
#[allow(async_fn_in_trait)]
pub trait Sht3xBusAsync {
    /// Associated error type for communication errors.
    type Error: Debug;

    /// Asynchronously initializes the bus. Must be idempotent.
    async fn begin(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Asynchronously writes `bytes` to the device at `address`.
    async fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Asynchronously requests `buffer.len()` bytes, returning the delivered count.
    async fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<usize, Self::Error>;
}

/// Adapts any `embedded-hal` 1.0 I2C bus and delay provider to the driver traits.
///
/// A failed read that was not acknowledged is reported as a zero-length read:
/// the SHT3x NACKs the read header while a conversion is still running, and
/// an absent device looks the same. On a master read only the address byte
/// can be NACKed, so the NACK source the HAL reports does not matter.
#[cfg(feature = "impl-native")]
#[derive(Debug)]
pub struct NativeAdapter<I2C, D> {
    i2c: I2C,
    delay: D,
}

#[cfg(feature = "impl-native")]
impl<I2C, D> NativeAdapter<I2C, D> {
    pub fn new(i2c: I2C, delay: D) -> Self {
        NativeAdapter { i2c, delay }
    }

    /// Gives back the wrapped bus and delay.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }
}

#[cfg(feature = "impl-native")]
impl<I2C, D> Sht3xBus for NativeAdapter<I2C, D>
where
    I2C: embedded_hal::i2c::I2c,
{
    type Error = I2C::Error;

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        self.i2c.write(address, bytes)
    }

    fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<usize, Self::Error> {
        match self.i2c.read(address, buffer) {
            Ok(()) => Ok(buffer.len()),
            Err(e) if is_read_nack(&e) => Ok(0),
            Err(e) => Err(e),
        }
    }
}

#[cfg(feature = "impl-native")]
impl<I2C, D> Sht3xTimer for NativeAdapter<I2C, D>
where
    D: embedded_hal::delay::DelayNs,
{
    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}

#[cfg(feature = "impl-native")]
fn is_read_nack<E: embedded_hal::i2c::Error>(e: &E) -> bool {
    use embedded_hal::i2c::ErrorKind;

    // Many HALs cannot tell which byte was NACKed and report `Unknown`.
    matches!(e.kind(), ErrorKind::NoAcknowledge(_))
}

/// Async version of `NativeAdapter`.
/// Requires `embedded-hal-async` traits.
#[cfg(all(feature = "async", feature = "impl-native"))]
#[derive(Debug)]
pub struct NativeAdapterAsync<I2C, D> {
    i2c: I2C,
    delay: D,
}

#[cfg(all(feature = "async", feature = "impl-native"))]
impl<I2C, D> NativeAdapterAsync<I2C, D> {
    pub fn new(i2c: I2C, delay: D) -> Self {
        NativeAdapterAsync { i2c, delay }
    }

    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }
}

#[cfg(all(feature = "async", feature = "impl-native"))]
impl<I2C, D> Sht3xBusAsync for NativeAdapterAsync<I2C, D>
where
    I2C: embedded_hal_async::i2c::I2c,
{
    type Error = I2C::Error;

    async fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        self.i2c.write(address, bytes).await
    }

    async fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<usize, Self::Error> {
        match self.i2c.read(address, buffer).await {
            Ok(()) => Ok(buffer.len()),
            Err(e) if is_read_nack(&e) => Ok(0),
            Err(e) => Err(e),
        }
    }
}

#[cfg(all(feature = "async", feature = "impl-native"))]
impl<I2C, D> Sht3xTimerAsync for NativeAdapterAsync<I2C, D>
where
    D: embedded_hal_async::delay::DelayNs,
{
    async fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us).await;
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms).await;
    }
}

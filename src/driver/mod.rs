pub mod spi;

use core::fmt::Debug;

/// An exclusively owned bus session to a single AD9508.
pub trait Transport: Sized {
    /// Whatever is needed to open the session.
    type Config;
    type Error: Debug;

    fn initialize(config: Self::Config) -> Result<Self, Self::Error>;

    /// Clock `buf` out to the chip and overwrite it in place with the bytes
    /// clocked in during the same transfer.
    fn exchange(&mut self, buf: &mut [u8]) -> Result<(), Self::Error>;

    fn release(self) -> Result<(), Self::Error>;
}

use embedded_hal::spi::SpiDevice;

use super::Transport;

/// [`Transport`] over any `embedded-hal` SPI device. Chip select is handled by
/// the device, one assertion per exchange.
pub struct SpiTransport<SPI: SpiDevice> {
    pub spi_device: SPI,
}

impl<SPI: SpiDevice> Transport for SpiTransport<SPI> {
    type Config = SPI;
    type Error = SPI::Error;

    fn initialize(spi_device: SPI) -> Result<Self, SPI::Error> {
        Ok(Self { spi_device })
    }

    fn exchange(&mut self, buf: &mut [u8]) -> Result<(), SPI::Error> {
        self.spi_device.transfer_in_place(buf)
    }

    fn release(self) -> Result<(), SPI::Error> {
        // nothing to close, the device is dropped with the session
        Ok(())
    }
}

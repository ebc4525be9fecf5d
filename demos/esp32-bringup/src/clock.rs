use ad9508::{Ad9508, Ad9508Configuration, Error, SpiTransport, PART_ID_VALUE};
use embassy_time::{Delay, Timer};
use embedded_hal::spi::SpiDevice;
use embedded_hal_bus::spi::ExclusiveDevice;
use esp_hal::{
    clock::Clocks,
    gpio::{GpioPin, Input, Output, PullUp, PushPull},
    peripherals::SPI2,
    prelude::_fugit_RateExtU32,
    spi::{master::Spi, FullDuplexMode, SpiMode},
};
use esp_println::println;

type ClockSpi = ExclusiveDevice<
    Spi<'static, SPI2, FullDuplexMode>,
    GpioPin<Output<PushPull>, 15>,
    Delay,
>;

#[embassy_executor::task]
pub async fn run_ad9508(
    spi2: SPI2,
    clocks: &'static Clocks<'static>,
    sclk: GpioPin<Output<PushPull>, 14>,
    mosi: GpioPin<Output<PushPull>, 13>,
    miso: GpioPin<Input<PullUp>, 12>,
    cs: GpioPin<Output<PushPull>, 15>,
) {
    let spi = Spi::new(spi2, 1.MHz(), SpiMode::Mode0, &clocks)
        .with_sck(sclk)
        .with_mosi(mosi)
        .with_miso(miso);

    let mut spi_device: ClockSpi = ExclusiveDevice::new(spi, cs, Delay);
    let config = Ad9508Configuration::default();

    loop {
        // a failed bring-up drops the bus, start over with a fresh device
        let device = match Ad9508::<SpiTransport<&mut ClockSpi>>::setup(&mut spi_device, &mut Delay, &config) {
            Ok(device) => device,
            Err(Error::IdentityMismatch { reg, expected, found }) => {
                println!("ad9508 not found: {reg:?} reads {found:#04x}, expected {expected:#04x}");
                Timer::after_millis(500).await;
                continue;
            }
            Err(e) => {
                println!("error during ad9508 setup {e:?}");
                Timer::after_millis(500).await;
                continue;
            }
        };

        for warning in device.setup_warnings() {
            println!("ad9508 output register {:?} not written: {:?}", warning.reg, warning.error);
        }

        println!("ad9508 successfully configured");

        watch(device).await;
    }
}

/// Poll the part ID until the chip stops answering, then hand the bus back.
async fn watch<SPI: SpiDevice>(mut device: Ad9508<SpiTransport<SPI>>) {
    loop {
        Timer::after_secs(10).await;

        match device.part_id() {
            Ok(id) if id == PART_ID_VALUE => continue,
            Ok(id) => println!("ad9508 part id changed to {id:#06x}, restarting"),
            Err(e) => println!("ad9508 read error {e:?}, restarting"),
        }

        if let Err(e) = device.teardown() {
            println!("error releasing ad9508 bus {e:?}");
        }
        return;
    }
}

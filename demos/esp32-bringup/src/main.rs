#![no_std]
#![no_main]
#![feature(type_alias_impl_trait)]

mod clock;

use embassy_executor::Spawner;
use embassy_time::Timer;
use esp_backtrace as _;
use esp_hal::clock::ClockControl;
use esp_hal::IO;
use esp_hal::{embassy, peripherals::Peripherals, prelude::*, timer::TimerGroup};
use esp_println::println;
use static_cell::make_static;

#[main]
async fn main(spawner: Spawner) -> ! {
    esp_println::logger::init_logger(log::LevelFilter::Info);

    // -------------------------------------------------------------------------
    // setup

    let peripherals = Peripherals::take();

    let io = IO::new(peripherals.GPIO, peripherals.IO_MUX);

    // clocks
    let system = peripherals.SYSTEM.split();
    let clocks = ClockControl::max(system.clock_control).freeze();
    let clocks = &*make_static!(clocks);

    println!("startup");

    // embassy
    embassy::init(&clocks, TimerGroup::new(peripherals.TIMG0, &clocks));

    // -------------------------------------------------------------------------
    // clock fanout

    spawner.must_spawn(clock::run_ad9508(
        peripherals.SPI2,
        &clocks,
        io.pins.gpio14.into(),
        io.pins.gpio13.into(),
        io.pins.gpio12.into(),
        io.pins.gpio15.into(),
    ));

    loop {
        Timer::after_secs(107).await;
    }
}

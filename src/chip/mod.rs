mod registers;
pub use registers::Reg;

mod configuration;
pub use configuration::*;

mod bringup;
use bringup::BringUp;

pub mod codec;

use embedded_hal::delay::DelayNs;
use heapless::Vec;
use log::{info, warn};

use crate::driver::Transport;
use crate::Error;

/// An output configuration write that failed under [`WritePolicy::BestEffort`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ConfigWarning<E> {
    pub reg: Reg,
    pub error: E,
}

/// A reset, identified and configured AD9508.
///
/// The only way to get one is [`Ad9508::setup`], so holding an `Ad9508` means
/// the part ID matched and the output registers were written.
pub struct Ad9508<T: Transport> {
    transport: T,
    warnings: Vec<ConfigWarning<T::Error>, 4>,
}

impl<T: Transport> Ad9508<T> {
    /// Open the bus and bring the chip up:
    ///
    /// 1. soft reset through SPI_CONFIG, then wait `reset_settle_ms`
    /// 2. verify PART_ID_LOW, then PART_ID_HIGH, against `expected_part_id`
    /// 3. write divide-by-one / zero phase to the selected output
    ///
    /// Stops at the first failing step. If the bus was already open it is
    /// released before the error is returned.
    pub fn setup<D: DelayNs>(
        bus_config: T::Config,
        delay: &mut D,
        config: &Ad9508Configuration,
    ) -> Result<Self, Error<T::Error>> {
        let mut bring_up = BringUp::<T>::open(bus_config)?;

        bring_up.soft_reset(delay, config.reset_settle_ms);

        if let Err(e) = bring_up.check_identity(config.expected_part_id) {
            return Err(bring_up.fail(e));
        }

        if let Err(e) = bring_up.configure_output(config.output, config.write_policy) {
            return Err(bring_up.fail(e));
        }

        let (transport, warnings) = bring_up.finish();
        info!(
            "ad9508 ready, {:?} passing through ({} warnings)",
            config.output,
            warnings.len()
        );

        Ok(Self {
            transport,
            warnings,
        })
    }

    pub fn read(&mut self, addr: u16) -> Result<u8, Error<T::Error>> {
        codec::read(&mut self.transport, addr)
    }

    pub fn write(&mut self, addr: u16, value: u8) -> Result<(), Error<T::Error>> {
        codec::write(&mut self.transport, addr, value)
    }

    pub fn part_id(&mut self) -> Result<u16, Error<T::Error>> {
        let low = self.read(Reg::PART_ID_LOW.addr())?;
        let high = self.read(Reg::PART_ID_HIGH.addr())?;
        Ok(u16::from_be_bytes([high, low]))
    }

    /// Output writes that failed during setup, empty under [`WritePolicy::Strict`].
    pub fn setup_warnings(&self) -> &[ConfigWarning<T::Error>] {
        &self.warnings
    }

    /// Release the bus session. The handle is gone afterwards whatever the
    /// transport reports.
    pub fn teardown(self) -> Result<(), T::Error> {
        let res = self.transport.release();
        if let Err(e) = &res {
            warn!("ad9508 bus release failed: {e:?}");
        }
        res
    }
}

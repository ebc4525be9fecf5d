use embedded_hal::delay::DelayNs;
use heapless::Vec;
use log::{debug, trace, warn};

use super::codec;
use super::configuration::{Output, WritePolicy, DIVIDE_RATIO_ONE, SOFT_RESET};
use super::registers::Reg;
use super::ConfigWarning;
use crate::driver::Transport;
use crate::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum BringUpState {
    Unconfigured,
    BusOpen,
    Reset,
    IdentityChecked,
    Configured,
    Failed,
}

/// A chip on its way from power-on to [`Ad9508`](super::Ad9508). Steps must
/// be called in order, a failed step is handed to [`BringUp::fail`].
pub(crate) struct BringUp<T: Transport> {
    transport: T,
    state: BringUpState,
    warnings: Vec<ConfigWarning<T::Error>, 4>,
}

impl<T: Transport> BringUp<T> {
    pub fn open(bus_config: T::Config) -> Result<Self, Error<T::Error>> {
        match T::initialize(bus_config) {
            Ok(transport) => {
                trace!("ad9508 {:?} -> {:?}", BringUpState::Unconfigured, BringUpState::BusOpen);
                Ok(Self {
                    transport,
                    state: BringUpState::BusOpen,
                    warnings: Vec::new(),
                })
            }
            Err(e) => {
                warn!("ad9508 bus init failed: {e:?}");
                Err(Error::Transport(e))
            }
        }
    }

    fn enter(&mut self, next: BringUpState) {
        trace!("ad9508 {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    pub fn soft_reset<D: DelayNs>(&mut self, delay: &mut D, settle_ms: u32) {
        // the chip drops off the bus while resetting, the status means nothing
        if let Err(e) = codec::write(&mut self.transport, Reg::SPI_CONFIG.addr(), SOFT_RESET) {
            debug!("ad9508 soft reset write: {e:?}");
        }
        delay.delay_ms(settle_ms);
        self.enter(BringUpState::Reset);
    }

    pub fn check_identity(&mut self, expected_part_id: u16) -> Result<(), Error<T::Error>> {
        let [expected_high, expected_low] = expected_part_id.to_be_bytes();

        for (reg, expected) in [
            (Reg::PART_ID_LOW, expected_low),
            (Reg::PART_ID_HIGH, expected_high),
        ] {
            let found = codec::read(&mut self.transport, reg.addr())?;
            if found != expected {
                // the chip answered, just not as an AD9508
                self.enter(BringUpState::IdentityChecked);
                return Err(Error::IdentityMismatch {
                    reg,
                    expected,
                    found,
                });
            }
        }

        self.enter(BringUpState::IdentityChecked);
        Ok(())
    }

    pub fn configure_output(
        &mut self,
        output: Output,
        policy: WritePolicy,
    ) -> Result<(), Error<T::Error>> {
        for reg in output.registers() {
            match codec::write(&mut self.transport, reg.addr(), DIVIDE_RATIO_ONE) {
                Ok(()) => (),
                Err(Error::Transport(error)) if policy == WritePolicy::BestEffort => {
                    warn!("ad9508 writing {reg:?} failed, continuing: {error:?}");
                    // one slot per output register, cannot overflow
                    let _ = self.warnings.push(ConfigWarning { reg, error });
                }
                Err(e) => return Err(e),
            }
        }

        self.enter(BringUpState::Configured);
        Ok(())
    }

    /// Close the bus after a failed step. The release status is only logged,
    /// `error` is what the caller gets.
    pub fn fail(mut self, error: Error<T::Error>) -> Error<T::Error> {
        self.enter(BringUpState::Failed);
        warn!("ad9508 bring-up failed: {error:?}");
        if let Err(e) = self.transport.release() {
            warn!("ad9508 bus release after failed bring-up: {e:?}");
        }
        error
    }

    pub fn finish(self) -> (T, Vec<ConfigWarning<T::Error>, 4>) {
        debug_assert_eq!(self.state, BringUpState::Configured);
        (self.transport, self.warnings)
    }
}

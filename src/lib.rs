//! Driver for the Analog Devices AD9508 clock fanout buffer.
//!
//! Registers are accessed with 3-byte SPI frames (see [`codec`]). [`Ad9508::setup`]
//! soft-resets the chip, verifies its part ID and configures one output for
//! divide-by-one pass-through. A handle only exists once all of that succeeded.

#![cfg_attr(not(test), no_std)]

mod chip;
mod driver;
mod error;

pub use chip::codec;
pub use chip::{
    Ad9508, Ad9508Configuration, ConfigWarning, Output, Reg, WritePolicy, DIVIDE_RATIO_ONE,
    PART_ID_VALUE, RESET_SETTLE_MS, SOFT_RESET,
};
pub use driver::spi::SpiTransport;
pub use driver::Transport;
pub use error::Error;

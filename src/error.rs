use core::fmt;

use crate::chip::Reg;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// The bus session failed to open, exchange or close. Carries the
    /// transport's own error unchanged.
    Transport(E),
    /// Register addresses are 15 bits wide, bit 7 of the first frame byte is
    /// the read flag.
    InvalidAddress(u16),
    /// A part ID register did not hold the expected byte: wrong chip, or
    /// nothing answering on the bus.
    IdentityMismatch { reg: Reg, expected: u8, found: u8 },
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Error::Transport(error)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Transport(e) => write!(f, "bus error: {:?}", e),
            Error::InvalidAddress(addr) => {
                write!(f, "register address {:#06x} exceeds 15 bits", addr)
            }
            Error::IdentityMismatch {
                reg,
                expected,
                found,
            } => write!(
                f,
                "unexpected part id in {:?}: expected {:#04x}, found {:#04x}",
                reg, expected, found
            ),
        }
    }
}

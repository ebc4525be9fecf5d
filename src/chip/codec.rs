//! Register access frames.
//!
//! Every access is one 3-byte full duplex transfer: the MSB of byte 0 is the
//! read flag, the remaining 7 bits are address bits 14-8, byte 1 carries
//! address bits 7-0 and byte 2 the data (written, or clocked back on a read).

use log::debug;

use crate::driver::Transport;
use crate::Error;

pub const FRAME_LEN: usize = 3;

/// highest register address that fits next to the read flag
pub const ADDR_MAX: u16 = 0x7fff;

const FLAG_READ: u8 = 0x80;

fn check_addr<E>(addr: u16) -> Result<(), Error<E>> {
    if addr > ADDR_MAX {
        return Err(Error::InvalidAddress(addr));
    }
    Ok(())
}

/// Frame for reading `addr`. Byte 2 is a placeholder.
pub fn read_frame(addr: u16) -> [u8; FRAME_LEN] {
    let [addr_high, addr_low] = (addr & ADDR_MAX).to_be_bytes();
    [FLAG_READ | addr_high, addr_low, 0x00]
}

/// Frame for writing `value` to `addr`.
pub fn write_frame(addr: u16, value: u8) -> [u8; FRAME_LEN] {
    let [addr_high, addr_low] = (addr & ADDR_MAX).to_be_bytes();
    [addr_high, addr_low, value]
}

pub fn read<T: Transport>(transport: &mut T, addr: u16) -> Result<u8, Error<T::Error>> {
    check_addr::<T::Error>(addr)?;
    let mut buf = read_frame(addr);
    transport.exchange(&mut buf)?;
    debug!("ad9508 read {addr:#05x} -> {:#04x}", buf[2]);
    Ok(buf[2])
}

pub fn write<T: Transport>(transport: &mut T, addr: u16, value: u8) -> Result<(), Error<T::Error>> {
    check_addr::<T::Error>(addr)?;
    let mut buf = write_frame(addr, value);
    debug!("ad9508 write {addr:#05x} <- {value:#04x}");
    transport.exchange(&mut buf)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn frame_layout() {
        assert_eq!(read_frame(0x000c), [0x80, 0x0c, 0x00]);
        assert_eq!(read_frame(0x7fff), [0xff, 0xff, 0x00]);
        assert_eq!(write_frame(0x0000, 0x24), [0x00, 0x00, 0x24]);
        assert_eq!(write_frame(0x0a1b, 0x01), [0x0a, 0x1b, 0x01]);
    }

    struct Unreachable;

    impl Transport for Unreachable {
        type Config = ();
        type Error = ();

        fn initialize(_: ()) -> Result<Self, ()> {
            Ok(Unreachable)
        }

        fn exchange(&mut self, _: &mut [u8]) -> Result<(), ()> {
            panic!("no frame may be sent for an invalid address");
        }

        fn release(self) -> Result<(), ()> {
            Ok(())
        }
    }

    #[test]
    fn sixteen_bit_address_is_rejected_before_bus_access() {
        let mut bus = Unreachable;
        assert_eq!(read(&mut bus, 0x8000), Err(Error::InvalidAddress(0x8000)));
        assert_eq!(write(&mut bus, 0xffff, 0x01), Err(Error::InvalidAddress(0xffff)));
    }

    proptest! {
        #[test]
        fn read_and_write_frames_differ_only_in_flag_and_data(addr in 0u16..=ADDR_MAX, value in any::<u8>()) {
            let r = read_frame(addr);
            let w = write_frame(addr, value);

            prop_assert_eq!(r[0] ^ w[0], FLAG_READ);
            prop_assert_eq!(w[0] & FLAG_READ, 0);
            prop_assert_eq!(r[1], w[1]);
            prop_assert_eq!(r[2], 0x00);
            prop_assert_eq!(w[2], value);
            prop_assert_eq!(u16::from_be_bytes([w[0], w[1]]), addr);
        }
    }
}

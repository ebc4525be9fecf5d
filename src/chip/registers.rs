use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
#[repr(u16)]
pub enum Reg {
    /// SPI port configuration, soft reset and bit order
    SPI_CONFIG = 0x000,
    /// part ID [7:0], read only
    PART_ID_LOW = 0x00C,
    /// part ID [15:8], read only
    PART_ID_HIGH = 0x00D,

    // OUT0
    OUT0_DIV_RATIO_LOW = 0x015,
    OUT0_DIV_RATIO_HIGH = 0x016,
    OUT0_PHASE_LOW = 0x017,
    OUT0_PHASE_HIGH = 0x018,

    // OUT1
    OUT1_DIV_RATIO_LOW = 0x01B,
    OUT1_DIV_RATIO_HIGH = 0x01C,
    OUT1_PHASE_LOW = 0x01D,
    OUT1_PHASE_HIGH = 0x01E,

    // OUT2
    OUT2_DIV_RATIO_LOW = 0x021,
    OUT2_DIV_RATIO_HIGH = 0x022,
    OUT2_PHASE_LOW = 0x023,
    OUT2_PHASE_HIGH = 0x024,

    // OUT3
    OUT3_DIV_RATIO_LOW = 0x027,
    OUT3_DIV_RATIO_HIGH = 0x028,
    OUT3_PHASE_LOW = 0x029,
    OUT3_PHASE_HIGH = 0x02A,
}

impl Reg {
    /// every register the driver knows about, in address order
    pub const ALL: [Reg; 19] = [
        Reg::SPI_CONFIG,
        Reg::PART_ID_LOW,
        Reg::PART_ID_HIGH,
        Reg::OUT0_DIV_RATIO_LOW,
        Reg::OUT0_DIV_RATIO_HIGH,
        Reg::OUT0_PHASE_LOW,
        Reg::OUT0_PHASE_HIGH,
        Reg::OUT1_DIV_RATIO_LOW,
        Reg::OUT1_DIV_RATIO_HIGH,
        Reg::OUT1_PHASE_LOW,
        Reg::OUT1_PHASE_HIGH,
        Reg::OUT2_DIV_RATIO_LOW,
        Reg::OUT2_DIV_RATIO_HIGH,
        Reg::OUT2_PHASE_LOW,
        Reg::OUT2_PHASE_HIGH,
        Reg::OUT3_DIV_RATIO_LOW,
        Reg::OUT3_DIV_RATIO_HIGH,
        Reg::OUT3_PHASE_LOW,
        Reg::OUT3_PHASE_HIGH,
    ];

    pub const fn addr(&self) -> u16 {
        *self as u16
    }

    pub fn from_addr(addr: u16) -> Option<Reg> {
        Self::ALL.iter().copied().find(|reg| reg.addr() == addr)
    }
}

impl From<Reg> for u16 {
    fn from(reg: Reg) -> u16 {
        reg.addr()
    }
}

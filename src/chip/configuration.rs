use serde::{Deserialize, Serialize};

use super::registers::Reg;

/// SPI_CONFIG value that sets both soft reset bits (mirrored nibbles)
pub const SOFT_RESET: u8 = 0x24;
pub const PART_ID_VALUE: u16 = 0x0100;
/// written to the divider and phase registers for an unmodified pass-through
pub const DIVIDE_RATIO_ONE: u8 = 0x01;
pub const RESET_SETTLE_MS: u32 = 250;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Output {
    Out0,
    #[default]
    Out1,
    Out2,
    Out3,
}

impl Output {
    /// divider [7:0], divider [9:8], phase [7:0], phase [10:8]
    pub fn registers(&self) -> [Reg; 4] {
        match self {
            Output::Out0 => [
                Reg::OUT0_DIV_RATIO_LOW,
                Reg::OUT0_DIV_RATIO_HIGH,
                Reg::OUT0_PHASE_LOW,
                Reg::OUT0_PHASE_HIGH,
            ],
            Output::Out1 => [
                Reg::OUT1_DIV_RATIO_LOW,
                Reg::OUT1_DIV_RATIO_HIGH,
                Reg::OUT1_PHASE_LOW,
                Reg::OUT1_PHASE_HIGH,
            ],
            Output::Out2 => [
                Reg::OUT2_DIV_RATIO_LOW,
                Reg::OUT2_DIV_RATIO_HIGH,
                Reg::OUT2_PHASE_LOW,
                Reg::OUT2_PHASE_HIGH,
            ],
            Output::Out3 => [
                Reg::OUT3_DIV_RATIO_LOW,
                Reg::OUT3_DIV_RATIO_HIGH,
                Reg::OUT3_PHASE_LOW,
                Reg::OUT3_PHASE_HIGH,
            ],
        }
    }
}

/// What to do when one of the output configuration writes fails.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WritePolicy {
    /// keep going, the failure is logged and kept as a [`ConfigWarning`](super::ConfigWarning)
    #[default]
    BestEffort,
    /// abort setup with the first failure
    Strict,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ad9508Configuration {
    /// compared against PART_ID_HIGH:PART_ID_LOW after reset
    pub expected_part_id: u16,
    /// wait after the soft reset before talking to the chip again
    pub reset_settle_ms: u32,
    pub output: Output,
    pub write_policy: WritePolicy,
}

impl Default for Ad9508Configuration {
    fn default() -> Self {
        Self {
            expected_part_id: PART_ID_VALUE,
            reset_settle_ms: RESET_SETTLE_MS,
            output: Default::default(),
            write_policy: Default::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configures_out1_with_legacy_timing() {
        let config = Ad9508Configuration::default();
        assert_eq!(config.expected_part_id, 0x0100);
        assert_eq!(config.reset_settle_ms, 250);
        assert_eq!(
            config.output.registers(),
            [
                Reg::OUT1_DIV_RATIO_LOW,
                Reg::OUT1_DIV_RATIO_HIGH,
                Reg::OUT1_PHASE_LOW,
                Reg::OUT1_PHASE_HIGH
            ]
        );
        assert_eq!(config.write_policy, WritePolicy::BestEffort);
    }

    #[test]
    fn survives_postcard_storage() {
        let config = Ad9508Configuration {
            expected_part_id: 0x0105,
            reset_settle_ms: 100,
            output: Output::Out3,
            write_policy: WritePolicy::Strict,
        };

        let mut buffer = [0u8; 32];
        let bytes = postcard::to_slice(&config, &mut buffer).unwrap();
        let loaded: Ad9508Configuration = postcard::from_bytes(bytes).unwrap();

        assert_eq!(loaded, config);
    }
}

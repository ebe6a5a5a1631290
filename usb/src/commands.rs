#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Stop,
    Start,
    Check,
    Status,
    SetFrequency,
    Store,
    /// One raw byte of the encoded frequency register. The tuner accepts data
    /// through the same transfer shape as its commands, so the high and low
    /// register bytes each travel as a "command" of their own.
    Data(u8),
}

impl Command {
    pub fn command_code(&self) -> u8 {
        match self {
            Command::Stop => 0x00,
            Command::Start => 0x01,
            Command::Check => 0x02,
            Command::Status => 0x78,
            Command::SetFrequency => 0x79,
            Command::Store => 0x7a,
            Command::Data(byte) => *byte,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Command;

    #[test]
    fn command_codes_match_the_revised_firmware() {
        assert_eq!(Command::Stop.command_code(), 0x00);
        assert_eq!(Command::Start.command_code(), 0x01);
        assert_eq!(Command::Check.command_code(), 0x02);
        assert_eq!(Command::Status.command_code(), 0x78);
        assert_eq!(Command::SetFrequency.command_code(), 0x79);
        assert_eq!(Command::Store.command_code(), 0x7a);
    }

    #[test]
    fn data_commands_carry_their_byte_untouched() {
        for byte in [0x00, 0x18, 0x70, 0xff] {
            assert_eq!(Command::Data(byte).command_code(), byte);
        }
    }
}

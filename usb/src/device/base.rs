use crate::commands::Command;
use crate::error::CommandError;
use crate::frequency::ProtocolVariant;
use byteorder::{BigEndian, ByteOrder};
use log::{debug, warn};

// The Status response carries the current tuning register at this offset.
const STATUS_REGISTER_OFFSET: usize = 4;

pub trait ExecutableFmMouse {
    /// Issues a single control transfer whose descriptor index carries
    /// `command`, returning whatever the tuner put into the 1024 byte
    /// response buffer.
    fn request(&mut self, command: Command) -> Result<Vec<u8>, CommandError>;
}

// The protocol itself, layered over `request`. The tuner tolerates individual
// failed transfers, so the command methods log and carry on rather than
// aborting the session.
pub trait FmMouseCommands: ExecutableFmMouse {
    fn send_command(&mut self, command: Command) {
        if let Err(error) = self.request(command) {
            warn!("Unable to complete {:?} request: {}", command, error);
        }
    }

    /// Writes the tuning register: the set-frequency command followed by the
    /// high and low register bytes, each travelling as a command of its own.
    /// The tuner sends no acknowledgement.
    fn set_frequency(&mut self, variant: ProtocolVariant, frequency: i32) {
        let [high, low] = variant.encode_bytes(frequency);
        debug!(
            "Writing tuning register {:#06x}",
            variant.encode(frequency)
        );

        self.send_command(Command::SetFrequency);
        self.send_command(Command::Data(high));
        self.send_command(Command::Data(low));
    }

    /// The full tuning session for the revised firmware. The protocol also
    /// defines a trailing Store / Stop pair, but the tuner is left running
    /// after the final Status.
    fn tune(&mut self, variant: ProtocolVariant, frequency: i32) {
        self.send_command(Command::Start);
        self.send_command(Command::Store);
        self.send_command(Command::Check);
        self.set_frequency(variant, frequency);
        self.send_command(Command::Check);
        self.send_command(Command::Status);
    }

    /// Reads the tuning register back via a Status request and undoes the
    /// affine encoding.
    fn current_frequency(&mut self, variant: ProtocolVariant) -> Result<i32, CommandError> {
        let response = self.request(Command::Status)?;
        if response.len() < STATUS_REGISTER_OFFSET + 2 {
            return Err(CommandError::ShortResponse {
                expected: STATUS_REGISTER_OFFSET + 2,
                received: response.len(),
            });
        }

        let register = BigEndian::read_u16(&response[STATUS_REGISTER_OFFSET..]);
        Ok(variant.decode(register))
    }
}

// We primarily need the bus number, and address for comparison..
#[derive(Debug, Clone)]
pub struct FmMouseDevice {
    pub(crate) bus_number: u8,
    pub(crate) address: u8,
}

impl FmMouseDevice {
    pub fn bus_number(&self) -> u8 {
        self.bus_number
    }

    pub fn address(&self) -> u8 {
        self.address
    }
}

pub struct UsbData {
    pub(crate) vendor_id: u16,
    pub(crate) product_id: u16,
    pub(crate) device_version: (u8, u8, u8),
    pub(crate) product_name: Option<String>,
}

impl UsbData {
    pub fn vendor_id(&self) -> u16 {
        self.vendor_id
    }

    pub fn product_id(&self) -> u16 {
        self.product_id
    }

    pub fn device_version(&self) -> (u8, u8, u8) {
        self.device_version
    }

    pub fn product_name(&self) -> Option<String> {
        self.product_name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::{ExecutableFmMouse, FmMouseCommands};
    use crate::commands::Command;
    use crate::error::CommandError;
    use crate::frequency::ProtocolVariant;
    use byteorder::{BigEndian, ByteOrder};

    /// Stand-in transport that records every transfer, optionally failing a
    /// chosen command to exercise the session's failure tolerance.
    struct RecordingMouse {
        issued: Vec<Command>,
        fail_on: Option<Command>,
        status_response: Vec<u8>,
    }

    impl RecordingMouse {
        fn new() -> Self {
            Self {
                issued: Vec::new(),
                fail_on: None,
                status_response: vec![0; 1024],
            }
        }

        fn with_register(register: u16) -> Self {
            let mut mouse = Self::new();
            BigEndian::write_u16(&mut mouse.status_response[4..6], register);
            mouse
        }
    }

    impl ExecutableFmMouse for RecordingMouse {
        fn request(&mut self, command: Command) -> Result<Vec<u8>, CommandError> {
            self.issued.push(command);
            if self.fail_on == Some(command) {
                return Err(CommandError::UsbError(rusb::Error::Pipe));
            }
            Ok(self.status_response.clone())
        }
    }

    impl FmMouseCommands for RecordingMouse {}

    #[test]
    fn set_frequency_sends_mode_then_register_bytes() {
        let mut mouse = RecordingMouse::new();
        mouse.set_frequency(ProtocolVariant::Revised, 881);

        assert_eq!(
            mouse.issued,
            vec![
                Command::SetFrequency,
                Command::Data(0x18),
                Command::Data(0x70),
            ]
        );
    }

    #[test]
    fn tune_runs_the_full_session_in_order() {
        let mut mouse = RecordingMouse::new();
        mouse.tune(ProtocolVariant::Revised, 881);

        assert_eq!(
            mouse.issued,
            vec![
                Command::Start,
                Command::Store,
                Command::Check,
                Command::SetFrequency,
                Command::Data(0x18),
                Command::Data(0x70),
                Command::Check,
                Command::Status,
            ]
        );
    }

    #[test]
    fn a_failed_transfer_does_not_abort_the_session() {
        let mut mouse = RecordingMouse::new();
        mouse.fail_on = Some(Command::Store);
        mouse.tune(ProtocolVariant::Revised, 881);

        // Every transfer after the failed Store is still issued.
        assert_eq!(mouse.issued.len(), 8);
        assert_eq!(mouse.issued.last(), Some(&Command::Status));
    }

    #[test]
    fn current_frequency_undoes_the_encoding() {
        let register = ProtocolVariant::Revised.encode(915);
        let mut mouse = RecordingMouse::with_register(register);

        assert_eq!(
            mouse.current_frequency(ProtocolVariant::Revised).unwrap(),
            915
        );
        assert_eq!(mouse.issued, vec![Command::Status]);
    }

    #[test]
    fn a_short_status_response_is_an_error() {
        let mut mouse = RecordingMouse::new();
        mouse.status_response = vec![0; 4];

        assert!(matches!(
            mouse.current_frequency(ProtocolVariant::Revised),
            Err(CommandError::ShortResponse { received: 4, .. })
        ));
    }
}

pub use rusb;

pub mod commands;
pub mod error;
pub mod frequency;

mod device;

pub use device::base::{ExecutableFmMouse, FmMouseCommands, FmMouseDevice, UsbData};
pub use device::{find_devices, from_device, is_fm_mouse, FmMouseUsb};

/// Vendor / product identity of the FM radio mouse. The hardware reports a
/// generic Cypress vendor ID, so both halves must match exactly.
pub const VID_FM_MOUSE: u16 = 0x04b4;
pub const PID_FM_MOUSE: u16 = 0x0001;

// This module wraps USB discovery into some 'Plain Old Rust Structs' which the
// client can hold without being aware of what goes on 'Under the Hood' of the
// tuner, nor the libusb communication layer.
use crate::device::base::FmMouseDevice;
use crate::error::ConnectError;
use crate::{PID_FM_MOUSE, VID_FM_MOUSE};
use log::debug;
use rusb::GlobalContext;

pub mod base;
mod libusb;

pub use libusb::device::FmMouseUsb;

/// The hardware identity check. The mouse reports a generic Cypress vendor ID
/// shared by plenty of unrelated hardware, so anything short of an exact match
/// on both halves is rejected.
pub fn is_fm_mouse(vendor_id: u16, product_id: u16) -> bool {
    vendor_id == VID_FM_MOUSE && product_id == PID_FM_MOUSE
}

/// One pass over the devices currently attached to the host, collecting the
/// location of every FM radio mouse. Candidates whose descriptor cannot be
/// read are skipped; mismatching identities are logged and left untouched.
pub fn find_devices() -> Result<Vec<FmMouseDevice>, rusb::Error> {
    let mut found_devices: Vec<FmMouseDevice> = Vec::new();

    for device in rusb::devices()?.iter() {
        let descriptor = match device.device_descriptor() {
            Ok(descriptor) => descriptor,
            Err(error) => {
                debug!("Unable to read a device descriptor: {}", error);
                continue;
            }
        };

        if !is_fm_mouse(descriptor.vendor_id(), descriptor.product_id()) {
            debug!(
                "Found unwanted device (vendor = {:#06x}, product = {:#06x})",
                descriptor.vendor_id(),
                descriptor.product_id()
            );
            continue;
        }

        found_devices.push(FmMouseDevice {
            bus_number: device.bus_number(),
            address: device.address(),
        });
    }

    Ok(found_devices)
}

/// Re-validates the identity of the device at the given location and opens it.
pub fn from_device(device: FmMouseDevice) -> Result<FmMouseUsb<GlobalContext>, ConnectError> {
    FmMouseUsb::from_device(device)
}

#[cfg(test)]
mod tests {
    use super::is_fm_mouse;

    #[test]
    fn only_the_exact_identity_pair_matches() {
        assert!(is_fm_mouse(0x04b4, 0x0001));

        // Same vendor, different product - the case that bit the original
        // hardware, Cypress reference designs share the vendor ID.
        assert!(!is_fm_mouse(0x04b4, 0x0002));
        assert!(!is_fm_mouse(0x04b4, 0x0000));

        // Same product ID under other vendors.
        assert!(!is_fm_mouse(0x1220, 0x0001));
        assert!(!is_fm_mouse(0x0000, 0x0001));
        assert!(!is_fm_mouse(0xffff, 0xffff));
    }
}

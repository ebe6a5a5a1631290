use crate::commands::Command;
use crate::device::base::{ExecutableFmMouse, FmMouseCommands, FmMouseDevice, UsbData};
use crate::device::is_fm_mouse;
use crate::error::{CommandError, ConnectError};
use log::{debug, info};
use rusb::constants::{LIBUSB_DT_STRING, LIBUSB_REQUEST_GET_DESCRIPTOR};
use rusb::{
    Device, DeviceDescriptor, DeviceHandle, Direction, GlobalContext, Language, Recipient,
    RequestType, UsbContext,
};
use std::time::Duration;

// The tuner speaks entirely through standard GetDescriptor string requests:
// the descriptor index is the command byte, and wIndex stays pinned at the US
// English language ID whether or not a string is actually involved.
const LANGUAGE_ID: u16 = 0x0409;
const RESPONSE_LENGTH: usize = 1024;

pub struct FmMouseUsb<T: UsbContext> {
    handle: DeviceHandle<T>,
    descriptor: DeviceDescriptor,
    language: Option<Language>,
    timeout: Duration,
}

impl FmMouseUsb<GlobalContext> {
    fn locate(
        device: &FmMouseDevice,
    ) -> Result<(Device<GlobalContext>, DeviceDescriptor), ConnectError> {
        for usb_device in rusb::devices()?.iter() {
            if usb_device.bus_number() == device.bus_number()
                && usb_device.address() == device.address()
            {
                if let Ok(descriptor) = usb_device.device_descriptor() {
                    return Ok((usb_device, descriptor));
                }
            }
        }
        Err(ConnectError::DeviceNotFound)
    }

    pub fn from_device(device: FmMouseDevice) -> Result<Self, ConnectError> {
        // Relocate the device by bus and address, then re-validate its
        // identity before opening. Anything else on the bus stays untouched.
        let (usb_device, descriptor) = Self::locate(&device)?;
        if !is_fm_mouse(descriptor.vendor_id(), descriptor.product_id()) {
            return Err(ConnectError::NotAnFmMouse(
                descriptor.vendor_id(),
                descriptor.product_id(),
            ));
        }

        let handle = usb_device.open()?;
        info!("Connected to possible FM radio mouse at {:?}", usb_device);

        let timeout = Duration::from_secs(1);

        // The mouse half of the hardware may be bound to a kernel driver; we
        // only ever talk to the default control endpoint, so this is best
        // effort.
        let _ = handle.set_auto_detach_kernel_driver(true);

        let language = handle
            .read_languages(timeout)
            .ok()
            .and_then(|languages| languages.first().copied());

        Ok(Self {
            handle,
            descriptor,
            language,
            timeout,
        })
    }
}

impl<T: UsbContext> FmMouseUsb<T> {
    pub fn product_name(&self) -> Option<String> {
        let language = self.language?;
        self.handle
            .read_product_string(language, &self.descriptor, self.timeout)
            .ok()
    }

    pub fn usb_data(&self) -> UsbData {
        let version = self.descriptor.usb_version();

        UsbData {
            vendor_id: self.descriptor.vendor_id(),
            product_id: self.descriptor.product_id(),
            device_version: (version.0, version.1, version.2),
            product_name: self.product_name(),
        }
    }
}

impl<T: UsbContext> ExecutableFmMouse for FmMouseUsb<T> {
    fn request(&mut self, command: Command) -> Result<Vec<u8>, CommandError> {
        let value = (LIBUSB_DT_STRING as u16) << 8 | command.command_code() as u16;
        debug!("Issuing {:?} (wValue = {:#06x})", command, value);

        let mut buffer = vec![0; RESPONSE_LENGTH];
        let received = self.handle.read_control(
            rusb::request_type(Direction::In, RequestType::Standard, Recipient::Device),
            LIBUSB_REQUEST_GET_DESCRIPTOR,
            value,
            LANGUAGE_ID,
            &mut buffer,
            self.timeout,
        )?;

        buffer.truncate(received);
        Ok(buffer)
    }
}

impl<T: UsbContext> FmMouseCommands for FmMouseUsb<T> {}

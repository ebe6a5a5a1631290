#[derive(thiserror::Error, Debug)]
pub enum ConnectError {
    #[error("No FM radio mouse was found")]
    DeviceNotFound,

    #[error("USB error: {0}")]
    UsbError(#[from] rusb::Error),

    #[error("Device is not an FM radio mouse (vendor = {0:#06x}, product = {1:#06x})")]
    NotAnFmMouse(u16, u16),
}

#[derive(thiserror::Error, Debug)]
pub enum CommandError {
    #[error("USB error: {0}")]
    UsbError(#[from] rusb::Error),

    #[error("Short response from tuner, expected at least {expected} bytes, received {received}")]
    ShortResponse { expected: usize, received: usize },
}

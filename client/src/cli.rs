use clap::{Parser, ValueEnum};
use fmmouse_usb::frequency::ProtocolVariant;

#[derive(Parser, Debug)]
#[clap(about, version, author)]
pub struct Cli {
    /// Target FM frequency in tenths of a megahertz (881 tunes to 88.1 MHz)
    pub frequency: i32,

    /// Firmware revision of the tuner to speak to
    #[clap(long, value_enum, default_value = "revised")]
    pub variant: ProtocolVariant,

    /// Minimum log level to print out
    #[clap(long, value_enum, default_value = "info")]
    pub log_level: LevelFilter,
}

#[derive(ValueEnum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum LevelFilter {
    /// A level lower than all log levels.
    Off,
    /// Corresponds to the `Error` log level.
    Error,
    /// Corresponds to the `Warn` log level.
    Warn,
    /// Corresponds to the `Info` log level.
    Info,
    /// Corresponds to the `Debug` log level.
    Debug,
    /// Corresponds to the `Trace` log level.
    Trace,
}

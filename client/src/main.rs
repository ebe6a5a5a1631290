use anyhow::{Context, Result};
use clap::Parser;
use fmmouse_usb::{find_devices, from_device, FmMouseCommands};
use log::{debug, error, info, warn};
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

use crate::cli::{Cli, LevelFilter};

mod cli;

fn main() -> Result<()> {
    let args: Cli = Cli::parse();

    CombinedLogger::init(vec![TermLogger::new(
        match args.log_level {
            LevelFilter::Off => log::LevelFilter::Off,
            LevelFilter::Error => log::LevelFilter::Error,
            LevelFilter::Warn => log::LevelFilter::Warn,
            LevelFilter::Info => log::LevelFilter::Info,
            LevelFilter::Debug => log::LevelFilter::Debug,
            LevelFilter::Trace => log::LevelFilter::Trace,
        },
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
    .context("Could not configure the logger")?;

    let devices = match find_devices() {
        Ok(devices) => devices,
        Err(error) => {
            // Without a device list there is nothing further to try.
            error!("Unable to enumerate USB devices: {}", error);
            std::process::exit(-1);
        }
    };

    if devices.is_empty() {
        // An absent mouse is not an error, the single pass simply ends.
        debug!("No FM radio mouse attached");
        return Ok(());
    }

    for device in devices {
        let (bus_number, address) = (device.bus_number(), device.address());

        // One device open at a time; the handle drops (and closes) at the end
        // of each iteration, whichever way the session went.
        let mut mouse = match from_device(device) {
            Ok(mouse) => mouse,
            Err(error) => {
                warn!(
                    "Skipping candidate at bus {} address {}: {}",
                    bus_number, address, error
                );
                continue;
            }
        };

        let data = mouse.usb_data();
        debug!(
            "Device identity {:04x}:{:04x}, version {:?}",
            data.vendor_id(),
            data.product_id(),
            data.device_version()
        );

        info!(
            "Tuning {} to {:.1} MHz",
            data.product_name()
                .unwrap_or_else(|| String::from("FM radio mouse")),
            args.frequency as f64 / 10.0
        );
        mouse.tune(args.variant, args.frequency);

        match mouse.current_frequency(args.variant) {
            Ok(frequency) => debug!("Tuner reports {:.1} MHz", frequency as f64 / 10.0),
            Err(error) => debug!("Unable to read the frequency back: {}", error),
        }
    }

    Ok(())
}

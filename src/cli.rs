// CLI definitions using clap

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pedal_driver")]
#[command(author, version, about = "USB HID foot pedal driver for Linux")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Poll the pedal and print state changes until interrupted
    #[command(visible_alias = "r")]
    Run {
        /// Vendor ID of the pedal, hex (e.g. 1a86)
        #[arg(long, requires = "pid")]
        vid: Option<String>,

        /// Product ID of the pedal, hex (e.g. e026)
        #[arg(long, requires = "vid")]
        pid: Option<String>,
    },

    /// Capture the pressed/released reports of an unknown pedal
    #[command(visible_alias = "cal")]
    Calibrate {
        /// Vendor ID of the pedal, hex (e.g. 1a86)
        vid: String,

        /// Product ID of the pedal, hex (e.g. e026)
        pid: String,
    },

    /// List HID devices, marking supported pedals
    #[command(visible_aliases = ["ls", "l"])]
    List,
}

//! Command handlers for the CLI application.
//!
//! This module organizes command handlers by category:
//! - `run`: The polling loop (default command)
//! - `calibrate`: Report capture for unknown pedals
//! - `utility`: Utility commands (list)

pub mod calibrate;
pub mod run;
pub mod utility;

use pedal_core::CancelToken;

/// Result type for command handlers
pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Set up a SIGINT/SIGTERM handler that cancels the returned token.
/// The polling loop watches the token and winds down on its own.
pub fn setup_interrupt_handler() -> CancelToken {
    let cancel = CancelToken::new();
    let handler = cancel.clone();

    ctrlc::set_handler(move || {
        handler.cancel();
    })
    .ok();

    cancel
}

/// Parse a u16 from hex, with or without a 0x prefix
pub fn parse_hex_u16(label: &str, value: &str) -> Result<u16, Box<dyn std::error::Error>> {
    let digits = value.trim_start_matches("0x").trim_start_matches("0X");
    u16::from_str_radix(digits, 16).map_err(|_| format!("Invalid {label}: {value}").into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_u16() {
        assert_eq!(parse_hex_u16("vendor ID", "1a86").unwrap(), 0x1a86);
        assert_eq!(parse_hex_u16("vendor ID", "0x1A86").unwrap(), 0x1a86);
        assert_eq!(parse_hex_u16("product ID", "e026").unwrap(), 0xe026);
    }

    #[test]
    fn test_parse_hex_u16_rejects_garbage() {
        assert!(parse_hex_u16("vendor ID", "pedal").is_err());
        assert!(parse_hex_u16("vendor ID", "").is_err());
        // Out of u16 range
        assert!(parse_hex_u16("vendor ID", "1a860").is_err());
    }
}

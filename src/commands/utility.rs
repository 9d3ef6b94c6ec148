//! Utility command handlers.

use hidapi::HidApi;

use super::CommandResult;
use pedal_driver::devices;

/// List all HID devices, marking the ones in the pedal registry
pub fn list(hidapi: &HidApi) -> CommandResult {
    println!("All HID devices:");
    for device_info in hidapi.device_list() {
        let vid = device_info.vendor_id();
        let pid = device_info.product_id();
        let supported = match devices::find_pedal(vid, pid) {
            Some(pedal) => format!("  <- {}", pedal.display_name),
            None => String::new(),
        };
        println!(
            "  VID={:04x} PID={:04x} usage={:04x} page={:04x} if={}{}",
            vid,
            pid,
            device_info.usage(),
            device_info.usage_page(),
            device_info.interface_number(),
            supported,
        );
    }
    Ok(())
}

//! Polling loop command handler.

use pedal_core::PedalPoller;
use tracing::info;

use super::{parse_hex_u16, setup_interrupt_handler, CommandResult};
use pedal_driver::devices::{self, PedalDefinition};

/// Poll a pedal and print every state change until interrupted.
///
/// The poller runs on its own thread; this thread joins it and maps an
/// open failure to a nonzero exit.
pub fn run(vid: Option<String>, pid: Option<String>) -> CommandResult {
    let pedal = resolve_pedal(vid, pid)?;
    let identity = pedal.identity();
    let signature = pedal.signature()?;

    let cancel = setup_interrupt_handler();
    let poller = PedalPoller::new(identity, signature)
        .on_state_change(|state| println!("Foot pedal {state}"));

    info!("Polling {} ({})", pedal.display_name, identity);

    let worker_cancel = cancel.clone();
    let worker = std::thread::Builder::new()
        .name("pedal-poller".into())
        .spawn(move || poller.run(&worker_cancel))?;

    worker.join().map_err(|_| "pedal poller thread panicked")??;

    info!("Pedal driver exiting");
    Ok(())
}

fn resolve_pedal(
    vid: Option<String>,
    pid: Option<String>,
) -> Result<&'static PedalDefinition, Box<dyn std::error::Error>> {
    match (vid, pid) {
        (Some(vid), Some(pid)) => {
            let vid = parse_hex_u16("vendor ID", &vid)?;
            let pid = parse_hex_u16("product ID", &pid)?;
            devices::find_pedal(vid, pid).ok_or_else(|| {
                let known = devices::SUPPORTED_PEDALS
                    .iter()
                    .map(|p| format!("{} ({:04x}:{:04x})", p.display_name, p.vid, p.pid))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!(
                    "No report signature known for {vid:04x}:{pid:04x}. \
                     Supported pedals: {known}. \
                     Capture a new signature with `pedal_driver calibrate`."
                )
                .into()
            })
        }
        _ => Ok(devices::DEFAULT_PEDAL),
    }
}

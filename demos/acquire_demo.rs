//! Acquire a few readouts from the configured camera and print a summary.
//!
//! Uses the in-memory demo camera unless built with `--features picam_hardware`.
//!
//! ```text
//! PICAM_ACQUISITION__READOUT_COUNT=5 RUST_LOG=picam=debug cargo run --example acquire_demo
//! ```

use anyhow::{Context, Result};
use picam::{get_data, Library, Parameter, PicamConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[cfg(feature = "picam_hardware")]
fn library() -> &'static Library {
    Library::native()
}

#[cfg(not(feature = "picam_hardware"))]
fn library() -> &'static Library {
    use std::sync::Arc;

    use once_cell::sync::Lazy;
    use picam::MockApi;

    static MOCK: Lazy<Library> = Lazy::new(|| Library::new(Arc::new(MockApi::new())));
    &MOCK
}

fn main() -> Result<()> {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .try_init();

    let config = PicamConfig::load().context("loading configuration")?;
    config.validate()?;

    let library = library();
    info!(version = %library.version()?, "PICam SDK");

    let session = library.session()?;
    // Without hardware, fall back to a demo camera so the demo always has something to open.
    let config = if session.available_camera_ids()?.is_empty() {
        PicamConfig {
            camera: picam::CameraSelection::Demo {
                model: "Pixis100F".to_string(),
                serial: "demo-0001".to_string(),
            },
            ..config
        }
    } else {
        config
    };

    let mut camera = session.open_configured(&config)?;
    info!(camera = %camera.id()?, "Camera ready");
    for detail in camera.firmware_details()? {
        info!(name = %detail.name, detail = %detail.detail, "Firmware");
    }

    camera.set(Parameter::EXPOSURE_TIME, 20.0)?;
    if let Err(e) = camera.commit() {
        for parameter in e.failed_parameters() {
            eprintln!("rejected: {}", parameter);
        }
        return Err(e.into());
    }

    let stride = camera.readout_stride()?;
    let (data, errors) = camera.acquire(
        config.acquisition.readout_count,
        config.acquisition.timeout_ms,
    )?;
    if !errors.is_empty() {
        for name in library.get_strings(
            picam::EnumeratedType::ACQUISITION_ERRORS_MASK,
            errors.bits() as u32,
        ) {
            eprintln!("acquisition error: {}", name?);
        }
    }

    let frames = get_data(&data, stride)?;
    let (rows, cols) = frames.dim();
    let total: u64 = frames.iter().map(|&b| u64::from(b)).sum();
    println!("acquired {} readouts of {} bytes (byte sum {})", rows, cols, total);

    camera.close()?;
    session.end()?;
    Ok(())
}

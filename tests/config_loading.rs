//! Loading `PicamConfig` from TOML files and opening the configured camera.

#![cfg(feature = "mock")]

use std::io::Write;
use std::sync::Arc;

use picam::{CameraSelection, Library, MockApi, Model, PicamConfig, PicamError};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_from_file() {
    let file = write_config(
        r#"
        [camera]
        kind = "demo"
        model = "Pixis400B"
        serial = "Z-9"

        [acquisition]
        readout_count = 10
        timeout_ms = 5000
        "#,
    );
    let config = PicamConfig::load_from(file.path()).unwrap();
    assert_eq!(
        config.camera,
        CameraSelection::Demo {
            model: "Pixis400B".to_string(),
            serial: "Z-9".to_string(),
        }
    );
    assert_eq!(config.acquisition.readout_count, 10);
    assert_eq!(config.acquisition.timeout_ms, 5000);
    config.validate().unwrap();
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = PicamConfig::load_from(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, PicamConfig::default());
}

#[test]
fn test_unknown_selection_kind_is_an_error() {
    let file = write_config(
        r#"
        [camera]
        kind = "network"
        "#,
    );
    assert!(PicamConfig::load_from(file.path()).is_err());
}

#[test]
fn test_validation_errors_are_config_errors() {
    let file = write_config(
        r#"
        [acquisition]
        readout_count = 0
        "#,
    );
    let config = PicamConfig::load_from(file.path()).unwrap();
    let err = config.validate().unwrap_err();
    assert!(matches!(err, PicamError::Config(_)));
    assert!(err.to_string().contains("readout_count"));
}

#[test]
fn test_open_configured_demo_connects_once() {
    let mock = Arc::new(MockApi::new());
    let library = Library::new(mock.clone());
    let session = library.session().unwrap();
    let config = PicamConfig {
        camera: CameraSelection::Demo {
            model: "PicamModel_ProEM512B".to_string(),
            serial: "E-1".to_string(),
        },
        ..Default::default()
    };

    let camera = session.open_configured(&config).unwrap();
    let id = camera.id().unwrap();
    assert_eq!(id.model, Model::PROEM_512B);
    assert_eq!(id.serial_number, "E-1");
    camera.close().unwrap();

    // The second open reuses the connected demo camera.
    let camera = session.open_configured(&config).unwrap();
    camera.close().unwrap();
    assert_eq!(mock.call_count("Picam_ConnectDemoCamera"), 1);
    assert_eq!(session.available_camera_ids().unwrap().len(), 1);
}

#[test]
fn test_open_configured_by_serial() {
    let library = Library::new(Arc::new(MockApi::with_demo_camera()));
    let session = library.session().unwrap();

    let config = PicamConfig {
        camera: CameraSelection::Serial {
            serial: "12345".to_string(),
        },
        ..Default::default()
    };
    let camera = session.open_configured(&config).unwrap();
    assert_eq!(camera.id().unwrap().serial_number, "12345");
    drop(camera);

    let config = PicamConfig {
        camera: CameraSelection::Serial {
            serial: "nope".to_string(),
        },
        ..Default::default()
    };
    assert!(matches!(
        session.open_configured(&config),
        Err(PicamError::NotFound(_))
    ));
}

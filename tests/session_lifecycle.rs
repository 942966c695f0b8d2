//! Library initialization, sessions, discovery and enumeration strings.

#![cfg(feature = "mock")]

use std::sync::Arc;

use picam::sys;
use picam::{EnumeratedType, Library, MockApi, Model, PicamError};

fn library() -> (Arc<MockApi>, Library) {
    let mock = Arc::new(MockApi::with_demo_camera());
    let library = Library::new(mock.clone());
    (mock, library)
}

#[test]
fn test_session_scopes_initialization() {
    let (_mock, library) = library();
    assert!(!library.is_initialized().unwrap());
    {
        let session = library.session().unwrap();
        assert!(session.is_initialized().unwrap());
    }
    assert!(!library.is_initialized().unwrap());
}

fn acquire_with_bad_readout_count(library: &Library) -> picam::Result<()> {
    let session = library.session()?;
    let mut camera = session.open_first_camera()?;
    camera.commit()?;
    camera.acquire(0, 1000)?;
    Ok(())
}

#[test]
fn test_session_scope_survives_error_return() {
    let (mock, library) = library();
    let err = acquire_with_bad_readout_count(&library).unwrap_err();
    assert_eq!(err.code(), Some(sys::PicamError_InvalidReadoutCount));
    assert!(!library.is_initialized().unwrap());
    assert_eq!(mock.call_count("Picam_UninitializeLibrary"), 1);

    // The library can be scoped again afterwards.
    let session = library.session().unwrap();
    session.end().unwrap();
}

#[test]
fn test_session_scope_survives_panic() {
    let (_mock, library) = library();
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let session = library.session().unwrap();
        let _camera = session.open_first_camera().unwrap();
        panic!("body failed");
    }));
    assert!(result.is_err());
    assert!(!library.is_initialized().unwrap());
}

#[test]
fn test_second_session_is_refused() {
    let (mock, library) = library();
    let _session = library.session().unwrap();
    mock.clear_calls();

    let err = library.session().unwrap_err();
    assert!(matches!(err, PicamError::State(_)));
    assert_eq!(mock.call_count("Picam_InitializeLibrary"), 0);
}

#[test]
fn test_end_reports_uninitialize_failure() {
    let (mock, library) = library();
    let session = library.session().unwrap();
    mock.inject_error("Picam_UninitializeLibrary", sys::PicamError_UnexpectedError);

    let err = session.end().unwrap_err();
    assert_eq!(err.code(), Some(sys::PicamError_UnexpectedError));
    // The failed call left the library initialized.
    assert!(library.is_initialized().unwrap());
    // SAFETY: the session is gone and nothing else uses this library.
    unsafe { library.uninitialize() }.unwrap();
}

#[test]
fn test_version_without_initialization() {
    let (_mock, library) = library();
    let version = library.version().unwrap();
    assert_eq!(version.major, 5);
    assert!(version.to_string().starts_with("5."));
}

#[test]
fn test_enumeration_strings() {
    let (mock, library) = library();
    let session = library.session().unwrap();

    assert_eq!(
        session
            .get_string(EnumeratedType::ERROR, sys::PicamError_CameraAlreadyOpened)
            .unwrap(),
        "CameraAlreadyOpened"
    );
    let strings: Vec<String> = session
        .get_strings(EnumeratedType::ACQUISITION_ERRORS_MASK, 0x15)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(strings, ["DataLost", "DataNotArriving", "CameraFaulted"]);
    assert_eq!(session.get_strings(EnumeratedType::MODEL, 0).count(), 0);

    let err = session
        .get_string(EnumeratedType::ADC_QUALITY, 999)
        .unwrap_err();
    assert_eq!(err.code(), Some(sys::PicamError_EnumerationValueNotDefined));
    assert_eq!(mock.outstanding_allocations(), 0);
}

#[test]
fn test_enum_lookup_by_name() {
    let (_mock, library) = library();
    assert_eq!(
        library.get_enum("PicamModel_Pixis100F").unwrap(),
        sys::PicamModel_Pixis100F
    );
    assert!(matches!(
        library.get_enum("PicamModel_DoesNotExist"),
        Err(PicamError::NotFound(_))
    ));
}

#[test]
fn test_demo_camera_discovery() {
    let (mock, library) = library();
    let session = library.session().unwrap();

    let models = session.available_demo_camera_models().unwrap();
    assert!(models.contains(&Model::PIXIS_400B));

    let ids = session.available_camera_ids().unwrap();
    assert_eq!(ids.len(), 1);
    assert_eq!(ids[0].serial_number, "12345");
    assert!(session.unavailable_camera_ids().unwrap().is_empty());

    let id = session.connect_demo_camera(Model::PIXIS_400B, "A-17").unwrap();
    assert_eq!(id.model, Model::PIXIS_400B);
    assert_eq!(id.serial_number, "A-17");
    assert!(session.is_demo_camera(&id).unwrap());
    assert_eq!(session.available_camera_ids().unwrap().len(), 2);

    let err = session
        .connect_demo_camera(Model::PIXIS_400B, "A-17")
        .unwrap_err();
    assert_eq!(err.code(), Some(sys::PicamError_DemoAlreadyConnected));

    session.disconnect_demo_camera(&id).unwrap();
    assert_eq!(session.available_camera_ids().unwrap().len(), 1);
    assert_eq!(mock.outstanding_allocations(), 0);
}

#[test]
fn test_open_twice_fails_with_description() {
    let (_mock, library) = library();
    let session = library.session().unwrap();
    let ids = session.available_camera_ids().unwrap();
    let camera = session.open_camera(&ids[0]).unwrap();

    let err = session.open_camera(&ids[0]).unwrap_err();
    match &err {
        PicamError::Native(native) => {
            assert_eq!(native.code(), sys::PicamError_CameraAlreadyOpened);
            assert_eq!(native.describe(), "CameraAlreadyOpened");
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert!(err.to_string().contains("CameraAlreadyOpened"));
    camera.close().unwrap();
}

#[test]
fn test_no_cameras_available() {
    let library = Library::new(Arc::new(MockApi::new()));
    let session = library.session().unwrap();
    let err = session.open_first_camera().unwrap_err();
    assert_eq!(err.code(), Some(sys::PicamError_NoCamerasAvailable));
}

#[test]
fn test_enum_lookup_covers_every_family() {
    let (_mock, library) = library();
    let session = library.session().unwrap();

    let closing = session.get_enum("PicamParameter_ShutterClosingDelay").unwrap();
    assert_eq!(closing, sys::PicamParameter_ShutterClosingDelay);
    assert_eq!(
        session
            .get_string(EnumeratedType::PARAMETER, closing)
            .unwrap(),
        "ShutterClosingDelay"
    );
    assert_eq!(
        session.get_enum("PicamParameter_ReadoutControlMode").unwrap(),
        sys::PicamParameter_ReadoutControlMode
    );
    assert_eq!(
        session.get_enum("PicamParameter_EMIccdGain").unwrap(),
        sys::PicamParameter_EMIccdGain
    );

    let model = session.get_enum("PicamModel_Pixis1300B").unwrap();
    assert_eq!(
        session.get_string(EnumeratedType::MODEL, model).unwrap(),
        "Pixis1300B"
    );

    let error = session.get_enum("PicamError_NotDiscoveringCameras").unwrap();
    assert_eq!(
        session.get_string(EnumeratedType::ERROR, error).unwrap(),
        "NotDiscoveringCameras"
    );
}

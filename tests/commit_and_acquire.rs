//! Commit validation, blocking acquisition and the zero-copy data view.

#![cfg(feature = "mock")]

use std::sync::Arc;
use std::thread;

use picam::sys;
use picam::{get_data, Library, MockApi, Parameter, PicamError, Roi, INFINITE_TIMEOUT};

fn setup() -> (Arc<MockApi>, Library) {
    let mock = Arc::new(MockApi::with_demo_camera());
    let library = Library::new(mock.clone());
    (mock, library)
}

#[test]
fn test_commit_reports_rejected_parameters() {
    let (mock, library) = setup();
    let session = library.session().unwrap();
    let mut camera = session.open_first_camera().unwrap();

    camera.set_float(Parameter::EXPOSURE_TIME, -5.0).unwrap();
    let err = camera.commit().unwrap_err();
    assert_eq!(err.code(), Some(sys::PicamError_InvalidParameterValues));
    assert_eq!(err.failed_parameters(), [Parameter::EXPOSURE_TIME]);
    assert!(err.to_string().contains("rejected parameters"));
    assert!(!camera.are_parameters_committed().unwrap());
    assert_eq!(mock.outstanding_allocations(), 0);

    camera.set_float(Parameter::EXPOSURE_TIME, 5.0).unwrap();
    camera.commit().unwrap();
    assert!(camera.are_parameters_committed().unwrap());
    assert_eq!(mock.destroy_count("Picam_DestroyParameters"), 2);
}

#[test]
fn test_commit_rejects_roi_outside_sensor() {
    let (_mock, library) = setup();
    let session = library.session().unwrap();
    let mut camera = session.open_first_camera().unwrap();

    camera
        .set_rois(Parameter::ROIS, &[Roi::full(2000, 100)])
        .unwrap();
    let err = camera.commit().unwrap_err();
    assert_eq!(err.failed_parameters(), [Parameter::ROIS]);
}

#[test]
fn test_acquire_requires_commit() {
    let (_mock, library) = setup();
    let session = library.session().unwrap();
    let mut camera = session.open_first_camera().unwrap();

    camera.set_float(Parameter::EXPOSURE_TIME, 10.0).unwrap();
    let err = camera.acquire(1, INFINITE_TIMEOUT).unwrap_err();
    assert_eq!(err.code(), Some(sys::PicamError_ParametersNotCommitted));
}

#[test]
fn test_acquire_and_view_data() {
    let (_mock, library) = setup();
    let session = library.session().unwrap();
    let mut camera = session.open_first_camera().unwrap();
    camera.commit().unwrap();

    let stride = camera.readout_stride().unwrap();
    assert_eq!(stride, 1340 * 100 * 2);

    let (data, errors) = camera.acquire(3, 5000).unwrap();
    assert!(errors.is_empty());
    assert_eq!(data.readout_count(), 3);
    let view = get_data(&data, stride).unwrap();
    assert_eq!(view.dim(), (3, stride));

    // First readout is a ramp starting at zero, 16 bits per pixel.
    let first = u16::from_ne_bytes([view[[0, 0]], view[[0, 1]]]);
    let second = u16::from_ne_bytes([view[[0, 2]], view[[0, 3]]]);
    assert_eq!((first, second), (0, 1));
}

#[test]
fn test_view_cannot_exceed_acquired_buffer() {
    let (_mock, library) = setup();
    let session = library.session().unwrap();
    let mut camera = session.open_first_camera().unwrap();
    camera.commit().unwrap();
    let stride = camera.readout_stride().unwrap();

    let (data, _) = camera.acquire(1, INFINITE_TIMEOUT).unwrap();
    assert_eq!(data.readout_stride(), stride);
    let err = get_data(&data, stride * 1000).unwrap_err();
    assert!(matches!(err, PicamError::Value(_)));
    let err = get_data(&data, stride + 1).unwrap_err();
    assert!(matches!(err, PicamError::Value(_)));
    assert_eq!(get_data(&data, stride).unwrap().len(), stride);
}

#[test]
fn test_stride_follows_binned_rois() {
    let (_mock, library) = setup();
    let session = library.session().unwrap();
    let mut camera = session.open_first_camera().unwrap();

    camera
        .set_rois(
            Parameter::ROIS,
            &[Roi {
                x: 10,
                width: 40,
                x_binning: 4,
                y: 0,
                height: 100,
                y_binning: 100,
            }],
        )
        .unwrap();
    camera.commit().unwrap();
    let stride = camera.readout_stride().unwrap();
    assert_eq!(stride, 10 * 2);

    let (data, _) = camera.acquire(2, INFINITE_TIMEOUT).unwrap();
    let view = get_data(&data, stride).unwrap();
    assert_eq!(view.dim(), (2, 20));
}

#[test]
fn test_acquire_rejects_bad_arguments() {
    let (_mock, library) = setup();
    let session = library.session().unwrap();
    let mut camera = session.open_first_camera().unwrap();
    camera.commit().unwrap();

    let err = camera.acquire(0, INFINITE_TIMEOUT).unwrap_err();
    assert_eq!(err.code(), Some(sys::PicamError_InvalidReadoutCount));
    let err = camera.acquire(1, -2).unwrap_err();
    assert_eq!(err.code(), Some(sys::PicamError_InvalidReadoutTimeOut));
}

#[test]
fn test_empty_data_is_a_value_error() {
    let (data, stride) = (
        unsafe { picam::AvailableData::from_raw(sys::PicamAvailableData::default(), 8) },
        8,
    );
    assert!(matches!(get_data(&data, stride), Err(PicamError::Value(_))));
}

#[test]
fn test_asynchronous_acquisition_runs_to_completion() {
    let (mock, library) = setup();
    let session = library.session().unwrap();
    let mut camera = session.open_first_camera().unwrap();
    camera.set_long(Parameter::READOUT_COUNT, 3).unwrap();
    camera.commit().unwrap();

    camera.start_acquisition().unwrap();
    let mut readouts = 0;
    loop {
        let (data, status) = camera.wait_for_acquisition_update(1000).unwrap();
        readouts += data.readout_count();
        if !status.running {
            break;
        }
    }
    assert_eq!(readouts, 3);
    assert!(!camera.is_acquisition_running().unwrap());

    let err = camera.wait_for_acquisition_update(1000).unwrap_err();
    assert_eq!(err.code(), Some(sys::PicamError_AcquisitionNotInProgress));

    mock.clear_calls();
    camera.stop_acquisition().unwrap();
    assert_eq!(mock.call_count("Picam_StopAcquisition"), 1);
}

#[test]
fn test_acquisition_guard_finish() {
    let (mock, library) = setup();
    let session = library.session().unwrap();
    let mut camera = session.open_first_camera().unwrap();
    camera.set_long(Parameter::READOUT_COUNT, 0).unwrap();
    camera.commit().unwrap();

    let mut acquisition = camera.acquisition().unwrap();
    for _ in 0..5 {
        let (data, status) = acquisition.wait_for_update(INFINITE_TIMEOUT).unwrap();
        assert_eq!(data.readout_count(), 1);
        assert!(status.running);
    }
    acquisition.finish().unwrap();
    assert_eq!(mock.call_count("Picam_StopAcquisition"), 1);
    assert!(!camera.is_acquisition_running().unwrap());
}

#[test]
fn test_camera_moves_to_worker_thread() {
    let (_mock, library) = setup();
    let session = library.session().unwrap();
    let mut camera = session.open_first_camera().unwrap();
    camera.commit().unwrap();

    let rows = thread::scope(|scope| {
        scope
            .spawn(move || {
                let stride = camera.readout_stride().unwrap();
                let (data, _) = camera.acquire(4, INFINITE_TIMEOUT).unwrap();
                get_data(&data, stride).unwrap().nrows()
            })
            .join()
            .unwrap()
    });
    assert_eq!(rows, 4);
}

//! Parameter metadata, typed access, dynamic access and constraints.

#![cfg(feature = "mock")]

use std::sync::Arc;

use picam::sys;
use picam::{
    ConstraintCategory, ConstraintType, EnumeratedType, Library, MockApi, Modulation, Parameter,
    ParameterValue, PicamError, Pulse, Roi, ValueAccess, ValueType,
};

fn setup() -> (Arc<MockApi>, Library) {
    let mock = Arc::new(MockApi::with_demo_camera());
    let library = Library::new(mock.clone());
    (mock, library)
}

#[test]
fn test_identity_and_firmware() {
    let (mock, library) = setup();
    let session = library.session().unwrap();
    let camera = session.open_first_camera().unwrap();

    let id = camera.id().unwrap();
    assert_eq!(id.serial_number, "12345");
    assert!(id.to_string().contains("Pixis100F"));
    assert!(camera.is_connected().unwrap());

    let firmware = camera.firmware_details().unwrap();
    assert_eq!(firmware.len(), 2);
    assert!(firmware.iter().all(|f| !f.name.is_empty() && !f.detail.is_empty()));
    drop(camera);
    assert_eq!(mock.outstanding_allocations(), 0);
}

#[test]
fn test_parameter_metadata() {
    let (mock, library) = setup();
    let session = library.session().unwrap();
    let camera = session.open_first_camera().unwrap();

    let parameters = camera.parameters().unwrap();
    assert!(parameters.contains(&Parameter::EXPOSURE_TIME));
    assert!(parameters.contains(&Parameter::ROIS));
    assert!(camera.does_parameter_exist(Parameter::EXPOSURE_TIME).unwrap());
    assert!(!camera.does_parameter_exist(Parameter(0x7fff_0000)).unwrap());
    assert!(camera.is_parameter_relevant(Parameter::ADC_SPEED).unwrap());

    assert_eq!(
        camera.get_parameter_value_type(Parameter::EXPOSURE_TIME).unwrap(),
        ValueType::FloatingPoint
    );
    assert_eq!(
        camera.get_parameter_value_access(Parameter::PIXEL_BIT_DEPTH).unwrap(),
        ValueAccess::ReadOnly
    );
    assert_eq!(
        camera.get_parameter_enumerated_type(Parameter::ADC_QUALITY).unwrap(),
        EnumeratedType::ADC_QUALITY
    );
    assert_eq!(
        camera.get_parameter_constraint_type(Parameter::EXPOSURE_TIME).unwrap(),
        ConstraintType::Range
    );
    assert_eq!(
        camera.get_parameter_constraint_type(Parameter::ADC_QUALITY).unwrap(),
        ConstraintType::Collection
    );
    drop(camera);
    assert_eq!(mock.outstanding_allocations(), 0);
}

#[test]
fn test_typed_access_marks_uncommitted() {
    let (_mock, library) = setup();
    let session = library.session().unwrap();
    let mut camera = session.open_first_camera().unwrap();
    camera.commit().unwrap();
    assert!(camera.are_parameters_committed().unwrap());

    camera.set_float(Parameter::EXPOSURE_TIME, 25.0).unwrap();
    assert_eq!(camera.get_float(Parameter::EXPOSURE_TIME).unwrap(), 25.0);
    assert!(!camera.are_parameters_committed().unwrap());

    camera
        .set_int(Parameter::ADC_QUALITY, sys::PicamAdcQuality_HighCapacity)
        .unwrap();
    assert_eq!(
        camera.get_int(Parameter::ADC_QUALITY).unwrap(),
        sys::PicamAdcQuality_HighCapacity
    );
    camera.set_long(Parameter::READOUT_COUNT, 5).unwrap();
    assert_eq!(camera.get_long(Parameter::READOUT_COUNT).unwrap(), 5);
    assert_eq!(
        camera.read_float(Parameter::SENSOR_TEMPERATURE_READING).unwrap(),
        -70.0
    );
}

#[test]
fn test_read_only_and_wrong_accessor() {
    let (_mock, library) = setup();
    let session = library.session().unwrap();
    let mut camera = session.open_first_camera().unwrap();

    let err = camera.set_int(Parameter::PIXEL_BIT_DEPTH, 8).unwrap_err();
    assert_eq!(err.code(), Some(sys::PicamError_ParameterValueIsReadOnly));

    let err = camera.get_int(Parameter::EXPOSURE_TIME).unwrap_err();
    assert_eq!(err.code(), Some(sys::PicamError_ParameterHasInvalidValueType));

    let err = camera.get_float(Parameter(0x7fff_0000)).unwrap_err();
    assert_eq!(err.code(), Some(sys::PicamError_ParameterDoesNotExist));
}

#[test]
fn test_structured_values() {
    let (mock, library) = setup();
    let session = library.session().unwrap();
    let mut camera = session.open_first_camera().unwrap();

    let rois = vec![
        Roi {
            x: 0,
            width: 100,
            x_binning: 2,
            y: 0,
            height: 10,
            y_binning: 10,
        },
        Roi::full(20, 20),
    ];
    camera.set_rois(Parameter::ROIS, &rois).unwrap();
    assert_eq!(camera.get_rois(Parameter::ROIS).unwrap(), rois);

    let pulse = Pulse {
        delay: 12.5,
        width: 3.0,
    };
    camera.set_pulse(Parameter::REPETITIVE_GATE, pulse).unwrap();
    assert_eq!(camera.get_pulse(Parameter::REPETITIVE_GATE).unwrap(), pulse);

    assert!(camera
        .get_modulations(Parameter::CUSTOM_MODULATION_SEQUENCE)
        .unwrap()
        .is_empty());
    let sequence = vec![
        Modulation {
            duration: 1.0,
            frequency: 100.0,
            phase: 0.0,
            output_signal_frequency: 50.0,
        },
        Modulation {
            duration: 2.0,
            frequency: 200.0,
            phase: 90.0,
            output_signal_frequency: 0.0,
        },
    ];
    camera
        .set_modulations(Parameter::CUSTOM_MODULATION_SEQUENCE, &sequence)
        .unwrap();
    assert_eq!(
        camera
            .get_modulations(Parameter::CUSTOM_MODULATION_SEQUENCE)
            .unwrap(),
        sequence
    );
    drop(camera);
    assert_eq!(mock.outstanding_allocations(), 0);
    assert_eq!(mock.destroy_count("Picam_DestroyRois"), 1);
    assert_eq!(mock.destroy_count("Picam_DestroyPulses"), 1);
    assert_eq!(mock.destroy_count("Picam_DestroyModulations"), 2);
}

#[test]
fn test_dynamic_set_coerces_compatible_variants() {
    let (_mock, library) = setup();
    let session = library.session().unwrap();
    let mut camera = session.open_first_camera().unwrap();

    // Integers are accepted for floating-point parameters.
    camera.set(Parameter::EXPOSURE_TIME, 40).unwrap();
    assert_eq!(
        camera.get(Parameter::EXPOSURE_TIME).unwrap(),
        ParameterValue::FloatingPoint(40.0)
    );

    camera.set(Parameter::DISABLE_COOLING_FAN, true).unwrap();
    assert_eq!(
        camera.get(Parameter::DISABLE_COOLING_FAN).unwrap(),
        ParameterValue::Boolean(true)
    );

    camera.set(Parameter::READOUT_COUNT, 3).unwrap();
    assert_eq!(
        camera.get(Parameter::READOUT_COUNT).unwrap(),
        ParameterValue::LargeInteger(3)
    );

    camera
        .set(Parameter::ADC_ANALOG_GAIN, ParameterValue::Enumeration(sys::PicamAdcAnalogGain_High))
        .unwrap();
    assert_eq!(
        camera.get(Parameter::ADC_ANALOG_GAIN).unwrap(),
        ParameterValue::Enumeration(sys::PicamAdcAnalogGain_High)
    );

    let err = camera
        .set(Parameter::REPETITIVE_GATE, 1.0)
        .unwrap_err();
    assert!(matches!(err, PicamError::Value(_)));
}

#[test]
fn test_constraints() {
    let (mock, library) = setup();
    let session = library.session().unwrap();
    let camera = session.open_first_camera().unwrap();

    let range = camera
        .get_parameter_range_constraint(Parameter::EXPOSURE_TIME, ConstraintCategory::default())
        .unwrap();
    assert_eq!(range.minimum, 0.0);
    assert_eq!(range.maximum, 1.0e7);
    assert!(range.contains(100.0));
    assert!(!range.contains(-1.0));
    assert!(range.excluded_values.is_empty());

    let qualities = camera
        .get_parameter_collection_constraint(Parameter::ADC_QUALITY, ConstraintCategory::Required)
        .unwrap();
    assert_eq!(
        qualities,
        [
            f64::from(sys::PicamAdcQuality_LowNoise),
            f64::from(sys::PicamAdcQuality_HighCapacity)
        ]
    );

    let err = camera
        .get_parameter_range_constraint(Parameter::ROIS, ConstraintCategory::Capable)
        .unwrap_err();
    assert_eq!(err.code(), Some(sys::PicamError_ParameterHasInvalidConstraintType));

    drop(camera);
    assert_eq!(mock.outstanding_allocations(), 0);
    assert_eq!(mock.destroy_count("Picam_DestroyRangeConstraints"), 2);
    assert_eq!(mock.destroy_count("Picam_DestroyCollectionConstraints"), 1);
}

//! The native entry points as a trait.
//!
//! [`PicamApi`] mirrors `picam.h` one method per function, with the same
//! parameter order. Output parameters become `&mut` references; everything
//! else (ownership of returned arrays, status codes) keeps the C convention and
//! is handled by the safe layer in [`crate::library`] and [`crate::camera`].
//!
//! `NativeApi` (feature `picam_hardware`) forwards to the vendor library.
//! `MockApi` (feature `mock`) implements the same contract in memory.

use std::ffi::CStr;

use picam_sys as sys;
use sys::{
    pi64s, pibln, pichar, piint, PicamAcquisitionErrorsMask, PicamAcquisitionStatus,
    PicamAvailableData, PicamCameraID, PicamCollectionConstraint, PicamConstraintCategory,
    PicamConstraintType, PicamEnumeratedType, PicamError, PicamFirmwareDetail, PicamHandle,
    PicamModel, PicamModulations, PicamParameter, PicamPulse, PicamRangeConstraint, PicamRois,
    PicamValueAccess, PicamValueType,
};

/// One method per PICam entry point.
///
/// Methods returning SDK-owned memory write a pointer into an output argument;
/// that pointer must later be passed to the matching `destroy_*` method exactly
/// once. The destroy methods, and setters reading caller-supplied arrays through
/// raw pointers, are `unsafe`.
///
/// Camera handles are opaque to this trait. The SDK validates them and reports
/// `PicamError_InvalidHandle` for unknown values.
#[allow(missing_docs)]
pub trait PicamApi: Send + Sync {
    fn get_version(
        &self,
        major: &mut piint,
        minor: &mut piint,
        distribution: &mut piint,
        released: &mut piint,
    ) -> PicamError;
    fn is_library_initialized(&self, inited: &mut pibln) -> PicamError;
    fn initialize_library(&self) -> PicamError;
    fn uninitialize_library(&self) -> PicamError;

    /// # Safety
    /// `s` must be null or a string returned by this API and not yet destroyed.
    unsafe fn destroy_string(&self, s: *const pichar) -> PicamError;
    fn get_enumeration_string(
        &self,
        type_: PicamEnumeratedType,
        value: piint,
        s: &mut *const pichar,
    ) -> PicamError;

    // Camera discovery

    /// # Safety
    /// `id_array` must be null or an array returned by this API and not yet destroyed.
    unsafe fn destroy_camera_ids(&self, id_array: *const PicamCameraID) -> PicamError;
    fn get_available_camera_ids(
        &self,
        id_array: &mut *const PicamCameraID,
        id_count: &mut piint,
    ) -> PicamError;
    fn get_unavailable_camera_ids(
        &self,
        id_array: &mut *const PicamCameraID,
        id_count: &mut piint,
    ) -> PicamError;
    fn open_first_camera(&self, camera: &mut PicamHandle) -> PicamError;
    fn open_camera(&self, id: &PicamCameraID, camera: &mut PicamHandle) -> PicamError;
    fn close_camera(&self, camera: PicamHandle) -> PicamError;
    fn is_camera_connected(&self, camera: PicamHandle, connected: &mut pibln) -> PicamError;
    fn get_camera_id(&self, camera: PicamHandle, id: &mut PicamCameraID) -> PicamError;

    /// # Safety
    /// `firmware_array` must be null or an array returned by this API and not yet destroyed.
    unsafe fn destroy_firmware_details(
        &self,
        firmware_array: *const PicamFirmwareDetail,
    ) -> PicamError;
    fn get_firmware_details(
        &self,
        id: &PicamCameraID,
        firmware_array: &mut *const PicamFirmwareDetail,
        firmware_count: &mut piint,
    ) -> PicamError;

    /// # Safety
    /// `model_array` must be null or an array returned by this API and not yet destroyed.
    unsafe fn destroy_models(&self, model_array: *const PicamModel) -> PicamError;
    fn get_available_demo_camera_models(
        &self,
        model_array: &mut *const PicamModel,
        model_count: &mut piint,
    ) -> PicamError;
    fn connect_demo_camera(
        &self,
        model: PicamModel,
        serial_number: &CStr,
        id: &mut PicamCameraID,
    ) -> PicamError;
    fn disconnect_demo_camera(&self, id: &PicamCameraID) -> PicamError;
    fn is_demo_camera(&self, id: &PicamCameraID, demo: &mut pibln) -> PicamError;

    // Parameter metadata

    /// # Safety
    /// `parameter_array` must be null or an array returned by this API and not yet destroyed.
    unsafe fn destroy_parameters(&self, parameter_array: *const PicamParameter) -> PicamError;
    fn get_parameters(
        &self,
        camera: PicamHandle,
        parameter_array: &mut *const PicamParameter,
        parameter_count: &mut piint,
    ) -> PicamError;
    fn does_parameter_exist(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        exists: &mut pibln,
    ) -> PicamError;
    fn is_parameter_relevant(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        relevant: &mut pibln,
    ) -> PicamError;
    fn get_parameter_value_type(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        type_: &mut PicamValueType,
    ) -> PicamError;
    fn get_parameter_enumerated_type(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        type_: &mut PicamEnumeratedType,
    ) -> PicamError;
    fn get_parameter_value_access(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        access: &mut PicamValueAccess,
    ) -> PicamError;
    fn get_parameter_constraint_type(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        type_: &mut PicamConstraintType,
    ) -> PicamError;

    // Parameter values

    fn get_parameter_integer_value(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        value: &mut piint,
    ) -> PicamError;
    fn set_parameter_integer_value(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        value: piint,
    ) -> PicamError;
    fn get_parameter_large_integer_value(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        value: &mut pi64s,
    ) -> PicamError;
    fn set_parameter_large_integer_value(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        value: pi64s,
    ) -> PicamError;
    fn get_parameter_floating_point_value(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        value: &mut f64,
    ) -> PicamError;
    fn set_parameter_floating_point_value(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        value: f64,
    ) -> PicamError;
    fn read_parameter_floating_point_value(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        value: &mut f64,
    ) -> PicamError;

    /// # Safety
    /// `rois` must be null or a value returned by this API and not yet destroyed.
    unsafe fn destroy_rois(&self, rois: *const PicamRois) -> PicamError;
    fn get_parameter_rois_value(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        value: &mut *const PicamRois,
    ) -> PicamError;
    /// # Safety
    /// `value.roi_array` must point to `value.roi_count` readable elements.
    unsafe fn set_parameter_rois_value(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        value: &PicamRois,
    ) -> PicamError;

    /// # Safety
    /// `pulse_array` must be null or a value returned by this API and not yet destroyed.
    unsafe fn destroy_pulses(&self, pulse_array: *const PicamPulse) -> PicamError;
    fn get_parameter_pulse_value(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        value: &mut *const PicamPulse,
    ) -> PicamError;
    fn set_parameter_pulse_value(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        value: &PicamPulse,
    ) -> PicamError;

    /// # Safety
    /// `modulations` must be null or a value returned by this API and not yet destroyed.
    unsafe fn destroy_modulations(&self, modulations: *const PicamModulations) -> PicamError;
    fn get_parameter_modulations_value(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        value: &mut *const PicamModulations,
    ) -> PicamError;
    /// # Safety
    /// `value.modulation_array` must point to `value.modulation_count` readable elements.
    unsafe fn set_parameter_modulations_value(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        value: &PicamModulations,
    ) -> PicamError;

    // Constraints

    /// # Safety
    /// `constraint_array` must be null or a value returned by this API and not yet destroyed.
    unsafe fn destroy_range_constraints(
        &self,
        constraint_array: *const PicamRangeConstraint,
    ) -> PicamError;
    fn get_parameter_range_constraint(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        category: PicamConstraintCategory,
        constraint: &mut *const PicamRangeConstraint,
    ) -> PicamError;
    /// # Safety
    /// `constraint_array` must be null or a value returned by this API and not yet destroyed.
    unsafe fn destroy_collection_constraints(
        &self,
        constraint_array: *const PicamCollectionConstraint,
    ) -> PicamError;
    fn get_parameter_collection_constraint(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        category: PicamConstraintCategory,
        constraint: &mut *const PicamCollectionConstraint,
    ) -> PicamError;

    // Commit and acquisition

    fn are_parameters_committed(&self, camera: PicamHandle, committed: &mut pibln) -> PicamError;
    fn commit_parameters(
        &self,
        camera: PicamHandle,
        failed_parameter_array: &mut *const PicamParameter,
        failed_parameter_count: &mut piint,
    ) -> PicamError;
    fn acquire(
        &self,
        camera: PicamHandle,
        readout_count: pi64s,
        readout_time_out: piint,
        available: &mut PicamAvailableData,
        errors: &mut PicamAcquisitionErrorsMask,
    ) -> PicamError;
    fn start_acquisition(&self, camera: PicamHandle) -> PicamError;
    fn stop_acquisition(&self, camera: PicamHandle) -> PicamError;
    fn is_acquisition_running(&self, camera: PicamHandle, running: &mut pibln) -> PicamError;
    fn wait_for_acquisition_update(
        &self,
        camera: PicamHandle,
        readout_time_out: piint,
        available: &mut PicamAvailableData,
        status: &mut PicamAcquisitionStatus,
    ) -> PicamError;
}

/// [`PicamApi`] backed by the vendor library.
///
/// The SDK keeps process-wide state, so there is normally exactly one of these;
/// see [`Library::native`](crate::Library::native).
#[cfg(feature = "picam_hardware")]
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeApi;

// SAFETY (all methods below): every pointer argument is derived from a Rust
// reference valid for the duration of the call, or was handed out by the SDK
// and is passed back unchanged. The SDK does not retain caller pointers.
#[cfg(feature = "picam_hardware")]
impl PicamApi for NativeApi {
    fn get_version(
        &self,
        major: &mut piint,
        minor: &mut piint,
        distribution: &mut piint,
        released: &mut piint,
    ) -> PicamError {
        unsafe { sys::Picam_GetVersion(major, minor, distribution, released) }
    }

    fn is_library_initialized(&self, inited: &mut pibln) -> PicamError {
        unsafe { sys::Picam_IsLibraryInitialized(inited) }
    }

    fn initialize_library(&self) -> PicamError {
        unsafe { sys::Picam_InitializeLibrary() }
    }

    fn uninitialize_library(&self) -> PicamError {
        unsafe { sys::Picam_UninitializeLibrary() }
    }

    unsafe fn destroy_string(&self, s: *const pichar) -> PicamError {
        sys::Picam_DestroyString(s)
    }

    fn get_enumeration_string(
        &self,
        type_: PicamEnumeratedType,
        value: piint,
        s: &mut *const pichar,
    ) -> PicamError {
        unsafe { sys::Picam_GetEnumerationString(type_, value, s) }
    }

    unsafe fn destroy_camera_ids(&self, id_array: *const PicamCameraID) -> PicamError {
        sys::Picam_DestroyCameraIDs(id_array)
    }

    fn get_available_camera_ids(
        &self,
        id_array: &mut *const PicamCameraID,
        id_count: &mut piint,
    ) -> PicamError {
        unsafe { sys::Picam_GetAvailableCameraIDs(id_array, id_count) }
    }

    fn get_unavailable_camera_ids(
        &self,
        id_array: &mut *const PicamCameraID,
        id_count: &mut piint,
    ) -> PicamError {
        unsafe { sys::Picam_GetUnavailableCameraIDs(id_array, id_count) }
    }

    fn open_first_camera(&self, camera: &mut PicamHandle) -> PicamError {
        unsafe { sys::Picam_OpenFirstCamera(camera) }
    }

    fn open_camera(&self, id: &PicamCameraID, camera: &mut PicamHandle) -> PicamError {
        unsafe { sys::Picam_OpenCamera(id, camera) }
    }

    fn close_camera(&self, camera: PicamHandle) -> PicamError {
        unsafe { sys::Picam_CloseCamera(camera) }
    }

    fn is_camera_connected(&self, camera: PicamHandle, connected: &mut pibln) -> PicamError {
        unsafe { sys::Picam_IsCameraConnected(camera, connected) }
    }

    fn get_camera_id(&self, camera: PicamHandle, id: &mut PicamCameraID) -> PicamError {
        unsafe { sys::Picam_GetCameraID(camera, id) }
    }

    unsafe fn destroy_firmware_details(
        &self,
        firmware_array: *const PicamFirmwareDetail,
    ) -> PicamError {
        sys::Picam_DestroyFirmwareDetails(firmware_array)
    }

    fn get_firmware_details(
        &self,
        id: &PicamCameraID,
        firmware_array: &mut *const PicamFirmwareDetail,
        firmware_count: &mut piint,
    ) -> PicamError {
        unsafe { sys::Picam_GetFirmwareDetails(id, firmware_array, firmware_count) }
    }

    unsafe fn destroy_models(&self, model_array: *const PicamModel) -> PicamError {
        sys::Picam_DestroyModels(model_array)
    }

    fn get_available_demo_camera_models(
        &self,
        model_array: &mut *const PicamModel,
        model_count: &mut piint,
    ) -> PicamError {
        unsafe { sys::Picam_GetAvailableDemoCameraModels(model_array, model_count) }
    }

    fn connect_demo_camera(
        &self,
        model: PicamModel,
        serial_number: &CStr,
        id: &mut PicamCameraID,
    ) -> PicamError {
        unsafe { sys::Picam_ConnectDemoCamera(model, serial_number.as_ptr(), id) }
    }

    fn disconnect_demo_camera(&self, id: &PicamCameraID) -> PicamError {
        unsafe { sys::Picam_DisconnectDemoCamera(id) }
    }

    fn is_demo_camera(&self, id: &PicamCameraID, demo: &mut pibln) -> PicamError {
        unsafe { sys::Picam_IsDemoCamera(id, demo) }
    }

    unsafe fn destroy_parameters(&self, parameter_array: *const PicamParameter) -> PicamError {
        sys::Picam_DestroyParameters(parameter_array)
    }

    fn get_parameters(
        &self,
        camera: PicamHandle,
        parameter_array: &mut *const PicamParameter,
        parameter_count: &mut piint,
    ) -> PicamError {
        unsafe { sys::Picam_GetParameters(camera, parameter_array, parameter_count) }
    }

    fn does_parameter_exist(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        exists: &mut pibln,
    ) -> PicamError {
        unsafe { sys::Picam_DoesParameterExist(camera, parameter, exists) }
    }

    fn is_parameter_relevant(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        relevant: &mut pibln,
    ) -> PicamError {
        unsafe { sys::Picam_IsParameterRelevant(camera, parameter, relevant) }
    }

    fn get_parameter_value_type(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        type_: &mut PicamValueType,
    ) -> PicamError {
        unsafe { sys::Picam_GetParameterValueType(camera, parameter, type_) }
    }

    fn get_parameter_enumerated_type(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        type_: &mut PicamEnumeratedType,
    ) -> PicamError {
        unsafe { sys::Picam_GetParameterEnumeratedType(camera, parameter, type_) }
    }

    fn get_parameter_value_access(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        access: &mut PicamValueAccess,
    ) -> PicamError {
        unsafe { sys::Picam_GetParameterValueAccess(camera, parameter, access) }
    }

    fn get_parameter_constraint_type(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        type_: &mut PicamConstraintType,
    ) -> PicamError {
        unsafe { sys::Picam_GetParameterConstraintType(camera, parameter, type_) }
    }

    fn get_parameter_integer_value(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        value: &mut piint,
    ) -> PicamError {
        unsafe { sys::Picam_GetParameterIntegerValue(camera, parameter, value) }
    }

    fn set_parameter_integer_value(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        value: piint,
    ) -> PicamError {
        unsafe { sys::Picam_SetParameterIntegerValue(camera, parameter, value) }
    }

    fn get_parameter_large_integer_value(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        value: &mut pi64s,
    ) -> PicamError {
        unsafe { sys::Picam_GetParameterLargeIntegerValue(camera, parameter, value) }
    }

    fn set_parameter_large_integer_value(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        value: pi64s,
    ) -> PicamError {
        unsafe { sys::Picam_SetParameterLargeIntegerValue(camera, parameter, value) }
    }

    fn get_parameter_floating_point_value(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        value: &mut f64,
    ) -> PicamError {
        unsafe { sys::Picam_GetParameterFloatingPointValue(camera, parameter, value) }
    }

    fn set_parameter_floating_point_value(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        value: f64,
    ) -> PicamError {
        unsafe { sys::Picam_SetParameterFloatingPointValue(camera, parameter, value) }
    }

    fn read_parameter_floating_point_value(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        value: &mut f64,
    ) -> PicamError {
        unsafe { sys::Picam_ReadParameterFloatingPointValue(camera, parameter, value) }
    }

    unsafe fn destroy_rois(&self, rois: *const PicamRois) -> PicamError {
        sys::Picam_DestroyRois(rois)
    }

    fn get_parameter_rois_value(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        value: &mut *const PicamRois,
    ) -> PicamError {
        unsafe { sys::Picam_GetParameterRoisValue(camera, parameter, value) }
    }

    unsafe fn set_parameter_rois_value(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        value: &PicamRois,
    ) -> PicamError {
        sys::Picam_SetParameterRoisValue(camera, parameter, value)
    }

    unsafe fn destroy_pulses(&self, pulse_array: *const PicamPulse) -> PicamError {
        sys::Picam_DestroyPulses(pulse_array)
    }

    fn get_parameter_pulse_value(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        value: &mut *const PicamPulse,
    ) -> PicamError {
        unsafe { sys::Picam_GetParameterPulseValue(camera, parameter, value) }
    }

    fn set_parameter_pulse_value(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        value: &PicamPulse,
    ) -> PicamError {
        unsafe { sys::Picam_SetParameterPulseValue(camera, parameter, value) }
    }

    unsafe fn destroy_modulations(&self, modulations: *const PicamModulations) -> PicamError {
        sys::Picam_DestroyModulations(modulations)
    }

    fn get_parameter_modulations_value(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        value: &mut *const PicamModulations,
    ) -> PicamError {
        unsafe { sys::Picam_GetParameterModulationsValue(camera, parameter, value) }
    }

    unsafe fn set_parameter_modulations_value(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        value: &PicamModulations,
    ) -> PicamError {
        sys::Picam_SetParameterModulationsValue(camera, parameter, value)
    }

    unsafe fn destroy_range_constraints(
        &self,
        constraint_array: *const PicamRangeConstraint,
    ) -> PicamError {
        sys::Picam_DestroyRangeConstraints(constraint_array)
    }

    fn get_parameter_range_constraint(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        category: PicamConstraintCategory,
        constraint: &mut *const PicamRangeConstraint,
    ) -> PicamError {
        unsafe { sys::Picam_GetParameterRangeConstraint(camera, parameter, category, constraint) }
    }

    unsafe fn destroy_collection_constraints(
        &self,
        constraint_array: *const PicamCollectionConstraint,
    ) -> PicamError {
        sys::Picam_DestroyCollectionConstraints(constraint_array)
    }

    fn get_parameter_collection_constraint(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        category: PicamConstraintCategory,
        constraint: &mut *const PicamCollectionConstraint,
    ) -> PicamError {
        unsafe {
            sys::Picam_GetParameterCollectionConstraint(camera, parameter, category, constraint)
        }
    }

    fn are_parameters_committed(&self, camera: PicamHandle, committed: &mut pibln) -> PicamError {
        unsafe { sys::Picam_AreParametersCommitted(camera, committed) }
    }

    fn commit_parameters(
        &self,
        camera: PicamHandle,
        failed_parameter_array: &mut *const PicamParameter,
        failed_parameter_count: &mut piint,
    ) -> PicamError {
        unsafe {
            sys::Picam_CommitParameters(camera, failed_parameter_array, failed_parameter_count)
        }
    }

    fn acquire(
        &self,
        camera: PicamHandle,
        readout_count: pi64s,
        readout_time_out: piint,
        available: &mut PicamAvailableData,
        errors: &mut PicamAcquisitionErrorsMask,
    ) -> PicamError {
        unsafe { sys::Picam_Acquire(camera, readout_count, readout_time_out, available, errors) }
    }

    fn start_acquisition(&self, camera: PicamHandle) -> PicamError {
        unsafe { sys::Picam_StartAcquisition(camera) }
    }

    fn stop_acquisition(&self, camera: PicamHandle) -> PicamError {
        unsafe { sys::Picam_StopAcquisition(camera) }
    }

    fn is_acquisition_running(&self, camera: PicamHandle, running: &mut pibln) -> PicamError {
        unsafe { sys::Picam_IsAcquisitionRunning(camera, running) }
    }

    fn wait_for_acquisition_update(
        &self,
        camera: PicamHandle,
        readout_time_out: piint,
        available: &mut PicamAvailableData,
        status: &mut PicamAcquisitionStatus,
    ) -> PicamError {
        unsafe { sys::Picam_WaitForAcquisitionUpdate(camera, readout_time_out, available, status) }
    }
}

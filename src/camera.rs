//! Open camera handle: parameters, commit and acquisition.
//!
//! A [`Camera`] exclusively owns one native handle. It borrows the
//! [`Session`](crate::Session) it was opened from, closes itself on drop, and
//! cannot be shared between threads (it is `Send` but not `Sync`), so calls on
//! one handle are always serialized.
//!
//! # Parameter workflow
//!
//! ```text
//! set(...) / set_float(...)   -> pending values
//! commit()                    -> validated atomically by the SDK
//! acquire() / acquisition()   -> data
//! ```

use std::marker::PhantomData;
use std::ops::Deref;
use std::ptr;
use std::sync::Arc;

use picam_sys as sys;
use sys::{
    pi64s, pibln, piint, PicamAcquisitionStatus, PicamAvailableData, PicamCameraID,
    PicamCollectionConstraint, PicamFirmwareDetail, PicamHandle, PicamModulations, PicamParameter,
    PicamPulse, PicamRangeConstraint, PicamRois,
};
use tracing::{debug, info, warn};

use crate::alloc::{raw_slice, NativeAlloc};
use crate::api::PicamApi;
use crate::data::AvailableData;
use crate::error::{check, NativeError, PicamError, Result};
use crate::types::{
    chars_to_string, AcquisitionErrors, AcquisitionStatus, CameraId, ConstraintCategory,
    ConstraintType, EnumeratedType, FirmwareDetail, Modulation, Parameter, ParameterValue, Pulse,
    RangeConstraint, Roi, ValueAccess, ValueType,
};

/// An open PICam camera.
pub struct Camera<'s> {
    api: Arc<dyn PicamApi>,
    handle: PicamHandle,
    closed: bool,
    _session: PhantomData<&'s ()>,
}

// SAFETY: the handle is an opaque token the SDK accepts from any thread. The
// type is not Sync, so calls on one handle never run concurrently.
unsafe impl Send for Camera<'_> {}

impl std::fmt::Debug for Camera<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Camera")
            .field("handle", &self.handle)
            .field("closed", &self.closed)
            .finish()
    }
}

impl<'s> Camera<'s> {
    fn from_handle(api: &Arc<dyn PicamApi>, handle: PicamHandle) -> Self {
        let camera = Self {
            api: Arc::clone(api),
            handle,
            closed: false,
            _session: PhantomData,
        };
        match camera.id() {
            Ok(id) => info!(camera = %id, "Opened PICam camera"),
            Err(_) => info!(handle = ?handle, "Opened PICam camera"),
        }
        camera
    }

    pub(crate) fn open_first(api: &Arc<dyn PicamApi>) -> Result<Self> {
        let mut handle: PicamHandle = ptr::null_mut();
        debug!("Opening first available camera");
        check(api, api.open_first_camera(&mut handle))?;
        Ok(Self::from_handle(api, handle))
    }

    pub(crate) fn open(api: &Arc<dyn PicamApi>, id: &CameraId) -> Result<Self> {
        let mut handle: PicamHandle = ptr::null_mut();
        debug!(camera = %id, "Opening camera");
        check(api, api.open_camera(&id.to_raw(), &mut handle))?;
        Ok(Self::from_handle(api, handle))
    }

    /// Close the camera, propagating failure.
    ///
    /// Consumes the camera: a closed handle cannot be used or closed again.
    pub fn close(mut self) -> Result<()> {
        self.closed = true;
        debug!(handle = ?self.handle, "Closing camera");
        self.check(self.api.close_camera(self.handle))
    }

    /// Raw native handle.
    pub fn handle(&self) -> PicamHandle {
        self.handle
    }

    fn check(&self, code: piint) -> Result<()> {
        check(&self.api, code)
    }

    // -------------------------------------------------------------------------
    // Identity
    // -------------------------------------------------------------------------

    /// Identity of this camera.
    pub fn id(&self) -> Result<CameraId> {
        let mut id = PicamCameraID::default();
        self.check(self.api.get_camera_id(self.handle, &mut id))?;
        Ok(CameraId::from_raw(&id))
    }

    /// Firmware components and their versions.
    pub fn firmware_details(&self) -> Result<Vec<FirmwareDetail>> {
        let id = self.id()?.to_raw();
        let mut details: *const PicamFirmwareDetail = ptr::null();
        let mut count: piint = 0;
        let code = self.api.get_firmware_details(&id, &mut details, &mut count);
        let alloc = NativeAlloc::new(&self.api, details, |api, p| unsafe {
            api.destroy_firmware_details(p)
        });
        self.check(code)?;
        // SAFETY: success guarantees `count` details.
        let out = unsafe { alloc.as_slice(count) }
            .iter()
            .map(|d| FirmwareDetail {
                name: chars_to_string(&d.name),
                detail: chars_to_string(&d.detail),
            })
            .collect();
        alloc.release()?;
        Ok(out)
    }

    /// Whether the camera is still reachable.
    pub fn is_connected(&self) -> Result<bool> {
        let mut connected: pibln = 0;
        self.check(self.api.is_camera_connected(self.handle, &mut connected))?;
        Ok(connected != 0)
    }

    // -------------------------------------------------------------------------
    // Parameter metadata
    // -------------------------------------------------------------------------

    /// Every parameter this camera supports.
    pub fn parameters(&self) -> Result<Vec<Parameter>> {
        let mut params: *const PicamParameter = ptr::null();
        let mut count: piint = 0;
        let code = self.api.get_parameters(self.handle, &mut params, &mut count);
        let alloc = NativeAlloc::new(&self.api, params, |api, p| unsafe {
            api.destroy_parameters(p)
        });
        self.check(code)?;
        // SAFETY: success guarantees `count` parameters.
        let out = unsafe { alloc.as_slice(count) }
            .iter()
            .map(|&p| Parameter(p))
            .collect();
        alloc.release()?;
        Ok(out)
    }

    /// Whether this camera has `parameter` at all.
    pub fn does_parameter_exist(&self, parameter: Parameter) -> Result<bool> {
        let mut exists: pibln = 0;
        self.check(
            self.api
                .does_parameter_exist(self.handle, parameter.0, &mut exists),
        )?;
        Ok(exists != 0)
    }

    /// Whether the parameter currently affects acquisition.
    pub fn is_parameter_relevant(&self, parameter: Parameter) -> Result<bool> {
        let mut relevant: pibln = 0;
        self.check(
            self.api
                .is_parameter_relevant(self.handle, parameter.0, &mut relevant),
        )?;
        Ok(relevant != 0)
    }

    /// Value type of `parameter`, queried from the camera on every call.
    ///
    /// # Errors
    ///
    /// [`PicamError::Value`] if the SDK reports a type this crate does not know.
    pub fn get_parameter_value_type(&self, parameter: Parameter) -> Result<ValueType> {
        let mut raw: piint = 0;
        self.check(
            self.api
                .get_parameter_value_type(self.handle, parameter.0, &mut raw),
        )?;
        ValueType::from_raw(raw)
            .ok_or_else(|| PicamError::Value("unknown parameter value type".to_string()))
    }

    /// Whether `parameter` can be written.
    pub fn get_parameter_value_access(&self, parameter: Parameter) -> Result<ValueAccess> {
        let mut raw: piint = 0;
        self.check(
            self.api
                .get_parameter_value_access(self.handle, parameter.0, &mut raw),
        )?;
        ValueAccess::from_raw(raw)
            .ok_or_else(|| PicamError::Value(format!("unknown value access {}", raw)))
    }

    /// Enumeration family of an enumeration-valued parameter.
    pub fn get_parameter_enumerated_type(&self, parameter: Parameter) -> Result<EnumeratedType> {
        let mut raw: piint = 0;
        self.check(
            self.api
                .get_parameter_enumerated_type(self.handle, parameter.0, &mut raw),
        )?;
        Ok(EnumeratedType(raw))
    }

    /// Kind of constraint the camera applies to `parameter`.
    pub fn get_parameter_constraint_type(&self, parameter: Parameter) -> Result<ConstraintType> {
        let mut raw: piint = 0;
        self.check(
            self.api
                .get_parameter_constraint_type(self.handle, parameter.0, &mut raw),
        )?;
        ConstraintType::from_raw(raw)
            .ok_or_else(|| PicamError::Value(format!("unknown constraint type {}", raw)))
    }

    // -------------------------------------------------------------------------
    // Typed values
    // -------------------------------------------------------------------------

    /// Integer, boolean or enumeration value.
    pub fn get_int(&self, parameter: Parameter) -> Result<i32> {
        let mut value: piint = 0;
        self.check(
            self.api
                .get_parameter_integer_value(self.handle, parameter.0, &mut value),
        )?;
        Ok(value)
    }

    /// Set an integer, boolean or enumeration value. Takes effect on commit.
    pub fn set_int(&mut self, parameter: Parameter, value: i32) -> Result<()> {
        self.check(
            self.api
                .set_parameter_integer_value(self.handle, parameter.0, value),
        )
    }

    /// Large-integer value.
    pub fn get_long(&self, parameter: Parameter) -> Result<i64> {
        let mut value: pi64s = 0;
        self.check(
            self.api
                .get_parameter_large_integer_value(self.handle, parameter.0, &mut value),
        )?;
        Ok(value)
    }

    /// Set a large-integer value. Takes effect on commit.
    pub fn set_long(&mut self, parameter: Parameter, value: i64) -> Result<()> {
        self.check(
            self.api
                .set_parameter_large_integer_value(self.handle, parameter.0, value),
        )
    }

    /// Floating-point value as last set, not read from the hardware.
    pub fn get_float(&self, parameter: Parameter) -> Result<f64> {
        let mut value = 0.0;
        self.check(
            self.api
                .get_parameter_floating_point_value(self.handle, parameter.0, &mut value),
        )?;
        Ok(value)
    }

    /// Set a floating-point value. Takes effect on commit.
    pub fn set_float(&mut self, parameter: Parameter, value: f64) -> Result<()> {
        self.check(
            self.api
                .set_parameter_floating_point_value(self.handle, parameter.0, value),
        )
    }

    /// Read a live value from the hardware, e.g. the sensor temperature.
    pub fn read_float(&self, parameter: Parameter) -> Result<f64> {
        let mut value = 0.0;
        self.check(
            self.api
                .read_parameter_floating_point_value(self.handle, parameter.0, &mut value),
        )?;
        Ok(value)
    }

    /// Regions of interest. An empty list comes back as an empty vector.
    pub fn get_rois(&self, parameter: Parameter) -> Result<Vec<Roi>> {
        let mut value: *const PicamRois = ptr::null();
        let code = self
            .api
            .get_parameter_rois_value(self.handle, parameter.0, &mut value);
        let alloc = NativeAlloc::new(&self.api, value, |api, p| unsafe { api.destroy_rois(p) });
        self.check(code)?;
        // SAFETY: success guarantees a valid PicamRois with `roi_count` entries.
        let rois = match unsafe { alloc.get() } {
            Some(r) => unsafe { raw_slice(r.roi_array, r.roi_count) }
                .iter()
                .map(|&roi| Roi::from(roi))
                .collect(),
            None => Vec::new(),
        };
        alloc.release()?;
        Ok(rois)
    }

    /// Replace the regions of interest. Takes effect on commit.
    pub fn set_rois(&mut self, parameter: Parameter, rois: &[Roi]) -> Result<()> {
        let mut raw: Vec<sys::PicamRoi> = rois.iter().map(|&r| r.into()).collect();
        let value = PicamRois {
            roi_array: raw.as_mut_ptr(),
            roi_count: piint::try_from(raw.len())
                .map_err(|_| PicamError::Value("too many ROIs".to_string()))?,
        };
        // SAFETY: roi_array points at `roi_count` elements owned by `raw`.
        let code = unsafe {
            self.api
                .set_parameter_rois_value(self.handle, parameter.0, &value)
        };
        self.check(code)
    }

    /// Pulse value, e.g. a gate.
    pub fn get_pulse(&self, parameter: Parameter) -> Result<Pulse> {
        let mut value: *const PicamPulse = ptr::null();
        let code = self
            .api
            .get_parameter_pulse_value(self.handle, parameter.0, &mut value);
        let alloc = NativeAlloc::new(&self.api, value, |api, p| unsafe { api.destroy_pulses(p) });
        self.check(code)?;
        // SAFETY: success guarantees a valid pulse.
        let pulse = unsafe { alloc.get() }
            .map(|&p| Pulse::from(p))
            .ok_or_else(|| PicamError::Value("SDK returned no pulse value".to_string()))?;
        alloc.release()?;
        Ok(pulse)
    }

    /// Set a pulse value. Takes effect on commit.
    pub fn set_pulse(&mut self, parameter: Parameter, pulse: Pulse) -> Result<()> {
        let raw = PicamPulse::from(pulse);
        self.check(
            self.api
                .set_parameter_pulse_value(self.handle, parameter.0, &raw),
        )
    }

    /// Modulation sequence.
    pub fn get_modulations(&self, parameter: Parameter) -> Result<Vec<Modulation>> {
        let mut value: *const PicamModulations = ptr::null();
        let code = self
            .api
            .get_parameter_modulations_value(self.handle, parameter.0, &mut value);
        let alloc = NativeAlloc::new(&self.api, value, |api, p| unsafe {
            api.destroy_modulations(p)
        });
        self.check(code)?;
        // SAFETY: success guarantees `modulation_count` entries.
        let modulations = match unsafe { alloc.get() } {
            Some(m) => unsafe { raw_slice(m.modulation_array, m.modulation_count) }
                .iter()
                .map(|&m| Modulation::from(m))
                .collect(),
            None => Vec::new(),
        };
        alloc.release()?;
        Ok(modulations)
    }

    /// Replace a modulation sequence. Takes effect on commit.
    pub fn set_modulations(&mut self, parameter: Parameter, modulations: &[Modulation]) -> Result<()> {
        let mut raw: Vec<sys::PicamModulation> = modulations.iter().map(|&m| m.into()).collect();
        let value = PicamModulations {
            modulation_array: raw.as_mut_ptr(),
            modulation_count: piint::try_from(raw.len())
                .map_err(|_| PicamError::Value("too many modulations".to_string()))?,
        };
        // SAFETY: modulation_array points at `modulation_count` elements owned by `raw`.
        let code = unsafe {
            self.api
                .set_parameter_modulations_value(self.handle, parameter.0, &value)
        };
        self.check(code)
    }

    // -------------------------------------------------------------------------
    // Dynamic values
    // -------------------------------------------------------------------------

    /// Read `parameter` using the accessor its value type requires.
    pub fn get(&self, parameter: Parameter) -> Result<ParameterValue> {
        Ok(match self.get_parameter_value_type(parameter)? {
            ValueType::Integer => ParameterValue::Integer(self.get_int(parameter)?),
            ValueType::Boolean => ParameterValue::Boolean(self.get_int(parameter)? != 0),
            ValueType::Enumeration => ParameterValue::Enumeration(self.get_int(parameter)?),
            ValueType::LargeInteger => ParameterValue::LargeInteger(self.get_long(parameter)?),
            ValueType::FloatingPoint => ParameterValue::FloatingPoint(self.get_float(parameter)?),
            ValueType::Rois => ParameterValue::Rois(self.get_rois(parameter)?),
            ValueType::Pulse => ParameterValue::Pulse(self.get_pulse(parameter)?),
            ValueType::Modulations => ParameterValue::Modulations(self.get_modulations(parameter)?),
        })
    }

    /// Write `parameter` using the accessor its value type requires.
    ///
    /// Integer, boolean and enumeration parameters accept any of those three
    /// variants. Large-integer parameters also accept them. Floating-point
    /// parameters accept any numeric variant.
    pub fn set(&mut self, parameter: Parameter, value: impl Into<ParameterValue>) -> Result<()> {
        let value = value.into();
        let value_type = self.get_parameter_value_type(parameter)?;
        let mismatch = |value: &ParameterValue| {
            PicamError::Value(format!(
                "{} expects a {:?} value, got {:?}",
                parameter, value_type, value
            ))
        };
        match value_type {
            ValueType::Integer | ValueType::Boolean | ValueType::Enumeration => {
                let v = value.as_i32().ok_or_else(|| mismatch(&value))?;
                self.set_int(parameter, v)
            }
            ValueType::LargeInteger => {
                let v = value.as_i64().ok_or_else(|| mismatch(&value))?;
                self.set_long(parameter, v)
            }
            ValueType::FloatingPoint => {
                let v = value.as_f64().ok_or_else(|| mismatch(&value))?;
                self.set_float(parameter, v)
            }
            ValueType::Rois => match value {
                ParameterValue::Rois(rois) => self.set_rois(parameter, &rois),
                other => Err(mismatch(&other)),
            },
            ValueType::Pulse => match value {
                ParameterValue::Pulse(pulse) => self.set_pulse(parameter, pulse),
                other => Err(mismatch(&other)),
            },
            ValueType::Modulations => match value {
                ParameterValue::Modulations(m) => self.set_modulations(parameter, &m),
                other => Err(mismatch(&other)),
            },
        }
    }

    // -------------------------------------------------------------------------
    // Constraints
    // -------------------------------------------------------------------------

    /// Snapshot of a range constraint. Use `ConstraintCategory::default()` for
    /// the capable range.
    pub fn get_parameter_range_constraint(
        &self,
        parameter: Parameter,
        category: ConstraintCategory,
    ) -> Result<RangeConstraint> {
        let mut constraint: *const PicamRangeConstraint = ptr::null();
        let code = self.api.get_parameter_range_constraint(
            self.handle,
            parameter.0,
            category.raw(),
            &mut constraint,
        );
        let alloc = NativeAlloc::new(&self.api, constraint, |api, p| unsafe {
            api.destroy_range_constraints(p)
        });
        self.check(code)?;
        // SAFETY: success guarantees a valid constraint and its value arrays.
        let snapshot = match unsafe { alloc.get() } {
            Some(c) => RangeConstraint {
                minimum: c.minimum,
                maximum: c.maximum,
                increment: c.increment,
                scope: c.scope,
                severity: c.severity,
                empty_set: c.empty_set != 0,
                excluded_values: unsafe { raw_slice(c.excluded_values_array, c.excluded_values_count) }
                    .to_vec(),
                outlying_values: unsafe { raw_slice(c.outlying_values_array, c.outlying_values_count) }
                    .to_vec(),
            },
            None => {
                return Err(PicamError::Value(format!(
                    "SDK returned no range constraint for {}",
                    parameter
                )))
            }
        };
        alloc.release()?;
        Ok(snapshot)
    }

    /// Permitted discrete values, in SDK order.
    pub fn get_parameter_collection_constraint(
        &self,
        parameter: Parameter,
        category: ConstraintCategory,
    ) -> Result<Vec<f64>> {
        let mut constraint: *const PicamCollectionConstraint = ptr::null();
        let code = self.api.get_parameter_collection_constraint(
            self.handle,
            parameter.0,
            category.raw(),
            &mut constraint,
        );
        let alloc = NativeAlloc::new(&self.api, constraint, |api, p| unsafe {
            api.destroy_collection_constraints(p)
        });
        self.check(code)?;
        // SAFETY: success guarantees `values_count` values.
        let values = match unsafe { alloc.get() } {
            Some(c) => unsafe { raw_slice(c.values_array, c.values_count) }.to_vec(),
            None => Vec::new(),
        };
        alloc.release()?;
        Ok(values)
    }

    // -------------------------------------------------------------------------
    // Commit
    // -------------------------------------------------------------------------

    /// False while any set value is still pending.
    pub fn are_parameters_committed(&self) -> Result<bool> {
        let mut committed: pibln = 0;
        self.check(
            self.api
                .are_parameters_committed(self.handle, &mut committed),
        )?;
        Ok(committed != 0)
    }

    /// Validate and apply all pending parameter values.
    ///
    /// # Errors
    ///
    /// On rejection the returned [`NativeError`] carries the rejected
    /// parameters (see [`PicamError::failed_parameters`]).
    pub fn commit(&mut self) -> Result<()> {
        debug!(handle = ?self.handle, "Committing parameters");
        let mut failed: *const PicamParameter = ptr::null();
        let mut count: piint = 0;
        let code = self
            .api
            .commit_parameters(self.handle, &mut failed, &mut count);
        let alloc = NativeAlloc::new(&self.api, failed, |api, p| unsafe {
            api.destroy_parameters(p)
        });
        match NativeError::from_code(code, &self.api) {
            None => alloc.release(),
            Some(err) => {
                // SAFETY: the SDK fills the rejected list even when the commit fails.
                let rejected: Vec<Parameter> = unsafe { alloc.as_slice(count) }
                    .iter()
                    .map(|&p| Parameter(p))
                    .collect();
                if let Err(e) = alloc.release() {
                    warn!(error = %e, "Failed to destroy rejected parameter list");
                }
                Err(err.with_failed_parameters(rejected).into())
            }
        }
    }

    // -------------------------------------------------------------------------
    // Acquisition
    // -------------------------------------------------------------------------

    /// Bytes per readout for the committed settings.
    pub fn readout_stride(&self) -> Result<usize> {
        let stride = self.get_int(Parameter::READOUT_STRIDE)?;
        usize::try_from(stride)
            .map_err(|_| PicamError::Value(format!("negative readout stride {}", stride)))
    }

    /// Acquire `readout_count` readouts, blocking up to `timeout` ms
    /// ([`INFINITE_TIMEOUT`](crate::INFINITE_TIMEOUT) blocks indefinitely).
    ///
    /// The returned data borrows the camera mutably and is invalidated by the
    /// next acquisition call.
    pub fn acquire(
        &mut self,
        readout_count: i64,
        timeout: i32,
    ) -> Result<(AvailableData<'_>, AcquisitionErrors)> {
        debug!(handle = ?self.handle, readout_count, timeout, "Acquiring");
        let stride = self.readout_stride()?;
        let mut available = PicamAvailableData::default();
        let mut errors: piint = 0;
        self.check(self.api.acquire(
            self.handle,
            readout_count,
            timeout,
            &mut available,
            &mut errors,
        ))?;
        // SAFETY: the SDK lays out readouts `READOUT_STRIDE` bytes apart, and the
        // buffer stays valid until the next acquisition call, which needs
        // `&mut self` and so ends this borrow first.
        let data = unsafe { AvailableData::from_raw(available, stride) };
        Ok((data, AcquisitionErrors::from_bits_retain(errors)))
    }

    /// Start an asynchronous acquisition of `READOUT_COUNT` readouts
    /// (zero runs until stopped). Prefer [`Camera::acquisition`].
    pub fn start_acquisition(&mut self) -> Result<()> {
        debug!(handle = ?self.handle, "Starting acquisition");
        self.check(self.api.start_acquisition(self.handle))
    }

    /// Ask a running acquisition to stop.
    pub fn stop_acquisition(&mut self) -> Result<()> {
        debug!(handle = ?self.handle, "Stopping acquisition");
        self.check(self.api.stop_acquisition(self.handle))
    }

    /// Whether an asynchronous acquisition is in progress.
    pub fn is_acquisition_running(&self) -> Result<bool> {
        let mut running: pibln = 0;
        self.check(self.api.is_acquisition_running(self.handle, &mut running))?;
        Ok(running != 0)
    }

    /// Wait for the next readouts of a started acquisition.
    ///
    /// Same validity rule as [`Camera::acquire`].
    pub fn wait_for_acquisition_update(
        &mut self,
        timeout: i32,
    ) -> Result<(AvailableData<'_>, AcquisitionStatus)> {
        let stride = self.readout_stride()?;
        let mut available = PicamAvailableData::default();
        let mut status = PicamAcquisitionStatus::default();
        self.check(self.api.wait_for_acquisition_update(
            self.handle,
            timeout,
            &mut available,
            &mut status,
        ))?;
        // SAFETY: see `acquire`.
        let data = unsafe { AvailableData::from_raw(available, stride) };
        Ok((data, AcquisitionStatus::from(status)))
    }

    /// Start an acquisition that is stopped when the guard is dropped.
    pub fn acquisition(&mut self) -> Result<Acquisition<'_, 's>> {
        self.start_acquisition()?;
        Ok(Acquisition {
            camera: self,
            finished: false,
        })
    }
}

impl Drop for Camera<'_> {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        debug!(handle = ?self.handle, "Closing camera on drop");
        let code = self.api.close_camera(self.handle);
        if let Err(e) = check(&self.api, code) {
            warn!(error = %e, "Failed to close PICam camera");
        }
    }
}

/// A running acquisition. Dropping it stops the acquisition.
///
/// Dereferences to the [`Camera`] for read-only queries.
pub struct Acquisition<'c, 's> {
    camera: &'c mut Camera<'s>,
    finished: bool,
}

impl<'s> Deref for Acquisition<'_, 's> {
    type Target = Camera<'s>;

    fn deref(&self) -> &Camera<'s> {
        self.camera
    }
}

impl Acquisition<'_, '_> {
    /// See [`Camera::wait_for_acquisition_update`].
    pub fn wait_for_update(
        &mut self,
        timeout: i32,
    ) -> Result<(AvailableData<'_>, AcquisitionStatus)> {
        self.camera.wait_for_acquisition_update(timeout)
    }

    /// Stop now, propagating failure.
    pub fn finish(mut self) -> Result<()> {
        self.finished = true;
        self.camera.stop_acquisition()
    }
}

impl Drop for Acquisition<'_, '_> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        if let Err(e) = self.camera.stop_acquisition() {
            warn!(error = %e, "Failed to stop acquisition");
        }
    }
}

#[cfg(all(test, feature = "mock"))]
mod tests {
    use super::*;
    use crate::library::Library;
    use crate::mock::MockApi;
    use tracing_test::traced_test;

    fn setup() -> (Arc<MockApi>, Library) {
        let mock = Arc::new(MockApi::with_demo_camera());
        let library = Library::new(mock.clone());
        (mock, library)
    }

    #[test]
    fn test_get_dispatches_on_value_type() {
        let (_mock, library) = setup();
        let session = library.session().unwrap();
        let camera = session.open_first_camera().unwrap();

        assert!(matches!(
            camera.get(Parameter::EXPOSURE_TIME).unwrap(),
            ParameterValue::FloatingPoint(_)
        ));
        assert!(matches!(
            camera.get(Parameter::DISABLE_COOLING_FAN).unwrap(),
            ParameterValue::Boolean(false)
        ));
        assert!(matches!(
            camera.get(Parameter::READOUT_COUNT).unwrap(),
            ParameterValue::LargeInteger(1)
        ));
        assert!(matches!(
            camera.get(Parameter::ROIS).unwrap(),
            ParameterValue::Rois(ref r) if r.len() == 1
        ));
    }

    #[test]
    fn test_set_rejects_mismatched_variant() {
        let (_mock, library) = setup();
        let session = library.session().unwrap();
        let mut camera = session.open_first_camera().unwrap();

        let err = camera
            .set(Parameter::EXPOSURE_TIME, ParameterValue::Rois(vec![]))
            .unwrap_err();
        assert!(matches!(err, PicamError::Value(_)));
        let err = camera.set(Parameter::ADC_QUALITY, 1.5).unwrap_err();
        assert!(matches!(err, PicamError::Value(_)));
    }

    #[test]
    fn test_unknown_value_type() {
        let (mock, library) = setup();
        mock.override_value_type(Parameter::EXPOSURE_TIME, 42);
        let session = library.session().unwrap();
        let camera = session.open_first_camera().unwrap();

        let err = camera.get(Parameter::EXPOSURE_TIME).unwrap_err();
        match err {
            PicamError::Value(msg) => assert_eq!(msg, "unknown parameter value type"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_close_consumes_and_reports() {
        let (mock, library) = setup();
        let session = library.session().unwrap();
        let camera = session.open_first_camera().unwrap();
        camera.close().unwrap();
        assert_eq!(mock.call_count("Picam_CloseCamera"), 1);
    }

    #[test]
    fn test_drop_closes_camera() {
        let (mock, library) = setup();
        let session = library.session().unwrap();
        {
            let _camera = session.open_first_camera().unwrap();
        }
        assert_eq!(mock.call_count("Picam_CloseCamera"), 1);
        // Camera can be reopened after the implicit close.
        let camera = session.open_first_camera().unwrap();
        camera.close().unwrap();
    }

    #[test]
    fn test_acquisition_guard_stops_on_drop() {
        let (mock, library) = setup();
        let session = library.session().unwrap();
        let mut camera = session.open_first_camera().unwrap();
        camera.set_long(Parameter::READOUT_COUNT, 10).unwrap();
        camera.commit().unwrap();
        {
            let mut acquisition = camera.acquisition().unwrap();
            assert!(acquisition.is_acquisition_running().unwrap());
            let (data, status) = acquisition.wait_for_update(1000).unwrap();
            assert_eq!(data.readout_count(), 1);
            assert!(status.running);
        }
        assert_eq!(mock.call_count("Picam_StopAcquisition"), 1);
        assert!(!camera.is_acquisition_running().unwrap());
    }

    #[test]
    #[traced_test]
    fn test_rejected_commit_survives_destroy_failure() {
        let (mock, library) = setup();
        let session = library.session().unwrap();
        let mut camera = session.open_first_camera().unwrap();
        camera.set_float(Parameter::EXPOSURE_TIME, -1.0).unwrap();
        mock.inject_error("Picam_DestroyParameters", sys::PicamError_InvalidPointer);

        let err = camera.commit().unwrap_err();
        assert_eq!(err.code(), Some(sys::PicamError_InvalidParameterValues));
        assert_eq!(err.failed_parameters(), [Parameter::EXPOSURE_TIME]);
        assert!(logs_contain("Failed to destroy rejected parameter list"));
        assert_eq!(mock.call_count("Picam_DestroyParameters"), 1);
    }

    #[test]
    #[traced_test]
    fn test_drop_logs_close_failure() {
        let (mock, library) = setup();
        let session = library.session().unwrap();
        let camera = session.open_first_camera().unwrap();
        mock.inject_error("Picam_CloseCamera", sys::PicamError_DeviceCommunicationFailed);
        drop(camera);
        assert!(logs_contain("Failed to close PICam camera"));
    }
}

//! In-memory implementation of the native contract.
//!
//! [`MockApi`] behaves like the SDK with demo cameras attached: it keeps the
//! library flag, open handles, a parameter store with capable constraints,
//! commit validation and an acquisition buffer. Every pointer it hands out is
//! tracked until the matching destroy call, so tests can assert that nothing
//! leaks.
//!
//! Test hooks:
//! - [`MockApi::inject_error`] makes the next call to a named entry point fail.
//! - [`MockApi::calls`] / [`MockApi::call_count`] expose the call log.
//! - [`MockApi::outstanding_allocations`] / [`MockApi::destroy_count`] expose
//!   allocation accounting.

use std::collections::{BTreeMap, HashMap};
use std::ffi::{c_void, CStr, CString};
use std::ptr;

use parking_lot::Mutex;
use picam_sys as sys;
use sys::{
    pi64s, pibln, pichar, piint, PicamAcquisitionErrorsMask, PicamAcquisitionStatus,
    PicamAvailableData, PicamCameraID, PicamCollectionConstraint, PicamConstraintCategory,
    PicamConstraintType, PicamEnumeratedType, PicamError, PicamFirmwareDetail, PicamHandle,
    PicamModel, PicamModulations, PicamParameter, PicamPulse, PicamRangeConstraint, PicamRois,
    PicamValueAccess, PicamValueType,
};

use crate::alloc::raw_slice;
use crate::api::PicamApi;
use crate::enums;
use crate::types::{
    chars_to_string, string_to_chars, EnumeratedType, Modulation, Parameter, ParameterValue,
    Pulse, Roi,
};

type MockResult<T = ()> = std::result::Result<T, PicamError>;

const VERSION: (piint, piint, piint, piint) = (5, 12, 3, 20230515);
const HANDLE_BASE: usize = 0x1000;
const DEMO_SERIAL: &str = "12345";
const MAX_BUFFER_BYTES: usize = 256 * 1024 * 1024;
const READOUT_RATE: f64 = 10.0;

const DEMO_MODELS: &[PicamModel] = &[
    sys::PicamModel_Pixis100F,
    sys::PicamModel_Pixis400B,
    sys::PicamModel_ProEM512B,
    sys::PicamModel_PIMax41024I,
];

fn sensor_size(model: PicamModel) -> (i32, i32) {
    match model {
        sys::PicamModel_Pixis100F => (1340, 100),
        sys::PicamModel_Pixis400B => (1340, 400),
        sys::PicamModel_ProEM512B => (512, 512),
        sys::PicamModel_PIMax41024I => (1024, 1024),
        _ => (1024, 256),
    }
}

/// Memory handed to the caller. Held only to keep it alive until destroyed.
#[allow(dead_code)]
enum Allocation {
    String(CString),
    CameraIds(Box<[PicamCameraID]>),
    Firmware(Box<[PicamFirmwareDetail]>),
    Models(Box<[PicamModel]>),
    Parameters(Box<[PicamParameter]>),
    Rois(Box<PicamRois>, Box<[sys::PicamRoi]>),
    Pulse(Box<PicamPulse>),
    Modulations(Box<PicamModulations>, Box<[sys::PicamModulation]>),
    Range(Box<PicamRangeConstraint>),
    Collection(Box<PicamCollectionConstraint>, Box<[f64]>),
}

struct MockParameter {
    value: ParameterValue,
    access: PicamValueAccess,
    enumerated_type: PicamEnumeratedType,
    range: Option<(f64, f64, f64)>,
    collection: Option<Vec<f64>>,
    value_type_override: Option<PicamValueType>,
}

impl MockParameter {
    fn new(value: impl Into<ParameterValue>) -> Self {
        Self {
            value: value.into(),
            access: sys::PicamValueAccess_ReadWrite,
            enumerated_type: 0,
            range: None,
            collection: None,
            value_type_override: None,
        }
    }

    /// An empty `allowed` list leaves the value unconstrained.
    fn enumeration(ty: EnumeratedType, value: piint, allowed: &[piint]) -> Self {
        let mut p = Self::new(ParameterValue::Enumeration(value));
        p.enumerated_type = ty.0;
        if !allowed.is_empty() {
            p.collection = Some(allowed.iter().map(|&v| f64::from(v)).collect());
        }
        p
    }

    fn range(mut self, min: f64, max: f64, increment: f64) -> Self {
        self.range = Some((min, max, increment));
        self
    }

    fn collection(mut self, values: &[f64]) -> Self {
        self.collection = Some(values.to_vec());
        self
    }

    fn read_only(mut self) -> Self {
        self.access = sys::PicamValueAccess_ReadOnly;
        self
    }

    fn value_type(&self) -> PicamValueType {
        self.value_type_override
            .unwrap_or(self.value.value_type() as PicamValueType)
    }

    fn is_valid(&self, sensor: (i32, i32)) -> bool {
        match &self.value {
            ParameterValue::Rois(rois) => {
                !rois.is_empty()
                    && rois.iter().all(|r| {
                        r.width > 0
                            && r.height > 0
                            && r.x_binning > 0
                            && r.y_binning > 0
                            && r.x >= 0
                            && r.y >= 0
                            && r.x + r.width <= sensor.0
                            && r.y + r.height <= sensor.1
                            && r.width % r.x_binning == 0
                            && r.height % r.y_binning == 0
                    })
            }
            ParameterValue::Pulse(p) => p.delay >= 0.0 && p.width > 0.0,
            ParameterValue::Modulations(m) => m.iter().all(|m| m.duration > 0.0),
            other => {
                let Some(v) = other.as_f64() else {
                    return true;
                };
                if let Some((min, max, _)) = self.range {
                    if v < min || v > max {
                        return false;
                    }
                }
                if let Some(values) = &self.collection {
                    if !values.contains(&v) {
                        return false;
                    }
                }
                true
            }
        }
    }
}

fn demo_parameters(sensor: (i32, i32)) -> BTreeMap<PicamParameter, MockParameter> {
    let (width, height) = sensor;
    let mut params = BTreeMap::new();
    let mut add = |p: Parameter, param: MockParameter| {
        params.insert(p.0, param);
    };
    add(Parameter::EXPOSURE_TIME, MockParameter::new(100.0).range(0.0, 1.0e7, 0.001));
    add(
        Parameter::SHUTTER_TIMING_MODE,
        MockParameter::enumeration(
            EnumeratedType::SHUTTER_TIMING_MODE,
            sys::PicamShutterTimingMode_Normal,
            &[
                sys::PicamShutterTimingMode_Normal,
                sys::PicamShutterTimingMode_AlwaysClosed,
                sys::PicamShutterTimingMode_AlwaysOpen,
                sys::PicamShutterTimingMode_OpenBeforeTrigger,
            ],
        ),
    );
    add(
        Parameter::REPETITIVE_GATE,
        MockParameter::new(Pulse {
            delay: 100.0,
            width: 50.0,
        }),
    );
    add(
        Parameter::CUSTOM_MODULATION_SEQUENCE,
        MockParameter::new(Vec::<Modulation>::new()),
    );
    add(Parameter::ADC_SPEED, MockParameter::new(2.0).collection(&[0.1, 2.0]));
    add(
        Parameter::ADC_ANALOG_GAIN,
        MockParameter::enumeration(
            EnumeratedType::ADC_ANALOG_GAIN,
            sys::PicamAdcAnalogGain_Medium,
            &[
                sys::PicamAdcAnalogGain_Low,
                sys::PicamAdcAnalogGain_Medium,
                sys::PicamAdcAnalogGain_High,
            ],
        ),
    );
    add(
        Parameter::ADC_QUALITY,
        MockParameter::enumeration(
            EnumeratedType::ADC_QUALITY,
            sys::PicamAdcQuality_LowNoise,
            &[sys::PicamAdcQuality_LowNoise, sys::PicamAdcQuality_HighCapacity],
        ),
    );
    add(
        Parameter::TRIGGER_RESPONSE,
        MockParameter::enumeration(
            EnumeratedType::TRIGGER_RESPONSE,
            sys::PicamTriggerResponse_NoResponse,
            &[
                sys::PicamTriggerResponse_NoResponse,
                sys::PicamTriggerResponse_ReadoutPerTrigger,
                sys::PicamTriggerResponse_ShiftPerTrigger,
                sys::PicamTriggerResponse_ExposeDuringTriggerPulse,
                sys::PicamTriggerResponse_StartOnSingleTrigger,
            ],
        ),
    );
    add(
        Parameter::ACTIVE_WIDTH,
        MockParameter::new(width).range(1.0, f64::from(width), 1.0),
    );
    add(
        Parameter::ACTIVE_HEIGHT,
        MockParameter::new(height).range(1.0, f64::from(height), 1.0),
    );
    add(
        Parameter::SENSOR_TEMPERATURE_SET_POINT,
        MockParameter::new(-70.0).range(-75.0, 25.0, 1.0),
    );
    add(
        Parameter::SENSOR_TEMPERATURE_READING,
        MockParameter::new(-70.0).read_only(),
    );
    add(
        Parameter::SENSOR_TEMPERATURE_STATUS,
        MockParameter::enumeration(
            EnumeratedType::SENSOR_TEMPERATURE_STATUS,
            sys::PicamSensorTemperatureStatus_Locked,
            &[],
        )
        .read_only(),
    );
    add(
        Parameter::DISABLE_COOLING_FAN,
        MockParameter::new(false).collection(&[0.0, 1.0]),
    );
    add(Parameter::ROIS, MockParameter::new(vec![Roi::full(width, height)]));
    add(
        Parameter::READOUT_COUNT,
        MockParameter::new(1i64).range(0.0, 1.0e9, 1.0),
    );
    add(
        Parameter::PIXEL_FORMAT,
        MockParameter::enumeration(
            EnumeratedType::PIXEL_FORMAT,
            sys::PicamPixelFormat_Monochrome16Bit,
            &[sys::PicamPixelFormat_Monochrome16Bit],
        ),
    );
    // Stride and frame size are computed from the ROIs on read.
    add(Parameter::READOUT_STRIDE, MockParameter::new(0).read_only());
    add(Parameter::FRAME_SIZE, MockParameter::new(0).read_only());
    add(Parameter::PIXEL_BIT_DEPTH, MockParameter::new(16).read_only());
    params
}

struct MockCamera {
    id: PicamCameraID,
    demo: bool,
    sensor: (i32, i32),
    handle: Option<usize>,
    parameters: BTreeMap<PicamParameter, MockParameter>,
    committed: bool,
    running: bool,
    remaining: i64,
    readouts_produced: u64,
    buffer: Vec<u8>,
}

impl MockCamera {
    fn demo(model: PicamModel, serial: &str) -> Self {
        let sensor = sensor_size(model);
        let mut id = PicamCameraID {
            model,
            computer_interface: sys::PicamComputerInterface_Usb2,
            ..Default::default()
        };
        let model_name = enums::name_of("PicamModel_", model)
            .map(|n| n.trim_start_matches("PicamModel_"))
            .unwrap_or("Unknown");
        string_to_chars(&format!("Demo {}", model_name), &mut id.sensor_name);
        string_to_chars(serial, &mut id.serial_number);
        Self {
            id,
            demo: true,
            sensor,
            handle: None,
            parameters: demo_parameters(sensor),
            committed: false,
            running: false,
            remaining: 0,
            readouts_produced: 0,
            buffer: Vec::new(),
        }
    }

    fn matches(&self, id: &PicamCameraID) -> bool {
        self.id.model == id.model
            && chars_to_string(&self.id.serial_number) == chars_to_string(&id.serial_number)
    }

    fn parameter(&mut self, p: PicamParameter) -> MockResult<&mut MockParameter> {
        self.parameters
            .get_mut(&p)
            .ok_or(sys::PicamError_ParameterDoesNotExist)
    }

    /// Apply `f` to a writable value; a successful write clears the committed flag.
    fn update(
        &mut self,
        p: PicamParameter,
        f: impl FnOnce(&mut ParameterValue) -> MockResult,
    ) -> MockResult {
        let param = self
            .parameters
            .get_mut(&p)
            .ok_or(sys::PicamError_ParameterDoesNotExist)?;
        if param.access == sys::PicamValueAccess_ReadOnly {
            return Err(sys::PicamError_ParameterValueIsReadOnly);
        }
        f(&mut param.value)?;
        self.committed = false;
        Ok(())
    }

    /// 16-bit pixels over all ROIs.
    fn readout_stride(&self) -> i32 {
        let pixels: i64 = match self.parameters.get(&sys::PicamParameter_Rois).map(|p| &p.value) {
            Some(ParameterValue::Rois(rois)) => rois.iter().map(Roi::binned_pixels).sum(),
            _ => 0,
        };
        i32::try_from(pixels * 2).unwrap_or(i32::MAX)
    }

    fn readout_count_setting(&self) -> i64 {
        match self
            .parameters
            .get(&sys::PicamParameter_ReadoutCount)
            .map(|p| &p.value)
        {
            Some(ParameterValue::LargeInteger(n)) => *n,
            _ => 1,
        }
    }

    fn validate(&self) -> Vec<PicamParameter> {
        self.parameters
            .iter()
            .filter(|(_, param)| !param.is_valid(self.sensor))
            .map(|(&p, _)| p)
            .collect()
    }

    /// Regenerate the buffer with `readouts` readouts of a ramp pattern.
    fn fill_buffer(&mut self, readouts: i64) -> MockResult<PicamAvailableData> {
        let stride = usize::try_from(self.readout_stride()).unwrap_or(0);
        let n = usize::try_from(readouts).map_err(|_| sys::PicamError_InvalidReadoutCount)?;
        let len = n
            .checked_mul(stride)
            .filter(|&len| len <= MAX_BUFFER_BYTES)
            .ok_or(sys::PicamError_InsufficientMemory)?;
        let mut buffer = Vec::with_capacity(len);
        for r in 0..n as u64 {
            let frame = self.readouts_produced + r;
            for i in 0..stride / 2 {
                let value = (frame.wrapping_mul(31).wrapping_add(i as u64) & 0xffff) as u16;
                buffer.extend_from_slice(&value.to_ne_bytes());
            }
        }
        self.readouts_produced += n as u64;
        self.buffer = buffer;
        Ok(PicamAvailableData {
            initial_readout: self.buffer.as_mut_ptr().cast::<c_void>(),
            readout_count: readouts,
        })
    }
}

#[derive(Default)]
struct MockState {
    initialized: bool,
    cameras: Vec<MockCamera>,
    next_handle: usize,
    allocations: HashMap<usize, Allocation>,
    destroy_counts: HashMap<&'static str, usize>,
    calls: Vec<&'static str>,
    injected: HashMap<&'static str, PicamError>,
    value_type_overrides: HashMap<PicamParameter, PicamValueType>,
}

// SAFETY: the raw pointers held in `allocations` and camera buffers point into
// heap memory owned by the same state, and the state is only reached through
// the mutex.
unsafe impl Send for MockState {}

impl MockState {
    fn require_init(&self) -> MockResult {
        if self.initialized {
            Ok(())
        } else {
            Err(sys::PicamError_LibraryNotInitialized)
        }
    }

    fn camera(&mut self, handle: PicamHandle) -> MockResult<&mut MockCamera> {
        self.require_init()?;
        let key = handle as usize;
        self.cameras
            .iter_mut()
            .find(|c| c.handle == Some(key))
            .ok_or(sys::PicamError_InvalidHandle)
    }

    fn camera_by_id(&mut self, id: &PicamCameraID) -> MockResult<&mut MockCamera> {
        self.require_init()?;
        self.cameras
            .iter_mut()
            .find(|c| c.matches(id))
            .ok_or(sys::PicamError_InvalidCameraID)
    }

    fn connect(&mut self, model: PicamModel, serial: &str) -> &MockCamera {
        let mut camera = MockCamera::demo(model, serial);
        for (&p, &raw) in &self.value_type_overrides {
            if let Some(param) = camera.parameters.get_mut(&p) {
                param.value_type_override = Some(raw);
            }
        }
        self.cameras.push(camera);
        let last = self.cameras.len() - 1;
        &self.cameras[last]
    }

    fn open(&mut self, index: usize) -> PicamHandle {
        self.next_handle += 1;
        let key = HANDLE_BASE + self.next_handle;
        self.cameras[index].handle = Some(key);
        key as PicamHandle
    }

    fn alloc_slice<T>(
        &mut self,
        items: Vec<T>,
        wrap: fn(Box<[T]>) -> Allocation,
    ) -> (*const T, piint) {
        if items.is_empty() {
            return (ptr::null(), 0);
        }
        let boxed = items.into_boxed_slice();
        let ptr = boxed.as_ptr();
        let count = piint::try_from(boxed.len()).unwrap_or(piint::MAX);
        self.allocations.insert(ptr as usize, wrap(boxed));
        (ptr, count)
    }

    fn destroy(&mut self, name: &'static str, ptr: *const c_void) -> MockResult {
        *self.destroy_counts.entry(name).or_default() += 1;
        if ptr.is_null() {
            return Ok(());
        }
        self.allocations
            .remove(&(ptr as usize))
            .map(drop)
            .ok_or(sys::PicamError_InvalidPointer)
    }
}

/// Deterministic stand-in for the PICam SDK.
pub struct MockApi {
    state: Mutex<MockState>,
}

impl Default for MockApi {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MockApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("MockApi")
            .field("initialized", &state.initialized)
            .field("cameras", &state.cameras.len())
            .field("outstanding_allocations", &state.allocations.len())
            .finish()
    }
}

impl MockApi {
    /// No cameras attached.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MockState::default()),
        }
    }

    /// One demo Pixis 100F (serial `12345`, 1340 x 100) already connected.
    pub fn with_demo_camera() -> Self {
        let api = Self::new();
        api.state.lock().connect(sys::PicamModel_Pixis100F, DEMO_SERIAL);
        api
    }

    /// Make the next call to `function` (e.g. `"Picam_CommitParameters"`)
    /// return `code` without side effects.
    pub fn inject_error(&self, function: &'static str, code: PicamError) {
        self.state.lock().injected.insert(function, code);
    }

    /// Report `raw` as the value type of `parameter` on every camera.
    pub fn override_value_type(&self, parameter: Parameter, raw: PicamValueType) {
        let mut state = self.state.lock();
        state.value_type_overrides.insert(parameter.0, raw);
        for camera in &mut state.cameras {
            if let Some(param) = camera.parameters.get_mut(&parameter.0) {
                param.value_type_override = Some(raw);
            }
        }
    }

    /// Entry points called so far, in order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.state.lock().calls.clone()
    }

    /// Number of calls to `function`.
    pub fn call_count(&self, function: &str) -> usize {
        self.state
            .lock()
            .calls
            .iter()
            .filter(|&&name| name == function)
            .count()
    }

    /// Forget the call log.
    pub fn clear_calls(&self) {
        self.state.lock().calls.clear();
    }

    /// Allocations handed out and not yet destroyed.
    pub fn outstanding_allocations(&self) -> usize {
        self.state.lock().allocations.len()
    }

    /// Number of calls to the destroy function `function`, null pointers included.
    pub fn destroy_count(&self, function: &str) -> usize {
        self.state
            .lock()
            .destroy_counts
            .get(function)
            .copied()
            .unwrap_or(0)
    }

    fn call(&self, name: &'static str, f: impl FnOnce(&mut MockState) -> MockResult) -> PicamError {
        let mut state = self.state.lock();
        state.calls.push(name);
        if let Some(code) = state.injected.remove(name) {
            return code;
        }
        match f(&mut state) {
            Ok(()) => sys::PicamError_None,
            Err(code) => code,
        }
    }

    fn camera_ids(
        &self,
        name: &'static str,
        available: bool,
        id_array: &mut *const PicamCameraID,
        id_count: &mut piint,
    ) -> PicamError {
        self.call(name, |st| {
            st.require_init()?;
            let ids: Vec<PicamCameraID> = if available {
                st.cameras.iter().map(|c| c.id).collect()
            } else {
                Vec::new()
            };
            let (ptr, count) = st.alloc_slice(ids, Allocation::CameraIds);
            *id_array = ptr;
            *id_count = count;
            Ok(())
        })
    }
}

fn firmware_detail(name: &str, detail: &str) -> PicamFirmwareDetail {
    let mut d = PicamFirmwareDetail {
        name: [0; sys::PicamStringSize_FirmwareName as usize],
        detail: [0; sys::PicamStringSize_FirmwareDetail as usize],
    };
    string_to_chars(name, &mut d.name);
    string_to_chars(detail, &mut d.detail);
    d
}

fn valid_category(category: PicamConstraintCategory) -> MockResult {
    match category {
        sys::PicamConstraintCategory_Capable
        | sys::PicamConstraintCategory_Required
        | sys::PicamConstraintCategory_Recommended => Ok(()),
        _ => Err(sys::PicamError_InvalidConstraintCategory),
    }
}

impl PicamApi for MockApi {
    fn get_version(
        &self,
        major: &mut piint,
        minor: &mut piint,
        distribution: &mut piint,
        released: &mut piint,
    ) -> PicamError {
        self.call("Picam_GetVersion", |_| {
            (*major, *minor, *distribution, *released) = VERSION;
            Ok(())
        })
    }

    fn is_library_initialized(&self, inited: &mut pibln) -> PicamError {
        self.call("Picam_IsLibraryInitialized", |st| {
            *inited = pibln::from(st.initialized);
            Ok(())
        })
    }

    fn initialize_library(&self) -> PicamError {
        self.call("Picam_InitializeLibrary", |st| {
            if st.initialized {
                return Err(sys::PicamError_LibraryAlreadyInitialized);
            }
            st.initialized = true;
            Ok(())
        })
    }

    fn uninitialize_library(&self) -> PicamError {
        self.call("Picam_UninitializeLibrary", |st| {
            st.require_init()?;
            st.initialized = false;
            for camera in &mut st.cameras {
                camera.handle = None;
                camera.running = false;
            }
            Ok(())
        })
    }

    unsafe fn destroy_string(&self, s: *const pichar) -> PicamError {
        self.call("Picam_DestroyString", |st| {
            st.destroy("Picam_DestroyString", s.cast())
        })
    }

    fn get_enumeration_string(
        &self,
        type_: PicamEnumeratedType,
        value: piint,
        s: &mut *const pichar,
    ) -> PicamError {
        self.call("Picam_GetEnumerationString", |st| {
            st.require_init()?;
            let prefix = enums::prefix_of(EnumeratedType(type_))
                .ok_or(sys::PicamError_InvalidEnumeratedType)?;
            let name = enums::name_of(prefix, value)
                .ok_or(sys::PicamError_EnumerationValueNotDefined)?;
            let text = CString::new(&name[prefix.len()..])
                .map_err(|_| sys::PicamError_UnexpectedError)?;
            let ptr = text.as_ptr();
            st.allocations.insert(ptr as usize, Allocation::String(text));
            *s = ptr;
            Ok(())
        })
    }

    unsafe fn destroy_camera_ids(&self, id_array: *const PicamCameraID) -> PicamError {
        self.call("Picam_DestroyCameraIDs", |st| {
            st.destroy("Picam_DestroyCameraIDs", id_array.cast())
        })
    }

    fn get_available_camera_ids(
        &self,
        id_array: &mut *const PicamCameraID,
        id_count: &mut piint,
    ) -> PicamError {
        self.camera_ids("Picam_GetAvailableCameraIDs", true, id_array, id_count)
    }

    fn get_unavailable_camera_ids(
        &self,
        id_array: &mut *const PicamCameraID,
        id_count: &mut piint,
    ) -> PicamError {
        self.camera_ids("Picam_GetUnavailableCameraIDs", false, id_array, id_count)
    }

    fn open_first_camera(&self, camera: &mut PicamHandle) -> PicamError {
        self.call("Picam_OpenFirstCamera", |st| {
            st.require_init()?;
            if st.cameras.is_empty() {
                return Err(sys::PicamError_NoCamerasAvailable);
            }
            let index = st
                .cameras
                .iter()
                .position(|c| c.handle.is_none())
                .ok_or(sys::PicamError_CameraAlreadyOpened)?;
            *camera = st.open(index);
            Ok(())
        })
    }

    fn open_camera(&self, id: &PicamCameraID, camera: &mut PicamHandle) -> PicamError {
        self.call("Picam_OpenCamera", |st| {
            st.require_init()?;
            let index = st
                .cameras
                .iter()
                .position(|c| c.matches(id))
                .ok_or(sys::PicamError_InvalidCameraID)?;
            if st.cameras[index].handle.is_some() {
                return Err(sys::PicamError_CameraAlreadyOpened);
            }
            *camera = st.open(index);
            Ok(())
        })
    }

    fn close_camera(&self, camera: PicamHandle) -> PicamError {
        self.call("Picam_CloseCamera", |st| {
            let cam = st.camera(camera)?;
            cam.handle = None;
            cam.running = false;
            Ok(())
        })
    }

    fn is_camera_connected(&self, camera: PicamHandle, connected: &mut pibln) -> PicamError {
        self.call("Picam_IsCameraConnected", |st| {
            st.camera(camera)?;
            *connected = 1;
            Ok(())
        })
    }

    fn get_camera_id(&self, camera: PicamHandle, id: &mut PicamCameraID) -> PicamError {
        self.call("Picam_GetCameraID", |st| {
            *id = st.camera(camera)?.id;
            Ok(())
        })
    }

    unsafe fn destroy_firmware_details(
        &self,
        firmware_array: *const PicamFirmwareDetail,
    ) -> PicamError {
        self.call("Picam_DestroyFirmwareDetails", |st| {
            st.destroy("Picam_DestroyFirmwareDetails", firmware_array.cast())
        })
    }

    fn get_firmware_details(
        &self,
        id: &PicamCameraID,
        firmware_array: &mut *const PicamFirmwareDetail,
        firmware_count: &mut piint,
    ) -> PicamError {
        self.call("Picam_GetFirmwareDetails", |st| {
            st.camera_by_id(id)?;
            let details = vec![
                firmware_detail("Firmware", "1.4.2"),
                firmware_detail("FPGA", "2.3.0"),
            ];
            let (ptr, count) = st.alloc_slice(details, Allocation::Firmware);
            *firmware_array = ptr;
            *firmware_count = count;
            Ok(())
        })
    }

    unsafe fn destroy_models(&self, model_array: *const PicamModel) -> PicamError {
        self.call("Picam_DestroyModels", |st| {
            st.destroy("Picam_DestroyModels", model_array.cast())
        })
    }

    fn get_available_demo_camera_models(
        &self,
        model_array: &mut *const PicamModel,
        model_count: &mut piint,
    ) -> PicamError {
        self.call("Picam_GetAvailableDemoCameraModels", |st| {
            st.require_init()?;
            let (ptr, count) = st.alloc_slice(DEMO_MODELS.to_vec(), Allocation::Models);
            *model_array = ptr;
            *model_count = count;
            Ok(())
        })
    }

    fn connect_demo_camera(
        &self,
        model: PicamModel,
        serial_number: &CStr,
        id: &mut PicamCameraID,
    ) -> PicamError {
        self.call("Picam_ConnectDemoCamera", |st| {
            st.require_init()?;
            if !DEMO_MODELS.contains(&model) {
                return Err(sys::PicamError_InvalidDemoModel);
            }
            let serial = serial_number.to_string_lossy();
            if serial.is_empty() || serial.len() >= sys::PicamStringSize_SerialNumber as usize {
                return Err(sys::PicamError_InvalidDemoSerialNumber);
            }
            let exists = st.cameras.iter().any(|c| {
                c.id.model == model && chars_to_string(&c.id.serial_number) == serial
            });
            if exists {
                return Err(sys::PicamError_DemoAlreadyConnected);
            }
            *id = st.connect(model, &serial).id;
            Ok(())
        })
    }

    fn disconnect_demo_camera(&self, id: &PicamCameraID) -> PicamError {
        self.call("Picam_DisconnectDemoCamera", |st| {
            st.require_init()?;
            let index = st
                .cameras
                .iter()
                .position(|c| c.demo && c.matches(id))
                .ok_or(sys::PicamError_InvalidCameraID)?;
            if st.cameras[index].handle.is_some() {
                return Err(sys::PicamError_InvalidOperation);
            }
            st.cameras.remove(index);
            Ok(())
        })
    }

    fn is_demo_camera(&self, id: &PicamCameraID, demo: &mut pibln) -> PicamError {
        self.call("Picam_IsDemoCamera", |st| {
            *demo = pibln::from(st.camera_by_id(id)?.demo);
            Ok(())
        })
    }

    unsafe fn destroy_parameters(&self, parameter_array: *const PicamParameter) -> PicamError {
        self.call("Picam_DestroyParameters", |st| {
            st.destroy("Picam_DestroyParameters", parameter_array.cast())
        })
    }

    fn get_parameters(
        &self,
        camera: PicamHandle,
        parameter_array: &mut *const PicamParameter,
        parameter_count: &mut piint,
    ) -> PicamError {
        self.call("Picam_GetParameters", |st| {
            let params: Vec<PicamParameter> = st.camera(camera)?.parameters.keys().copied().collect();
            let (ptr, count) = st.alloc_slice(params, Allocation::Parameters);
            *parameter_array = ptr;
            *parameter_count = count;
            Ok(())
        })
    }

    fn does_parameter_exist(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        exists: &mut pibln,
    ) -> PicamError {
        self.call("Picam_DoesParameterExist", |st| {
            *exists = pibln::from(st.camera(camera)?.parameters.contains_key(&parameter));
            Ok(())
        })
    }

    fn is_parameter_relevant(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        relevant: &mut pibln,
    ) -> PicamError {
        self.call("Picam_IsParameterRelevant", |st| {
            st.camera(camera)?.parameter(parameter)?;
            *relevant = 1;
            Ok(())
        })
    }

    fn get_parameter_value_type(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        type_: &mut PicamValueType,
    ) -> PicamError {
        self.call("Picam_GetParameterValueType", |st| {
            *type_ = st.camera(camera)?.parameter(parameter)?.value_type();
            Ok(())
        })
    }

    fn get_parameter_enumerated_type(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        type_: &mut PicamEnumeratedType,
    ) -> PicamError {
        self.call("Picam_GetParameterEnumeratedType", |st| {
            let param = st.camera(camera)?.parameter(parameter)?;
            if !matches!(param.value, ParameterValue::Enumeration(_)) {
                return Err(sys::PicamError_ParameterHasInvalidValueType);
            }
            *type_ = param.enumerated_type;
            Ok(())
        })
    }

    fn get_parameter_value_access(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        access: &mut PicamValueAccess,
    ) -> PicamError {
        self.call("Picam_GetParameterValueAccess", |st| {
            *access = st.camera(camera)?.parameter(parameter)?.access;
            Ok(())
        })
    }

    fn get_parameter_constraint_type(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        type_: &mut PicamConstraintType,
    ) -> PicamError {
        self.call("Picam_GetParameterConstraintType", |st| {
            st.camera(camera)?.parameter(parameter)?;
            *type_ = sys::PICAM_PARAMETER_CONSTRAINT_TYPE(parameter);
            Ok(())
        })
    }

    fn get_parameter_integer_value(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        value: &mut piint,
    ) -> PicamError {
        self.call("Picam_GetParameterIntegerValue", |st| {
            let cam = st.camera(camera)?;
            if parameter == sys::PicamParameter_ReadoutStride
                || parameter == sys::PicamParameter_FrameSize
            {
                cam.parameter(parameter)?;
                *value = cam.readout_stride();
                return Ok(());
            }
            *value = match cam.parameter(parameter)?.value {
                ParameterValue::Integer(v) | ParameterValue::Enumeration(v) => v,
                ParameterValue::Boolean(b) => piint::from(b),
                _ => return Err(sys::PicamError_ParameterHasInvalidValueType),
            };
            Ok(())
        })
    }

    fn set_parameter_integer_value(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        value: piint,
    ) -> PicamError {
        self.call("Picam_SetParameterIntegerValue", |st| {
            st.camera(camera)?.update(parameter, |current| {
                let next = match current {
                    ParameterValue::Integer(_) => ParameterValue::Integer(value),
                    ParameterValue::Enumeration(_) => ParameterValue::Enumeration(value),
                    ParameterValue::Boolean(_) => ParameterValue::Boolean(value != 0),
                    _ => return Err(sys::PicamError_ParameterHasInvalidValueType),
                };
                *current = next;
                Ok(())
            })
        })
    }

    fn get_parameter_large_integer_value(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        value: &mut pi64s,
    ) -> PicamError {
        self.call("Picam_GetParameterLargeIntegerValue", |st| {
            match st.camera(camera)?.parameter(parameter)?.value {
                ParameterValue::LargeInteger(v) => {
                    *value = v;
                    Ok(())
                }
                _ => Err(sys::PicamError_ParameterHasInvalidValueType),
            }
        })
    }

    fn set_parameter_large_integer_value(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        value: pi64s,
    ) -> PicamError {
        self.call("Picam_SetParameterLargeIntegerValue", |st| {
            st.camera(camera)?.update(parameter, |current| match current {
                ParameterValue::LargeInteger(v) => {
                    *v = value;
                    Ok(())
                }
                _ => Err(sys::PicamError_ParameterHasInvalidValueType),
            })
        })
    }

    fn get_parameter_floating_point_value(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        value: &mut f64,
    ) -> PicamError {
        self.call("Picam_GetParameterFloatingPointValue", |st| {
            match st.camera(camera)?.parameter(parameter)?.value {
                ParameterValue::FloatingPoint(v) => {
                    *value = v;
                    Ok(())
                }
                _ => Err(sys::PicamError_ParameterHasInvalidValueType),
            }
        })
    }

    fn set_parameter_floating_point_value(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        value: f64,
    ) -> PicamError {
        self.call("Picam_SetParameterFloatingPointValue", |st| {
            st.camera(camera)?.update(parameter, |current| match current {
                ParameterValue::FloatingPoint(v) => {
                    *v = value;
                    Ok(())
                }
                _ => Err(sys::PicamError_ParameterHasInvalidValueType),
            })
        })
    }

    fn read_parameter_floating_point_value(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        value: &mut f64,
    ) -> PicamError {
        self.call("Picam_ReadParameterFloatingPointValue", |st| {
            match st.camera(camera)?.parameter(parameter)?.value {
                ParameterValue::FloatingPoint(v) => {
                    *value = v;
                    Ok(())
                }
                _ => Err(sys::PicamError_ParameterHasInvalidValueType),
            }
        })
    }

    unsafe fn destroy_rois(&self, rois: *const PicamRois) -> PicamError {
        self.call("Picam_DestroyRois", |st| st.destroy("Picam_DestroyRois", rois.cast()))
    }

    fn get_parameter_rois_value(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        value: &mut *const PicamRois,
    ) -> PicamError {
        self.call("Picam_GetParameterRoisValue", |st| {
            let raw: Box<[sys::PicamRoi]> = match &st.camera(camera)?.parameter(parameter)?.value {
                ParameterValue::Rois(rois) => rois.iter().map(|&r| r.into()).collect(),
                _ => return Err(sys::PicamError_ParameterHasInvalidValueType),
            };
            let rois = Box::new(PicamRois {
                roi_array: raw.as_ptr().cast_mut(),
                roi_count: piint::try_from(raw.len()).unwrap_or(piint::MAX),
            });
            let ptr: *const PicamRois = &*rois;
            st.allocations.insert(ptr as usize, Allocation::Rois(rois, raw));
            *value = ptr;
            Ok(())
        })
    }

    unsafe fn set_parameter_rois_value(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        value: &PicamRois,
    ) -> PicamError {
        if value.roi_count < 0 {
            return self.call("Picam_SetParameterRoisValue", |_| Err(sys::PicamError_InvalidCount));
        }
        if value.roi_count > 0 && value.roi_array.is_null() {
            return self.call("Picam_SetParameterRoisValue", |_| {
                Err(sys::PicamError_UnexpectedNullPointer)
            });
        }
        let rois: Vec<Roi> = raw_slice(value.roi_array, value.roi_count)
            .iter()
            .map(|&r| Roi::from(r))
            .collect();
        self.call("Picam_SetParameterRoisValue", |st| {
            st.camera(camera)?.update(parameter, |current| match current {
                ParameterValue::Rois(v) => {
                    *v = rois;
                    Ok(())
                }
                _ => Err(sys::PicamError_ParameterHasInvalidValueType),
            })
        })
    }

    unsafe fn destroy_pulses(&self, pulse_array: *const PicamPulse) -> PicamError {
        self.call("Picam_DestroyPulses", |st| {
            st.destroy("Picam_DestroyPulses", pulse_array.cast())
        })
    }

    fn get_parameter_pulse_value(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        value: &mut *const PicamPulse,
    ) -> PicamError {
        self.call("Picam_GetParameterPulseValue", |st| {
            let pulse = match st.camera(camera)?.parameter(parameter)?.value {
                ParameterValue::Pulse(p) => Box::new(PicamPulse::from(p)),
                _ => return Err(sys::PicamError_ParameterHasInvalidValueType),
            };
            let ptr: *const PicamPulse = &*pulse;
            st.allocations.insert(ptr as usize, Allocation::Pulse(pulse));
            *value = ptr;
            Ok(())
        })
    }

    fn set_parameter_pulse_value(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        value: &PicamPulse,
    ) -> PicamError {
        let pulse = Pulse::from(*value);
        self.call("Picam_SetParameterPulseValue", |st| {
            st.camera(camera)?.update(parameter, |current| match current {
                ParameterValue::Pulse(p) => {
                    *p = pulse;
                    Ok(())
                }
                _ => Err(sys::PicamError_ParameterHasInvalidValueType),
            })
        })
    }

    unsafe fn destroy_modulations(&self, modulations: *const PicamModulations) -> PicamError {
        self.call("Picam_DestroyModulations", |st| {
            st.destroy("Picam_DestroyModulations", modulations.cast())
        })
    }

    fn get_parameter_modulations_value(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        value: &mut *const PicamModulations,
    ) -> PicamError {
        self.call("Picam_GetParameterModulationsValue", |st| {
            let raw: Box<[sys::PicamModulation]> =
                match &st.camera(camera)?.parameter(parameter)?.value {
                    ParameterValue::Modulations(m) => m.iter().map(|&m| m.into()).collect(),
                    _ => return Err(sys::PicamError_ParameterHasInvalidValueType),
                };
            let modulations = Box::new(PicamModulations {
                modulation_array: raw.as_ptr().cast_mut(),
                modulation_count: piint::try_from(raw.len()).unwrap_or(piint::MAX),
            });
            let ptr: *const PicamModulations = &*modulations;
            st.allocations
                .insert(ptr as usize, Allocation::Modulations(modulations, raw));
            *value = ptr;
            Ok(())
        })
    }

    unsafe fn set_parameter_modulations_value(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        value: &PicamModulations,
    ) -> PicamError {
        if value.modulation_count < 0 {
            return self.call("Picam_SetParameterModulationsValue", |_| {
                Err(sys::PicamError_InvalidCount)
            });
        }
        if value.modulation_count > 0 && value.modulation_array.is_null() {
            return self.call("Picam_SetParameterModulationsValue", |_| {
                Err(sys::PicamError_UnexpectedNullPointer)
            });
        }
        let modulations: Vec<Modulation> = raw_slice(value.modulation_array, value.modulation_count)
            .iter()
            .map(|&m| Modulation::from(m))
            .collect();
        self.call("Picam_SetParameterModulationsValue", |st| {
            st.camera(camera)?.update(parameter, |current| match current {
                ParameterValue::Modulations(v) => {
                    *v = modulations;
                    Ok(())
                }
                _ => Err(sys::PicamError_ParameterHasInvalidValueType),
            })
        })
    }

    unsafe fn destroy_range_constraints(
        &self,
        constraint_array: *const PicamRangeConstraint,
    ) -> PicamError {
        self.call("Picam_DestroyRangeConstraints", |st| {
            st.destroy("Picam_DestroyRangeConstraints", constraint_array.cast())
        })
    }

    fn get_parameter_range_constraint(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        category: PicamConstraintCategory,
        constraint: &mut *const PicamRangeConstraint,
    ) -> PicamError {
        self.call("Picam_GetParameterRangeConstraint", |st| {
            valid_category(category)?;
            let (minimum, maximum, increment) = st
                .camera(camera)?
                .parameter(parameter)?
                .range
                .ok_or(sys::PicamError_ParameterHasInvalidConstraintType)?;
            let range = Box::new(PicamRangeConstraint {
                scope: sys::PicamConstraintScope_Independent,
                severity: sys::PicamConstraintSeverity_Error,
                empty_set: 0,
                minimum,
                maximum,
                increment,
                excluded_values_array: ptr::null(),
                excluded_values_count: 0,
                outlying_values_array: ptr::null(),
                outlying_values_count: 0,
            });
            let ptr: *const PicamRangeConstraint = &*range;
            st.allocations.insert(ptr as usize, Allocation::Range(range));
            *constraint = ptr;
            Ok(())
        })
    }

    unsafe fn destroy_collection_constraints(
        &self,
        constraint_array: *const PicamCollectionConstraint,
    ) -> PicamError {
        self.call("Picam_DestroyCollectionConstraints", |st| {
            st.destroy("Picam_DestroyCollectionConstraints", constraint_array.cast())
        })
    }

    fn get_parameter_collection_constraint(
        &self,
        camera: PicamHandle,
        parameter: PicamParameter,
        category: PicamConstraintCategory,
        constraint: &mut *const PicamCollectionConstraint,
    ) -> PicamError {
        self.call("Picam_GetParameterCollectionConstraint", |st| {
            valid_category(category)?;
            let values: Box<[f64]> = st
                .camera(camera)?
                .parameter(parameter)?
                .collection
                .clone()
                .ok_or(sys::PicamError_ParameterHasInvalidConstraintType)?
                .into_boxed_slice();
            let collection = Box::new(PicamCollectionConstraint {
                scope: sys::PicamConstraintScope_Independent,
                severity: sys::PicamConstraintSeverity_Error,
                values_array: if values.is_empty() {
                    ptr::null()
                } else {
                    values.as_ptr()
                },
                values_count: piint::try_from(values.len()).unwrap_or(piint::MAX),
            });
            let ptr: *const PicamCollectionConstraint = &*collection;
            st.allocations
                .insert(ptr as usize, Allocation::Collection(collection, values));
            *constraint = ptr;
            Ok(())
        })
    }

    fn are_parameters_committed(&self, camera: PicamHandle, committed: &mut pibln) -> PicamError {
        self.call("Picam_AreParametersCommitted", |st| {
            *committed = pibln::from(st.camera(camera)?.committed);
            Ok(())
        })
    }

    fn commit_parameters(
        &self,
        camera: PicamHandle,
        failed_parameter_array: &mut *const PicamParameter,
        failed_parameter_count: &mut piint,
    ) -> PicamError {
        self.call("Picam_CommitParameters", |st| {
            let rejected = {
                let cam = st.camera(camera)?;
                if cam.running {
                    return Err(sys::PicamError_AcquisitionInProgress);
                }
                let rejected = cam.validate();
                cam.committed = rejected.is_empty();
                rejected
            };
            if rejected.is_empty() {
                *failed_parameter_array = ptr::null();
                *failed_parameter_count = 0;
                return Ok(());
            }
            let (ptr, count) = st.alloc_slice(rejected, Allocation::Parameters);
            *failed_parameter_array = ptr;
            *failed_parameter_count = count;
            Err(sys::PicamError_InvalidParameterValues)
        })
    }

    fn acquire(
        &self,
        camera: PicamHandle,
        readout_count: pi64s,
        readout_time_out: piint,
        available: &mut PicamAvailableData,
        errors: &mut PicamAcquisitionErrorsMask,
    ) -> PicamError {
        self.call("Picam_Acquire", |st| {
            let cam = st.camera(camera)?;
            if cam.running {
                return Err(sys::PicamError_AcquisitionInProgress);
            }
            if !cam.committed {
                return Err(sys::PicamError_ParametersNotCommitted);
            }
            if readout_count <= 0 {
                return Err(sys::PicamError_InvalidReadoutCount);
            }
            if readout_time_out < -1 {
                return Err(sys::PicamError_InvalidReadoutTimeOut);
            }
            *available = cam.fill_buffer(readout_count)?;
            *errors = sys::PicamAcquisitionErrorsMask_None;
            Ok(())
        })
    }

    fn start_acquisition(&self, camera: PicamHandle) -> PicamError {
        self.call("Picam_StartAcquisition", |st| {
            let cam = st.camera(camera)?;
            if cam.running {
                return Err(sys::PicamError_AcquisitionInProgress);
            }
            if !cam.committed {
                return Err(sys::PicamError_ParametersNotCommitted);
            }
            // A readout count of zero runs until stopped.
            cam.remaining = match cam.readout_count_setting() {
                0 => i64::MAX,
                n => n,
            };
            cam.running = true;
            Ok(())
        })
    }

    fn stop_acquisition(&self, camera: PicamHandle) -> PicamError {
        self.call("Picam_StopAcquisition", |st| {
            st.camera(camera)?.running = false;
            Ok(())
        })
    }

    fn is_acquisition_running(&self, camera: PicamHandle, running: &mut pibln) -> PicamError {
        self.call("Picam_IsAcquisitionRunning", |st| {
            *running = pibln::from(st.camera(camera)?.running);
            Ok(())
        })
    }

    fn wait_for_acquisition_update(
        &self,
        camera: PicamHandle,
        readout_time_out: piint,
        available: &mut PicamAvailableData,
        status: &mut PicamAcquisitionStatus,
    ) -> PicamError {
        self.call("Picam_WaitForAcquisitionUpdate", |st| {
            let cam = st.camera(camera)?;
            if readout_time_out < -1 {
                return Err(sys::PicamError_InvalidReadoutTimeOut);
            }
            if !cam.running {
                return Err(sys::PicamError_AcquisitionNotInProgress);
            }
            *available = cam.fill_buffer(1)?;
            cam.remaining -= 1;
            if cam.remaining <= 0 {
                cam.running = false;
            }
            *status = PicamAcquisitionStatus {
                running: pibln::from(cam.running),
                errors: sys::PicamAcquisitionErrorsMask_None,
                readout_rate: READOUT_RATE,
            };
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn initialized() -> MockApi {
        let api = MockApi::with_demo_camera();
        assert_eq!(api.initialize_library(), sys::PicamError_None);
        api
    }

    #[test]
    fn test_calls_require_initialization() {
        let api = MockApi::with_demo_camera();
        let mut handle: PicamHandle = ptr::null_mut();
        assert_eq!(
            api.open_first_camera(&mut handle),
            sys::PicamError_LibraryNotInitialized
        );
        assert_eq!(api.call_count("Picam_OpenFirstCamera"), 1);
    }

    #[test]
    fn test_injected_error_is_one_shot() {
        let api = initialized();
        api.inject_error("Picam_OpenFirstCamera", sys::PicamError_DeviceCommunicationFailed);
        let mut handle: PicamHandle = ptr::null_mut();
        assert_eq!(
            api.open_first_camera(&mut handle),
            sys::PicamError_DeviceCommunicationFailed
        );
        assert!(handle.is_null());
        assert_eq!(api.open_first_camera(&mut handle), sys::PicamError_None);
        assert!(!handle.is_null());
    }

    #[test]
    fn test_stride_follows_rois() {
        let api = initialized();
        let mut handle: PicamHandle = ptr::null_mut();
        assert_eq!(api.open_first_camera(&mut handle), sys::PicamError_None);

        let mut stride = 0;
        api.get_parameter_integer_value(handle, sys::PicamParameter_ReadoutStride, &mut stride);
        assert_eq!(stride, 1340 * 100 * 2);

        let mut roi = [sys::PicamRoi::from(Roi {
            x: 0,
            width: 10,
            x_binning: 1,
            y: 0,
            height: 4,
            y_binning: 2,
        })];
        let rois = PicamRois {
            roi_array: roi.as_mut_ptr(),
            roi_count: 1,
        };
        let code = unsafe { api.set_parameter_rois_value(handle, sys::PicamParameter_Rois, &rois) };
        assert_eq!(code, sys::PicamError_None);
        api.get_parameter_integer_value(handle, sys::PicamParameter_ReadoutStride, &mut stride);
        assert_eq!(stride, 10 * 2 * 2);
    }

    #[test]
    fn test_destroy_unknown_pointer() {
        let api = initialized();
        let bogus = 0xdead_usize as *const pichar;
        assert_eq!(
            unsafe { api.destroy_string(bogus) },
            sys::PicamError_InvalidPointer
        );
        assert_eq!(unsafe { api.destroy_string(ptr::null()) }, sys::PicamError_None);
        assert_eq!(api.destroy_count("Picam_DestroyString"), 2);
    }

    #[test]
    fn test_read_only_parameter() {
        let api = initialized();
        let mut handle: PicamHandle = ptr::null_mut();
        api.open_first_camera(&mut handle);
        assert_eq!(
            api.set_parameter_integer_value(handle, sys::PicamParameter_PixelBitDepth, 8),
            sys::PicamError_ParameterValueIsReadOnly
        );
    }
}

//! Owned Rust values for PICam enumerations and structures.
//!
//! Everything here is a value-copied snapshot: nothing holds a pointer into
//! SDK-owned memory, so these types can outlive the calls that produced them.

use std::ffi::c_char;
use std::fmt;

use bitflags::bitflags;
use picam_sys as sys;
use sys::{piint, PicamParameter};

use crate::enums;

// =============================================================================
// Open-ended enumerations
// =============================================================================

/// Camera parameter key (`PicamParameter`).
///
/// The set of parameters grows with SDK releases, so this is a newtype over the
/// native encoding rather than a closed enum. Any value returned by
/// [`Camera::parameters`](crate::Camera::parameters) is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Parameter(pub PicamParameter);

impl Parameter {
    pub const EXPOSURE_TIME: Self = Self(sys::PicamParameter_ExposureTime);
    pub const SHUTTER_TIMING_MODE: Self = Self(sys::PicamParameter_ShutterTimingMode);
    pub const REPETITIVE_GATE: Self = Self(sys::PicamParameter_RepetitiveGate);
    pub const CUSTOM_MODULATION_SEQUENCE: Self = Self(sys::PicamParameter_CustomModulationSequence);
    pub const ADC_SPEED: Self = Self(sys::PicamParameter_AdcSpeed);
    pub const ADC_ANALOG_GAIN: Self = Self(sys::PicamParameter_AdcAnalogGain);
    pub const ADC_QUALITY: Self = Self(sys::PicamParameter_AdcQuality);
    pub const TRIGGER_RESPONSE: Self = Self(sys::PicamParameter_TriggerResponse);
    pub const ACTIVE_WIDTH: Self = Self(sys::PicamParameter_ActiveWidth);
    pub const ACTIVE_HEIGHT: Self = Self(sys::PicamParameter_ActiveHeight);
    pub const SENSOR_TEMPERATURE_SET_POINT: Self = Self(sys::PicamParameter_SensorTemperatureSetPoint);
    pub const SENSOR_TEMPERATURE_READING: Self = Self(sys::PicamParameter_SensorTemperatureReading);
    pub const SENSOR_TEMPERATURE_STATUS: Self = Self(sys::PicamParameter_SensorTemperatureStatus);
    pub const DISABLE_COOLING_FAN: Self = Self(sys::PicamParameter_DisableCoolingFan);
    pub const ROIS: Self = Self(sys::PicamParameter_Rois);
    pub const READOUT_COUNT: Self = Self(sys::PicamParameter_ReadoutCount);
    pub const PIXEL_FORMAT: Self = Self(sys::PicamParameter_PixelFormat);
    pub const READOUT_STRIDE: Self = Self(sys::PicamParameter_ReadoutStride);
    pub const FRAME_SIZE: Self = Self(sys::PicamParameter_FrameSize);
    pub const PIXEL_BIT_DEPTH: Self = Self(sys::PicamParameter_PixelBitDepth);

    /// Raw native value.
    pub fn raw(self) -> PicamParameter {
        self.0
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match enums::name_of("PicamParameter_", self.0) {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "Parameter({:#x})", self.0),
        }
    }
}

/// Enumeration family used when resolving values to strings
/// (`PicamEnumeratedType`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumeratedType(pub piint);

impl EnumeratedType {
    pub const ERROR: Self = Self(sys::PicamEnumeratedType_Error);
    pub const ENUMERATED_TYPE: Self = Self(sys::PicamEnumeratedType_EnumeratedType);
    pub const MODEL: Self = Self(sys::PicamEnumeratedType_Model);
    pub const COMPUTER_INTERFACE: Self = Self(sys::PicamEnumeratedType_ComputerInterface);
    pub const VALUE_TYPE: Self = Self(sys::PicamEnumeratedType_ValueType);
    pub const CONSTRAINT_TYPE: Self = Self(sys::PicamEnumeratedType_ConstraintType);
    pub const PARAMETER: Self = Self(sys::PicamEnumeratedType_Parameter);
    pub const ADC_ANALOG_GAIN: Self = Self(sys::PicamEnumeratedType_AdcAnalogGain);
    pub const ADC_QUALITY: Self = Self(sys::PicamEnumeratedType_AdcQuality);
    pub const PIXEL_FORMAT: Self = Self(sys::PicamEnumeratedType_PixelFormat);
    pub const SENSOR_TEMPERATURE_STATUS: Self = Self(sys::PicamEnumeratedType_SensorTemperatureStatus);
    pub const SHUTTER_TIMING_MODE: Self = Self(sys::PicamEnumeratedType_ShutterTimingMode);
    pub const TRIGGER_RESPONSE: Self = Self(sys::PicamEnumeratedType_TriggerResponse);
    pub const VALUE_ACCESS: Self = Self(sys::PicamEnumeratedType_ValueAccess);
    pub const CONSTRAINT_SCOPE: Self = Self(sys::PicamEnumeratedType_ConstraintScope);
    pub const CONSTRAINT_SEVERITY: Self = Self(sys::PicamEnumeratedType_ConstraintSeverity);
    pub const CONSTRAINT_CATEGORY: Self = Self(sys::PicamEnumeratedType_ConstraintCategory);
    pub const ACQUISITION_ERRORS_MASK: Self = Self(sys::PicamEnumeratedType_AcquisitionErrorsMask);
}

/// Camera model (`PicamModel`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Model(pub piint);

impl Model {
    pub const PIXIS_100F: Self = Self(sys::PicamModel_Pixis100F);
    pub const PIXIS_100B: Self = Self(sys::PicamModel_Pixis100B);
    pub const PIXIS_400B: Self = Self(sys::PicamModel_Pixis400B);
    pub const PIXIS_1024B: Self = Self(sys::PicamModel_Pixis1024B);
    pub const PIXIS_2048B: Self = Self(sys::PicamModel_Pixis2048B);
    pub const PROEM_512B: Self = Self(sys::PicamModel_ProEM512B);
    pub const PROEM_HS_1024B: Self = Self(sys::PicamModel_ProEMHS1024B);
    pub const PIMAX4_1024I: Self = Self(sys::PicamModel_PIMax41024I);
}

// =============================================================================
// Closed enumerations
// =============================================================================

/// Storage type of a parameter value (`PicamValueType`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ValueType {
    Integer = sys::PicamValueType_Integer,
    Boolean = sys::PicamValueType_Boolean,
    Enumeration = sys::PicamValueType_Enumeration,
    LargeInteger = sys::PicamValueType_LargeInteger,
    FloatingPoint = sys::PicamValueType_FloatingPoint,
    Rois = sys::PicamValueType_Rois,
    Pulse = sys::PicamValueType_Pulse,
    Modulations = sys::PicamValueType_Modulations,
}

impl ValueType {
    /// Convert from raw PICam value type.
    pub fn from_raw(raw: piint) -> Option<Self> {
        match raw {
            sys::PicamValueType_Integer => Some(Self::Integer),
            sys::PicamValueType_Boolean => Some(Self::Boolean),
            sys::PicamValueType_Enumeration => Some(Self::Enumeration),
            sys::PicamValueType_LargeInteger => Some(Self::LargeInteger),
            sys::PicamValueType_FloatingPoint => Some(Self::FloatingPoint),
            sys::PicamValueType_Rois => Some(Self::Rois),
            sys::PicamValueType_Pulse => Some(Self::Pulse),
            sys::PicamValueType_Modulations => Some(Self::Modulations),
            _ => None,
        }
    }

    /// Integer, boolean and enumeration values share the 32-bit accessors.
    pub fn is_integer_encoded(self) -> bool {
        matches!(self, Self::Integer | Self::Boolean | Self::Enumeration)
    }
}

/// Kind of constraint attached to a parameter (`PicamConstraintType`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ConstraintType {
    None = sys::PicamConstraintType_None,
    Range = sys::PicamConstraintType_Range,
    Collection = sys::PicamConstraintType_Collection,
    Rois = sys::PicamConstraintType_Rois,
    Pulse = sys::PicamConstraintType_Pulse,
    Modulations = sys::PicamConstraintType_Modulations,
}

impl ConstraintType {
    /// Convert from raw PICam constraint type.
    pub fn from_raw(raw: piint) -> Option<Self> {
        match raw {
            sys::PicamConstraintType_None => Some(Self::None),
            sys::PicamConstraintType_Range => Some(Self::Range),
            sys::PicamConstraintType_Collection => Some(Self::Collection),
            sys::PicamConstraintType_Rois => Some(Self::Rois),
            sys::PicamConstraintType_Pulse => Some(Self::Pulse),
            sys::PicamConstraintType_Modulations => Some(Self::Modulations),
            _ => None,
        }
    }
}

/// Constraint category (`PicamConstraintCategory`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum ConstraintCategory {
    /// Everything the hardware can do.
    #[default]
    Capable = sys::PicamConstraintCategory_Capable,
    /// What the current settings of other parameters allow.
    Required = sys::PicamConstraintCategory_Required,
    Recommended = sys::PicamConstraintCategory_Recommended,
}

impl ConstraintCategory {
    /// Raw native value.
    pub fn raw(self) -> piint {
        self as piint
    }
}

/// Read/write access of a parameter value (`PicamValueAccess`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ValueAccess {
    ReadOnly = sys::PicamValueAccess_ReadOnly,
    ReadWriteTrivial = sys::PicamValueAccess_ReadWriteTrivial,
    ReadWrite = sys::PicamValueAccess_ReadWrite,
}

impl ValueAccess {
    /// Convert from raw PICam value access.
    pub fn from_raw(raw: piint) -> Option<Self> {
        match raw {
            sys::PicamValueAccess_ReadOnly => Some(Self::ReadOnly),
            sys::PicamValueAccess_ReadWriteTrivial => Some(Self::ReadWriteTrivial),
            sys::PicamValueAccess_ReadWrite => Some(Self::ReadWrite),
            _ => None,
        }
    }

    /// Whether values can be written.
    pub fn is_writable(self) -> bool {
        !matches!(self, Self::ReadOnly)
    }
}

bitflags! {
    /// Errors reported alongside acquired data (`PicamAcquisitionErrorsMask`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct AcquisitionErrors: i32 {
        const DATA_LOST = sys::PicamAcquisitionErrorsMask_DataLost;
        const CONNECTION_LOST = sys::PicamAcquisitionErrorsMask_ConnectionLost;
        const DATA_NOT_ARRIVING = sys::PicamAcquisitionErrorsMask_DataNotArriving;
        const SHUTTER_OVERHEATED = sys::PicamAcquisitionErrorsMask_ShutterOverheated;
        const CAMERA_FAULTED = sys::PicamAcquisitionErrorsMask_CameraFaulted;
    }
}

// =============================================================================
// Structures
// =============================================================================

/// Rectangular sensor region with binning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Roi {
    pub x: i32,
    pub width: i32,
    pub x_binning: i32,
    pub y: i32,
    pub height: i32,
    pub y_binning: i32,
}

impl Roi {
    /// Unbinned region covering `width` x `height` pixels from the origin.
    pub fn full(width: i32, height: i32) -> Self {
        Self {
            x: 0,
            width,
            x_binning: 1,
            y: 0,
            height,
            y_binning: 1,
        }
    }

    /// Number of pixels after binning.
    pub fn binned_pixels(&self) -> i64 {
        if self.x_binning <= 0 || self.y_binning <= 0 {
            return 0;
        }
        i64::from(self.width / self.x_binning) * i64::from(self.height / self.y_binning)
    }
}

impl From<sys::PicamRoi> for Roi {
    fn from(raw: sys::PicamRoi) -> Self {
        Self {
            x: raw.x,
            width: raw.width,
            x_binning: raw.x_binning,
            y: raw.y,
            height: raw.height,
            y_binning: raw.y_binning,
        }
    }
}

impl From<Roi> for sys::PicamRoi {
    fn from(roi: Roi) -> Self {
        Self {
            x: roi.x,
            width: roi.width,
            x_binning: roi.x_binning,
            y: roi.y,
            height: roi.height,
            y_binning: roi.y_binning,
        }
    }
}

/// Gate pulse timing, in nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pulse {
    pub delay: f64,
    pub width: f64,
}

impl From<sys::PicamPulse> for Pulse {
    fn from(raw: sys::PicamPulse) -> Self {
        Self {
            delay: raw.delay,
            width: raw.width,
        }
    }
}

impl From<Pulse> for sys::PicamPulse {
    fn from(pulse: Pulse) -> Self {
        Self {
            delay: pulse.delay,
            width: pulse.width,
        }
    }
}

/// One step of an intensifier modulation sequence.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Modulation {
    pub duration: f64,
    pub frequency: f64,
    pub phase: f64,
    pub output_signal_frequency: f64,
}

impl From<sys::PicamModulation> for Modulation {
    fn from(raw: sys::PicamModulation) -> Self {
        Self {
            duration: raw.duration,
            frequency: raw.frequency,
            phase: raw.phase,
            output_signal_frequency: raw.output_signal_frequency,
        }
    }
}

impl From<Modulation> for sys::PicamModulation {
    fn from(m: Modulation) -> Self {
        Self {
            duration: m.duration,
            frequency: m.frequency,
            phase: m.phase,
            output_signal_frequency: m.output_signal_frequency,
        }
    }
}

/// Snapshot of a range constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeConstraint {
    pub minimum: f64,
    pub maximum: f64,
    pub increment: f64,
    /// `PicamConstraintScope`
    pub scope: i32,
    /// `PicamConstraintSeverity`
    pub severity: i32,
    /// No value satisfies the constraint.
    pub empty_set: bool,
    /// Values inside the range that are not allowed.
    pub excluded_values: Vec<f64>,
    /// Values outside the range that are allowed.
    pub outlying_values: Vec<f64>,
}

impl RangeConstraint {
    /// Whether `value` lies in the range (ignoring the increment grid).
    pub fn contains(&self, value: f64) -> bool {
        if self.empty_set || self.excluded_values.contains(&value) {
            return false;
        }
        (value >= self.minimum && value <= self.maximum) || self.outlying_values.contains(&value)
    }
}

/// One entry of a camera's firmware listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirmwareDetail {
    pub name: String,
    pub detail: String,
}

/// Identity of a physical or demo camera (`PicamCameraID`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CameraId {
    pub model: Model,
    /// `PicamComputerInterface`
    pub computer_interface: i32,
    pub sensor_name: String,
    pub serial_number: String,
}

impl CameraId {
    /// Copy out of the native structure.
    pub fn from_raw(raw: &sys::PicamCameraID) -> Self {
        Self {
            model: Model(raw.model),
            computer_interface: raw.computer_interface,
            sensor_name: chars_to_string(&raw.sensor_name),
            serial_number: chars_to_string(&raw.serial_number),
        }
    }

    /// Build the native structure. Strings longer than the fixed fields are truncated.
    pub fn to_raw(&self) -> sys::PicamCameraID {
        let mut raw = sys::PicamCameraID {
            model: self.model.0,
            computer_interface: self.computer_interface,
            ..Default::default()
        };
        string_to_chars(&self.sensor_name, &mut raw.sensor_name);
        string_to_chars(&self.serial_number, &mut raw.serial_number);
        raw
    }
}

impl fmt::Display for CameraId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let model = enums::name_of("PicamModel_", self.model.0).unwrap_or("PicamModel_Unknown");
        write!(
            f,
            "{} {} (SN:{})",
            model.trim_start_matches("PicamModel_"),
            self.sensor_name,
            self.serial_number
        )
    }
}

/// SDK version (`Picam_GetVersion`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: i32,
    pub minor: i32,
    pub distribution: i32,
    /// Release date as `yyyymmdd`.
    pub released: i32,
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{} ({})",
            self.major, self.minor, self.distribution, self.released
        )
    }
}

/// Status reported by `Picam_WaitForAcquisitionUpdate`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcquisitionStatus {
    pub running: bool,
    pub errors: AcquisitionErrors,
    /// Readouts per second.
    pub readout_rate: f64,
}

impl From<sys::PicamAcquisitionStatus> for AcquisitionStatus {
    fn from(raw: sys::PicamAcquisitionStatus) -> Self {
        Self {
            running: raw.running != 0,
            errors: AcquisitionErrors::from_bits_retain(raw.errors),
            readout_rate: raw.readout_rate,
        }
    }
}

// =============================================================================
// Parameter values
// =============================================================================

/// A parameter value of any PICam value type.
///
/// [`Camera::get`](crate::Camera::get) returns the variant matching the value
/// type the camera reports; [`Camera::set`](crate::Camera::set) accepts any
/// variant compatible with it.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValue {
    Integer(i32),
    Boolean(bool),
    Enumeration(i32),
    LargeInteger(i64),
    FloatingPoint(f64),
    Rois(Vec<Roi>),
    Pulse(Pulse),
    Modulations(Vec<Modulation>),
}

impl ParameterValue {
    /// Value type this variant is stored as.
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Integer(_) => ValueType::Integer,
            Self::Boolean(_) => ValueType::Boolean,
            Self::Enumeration(_) => ValueType::Enumeration,
            Self::LargeInteger(_) => ValueType::LargeInteger,
            Self::FloatingPoint(_) => ValueType::FloatingPoint,
            Self::Rois(_) => ValueType::Rois,
            Self::Pulse(_) => ValueType::Pulse,
            Self::Modulations(_) => ValueType::Modulations,
        }
    }

    /// 32-bit encoding for integer, boolean and enumeration values.
    pub fn as_i32(&self) -> Option<i32> {
        match *self {
            Self::Integer(v) | Self::Enumeration(v) => Some(v),
            Self::Boolean(b) => Some(i32::from(b)),
            _ => None,
        }
    }

    /// 64-bit encoding for any integer-like value.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::LargeInteger(v) => Some(v),
            _ => self.as_i32().map(i64::from),
        }
    }

    /// Floating point view of any numeric value.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::FloatingPoint(v) => Some(v),
            // Large integers beyond 2^53 lose precision here, same as the SDK's piflt.
            Self::LargeInteger(v) => Some(v as f64),
            _ => self.as_i32().map(f64::from),
        }
    }
}

impl From<i32> for ParameterValue {
    fn from(v: i32) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for ParameterValue {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i64> for ParameterValue {
    fn from(v: i64) -> Self {
        Self::LargeInteger(v)
    }
}

impl From<f64> for ParameterValue {
    fn from(v: f64) -> Self {
        Self::FloatingPoint(v)
    }
}

impl From<Vec<Roi>> for ParameterValue {
    fn from(v: Vec<Roi>) -> Self {
        Self::Rois(v)
    }
}

impl From<Pulse> for ParameterValue {
    fn from(v: Pulse) -> Self {
        Self::Pulse(v)
    }
}

impl From<Vec<Modulation>> for ParameterValue {
    fn from(v: Vec<Modulation>) -> Self {
        Self::Modulations(v)
    }
}

// =============================================================================
// Fixed-size string helpers
// =============================================================================

/// Read a NUL-terminated (or full-width) `pichar` field.
pub(crate) fn chars_to_string(chars: &[c_char]) -> String {
    let bytes: Vec<u8> = chars
        .iter()
        .take_while(|&&c| c != 0)
        .map(|&c| c as u8)
        .collect();
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Write `s` into a fixed `pichar` field, always leaving a terminating NUL.
pub(crate) fn string_to_chars(s: &str, out: &mut [c_char]) {
    out.fill(0);
    let max = out.len().saturating_sub(1);
    for (dst, &src) in out.iter_mut().zip(s.as_bytes().iter().take(max)) {
        *dst = src as c_char;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_type_round_trip() {
        for vt in [
            ValueType::Integer,
            ValueType::Boolean,
            ValueType::Enumeration,
            ValueType::LargeInteger,
            ValueType::FloatingPoint,
            ValueType::Rois,
            ValueType::Pulse,
            ValueType::Modulations,
        ] {
            assert_eq!(ValueType::from_raw(vt as i32), Some(vt));
        }
        assert_eq!(ValueType::from_raw(0), None);
        assert_eq!(ValueType::from_raw(99), None);
    }

    #[test]
    fn test_camera_id_truncates_long_strings() {
        let id = CameraId {
            model: Model::PIXIS_100F,
            computer_interface: sys::PicamComputerInterface_Usb2,
            sensor_name: "x".repeat(200),
            serial_number: "1234".to_string(),
        };
        let raw = id.to_raw();
        assert_eq!(raw.sensor_name[63], 0);
        let back = CameraId::from_raw(&raw);
        assert_eq!(back.sensor_name.len(), 63);
        assert_eq!(back.serial_number, "1234");
        assert_eq!(back.model, Model::PIXIS_100F);
    }

    #[test]
    fn test_parameter_value_encodings() {
        assert_eq!(ParameterValue::Boolean(true).as_i32(), Some(1));
        assert_eq!(ParameterValue::Enumeration(3).as_i64(), Some(3));
        assert_eq!(ParameterValue::Integer(7).as_f64(), Some(7.0));
        assert_eq!(ParameterValue::Rois(vec![]).as_f64(), None);
        assert_eq!(ParameterValue::from(2.5).value_type(), ValueType::FloatingPoint);
    }

    #[test]
    fn test_roi_binned_pixels() {
        let roi = Roi {
            x: 0,
            width: 100,
            x_binning: 2,
            y: 0,
            height: 10,
            y_binning: 5,
        };
        assert_eq!(roi.binned_pixels(), 100);
        assert_eq!(Roi::full(4, 3).binned_pixels(), 12);
    }

    #[test]
    fn test_range_constraint_contains() {
        let range = RangeConstraint {
            minimum: 0.0,
            maximum: 10.0,
            increment: 1.0,
            scope: sys::PicamConstraintScope_Independent,
            severity: sys::PicamConstraintSeverity_Error,
            empty_set: false,
            excluded_values: vec![5.0],
            outlying_values: vec![20.0],
        };
        assert!(range.contains(3.0));
        assert!(!range.contains(5.0));
        assert!(range.contains(20.0));
        assert!(!range.contains(11.0));
    }

    #[test]
    fn test_parameter_display() {
        assert_eq!(Parameter::EXPOSURE_TIME.to_string(), "PicamParameter_ExposureTime");
        assert_eq!(Parameter(0x7f).to_string(), "Parameter(0x7f)");
    }
}

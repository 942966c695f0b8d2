//! Low-level FFI bindings for the Princeton Instruments PICam C SDK.
//!
//! This crate provides raw, unsafe declarations for `picam.h`: the primitive
//! typedefs, the fixed-layout structures, every enumeration as a set of
//! `Type_Variant` constants, and one function per native entry point.
//!
//! # Memory Ownership
//!
//! Every `Picam_Get*` call that hands back a pointer (strings, ID arrays,
//! parameter lists, ROIs, pulses, modulations, constraints) returns memory
//! owned by the SDK. It must be released with the matching `Picam_Destroy*`
//! call. Buffers described by [`PicamAvailableData`] are owned by the SDK and
//! only valid until the next `Picam_Acquire` / `Picam_WaitForAcquisitionUpdate`.
//!
//! # Safety
//!
//! All functions in this crate are `unsafe` as they are direct FFI bindings.
//! For a safe wrapper, use the `picam` crate instead.
//!
//! # Features
//!
//! - `picam-sdk`: Generate bindings from the vendor `picam.h` with bindgen and
//!   link against the library. Without this feature the pre-written
//!   declarations in `dummy.rs` are used, where every entry point is a stub
//!   that panics. This lets the workspace build and test on systems without
//!   the SDK installed.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(dead_code)]
#![allow(clippy::all)]

// Include the generated bindings
#[cfg(feature = "picam-sdk")]
include!(concat!(env!("OUT_DIR"), "/bindings.rs"));

#[cfg(not(feature = "picam-sdk"))]
mod dummy;
#[cfg(not(feature = "picam-sdk"))]
pub use dummy::*;

// =============================================================================
// Parameter encoding
// =============================================================================

/// `PICAM_PARAMETER(v, c, n)` from picam.h.
pub const fn PICAM_PARAMETER(
    value_type: PicamValueType,
    constraint_type: PicamConstraintType,
    n: piint,
) -> PicamParameter {
    (constraint_type << 24) + (value_type << 16) + n
}

/// Extract the value type encoded in a parameter id.
pub const fn PICAM_PARAMETER_VALUE_TYPE(parameter: PicamParameter) -> PicamValueType {
    (parameter >> 16) & 0xff
}

/// Extract the constraint type encoded in a parameter id.
pub const fn PICAM_PARAMETER_CONSTRAINT_TYPE(parameter: PicamParameter) -> PicamConstraintType {
    (parameter >> 24) & 0xff
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_encoding() {
        assert_eq!(
            PICAM_PARAMETER_VALUE_TYPE(PicamParameter_ExposureTime),
            PicamValueType_FloatingPoint
        );
        assert_eq!(
            PICAM_PARAMETER_CONSTRAINT_TYPE(PicamParameter_ExposureTime),
            PicamConstraintType_Range
        );
        assert_eq!(
            PICAM_PARAMETER_VALUE_TYPE(PicamParameter_Rois),
            PicamValueType_Rois
        );
        assert_eq!(PicamParameter_ReadoutStride & 0xffff, 45);
        assert_eq!(PicamParameter_RepetitiveGate & 0xffff, 94);
        assert_eq!(
            PICAM_PARAMETER_VALUE_TYPE(PicamParameter_CustomModulationSequence),
            PicamValueType_Modulations
        );
    }

    #[test]
    fn test_parameter_numbers_are_unique() {
        let parameters = [
            PicamParameter_ExposureTime,
            PicamParameter_ShutterClosingDelay,
            PicamParameter_ShutterOpeningDelay,
            PicamParameter_ReadoutControlMode,
            PicamParameter_EMIccdGain,
            PicamParameter_IntensifierGain,
            PicamParameter_RepetitiveGate,
            PicamParameter_AdcEMGain,
            PicamParameter_TriggerSource,
            PicamParameter_KineticsWindowHeight,
            PicamParameter_SensorActiveWidth,
            PicamParameter_CleanCycleCount,
            PicamParameter_FrameSize,
            PicamParameter_ReadoutStride,
        ];
        let mut numbers: Vec<_> = parameters.iter().map(|p| p & 0xffff).collect();
        numbers.sort_unstable();
        numbers.dedup();
        assert_eq!(numbers.len(), parameters.len());
    }

    #[test]
    fn test_struct_layout() {
        assert_eq!(std::mem::size_of::<PicamRoi>(), 6 * std::mem::size_of::<piint>());
        assert_eq!(std::mem::size_of::<PicamPulse>(), 16);
        assert_eq!(std::mem::size_of::<PicamModulation>(), 32);
        assert_eq!(std::mem::size_of::<PicamCameraID>(), 8 + 64 + 64);
    }

    #[test]
    #[should_panic(expected = "picam-sdk feature is not enabled")]
    #[cfg(not(feature = "picam-sdk"))]
    fn test_stub_panics() {
        let mut inited: pibln = 0;
        unsafe {
            Picam_IsLibraryInitialized(&mut inited);
        }
    }
}

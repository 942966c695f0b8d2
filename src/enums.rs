//! Symbolic names for PICam enumeration values.
//!
//! The table is built once from the `picam-sys` constants, so names resolve
//! without a native call and without the library being initialized.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use picam_sys as sys;
use sys::piint;

use crate::error::{PicamError, Result};
use crate::types::EnumeratedType;

macro_rules! enum_table {
    ($($name:ident),* $(,)?) => {
        static ENTRIES: &[(&str, piint)] = &[
            $( (stringify!($name), sys::$name), )*
        ];
    };
}

enum_table! {
    PicamError_None,
    PicamError_UnexpectedError,
    PicamError_UnexpectedNullPointer,
    PicamError_InvalidPointer,
    PicamError_InvalidCount,
    PicamError_InvalidOperation,
    PicamError_OperationCanceled,
    PicamError_LibraryNotInitialized,
    PicamError_LibraryAlreadyInitialized,
    PicamError_InvalidEnumeratedType,
    PicamError_EnumerationValueNotDefined,
    PicamError_NotDiscoveringCameras,
    PicamError_AlreadyDiscoveringCameras,
    PicamError_NoCamerasAvailable,
    PicamError_CameraAlreadyOpened,
    PicamError_InvalidCameraID,
    PicamError_InvalidHandle,
    PicamError_DeviceCommunicationFailed,
    PicamError_DeviceDisconnected,
    PicamError_DeviceOpenElsewhere,
    PicamError_InvalidDemoModel,
    PicamError_InvalidDemoSerialNumber,
    PicamError_DemoAlreadyConnected,
    PicamError_DemoNotSupported,
    PicamError_ParameterHasInvalidValueType,
    PicamError_ParameterHasInvalidConstraintType,
    PicamError_ParameterDoesNotExist,
    PicamError_ParameterValueIsReadOnly,
    PicamError_InvalidParameterValue,
    PicamError_InvalidConstraintCategory,
    PicamError_ParameterValueIsIrrelevant,
    PicamError_ParameterIsNotOnlineable,
    PicamError_ParameterIsNotReadable,
    PicamError_InvalidParameterValues,
    PicamError_ParametersNotCommitted,
    PicamError_InvalidAcquisitionBuffer,
    PicamError_InvalidReadoutCount,
    PicamError_InvalidReadoutTimeOut,
    PicamError_InsufficientMemory,
    PicamError_AcquisitionInProgress,
    PicamError_AcquisitionNotInProgress,
    PicamError_TimeOutOccurred,
    PicamError_AcquisitionUpdatedHandlerRegistered,
    PicamError_InvalidAcquisitionState,
    PicamError_NondestructiveReadoutEnabled,

    PicamEnumeratedType_Error,
    PicamEnumeratedType_EnumeratedType,
    PicamEnumeratedType_Model,
    PicamEnumeratedType_ComputerInterface,
    PicamEnumeratedType_ValueType,
    PicamEnumeratedType_ConstraintType,
    PicamEnumeratedType_Parameter,
    PicamEnumeratedType_AdcAnalogGain,
    PicamEnumeratedType_AdcQuality,
    PicamEnumeratedType_CcdCharacteristicsMask,
    PicamEnumeratedType_GateTrackingMask,
    PicamEnumeratedType_GatingMode,
    PicamEnumeratedType_GatingSpeed,
    PicamEnumeratedType_EMIccdGainControlMode,
    PicamEnumeratedType_IntensifierOptionsMask,
    PicamEnumeratedType_IntensifierStatus,
    PicamEnumeratedType_ModulationTrackingMask,
    PicamEnumeratedType_OrientationMask,
    PicamEnumeratedType_OutputSignal,
    PicamEnumeratedType_PhosphorType,
    PicamEnumeratedType_PhotocathodeSensitivity,
    PicamEnumeratedType_PhotonDetectionMode,
    PicamEnumeratedType_PixelFormat,
    PicamEnumeratedType_ReadoutControlMode,
    PicamEnumeratedType_SensorTemperatureStatus,
    PicamEnumeratedType_SensorType,
    PicamEnumeratedType_ShutterTimingMode,
    PicamEnumeratedType_ShutterType,
    PicamEnumeratedType_TimeStampsMask,
    PicamEnumeratedType_TriggerCoupling,
    PicamEnumeratedType_TriggerDetermination,
    PicamEnumeratedType_TriggerResponse,
    PicamEnumeratedType_TriggerSource,
    PicamEnumeratedType_TriggerTermination,
    PicamEnumeratedType_ValueAccess,
    PicamEnumeratedType_ConstraintScope,
    PicamEnumeratedType_ConstraintSeverity,
    PicamEnumeratedType_ConstraintCategory,
    PicamEnumeratedType_RoisConstraintRulesMask,
    PicamEnumeratedType_AcquisitionErrorsMask,

    PicamModel_PixisSeries,
    PicamModel_Pixis100Series,
    PicamModel_Pixis100F,
    PicamModel_Pixis100B,
    PicamModel_Pixis100R,
    PicamModel_Pixis100C,
    PicamModel_Pixis100BR,
    PicamModel_Pixis100BExcelon,
    PicamModel_Pixis100BRExcelon,
    PicamModel_PixisXO100B,
    PicamModel_PixisXO100BR,
    PicamModel_PixisXB100B,
    PicamModel_PixisXB100BR,
    PicamModel_Pixis256Series,
    PicamModel_Pixis256F,
    PicamModel_Pixis256B,
    PicamModel_Pixis256E,
    PicamModel_Pixis256BR,
    PicamModel_PixisXB256BR,
    PicamModel_Pixis400Series,
    PicamModel_Pixis400F,
    PicamModel_Pixis400B,
    PicamModel_Pixis400R,
    PicamModel_Pixis400BR,
    PicamModel_Pixis400BExcelon,
    PicamModel_Pixis400BRExcelon,
    PicamModel_PixisXO400B,
    PicamModel_PixisXB400BR,
    PicamModel_Pixis512Series,
    PicamModel_Pixis512F,
    PicamModel_Pixis512B,
    PicamModel_Pixis512BUV,
    PicamModel_Pixis512BExcelon,
    PicamModel_PixisXO512F,
    PicamModel_PixisXO512B,
    PicamModel_PixisXF512F,
    PicamModel_PixisXF512B,
    PicamModel_Pixis1024Series,
    PicamModel_Pixis1024F,
    PicamModel_Pixis1024B,
    PicamModel_Pixis1024BR,
    PicamModel_Pixis1024BUV,
    PicamModel_Pixis1024BExcelon,
    PicamModel_Pixis1024BRExcelon,
    PicamModel_PixisXO1024F,
    PicamModel_PixisXO1024B,
    PicamModel_PixisXO1024BR,
    PicamModel_PixisXF1024F,
    PicamModel_PixisXF1024B,
    PicamModel_PixisXB1024BR,
    PicamModel_Pixis1300Series,
    PicamModel_Pixis1300F,
    PicamModel_Pixis1300F_2,
    PicamModel_Pixis1300B,
    PicamModel_Pixis1300BR,
    PicamModel_Pixis1300BExcelon,
    PicamModel_Pixis1300BRExcelon,
    PicamModel_PixisXO1300B,
    PicamModel_PixisXF1300B,
    PicamModel_PixisXB1300R,
    PicamModel_Pixis2048Series,
    PicamModel_Pixis2048F,
    PicamModel_Pixis2048B,
    PicamModel_Pixis2048BR,
    PicamModel_Pixis2048BExcelon,
    PicamModel_Pixis2048BRExcelon,
    PicamModel_PixisXO2048B,
    PicamModel_PixisXF2048F,
    PicamModel_PixisXF2048B,
    PicamModel_Pixis2KSeries,
    PicamModel_Pixis2KF,
    PicamModel_Pixis2KB,
    PicamModel_Pixis2KBUV,
    PicamModel_Pixis2KBExcelon,
    PicamModel_PixisXO2KB,
    PicamModel_QuadroSeries,
    PicamModel_Quadro4096,
    PicamModel_Quadro4096_2,
    PicamModel_Quadro4320,
    PicamModel_ProEMSeries,
    PicamModel_ProEM512Series,
    PicamModel_ProEM512B,
    PicamModel_ProEM512BK,
    PicamModel_ProEM512BExcelon,
    PicamModel_ProEM512BKExcelon,
    PicamModel_ProEM1024Series,
    PicamModel_ProEM1024B,
    PicamModel_ProEM1024BExcelon,
    PicamModel_ProEM1600Series,
    PicamModel_ProEM1600xx2B,
    PicamModel_ProEM1600xx2BExcelon,
    PicamModel_ProEM1600xx4B,
    PicamModel_ProEM1600xx4BExcelon,
    PicamModel_ProEMPlusSeries,
    PicamModel_ProEMPlus512Series,
    PicamModel_ProEMPlus512B,
    PicamModel_ProEMPlus512BK,
    PicamModel_ProEMPlus512BExcelon,
    PicamModel_ProEMPlus512BKExcelon,
    PicamModel_ProEMPlus1024Series,
    PicamModel_ProEMPlus1024B,
    PicamModel_ProEMPlus1024BExcelon,
    PicamModel_ProEMPlus1600Series,
    PicamModel_ProEMPlus1600xx2B,
    PicamModel_ProEMPlus1600xx2BExcelon,
    PicamModel_ProEMPlus1600xx4B,
    PicamModel_ProEMPlus1600xx4BExcelon,
    PicamModel_ProEMHSSeries,
    PicamModel_ProEMHS512Series,
    PicamModel_ProEMHS512B,
    PicamModel_ProEMHS512BK,
    PicamModel_ProEMHS512BExcelon,
    PicamModel_ProEMHS512BKExcelon,
    PicamModel_ProEMHS1024Series,
    PicamModel_ProEMHS1024B,
    PicamModel_ProEMHS1024BExcelon,
    PicamModel_ProEMHS1K10Series,
    PicamModel_ProEMHS1KB10,
    PicamModel_ProEMHS1KB10Excelon,
    PicamModel_PIMax3Series,
    PicamModel_PIMax31024I,
    PicamModel_PIMax31024x256,
    PicamModel_PIMax4Series,
    PicamModel_PIMax41024ISeries,
    PicamModel_PIMax41024I,
    PicamModel_PIMax41024IRF,
    PicamModel_PIMax41024FSeries,
    PicamModel_PIMax41024F,
    PicamModel_PIMax41024FRF,
    PicamModel_PIMax41024x256Series,
    PicamModel_PIMax41024x256,
    PicamModel_PIMax41024x256RF,
    PicamModel_PIMax42048Series,
    PicamModel_PIMax42048F,
    PicamModel_PIMax42048B,
    PicamModel_PIMax42048FRF,
    PicamModel_PIMax42048BRF,
    PicamModel_PIMax4512EMSeries,
    PicamModel_PIMax4512EM,
    PicamModel_PIMax4512BEM,
    PicamModel_PIMax41024EMSeries,
    PicamModel_PIMax41024EM,
    PicamModel_PIMax41024BEM,
    PicamModel_PylonSeries,
    PicamModel_Pylon100Series,
    PicamModel_Pylon100F,
    PicamModel_Pylon100B,
    PicamModel_Pylon100BR,
    PicamModel_Pylon100BExcelon,
    PicamModel_Pylon100BRExcelon,
    PicamModel_Pylon400Series,
    PicamModel_Pylon400F,
    PicamModel_Pylon400B,
    PicamModel_Pylon400BR,
    PicamModel_Pylon400BExcelon,
    PicamModel_Pylon400BRExcelon,
    PicamModel_Pylon1024Series,
    PicamModel_Pylon1024B,
    PicamModel_Pylon1024BExcelon,
    PicamModel_Pylon1300Series,
    PicamModel_Pylon1300F,
    PicamModel_Pylon1300B,
    PicamModel_Pylon1300R,
    PicamModel_Pylon1300BR,
    PicamModel_Pylon1300BExcelon,
    PicamModel_Pylon1300BRExcelon,
    PicamModel_Pylon2048Series,
    PicamModel_Pylon2048F,
    PicamModel_Pylon2048B,
    PicamModel_Pylon2048BR,
    PicamModel_Pylon2048BExcelon,
    PicamModel_Pylon2048BRExcelon,
    PicamModel_Pylon2KSeries,
    PicamModel_Pylon2KF,
    PicamModel_Pylon2KB,
    PicamModel_Pylon2KBUV,
    PicamModel_Pylon2KBExcelon,
    PicamModel_PylonirSeries,
    PicamModel_Pylonir1024Series,
    PicamModel_Pylonir102422,
    PicamModel_Pylonir102417,
    PicamModel_PionirSeries,
    PicamModel_Pionir640,
    PicamModel_NirvanaSeries,
    PicamModel_Nirvana640,
    PicamModel_NirvanaSTSeries,
    PicamModel_NirvanaST640,
    PicamModel_NirvanaLNSeries,
    PicamModel_NirvanaLN640,
    PicamModel_SophiaSeries,
    PicamModel_Sophia2048Series,
    PicamModel_Sophia2048B,
    PicamModel_Sophia2048BExcelon,
    PicamModel_SophiaXO2048B,
    PicamModel_SophiaXF2048B,
    PicamModel_SophiaXB2048B,
    PicamModel_Sophia2048135Series,
    PicamModel_Sophia2048135,
    PicamModel_Sophia2048B135,
    PicamModel_Sophia2048BR135,
    PicamModel_Sophia2048B135Excelon,
    PicamModel_Sophia2048BR135Excelon,
    PicamModel_SophiaXO2048B135,
    PicamModel_SophiaXO2048BR135,
    PicamModel_BlazeSeries,
    PicamModel_Blaze100Series,
    PicamModel_Blaze100B,
    PicamModel_Blaze100BR,
    PicamModel_Blaze100HR,
    PicamModel_Blaze100BRLD,
    PicamModel_Blaze100BExcelon,
    PicamModel_Blaze100BRExcelon,
    PicamModel_Blaze100HRExcelon,
    PicamModel_Blaze100BRLDExcelon,
    PicamModel_Blaze400Series,
    PicamModel_Blaze400B,
    PicamModel_Blaze400BR,
    PicamModel_Blaze400HR,
    PicamModel_Blaze400BRLD,
    PicamModel_Blaze400BExcelon,
    PicamModel_Blaze400BRExcelon,
    PicamModel_Blaze400HRExcelon,
    PicamModel_Blaze400BRLDExcelon,
    PicamModel_FergieSeries,
    PicamModel_Fergie256Series,
    PicamModel_Fergie256B,
    PicamModel_Fergie256BR,
    PicamModel_Fergie256BExcelon,
    PicamModel_Fergie256BRExcelon,
    PicamModel_FergieAccessorySeries,
    PicamModel_FergieLampSeries,
    PicamModel_FergieAEL,
    PicamModel_FergieQTH,
    PicamModel_FergieLaserSeries,
    PicamModel_FergieLaser785,
    PicamModel_KuroSeries,
    PicamModel_Kuro1200B,
    PicamModel_Kuro1608B,
    PicamModel_Kuro2048B,

    PicamComputerInterface_Usb2,
    PicamComputerInterface_1394A,
    PicamComputerInterface_GigabitEthernet,
    PicamComputerInterface_Usb3,

    PicamValueType_Integer,
    PicamValueType_Boolean,
    PicamValueType_Enumeration,
    PicamValueType_LargeInteger,
    PicamValueType_FloatingPoint,
    PicamValueType_Rois,
    PicamValueType_Pulse,
    PicamValueType_Modulations,

    PicamConstraintType_None,
    PicamConstraintType_Range,
    PicamConstraintType_Collection,
    PicamConstraintType_Rois,
    PicamConstraintType_Pulse,
    PicamConstraintType_Modulations,

    PicamAdcAnalogGain_Low,
    PicamAdcAnalogGain_Medium,
    PicamAdcAnalogGain_High,

    PicamAdcQuality_LowNoise,
    PicamAdcQuality_HighCapacity,
    PicamAdcQuality_HighSpeed,
    PicamAdcQuality_ElectronMultiplied,

    PicamCcdCharacteristicsMask_None,
    PicamCcdCharacteristicsMask_BackIlluminated,
    PicamCcdCharacteristicsMask_DeepDepleted,
    PicamCcdCharacteristicsMask_OpenElectrode,
    PicamCcdCharacteristicsMask_UVEnhanced,
    PicamCcdCharacteristicsMask_ExcelonEnabled,
    PicamCcdCharacteristicsMask_SecondaryMask,
    PicamCcdCharacteristicsMask_Multiport,
    PicamCcdCharacteristicsMask_AdvancedInvertedMode,
    PicamCcdCharacteristicsMask_HighResistivity,

    PicamEMIccdGainControlMode_Optimal,
    PicamEMIccdGainControlMode_Manual,

    PicamGateTrackingMask_None,
    PicamGateTrackingMask_Delay,
    PicamGateTrackingMask_Width,

    PicamGatingMode_Repetitive,
    PicamGatingMode_Sequential,
    PicamGatingMode_Custom,
    PicamGatingMode_Disabled,

    PicamGatingSpeed_Fast,
    PicamGatingSpeed_Slow,

    PicamIntensifierOptionsMask_None,
    PicamIntensifierOptionsMask_McpGating,
    PicamIntensifierOptionsMask_SubNanosecondGating,
    PicamIntensifierOptionsMask_Modulation,

    PicamIntensifierStatus_PoweredOff,
    PicamIntensifierStatus_PoweredOn,

    PicamModulationTrackingMask_None,
    PicamModulationTrackingMask_Duration,
    PicamModulationTrackingMask_Frequency,
    PicamModulationTrackingMask_Phase,
    PicamModulationTrackingMask_OutputSignalFrequency,

    PicamOrientationMask_Normal,
    PicamOrientationMask_FlippedHorizontally,
    PicamOrientationMask_FlippedVertically,

    PicamOutputSignal_NotReadingOut,
    PicamOutputSignal_ShutterOpen,
    PicamOutputSignal_Busy,
    PicamOutputSignal_AlwaysLow,
    PicamOutputSignal_AlwaysHigh,
    PicamOutputSignal_Acquiring,
    PicamOutputSignal_ShiftingUnderMask,
    PicamOutputSignal_Exposing,
    PicamOutputSignal_EffectivelyExposing,
    PicamOutputSignal_ReadingOut,
    PicamOutputSignal_WaitingForTrigger,

    PicamPhosphorType_P43,
    PicamPhosphorType_P46,

    PicamPhotocathodeSensitivity_RedBlue,
    PicamPhotocathodeSensitivity_SuperRed,
    PicamPhotocathodeSensitivity_SuperBlue,
    PicamPhotocathodeSensitivity_UV,
    PicamPhotocathodeSensitivity_SolarBlind,
    PicamPhotocathodeSensitivity_Unigen2Filmless,
    PicamPhotocathodeSensitivity_InGaAsFilmless,
    PicamPhotocathodeSensitivity_HighQEFilmless,
    PicamPhotocathodeSensitivity_HighRedFilmless,
    PicamPhotocathodeSensitivity_HighBlueFilmless,

    PicamPhotonDetectionMode_Disabled,
    PicamPhotonDetectionMode_Thresholding,
    PicamPhotonDetectionMode_Clipping,

    PicamPixelFormat_Monochrome16Bit,
    PicamPixelFormat_Monochrome32Bit,

    PicamReadoutControlMode_FullFrame,
    PicamReadoutControlMode_FrameTransfer,
    PicamReadoutControlMode_Interline,
    PicamReadoutControlMode_Kinetics,
    PicamReadoutControlMode_SpectraKinetics,
    PicamReadoutControlMode_Dif,
    PicamReadoutControlMode_SeNsR,

    PicamSensorTemperatureStatus_Unlocked,
    PicamSensorTemperatureStatus_Locked,
    PicamSensorTemperatureStatus_Faulted,

    PicamSensorType_Ccd,
    PicamSensorType_InGaAs,

    PicamShutterTimingMode_Normal,
    PicamShutterTimingMode_AlwaysClosed,
    PicamShutterTimingMode_AlwaysOpen,
    PicamShutterTimingMode_OpenBeforeTrigger,

    PicamShutterType_None,
    PicamShutterType_VincentCS25,
    PicamShutterType_VincentCS45,
    PicamShutterType_VincentCS90,
    PicamShutterType_VincentDSS10,
    PicamShutterType_VincentVS25,
    PicamShutterType_VincentVS35,
    PicamShutterType_ProntorMagnetic0,
    PicamShutterType_ProntorMagneticE40,

    PicamTimeStampsMask_None,
    PicamTimeStampsMask_ExposureStarted,
    PicamTimeStampsMask_ExposureEnded,

    PicamTriggerCoupling_AC,
    PicamTriggerCoupling_DC,

    PicamTriggerDetermination_PositivePolarity,
    PicamTriggerDetermination_NegativePolarity,
    PicamTriggerDetermination_RisingEdge,
    PicamTriggerDetermination_FallingEdge,
    PicamTriggerDetermination_AlternatingEdgeRising,
    PicamTriggerDetermination_AlternatingEdgeFalling,

    PicamTriggerResponse_NoResponse,
    PicamTriggerResponse_ReadoutPerTrigger,
    PicamTriggerResponse_ShiftPerTrigger,
    PicamTriggerResponse_GatePerTrigger,
    PicamTriggerResponse_ExposeDuringTriggerPulse,
    PicamTriggerResponse_StartOnSingleTrigger,

    PicamTriggerSource_None,
    PicamTriggerSource_Internal,
    PicamTriggerSource_External,

    PicamTriggerTermination_FiftyOhms,
    PicamTriggerTermination_HighImpedance,

    PicamValueAccess_ReadOnly,
    PicamValueAccess_ReadWriteTrivial,
    PicamValueAccess_ReadWrite,

    PicamConstraintScope_Independent,
    PicamConstraintScope_Dependent,

    PicamConstraintSeverity_Error,
    PicamConstraintSeverity_Warning,

    PicamConstraintCategory_Capable,
    PicamConstraintCategory_Required,
    PicamConstraintCategory_Recommended,

    PicamRoisConstraintRulesMask_None,
    PicamRoisConstraintRulesMask_XBinningAlignment,
    PicamRoisConstraintRulesMask_YBinningAlignment,
    PicamRoisConstraintRulesMask_HorizontalSymmetry,
    PicamRoisConstraintRulesMask_VerticalSymmetry,
    PicamRoisConstraintRulesMask_SymmetryBoundsBinning,

    PicamAcquisitionErrorsMask_None,
    PicamAcquisitionErrorsMask_CameraFaulted,
    PicamAcquisitionErrorsMask_ConnectionLost,
    PicamAcquisitionErrorsMask_ShutterOverheated,
    PicamAcquisitionErrorsMask_DataLost,
    PicamAcquisitionErrorsMask_DataNotArriving,

    PicamParameter_ExposureTime,
    PicamParameter_ShutterTimingMode,
    PicamParameter_ShutterOpeningDelay,
    PicamParameter_ShutterClosingDelay,
    PicamParameter_ShutterDelayResolution,
    PicamParameter_EnableIntensifier,
    PicamParameter_IntensifierStatus,
    PicamParameter_IntensifierGain,
    PicamParameter_EMIccdGainControlMode,
    PicamParameter_EMIccdGain,
    PicamParameter_PhosphorDecayDelay,
    PicamParameter_PhosphorDecayDelayResolution,
    PicamParameter_GatingMode,
    PicamParameter_RepetitiveGate,
    PicamParameter_SequentialStartingGate,
    PicamParameter_SequentialEndingGate,
    PicamParameter_SequentialGateStepCount,
    PicamParameter_SequentialGateStepIterations,
    PicamParameter_DifStartingGate,
    PicamParameter_DifEndingGate,
    PicamParameter_BracketGating,
    PicamParameter_IntensifierOptions,
    PicamParameter_EnableModulation,
    PicamParameter_ModulationDuration,
    PicamParameter_ModulationFrequency,
    PicamParameter_RepetitiveModulationPhase,
    PicamParameter_SequentialStartingModulationPhase,
    PicamParameter_SequentialEndingModulationPhase,
    PicamParameter_CustomModulationSequence,
    PicamParameter_PhotocathodeSensitivity,
    PicamParameter_GatingSpeed,
    PicamParameter_PhosphorType,
    PicamParameter_IntensifierDiameter,
    PicamParameter_AdcSpeed,
    PicamParameter_AdcBitDepth,
    PicamParameter_AdcAnalogGain,
    PicamParameter_AdcQuality,
    PicamParameter_AdcEMGain,
    PicamParameter_CorrectPixelBias,
    PicamParameter_TriggerSource,
    PicamParameter_TriggerResponse,
    PicamParameter_TriggerDetermination,
    PicamParameter_TriggerFrequency,
    PicamParameter_TriggerTermination,
    PicamParameter_TriggerCoupling,
    PicamParameter_TriggerThreshold,
    PicamParameter_OutputSignal,
    PicamParameter_InvertOutputSignal,
    PicamParameter_AuxOutput,
    PicamParameter_EnableSyncMaster,
    PicamParameter_SyncMaster2Delay,
    PicamParameter_EnableModulationOutputSignal,
    PicamParameter_ModulationOutputSignalFrequency,
    PicamParameter_ModulationOutputSignalAmplitude,
    PicamParameter_AnticipateTrigger,
    PicamParameter_DelayFromPreTrigger,
    PicamParameter_ReadoutControlMode,
    PicamParameter_ReadoutTimeCalculation,
    PicamParameter_ReadoutPortCount,
    PicamParameter_ReadoutOrientation,
    PicamParameter_KineticsWindowHeight,
    PicamParameter_VerticalShiftRate,
    PicamParameter_Accumulations,
    PicamParameter_EnableNondestructiveReadout,
    PicamParameter_NondestructiveReadoutPeriod,
    PicamParameter_Rois,
    PicamParameter_NormalizeOrientation,
    PicamParameter_DisableDataFormatting,
    PicamParameter_ReadoutCount,
    PicamParameter_ExactReadoutCountMaximum,
    PicamParameter_PhotonDetectionMode,
    PicamParameter_PhotonDetectionThreshold,
    PicamParameter_PixelFormat,
    PicamParameter_FrameSize,
    PicamParameter_FrameStride,
    PicamParameter_FramesPerReadout,
    PicamParameter_ReadoutStride,
    PicamParameter_PixelBitDepth,
    PicamParameter_ReadoutRateCalculation,
    PicamParameter_OnlineReadoutRateCalculation,
    PicamParameter_FrameRateCalculation,
    PicamParameter_Orientation,
    PicamParameter_TimeStamps,
    PicamParameter_TimeStampResolution,
    PicamParameter_TimeStampBitDepth,
    PicamParameter_TrackFrames,
    PicamParameter_FrameTrackingBitDepth,
    PicamParameter_GateTracking,
    PicamParameter_GateTrackingBitDepth,
    PicamParameter_ModulationTracking,
    PicamParameter_ModulationTrackingBitDepth,
    PicamParameter_SensorType,
    PicamParameter_CcdCharacteristics,
    PicamParameter_SensorActiveWidth,
    PicamParameter_SensorActiveHeight,
    PicamParameter_SensorActiveLeftMargin,
    PicamParameter_SensorActiveTopMargin,
    PicamParameter_SensorActiveRightMargin,
    PicamParameter_SensorActiveBottomMargin,
    PicamParameter_SensorMaskedHeight,
    PicamParameter_SensorMaskedTopMargin,
    PicamParameter_SensorMaskedBottomMargin,
    PicamParameter_SensorSecondaryMaskedHeight,
    PicamParameter_SensorSecondaryActiveHeight,
    PicamParameter_PixelWidth,
    PicamParameter_PixelHeight,
    PicamParameter_PixelGapWidth,
    PicamParameter_PixelGapHeight,
    PicamParameter_ActiveWidth,
    PicamParameter_ActiveHeight,
    PicamParameter_ActiveLeftMargin,
    PicamParameter_ActiveTopMargin,
    PicamParameter_ActiveRightMargin,
    PicamParameter_ActiveBottomMargin,
    PicamParameter_MaskedHeight,
    PicamParameter_MaskedTopMargin,
    PicamParameter_MaskedBottomMargin,
    PicamParameter_SecondaryMaskedHeight,
    PicamParameter_SecondaryActiveHeight,
    PicamParameter_CleanSectionFinalHeight,
    PicamParameter_CleanSectionFinalHeightCount,
    PicamParameter_CleanSerialRegister,
    PicamParameter_CleanCycleCount,
    PicamParameter_CleanCycleHeight,
    PicamParameter_CleanBeforeExposure,
    PicamParameter_CleanUntilTrigger,
    PicamParameter_StopCleaningOnPreTrigger,
    PicamParameter_SensorTemperatureSetPoint,
    PicamParameter_SensorTemperatureReading,
    PicamParameter_SensorTemperatureStatus,
    PicamParameter_DisableCoolingFan,
    PicamParameter_EnableSensorWindowHeater,
}

static BY_NAME: Lazy<HashMap<&'static str, piint>> =
    Lazy::new(|| ENTRIES.iter().copied().collect());

/// Numeric value of a fully qualified name such as `PicamParameter_ExposureTime`.
pub fn lookup(name: &str) -> Result<piint> {
    BY_NAME
        .get(name)
        .copied()
        .ok_or_else(|| PicamError::NotFound(format!("unknown PICam enumeration '{}'", name)))
}

/// Fully qualified name of `value` among the constants starting with `prefix`.
pub fn name_of(prefix: &str, value: piint) -> Option<&'static str> {
    ENTRIES
        .iter()
        .find(|(name, v)| *v == value && name.starts_with(prefix))
        .map(|(name, _)| *name)
}

/// Every `(name, value)` pair whose name starts with `prefix`.
pub fn entries(prefix: &str) -> impl Iterator<Item = (&'static str, piint)> + '_ {
    ENTRIES
        .iter()
        .copied()
        .filter(move |(name, _)| name.starts_with(prefix))
}

static PREFIXES: Lazy<HashMap<piint, String>> = Lazy::new(|| {
    entries("PicamEnumeratedType_")
        .map(|(name, value)| {
            let family = &name["PicamEnumeratedType_".len()..];
            (value, format!("Picam{}_", family))
        })
        .collect()
});

/// Constant-name prefix used for an enumerated type.
pub fn prefix_of(ty: EnumeratedType) -> Option<&'static str> {
    PREFIXES.get(&ty.0).map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_names() {
        assert_eq!(lookup("PicamParameter_ExposureTime").unwrap(), sys::PicamParameter_ExposureTime);
        assert_eq!(lookup("PicamModel_Pixis100F").unwrap(), sys::PicamModel_Pixis100F);
        assert_eq!(lookup("PicamError_None").unwrap(), 0);
    }

    #[test]
    fn test_lookup_unknown_name() {
        let err = lookup("PicamParameter_ExposureTyme").unwrap_err();
        assert!(matches!(err, PicamError::NotFound(_)));
    }

    #[test]
    fn test_name_of_respects_prefix() {
        // Value 1 exists in many families.
        assert_eq!(name_of("PicamValueType_", 1), Some("PicamValueType_Integer"));
        assert_eq!(name_of("PicamError_", 1), Some("PicamError_LibraryNotInitialized"));
        assert_eq!(name_of("PicamError_", -5), None);
    }

    #[test]
    fn test_every_enumerated_type_has_prefix() {
        for (_, value) in entries("PicamEnumeratedType_") {
            let prefix = prefix_of(EnumeratedType(value)).unwrap();
            assert!(entries(prefix).next().is_some(), "no entries for {}", prefix);
        }
    }

    #[test]
    fn test_lookup_covers_full_header() {
        assert_eq!(
            lookup("PicamParameter_ShutterClosingDelay").unwrap(),
            sys::PicamParameter_ShutterClosingDelay
        );
        assert_eq!(
            lookup("PicamParameter_ReadoutControlMode").unwrap(),
            sys::PicamParameter_ReadoutControlMode
        );
        assert_eq!(lookup("PicamModel_Pixis1300B").unwrap(), sys::PicamModel_Pixis1300B);
        assert_eq!(lookup("PicamParameter_EMIccdGain").unwrap(), sys::PicamParameter_EMIccdGain);
        assert_eq!(
            lookup("PicamError_NotDiscoveringCameras").unwrap(),
            sys::PicamError_NotDiscoveringCameras
        );
    }

    #[test]
    fn test_values_are_unique_within_family() {
        for (_, value) in entries("PicamEnumeratedType_") {
            let prefix = prefix_of(EnumeratedType(value)).unwrap();
            let mut values: Vec<piint> = entries(prefix).map(|(_, v)| v).collect();
            let count = values.len();
            values.sort_unstable();
            values.dedup();
            assert_eq!(values.len(), count, "duplicate values under {}", prefix);
        }
    }

    #[test]
    fn test_readout_control_mode_names() {
        let prefix = prefix_of(EnumeratedType(sys::PicamEnumeratedType_ReadoutControlMode)).unwrap();
        assert_eq!(prefix, "PicamReadoutControlMode_");
        assert_eq!(
            name_of(prefix, sys::PicamReadoutControlMode_FrameTransfer),
            Some("PicamReadoutControlMode_FrameTransfer")
        );
    }
}

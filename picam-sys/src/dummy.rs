//! Declarations used when the `picam-sdk` feature is off.
//!
//! They mirror what bindgen produces from `picam.h` with
//! `EnumVariation::Consts`: every enumeration is a `piint` alias plus one
//! `Type_Variant` constant per value. Every entry point is a stub that panics.

use std::os::raw::{c_char, c_int, c_void};

use crate::PICAM_PARAMETER;

// =============================================================================
// Primitive types
// =============================================================================

pub type piint = c_int;
pub type piflt = f64;
pub type pibln = c_int;
pub type pichar = c_char;
pub type pibyte = u8;
pub type pi64s = i64;

/// Opaque camera handle.
pub type PicamHandle = *mut c_void;

pub type PicamStringSize = piint;
pub const PicamStringSize_SensorName: PicamStringSize = 64;
pub const PicamStringSize_SerialNumber: PicamStringSize = 64;
pub const PicamStringSize_FirmwareName: PicamStringSize = 64;
pub const PicamStringSize_FirmwareDetail: PicamStringSize = 256;

// =============================================================================
// Enumerations
// =============================================================================


pub type PicamError = piint;
pub const PicamError_None: PicamError = 0;
pub const PicamError_UnexpectedError: PicamError = 4;
pub const PicamError_UnexpectedNullPointer: PicamError = 3;
pub const PicamError_InvalidPointer: PicamError = 35;
pub const PicamError_InvalidCount: PicamError = 39;
pub const PicamError_InvalidOperation: PicamError = 42;
pub const PicamError_OperationCanceled: PicamError = 43;
pub const PicamError_LibraryNotInitialized: PicamError = 1;
pub const PicamError_LibraryAlreadyInitialized: PicamError = 5;
pub const PicamError_InvalidEnumeratedType: PicamError = 16;
pub const PicamError_EnumerationValueNotDefined: PicamError = 17;
pub const PicamError_NotDiscoveringCameras: PicamError = 18;
pub const PicamError_AlreadyDiscoveringCameras: PicamError = 19;
pub const PicamError_NoCamerasAvailable: PicamError = 34;
pub const PicamError_CameraAlreadyOpened: PicamError = 7;
pub const PicamError_InvalidCameraID: PicamError = 8;
pub const PicamError_InvalidHandle: PicamError = 9;
pub const PicamError_DeviceCommunicationFailed: PicamError = 15;
pub const PicamError_DeviceDisconnected: PicamError = 23;
pub const PicamError_DeviceOpenElsewhere: PicamError = 24;
pub const PicamError_InvalidDemoModel: PicamError = 6;
pub const PicamError_InvalidDemoSerialNumber: PicamError = 21;
pub const PicamError_DemoAlreadyConnected: PicamError = 22;
pub const PicamError_DemoNotSupported: PicamError = 40;
pub const PicamError_ParameterHasInvalidValueType: PicamError = 11;
pub const PicamError_ParameterHasInvalidConstraintType: PicamError = 13;
pub const PicamError_ParameterDoesNotExist: PicamError = 12;
pub const PicamError_ParameterValueIsReadOnly: PicamError = 10;
pub const PicamError_InvalidParameterValue: PicamError = 2;
pub const PicamError_InvalidConstraintCategory: PicamError = 38;
pub const PicamError_ParameterValueIsIrrelevant: PicamError = 14;
pub const PicamError_ParameterIsNotOnlineable: PicamError = 25;
pub const PicamError_ParameterIsNotReadable: PicamError = 26;
pub const PicamError_InvalidParameterValues: PicamError = 28;
pub const PicamError_ParametersNotCommitted: PicamError = 29;
pub const PicamError_InvalidAcquisitionBuffer: PicamError = 30;
pub const PicamError_InvalidReadoutCount: PicamError = 36;
pub const PicamError_InvalidReadoutTimeOut: PicamError = 37;
pub const PicamError_InsufficientMemory: PicamError = 31;
pub const PicamError_AcquisitionInProgress: PicamError = 20;
pub const PicamError_AcquisitionNotInProgress: PicamError = 27;
pub const PicamError_TimeOutOccurred: PicamError = 32;
pub const PicamError_AcquisitionUpdatedHandlerRegistered: PicamError = 33;
pub const PicamError_InvalidAcquisitionState: PicamError = 44;
pub const PicamError_NondestructiveReadoutEnabled: PicamError = 41;

pub type PicamEnumeratedType = piint;
pub const PicamEnumeratedType_Error: PicamEnumeratedType = 1;
pub const PicamEnumeratedType_EnumeratedType: PicamEnumeratedType = 29;
pub const PicamEnumeratedType_Model: PicamEnumeratedType = 2;
pub const PicamEnumeratedType_ComputerInterface: PicamEnumeratedType = 3;
pub const PicamEnumeratedType_ValueType: PicamEnumeratedType = 4;
pub const PicamEnumeratedType_ConstraintType: PicamEnumeratedType = 5;
pub const PicamEnumeratedType_Parameter: PicamEnumeratedType = 6;
pub const PicamEnumeratedType_AdcAnalogGain: PicamEnumeratedType = 7;
pub const PicamEnumeratedType_AdcQuality: PicamEnumeratedType = 8;
pub const PicamEnumeratedType_CcdCharacteristicsMask: PicamEnumeratedType = 9;
pub const PicamEnumeratedType_GateTrackingMask: PicamEnumeratedType = 36;
pub const PicamEnumeratedType_GatingMode: PicamEnumeratedType = 34;
pub const PicamEnumeratedType_GatingSpeed: PicamEnumeratedType = 38;
pub const PicamEnumeratedType_EMIccdGainControlMode: PicamEnumeratedType = 42;
pub const PicamEnumeratedType_IntensifierOptionsMask: PicamEnumeratedType = 35;
pub const PicamEnumeratedType_IntensifierStatus: PicamEnumeratedType = 33;
pub const PicamEnumeratedType_ModulationTrackingMask: PicamEnumeratedType = 41;
pub const PicamEnumeratedType_OrientationMask: PicamEnumeratedType = 10;
pub const PicamEnumeratedType_OutputSignal: PicamEnumeratedType = 11;
pub const PicamEnumeratedType_PhosphorType: PicamEnumeratedType = 39;
pub const PicamEnumeratedType_PhotocathodeSensitivity: PicamEnumeratedType = 40;
pub const PicamEnumeratedType_PhotonDetectionMode: PicamEnumeratedType = 43;
pub const PicamEnumeratedType_PixelFormat: PicamEnumeratedType = 12;
pub const PicamEnumeratedType_ReadoutControlMode: PicamEnumeratedType = 13;
pub const PicamEnumeratedType_SensorTemperatureStatus: PicamEnumeratedType = 14;
pub const PicamEnumeratedType_SensorType: PicamEnumeratedType = 15;
pub const PicamEnumeratedType_ShutterTimingMode: PicamEnumeratedType = 16;
pub const PicamEnumeratedType_ShutterType: PicamEnumeratedType = 17;
pub const PicamEnumeratedType_TimeStampsMask: PicamEnumeratedType = 18;
pub const PicamEnumeratedType_TriggerCoupling: PicamEnumeratedType = 19;
pub const PicamEnumeratedType_TriggerDetermination: PicamEnumeratedType = 20;
pub const PicamEnumeratedType_TriggerResponse: PicamEnumeratedType = 21;
pub const PicamEnumeratedType_TriggerSource: PicamEnumeratedType = 22;
pub const PicamEnumeratedType_TriggerTermination: PicamEnumeratedType = 23;
pub const PicamEnumeratedType_ValueAccess: PicamEnumeratedType = 24;
pub const PicamEnumeratedType_ConstraintScope: PicamEnumeratedType = 30;
pub const PicamEnumeratedType_ConstraintSeverity: PicamEnumeratedType = 31;
pub const PicamEnumeratedType_ConstraintCategory: PicamEnumeratedType = 32;
pub const PicamEnumeratedType_RoisConstraintRulesMask: PicamEnumeratedType = 37;
pub const PicamEnumeratedType_AcquisitionErrorsMask: PicamEnumeratedType = 28;

pub type PicamModel = piint;
pub const PicamModel_PixisSeries: PicamModel = 0;
pub const PicamModel_Pixis100Series: PicamModel = 1;
pub const PicamModel_Pixis100F: PicamModel = 2;
pub const PicamModel_Pixis100B: PicamModel = 6;
pub const PicamModel_Pixis100R: PicamModel = 3;
pub const PicamModel_Pixis100C: PicamModel = 4;
pub const PicamModel_Pixis100BR: PicamModel = 5;
pub const PicamModel_Pixis100BExcelon: PicamModel = 54;
pub const PicamModel_Pixis100BRExcelon: PicamModel = 55;
pub const PicamModel_PixisXO100B: PicamModel = 7;
pub const PicamModel_PixisXO100BR: PicamModel = 8;
pub const PicamModel_PixisXB100B: PicamModel = 68;
pub const PicamModel_PixisXB100BR: PicamModel = 69;
pub const PicamModel_Pixis256Series: PicamModel = 26;
pub const PicamModel_Pixis256F: PicamModel = 27;
pub const PicamModel_Pixis256B: PicamModel = 29;
pub const PicamModel_Pixis256E: PicamModel = 28;
pub const PicamModel_Pixis256BR: PicamModel = 30;
pub const PicamModel_PixisXB256BR: PicamModel = 31;
pub const PicamModel_Pixis400Series: PicamModel = 37;
pub const PicamModel_Pixis400F: PicamModel = 38;
pub const PicamModel_Pixis400B: PicamModel = 40;
pub const PicamModel_Pixis400R: PicamModel = 39;
pub const PicamModel_Pixis400BR: PicamModel = 41;
pub const PicamModel_Pixis400BExcelon: PicamModel = 56;
pub const PicamModel_Pixis400BRExcelon: PicamModel = 57;
pub const PicamModel_PixisXO400B: PicamModel = 42;
pub const PicamModel_PixisXB400BR: PicamModel = 70;
pub const PicamModel_Pixis512Series: PicamModel = 43;
pub const PicamModel_Pixis512F: PicamModel = 44;
pub const PicamModel_Pixis512B: PicamModel = 45;
pub const PicamModel_Pixis512BUV: PicamModel = 46;
pub const PicamModel_Pixis512BExcelon: PicamModel = 58;
pub const PicamModel_PixisXO512F: PicamModel = 49;
pub const PicamModel_PixisXO512B: PicamModel = 50;
pub const PicamModel_PixisXF512F: PicamModel = 48;
pub const PicamModel_PixisXF512B: PicamModel = 47;
pub const PicamModel_Pixis1024Series: PicamModel = 9;
pub const PicamModel_Pixis1024F: PicamModel = 10;
pub const PicamModel_Pixis1024B: PicamModel = 11;
pub const PicamModel_Pixis1024BR: PicamModel = 13;
pub const PicamModel_Pixis1024BUV: PicamModel = 12;
pub const PicamModel_Pixis1024BExcelon: PicamModel = 59;
pub const PicamModel_Pixis1024BRExcelon: PicamModel = 60;
pub const PicamModel_PixisXO1024F: PicamModel = 16;
pub const PicamModel_PixisXO1024B: PicamModel = 14;
pub const PicamModel_PixisXO1024BR: PicamModel = 15;
pub const PicamModel_PixisXF1024F: PicamModel = 17;
pub const PicamModel_PixisXF1024B: PicamModel = 18;
pub const PicamModel_PixisXB1024BR: PicamModel = 71;
pub const PicamModel_Pixis1300Series: PicamModel = 51;
pub const PicamModel_Pixis1300F: PicamModel = 52;
pub const PicamModel_Pixis1300F_2: PicamModel = 75;
pub const PicamModel_Pixis1300B: PicamModel = 53;
pub const PicamModel_Pixis1300BR: PicamModel = 73;
pub const PicamModel_Pixis1300BExcelon: PicamModel = 61;
pub const PicamModel_Pixis1300BRExcelon: PicamModel = 62;
pub const PicamModel_PixisXO1300B: PicamModel = 65;
pub const PicamModel_PixisXF1300B: PicamModel = 66;
pub const PicamModel_PixisXB1300R: PicamModel = 72;
pub const PicamModel_Pixis2048Series: PicamModel = 20;
pub const PicamModel_Pixis2048F: PicamModel = 21;
pub const PicamModel_Pixis2048B: PicamModel = 22;
pub const PicamModel_Pixis2048BR: PicamModel = 67;
pub const PicamModel_Pixis2048BExcelon: PicamModel = 63;
pub const PicamModel_Pixis2048BRExcelon: PicamModel = 74;
pub const PicamModel_PixisXO2048B: PicamModel = 23;
pub const PicamModel_PixisXF2048F: PicamModel = 25;
pub const PicamModel_PixisXF2048B: PicamModel = 24;
pub const PicamModel_Pixis2KSeries: PicamModel = 32;
pub const PicamModel_Pixis2KF: PicamModel = 33;
pub const PicamModel_Pixis2KB: PicamModel = 34;
pub const PicamModel_Pixis2KBUV: PicamModel = 36;
pub const PicamModel_Pixis2KBExcelon: PicamModel = 64;
pub const PicamModel_PixisXO2KB: PicamModel = 35;
pub const PicamModel_QuadroSeries: PicamModel = 100;
pub const PicamModel_Quadro4096: PicamModel = 101;
pub const PicamModel_Quadro4096_2: PicamModel = 103;
pub const PicamModel_Quadro4320: PicamModel = 102;
pub const PicamModel_ProEMSeries: PicamModel = 200;
pub const PicamModel_ProEM512Series: PicamModel = 203;
pub const PicamModel_ProEM512B: PicamModel = 201;
pub const PicamModel_ProEM512BK: PicamModel = 205;
pub const PicamModel_ProEM512BExcelon: PicamModel = 204;
pub const PicamModel_ProEM512BKExcelon: PicamModel = 206;
pub const PicamModel_ProEM1024Series: PicamModel = 207;
pub const PicamModel_ProEM1024B: PicamModel = 202;
pub const PicamModel_ProEM1024BExcelon: PicamModel = 208;
pub const PicamModel_ProEM1600Series: PicamModel = 209;
pub const PicamModel_ProEM1600xx2B: PicamModel = 210;
pub const PicamModel_ProEM1600xx2BExcelon: PicamModel = 211;
pub const PicamModel_ProEM1600xx4B: PicamModel = 212;
pub const PicamModel_ProEM1600xx4BExcelon: PicamModel = 213;
pub const PicamModel_ProEMPlusSeries: PicamModel = 600;
pub const PicamModel_ProEMPlus512Series: PicamModel = 603;
pub const PicamModel_ProEMPlus512B: PicamModel = 601;
pub const PicamModel_ProEMPlus512BK: PicamModel = 605;
pub const PicamModel_ProEMPlus512BExcelon: PicamModel = 604;
pub const PicamModel_ProEMPlus512BKExcelon: PicamModel = 606;
pub const PicamModel_ProEMPlus1024Series: PicamModel = 607;
pub const PicamModel_ProEMPlus1024B: PicamModel = 602;
pub const PicamModel_ProEMPlus1024BExcelon: PicamModel = 608;
pub const PicamModel_ProEMPlus1600Series: PicamModel = 609;
pub const PicamModel_ProEMPlus1600xx2B: PicamModel = 610;
pub const PicamModel_ProEMPlus1600xx2BExcelon: PicamModel = 611;
pub const PicamModel_ProEMPlus1600xx4B: PicamModel = 612;
pub const PicamModel_ProEMPlus1600xx4BExcelon: PicamModel = 613;
pub const PicamModel_ProEMHSSeries: PicamModel = 1200;
pub const PicamModel_ProEMHS512Series: PicamModel = 1201;
pub const PicamModel_ProEMHS512B: PicamModel = 1202;
pub const PicamModel_ProEMHS512BK: PicamModel = 1207;
pub const PicamModel_ProEMHS512BExcelon: PicamModel = 1203;
pub const PicamModel_ProEMHS512BKExcelon: PicamModel = 1208;
pub const PicamModel_ProEMHS1024Series: PicamModel = 1204;
pub const PicamModel_ProEMHS1024B: PicamModel = 1205;
pub const PicamModel_ProEMHS1024BExcelon: PicamModel = 1206;
pub const PicamModel_ProEMHS1K10Series: PicamModel = 1209;
pub const PicamModel_ProEMHS1KB10: PicamModel = 1210;
pub const PicamModel_ProEMHS1KB10Excelon: PicamModel = 1211;
pub const PicamModel_PIMax3Series: PicamModel = 300;
pub const PicamModel_PIMax31024I: PicamModel = 301;
pub const PicamModel_PIMax31024x256: PicamModel = 302;
pub const PicamModel_PIMax4Series: PicamModel = 700;
pub const PicamModel_PIMax41024ISeries: PicamModel = 703;
pub const PicamModel_PIMax41024I: PicamModel = 701;
pub const PicamModel_PIMax41024IRF: PicamModel = 704;
pub const PicamModel_PIMax41024FSeries: PicamModel = 710;
pub const PicamModel_PIMax41024F: PicamModel = 711;
pub const PicamModel_PIMax41024FRF: PicamModel = 712;
pub const PicamModel_PIMax41024x256Series: PicamModel = 705;
pub const PicamModel_PIMax41024x256: PicamModel = 702;
pub const PicamModel_PIMax41024x256RF: PicamModel = 706;
pub const PicamModel_PIMax42048Series: PicamModel = 716;
pub const PicamModel_PIMax42048F: PicamModel = 717;
pub const PicamModel_PIMax42048B: PicamModel = 718;
pub const PicamModel_PIMax42048FRF: PicamModel = 719;
pub const PicamModel_PIMax42048BRF: PicamModel = 720;
pub const PicamModel_PIMax4512EMSeries: PicamModel = 708;
pub const PicamModel_PIMax4512EM: PicamModel = 707;
pub const PicamModel_PIMax4512BEM: PicamModel = 709;
pub const PicamModel_PIMax41024EMSeries: PicamModel = 713;
pub const PicamModel_PIMax41024EM: PicamModel = 715;
pub const PicamModel_PIMax41024BEM: PicamModel = 714;
pub const PicamModel_PylonSeries: PicamModel = 400;
pub const PicamModel_Pylon100Series: PicamModel = 418;
pub const PicamModel_Pylon100F: PicamModel = 404;
pub const PicamModel_Pylon100B: PicamModel = 401;
pub const PicamModel_Pylon100BR: PicamModel = 407;
pub const PicamModel_Pylon100BExcelon: PicamModel = 425;
pub const PicamModel_Pylon100BRExcelon: PicamModel = 426;
pub const PicamModel_Pylon400Series: PicamModel = 419;
pub const PicamModel_Pylon400F: PicamModel = 405;
pub const PicamModel_Pylon400B: PicamModel = 402;
pub const PicamModel_Pylon400BR: PicamModel = 408;
pub const PicamModel_Pylon400BExcelon: PicamModel = 427;
pub const PicamModel_Pylon400BRExcelon: PicamModel = 428;
pub const PicamModel_Pylon1024Series: PicamModel = 420;
pub const PicamModel_Pylon1024B: PicamModel = 417;
pub const PicamModel_Pylon1024BExcelon: PicamModel = 429;
pub const PicamModel_Pylon1300Series: PicamModel = 421;
pub const PicamModel_Pylon1300F: PicamModel = 406;
pub const PicamModel_Pylon1300B: PicamModel = 403;
pub const PicamModel_Pylon1300R: PicamModel = 438;
pub const PicamModel_Pylon1300BR: PicamModel = 409;
pub const PicamModel_Pylon1300BExcelon: PicamModel = 430;
pub const PicamModel_Pylon1300BRExcelon: PicamModel = 431;
pub const PicamModel_Pylon2048Series: PicamModel = 422;
pub const PicamModel_Pylon2048F: PicamModel = 415;
pub const PicamModel_Pylon2048B: PicamModel = 434;
pub const PicamModel_Pylon2048BR: PicamModel = 416;
pub const PicamModel_Pylon2048BExcelon: PicamModel = 435;
pub const PicamModel_Pylon2048BRExcelon: PicamModel = 432;
pub const PicamModel_Pylon2KSeries: PicamModel = 423;
pub const PicamModel_Pylon2KF: PicamModel = 410;
pub const PicamModel_Pylon2KB: PicamModel = 411;
pub const PicamModel_Pylon2KBUV: PicamModel = 437;
pub const PicamModel_Pylon2KBExcelon: PicamModel = 433;
pub const PicamModel_PylonirSeries: PicamModel = 900;
pub const PicamModel_Pylonir1024Series: PicamModel = 901;
pub const PicamModel_Pylonir102422: PicamModel = 902;
pub const PicamModel_Pylonir102417: PicamModel = 903;
pub const PicamModel_PionirSeries: PicamModel = 500;
pub const PicamModel_Pionir640: PicamModel = 501;
pub const PicamModel_NirvanaSeries: PicamModel = 800;
pub const PicamModel_Nirvana640: PicamModel = 801;
pub const PicamModel_NirvanaSTSeries: PicamModel = 1300;
pub const PicamModel_NirvanaST640: PicamModel = 1301;
pub const PicamModel_NirvanaLNSeries: PicamModel = 1100;
pub const PicamModel_NirvanaLN640: PicamModel = 1101;
pub const PicamModel_SophiaSeries: PicamModel = 1800;
pub const PicamModel_Sophia2048Series: PicamModel = 1801;
pub const PicamModel_Sophia2048B: PicamModel = 1802;
pub const PicamModel_Sophia2048BExcelon: PicamModel = 1803;
pub const PicamModel_SophiaXO2048B: PicamModel = 1804;
pub const PicamModel_SophiaXF2048B: PicamModel = 1805;
pub const PicamModel_SophiaXB2048B: PicamModel = 1806;
pub const PicamModel_Sophia2048135Series: PicamModel = 1807;
pub const PicamModel_Sophia2048135: PicamModel = 1808;
pub const PicamModel_Sophia2048B135: PicamModel = 1809;
pub const PicamModel_Sophia2048BR135: PicamModel = 1810;
pub const PicamModel_Sophia2048B135Excelon: PicamModel = 1811;
pub const PicamModel_Sophia2048BR135Excelon: PicamModel = 1812;
pub const PicamModel_SophiaXO2048B135: PicamModel = 1813;
pub const PicamModel_SophiaXO2048BR135: PicamModel = 1814;
pub const PicamModel_BlazeSeries: PicamModel = 1500;
pub const PicamModel_Blaze100Series: PicamModel = 1507;
pub const PicamModel_Blaze100B: PicamModel = 1501;
pub const PicamModel_Blaze100BR: PicamModel = 1505;
pub const PicamModel_Blaze100HR: PicamModel = 1503;
pub const PicamModel_Blaze100BRLD: PicamModel = 1509;
pub const PicamModel_Blaze100BExcelon: PicamModel = 1511;
pub const PicamModel_Blaze100BRExcelon: PicamModel = 1513;
pub const PicamModel_Blaze100HRExcelon: PicamModel = 1515;
pub const PicamModel_Blaze100BRLDExcelon: PicamModel = 1517;
pub const PicamModel_Blaze400Series: PicamModel = 1508;
pub const PicamModel_Blaze400B: PicamModel = 1502;
pub const PicamModel_Blaze400BR: PicamModel = 1506;
pub const PicamModel_Blaze400HR: PicamModel = 1504;
pub const PicamModel_Blaze400BRLD: PicamModel = 1510;
pub const PicamModel_Blaze400BExcelon: PicamModel = 1512;
pub const PicamModel_Blaze400BRExcelon: PicamModel = 1514;
pub const PicamModel_Blaze400HRExcelon: PicamModel = 1516;
pub const PicamModel_Blaze400BRLDExcelon: PicamModel = 1518;
pub const PicamModel_FergieSeries: PicamModel = 1600;
pub const PicamModel_Fergie256Series: PicamModel = 1601;
pub const PicamModel_Fergie256B: PicamModel = 1602;
pub const PicamModel_Fergie256BR: PicamModel = 1607;
pub const PicamModel_Fergie256BExcelon: PicamModel = 1603;
pub const PicamModel_Fergie256BRExcelon: PicamModel = 1604;
pub const PicamModel_FergieAccessorySeries: PicamModel = 1608;
pub const PicamModel_FergieLampSeries: PicamModel = 1609;
pub const PicamModel_FergieAEL: PicamModel = 1606;
pub const PicamModel_FergieQTH: PicamModel = 1605;
pub const PicamModel_FergieLaserSeries: PicamModel = 1610;
pub const PicamModel_FergieLaser785: PicamModel = 1611;
pub const PicamModel_KuroSeries: PicamModel = 1900;
pub const PicamModel_Kuro1200B: PicamModel = 1901;
pub const PicamModel_Kuro1608B: PicamModel = 1902;
pub const PicamModel_Kuro2048B: PicamModel = 1903;

pub type PicamComputerInterface = piint;
pub const PicamComputerInterface_Usb2: PicamComputerInterface = 1;
pub const PicamComputerInterface_1394A: PicamComputerInterface = 2;
pub const PicamComputerInterface_GigabitEthernet: PicamComputerInterface = 3;
pub const PicamComputerInterface_Usb3: PicamComputerInterface = 4;

pub type PicamValueType = piint;
pub const PicamValueType_Integer: PicamValueType = 1;
pub const PicamValueType_Boolean: PicamValueType = 3;
pub const PicamValueType_Enumeration: PicamValueType = 4;
pub const PicamValueType_LargeInteger: PicamValueType = 6;
pub const PicamValueType_FloatingPoint: PicamValueType = 2;
pub const PicamValueType_Rois: PicamValueType = 5;
pub const PicamValueType_Pulse: PicamValueType = 7;
pub const PicamValueType_Modulations: PicamValueType = 8;

pub type PicamConstraintType = piint;
pub const PicamConstraintType_None: PicamConstraintType = 1;
pub const PicamConstraintType_Range: PicamConstraintType = 2;
pub const PicamConstraintType_Collection: PicamConstraintType = 3;
pub const PicamConstraintType_Rois: PicamConstraintType = 4;
pub const PicamConstraintType_Pulse: PicamConstraintType = 5;
pub const PicamConstraintType_Modulations: PicamConstraintType = 6;

pub type PicamAdcAnalogGain = piint;
pub const PicamAdcAnalogGain_Low: PicamAdcAnalogGain = 1;
pub const PicamAdcAnalogGain_Medium: PicamAdcAnalogGain = 2;
pub const PicamAdcAnalogGain_High: PicamAdcAnalogGain = 3;

pub type PicamAdcQuality = piint;
pub const PicamAdcQuality_LowNoise: PicamAdcQuality = 1;
pub const PicamAdcQuality_HighCapacity: PicamAdcQuality = 2;
pub const PicamAdcQuality_HighSpeed: PicamAdcQuality = 4;
pub const PicamAdcQuality_ElectronMultiplied: PicamAdcQuality = 3;

pub type PicamCcdCharacteristicsMask = piint;
pub const PicamCcdCharacteristicsMask_None: PicamCcdCharacteristicsMask = 0x0;
pub const PicamCcdCharacteristicsMask_BackIlluminated: PicamCcdCharacteristicsMask = 0x1;
pub const PicamCcdCharacteristicsMask_DeepDepleted: PicamCcdCharacteristicsMask = 0x2;
pub const PicamCcdCharacteristicsMask_OpenElectrode: PicamCcdCharacteristicsMask = 0x4;
pub const PicamCcdCharacteristicsMask_UVEnhanced: PicamCcdCharacteristicsMask = 0x8;
pub const PicamCcdCharacteristicsMask_ExcelonEnabled: PicamCcdCharacteristicsMask = 0x10;
pub const PicamCcdCharacteristicsMask_SecondaryMask: PicamCcdCharacteristicsMask = 0x20;
pub const PicamCcdCharacteristicsMask_Multiport: PicamCcdCharacteristicsMask = 0x40;
pub const PicamCcdCharacteristicsMask_AdvancedInvertedMode: PicamCcdCharacteristicsMask = 0x80;
pub const PicamCcdCharacteristicsMask_HighResistivity: PicamCcdCharacteristicsMask = 0x100;

pub type PicamEMIccdGainControlMode = piint;
pub const PicamEMIccdGainControlMode_Optimal: PicamEMIccdGainControlMode = 1;
pub const PicamEMIccdGainControlMode_Manual: PicamEMIccdGainControlMode = 2;

pub type PicamGateTrackingMask = piint;
pub const PicamGateTrackingMask_None: PicamGateTrackingMask = 0x0;
pub const PicamGateTrackingMask_Delay: PicamGateTrackingMask = 0x1;
pub const PicamGateTrackingMask_Width: PicamGateTrackingMask = 0x2;

pub type PicamGatingMode = piint;
pub const PicamGatingMode_Repetitive: PicamGatingMode = 1;
pub const PicamGatingMode_Sequential: PicamGatingMode = 2;
pub const PicamGatingMode_Custom: PicamGatingMode = 3;
pub const PicamGatingMode_Disabled: PicamGatingMode = 4;

pub type PicamGatingSpeed = piint;
pub const PicamGatingSpeed_Fast: PicamGatingSpeed = 1;
pub const PicamGatingSpeed_Slow: PicamGatingSpeed = 2;

pub type PicamIntensifierOptionsMask = piint;
pub const PicamIntensifierOptionsMask_None: PicamIntensifierOptionsMask = 0x0;
pub const PicamIntensifierOptionsMask_McpGating: PicamIntensifierOptionsMask = 0x1;
pub const PicamIntensifierOptionsMask_SubNanosecondGating: PicamIntensifierOptionsMask = 0x2;
pub const PicamIntensifierOptionsMask_Modulation: PicamIntensifierOptionsMask = 0x4;

pub type PicamIntensifierStatus = piint;
pub const PicamIntensifierStatus_PoweredOff: PicamIntensifierStatus = 1;
pub const PicamIntensifierStatus_PoweredOn: PicamIntensifierStatus = 2;

pub type PicamModulationTrackingMask = piint;
pub const PicamModulationTrackingMask_None: PicamModulationTrackingMask = 0x0;
pub const PicamModulationTrackingMask_Duration: PicamModulationTrackingMask = 0x1;
pub const PicamModulationTrackingMask_Frequency: PicamModulationTrackingMask = 0x2;
pub const PicamModulationTrackingMask_Phase: PicamModulationTrackingMask = 0x4;
pub const PicamModulationTrackingMask_OutputSignalFrequency: PicamModulationTrackingMask = 0x8;

pub type PicamOrientationMask = piint;
pub const PicamOrientationMask_Normal: PicamOrientationMask = 0x0;
pub const PicamOrientationMask_FlippedHorizontally: PicamOrientationMask = 0x1;
pub const PicamOrientationMask_FlippedVertically: PicamOrientationMask = 0x2;

pub type PicamOutputSignal = piint;
pub const PicamOutputSignal_NotReadingOut: PicamOutputSignal = 1;
pub const PicamOutputSignal_ShutterOpen: PicamOutputSignal = 2;
pub const PicamOutputSignal_Busy: PicamOutputSignal = 3;
pub const PicamOutputSignal_AlwaysLow: PicamOutputSignal = 4;
pub const PicamOutputSignal_AlwaysHigh: PicamOutputSignal = 5;
pub const PicamOutputSignal_Acquiring: PicamOutputSignal = 6;
pub const PicamOutputSignal_ShiftingUnderMask: PicamOutputSignal = 7;
pub const PicamOutputSignal_Exposing: PicamOutputSignal = 8;
pub const PicamOutputSignal_EffectivelyExposing: PicamOutputSignal = 9;
pub const PicamOutputSignal_ReadingOut: PicamOutputSignal = 10;
pub const PicamOutputSignal_WaitingForTrigger: PicamOutputSignal = 11;

pub type PicamPhosphorType = piint;
pub const PicamPhosphorType_P43: PicamPhosphorType = 1;
pub const PicamPhosphorType_P46: PicamPhosphorType = 2;

pub type PicamPhotocathodeSensitivity = piint;
pub const PicamPhotocathodeSensitivity_RedBlue: PicamPhotocathodeSensitivity = 1;
pub const PicamPhotocathodeSensitivity_SuperRed: PicamPhotocathodeSensitivity = 7;
pub const PicamPhotocathodeSensitivity_SuperBlue: PicamPhotocathodeSensitivity = 2;
pub const PicamPhotocathodeSensitivity_UV: PicamPhotocathodeSensitivity = 3;
pub const PicamPhotocathodeSensitivity_SolarBlind: PicamPhotocathodeSensitivity = 10;
pub const PicamPhotocathodeSensitivity_Unigen2Filmless: PicamPhotocathodeSensitivity = 4;
pub const PicamPhotocathodeSensitivity_InGaAsFilmless: PicamPhotocathodeSensitivity = 9;
pub const PicamPhotocathodeSensitivity_HighQEFilmless: PicamPhotocathodeSensitivity = 5;
pub const PicamPhotocathodeSensitivity_HighRedFilmless: PicamPhotocathodeSensitivity = 8;
pub const PicamPhotocathodeSensitivity_HighBlueFilmless: PicamPhotocathodeSensitivity = 6;

pub type PicamPhotonDetectionMode = piint;
pub const PicamPhotonDetectionMode_Disabled: PicamPhotonDetectionMode = 1;
pub const PicamPhotonDetectionMode_Thresholding: PicamPhotonDetectionMode = 2;
pub const PicamPhotonDetectionMode_Clipping: PicamPhotonDetectionMode = 3;

pub type PicamPixelFormat = piint;
pub const PicamPixelFormat_Monochrome16Bit: PicamPixelFormat = 1;
pub const PicamPixelFormat_Monochrome32Bit: PicamPixelFormat = 2;

pub type PicamReadoutControlMode = piint;
pub const PicamReadoutControlMode_FullFrame: PicamReadoutControlMode = 1;
pub const PicamReadoutControlMode_FrameTransfer: PicamReadoutControlMode = 2;
pub const PicamReadoutControlMode_Interline: PicamReadoutControlMode = 5;
pub const PicamReadoutControlMode_Kinetics: PicamReadoutControlMode = 3;
pub const PicamReadoutControlMode_SpectraKinetics: PicamReadoutControlMode = 4;
pub const PicamReadoutControlMode_Dif: PicamReadoutControlMode = 6;
pub const PicamReadoutControlMode_SeNsR: PicamReadoutControlMode = 7;

pub type PicamSensorTemperatureStatus = piint;
pub const PicamSensorTemperatureStatus_Unlocked: PicamSensorTemperatureStatus = 1;
pub const PicamSensorTemperatureStatus_Locked: PicamSensorTemperatureStatus = 2;
pub const PicamSensorTemperatureStatus_Faulted: PicamSensorTemperatureStatus = 3;

pub type PicamSensorType = piint;
pub const PicamSensorType_Ccd: PicamSensorType = 1;
pub const PicamSensorType_InGaAs: PicamSensorType = 2;

pub type PicamShutterTimingMode = piint;
pub const PicamShutterTimingMode_Normal: PicamShutterTimingMode = 1;
pub const PicamShutterTimingMode_AlwaysClosed: PicamShutterTimingMode = 2;
pub const PicamShutterTimingMode_AlwaysOpen: PicamShutterTimingMode = 3;
pub const PicamShutterTimingMode_OpenBeforeTrigger: PicamShutterTimingMode = 4;

pub type PicamShutterType = piint;
pub const PicamShutterType_None: PicamShutterType = 1;
pub const PicamShutterType_VincentCS25: PicamShutterType = 2;
pub const PicamShutterType_VincentCS45: PicamShutterType = 3;
pub const PicamShutterType_VincentCS90: PicamShutterType = 9;
pub const PicamShutterType_VincentDSS10: PicamShutterType = 8;
pub const PicamShutterType_VincentVS25: PicamShutterType = 4;
pub const PicamShutterType_VincentVS35: PicamShutterType = 5;
pub const PicamShutterType_ProntorMagnetic0: PicamShutterType = 6;
pub const PicamShutterType_ProntorMagneticE40: PicamShutterType = 7;

pub type PicamTimeStampsMask = piint;
pub const PicamTimeStampsMask_None: PicamTimeStampsMask = 0x0;
pub const PicamTimeStampsMask_ExposureStarted: PicamTimeStampsMask = 0x1;
pub const PicamTimeStampsMask_ExposureEnded: PicamTimeStampsMask = 0x2;

pub type PicamTriggerCoupling = piint;
pub const PicamTriggerCoupling_AC: PicamTriggerCoupling = 1;
pub const PicamTriggerCoupling_DC: PicamTriggerCoupling = 2;

pub type PicamTriggerDetermination = piint;
pub const PicamTriggerDetermination_PositivePolarity: PicamTriggerDetermination = 1;
pub const PicamTriggerDetermination_NegativePolarity: PicamTriggerDetermination = 2;
pub const PicamTriggerDetermination_RisingEdge: PicamTriggerDetermination = 3;
pub const PicamTriggerDetermination_FallingEdge: PicamTriggerDetermination = 4;
pub const PicamTriggerDetermination_AlternatingEdgeRising: PicamTriggerDetermination = 5;
pub const PicamTriggerDetermination_AlternatingEdgeFalling: PicamTriggerDetermination = 6;

pub type PicamTriggerResponse = piint;
pub const PicamTriggerResponse_NoResponse: PicamTriggerResponse = 1;
pub const PicamTriggerResponse_ReadoutPerTrigger: PicamTriggerResponse = 2;
pub const PicamTriggerResponse_ShiftPerTrigger: PicamTriggerResponse = 3;
pub const PicamTriggerResponse_GatePerTrigger: PicamTriggerResponse = 6;
pub const PicamTriggerResponse_ExposeDuringTriggerPulse: PicamTriggerResponse = 4;
pub const PicamTriggerResponse_StartOnSingleTrigger: PicamTriggerResponse = 5;

pub type PicamTriggerSource = piint;
pub const PicamTriggerSource_None: PicamTriggerSource = 3;
pub const PicamTriggerSource_Internal: PicamTriggerSource = 2;
pub const PicamTriggerSource_External: PicamTriggerSource = 1;

pub type PicamTriggerTermination = piint;
pub const PicamTriggerTermination_FiftyOhms: PicamTriggerTermination = 1;
pub const PicamTriggerTermination_HighImpedance: PicamTriggerTermination = 2;

pub type PicamValueAccess = piint;
pub const PicamValueAccess_ReadOnly: PicamValueAccess = 1;
pub const PicamValueAccess_ReadWriteTrivial: PicamValueAccess = 3;
pub const PicamValueAccess_ReadWrite: PicamValueAccess = 2;

pub type PicamConstraintScope = piint;
pub const PicamConstraintScope_Independent: PicamConstraintScope = 1;
pub const PicamConstraintScope_Dependent: PicamConstraintScope = 2;

pub type PicamConstraintSeverity = piint;
pub const PicamConstraintSeverity_Error: PicamConstraintSeverity = 1;
pub const PicamConstraintSeverity_Warning: PicamConstraintSeverity = 2;

pub type PicamConstraintCategory = piint;
pub const PicamConstraintCategory_Capable: PicamConstraintCategory = 1;
pub const PicamConstraintCategory_Required: PicamConstraintCategory = 2;
pub const PicamConstraintCategory_Recommended: PicamConstraintCategory = 3;

pub type PicamRoisConstraintRulesMask = piint;
pub const PicamRoisConstraintRulesMask_None: PicamRoisConstraintRulesMask = 0x0;
pub const PicamRoisConstraintRulesMask_XBinningAlignment: PicamRoisConstraintRulesMask = 0x1;
pub const PicamRoisConstraintRulesMask_YBinningAlignment: PicamRoisConstraintRulesMask = 0x2;
pub const PicamRoisConstraintRulesMask_HorizontalSymmetry: PicamRoisConstraintRulesMask = 0x4;
pub const PicamRoisConstraintRulesMask_VerticalSymmetry: PicamRoisConstraintRulesMask = 0x8;
pub const PicamRoisConstraintRulesMask_SymmetryBoundsBinning: PicamRoisConstraintRulesMask = 0x10;

pub type PicamAcquisitionErrorsMask = piint;
pub const PicamAcquisitionErrorsMask_None: PicamAcquisitionErrorsMask = 0x0;
pub const PicamAcquisitionErrorsMask_CameraFaulted: PicamAcquisitionErrorsMask = 0x10;
pub const PicamAcquisitionErrorsMask_ConnectionLost: PicamAcquisitionErrorsMask = 0x2;
pub const PicamAcquisitionErrorsMask_ShutterOverheated: PicamAcquisitionErrorsMask = 0x8;
pub const PicamAcquisitionErrorsMask_DataLost: PicamAcquisitionErrorsMask = 0x1;
pub const PicamAcquisitionErrorsMask_DataNotArriving: PicamAcquisitionErrorsMask = 0x4;

// =============================================================================
// Parameters
// =============================================================================

pub type PicamParameter = piint;

// Shutter Timing
pub const PicamParameter_ExposureTime: PicamParameter =
    PICAM_PARAMETER(PicamValueType_FloatingPoint, PicamConstraintType_Range, 23);
pub const PicamParameter_ShutterTimingMode: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Enumeration, PicamConstraintType_Collection, 24);
pub const PicamParameter_ShutterOpeningDelay: PicamParameter =
    PICAM_PARAMETER(PicamValueType_FloatingPoint, PicamConstraintType_Range, 46);
pub const PicamParameter_ShutterClosingDelay: PicamParameter =
    PICAM_PARAMETER(PicamValueType_FloatingPoint, PicamConstraintType_Range, 25);
pub const PicamParameter_ShutterDelayResolution: PicamParameter =
    PICAM_PARAMETER(PicamValueType_FloatingPoint, PicamConstraintType_Collection, 47);

// Intensifier
pub const PicamParameter_EnableIntensifier: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Boolean, PicamConstraintType_Collection, 86);
pub const PicamParameter_IntensifierStatus: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Enumeration, PicamConstraintType_None, 87);
pub const PicamParameter_IntensifierGain: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Integer, PicamConstraintType_Range, 88);
pub const PicamParameter_EMIccdGainControlMode: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Enumeration, PicamConstraintType_Collection, 123);
pub const PicamParameter_EMIccdGain: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Integer, PicamConstraintType_Range, 124);
pub const PicamParameter_PhosphorDecayDelay: PicamParameter =
    PICAM_PARAMETER(PicamValueType_FloatingPoint, PicamConstraintType_Range, 89);
pub const PicamParameter_PhosphorDecayDelayResolution: PicamParameter =
    PICAM_PARAMETER(PicamValueType_FloatingPoint, PicamConstraintType_Collection, 90);
pub const PicamParameter_GatingMode: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Enumeration, PicamConstraintType_Collection, 93);
pub const PicamParameter_RepetitiveGate: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Pulse, PicamConstraintType_Pulse, 94);
pub const PicamParameter_SequentialStartingGate: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Pulse, PicamConstraintType_Pulse, 95);
pub const PicamParameter_SequentialEndingGate: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Pulse, PicamConstraintType_Pulse, 96);
pub const PicamParameter_SequentialGateStepCount: PicamParameter =
    PICAM_PARAMETER(PicamValueType_LargeInteger, PicamConstraintType_Range, 97);
pub const PicamParameter_SequentialGateStepIterations: PicamParameter =
    PICAM_PARAMETER(PicamValueType_LargeInteger, PicamConstraintType_Range, 98);
pub const PicamParameter_DifStartingGate: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Pulse, PicamConstraintType_Pulse, 102);
pub const PicamParameter_DifEndingGate: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Pulse, PicamConstraintType_Pulse, 103);
pub const PicamParameter_BracketGating: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Boolean, PicamConstraintType_Collection, 100);
pub const PicamParameter_IntensifierOptions: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Enumeration, PicamConstraintType_None, 101);
pub const PicamParameter_EnableModulation: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Boolean, PicamConstraintType_Collection, 111);
pub const PicamParameter_ModulationDuration: PicamParameter =
    PICAM_PARAMETER(PicamValueType_FloatingPoint, PicamConstraintType_Range, 118);
pub const PicamParameter_ModulationFrequency: PicamParameter =
    PICAM_PARAMETER(PicamValueType_FloatingPoint, PicamConstraintType_Range, 112);
pub const PicamParameter_RepetitiveModulationPhase: PicamParameter =
    PICAM_PARAMETER(PicamValueType_FloatingPoint, PicamConstraintType_Range, 113);
pub const PicamParameter_SequentialStartingModulationPhase: PicamParameter =
    PICAM_PARAMETER(PicamValueType_FloatingPoint, PicamConstraintType_Range, 114);
pub const PicamParameter_SequentialEndingModulationPhase: PicamParameter =
    PICAM_PARAMETER(PicamValueType_FloatingPoint, PicamConstraintType_Range, 115);
pub const PicamParameter_CustomModulationSequence: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Modulations, PicamConstraintType_Modulations, 119);
pub const PicamParameter_PhotocathodeSensitivity: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Enumeration, PicamConstraintType_None, 107);
pub const PicamParameter_GatingSpeed: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Enumeration, PicamConstraintType_None, 108);
pub const PicamParameter_PhosphorType: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Enumeration, PicamConstraintType_None, 109);
pub const PicamParameter_IntensifierDiameter: PicamParameter =
    PICAM_PARAMETER(PicamValueType_FloatingPoint, PicamConstraintType_None, 110);

// Analog to Digital Conversion
pub const PicamParameter_AdcSpeed: PicamParameter =
    PICAM_PARAMETER(PicamValueType_FloatingPoint, PicamConstraintType_Collection, 33);
pub const PicamParameter_AdcBitDepth: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Integer, PicamConstraintType_Collection, 34);
pub const PicamParameter_AdcAnalogGain: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Enumeration, PicamConstraintType_Collection, 35);
pub const PicamParameter_AdcQuality: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Enumeration, PicamConstraintType_Collection, 36);
pub const PicamParameter_AdcEMGain: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Integer, PicamConstraintType_Range, 53);
pub const PicamParameter_CorrectPixelBias: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Boolean, PicamConstraintType_Collection, 106);

// Hardware I/O
pub const PicamParameter_TriggerSource: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Enumeration, PicamConstraintType_Collection, 79);
pub const PicamParameter_TriggerResponse: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Enumeration, PicamConstraintType_Collection, 30);
pub const PicamParameter_TriggerDetermination: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Enumeration, PicamConstraintType_Collection, 31);
pub const PicamParameter_TriggerFrequency: PicamParameter =
    PICAM_PARAMETER(PicamValueType_FloatingPoint, PicamConstraintType_Range, 80);
pub const PicamParameter_TriggerTermination: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Enumeration, PicamConstraintType_Collection, 81);
pub const PicamParameter_TriggerCoupling: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Enumeration, PicamConstraintType_Collection, 82);
pub const PicamParameter_TriggerThreshold: PicamParameter =
    PICAM_PARAMETER(PicamValueType_FloatingPoint, PicamConstraintType_Range, 83);
pub const PicamParameter_OutputSignal: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Enumeration, PicamConstraintType_Collection, 32);
pub const PicamParameter_InvertOutputSignal: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Boolean, PicamConstraintType_Collection, 52);
pub const PicamParameter_AuxOutput: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Pulse, PicamConstraintType_Pulse, 91);
pub const PicamParameter_EnableSyncMaster: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Boolean, PicamConstraintType_Collection, 84);
pub const PicamParameter_SyncMaster2Delay: PicamParameter =
    PICAM_PARAMETER(PicamValueType_FloatingPoint, PicamConstraintType_Range, 85);
pub const PicamParameter_EnableModulationOutputSignal: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Boolean, PicamConstraintType_Collection, 116);
pub const PicamParameter_ModulationOutputSignalFrequency: PicamParameter =
    PICAM_PARAMETER(PicamValueType_FloatingPoint, PicamConstraintType_Range, 117);
pub const PicamParameter_ModulationOutputSignalAmplitude: PicamParameter =
    PICAM_PARAMETER(PicamValueType_FloatingPoint, PicamConstraintType_Range, 120);
pub const PicamParameter_AnticipateTrigger: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Boolean, PicamConstraintType_Collection, 131);
pub const PicamParameter_DelayFromPreTrigger: PicamParameter =
    PICAM_PARAMETER(PicamValueType_FloatingPoint, PicamConstraintType_Range, 132);

// Readout Control
pub const PicamParameter_ReadoutControlMode: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Enumeration, PicamConstraintType_Collection, 26);
pub const PicamParameter_ReadoutTimeCalculation: PicamParameter =
    PICAM_PARAMETER(PicamValueType_FloatingPoint, PicamConstraintType_None, 27);
pub const PicamParameter_ReadoutPortCount: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Integer, PicamConstraintType_Collection, 28);
pub const PicamParameter_ReadoutOrientation: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Enumeration, PicamConstraintType_None, 54);
pub const PicamParameter_KineticsWindowHeight: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Integer, PicamConstraintType_Range, 56);
pub const PicamParameter_VerticalShiftRate: PicamParameter =
    PICAM_PARAMETER(PicamValueType_FloatingPoint, PicamConstraintType_Collection, 13);
pub const PicamParameter_Accumulations: PicamParameter =
    PICAM_PARAMETER(PicamValueType_LargeInteger, PicamConstraintType_Range, 92);
pub const PicamParameter_EnableNondestructiveReadout: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Boolean, PicamConstraintType_Collection, 128);
pub const PicamParameter_NondestructiveReadoutPeriod: PicamParameter =
    PICAM_PARAMETER(PicamValueType_FloatingPoint, PicamConstraintType_Range, 129);

// Data Acquisition
pub const PicamParameter_Rois: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Rois, PicamConstraintType_Rois, 37);
pub const PicamParameter_NormalizeOrientation: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Boolean, PicamConstraintType_Collection, 39);
pub const PicamParameter_DisableDataFormatting: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Boolean, PicamConstraintType_Collection, 55);
pub const PicamParameter_ReadoutCount: PicamParameter =
    PICAM_PARAMETER(PicamValueType_LargeInteger, PicamConstraintType_Range, 40);
pub const PicamParameter_ExactReadoutCountMaximum: PicamParameter =
    PICAM_PARAMETER(PicamValueType_LargeInteger, PicamConstraintType_None, 77);
pub const PicamParameter_PhotonDetectionMode: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Enumeration, PicamConstraintType_Collection, 125);
pub const PicamParameter_PhotonDetectionThreshold: PicamParameter =
    PICAM_PARAMETER(PicamValueType_FloatingPoint, PicamConstraintType_Range, 126);
pub const PicamParameter_PixelFormat: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Enumeration, PicamConstraintType_Collection, 41);
pub const PicamParameter_FrameSize: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Integer, PicamConstraintType_None, 42);
pub const PicamParameter_FrameStride: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Integer, PicamConstraintType_None, 43);
pub const PicamParameter_FramesPerReadout: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Integer, PicamConstraintType_None, 44);
pub const PicamParameter_ReadoutStride: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Integer, PicamConstraintType_None, 45);
pub const PicamParameter_PixelBitDepth: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Integer, PicamConstraintType_None, 48);
pub const PicamParameter_ReadoutRateCalculation: PicamParameter =
    PICAM_PARAMETER(PicamValueType_FloatingPoint, PicamConstraintType_None, 50);
pub const PicamParameter_OnlineReadoutRateCalculation: PicamParameter =
    PICAM_PARAMETER(PicamValueType_FloatingPoint, PicamConstraintType_None, 99);
pub const PicamParameter_FrameRateCalculation: PicamParameter =
    PICAM_PARAMETER(PicamValueType_FloatingPoint, PicamConstraintType_None, 51);
pub const PicamParameter_Orientation: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Enumeration, PicamConstraintType_None, 38);
pub const PicamParameter_TimeStamps: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Enumeration, PicamConstraintType_Collection, 68);
pub const PicamParameter_TimeStampResolution: PicamParameter =
    PICAM_PARAMETER(PicamValueType_LargeInteger, PicamConstraintType_Collection, 69);
pub const PicamParameter_TimeStampBitDepth: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Integer, PicamConstraintType_Collection, 70);
pub const PicamParameter_TrackFrames: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Boolean, PicamConstraintType_Collection, 71);
pub const PicamParameter_FrameTrackingBitDepth: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Integer, PicamConstraintType_Collection, 72);
pub const PicamParameter_GateTracking: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Enumeration, PicamConstraintType_Collection, 104);
pub const PicamParameter_GateTrackingBitDepth: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Integer, PicamConstraintType_Collection, 105);
pub const PicamParameter_ModulationTracking: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Enumeration, PicamConstraintType_Collection, 121);
pub const PicamParameter_ModulationTrackingBitDepth: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Integer, PicamConstraintType_Collection, 122);

// Sensor Information
pub const PicamParameter_SensorType: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Enumeration, PicamConstraintType_None, 57);
pub const PicamParameter_CcdCharacteristics: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Enumeration, PicamConstraintType_None, 58);
pub const PicamParameter_SensorActiveWidth: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Integer, PicamConstraintType_None, 59);
pub const PicamParameter_SensorActiveHeight: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Integer, PicamConstraintType_None, 60);
pub const PicamParameter_SensorActiveLeftMargin: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Integer, PicamConstraintType_None, 61);
pub const PicamParameter_SensorActiveTopMargin: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Integer, PicamConstraintType_None, 62);
pub const PicamParameter_SensorActiveRightMargin: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Integer, PicamConstraintType_None, 63);
pub const PicamParameter_SensorActiveBottomMargin: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Integer, PicamConstraintType_None, 64);
pub const PicamParameter_SensorMaskedHeight: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Integer, PicamConstraintType_None, 65);
pub const PicamParameter_SensorMaskedTopMargin: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Integer, PicamConstraintType_None, 66);
pub const PicamParameter_SensorMaskedBottomMargin: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Integer, PicamConstraintType_None, 67);
pub const PicamParameter_SensorSecondaryMaskedHeight: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Integer, PicamConstraintType_None, 49);
pub const PicamParameter_SensorSecondaryActiveHeight: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Integer, PicamConstraintType_None, 74);
pub const PicamParameter_PixelWidth: PicamParameter =
    PICAM_PARAMETER(PicamValueType_FloatingPoint, PicamConstraintType_None, 9);
pub const PicamParameter_PixelHeight: PicamParameter =
    PICAM_PARAMETER(PicamValueType_FloatingPoint, PicamConstraintType_None, 10);
pub const PicamParameter_PixelGapWidth: PicamParameter =
    PICAM_PARAMETER(PicamValueType_FloatingPoint, PicamConstraintType_None, 11);
pub const PicamParameter_PixelGapHeight: PicamParameter =
    PICAM_PARAMETER(PicamValueType_FloatingPoint, PicamConstraintType_None, 12);

// Sensor Layout
pub const PicamParameter_ActiveWidth: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Integer, PicamConstraintType_Range, 1);
pub const PicamParameter_ActiveHeight: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Integer, PicamConstraintType_Range, 2);
pub const PicamParameter_ActiveLeftMargin: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Integer, PicamConstraintType_Range, 3);
pub const PicamParameter_ActiveTopMargin: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Integer, PicamConstraintType_Range, 4);
pub const PicamParameter_ActiveRightMargin: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Integer, PicamConstraintType_Range, 5);
pub const PicamParameter_ActiveBottomMargin: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Integer, PicamConstraintType_Range, 6);
pub const PicamParameter_MaskedHeight: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Integer, PicamConstraintType_Range, 7);
pub const PicamParameter_MaskedTopMargin: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Integer, PicamConstraintType_Range, 8);
pub const PicamParameter_MaskedBottomMargin: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Integer, PicamConstraintType_Range, 73);
pub const PicamParameter_SecondaryMaskedHeight: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Integer, PicamConstraintType_Range, 75);
pub const PicamParameter_SecondaryActiveHeight: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Integer, PicamConstraintType_Range, 76);

// Sensor Cleaning
pub const PicamParameter_CleanSectionFinalHeight: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Integer, PicamConstraintType_Range, 17);
pub const PicamParameter_CleanSectionFinalHeightCount: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Integer, PicamConstraintType_Range, 18);
pub const PicamParameter_CleanSerialRegister: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Boolean, PicamConstraintType_Collection, 19);
pub const PicamParameter_CleanCycleCount: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Integer, PicamConstraintType_Range, 20);
pub const PicamParameter_CleanCycleHeight: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Integer, PicamConstraintType_Range, 21);
pub const PicamParameter_CleanBeforeExposure: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Boolean, PicamConstraintType_Collection, 78);
pub const PicamParameter_CleanUntilTrigger: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Boolean, PicamConstraintType_Collection, 22);
pub const PicamParameter_StopCleaningOnPreTrigger: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Boolean, PicamConstraintType_Collection, 130);

// Sensor Temperature
pub const PicamParameter_SensorTemperatureSetPoint: PicamParameter =
    PICAM_PARAMETER(PicamValueType_FloatingPoint, PicamConstraintType_Range, 14);
pub const PicamParameter_SensorTemperatureReading: PicamParameter =
    PICAM_PARAMETER(PicamValueType_FloatingPoint, PicamConstraintType_None, 15);
pub const PicamParameter_SensorTemperatureStatus: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Enumeration, PicamConstraintType_None, 16);
pub const PicamParameter_DisableCoolingFan: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Boolean, PicamConstraintType_Collection, 29);
pub const PicamParameter_EnableSensorWindowHeater: PicamParameter =
    PICAM_PARAMETER(PicamValueType_Boolean, PicamConstraintType_Collection, 127);

// =============================================================================
// Structures
// =============================================================================

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct PicamCameraID {
    pub model: PicamModel,
    pub computer_interface: PicamComputerInterface,
    pub sensor_name: [pichar; PicamStringSize_SensorName as usize],
    pub serial_number: [pichar; PicamStringSize_SerialNumber as usize],
}

impl Default for PicamCameraID {
    fn default() -> Self {
        Self {
            model: 0,
            computer_interface: 0,
            sensor_name: [0; PicamStringSize_SensorName as usize],
            serial_number: [0; PicamStringSize_SerialNumber as usize],
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct PicamFirmwareDetail {
    pub name: [pichar; PicamStringSize_FirmwareName as usize],
    pub detail: [pichar; PicamStringSize_FirmwareDetail as usize],
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct PicamRoi {
    pub x: piint,
    pub width: piint,
    pub x_binning: piint,
    pub y: piint,
    pub height: piint,
    pub y_binning: piint,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct PicamRois {
    pub roi_array: *mut PicamRoi,
    pub roi_count: piint,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct PicamPulse {
    pub delay: piflt,
    pub width: piflt,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct PicamModulation {
    pub duration: piflt,
    pub frequency: piflt,
    pub phase: piflt,
    pub output_signal_frequency: piflt,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct PicamModulations {
    pub modulation_array: *mut PicamModulation,
    pub modulation_count: piint,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct PicamRangeConstraint {
    pub scope: PicamConstraintScope,
    pub severity: PicamConstraintSeverity,
    pub empty_set: pibln,
    pub minimum: piflt,
    pub maximum: piflt,
    pub increment: piflt,
    pub excluded_values_array: *const piflt,
    pub excluded_values_count: piint,
    pub outlying_values_array: *const piflt,
    pub outlying_values_count: piint,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct PicamCollectionConstraint {
    pub scope: PicamConstraintScope,
    pub severity: PicamConstraintSeverity,
    pub values_array: *const piflt,
    pub values_count: piint,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct PicamAvailableData {
    pub initial_readout: *mut c_void,
    pub readout_count: pi64s,
}

impl Default for PicamAvailableData {
    fn default() -> Self {
        Self {
            initial_readout: std::ptr::null_mut(),
            readout_count: 0,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct PicamAcquisitionStatus {
    pub running: pibln,
    pub errors: PicamAcquisitionErrorsMask,
    pub readout_rate: piflt,
}

// =============================================================================
// Functions
// =============================================================================

const PICAM_SDK_PANIC_MSG: &str = "PICam function called but the picam-sdk feature is not enabled. \
    Enable the picam-sdk feature (or picam_hardware in the picam crate) to use the real library.";

/// Declares one stub per native entry point, each panicking if called, so the
/// workspace links on machines without the vendor library.
macro_rules! picam_functions {
    ($( pub fn $name:ident($($arg:ident: $ty:ty),* $(,)?) -> PicamError; )*) => {
        $(
            #[allow(unused_variables)]
            pub unsafe fn $name($($arg: $ty),*) -> PicamError {
                panic!("{}: {}", stringify!($name), PICAM_SDK_PANIC_MSG);
            }
        )*
    };
}

picam_functions! {
    pub fn Picam_GetVersion(major: *mut piint, minor: *mut piint, distribution: *mut piint, released: *mut piint) -> PicamError;
    pub fn Picam_IsLibraryInitialized(inited: *mut pibln) -> PicamError;
    pub fn Picam_InitializeLibrary() -> PicamError;
    pub fn Picam_UninitializeLibrary() -> PicamError;
    pub fn Picam_DestroyString(s: *const pichar) -> PicamError;
    pub fn Picam_GetEnumerationString(type_: PicamEnumeratedType, value: piint, s: *mut *const pichar) -> PicamError;

    pub fn Picam_DestroyCameraIDs(id_array: *const PicamCameraID) -> PicamError;
    pub fn Picam_GetAvailableCameraIDs(id_array: *mut *const PicamCameraID, id_count: *mut piint) -> PicamError;
    pub fn Picam_GetUnavailableCameraIDs(id_array: *mut *const PicamCameraID, id_count: *mut piint) -> PicamError;
    pub fn Picam_OpenFirstCamera(camera: *mut PicamHandle) -> PicamError;
    pub fn Picam_OpenCamera(id: *const PicamCameraID, camera: *mut PicamHandle) -> PicamError;
    pub fn Picam_CloseCamera(camera: PicamHandle) -> PicamError;
    pub fn Picam_IsCameraConnected(camera: PicamHandle, connected: *mut pibln) -> PicamError;
    pub fn Picam_GetCameraID(camera: PicamHandle, id: *mut PicamCameraID) -> PicamError;
    pub fn Picam_DestroyFirmwareDetails(firmware_array: *const PicamFirmwareDetail) -> PicamError;
    pub fn Picam_GetFirmwareDetails(id: *const PicamCameraID, firmware_array: *mut *const PicamFirmwareDetail, firmware_count: *mut piint) -> PicamError;
    pub fn Picam_DestroyModels(model_array: *const PicamModel) -> PicamError;
    pub fn Picam_GetAvailableDemoCameraModels(model_array: *mut *const PicamModel, model_count: *mut piint) -> PicamError;
    pub fn Picam_ConnectDemoCamera(model: PicamModel, serial_number: *const pichar, id: *mut PicamCameraID) -> PicamError;
    pub fn Picam_DisconnectDemoCamera(id: *const PicamCameraID) -> PicamError;
    pub fn Picam_IsDemoCamera(id: *const PicamCameraID, demo: *mut pibln) -> PicamError;

    pub fn Picam_DestroyParameters(parameter_array: *const PicamParameter) -> PicamError;
    pub fn Picam_GetParameters(camera: PicamHandle, parameter_array: *mut *const PicamParameter, parameter_count: *mut piint) -> PicamError;
    pub fn Picam_DoesParameterExist(camera: PicamHandle, parameter: PicamParameter, exists: *mut pibln) -> PicamError;
    pub fn Picam_IsParameterRelevant(camera: PicamHandle, parameter: PicamParameter, relevant: *mut pibln) -> PicamError;
    pub fn Picam_GetParameterValueType(camera: PicamHandle, parameter: PicamParameter, type_: *mut PicamValueType) -> PicamError;
    pub fn Picam_GetParameterEnumeratedType(camera: PicamHandle, parameter: PicamParameter, type_: *mut PicamEnumeratedType) -> PicamError;
    pub fn Picam_GetParameterValueAccess(camera: PicamHandle, parameter: PicamParameter, access: *mut PicamValueAccess) -> PicamError;
    pub fn Picam_GetParameterConstraintType(camera: PicamHandle, parameter: PicamParameter, type_: *mut PicamConstraintType) -> PicamError;

    pub fn Picam_GetParameterIntegerValue(camera: PicamHandle, parameter: PicamParameter, value: *mut piint) -> PicamError;
    pub fn Picam_SetParameterIntegerValue(camera: PicamHandle, parameter: PicamParameter, value: piint) -> PicamError;
    pub fn Picam_GetParameterLargeIntegerValue(camera: PicamHandle, parameter: PicamParameter, value: *mut pi64s) -> PicamError;
    pub fn Picam_SetParameterLargeIntegerValue(camera: PicamHandle, parameter: PicamParameter, value: pi64s) -> PicamError;
    pub fn Picam_GetParameterFloatingPointValue(camera: PicamHandle, parameter: PicamParameter, value: *mut piflt) -> PicamError;
    pub fn Picam_SetParameterFloatingPointValue(camera: PicamHandle, parameter: PicamParameter, value: piflt) -> PicamError;
    pub fn Picam_ReadParameterFloatingPointValue(camera: PicamHandle, parameter: PicamParameter, value: *mut piflt) -> PicamError;
    pub fn Picam_DestroyRois(rois: *const PicamRois) -> PicamError;
    pub fn Picam_GetParameterRoisValue(camera: PicamHandle, parameter: PicamParameter, value: *mut *const PicamRois) -> PicamError;
    pub fn Picam_SetParameterRoisValue(camera: PicamHandle, parameter: PicamParameter, value: *const PicamRois) -> PicamError;
    pub fn Picam_DestroyPulses(pulse_array: *const PicamPulse) -> PicamError;
    pub fn Picam_GetParameterPulseValue(camera: PicamHandle, parameter: PicamParameter, value: *mut *const PicamPulse) -> PicamError;
    pub fn Picam_SetParameterPulseValue(camera: PicamHandle, parameter: PicamParameter, value: *const PicamPulse) -> PicamError;
    pub fn Picam_DestroyModulations(modulations: *const PicamModulations) -> PicamError;
    pub fn Picam_GetParameterModulationsValue(camera: PicamHandle, parameter: PicamParameter, value: *mut *const PicamModulations) -> PicamError;
    pub fn Picam_SetParameterModulationsValue(camera: PicamHandle, parameter: PicamParameter, value: *const PicamModulations) -> PicamError;

    pub fn Picam_DestroyRangeConstraints(constraint_array: *const PicamRangeConstraint) -> PicamError;
    pub fn Picam_GetParameterRangeConstraint(camera: PicamHandle, parameter: PicamParameter, category: PicamConstraintCategory, constraint: *mut *const PicamRangeConstraint) -> PicamError;
    pub fn Picam_DestroyCollectionConstraints(constraint_array: *const PicamCollectionConstraint) -> PicamError;
    pub fn Picam_GetParameterCollectionConstraint(camera: PicamHandle, parameter: PicamParameter, category: PicamConstraintCategory, constraint: *mut *const PicamCollectionConstraint) -> PicamError;

    pub fn Picam_AreParametersCommitted(camera: PicamHandle, committed: *mut pibln) -> PicamError;
    pub fn Picam_CommitParameters(camera: PicamHandle, failed_parameter_array: *mut *const PicamParameter, failed_parameter_count: *mut piint) -> PicamError;

    pub fn Picam_Acquire(camera: PicamHandle, readout_count: pi64s, readout_time_out: piint, available: *mut PicamAvailableData, errors: *mut PicamAcquisitionErrorsMask) -> PicamError;
    pub fn Picam_StartAcquisition(camera: PicamHandle) -> PicamError;
    pub fn Picam_StopAcquisition(camera: PicamHandle) -> PicamError;
    pub fn Picam_IsAcquisitionRunning(camera: PicamHandle, running: *mut pibln) -> PicamError;
    pub fn Picam_WaitForAcquisitionUpdate(camera: PicamHandle, readout_time_out: piint, available: *mut PicamAvailableData, status: *mut PicamAcquisitionStatus) -> PicamError;
}

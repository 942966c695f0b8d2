//! # PICam Rust Bindings
//!
//! Safe wrapper around the Princeton Instruments PICam SDK. The raw
//! declarations live in `picam-sys`; this crate adds the calling discipline on
//! top of them:
//!
//! - every native status code passes through one check and becomes a
//!   [`PicamError`];
//! - every SDK-owned allocation is destroyed with its paired destroy call, on
//!   success and failure paths alike;
//! - library initialization, open cameras and running acquisitions are scoped
//!   objects that release themselves on drop;
//! - parameters are read and written through a [`ParameterValue`] sum type
//!   chosen by the value type the camera reports at runtime.
//!
//! ## Crate Structure
//!
//! - **`api`**: The [`PicamApi`] trait, one method per native entry point, and
//!   the `NativeApi` implementation backed by `picam-sys`.
//! - **`library`**: [`Library`] (initialization state, enumeration strings) and
//!   the scoped [`Session`].
//! - **`camera`**: [`Camera`] handle, typed parameter access, commit and
//!   acquisition lifecycle.
//! - **`data`**: [`AvailableData`] and the zero-copy [`get_data`] view.
//! - **`enums`**: Symbolic name lookup for PICam enumerations.
//! - **`error`**: [`PicamError`] and [`NativeError`].
//! - **`config`**: [`PicamConfig`] loaded with figment.
//! - **`mock`**: [`MockApi`], an in-memory demo camera (feature `mock`).
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use picam::{Library, MockApi, Parameter, ParameterValue};
//!
//! # fn main() -> picam::Result<()> {
//! let library = Library::new(Arc::new(MockApi::with_demo_camera()));
//! let session = library.session()?;
//! let mut camera = session.open_first_camera()?;
//!
//! camera.set(Parameter::EXPOSURE_TIME, ParameterValue::FloatingPoint(20.0))?;
//! camera.commit()?;
//!
//! let stride = camera.readout_stride()?;
//! let (data, _errors) = camera.acquire(1, picam::INFINITE_TIMEOUT)?;
//! let frames = picam::get_data(&data, stride)?;
//! println!("acquired {} readouts", frames.nrows());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod camera;
pub mod config;
pub mod data;
pub mod enums;
pub mod error;
pub mod library;
#[cfg(feature = "mock")]
pub mod mock;
pub mod types;

mod alloc;

pub use picam_sys as sys;

pub use crate::api::PicamApi;
#[cfg(feature = "picam_hardware")]
pub use crate::api::NativeApi;
pub use crate::camera::{Acquisition, Camera};
pub use crate::config::{AcquisitionConfig, CameraSelection, PicamConfig};
pub use crate::data::{get_data, AvailableData, INFINITE_TIMEOUT};
pub use crate::error::{NativeError, PicamError, Result};
pub use crate::library::{EnumStrings, Library, Session};
#[cfg(feature = "mock")]
pub use crate::mock::MockApi;
pub use crate::types::{
    AcquisitionErrors, AcquisitionStatus, CameraId, ConstraintCategory, ConstraintType,
    EnumeratedType, FirmwareDetail, Model, Modulation, Parameter, ParameterValue, Pulse,
    RangeConstraint, Roi, ValueAccess, ValueType, Version,
};

//! Error types for PICam operations.
//!
//! Every native status code passes through [`check`]. A non-success code
//! becomes a [`NativeError`], which can describe itself on demand through the
//! SDK's enumeration strings without that lookup ever raising a second error.

use std::fmt;
use std::sync::{Arc, Weak};

use once_cell::sync::OnceCell;
use picam_sys as sys;
use sys::piint;
use thiserror::Error;
use tracing::debug;

use crate::api::PicamApi;
use crate::enums;
use crate::types::{EnumeratedType, Parameter};

/// Result type alias for PICam operations.
pub type Result<T> = std::result::Result<T, PicamError>;

/// Returned by [`NativeError::describe`] when the description cannot be resolved.
pub const DESCRIPTION_FALLBACK: &str = "<failed to retrieve error description>";

/// Errors that can occur when working with the PICam SDK.
#[derive(Error, Debug)]
pub enum PicamError {
    /// Non-success status code from a native call
    #[error(transparent)]
    Native(#[from] NativeError),

    /// Library lifecycle misuse (e.g. initializing twice)
    #[error("Invalid state: {0}")]
    State(String),

    /// Locally detected contract violation (unknown value type, empty data)
    #[error("Invalid value: {0}")]
    Value(String),

    /// Symbolic name that does not resolve
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl PicamError {
    /// Native status code, if this is a native error.
    pub fn code(&self) -> Option<piint> {
        match self {
            Self::Native(e) => Some(e.code()),
            _ => None,
        }
    }

    /// Parameters rejected by a failed commit; empty for every other error.
    pub fn failed_parameters(&self) -> &[Parameter] {
        match self {
            Self::Native(e) => e.failed_parameters(),
            _ => &[],
        }
    }
}

/// A non-success status code returned by the native SDK.
pub struct NativeError {
    code: piint,
    failed_parameters: Vec<Parameter>,
    api: Weak<dyn PicamApi>,
    description: OnceCell<String>,
}

impl NativeError {
    /// Wrap `code`, or return `None` if it is `PicamError_None`.
    pub fn from_code(code: piint, api: &Arc<dyn PicamApi>) -> Option<Self> {
        if code == sys::PicamError_None {
            return None;
        }
        Some(Self {
            code,
            failed_parameters: Vec::new(),
            api: Arc::downgrade(api),
            description: OnceCell::new(),
        })
    }

    /// Raw `PicamError` value.
    pub fn code(&self) -> piint {
        self.code
    }

    /// Symbolic name of the code from the static table, e.g. `PicamError_InvalidHandle`.
    pub fn name(&self) -> Option<&'static str> {
        enums::name_of("PicamError_", self.code)
    }

    /// Parameters the SDK rejected during `commit`.
    pub fn failed_parameters(&self) -> &[Parameter] {
        &self.failed_parameters
    }

    pub(crate) fn with_failed_parameters(mut self, failed: Vec<Parameter>) -> Self {
        self.failed_parameters = failed;
        self
    }

    /// Resolve the SDK's description of this error.
    ///
    /// Never fails: if the native layer is gone, the library is not
    /// initialized, or the lookup reports any error, this returns
    /// [`DESCRIPTION_FALLBACK`]. Only a successful lookup is cached.
    pub fn describe(&self) -> String {
        if let Some(text) = self.description.get() {
            return text.clone();
        }
        let Some(api) = self.api.upgrade() else {
            debug!(code = self.code, "native layer dropped, no error description");
            return DESCRIPTION_FALLBACK.to_string();
        };
        match crate::library::enumeration_string(&api, EnumeratedType::ERROR, self.code) {
            Ok(text) => self.description.get_or_init(|| text).clone(),
            Err(e) => {
                debug!(code = self.code, error = %e, "could not resolve error description");
                DESCRIPTION_FALLBACK.to_string()
            }
        }
    }
}

impl fmt::Debug for NativeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeError")
            .field("code", &self.code)
            .field("name", &self.name())
            .field("failed_parameters", &self.failed_parameters)
            .finish()
    }
}

impl fmt::Display for NativeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PICam error {}", self.code)?;
        if let Some(name) = self.name() {
            write!(f, " ({})", name)?;
        }
        if !self.failed_parameters.is_empty() {
            let names: Vec<String> = self.failed_parameters.iter().map(|p| p.to_string()).collect();
            write!(f, "; rejected parameters: {}", names.join(", "))?;
        }
        Ok(())
    }
}

impl std::error::Error for NativeError {}

/// Convert a native status code into a `Result`.
pub(crate) fn check(api: &Arc<dyn PicamApi>, code: piint) -> Result<()> {
    match NativeError::from_code(code, api) {
        None => Ok(()),
        Some(e) => Err(e.into()),
    }
}

#[cfg(all(test, feature = "mock"))]
mod tests {
    use super::*;
    use crate::mock::MockApi;

    fn api() -> Arc<dyn PicamApi> {
        Arc::new(MockApi::with_demo_camera())
    }

    #[test]
    fn test_success_is_never_wrapped() {
        let api = api();
        assert!(NativeError::from_code(sys::PicamError_None, &api).is_none());
        assert!(check(&api, sys::PicamError_None).is_ok());
    }

    #[test]
    fn test_check_surfaces_code() {
        let api = api();
        let err = check(&api, sys::PicamError_InvalidHandle).unwrap_err();
        assert_eq!(err.code(), Some(sys::PicamError_InvalidHandle));
        assert!(err.failed_parameters().is_empty());
        assert!(err.to_string().contains("PicamError_InvalidHandle"));
    }

    #[test]
    fn test_describe_falls_back_when_uninitialized() {
        let api = api();
        let err = NativeError::from_code(sys::PicamError_TimeOutOccurred, &api).unwrap();
        assert_eq!(err.describe(), DESCRIPTION_FALLBACK);
    }

    #[test]
    fn test_describe_resolves_when_initialized() {
        let api = api();
        assert_eq!(api.initialize_library(), sys::PicamError_None);
        let err = NativeError::from_code(sys::PicamError_TimeOutOccurred, &api).unwrap();
        assert_eq!(err.describe(), "TimeOutOccurred");
        // Cached after the first success.
        assert_eq!(api.uninitialize_library(), sys::PicamError_None);
        assert_eq!(err.describe(), "TimeOutOccurred");
    }

    #[test]
    fn test_describe_after_native_layer_dropped() {
        let api = api();
        let err = NativeError::from_code(sys::PicamError_UnexpectedError, &api).unwrap();
        drop(api);
        assert_eq!(err.describe(), DESCRIPTION_FALLBACK);
    }

    #[test]
    fn test_unknown_code_display() {
        let api = api();
        let err = NativeError::from_code(9999, &api).unwrap();
        assert_eq!(err.to_string(), "PICam error 9999");
        assert_eq!(err.describe(), DESCRIPTION_FALLBACK);
    }
}

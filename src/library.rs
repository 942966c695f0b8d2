//! Library initialization state and the scoped [`Session`].
//!
//! The SDK's "initialized" flag is process-wide and may be owned by someone
//! else (another binding, a host application). A [`Session`] therefore refuses
//! to start when the flag is already set, and uninitializes on every exit path
//! once it has started.

use std::ffi::CString;
use std::iter::FusedIterator;
use std::ptr;
use std::sync::Arc;

use parking_lot::Mutex;
use picam_sys as sys;
use sys::{pibln, pichar, piint, PicamCameraID, PicamModel};
use tracing::{debug, warn};

use crate::alloc::NativeAlloc;
use crate::api::PicamApi;
use crate::camera::Camera;
use crate::config::{CameraSelection, PicamConfig};
use crate::enums;
use crate::error::{check, PicamError, Result};
use crate::types::{CameraId, EnumeratedType, Model, Version};

/// Resolve `value` of enumerated type `ty` to the SDK's string.
///
/// The native string is decoded exactly once and destroyed afterwards, on the
/// failure path as well.
pub(crate) fn enumeration_string(
    api: &Arc<dyn PicamApi>,
    ty: EnumeratedType,
    value: piint,
) -> Result<String> {
    let mut s: *const pichar = ptr::null();
    let code = api.get_enumeration_string(ty.0, value, &mut s);
    let alloc = NativeAlloc::new(api, s, |api, p| unsafe { api.destroy_string(p) });
    check(api, code)?;
    // SAFETY: success guarantees a NUL-terminated string owned by the SDK.
    let text = unsafe { alloc.to_string_lossy() };
    alloc.release()?;
    Ok(text)
}

/// Entry point to the SDK.
///
/// Wraps one [`PicamApi`] implementation. Use [`Library::native`] for the
/// vendor library, or [`Library::new`] with a
/// [`MockApi`](crate::MockApi) in tests.
pub struct Library {
    api: Arc<dyn PicamApi>,
    /// Serializes the check-then-initialize sequence in [`Library::session`].
    init_lock: Mutex<()>,
}

impl std::fmt::Debug for Library {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Library").finish_non_exhaustive()
    }
}

impl Library {
    /// Wrap an API implementation.
    pub fn new(api: Arc<dyn PicamApi>) -> Self {
        Self {
            api,
            init_lock: Mutex::new(()),
        }
    }

    /// Process-wide handle to the vendor library.
    #[cfg(feature = "picam_hardware")]
    pub fn native() -> &'static Library {
        static NATIVE: once_cell::sync::Lazy<Library> =
            once_cell::sync::Lazy::new(|| Library::new(Arc::new(crate::api::NativeApi)));
        &NATIVE
    }

    /// The underlying native API.
    pub fn api(&self) -> &Arc<dyn PicamApi> {
        &self.api
    }

    /// Query the SDK's initialized flag. No side effects.
    pub fn is_initialized(&self) -> Result<bool> {
        let mut inited: pibln = 0;
        check(&self.api, self.api.is_library_initialized(&mut inited))?;
        Ok(inited != 0)
    }

    /// Initialize the SDK unconditionally. Prefer [`Library::session`].
    ///
    /// # Safety
    /// The caller owns the matching [`Library::uninitialize`]. No [`Session`]
    /// may be open on this library at the time of that call.
    pub unsafe fn initialize(&self) -> Result<()> {
        self.initialize_native()
    }

    /// Uninitialize the SDK unconditionally. Prefer [`Library::session`].
    ///
    /// # Safety
    /// Uninitializing closes every camera and frees every acquisition buffer
    /// the SDK handed out. No [`Session`], and so no [`Camera`] or
    /// [`AvailableData`](crate::AvailableData), may be alive on this library.
    pub unsafe fn uninitialize(&self) -> Result<()> {
        self.uninitialize_native()
    }

    fn initialize_native(&self) -> Result<()> {
        debug!("Initializing PICam library");
        check(&self.api, self.api.initialize_library())
    }

    fn uninitialize_native(&self) -> Result<()> {
        debug!("Uninitializing PICam library");
        check(&self.api, self.api.uninitialize_library())
    }

    /// Initialize the SDK for the lifetime of the returned [`Session`].
    ///
    /// # Errors
    ///
    /// [`PicamError::State`] if the library is already initialized; no
    /// initialization is attempted in that case.
    pub fn session(&self) -> Result<Session<'_>> {
        let _guard = self.init_lock.lock();
        if self.is_initialized()? {
            return Err(PicamError::State(
                "PICam library already initialized elsewhere".to_string(),
            ));
        }
        self.initialize_native()?;
        Ok(Session {
            library: self,
            ended: false,
        })
    }

    /// SDK version. Does not require initialization.
    pub fn version(&self) -> Result<Version> {
        let (mut major, mut minor, mut distribution, mut released) = (0, 0, 0, 0);
        check(
            &self.api,
            self.api
                .get_version(&mut major, &mut minor, &mut distribution, &mut released),
        )?;
        Ok(Version {
            major,
            minor,
            distribution,
            released,
        })
    }

    /// SDK string for one enumeration value.
    pub fn get_string(&self, ty: EnumeratedType, value: piint) -> Result<String> {
        enumeration_string(&self.api, ty, value)
    }

    /// SDK strings for every bit set in `mask`, lowest bit first.
    ///
    /// Each item is resolved lazily as the iterator advances.
    pub fn get_strings(&self, ty: EnumeratedType, mask: u32) -> EnumStrings<'_> {
        EnumStrings {
            library: self,
            ty,
            remaining: mask,
        }
    }

    /// Numeric value of a symbolic name such as `PicamModel_Pixis100F`.
    pub fn get_enum(&self, name: &str) -> Result<piint> {
        enums::lookup(name)
    }
}

/// Iterator over the strings of the bits set in a mask.
///
/// See [`Library::get_strings`].
#[derive(Debug)]
pub struct EnumStrings<'l> {
    library: &'l Library,
    ty: EnumeratedType,
    remaining: u32,
}

impl Iterator for EnumStrings<'_> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let bit = self.remaining & self.remaining.wrapping_neg();
        self.remaining &= !bit;
        Some(self.library.get_string(self.ty, bit as piint))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for EnumStrings<'_> {}
impl FusedIterator for EnumStrings<'_> {}

/// An initialized SDK.
///
/// Dropping the session uninitializes the library; failures there are logged.
/// Use [`Session::end`] to observe them instead. Cameras borrow the session, so
/// none can outlive it.
#[derive(Debug)]
pub struct Session<'l> {
    library: &'l Library,
    ended: bool,
}

impl<'l> Session<'l> {
    /// Uninitialize now, propagating failure.
    pub fn end(mut self) -> Result<()> {
        self.ended = true;
        self.library.uninitialize_native()
    }

    /// The library this session initialized.
    pub fn library(&self) -> &'l Library {
        self.library
    }

    /// See [`Library::is_initialized`].
    pub fn is_initialized(&self) -> Result<bool> {
        self.library.is_initialized()
    }

    /// See [`Library::version`].
    pub fn version(&self) -> Result<Version> {
        self.library.version()
    }

    /// See [`Library::get_string`].
    pub fn get_string(&self, ty: EnumeratedType, value: piint) -> Result<String> {
        self.library.get_string(ty, value)
    }

    /// See [`Library::get_strings`].
    pub fn get_strings(&self, ty: EnumeratedType, mask: u32) -> EnumStrings<'l> {
        self.library.get_strings(ty, mask)
    }

    /// See [`Library::get_enum`].
    pub fn get_enum(&self, name: &str) -> Result<piint> {
        self.library.get_enum(name)
    }

    fn camera_ids(
        &self,
        get: fn(&dyn PicamApi, &mut *const PicamCameraID, &mut piint) -> piint,
    ) -> Result<Vec<CameraId>> {
        let api = &self.library.api;
        let mut ids: *const PicamCameraID = ptr::null();
        let mut count: piint = 0;
        let code = get(api.as_ref(), &mut ids, &mut count);
        let alloc = NativeAlloc::new(api, ids, |api, p| unsafe { api.destroy_camera_ids(p) });
        check(api, code)?;
        // SAFETY: success guarantees `count` IDs at `ids`.
        let out = unsafe { alloc.as_slice(count) }
            .iter()
            .map(CameraId::from_raw)
            .collect();
        alloc.release()?;
        Ok(out)
    }

    /// Cameras that can be opened.
    pub fn available_camera_ids(&self) -> Result<Vec<CameraId>> {
        self.camera_ids(|api, ids, count| api.get_available_camera_ids(ids, count))
    }

    /// Cameras that are known but cannot currently be opened.
    pub fn unavailable_camera_ids(&self) -> Result<Vec<CameraId>> {
        self.camera_ids(|api, ids, count| api.get_unavailable_camera_ids(ids, count))
    }

    /// Models that [`Session::connect_demo_camera`] accepts.
    pub fn available_demo_camera_models(&self) -> Result<Vec<Model>> {
        let api = &self.library.api;
        let mut models: *const PicamModel = ptr::null();
        let mut count: piint = 0;
        let code = api.get_available_demo_camera_models(&mut models, &mut count);
        let alloc = NativeAlloc::new(api, models, |api, p| unsafe { api.destroy_models(p) });
        check(api, code)?;
        // SAFETY: success guarantees `count` models.
        let out = unsafe { alloc.as_slice(count) }
            .iter()
            .map(|&m| Model(m))
            .collect();
        alloc.release()?;
        Ok(out)
    }

    /// Create a software-simulated camera.
    pub fn connect_demo_camera(&self, model: Model, serial_number: &str) -> Result<CameraId> {
        let serial = CString::new(serial_number)
            .map_err(|_| PicamError::Value("serial number contains NUL".to_string()))?;
        let api = &self.library.api;
        let mut id = PicamCameraID::default();
        debug!(model = model.0, serial = serial_number, "Connecting demo camera");
        check(api, api.connect_demo_camera(model.0, &serial, &mut id))?;
        Ok(CameraId::from_raw(&id))
    }

    /// Remove a camera created by [`Session::connect_demo_camera`].
    pub fn disconnect_demo_camera(&self, id: &CameraId) -> Result<()> {
        let api = &self.library.api;
        check(api, api.disconnect_demo_camera(&id.to_raw()))
    }

    /// Whether `id` names a demo camera.
    pub fn is_demo_camera(&self, id: &CameraId) -> Result<bool> {
        let api = &self.library.api;
        let mut demo: pibln = 0;
        check(api, api.is_demo_camera(&id.to_raw(), &mut demo))?;
        Ok(demo != 0)
    }

    /// Open the first available camera.
    pub fn open_first_camera(&self) -> Result<Camera<'_>> {
        Camera::open_first(&self.library.api)
    }

    /// Open the camera identified by `id`.
    pub fn open_camera(&self, id: &CameraId) -> Result<Camera<'_>> {
        Camera::open(&self.library.api, id)
    }

    /// Open the camera selected by `config`, connecting a demo camera if needed.
    pub fn open_configured(&self, config: &PicamConfig) -> Result<Camera<'_>> {
        match &config.camera {
            CameraSelection::First => self.open_first_camera(),
            CameraSelection::Demo { model, serial } => {
                let model = Model(resolve_model(model)?);
                let existing = self
                    .available_camera_ids()?
                    .into_iter()
                    .find(|id| id.model == model && id.serial_number == *serial);
                let id = match existing {
                    Some(id) => id,
                    None => self.connect_demo_camera(model, serial)?,
                };
                self.open_camera(&id)
            }
            CameraSelection::Serial { serial } => {
                let id = self
                    .available_camera_ids()?
                    .into_iter()
                    .find(|id| id.serial_number == *serial)
                    .ok_or_else(|| {
                        PicamError::NotFound(format!("no available camera with serial {}", serial))
                    })?;
                self.open_camera(&id)
            }
        }
    }
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        if self.ended {
            return;
        }
        if let Err(e) = self.library.uninitialize_native() {
            warn!(error = %e, "Failed to uninitialize PICam library");
        }
    }
}

/// Accepts `Pixis100F` or `PicamModel_Pixis100F`.
pub(crate) fn resolve_model(name: &str) -> Result<PicamModel> {
    if name.starts_with("PicamModel_") {
        enums::lookup(name)
    } else {
        enums::lookup(&format!("PicamModel_{}", name))
    }
}

#[cfg(all(test, feature = "mock"))]
mod tests {
    use super::*;
    use crate::mock::MockApi;

    fn library() -> (Arc<MockApi>, Library) {
        let mock = Arc::new(MockApi::with_demo_camera());
        let library = Library::new(mock.clone());
        (mock, library)
    }

    #[test]
    fn test_session_initializes_and_uninitializes() {
        let (_mock, library) = library();
        assert!(!library.is_initialized().unwrap());
        {
            let _session = library.session().unwrap();
            assert!(library.is_initialized().unwrap());
        }
        assert!(!library.is_initialized().unwrap());
    }

    #[test]
    fn test_session_refuses_when_already_initialized() {
        let (mock, library) = library();
        unsafe { library.initialize() }.unwrap();
        mock.clear_calls();

        let err = library.session().unwrap_err();
        assert!(matches!(err, PicamError::State(_)));
        assert_eq!(mock.call_count("Picam_InitializeLibrary"), 0);
        assert_eq!(mock.call_count("Picam_UninitializeLibrary"), 0);
        // The foreign initialization is left alone.
        assert!(library.is_initialized().unwrap());
    }

    fn open_then_fail(library: &Library) -> Result<()> {
        let session = library.session()?;
        let _camera = session.open_first_camera()?;
        session.connect_demo_camera(Model(-1), "bad")?;
        Ok(())
    }

    #[test]
    fn test_session_uninitializes_on_early_return() {
        let (mock, library) = library();
        let err = open_then_fail(&library).unwrap_err();
        assert_eq!(err.code(), Some(sys::PicamError_InvalidDemoModel));
        assert!(!library.is_initialized().unwrap());
        assert_eq!(mock.call_count("Picam_CloseCamera"), 1);
        assert_eq!(mock.call_count("Picam_UninitializeLibrary"), 1);
    }

    #[test]
    fn test_session_uninitializes_on_panic() {
        let (mock, library) = library();
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let session = library.session().unwrap();
            assert!(session.is_initialized().unwrap());
            panic!("acquisition aborted");
        }));
        assert!(outcome.is_err());
        assert!(!library.is_initialized().unwrap());
        assert_eq!(mock.call_count("Picam_UninitializeLibrary"), 1);
    }

    #[test]
    fn test_end_propagates_uninitialize_failure() {
        let (mock, library) = library();
        let session = library.session().unwrap();
        mock.inject_error("Picam_UninitializeLibrary", sys::PicamError_UnexpectedError);
        let err = session.end().unwrap_err();
        assert_eq!(err.code(), Some(sys::PicamError_UnexpectedError));
    }

    #[test]
    fn test_get_strings_order_and_count() {
        let (_mock, library) = library();
        let session = library.session().unwrap();
        let strings: Vec<String> = session
            .get_strings(EnumeratedType::ACQUISITION_ERRORS_MASK, 0x1 | 0x4 | 0x10)
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(strings, vec!["DataLost", "DataNotArriving", "CameraFaulted"]);
        assert_eq!(
            session
                .get_strings(EnumeratedType::ACQUISITION_ERRORS_MASK, 0)
                .count(),
            0
        );
    }

    #[test]
    fn test_get_string_destroys_allocation() {
        let (mock, library) = library();
        let session = library.session().unwrap();
        let s = session
            .get_string(EnumeratedType::MODEL, sys::PicamModel_Pixis100F)
            .unwrap();
        assert_eq!(s, "Pixis100F");
        assert_eq!(mock.outstanding_allocations(), 0);
        assert_eq!(mock.destroy_count("Picam_DestroyString"), 1);
    }

    #[test]
    fn test_resolve_model_accepts_short_and_full_names() {
        assert_eq!(resolve_model("Pixis100F").unwrap(), sys::PicamModel_Pixis100F);
        assert_eq!(
            resolve_model("PicamModel_ProEM512B").unwrap(),
            sys::PicamModel_ProEM512B
        );
        assert!(resolve_model("Nikon").is_err());
    }
}

//! RAII guard for memory the SDK hands out.
//!
//! A guard is created right after the native call that produced the pointer and
//! before that call's status is checked, so the paired destroy call runs on the
//! failure path too. The SDK accepts null in every destroy function.

use std::ffi::CStr;
use std::sync::Arc;

use picam_sys::{pichar, piint};
use tracing::warn;

use crate::api::PicamApi;
use crate::error::{check, Result};

pub(crate) type Destroy<T> = fn(&dyn PicamApi, *const T) -> piint;

pub(crate) struct NativeAlloc<'a, T> {
    api: &'a Arc<dyn PicamApi>,
    ptr: *const T,
    destroy: Destroy<T>,
    released: bool,
}

impl<'a, T> NativeAlloc<'a, T> {
    pub(crate) fn new(api: &'a Arc<dyn PicamApi>, ptr: *const T, destroy: Destroy<T>) -> Self {
        Self {
            api,
            ptr,
            destroy,
            released: false,
        }
    }

    /// The guarded value, or `None` if the SDK returned null.
    ///
    /// # Safety
    /// The pointer must reference a valid `T` (guaranteed by the producing call
    /// having returned success).
    pub(crate) unsafe fn get(&self) -> Option<&T> {
        self.ptr.as_ref()
    }

    /// View the allocation as `count` contiguous elements.
    ///
    /// # Safety
    /// The pointer must reference at least `count` valid elements.
    pub(crate) unsafe fn as_slice(&self, count: piint) -> &[T] {
        raw_slice(self.ptr, count)
    }

    /// Destroy now and surface a failing destroy status.
    pub(crate) fn release(mut self) -> Result<()> {
        self.released = true;
        let code = (self.destroy)(self.api.as_ref(), self.ptr);
        check(self.api, code)
    }
}

impl<'a> NativeAlloc<'a, pichar> {
    /// Decode the guarded C string. Read once, before destruction.
    ///
    /// # Safety
    /// The pointer must be null or reference a NUL-terminated string.
    pub(crate) unsafe fn to_string_lossy(&self) -> String {
        if self.ptr.is_null() {
            return String::new();
        }
        CStr::from_ptr(self.ptr).to_string_lossy().into_owned()
    }
}

/// Borrow a native `(array, count)` pair. Null or non-positive counts give an empty slice.
///
/// # Safety
/// A non-null `ptr` must reference at least `count` valid elements for `'b`.
pub(crate) unsafe fn raw_slice<'b, T>(ptr: *const T, count: piint) -> &'b [T] {
    match usize::try_from(count) {
        Ok(n) if n > 0 && !ptr.is_null() => std::slice::from_raw_parts(ptr, n),
        _ => &[],
    }
}

impl<T> Drop for NativeAlloc<'_, T> {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        let code = (self.destroy)(self.api.as_ref(), self.ptr);
        if code != picam_sys::PicamError_None {
            warn!(code, "failed to destroy SDK allocation");
        }
    }
}

#[cfg(all(test, feature = "mock"))]
mod tests {
    use super::*;
    use crate::mock::MockApi;
    use picam_sys as sys;

    #[test]
    fn test_drop_destroys_on_error_path() {
        let mock = Arc::new(MockApi::with_demo_camera());
        let api: Arc<dyn PicamApi> = mock.clone();
        assert_eq!(api.initialize_library(), sys::PicamError_None);

        let mut s: *const pichar = std::ptr::null();
        assert_eq!(
            api.get_enumeration_string(sys::PicamEnumeratedType_Error, 0, &mut s),
            sys::PicamError_None
        );
        assert_eq!(mock.outstanding_allocations(), 1);
        {
            let _guard = NativeAlloc::new(&api, s, |api, p| unsafe { api.destroy_string(p) });
        }
        assert_eq!(mock.outstanding_allocations(), 0);
        assert_eq!(mock.destroy_count("Picam_DestroyString"), 1);
    }

    #[test]
    fn test_release_reports_destroy_failure() {
        let mock = Arc::new(MockApi::with_demo_camera());
        let api: Arc<dyn PicamApi> = mock.clone();
        mock.inject_error("Picam_DestroyString", sys::PicamError_InvalidPointer);

        let guard = NativeAlloc::new(&api, std::ptr::null(), |api, p: *const pichar| unsafe {
            api.destroy_string(p)
        });
        let err = guard.release().unwrap_err();
        assert_eq!(err.code(), Some(sys::PicamError_InvalidPointer));
    }
}

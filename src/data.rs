//! Acquired data and the zero-copy readout view.

use std::ffi::c_void;
use std::marker::PhantomData;

use ndarray::ArrayView2;
use picam_sys::PicamAvailableData;

use crate::error::{PicamError, Result};

/// Timeout value that blocks until the acquisition completes.
pub const INFINITE_TIMEOUT: i32 = -1;

/// Readouts returned by an acquisition call.
///
/// The memory belongs to the SDK and is reused by the next acquisition call on
/// the same camera. The lifetime ties this value to the camera borrow, so the
/// next call cannot happen while it is alive. Copy what you need to keep.
#[derive(Debug, Clone, Copy)]
pub struct AvailableData<'a> {
    raw: PicamAvailableData,
    readout_stride: usize,
    _buffer: PhantomData<&'a [u8]>,
}

impl<'a> AvailableData<'a> {
    /// Wrap a raw descriptor.
    ///
    /// # Safety
    /// A non-null `raw.initial_readout` must point at `raw.readout_count`
    /// readouts of `readout_stride` bytes each, valid and unmodified for `'a`.
    pub unsafe fn from_raw(raw: PicamAvailableData, readout_stride: usize) -> Self {
        Self {
            raw,
            readout_stride,
            _buffer: PhantomData,
        }
    }

    /// Number of readouts in the buffer.
    pub fn readout_count(&self) -> i64 {
        self.raw.readout_count
    }

    /// Bytes per readout, as reported by the camera when the data was produced.
    pub fn readout_stride(&self) -> usize {
        self.readout_stride
    }

    /// Address of the first readout.
    pub fn initial_readout(&self) -> *const c_void {
        self.raw.initial_readout
    }

    /// True if there is nothing to read.
    pub fn is_empty(&self) -> bool {
        self.raw.initial_readout.is_null() || self.raw.readout_count <= 0
    }
}

/// View the readouts as a `(readout_count, readout_stride)` byte array.
///
/// Nothing is copied; the view has the lifetime of `data`. Reinterpret rows
/// according to the camera's pixel format.
///
/// # Errors
///
/// [`PicamError::Value`] if `data` is empty, `readout_stride` is zero or
/// larger than [`AvailableData::readout_stride`], or the buffer size overflows.
pub fn get_data<'a>(data: &AvailableData<'a>, readout_stride: usize) -> Result<ArrayView2<'a, u8>> {
    if data.is_empty() {
        return Err(PicamError::Value("empty data".to_string()));
    }
    if readout_stride == 0 {
        return Err(PicamError::Value("readout stride must be positive".to_string()));
    }
    if readout_stride > data.readout_stride() {
        return Err(PicamError::Value(format!(
            "readout stride {} exceeds the buffer stride {}",
            readout_stride,
            data.readout_stride()
        )));
    }
    let rows = usize::try_from(data.readout_count())
        .map_err(|_| PicamError::Value("readout count out of range".to_string()))?;
    let len = rows
        .checked_mul(readout_stride)
        .filter(|&len| len <= isize::MAX as usize)
        .ok_or_else(|| PicamError::Value("acquisition buffer size overflows".to_string()))?;
    tracing::trace!(rows, readout_stride, len, "Viewing acquisition buffer");
    // SAFETY: `AvailableData::from_raw` guarantees `rows * data.readout_stride()`
    // bytes at `initial_readout` for `'a`; `len` is no larger and fits in isize.
    let view = unsafe {
        ArrayView2::from_shape_ptr((rows, readout_stride), data.initial_readout() as *const u8)
    };
    Ok(view)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(buffer: &mut [u8], readouts: i64) -> PicamAvailableData {
        PicamAvailableData {
            initial_readout: buffer.as_mut_ptr().cast(),
            readout_count: readouts,
        }
    }

    #[test]
    fn test_view_shape_and_contents() {
        let mut buffer: Vec<u8> = (0..24).collect();
        let data = unsafe { AvailableData::from_raw(descriptor(&mut buffer, 3), 8) };
        let view = get_data(&data, 8).unwrap();
        assert_eq!(view.dim(), (3, 8));
        assert_eq!(view[[0, 0]], 0);
        assert_eq!(view[[1, 0]], 8);
        assert_eq!(view[[2, 7]], 23);
    }

    #[test]
    fn test_empty_data_rejected() {
        let null = unsafe { AvailableData::from_raw(PicamAvailableData::default(), 8) };
        assert!(matches!(get_data(&null, 8), Err(PicamError::Value(msg)) if msg == "empty data"));

        let mut buffer = vec![0u8; 8];
        let zero = unsafe { AvailableData::from_raw(descriptor(&mut buffer, 0), 8) };
        assert!(matches!(get_data(&zero, 8), Err(PicamError::Value(msg)) if msg == "empty data"));

        let negative = unsafe { AvailableData::from_raw(descriptor(&mut buffer, -1), 8) };
        assert!(negative.is_empty());
    }

    #[test]
    fn test_zero_stride_rejected() {
        let mut buffer = vec![0u8; 8];
        let data = unsafe { AvailableData::from_raw(descriptor(&mut buffer, 1), 8) };
        assert!(matches!(get_data(&data, 0), Err(PicamError::Value(_))));
    }

    #[test]
    fn test_overflowing_size_rejected() {
        let mut buffer = vec![0u8; 8];
        let data = unsafe { AvailableData::from_raw(descriptor(&mut buffer, i64::MAX), usize::MAX) };
        assert!(matches!(get_data(&data, usize::MAX), Err(PicamError::Value(_))));
    }

    #[test]
    fn test_stride_beyond_buffer_rejected() {
        let mut buffer: Vec<u8> = (0..24).collect();
        let data = unsafe { AvailableData::from_raw(descriptor(&mut buffer, 3), 8) };
        assert_eq!(data.readout_stride(), 8);
        let err = get_data(&data, 9).unwrap_err();
        assert!(matches!(err, PicamError::Value(msg) if msg.contains("exceeds")));

        // A narrower row length stays inside the buffer.
        let view = get_data(&data, 4).unwrap();
        assert_eq!(view.dim(), (3, 4));
        assert_eq!(view[[2, 3]], 11);
    }
}

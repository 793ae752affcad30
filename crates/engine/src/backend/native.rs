use super::DetectionEngine;
use crate::{buffer::DetectionBuffer, errors::EngineError, types::RawDetection};
use std::ffi::{CStr, CString};
use std::marker::PhantomData;
use std::path::Path;

mod ffi {
    use crate::types::RawDetection;
    use std::ffi::{c_char, c_int};

    #[link(name = "yolo_core")]
    unsafe extern "C" {
        pub fn get_core_info() -> *mut c_char;
        pub fn free_string(info: *mut c_char);
        pub fn load_model(path: *const c_char) -> c_int;
        pub fn set_confidence_threshold(value: f32) -> c_int;
        pub fn set_nms_iou_threshold(value: f32) -> c_int;
        pub fn run_inference(
            image_path: *const c_char,
            out_detections: *mut *mut RawDetection,
            out_len: *mut i32,
        ) -> c_int;
        pub fn free_detections(detections: *mut RawDetection, len: i32);
    }
}

/// FFI-backed engine over the native detection core.
///
/// The core keeps its model and thresholds in process-wide state; all
/// handles alias it. Handles are `!Send`/`!Sync`; a call chain holds
/// exclusive access from a single thread.
pub struct NativeEngine {
    _not_sync: PhantomData<*const ()>,
}

impl NativeEngine {
    pub fn new() -> Self {
        Self {
            _not_sync: PhantomData,
        }
    }
}

impl Default for NativeEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a filesystem path for the C boundary.
fn c_path(path: &Path) -> Result<CString, EngineError> {
    Ok(CString::new(path.as_os_str().as_encoded_bytes())?)
}

impl DetectionEngine for NativeEngine {
    fn load_model(&mut self, path: &Path) -> Result<(), EngineError> {
        let path_c = c_path(path)?;
        let status = unsafe { ffi::load_model(path_c.as_ptr()) };
        if status != 0 {
            return Err(EngineError::ModelLoad(status));
        }
        tracing::info!(path = %path.display(), "Model loaded");
        Ok(())
    }

    fn core_info(&mut self) -> Result<String, EngineError> {
        let raw = unsafe { ffi::get_core_info() };
        if raw.is_null() {
            return Err(EngineError::NullInfo);
        }
        let info = unsafe { CStr::from_ptr(raw) }.to_string_lossy().into_owned();
        unsafe { ffi::free_string(raw) };
        Ok(info)
    }

    fn set_confidence_threshold(&mut self, value: f32) -> Result<(), EngineError> {
        let status = unsafe { ffi::set_confidence_threshold(value) };
        if status != 0 {
            return Err(EngineError::Configure(status));
        }
        Ok(())
    }

    fn set_nms_iou_threshold(&mut self, value: f32) -> Result<(), EngineError> {
        let status = unsafe { ffi::set_nms_iou_threshold(value) };
        if status != 0 {
            return Err(EngineError::Configure(status));
        }
        Ok(())
    }

    fn run_inference(&mut self, image_path: &Path) -> Result<DetectionBuffer, EngineError> {
        let path_c = c_path(image_path)?;
        let mut detections: *mut RawDetection = std::ptr::null_mut();
        let mut len: i32 = 0;

        let status = unsafe { ffi::run_inference(path_c.as_ptr(), &mut detections, &mut len) };
        if status != 0 {
            // The out-parameters are unspecified on failure; nothing was
            // allocated and nothing must be released.
            return Err(EngineError::Inference(status));
        }

        tracing::trace!(count = len, "Inference returned");
        // Ownership of the core allocation transfers to the handle here;
        // the matching free_detections runs when the handle drops.
        Ok(unsafe { DetectionBuffer::from_raw(detections, len, ffi::free_detections) })
    }
}

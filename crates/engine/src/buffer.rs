use crate::types::RawDetection;

/// Release function for a core-allocated detection array.
///
/// Matches the signature of the core's `free_detections`.
pub type ReleaseFn = unsafe extern "C" fn(*mut RawDetection, i32);

/// Single-owner handle over a detection array allocated by the native core.
///
/// Created at the moment a successful inference call hands its output
/// pointer across the boundary. The records stay readable for the lifetime
/// of the handle and the allocation is released exactly once when the handle
/// drops, on every exit path. Holding a raw pointer, the handle is neither
/// `Send` nor `Sync`; the core's state is process-wide and callers
/// serialize access externally.
pub struct DetectionBuffer {
    ptr: *mut RawDetection,
    len: i32,
    release: ReleaseFn,
}

impl DetectionBuffer {
    /// Take ownership of a core-allocated array.
    ///
    /// # Safety
    ///
    /// `ptr` and `len` must come from a successful inference call and must
    /// not have been released; `release` must be the deallocator matching
    /// the allocator that produced `ptr`. The caller must not touch `ptr`
    /// after handing it over.
    pub unsafe fn from_raw(ptr: *mut RawDetection, len: i32, release: ReleaseFn) -> Self {
        Self { ptr, len, release }
    }

    /// View the records. Empty for a null pointer or nonpositive count.
    pub fn as_slice(&self) -> &[RawDetection] {
        if self.ptr.is_null() || self.len <= 0 {
            return &[];
        }
        unsafe { std::slice::from_raw_parts(self.ptr, self.len as usize) }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl Drop for DetectionBuffer {
    fn drop(&mut self) {
        // A failed inference call never allocates, so there is nothing to
        // release behind a null pointer.
        if !self.ptr.is_null() {
            unsafe { (self.release)(self.ptr, self.len) };
        }
    }
}

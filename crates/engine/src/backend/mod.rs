use crate::{buffer::DetectionBuffer, errors::EngineError};
use std::path::Path;

#[cfg(feature = "native-core")]
pub mod native;

/// Seam over the native detection core.
///
/// Every operation takes `&mut self`: the core's model state and threshold
/// configuration are process-wide with last-writer-wins semantics, so a
/// caller must hold exclusive access for the duration of a call chain. One
/// inference in flight per loaded model; no concurrency guarantee beyond
/// that.
pub trait DetectionEngine {
    /// Load model weights. Must succeed before any inference call.
    fn load_model(&mut self, path: &Path) -> Result<(), EngineError>;

    /// Diagnostic identification string of the core build.
    fn core_info(&mut self) -> Result<String, EngineError>;

    /// Update the core's confidence cutoff. Takes effect on the next
    /// inference call; calls already in flight are unaffected.
    fn set_confidence_threshold(&mut self, value: f32) -> Result<(), EngineError>;

    /// Update the core's NMS IoU threshold. Same timing as the confidence
    /// setter.
    fn set_nms_iou_threshold(&mut self, value: f32) -> Result<(), EngineError>;

    /// Run detection on an image file and take ownership of the resulting
    /// record buffer. A nonzero core status surfaces as
    /// [`EngineError::Inference`] and allocates nothing.
    fn run_inference(&mut self, image_path: &Path) -> Result<DetectionBuffer, EngineError>;
}

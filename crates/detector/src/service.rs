use crate::{
    config::DetectorConfig,
    postprocessing::{Detection, PostProcessor},
};
use engine::{DetectionEngine, EngineError};
use std::path::Path;

/// Drives the load -> configure -> infer -> postprocess -> release chain
/// against a detection engine.
pub struct DetectorService<E: DetectionEngine> {
    engine: E,
    config: DetectorConfig,
    postprocessor: PostProcessor,
}

impl<E: DetectionEngine> DetectorService<E> {
    pub fn new(engine: E, config: DetectorConfig) -> Self {
        let postprocessor = PostProcessor::new(config.num_classes);
        Self {
            engine,
            config,
            postprocessor,
        }
    }

    /// Load model weights, failing fast on a missing file before touching
    /// the core.
    pub fn load_model(&mut self, path: &Path) -> Result<(), EngineError> {
        if !path.exists() {
            return Err(EngineError::ResourceNotFound(path.to_path_buf()));
        }
        self.engine.load_model(path)
    }

    /// Push the configured thresholds to the core. They take effect on the
    /// next inference call, not on calls already in flight.
    pub fn apply_thresholds(&mut self) -> Result<(), EngineError> {
        self.engine
            .set_confidence_threshold(self.config.confidence_threshold)?;
        self.engine
            .set_nms_iou_threshold(self.config.nms_iou_threshold)?;
        tracing::debug!(
            confidence_threshold = self.config.confidence_threshold,
            nms_iou_threshold = self.config.nms_iou_threshold,
            "Thresholds applied"
        );
        Ok(())
    }

    /// Run detection on a single image. Single attempt, no retry, no
    /// caching; the core is never called when the image is missing.
    pub fn detect(&mut self, image_path: &Path) -> anyhow::Result<Vec<Detection>> {
        if !image_path.exists() {
            return Err(EngineError::ResourceNotFound(image_path.to_path_buf()).into());
        }

        // Original dimensions come from the image header, not the core.
        let (orig_width, orig_height) = image::image_dimensions(image_path)?;

        // The buffer handle owns the core allocation from here on and
        // releases it at the end of this scope, error paths included.
        let buffer = self.engine.run_inference(image_path)?;

        let detections =
            self.postprocessor
                .parse_detections(buffer.as_slice(), orig_width, orig_height);

        tracing::debug!(
            raw = buffer.len(),
            accepted = detections.len(),
            "Postprocessed detections"
        );

        Ok(detections)
    }
}

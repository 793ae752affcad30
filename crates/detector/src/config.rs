use common::env_parse;

pub use common::Environment;

#[derive(Debug, Clone)]
pub struct DetectorConfig {
    pub environment: Environment,
    pub confidence_threshold: f32,
    pub nms_iou_threshold: f32,
    pub num_classes: u32,
    /// Square side length in pixels the core's forward pass expects.
    pub input_size: u32,
}

impl DetectorConfig {
    /// Load configuration from environment variables with sensible defaults.
    ///
    /// The threshold defaults match the core's own: confidence 0.25,
    /// NMS IoU 0.45.
    pub fn from_env() -> anyhow::Result<Self> {
        let environment = Environment::from_env();

        let confidence_threshold = env_parse("CONFIDENCE_THRESHOLD", 0.25);
        let nms_iou_threshold = env_parse("NMS_IOU_THRESHOLD", 0.45);
        let num_classes = env_parse("NUM_CLASSES", 80u32);
        let input_size = env_parse("INPUT_SIZE", 640u32);

        let config = Self {
            environment,
            confidence_threshold,
            nms_iou_threshold,
            num_classes,
            input_size,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            anyhow::bail!(
                "confidence threshold {} is outside [0, 1]",
                self.confidence_threshold
            );
        }
        if !(0.0..=1.0).contains(&self.nms_iou_threshold) {
            anyhow::bail!(
                "NMS IoU threshold {} is outside [0, 1]",
                self.nms_iou_threshold
            );
        }
        if self.num_classes == 0 {
            anyhow::bail!("class count must be nonzero");
        }
        if self.input_size == 0 {
            anyhow::bail!("model input size must be nonzero");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clear_env() {
        for key in [
            "ENVIRONMENT",
            "CONFIDENCE_THRESHOLD",
            "NMS_IOU_THRESHOLD",
            "NUM_CLASSES",
            "INPUT_SIZE",
        ] {
            unsafe { env::remove_var(key) };
        }
    }

    #[test]
    #[serial]
    fn defaults_match_core_defaults() {
        clear_env();
        let config = DetectorConfig::from_env().unwrap();
        assert_eq!(config.confidence_threshold, 0.25);
        assert_eq!(config.nms_iou_threshold, 0.45);
        assert_eq!(config.num_classes, 80);
        assert_eq!(config.input_size, 640);
    }

    #[test]
    #[serial]
    fn env_overrides_are_picked_up() {
        clear_env();
        unsafe {
            env::set_var("CONFIDENCE_THRESHOLD", "0.5");
            env::set_var("NUM_CLASSES", "1");
        }
        let config = DetectorConfig::from_env().unwrap();
        assert_eq!(config.confidence_threshold, 0.5);
        assert_eq!(config.num_classes, 1);
        clear_env();
    }

    #[test]
    #[serial]
    fn out_of_range_threshold_is_rejected() {
        clear_env();
        unsafe { env::set_var("CONFIDENCE_THRESHOLD", "1.5") };
        let result = DetectorConfig::from_env();
        assert!(
            result.is_err(),
            "a threshold above 1.0 should fail validation"
        );
        clear_env();
    }

    #[test]
    #[serial]
    fn zero_class_count_is_rejected() {
        clear_env();
        unsafe { env::set_var("NUM_CLASSES", "0") };
        assert!(DetectorConfig::from_env().is_err());
        clear_env();
    }
}

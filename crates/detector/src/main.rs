use clap::Parser;
use detector::{DetectorConfig, DetectorService, logging::setup_logging};
use engine::DetectionEngine;
use engine::backend::native::NativeEngine;
use std::path::PathBuf;

/// Run object detection on an image through the native core.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path to the model weights file
    model: PathBuf,
    /// Path to the image to run detection on
    image: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = DetectorConfig::from_env()?;

    setup_logging(&config);
    tracing::info!(config = ?config, "Loaded configuration");

    let mut engine = NativeEngine::new();
    let info = engine.core_info()?;
    tracing::info!(core = %info, "Detection core initialized");

    let mut service = DetectorService::new(engine, config);
    service.load_model(&args.model)?;
    service.apply_thresholds()?;

    let detections = service.detect(&args.image)?;

    println!("Found {} detections:", detections.len());
    for (i, det) in detections.iter().enumerate() {
        println!(
            "  Detection {i}: class={}, confidence={:.2}, bbox=({:.1}, {:.1}, {:.1}, {:.1})",
            det.class_id, det.confidence, det.x1, det.y1, det.x2, det.y2
        );
    }

    Ok(())
}

use engine::RawDetection;

/// Validated, pixel-space detection on the original image.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub confidence: f32,
    pub class_id: u32,
}

pub struct PostProcessor {
    pub num_classes: u32,
}

impl PostProcessor {
    pub fn new(num_classes: u32) -> Self {
        Self { num_classes }
    }

    /// Convert raw core records into clipped, pixel-space detections on the
    /// original image.
    ///
    /// Records are validated independently and in order; a record that fails
    /// validation is skipped without aborting the batch, so output order is
    /// input order minus rejections. No NMS at this layer; the core applies
    /// its own according to the configured IoU threshold.
    pub fn parse_detections(
        &self,
        raw: &[RawDetection],
        orig_width: u32,
        orig_height: u32,
    ) -> Vec<Detection> {
        let orig_w = orig_width as f32;
        let orig_h = orig_height as f32;

        let mut detections = Vec::new();

        for record in raw {
            if record.class_index >= self.num_classes {
                continue;
            }
            // Closed range; also drops NaN confidences.
            if !(0.0..=1.0).contains(&record.confidence) {
                continue;
            }

            // The wire fields carry normalized cxcywh; scale into original
            // image pixels.
            let cx = record.xmin * orig_w;
            let cy = record.ymin * orig_h;
            let w = record.xmax * orig_w;
            let h = record.ymax * orig_h;

            let (x1, y1, x2, y2) = cxcywh_to_xyxy(cx, cy, w, h);
            if x2 <= x1 || y2 <= y1 {
                continue;
            }

            let x1 = clip(x1, orig_w);
            let y1 = clip(y1, orig_h);
            let x2 = clip(x2, orig_w);
            let y2 = clip(y2, orig_h);

            // A box entirely outside the image collapses to zero area under
            // clipping.
            if !(x2 > x1 && y2 > y1) {
                continue;
            }

            detections.push(Detection {
                x1,
                y1,
                x2,
                y2,
                confidence: record.confidence,
                class_id: record.class_index,
            });
        }

        detections
    }
}

/// Convert bounding box from center-width-height format to corner format
#[inline]
fn cxcywh_to_xyxy(cx: f32, cy: f32, w: f32, h: f32) -> (f32, f32, f32, f32) {
    let x1 = cx - w / 2.0;
    let y1 = cy - h / 2.0;
    let x2 = x1 + w;
    let y2 = y1 + h;
    (x1, y1, x2, y2)
}

/// Clamp a coordinate into `[0, max]`
#[inline]
fn clip(value: f32, max: f32) -> f32 {
    value.max(0.0).min(max)
}

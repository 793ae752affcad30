/// Fixed-layout detection record emitted by the native core, one per
/// detected object.
///
/// Field names follow the core's C header. In the core version this binding
/// targets, the four geometry fields carry normalized center-x, center-y,
/// width and height in `[0, 1]` relative to the model's square input. Core
/// versions that emit absolute corner coordinates share the same wire layout
/// but are not compatible with this build; the interpretation is fixed per
/// binding, never detected at runtime.
///
/// Layout must match the core-side struct byte-for-byte: five `f32` followed
/// by one `u32`, 24 bytes, 4-byte alignment, no padding.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawDetection {
    pub xmin: f32,
    pub ymin: f32,
    pub xmax: f32,
    pub ymax: f32,
    pub confidence: f32,
    pub class_index: u32,
}

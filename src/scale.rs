//! Percent scaling for the image preview.
//!
//! The slider drives the displayed width/height of the preview image as CSS
//! percentages. Loading a new image snaps the scale back to the default.

/// Slider position applied whenever a new image finishes loading.
pub const DEFAULT_PERCENT: u32 = 50;

/// Text shown next to the slider, e.g. `Scale: 50%`.
pub fn label_text(percent: u32) -> String {
    format!("Scale: {percent}%")
}

/// CSS length value assigned to the image's width and height styles.
pub fn css_percent(percent: u32) -> String {
    format!("{percent}%")
}

/// Parses a slider's string value, falling back to the default when the
/// control hands us something non-numeric.
pub fn parse_percent(value: &str) -> u32 {
    value.trim().parse().unwrap_or(DEFAULT_PERCENT)
}

use crate::constants::{DIAL_SCALE, DIAL_TRANSLATE_Y_PCT};

/// CSS transform for the dial at `angle_deg`, composed with the fixed lift and zoom.
pub fn dial_transform(angle_deg: f64) -> String {
    format!(
        "translateY({}%) scale({}) rotateZ({:.3}deg)",
        DIAL_TRANSLATE_Y_PCT, DIAL_SCALE, angle_deg
    )
}

/// Full inline style for the dial element.
///
/// `touch-action: none` keeps touch drags from scrolling the page.
pub fn dial_style(angle_deg: f64) -> String {
    format!(
        "transform:{};touch-action:none;transition:none",
        dial_transform(angle_deg)
    )
}

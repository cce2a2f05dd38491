use crate::transform;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Write the rotation straight into the inline style, no transition.
#[inline]
pub fn apply_rotation(el: &web::Element, angle_deg: f64) {
    _ = el.set_attribute("style", &transform::dial_style(angle_deg));
}

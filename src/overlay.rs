use crate::constants::{OVERLAY_SHOW_CLASS, SOUND_OVERLAY_ID};
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(SOUND_OVERLAY_ID) {
        _ = el.class_list().add_1(OVERLAY_SHOW_CLASS);
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(SOUND_OVERLAY_ID) {
        _ = el.class_list().remove_1(OVERLAY_SHOW_CLASS);
    }
}

/// Mirror the player's prompt flag onto the overlay.
#[inline]
pub fn set_visible(document: &web::Document, visible: bool) {
    if visible {
        show(document);
    } else {
        hide(document);
    }
}

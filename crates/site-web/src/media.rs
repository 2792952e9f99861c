//! Local video preview.
//!
//! A selected file is bound to the playback element through a transient
//! object URL held in a [`MediaSlot`], which guarantees the previous URL is
//! revoked before a new one is created and on reset.

use crate::dom::{self, View};
use site_core::{is_video_mime, MediaSlot, HIDDEN_CLASS};
use web_sys as web;

#[derive(Default)]
pub struct MediaPreview {
    slot: MediaSlot<String>,
}

impl MediaPreview {
    /// Bind `file` to the playback element and reveal the preview. Files
    /// whose declared type is not `video/*` are ignored without feedback.
    pub fn on_file_selected(&mut self, view: &View, file: &web::File) {
        if !is_video_mime(&file.type_()) {
            log::debug!("[media] ignoring non-video file ({})", file.type_());
            return;
        }
        let Some(video) = &view.video else { return };

        // The old URL is revoked before the new one is created; the slot
        // never holds two live handles.
        let url = self
            .slot
            .replace_with(revoke, || {
                match web::Url::create_object_url_with_blob(file) {
                    Ok(url) => Some(url),
                    Err(e) => {
                        log::error!("[media] object URL error: {:?}", e);
                        None
                    }
                }
            })
            .cloned();
        let Some(url) = url else { return };
        video.set_src(&url);

        if let Some(wrapper) = &view.preview_wrapper {
            dom::remove_class(wrapper, HIDDEN_CLASS);
        }
        if let Some(zone) = &view.drop_zone {
            dom::add_class(zone, HIDDEN_CLASS);
        }
        if let Ok(promise) = video.play() {
            // Autoplay rejection is not actionable here.
            let _ = promise;
        }
        log::info!("[media] preview started ({})", file.name());
    }

    /// Tear the preview down and restore the upload prompt. Safe to call
    /// with no active media.
    pub fn reset(&mut self, view: &View) {
        let Some(video) = &view.video else { return };
        let _ = video.pause();
        video.set_src("");
        self.slot.clear(revoke);

        if let Some(wrapper) = &view.preview_wrapper {
            dom::add_class(wrapper, HIDDEN_CLASS);
        }
        if let Some(zone) = &view.drop_zone {
            dom::remove_class(zone, HIDDEN_CLASS);
        }
    }
}

fn revoke(url: String) {
    let _ = web::Url::revoke_object_url(&url);
}

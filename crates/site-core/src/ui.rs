//! UI state models for the dropdown menu and the media preview slot.

/// Contact dropdown visibility. Initial state is closed.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// Flip visibility, returning the new open flag.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// Declared MIME types accepted by the video previewer.
#[inline]
pub fn is_video_mime(mime: &str) -> bool {
    mime.starts_with("video/")
}

/// Holder for at most one live resource handle (an object URL on the web).
/// The release action is injected so the type stays free of browser APIs.
#[derive(Default, Debug)]
pub struct MediaSlot<H> {
    handle: Option<H>,
}

impl<H> MediaSlot<H> {
    pub fn new() -> Self {
        Self { handle: None }
    }

    /// Release the held handle, then run `acquire` for its successor, so at
    /// most one handle is live at any point. A failed acquisition leaves the
    /// slot empty.
    pub fn replace_with(
        &mut self,
        release: impl FnOnce(H),
        acquire: impl FnOnce() -> Option<H>,
    ) -> Option<&H> {
        if let Some(old) = self.handle.take() {
            release(old);
        }
        self.handle = acquire();
        self.handle.as_ref()
    }

    /// Release the held handle, if any. Safe to call repeatedly.
    pub fn clear(&mut self, release: impl FnOnce(H)) {
        if let Some(old) = self.handle.take() {
            release(old);
        }
    }

    pub fn get(&self) -> Option<&H> {
        self.handle.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.handle.is_some()
    }
}

//! Pointer state shared between the event layer and the frame loop.

/// Offset from the viewport center, both axes in `[-0.5, 0.5]`.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerOffset {
    pub x: f32,
    pub y: f32,
}

impl PointerOffset {
    pub fn from_client(client_x: f32, client_y: f32, width: f32, height: f32) -> Self {
        Self {
            x: normalized_offset(client_x, width),
            y: normalized_offset(client_y, height),
        }
    }
}

/// Map a client coordinate to a centered offset in `[-0.5, 0.5]`.
#[inline]
pub fn normalized_offset(client: f32, extent: f32) -> f32 {
    if extent <= 0.0 {
        return 0.0;
    }
    (client / extent - 0.5).clamp(-0.5, 0.5)
}

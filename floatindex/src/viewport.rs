use std::collections::HashMap;

use crate::geometry::Extent;

/// Read access to the host's scroll state and computed layout.
///
/// The behaviors never compute layout themselves; everything they know about
/// element geometry comes through this trait, which keeps them independent
/// of any particular rendering environment.
pub trait Viewport {
    /// Current vertical scroll offset of the document, in pixels.
    fn scroll_y(&self) -> i32;

    /// Viewport-relative vertical extent of the element with the given id.
    /// Unknown ids resolve to an empty extent at the top of the viewport.
    fn client_extent(&self, id: &str) -> Extent;
}

/// Viewport backed by an id -> extent table.
///
/// Extents are recorded in document space and served relative to the current
/// scroll offset, so this works both as a test double and as an adapter for
/// hosts that already track absolute element positions.
#[derive(Debug, Default)]
pub struct MappedViewport {
    scroll_y: i32,
    extents: HashMap<String, Extent>,
}

impl MappedViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_scroll_y(&mut self, offset: i32) {
        self.scroll_y = offset;
    }

    /// Record the document-space extent of an element.
    pub fn insert(&mut self, id: impl Into<String>, extent: Extent) {
        self.extents.insert(id.into(), extent);
    }

    pub fn remove(&mut self, id: &str) {
        self.extents.remove(id);
    }
}

impl Viewport for MappedViewport {
    fn scroll_y(&self) -> i32 {
        self.scroll_y
    }

    fn client_extent(&self, id: &str) -> Extent {
        self.extents
            .get(id)
            .copied()
            .unwrap_or_default()
            .shifted(-self.scroll_y)
    }
}

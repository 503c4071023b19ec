use crate::viewport::Viewport;

/// Vertical extent of an element, in pixels. Whether the values are
/// document-relative or viewport-relative depends on where they came from;
/// [`document_extent`] always returns document space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Extent {
    pub top: i32,
    pub bottom: i32,
}

impl Extent {
    pub const fn new(top: i32, bottom: i32) -> Self {
        Self { top, bottom }
    }

    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// True when the two extents share at least one pixel row.
    pub const fn overlaps(&self, other: &Self) -> bool {
        other.top < self.bottom && other.bottom > self.top
    }

    pub const fn shifted(self, dy: i32) -> Self {
        Self::new(self.top + dy, self.bottom + dy)
    }
}

/// Get the absolute vertical position of an element on the page.
///
/// Viewport-relative extents are frame-relative, so callers must re-read
/// after any scroll or resize. Margins and borders of the element are not
/// taken into account.
pub fn document_extent<V: Viewport>(viewport: &V, id: &str) -> Extent {
    viewport.client_extent(id).shifted(viewport.scroll_y())
}

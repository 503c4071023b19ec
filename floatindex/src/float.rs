use crate::dom::{Document, Position};
use crate::geometry::document_extent;
use crate::viewport::Viewport;

/// Class carried by the element while pinned, as a hook for external styling.
pub const FLOATING_CLASS: &str = "scroll-floating";

/// The placement properties the float transition touches, saved so the
/// restore puts back exactly what was there before.
#[derive(Debug, Clone, Copy, Default)]
struct SavedPlacement {
    position: Position,
    top: Option<i32>,
}

/// Floats an element on the page: once the document scrolls past it, the
/// element is pinned to the top of the viewport, and it returns to normal
/// flow when scrolled back.
///
/// Margins on the target are not taken into account in the anchor math; wrap
/// the element in a margin-free container if that matters.
#[derive(Debug)]
pub struct ScrollFloat {
    target: String,
    anchor: i32,
    floating: bool,
    saved: SavedPlacement,
}

impl ScrollFloat {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            anchor: 0,
            floating: false,
            saved: SavedPlacement::default(),
        }
    }

    /// Capture the anchor position and run the initial check.
    pub fn setup(&mut self, doc: &mut Document, viewport: &impl Viewport) {
        self.anchor = document_extent(viewport, &self.target).top;
        self.recheck(doc, viewport);
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Document-space top the float threshold is measured against.
    pub fn anchor(&self) -> i32 {
        self.anchor
    }

    pub fn is_floating(&self) -> bool {
        self.floating
    }

    pub fn on_scroll(&mut self, doc: &mut Document, viewport: &impl Viewport) {
        self.recheck(doc, viewport);
    }

    /// Resizing invalidates the anchor: drop back to normal flow first,
    /// re-measure, then recheck (which may pin the element again
    /// immediately).
    pub fn on_resize(&mut self, doc: &mut Document, viewport: &impl Viewport) {
        self.unfloat(doc);
        self.anchor = document_extent(viewport, &self.target).top;
        self.recheck(doc, viewport);
    }

    /// All state transitions funnel through here: floating iff the document
    /// has scrolled past the anchor. Re-entrant transitions are no-ops.
    fn recheck(&mut self, doc: &mut Document, viewport: &impl Viewport) {
        if viewport.scroll_y() > self.anchor {
            self.float(doc);
        } else {
            self.unfloat(doc);
        }
    }

    fn float(&mut self, doc: &mut Document) {
        if self.floating {
            return;
        }
        let Some(node) = doc.find_mut(&self.target) else {
            return;
        };
        self.saved = SavedPlacement {
            position: node.position,
            top: node.top,
        };
        node.position = Position::Fixed;
        node.top = Some(0);
        node.add_class(FLOATING_CLASS);
        self.floating = true;
        log::debug!("[float] {} pinned to viewport (anchor={})", self.target, self.anchor);
    }

    fn unfloat(&mut self, doc: &mut Document) {
        if !self.floating {
            return;
        }
        let Some(node) = doc.find_mut(&self.target) else {
            return;
        };
        node.position = self.saved.position;
        node.top = self.saved.top;
        node.remove_class(FLOATING_CLASS);
        self.floating = false;
        log::debug!("[float] {} restored to flow", self.target);
    }
}

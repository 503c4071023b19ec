use crate::dom::{Document, Margin, Node, Position};
use crate::error::Error;
use crate::geometry::document_extent;
use crate::schedule::Coalescer;
use crate::viewport::Viewport;

/// Seam patches sit above normal content so they cover the border.
const PATCH_Z_INDEX: i16 = 1;

/// Erases the border seam between index rows and their matching body
/// sections wherever the two vertically overlap.
///
/// One absolutely positioned patch per pair is appended to the index row at
/// setup and repositioned on every (deferred) check. Row margins in either
/// column are not taken into account; wrap rows in margin-free containers if
/// that matters.
#[derive(Debug)]
pub struct SectionFloater {
    body_group: String,
    indices: Vec<String>,
    bodies: Vec<String>,
    patches: Vec<String>,
    pending: Coalescer,
}

impl SectionFloater {
    /// Collect the matched rows under `root`: the i-th `.index .section` is
    /// paired with the i-th `.body .section`, both in document order. Fails
    /// before any mutation when a group is missing or the lengths differ.
    pub fn new(doc: &Document, root: &str) -> Result<Self, Error> {
        let index_group = doc
            .query(root, "index")
            .ok_or(Error::MissingElement("index"))?;
        let body_group = doc
            .query(root, "body")
            .ok_or(Error::MissingElement("body"))?;

        let indices = doc.query_all(&index_group, "section");
        let bodies = doc.query_all(&body_group, "section");
        if indices.len() != bodies.len() {
            return Err(Error::SectionCountMismatch {
                index: indices.len(),
                body: bodies.len(),
            });
        }

        Ok(Self {
            body_group,
            indices,
            bodies,
            patches: Vec::new(),
            pending: Coalescer::new(),
        })
    }

    /// Create one seam patch per pair and schedule the initial check.
    ///
    /// The patch is as wide as the body's left border, tucked under the index
    /// row's own top border and pulled flush against the index column's right
    /// edge by negative margins. The check itself runs on the host's next
    /// `run_pending` call, after layout has settled.
    pub fn setup(&mut self, doc: &mut Document) {
        let border_width = doc
            .find(&self.body_group)
            .map(|node| node.border.left)
            .unwrap_or(0);
        let background = doc.background();

        for index_id in &self.indices {
            let border_top = doc
                .find(index_id)
                .map(|node| node.border.top)
                .unwrap_or(0);
            let patch = Node::div()
                .position(Position::Absolute)
                .z_index(PATCH_Z_INDEX)
                .width(border_width)
                .margin(Margin::new(
                    -i32::from(border_top),
                    -i32::from(border_width),
                    0,
                    0,
                ))
                .background(background);
            if let Some(id) = doc.append_child(index_id, patch) {
                self.patches.push(id);
            }
        }

        log::debug!(
            "[sections] created {} seam patches (border width {})",
            self.patches.len(),
            border_width
        );
        self.pending.schedule();
    }

    pub fn pair_count(&self) -> usize {
        self.indices.len()
    }

    /// Ids of the seam patch elements, in pair order.
    pub fn patches(&self) -> &[String] {
        &self.patches
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_pending()
    }

    pub fn on_scroll(&mut self) {
        if self.pending.schedule() {
            log::trace!("[sections] recheck scheduled");
        }
    }

    pub fn on_resize(&mut self) {
        self.pending.schedule();
    }

    /// Run the deferred check if one is pending.
    pub fn run_pending(&mut self, doc: &mut Document, viewport: &impl Viewport) {
        if self.pending.take() {
            self.check(doc, viewport);
        }
    }

    fn check(&self, doc: &mut Document, viewport: &impl Viewport) {
        for (i, patch_id) in self.patches.iter().enumerate() {
            let (Some(index_id), Some(body_id)) = (self.indices.get(i), self.bodies.get(i)) else {
                continue;
            };
            let body = document_extent(viewport, body_id);
            let index = document_extent(viewport, index_id);
            let Some(patch) = doc.find_mut(patch_id) else {
                continue;
            };

            if index.overlaps(&body) {
                let start = body.top.max(index.top);
                let end = body.bottom.min(index.bottom);
                patch.right = Some(0);
                patch.top = Some(start - index.top);
                // One pixel short so the patch never overshoots the seam.
                patch.height = Some(end - start - 1);
                patch.visible = true;
            } else {
                patch.visible = false;
            }
        }
    }
}

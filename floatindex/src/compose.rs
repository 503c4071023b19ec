use crate::dom::Document;
use crate::error::Error;
use crate::event::Event;
use crate::float::ScrollFloat;
use crate::sections::SectionFloater;
use crate::viewport::Viewport;

/// The composed sticky-index effect: a scroll-floated index column plus seam
/// patches over the index/body border.
///
/// Hosts feed [`handle_event`](Self::handle_event) for every scroll and
/// resize, and call [`run_pending`](Self::run_pending) once per event-loop
/// turn to release the section floater's deferred checks. The two behaviors
/// never talk to each other at runtime.
#[derive(Debug)]
pub struct FloatIndex {
    float: ScrollFloat,
    sections: SectionFloater,
}

impl FloatIndex {
    /// Wire the effect to the tree under `root`.
    ///
    /// Expects an `.index-wrapper` plus equal-length `.index .section` and
    /// `.body .section` groups under the root. Validation happens before any
    /// mutation, so a failed init leaves the document untouched.
    pub fn init(
        doc: &mut Document,
        viewport: &impl Viewport,
        root: &str,
    ) -> Result<Self, Error> {
        let wrapper = doc
            .query(root, "index-wrapper")
            .ok_or(Error::MissingElement("index-wrapper"))?;
        let mut sections = SectionFloater::new(doc, root)?;

        let mut float = ScrollFloat::new(wrapper);
        float.setup(doc, viewport);
        sections.setup(doc);

        Ok(Self { float, sections })
    }

    pub fn handle_event(&mut self, doc: &mut Document, viewport: &impl Viewport, event: Event) {
        match event {
            Event::Scroll => {
                self.float.on_scroll(doc, viewport);
                self.sections.on_scroll();
            }
            Event::Resize => {
                self.float.on_resize(doc, viewport);
                self.sections.on_resize();
            }
        }
    }

    /// Release the section floater's deferred recheck, if one is pending.
    pub fn run_pending(&mut self, doc: &mut Document, viewport: &impl Viewport) {
        self.sections.run_pending(doc, viewport);
    }

    pub fn scroll_float(&self) -> &ScrollFloat {
        &self.float
    }

    pub fn section_floater(&self) -> &SectionFloater {
        &self.sections
    }
}

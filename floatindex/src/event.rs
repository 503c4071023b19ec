/// Document-level notifications the behaviors react to.
///
/// Payload-free on purpose: every check reads live scroll and layout state
/// from the viewport, so the event only says that something changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The document scrolled.
    Scroll,
    /// The viewport was resized.
    Resize,
}

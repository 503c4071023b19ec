use thiserror::Error;

/// Errors raised while wiring the behaviors to a document.
///
/// All of these signal a markup contract violation and are raised at
/// construction, before any patch is created or any state mutated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The index and body groups hold different numbers of sections.
    #[error("index has {index} sections but body has {body}")]
    SectionCountMismatch { index: usize, body: usize },

    /// A required element class was not found under the root.
    #[error("no element with class '{0}' under the root")]
    MissingElement(&'static str),
}

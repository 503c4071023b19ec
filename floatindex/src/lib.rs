pub mod compose;
pub mod dom;
pub mod error;
pub mod event;
pub mod float;
pub mod geometry;
pub mod schedule;
pub mod sections;
pub mod viewport;

pub use compose::FloatIndex;
pub use dom::{Document, Edges, Margin, Node, Position, Rgb};
pub use error::Error;
pub use event::Event;
pub use float::{ScrollFloat, FLOATING_CLASS};
pub use geometry::{document_extent, Extent};
pub use schedule::Coalescer;
pub use sections::SectionFloater;
pub use viewport::{MappedViewport, Viewport};

use std::sync::atomic::{AtomicU64, Ordering};

use super::style::{Edges, Margin, Position, Rgb};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// A single element in the document tree.
///
/// The fields are the inline surface the behaviors read and write: placement,
/// visibility and background. Border widths are computed values resolved by
/// the host's styling and stored here so the behaviors can read them without
/// a style engine.
#[derive(Debug, Clone)]
pub struct Node {
    pub id: String,
    pub classes: Vec<String>,
    pub children: Vec<Node>,

    // Inline placement
    pub position: Position,
    pub top: Option<i32>,
    pub right: Option<i32>,
    pub width: Option<u16>,
    pub height: Option<i32>,
    pub margin: Margin,
    pub z_index: i16,
    pub visible: bool,
    pub background: Option<Rgb>,

    // Computed border widths
    pub border: Edges,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            classes: Vec::new(),
            children: Vec::new(),
            position: Position::Static,
            top: None,
            right: None,
            width: None,
            height: None,
            margin: Margin::default(),
            z_index: 0,
            visible: true,
            background: None,
            border: Edges::default(),
        }
    }
}

impl Node {
    pub fn div() -> Self {
        Self {
            id: generate_id("div"),
            ..Default::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    pub fn z_index(mut self, z_index: i16) -> Self {
        self.z_index = z_index;
        self
    }

    pub fn background(mut self, color: Rgb) -> Self {
        self.background = Some(color);
        self
    }

    pub fn border(mut self, border: Edges) -> Self {
        self.border = border;
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class if not already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }
}

mod node;
mod style;

pub use node::Node;
pub use style::{Edges, Margin, Position, Rgb};

/// Owns the element tree the behaviors query and mutate.
#[derive(Debug)]
pub struct Document {
    root: Node,
    background: Rgb,
}

impl Document {
    pub fn new(root: Node) -> Self {
        Self {
            root,
            background: Rgb::WHITE,
        }
    }

    /// Set the page background. Seam patches fill with this color so they
    /// disappear against the page.
    pub fn with_background(mut self, color: Rgb) -> Self {
        self.background = color;
        self
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Find an element by id, in document (preorder) order.
    pub fn find(&self, id: &str) -> Option<&Node> {
        find_node(&self.root, id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Node> {
        find_node_mut(&mut self.root, id)
    }

    /// First descendant of `scope` with the given class, in document order.
    /// The scope element itself is not considered.
    pub fn query(&self, scope: &str, class: &str) -> Option<String> {
        let scope = self.find(scope)?;
        let mut found = Vec::new();
        for child in &scope.children {
            collect_class(child, class, &mut found);
            if !found.is_empty() {
                break;
            }
        }
        found.into_iter().next()
    }

    /// All descendants of `scope` with the given class, in document order.
    pub fn query_all(&self, scope: &str, class: &str) -> Vec<String> {
        let mut found = Vec::new();
        if let Some(scope) = self.find(scope) {
            for child in &scope.children {
                collect_class(child, class, &mut found);
            }
        }
        found
    }

    /// Append `child` under `parent`. Returns the child's id, or None if the
    /// parent does not exist.
    pub fn append_child(&mut self, parent: &str, child: Node) -> Option<String> {
        let parent = self.find_mut(parent)?;
        let id = child.id.clone();
        parent.children.push(child);
        Some(id)
    }
}

fn find_node<'a>(node: &'a Node, id: &str) -> Option<&'a Node> {
    if node.id == id {
        return Some(node);
    }
    for child in &node.children {
        if let Some(found) = find_node(child, id) {
            return Some(found);
        }
    }
    None
}

fn find_node_mut<'a>(node: &'a mut Node, id: &str) -> Option<&'a mut Node> {
    if node.id == id {
        return Some(node);
    }
    for child in &mut node.children {
        if let Some(found) = find_node_mut(child, id) {
            return Some(found);
        }
    }
    None
}

fn collect_class(node: &Node, class: &str, out: &mut Vec<String>) {
    if node.has_class(class) {
        out.push(node.id.clone());
    }
    for child in &node.children {
        collect_class(child, class, out);
    }
}

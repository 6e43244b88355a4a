//! Node creation and the document that owns the live tree.
//!
//! Everything here is single-threaded: ids come from an `Rc<Cell<_>>` counter shared by every
//! clone of a [`NodeAllocator`], so nodes created through any handle never collide.

use crate::debug::outline_from_dom;
use crate::error::TreeError;
use crate::traverse::{find_element_by_attr_id, find_node_by_id, find_node_by_id_mut};
use crate::types::{Id, Node, NodeId};
use std::cell::Cell;
use std::rc::Rc;

/// The "create element" / "create text node" service node builders consume.
pub trait DocumentHost {
    /// Hand out a fresh, never-before-seen node id.
    fn next_id(&self) -> Id;

    /// Create a detached element. HTML documents store element names ASCII-lowercased.
    fn create_element(&self, name: &str) -> Node {
        let id = self.next_id();
        log::trace!(target: "dom.host", "create element <{name}> as {id:?}");
        Node::Element {
            id,
            name: name.to_ascii_lowercase(),
            attributes: Vec::new(),
            style: Vec::new(),
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    fn create_text_node(&self, text: &str) -> Node {
        Node::Text {
            id: self.next_id(),
            text: text.to_string(),
        }
    }

    fn create_comment(&self, text: &str) -> Node {
        Node::Comment {
            id: self.next_id(),
            text: text.to_string(),
        }
    }

    fn create_fragment(&self) -> Node {
        Node::Fragment {
            id: self.next_id(),
            children: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct NodeAllocator {
    last: Rc<Cell<NodeId>>,
}

impl NodeAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ids handed out so far.
    pub fn allocated(&self) -> NodeId {
        self.last.get()
    }
}

impl DocumentHost for NodeAllocator {
    fn next_id(&self) -> Id {
        let next = self.last.get().wrapping_add(1);
        // Skip the sentinel if the counter ever wraps.
        let next = if next == Id::UNASSIGNED.0 { 1 } else { next };
        self.last.set(next);
        Id(next)
    }
}

impl<H: DocumentHost + ?Sized> DocumentHost for &H {
    fn next_id(&self) -> Id {
        (**self).next_id()
    }
}

/// A live document: the root node plus the allocator its nodes were created with.
#[derive(Debug)]
pub struct Document {
    allocator: NodeAllocator,
    root: Node,
}

impl Document {
    pub fn new() -> Self {
        let allocator = NodeAllocator::new();
        let root = Node::Document {
            id: allocator.next_id(),
            children: Vec::new(),
        };
        Self { allocator, root }
    }

    /// A handle sharing this document's id counter.
    pub fn allocator(&self) -> NodeAllocator {
        self.allocator.clone()
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn root_id(&self) -> Id {
        self.root.id()
    }

    pub fn node(&self, id: Id) -> Option<&Node> {
        find_node_by_id(&self.root, id)
    }

    pub fn node_mut(&mut self, id: Id) -> Option<&mut Node> {
        find_node_by_id_mut(&mut self.root, id)
    }

    /// Look up an element by its `id` attribute.
    pub fn get_element_by_id(&self, element_id: &str) -> Option<&Node> {
        find_element_by_attr_id(&self.root, element_id)
    }

    pub fn append_child(&mut self, parent: Id, child: Node) -> Result<(), TreeError> {
        let node = self.node_mut(parent).ok_or(TreeError::NotFound(parent))?;
        node.append_child(child)
            .map_err(|_| TreeError::NotAContainer(parent))
    }

    pub fn clear_children(&mut self, parent: Id) -> Result<(), TreeError> {
        let node = self.node_mut(parent).ok_or(TreeError::NotFound(parent))?;
        let children = node
            .children_mut()
            .ok_or(TreeError::NotAContainer(parent))?;
        children.clear();
        Ok(())
    }

    pub fn outline(&self, cap: usize) -> Vec<String> {
        outline_from_dom(&self.root, cap)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentHost for Document {
    fn next_id(&self) -> Id {
        self.allocator.next_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocator_clones_share_one_counter() {
        let a = NodeAllocator::new();
        let b = a.clone();
        assert_eq!(a.next_id(), Id(1));
        assert_eq!(b.next_id(), Id(2));
        assert_eq!(a.allocated(), 2);
    }

    #[test]
    fn create_element_lowercases_name() {
        let host = NodeAllocator::new();
        let el = host.create_element("DiV");
        assert_eq!(el.name(), Some("div"));
    }

    #[test]
    fn appending_a_fragment_moves_its_children() {
        let mut doc = Document::new();
        let mut frag = doc.create_fragment();
        let a = doc.create_element("p");
        let b = doc.create_element("span");
        let (a_id, b_id) = (a.id(), b.id());
        frag.append_child(a).unwrap();
        frag.append_child(b).unwrap();

        let root = doc.root_id();
        doc.append_child(root, frag).unwrap();

        let ids: Vec<Id> = doc.root().children().iter().map(Node::id).collect();
        assert_eq!(ids, vec![a_id, b_id]);
    }

    #[test]
    fn append_to_text_node_is_rejected() {
        let mut doc = Document::new();
        let text = doc.create_text_node("hi");
        let text_id = text.id();
        let root = doc.root_id();
        doc.append_child(root, text).unwrap();

        let err = doc.append_child(text_id, Node::Text {
            id: Id(99),
            text: String::new(),
        });
        assert_eq!(err, Err(TreeError::NotAContainer(text_id)));
    }

    #[test]
    fn clear_children_empties_only_the_target() {
        let mut doc = Document::new();
        let mut outer = doc.create_element("div");
        outer.set_attr("id", Some("outer".into()));
        let outer_id = outer.id();
        let inner = doc.create_element("p");
        outer.append_child(inner).unwrap();
        let root = doc.root_id();
        doc.append_child(root, outer).unwrap();

        doc.clear_children(outer_id).unwrap();
        let outer = doc.get_element_by_id("outer").unwrap();
        assert!(outer.children().is_empty());
        assert_eq!(doc.root().children().len(), 1);
    }
}

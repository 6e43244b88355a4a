use crate::{Id, Node};

pub fn find_node_by_id(node: &Node, id: Id) -> Option<&Node> {
    if node.id() == id {
        return Some(node);
    }
    node.children()
        .iter()
        .find_map(|c| find_node_by_id(c, id))
}

pub fn find_node_by_id_mut(node: &mut Node, id: Id) -> Option<&mut Node> {
    if node.id() == id {
        return Some(node);
    }
    let children = node.children_mut()?;
    children.iter_mut().find_map(|c| find_node_by_id_mut(c, id))
}

/// First element in document order whose `id` attribute equals `wanted`.
pub fn find_element_by_attr_id<'a>(node: &'a Node, wanted: &str) -> Option<&'a Node> {
    if node.is_element() && node.attr("id") == Some(wanted) {
        return Some(node);
    }
    node.children()
        .iter()
        .find_map(|c| find_element_by_attr_id(c, wanted))
}

/// Descendant elements (not `node` itself) named `name`, in document order.
pub fn collect_elements_named<'a>(node: &'a Node, name: &str, out: &mut Vec<&'a Node>) {
    for c in node.children() {
        if c.is_element_named(name) {
            out.push(c);
        }
        collect_elements_named(c, name, out);
    }
}

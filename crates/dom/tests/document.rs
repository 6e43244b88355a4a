use dom::traverse::collect_elements_named;
use dom::{Document, DocumentHost, Node, Scalar};

fn container(doc: &mut Document, id: &str) -> dom::Id {
    let mut el = doc.create_element("div");
    el.set_attr("id", Some(id.to_string()));
    let el_id = el.id();
    let root = doc.root_id();
    doc.append_child(root, el).unwrap();
    el_id
}

#[test]
fn inner_html_builds_queryable_subtree() {
    let mut doc = Document::new();
    let rows = container(&mut doc, "rows");

    let host = doc.allocator();
    let node = doc.node_mut(rows).unwrap();
    node.set_property(
        &host,
        "innerHTML",
        &Scalar::from("<div><input id=a></div><div><input id=b></div>"),
    )
    .unwrap();

    let rows = doc.get_element_by_id("rows").unwrap();
    let mut inputs = Vec::new();
    collect_elements_named(rows, "input", &mut inputs);
    let ids: Vec<_> = inputs.iter().filter_map(|n| n.attr("id")).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn ids_stay_unique_across_allocator_handles() {
    let mut doc = Document::new();
    let rows = container(&mut doc, "rows");
    let host = doc.allocator();
    let a = host.create_element("p");
    let b = doc.create_element("p");
    assert_ne!(a.id(), b.id());
    assert_ne!(a.id(), rows);

    doc.append_child(rows, a).unwrap();
    doc.append_child(rows, b).unwrap();
    assert_eq!(
        doc.outline(10),
        vec!["#document", "  <div id=\"rows\">", "    <p>", "    <p>"]
    );
}

#[test]
fn clearing_then_refilling_keeps_document_order() {
    let mut doc = Document::new();
    let rows = container(&mut doc, "rows");
    for label in ["one", "two"] {
        let mut p = doc.create_element("p");
        p.set_text_content(&doc.allocator(), label);
        doc.append_child(rows, p).unwrap();
    }
    doc.clear_children(rows).unwrap();
    let p: Node = doc.create_text_node("three");
    doc.append_child(rows, p).unwrap();

    assert_eq!(doc.get_element_by_id("rows").unwrap().text_content(), "three");
}

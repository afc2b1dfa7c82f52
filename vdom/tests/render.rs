use std::cell::Cell;
use std::rc::Rc;

use vdom::{
    build, children, materialize, text_node, Attributes, Builder, Callback, Document, Mutation,
    Node, RenderTarget, Update,
};

// ============================================================================
// Materialize
// ============================================================================

#[test]
fn test_materialize_text() {
    let mut doc = Document::new();
    let live = materialize(&mut doc, &text_node("hello"));

    assert!(doc.is_text(live));
    assert_eq!(doc.text(live), Some("hello"));
    assert_eq!(doc.parent(live), None, "materialize must not attach");
}

#[test]
fn test_materialize_element_tree() {
    let tree = build(
        "div",
        Attributes::new().set("className", "container").set("id", "app"),
        children![
            build("h1", Attributes::new(), "Virtual DOM Demo"),
            build(
                "ul",
                Attributes::new(),
                vec![
                    build("li", Attributes::new().set("class", "item"), "Item 1"),
                    build("li", Attributes::new().set("class", "item"), "Item 2"),
                ]
            ),
        ],
    );
    let mut doc = Document::new();
    let live = materialize(&mut doc, &tree);

    assert_eq!(
        doc.to_html(live),
        "<div class=\"container\" id=\"app\"><h1>Virtual DOM Demo</h1>\
         <ul><li class=\"item\">Item 1</li><li class=\"item\">Item 2</li></ul></div>"
    );
    assert_eq!(
        doc.journal()
            .iter()
            .filter(|m| m.is_creation())
            .count(),
        tree.node_count()
    );
}

#[test]
fn test_materialize_registers_events() {
    let clicks = Rc::new(Cell::new(0));
    let counter = clicks.clone();
    let tree = build(
        "button",
        Attributes::new()
            .set("type", "button")
            .on("onClick", Callback::new(move |_| counter.set(counter.get() + 1)))
            .on("onMouseOver", Callback::new(|_| {})),
        "Press",
    );
    let mut doc = Document::new();
    let live = materialize(&mut doc, &tree);

    assert_eq!(doc.attribute(live, "type").as_deref(), Some("button"));
    assert_eq!(doc.attribute(live, "onClick"), None);
    assert_eq!(doc.listener_count(live, "click"), 1);
    assert_eq!(doc.listener_count(live, "mouseover"), 1);

    doc.dispatch(live, "click");
    doc.dispatch(live, "click");
    assert_eq!(clicks.get(), 2);
}

#[test]
fn test_materialize_children_in_order() {
    let tree = build("p", Attributes::new(), children!["a", 1, 'c', true, 2.5]);
    let mut doc = Document::new();
    let live = materialize(&mut doc, &tree);

    let texts: Vec<&str> = doc
        .children(live)
        .iter()
        .map(|&c| doc.text(c).unwrap())
        .collect();
    assert_eq!(texts, vec!["a", "1", "c", "true", "2.5"]);

    // every child is appended exactly once, to its own parent
    let appends = doc
        .journal()
        .iter()
        .filter(|m| matches!(m, Mutation::AppendChild { parent, .. } if *parent == live))
        .count();
    assert_eq!(appends, 5);
}

// ============================================================================
// Builder
// ============================================================================

#[test]
fn test_builder_methods_match_build() {
    let a = Node::element("ul")
        .class("list")
        .child(Node::element("li").child("one"))
        .children_from(vec![Some("two"), None]);
    let b = build(
        "ul",
        Attributes::new().set("class", "list"),
        children![build("li", Attributes::new(), "one"), "two"],
    );
    assert_eq!(a, b);
}

#[test]
fn test_builder_methods_ignore_text_nodes() {
    let node = Node::text("leaf").attr("id", "x").child("more");
    assert_eq!(node, Node::text("leaf"));
}

#[test]
fn test_tracked_builder_and_edits_round_trip_through_patch() {
    let b = Builder::tracked();
    let v1 = b.build(
        "div",
        Attributes::new().set("id", "app-root"),
        vec![b.build("p", Attributes::new(), "first")],
    );
    let mut doc = Document::new();
    let root = doc.root();
    vdom::mount(&mut doc, root, &v1);
    let app = doc.children(root)[0];

    let v2 = v1.with_child(b.build("h2", Attributes::new().set("className", "title"), "added"));
    vdom::patch(&mut doc, root, Some(&v2), Some(&v1), 0);
    assert_eq!(
        doc.inner_html(app),
        "<p>first</p><h2 class=\"title\">added</h2>"
    );

    let h2 = v2.children()[1].identity().unwrap();
    let v3 = v2.with_update(h2, &Update::new().text("renamed").class("subtitle"));
    vdom::patch(&mut doc, root, Some(&v3), Some(&v2), 0);
    assert_eq!(
        doc.inner_html(app),
        "<p>first</p><h2 class=\"subtitle\">renamed</h2>"
    );

    let p = v3.children()[0].identity().unwrap();
    let v4 = v3.without(p);
    vdom::patch(&mut doc, root, Some(&v4), Some(&v3), 0);
    assert_eq!(doc.inner_html(app), "<h2 class=\"subtitle\">renamed</h2>");

    // earlier snapshots are untouched by the edits
    assert_eq!(v1.children().len(), 1);
    assert_eq!(v2.children()[1].children()[0].text_value(), Some("added"));
}

// ============================================================================
// Printing
// ============================================================================

#[test]
fn test_display_matches_tree_shape() {
    let tree = build(
        "ul",
        Attributes::new(),
        vec![
            build("li", Attributes::new().set("className", "item"), "Item 1"),
            build("li", Attributes::new(), Vec::<Node>::new()),
        ],
    );
    assert_eq!(
        tree.to_string(),
        "<ul>\n  <li class=\"item\">\n    \"Item 1\"\n  </li>\n  <li></li>\n</ul>\n"
    );
}

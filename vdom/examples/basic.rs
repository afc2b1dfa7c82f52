use log::LevelFilter;
use vdom::{build, children, mount, patch, Attributes, Document, Mutation, Node};

fn main() {
    vdom::logging::init_file_logger("basic.log", LevelFilter::Debug)
        .expect("Failed to initialize logger");

    let mut doc = Document::with_root("div");
    let root = doc.root();

    let initial = page("container", "This is a demonstration of how Virtual DOM works.", false);
    mount(&mut doc, root, &initial);
    println!("Initial tree:\n{initial}");
    println!("Live HTML:\n{}\n", doc.inner_html(root));
    doc.take_journal();

    let updated = page("container active", "This is an updated demonstration.", true);
    patch(&mut doc, root, Some(&updated), Some(&initial), 0);

    println!("Updated tree:\n{updated}");
    println!("Live HTML:\n{}\n", doc.inner_html(root));

    println!("Applied {} mutations:", doc.journal().len());
    for mutation in doc.journal() {
        println!("  {}", describe(mutation));
    }
}

fn page(class: &str, text: &str, updated: bool) -> Node {
    let second = if updated { "Updated Item 2" } else { "Item 2" };
    let second_class = if updated { "item highlighted" } else { "item" };

    build(
        "div",
        Attributes::new().set("class", class),
        children![
            build("h1", Attributes::new(), "Virtual DOM Demo"),
            build("p", Attributes::new(), text),
            build(
                "ul",
                Attributes::new(),
                children![
                    build("li", Attributes::new().set("class", "item"), "Item 1"),
                    build("li", Attributes::new().set("class", second_class), second),
                    updated.then(|| build("li", Attributes::new().set("class", "item"), "Item 3")),
                ]
            ),
        ],
    )
}

fn describe(mutation: &Mutation) -> String {
    match mutation {
        Mutation::CreateElement { tag, .. } => format!("CREATE <{tag}>"),
        Mutation::CreateText { text, .. } => format!("CREATE \"{text}\""),
        Mutation::SetAttribute { name, value, .. } => format!("UPDATE {name}=\"{value}\""),
        Mutation::RemoveAttribute { name, .. } => format!("UPDATE removed {name}"),
        Mutation::SetText { text, .. } => format!("UPDATE text \"{text}\""),
        Mutation::AppendChild { parent, child } => format!("ADD {child:?} to {parent:?}"),
        Mutation::RemoveChild { index, .. } => format!("REMOVE child {index}"),
        other => format!("{other:?}"),
    }
}

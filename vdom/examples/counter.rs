use std::cell::Cell;
use std::rc::Rc;

use vdom::{
    build, children, Attributes, Callback, Component, ComponentError, Config, Document, Node,
    Stateful,
};

/// Counter whose button only records clicks; the embedding loop turns
/// recorded clicks into state changes.
struct Counter {
    clicks: Rc<Cell<u32>>,
    on_click: Callback,
}

impl Counter {
    fn new() -> Self {
        let clicks = Rc::new(Cell::new(0));
        let pending = clicks.clone();
        Self {
            clicks,
            on_click: Callback::new(move |_| pending.set(pending.get() + 1)),
        }
    }
}

impl Component for Counter {
    type Props = String;
    type State = u32;

    fn render(&self, title: &String, count: &u32) -> Result<Node, ComponentError> {
        Ok(build(
            "div",
            Attributes::new().set("className", "counter"),
            children![
                build("h1", Attributes::new(), title),
                build("p", Attributes::new(), format!("Clicked {count} times")),
                build(
                    "button",
                    Attributes::new().on("onClick", self.on_click.clone()),
                    "+1"
                ),
                (*count >= 3).then(|| build("em", Attributes::new(), "That's a lot of clicks")),
            ],
        ))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?.log_file("counter.log");
    vdom::logging::init_from_config(&config)?;

    let mut doc = Document::new();
    let body = doc.root();

    let counter = Counter::new();
    let clicks = counter.clicks.clone();
    let mut app: Stateful<Counter, Document> = Stateful::new(counter, "Counter".to_string());
    let live = app.mount(&mut doc, body)?;
    println!("{}", doc.to_html(live));

    for _ in 0..4 {
        let button = doc.children(live)[2];
        doc.dispatch(button, "click");

        let total = clicks.get();
        app.set_state(&mut doc, |count| *count = total)?;
        println!("{}", doc.to_html(live));
    }

    Ok(())
}

use std::fmt;

use super::attr::{live_name, AttrValue};
use super::node::Node;
use crate::text::truncate_to_width;

const LABEL_WIDTH: usize = 20;

impl Node {
    /// Short caption: `<li> .item` for elements, `"text..."` for text.
    pub fn label(&self) -> String {
        match self {
            Node::Text(text) => format!("\"{}\"", truncate_to_width(&text.value, LABEL_WIDTH, "...")),
            Node::Element(el) => match el.attributes.class() {
                Some(class) => format!("<{}> .{}", el.tag, class),
                None => format!("<{}>", el.tag),
            },
        }
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let pad = "  ".repeat(depth);
        match self {
            Node::Text(text) => writeln!(f, "{pad}\"{}\"", text.value),
            Node::Element(el) => {
                write!(f, "{pad}<{}", el.tag)?;
                for (name, value) in el.attributes.iter() {
                    // event bindings have no textual form
                    if let AttrValue::Static(value) = value {
                        write!(f, " {}=\"{}\"", live_name(name), value)?;
                    }
                }
                write!(f, ">")?;

                if el.children.is_empty() {
                    return writeln!(f, "</{}>", el.tag);
                }

                writeln!(f)?;
                for child in &el.children {
                    child.write_indented(f, depth + 1)?;
                }
                writeln!(f, "{pad}</{}>", el.tag)
            }
        }
    }
}

/// Indented, human readable dump of a tree.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use crate::event::Callback;
    use crate::node::{build, Attributes, Node};

    #[test]
    fn test_display_nested() {
        let tree = build(
            "div",
            Attributes::new()
                .set("className", "container")
                .on("onClick", Callback::new(|_| {})),
            vec![
                build("h1", Attributes::new(), "Title"),
                build("br", Attributes::new(), Vec::<Node>::new()),
            ],
        );

        let expected = "\
<div class=\"container\">
  <h1>
    \"Title\"
  </h1>
  <br></br>
</div>
";
        assert_eq!(tree.to_string(), expected);
    }

    #[test]
    fn test_label() {
        assert_eq!(Node::element("li").class("item").label(), "<li> .item");
        assert_eq!(Node::element("ul").label(), "<ul>");
        assert_eq!(Node::text("short").label(), "\"short\"");
        assert_eq!(
            Node::text("a fairly long piece of text").label(),
            "\"a fairly long piece ...\""
        );
    }
}

//! Grid containers. Their widths and offsets come from the frontend stylesheet.

use crate::markup::Node;

pub const ROW_CLASS: &str = "row";

pub fn row(children: impl IntoIterator<Item = Node>) -> Node {
    Node::element_with_class("div", ROW_CLASS, children)
}

/// `class` is the full grid class list, e.g. `"small-6 small-offset-3 end columns"`.
pub fn columns(class: impl Into<String>, children: impl IntoIterator<Item = Node>) -> Node {
    Node::element_with_class("div", class, children)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row() {
        let node = row([Node::text("x")]);
        assert_eq!(node.to_html(), r#"<div class="row">x</div>"#);
    }

    #[test]
    fn test_columns_keeps_class_list() {
        let node = columns("small-12 columns", Vec::new());
        assert_eq!(node.class(), Some("small-12 columns"));
        assert_eq!(node.tag(), Some("div"));
    }
}

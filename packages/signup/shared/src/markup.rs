use serde::{Deserialize, Serialize};

/// A static markup tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    Element {
        tag: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        class: Option<String>,
        #[serde(default)]
        children: Vec<Node>,
    },
    Text(String),
}

impl Node {
    pub fn element(tag: impl Into<String>, children: impl IntoIterator<Item = Node>) -> Self {
        Self::Element {
            tag: tag.into(),
            class: None,
            children: children.into_iter().collect(),
        }
    }

    pub fn element_with_class(
        tag: impl Into<String>,
        class: impl Into<String>,
        children: impl IntoIterator<Item = Node>,
    ) -> Self {
        Self::Element {
            tag: tag.into(),
            class: Some(class.into()),
            children: children.into_iter().collect(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Element { tag, .. } => Some(tag),
            Self::Text(_) => None,
        }
    }

    pub fn class(&self) -> Option<&str> {
        match self {
            Self::Element { class, .. } => class.as_deref(),
            Self::Text(_) => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Self::Element { children, .. } => children,
            Self::Text(_) => &[],
        }
    }

    /// All text in document order, like the DOM's `textContent`.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(text) => escape_into(text, out),
            Self::Element {
                tag,
                class,
                children,
            } => {
                out.push('<');
                out.push_str(tag);
                if let Some(class) = class {
                    out.push_str(" class=\"");
                    escape_into(class, out);
                    out.push('"');
                }
                out.push('>');
                for child in children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}

fn escape_into(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_content_order() {
        let node = Node::element(
            "div",
            [
                Node::element("h2", [Node::text("a")]),
                Node::text("b"),
                Node::element("p", [Node::element("span", [Node::text("c")])]),
            ],
        );
        assert_eq!(node.text_content(), "abc");
    }

    #[test]
    fn test_html_escaping() {
        let node = Node::element_with_class(
            "p",
            "x\"y",
            [Node::text("Tom & Jerry <3 'quotes'")],
        );
        assert_eq!(
            node.to_html(),
            "<p class=\"x&quot;y\">Tom &amp; Jerry &lt;3 &#39;quotes&#39;</p>"
        );
    }

    #[test]
    fn test_accessors() {
        let node = Node::element_with_class("div", "row", [Node::text("hi")]);
        assert_eq!(node.tag(), Some("div"));
        assert_eq!(node.class(), Some("row"));
        assert_eq!(node.children().len(), 1);

        let text = Node::text("hi");
        assert_eq!(text.tag(), None);
        assert_eq!(text.class(), None);
        assert!(text.children().is_empty());
    }

    #[test]
    fn test_serde() {
        let node = Node::element("p", [Node::text("Kindly,")]);
        let serialized = serde_json::to_string(&node).unwrap();
        assert_eq!(
            serialized,
            r#"{"element":{"tag":"p","children":[{"text":"Kindly,"}]}}"#
        );

        let deserialized: Node = serde_json::from_str(r#"{"element":{"tag":"p"}}"#).unwrap();
        assert_eq!(deserialized, Node::element("p", Vec::new()));
    }
}

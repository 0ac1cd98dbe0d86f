use dominator::{Dom, DomBuilder};
use space_signup_shared::Node;
use web_sys::HtmlElement;

/// Builds live DOM from a shared view tree.
pub fn render_node(node: &Node) -> Dom {
    match node {
        Node::Text(text) => dominator::text(text),
        Node::Element {
            tag,
            class,
            children,
        } => {
            let mut dom = DomBuilder::<HtmlElement>::new_html(tag);

            for name in class_names(class.as_deref()) {
                dom = dom.class(name);
            }

            dom.children(children.iter().map(render_node)).into_dom()
        }
    }
}

/// classList rejects whitespace, so a grid class list is added one name at a time.
fn class_names(class: Option<&str>) -> impl Iterator<Item = &str> {
    class.into_iter().flat_map(str::split_whitespace)
}

use space_signup_shared::{columns, row, Node};

use crate::prelude::*;

pub struct NotFound {}

impl NotFound {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {})
    }

    pub fn render(self: &Arc<Self>) -> Dom {
        render_node(&row([columns(
            "small-12 columns",
            [Node::element("h2", [Node::text("404 Not Found")])],
        )]))
    }
}

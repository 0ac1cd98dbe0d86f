use crate::{
    layout::{columns, row},
    markup::Node,
};

pub const HEADING: &str = "Hey there!";
pub const MESSAGE: &str = "Unfortunately, we are not accepting any new user sign up at this time. \
                           Please make sure to check that back soon.";
pub const CLOSING: &str = "Kindly,";
pub const SIGNATURE: &str = "The QuatroLabs Team.";

pub const COLUMNS_CLASS: &str = "small-6 small-offset-3 end columns";

/// Shown in place of the sign-up form while new registrations are closed.
pub struct BlockedNotice;

impl BlockedNotice {
    pub fn view() -> Node {
        row([columns(
            COLUMNS_CLASS,
            [
                Node::element("h2", [Node::text(HEADING)]),
                Node::element("p", [Node::text(MESSAGE)]),
                Node::element("p", [Node::text(CLOSING)]),
                Node::element("p", [Node::text(SIGNATURE)]),
            ],
        )])
    }
}

use space_signup_shared::BlockedNotice;

use crate::prelude::*;

pub struct Blocked {}

impl Blocked {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {})
    }

    pub fn render(self: &Arc<Self>) -> Dom {
        render_node(&BlockedNotice::view())
    }
}

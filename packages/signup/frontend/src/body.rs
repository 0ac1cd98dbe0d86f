use crate::{
    pages::{blocked::Blocked, not_found::NotFound},
    prelude::*,
};

pub struct Body {}

impl Body {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {})
    }

    pub fn render(self: &Arc<Self>) -> Dom {
        html!("div", {
            .class(crate::theme::CENTERED_MESSAGE)
            .child_signal(Route::signal().map(|route| {
                tracing::debug!(%route, "rendering route");

                Some(match route {
                    Route::Signup => Blocked::new().render(),
                    Route::NotFound => NotFound::new().render(),
                })
            }))
        })
    }
}

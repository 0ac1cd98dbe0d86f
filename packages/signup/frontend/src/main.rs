mod atoms;
mod body;
mod config;
mod logger;
mod pages;
mod prelude;
mod route;
mod theme;

use prelude::*;

use crate::body::Body;

pub fn main() {
    logger::init_logger();
    theme::init();

    let mount = match mount_point() {
        Ok(mount) => mount,
        Err(err) => {
            tracing::error!("{err:?}, mounting into body instead");
            dominator::body()
        }
    };

    tracing::info!(route = %Route::get(), "mounting sign-up satellite");

    dominator::append_dom(&mount, Body::new().render());
}

fn mount_point() -> Result<HtmlElement> {
    let Some(id) = CONFIG.mount_id else {
        return Ok(dominator::body());
    };

    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| anyhow!("no element with id {id:?} to mount into"))
}

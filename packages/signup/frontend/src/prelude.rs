pub use std::sync::Arc;

pub use anyhow::{anyhow, Result};
pub use dominator::{html, Dom};
pub use futures_signals::signal::{Signal, SignalExt};
pub use wasm_bindgen::prelude::*;
pub use wasm_bindgen::JsCast;
pub use web_sys::HtmlElement;

pub use crate::{atoms::*, config::CONFIG, route::Route};

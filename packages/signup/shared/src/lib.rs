//! Target-independent view tree for the sign-up satellite.
//!
//! The browser frontend turns these trees into live DOM. Anything else can
//! inspect them, or serialize them to HTML or JSON.

pub mod layout;
pub mod markup;
pub mod notice;

pub use layout::{columns, row};
pub use markup::Node;
pub use notice::BlockedNotice;

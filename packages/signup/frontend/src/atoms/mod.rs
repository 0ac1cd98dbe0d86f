mod markup;

pub use markup::*;

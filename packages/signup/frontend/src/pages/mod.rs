pub mod blocked;
pub mod not_found;

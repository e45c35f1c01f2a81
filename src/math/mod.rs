//! Mathematical helpers.
pub mod special_funs;

//! Core types for the bibliographic record model

mod name;
mod source;

pub use name::Name;
pub use source::Source;

//! Typed models for both sides of the bridge

mod attr;
mod field;
mod resource;
mod value;

pub use attr::*;
pub use field::*;
pub use resource::*;
pub use value::*;

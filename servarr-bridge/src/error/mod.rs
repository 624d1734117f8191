//! Error types and user-facing error strings

mod api;
mod diagnostic;
mod format;
mod not_found;

pub use api::*;
pub use diagnostic::*;
pub use format::*;
pub use not_found::*;
